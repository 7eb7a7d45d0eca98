#![forbid(unsafe_code)]

//! Text writer for the character grid.
//!
//! [`DrawText`] places a label into a [`CharGrid`] cell by cell, applying
//! the same width rules [`gridtext_width`] uses for measurement: wide
//! glyphs take a head cell plus a [`Cell::Pad`], zero-width codepoints
//! vanish, and the emoji presentation selector widens the glyph written
//! just before it.
//!
//! The writer never fails. Cells that fall outside the grid are dropped
//! one at a time, so a label running off the right edge keeps whatever
//! prefix fits.
//!
//! # Example
//!
//! ```
//! use gridtext_canvas::{CharGrid, DrawText, Overwrite};
//!
//! let mut grid = CharGrid::new(10, 1);
//! grid.draw_text(0, 0, "中文", Overwrite::Always);
//! assert_eq!(grid.render_row(0).as_deref(), Some("中文      "));
//! ```

use gridtext_width::{EMOJI_PRESENTATION_SELECTOR, is_double_width, is_zero_width};

use crate::cell::{Cell, Glyph};
use crate::grid::{CharGrid, StyleGrid};

/// What to do when a glyph's head cell is already occupied.
///
/// Pads and bounds are unaffected: a pad is written whenever its glyph
/// is, and out-of-bounds cells are dropped under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace whatever is in the cell.
    #[default]
    Always,
    /// Write only into blank cells; occupied cells block the glyph but
    /// the cursor still advances past its columns.
    IfBlank,
}

/// Extension trait for drawing text on a grid.
pub trait DrawText {
    /// Write `text` left to right starting at (start_col, row).
    ///
    /// Wide glyphs occupy two columns (head plus pad), zero-width
    /// codepoints none. A presentation selector attaches to the last
    /// written glyph and widens it if it was drawn single; a selector
    /// with nothing written yet is dropped. Out-of-bounds cells are
    /// silently skipped per cell.
    fn draw_text(&mut self, start_col: u16, row: u16, text: &str, overwrite: Overwrite);

    /// Like [`draw_text`](Self::draw_text), also tagging every written
    /// glyph's head column in `styles` with `tag`.
    ///
    /// Pad columns stay untagged; the tag belongs to the glyph, and the
    /// pad has no content of its own.
    fn draw_text_styled<T: Copy>(
        &mut self,
        start_col: u16,
        row: u16,
        text: &str,
        overwrite: Overwrite,
        styles: &mut StyleGrid<T>,
        tag: T,
    );
}

impl DrawText for CharGrid {
    fn draw_text(&mut self, start_col: u16, row: u16, text: &str, overwrite: Overwrite) {
        draw_text_inner::<()>(self, start_col, row, text, overwrite, None);
    }

    fn draw_text_styled<T: Copy>(
        &mut self,
        start_col: u16,
        row: u16,
        text: &str,
        overwrite: Overwrite,
        styles: &mut StyleGrid<T>,
        tag: T,
    ) {
        draw_text_inner(self, start_col, row, text, overwrite, Some((styles, tag)));
    }
}

/// Shared writer behind both trait methods.
///
/// State is three locals: the column offset from `start_col`, the head
/// column of the last written glyph, and whether that glyph currently
/// spans two columns. Blocked and out-of-bounds glyphs advance the
/// offset without touching the other two, so a later selector can never
/// retarget a glyph that was not actually written.
fn draw_text_inner<T: Copy>(
    grid: &mut CharGrid,
    start_col: u16,
    row: u16,
    text: &str,
    overwrite: Overwrite,
    mut style: Option<(&mut StyleGrid<T>, T)>,
) {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("draw_text", start_col, row, len = text.len());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    if row >= grid.height() {
        return;
    }

    let mut offset: usize = 0;
    let mut last_written: Option<u16> = None;
    let mut last_double = false;

    for c in text.chars() {
        if c == EMOJI_PRESENTATION_SELECTOR {
            if let Some(col) = last_written {
                if let Some(cell) = grid.get_mut(col, row)
                    && let Cell::Glyph(glyph) = cell
                {
                    glyph.push(c);
                }
                if !last_double {
                    // Widening claims the next column regardless of
                    // overwrite policy; only bounds can drop the pad.
                    grid.set(col + 1, row, Cell::Pad);
                    last_double = true;
                    offset += 1;
                }
            }
            continue;
        }

        if is_zero_width(c) {
            // Invisible to the writer: no column, no state change, so a
            // following selector still sees the glyph before the mark.
            continue;
        }

        let width: usize = if is_double_width(c) { 2 } else { 1 };
        let col = u16::try_from(start_col as usize + offset).ok();

        let writable = col
            .and_then(|col| grid.get(col, row))
            .is_some_and(|cell| matches!(overwrite, Overwrite::Always) || cell.is_blank());

        if writable {
            // `col` is Some whenever `writable` holds.
            if let Some(col) = col {
                grid.set(col, row, Cell::Glyph(Glyph::new(c)));
                if width == 2 {
                    grid.set(col + 1, row, Cell::Pad);
                }
                if let Some((styles, tag)) = style.as_mut() {
                    styles.set(col, row, *tag);
                }
                last_written = Some(col);
                last_double = width == 2;
            }
        }

        offset += width;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(columns = offset, "text drawn");
}


#[cfg(test)]
mod proptests {
    use super::*;
    use gridtext_width::display_width;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn draw_never_panics(
            width in 1u16..30,
            height in 1u16..6,
            start_col in 0u16..40,
            row in 0u16..10,
            s in "[a-z 中文😀⚠\u{0301}\u{FE0F}]{0,30}"
        ) {
            let mut grid = CharGrid::new(width, height);
            grid.draw_text(start_col, row, &s, Overwrite::Always);
            grid.draw_text(start_col, row, &s, Overwrite::IfBlank);
            let _ = grid.render();
        }

        #[test]
        fn pads_follow_glyphs_after_one_draw(
            start_col in 0u16..20,
            s in "[a-z中文⚠\u{FE0F}]{0,20}"
        ) {
            let mut grid = CharGrid::new(48, 1);
            grid.draw_text(start_col, 0, &s, Overwrite::Always);
            for col in 0..grid.width() {
                if grid.get(col, 0).is_some_and(Cell::is_pad) {
                    prop_assert!(col > 0);
                    let left = grid.get(col - 1, 0);
                    prop_assert!(left.is_some_and(Cell::is_glyph));
                }
            }
        }

        #[test]
        fn occupied_columns_match_display_width(
            s in "[a-z 中文😀⚠]{0,20}"
        ) {
            // Selector-free text into a fresh grid: the writer claims
            // exactly the columns the scanner counts.
            let mut grid = CharGrid::new(64, 1);
            grid.draw_text(0, 0, &s, Overwrite::Always);
            let occupied = (0..grid.width())
                .filter(|&col| !grid.get(col, 0).is_some_and(Cell::is_blank))
                .count();
            prop_assert_eq!(occupied, display_width(&s));
        }

        #[test]
        fn rendered_row_width_matches_grid(
            start_col in 0u16..10,
            s in "([a-z]|中|⚠\u{FE0F}?){0,20}"
        ) {
            // Selectors ride only on the upgradable symbol here. Behind
            // any other glyph the writer widens a cell the measurer
            // counts single, and the rendered row drifts by a column.
            let mut grid = CharGrid::new(64, 1);
            grid.draw_text(start_col, 0, &s, Overwrite::Always);
            let row = grid.render_row(0).unwrap();
            prop_assert_eq!(display_width(&row), grid.width() as usize);
        }
    }
}
