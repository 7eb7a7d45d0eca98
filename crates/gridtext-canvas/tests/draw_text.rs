//! Integration tests for width-aware drawing.
//!
//! Exercises the writer through realistic labeling scenarios:
//! - Diagram assembly (borders plus CJK and emoji labels)
//! - Layered draws with both overwrite policies
//! - Presentation selectors at cell and grid boundaries
//! - Style tagging alongside cell writes
//! - Property tests for render invariants

use gridtext_canvas::{Cell, CharGrid, DrawText, Overwrite, StyleGrid};
use gridtext_width::display_width;

// ============================================================================
// Diagram assembly
// ============================================================================

#[test]
fn boxed_diagram_with_cjk_and_emoji_labels() {
    let mut grid = CharGrid::new(20, 5);

    grid.draw_text(0, 0, "+------------------+", Overwrite::Always);
    grid.draw_text(0, 4, "+------------------+", Overwrite::Always);
    for row in 1..4 {
        grid.draw_text(0, row, "|", Overwrite::Always);
        grid.draw_text(19, row, "|", Overwrite::Always);
    }
    grid.draw_text(2, 1, "内存", Overwrite::Always);
    grid.draw_text(2, 2, "⚠\u{FE0F} 97%", Overwrite::Always);

    let expected = [
        "+------------------+",
        "| 内存             |",
        "| ⚠\u{FE0F} 97%           |",
        "|                  |",
        "+------------------+",
    ]
    .join("\n");
    assert_eq!(grid.render(), expected);
}

#[test]
fn centered_label_uses_measured_width() {
    let label = "中文OK";
    let mut grid = CharGrid::new(20, 1);

    let margin = (grid.width() as usize - display_width(label)) / 2;
    grid.draw_text(margin as u16, 0, label, Overwrite::Always);

    assert_eq!(
        grid.render_row(0).as_deref(),
        Some("       中文OK       ")
    );
}

#[test]
fn rows_are_independent() {
    let mut grid = CharGrid::new(8, 3);
    grid.draw_text(0, 1, "middle", Overwrite::Always);

    assert_eq!(grid.render_row(0).as_deref(), Some("        "));
    assert_eq!(grid.render_row(1).as_deref(), Some("middle  "));
    assert_eq!(grid.render_row(2).as_deref(), Some("        "));
}

// ============================================================================
// Layered draws
// ============================================================================

#[test]
fn underlay_flows_around_separators() {
    // Separators drawn first claim their columns; an IfBlank label is
    // blocked there but keeps advancing, so the tail stays aligned.
    let mut grid = CharGrid::new(11, 1);
    for col in [0, 5, 10] {
        grid.draw_text(col, 0, "|", Overwrite::Always);
    }
    grid.draw_text(1, 0, "abcdefgh", Overwrite::IfBlank);

    assert_eq!(grid.render_row(0).as_deref(), Some("|abcd|fgh |"));
}

#[test]
fn overlay_replaces_wide_content() {
    let mut grid = CharGrid::new(8, 1);
    grid.draw_text(0, 0, "中文中文", Overwrite::Always);
    grid.draw_text(0, 0, "[OK]", Overwrite::Always);

    // The overlay claims the first four columns; the second half of the
    // original label keeps its cells.
    assert_eq!(grid.render_row(0).as_deref(), Some("[OK]中文"));
}

#[test]
fn wide_underlay_pad_blocks_if_blank_overlay() {
    let mut grid = CharGrid::new(6, 1);
    grid.draw_text(0, 0, "中", Overwrite::Always);
    grid.draw_text(1, 0, "ab", Overwrite::IfBlank);

    // The pad at column 1 is occupied, so 'a' is blocked; 'b' lands in
    // the blank cell after it.
    assert!(grid.get(1, 0).is_some_and(Cell::is_pad));
    let b = grid.get(2, 0).and_then(Cell::as_glyph).map(|g| g.base());
    assert_eq!(b, Some('b'));
}

// ============================================================================
// Presentation selectors at boundaries
// ============================================================================

#[test]
fn selector_pad_clipped_at_grid_edge() {
    let mut grid = CharGrid::new(3, 1);
    grid.draw_text(0, 0, "ab⚠\u{FE0F}", Overwrite::Always);

    // The selector still attaches to the glyph; only its pad falls off
    // the edge and is dropped.
    let glyph = grid.get(2, 0).and_then(Cell::as_glyph).unwrap();
    assert_eq!(glyph.to_string(), "⚠\u{FE0F}");
    for col in 0..3 {
        assert!(!grid.get(col, 0).is_some_and(Cell::is_pad));
    }
    assert_eq!(grid.render_row(0).as_deref(), Some("ab⚠\u{FE0F}"));
}

#[test]
fn selector_never_retargets_an_underlay_glyph() {
    let mut grid = CharGrid::new(6, 1);
    grid.draw_text(0, 0, "X", Overwrite::Always);
    grid.draw_text(0, 0, "⚠\u{FE0F}y", Overwrite::IfBlank);

    // The warning sign was blocked, so its selector has nothing to
    // widen; X must stay a plain single-column glyph.
    let x = grid.get(0, 0).and_then(Cell::as_glyph).unwrap();
    assert_eq!(x.to_string(), "X");
    assert_eq!(grid.render_row(0).as_deref(), Some("Xy    "));
}

#[test]
fn upgraded_emoji_aligns_following_columns() {
    let mut grid = CharGrid::new(12, 2);
    grid.draw_text(0, 0, "⚠\u{FE0F} hot", Overwrite::Always);
    grid.draw_text(0, 1, "OK hot", Overwrite::Always);

    // Both rows place "hot" at the same columns: the upgraded emoji
    // spans two, exactly like the two-letter status.
    assert_eq!(grid.render_row(0).as_deref(), Some("⚠\u{FE0F} hot      "));
    assert_eq!(grid.render_row(1).as_deref(), Some("OK hot      "));
}

// ============================================================================
// Style tagging
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Info,
    Warn,
}

#[test]
fn severity_tags_cover_glyph_heads_only() {
    let mut grid = CharGrid::new(12, 2);
    let mut styles: StyleGrid<Severity> = StyleGrid::new(12, 2);

    grid.draw_text_styled(0, 0, "ok", Overwrite::Always, &mut styles, Severity::Info);
    grid.draw_text_styled(
        0,
        1,
        "⚠\u{FE0F} disk",
        Overwrite::Always,
        &mut styles,
        Severity::Warn,
    );

    assert_eq!(styles.get(0, 0), Some(&Severity::Info));
    assert_eq!(styles.get(1, 0), Some(&Severity::Info));
    assert_eq!(styles.get(2, 0), None);

    assert_eq!(styles.get(0, 1), Some(&Severity::Warn));
    assert_eq!(styles.get(1, 1), None); // selector pad
    assert_eq!(styles.get(2, 1), Some(&Severity::Warn)); // space glyph
    assert_eq!(styles.get(3, 1), Some(&Severity::Warn));
}

#[test]
fn layered_styled_draws_keep_earlier_tags_under_if_blank() {
    let mut grid = CharGrid::new(6, 1);
    let mut styles: StyleGrid<Severity> = StyleGrid::new(6, 1);

    grid.draw_text_styled(2, 0, "!!", Overwrite::Always, &mut styles, Severity::Warn);
    grid.draw_text_styled(0, 0, "aaaaaa", Overwrite::IfBlank, &mut styles, Severity::Info);

    assert_eq!(styles.get(0, 0), Some(&Severity::Info));
    assert_eq!(styles.get(2, 0), Some(&Severity::Warn));
    assert_eq!(styles.get(3, 0), Some(&Severity::Warn));
    assert_eq!(styles.get(4, 0), Some(&Severity::Info));
}

// ============================================================================
// Render vs Display
// ============================================================================

#[test]
fn render_strips_pads_display_keeps_them() {
    let mut grid = CharGrid::new(6, 1);
    grid.draw_text(0, 0, "中ab", Overwrite::Always);

    assert_eq!(grid.render_row(0).as_deref(), Some("中ab  "));
    assert_eq!(grid.to_string(), "中▒ab  ");
}

// ============================================================================
// Rendered width drift
// ============================================================================

// A rendered row measures exactly the grid width only while pads and
// wide-rendering glyphs pair up. Each test pins one way a draw breaks
// the pairing.

#[test]
fn widening_a_plain_glyph_shortens_the_measured_row() {
    // The writer widens whatever it wrote last, but the measurer only
    // upgrades emoji-capable symbols. 'a' plus selector spans two grid
    // cells yet measures one column.
    let mut grid = CharGrid::new(8, 1);
    grid.draw_text(0, 0, "a\u{FE0F}", Overwrite::Always);

    let row = grid.render_row(0).unwrap();
    assert_eq!(row, "a\u{FE0F}      ");
    assert_eq!(display_width(&row), 7);
}

#[test]
fn overwriting_a_wide_head_orphans_its_pad() {
    let mut grid = CharGrid::new(6, 1);
    grid.draw_text(0, 0, "中", Overwrite::Always);
    grid.draw_text(0, 0, "x", Overwrite::Always);

    // The pad at column 1 lost its glyph; rendering skips it, so the
    // row comes up one column short.
    assert!(grid.get(1, 0).is_some_and(Cell::is_pad));
    let row = grid.render_row(0).unwrap();
    assert_eq!(row, "x    ");
    assert_eq!(display_width(&row), 5);
}

#[test]
fn overwriting_a_pad_stretches_the_measured_row() {
    let mut grid = CharGrid::new(6, 1);
    grid.draw_text(0, 0, "中", Overwrite::Always);
    grid.draw_text(1, 0, "x", Overwrite::Always);

    // The wide head keeps rendering two columns while 'x' adds a
    // third over what used to be a two-column span.
    let row = grid.render_row(0).unwrap();
    assert_eq!(row, "中x    ");
    assert_eq!(display_width(&row), 7);
}

// ============================================================================
// Property tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn draw_ops() -> impl Strategy<Value = Vec<(u16, u16, String, bool)>> {
        proptest::collection::vec(
            (
                0u16..30,
                0u16..4,
                "[a-z 中文😀⚠\u{FE0F}]{0,20}",
                any::<bool>(),
            ),
            0..8,
        )
    }

    fn narrow_draw_ops() -> impl Strategy<Value = Vec<(u16, u16, String, bool)>> {
        proptest::collection::vec(
            (0u16..90, 0u16..4, "[a-z ]{0,20}", any::<bool>()),
            0..8,
        )
    }

    proptest! {
        /// Single-column labels layered in any order, clipped or not,
        /// keep every rendered row at the grid's display width. Only
        /// wide glyphs can drift it, when a later draw replaces half
        /// of one (see the drift tests above).
        #[test]
        fn single_width_layers_keep_rendered_row_width(ops in narrow_draw_ops()) {
            let mut grid = CharGrid::new(80, 4);
            for (col, row, text, overwrite) in &ops {
                let mode = if *overwrite { Overwrite::Always } else { Overwrite::IfBlank };
                grid.draw_text(*col, *row, text, mode);
            }
            for row in 0..grid.height() {
                let line = grid.render_row(row).unwrap();
                prop_assert_eq!(display_width(&line), grid.width() as usize);
            }
        }

        /// Rendered output never leaks the pad marker; that glyph is
        /// reserved for the debug Display form.
        #[test]
        fn rendered_rows_never_contain_pad_marker(ops in draw_ops()) {
            let mut grid = CharGrid::new(80, 4);
            for (col, row, text, overwrite) in &ops {
                let mode = if *overwrite { Overwrite::Always } else { Overwrite::IfBlank };
                grid.draw_text(*col, *row, text, mode);
            }
            prop_assert!(!grid.render().contains('▒'));
        }

        /// Drawing on one row leaves every other row untouched.
        #[test]
        fn draws_do_not_bleed_across_rows(
            row in 0u16..4,
            s in "[a-z中⚠\u{FE0F}]{0,20}"
        ) {
            let mut grid = CharGrid::new(64, 4);
            let before: Vec<Option<String>> =
                (0..4).map(|r| grid.render_row(r)).collect();
            grid.draw_text(0, row, &s, Overwrite::Always);
            for r in 0..4u16 {
                if r != row {
                    prop_assert_eq!(grid.render_row(r), before[r as usize].clone());
                }
            }
        }
    }
}
