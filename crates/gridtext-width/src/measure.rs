#![forbid(unsafe_code)]

//! String display-width measurement.
//!
//! [`display_width`] sums per-codepoint widths from [`classify`] while
//! tracking one codepoint of lookback for the emoji presentation
//! selector: a selector immediately after a presentation-upgradable
//! codepoint adds the second column of that glyph, anywhere else it is
//! inert. The scan is a single forward pass with O(1) state, so width is
//! O(n) in the input length.
//!
//! # Example
//!
//! ```
//! use gridtext_width::display_width;
//!
//! assert_eq!(display_width("Hello"), 5);
//! assert_eq!(display_width("Hello中文"), 9);
//! assert_eq!(display_width("⚠"), 1);
//! assert_eq!(display_width("⚠\u{FE0F}"), 2);
//! ```

use crate::classify::{EMOJI_PRESENTATION_SELECTOR, WidthClass, classify};

/// Number of terminal columns `text` occupies on one line.
///
/// Sums codepoint widths in one pass: double-width codepoints count two
/// columns, zero-width codepoints none, everything else one. A
/// presentation selector directly after an upgradable codepoint adds one
/// more column; a selector with no eligible predecessor (start of string,
/// or after anything consumed or non-upgradable) adds nothing. Newlines
/// and other control characters count one column each; use
/// [`max_line_width`] for multi-line text.
///
/// Pure ASCII is answered from the byte length without scanning.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }

    let mut width = 0usize;
    // Whether the previous codepoint may still take a selector upgrade.
    let mut upgradable = false;
    for c in text.chars() {
        if c == EMOJI_PRESENTATION_SELECTOR {
            if upgradable {
                width += 1;
            }
            upgradable = false;
            continue;
        }
        match classify(c) {
            WidthClass::ZeroWidth => upgradable = false,
            WidthClass::DoubleWidth => {
                width += 2;
                upgradable = false;
            }
            WidthClass::PresentationUpgradable => {
                width += 1;
                upgradable = true;
            }
            WidthClass::SingleWidth => {
                width += 1;
                upgradable = false;
            }
        }
    }
    width
}

/// Widest line of `text`, splitting on `'\n'` only.
///
/// Selector lookback does not cross line boundaries: a line cannot start
/// with an effective upgrade. Returns 0 for the empty string.
#[must_use]
pub fn max_line_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}
