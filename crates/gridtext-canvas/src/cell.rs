#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A [`Cell`] is one column of the character grid. It is either blank,
//! the trailing half of a double-width glyph ([`Cell::Pad`]), or a
//! [`Glyph`]: a base character plus any presentation selectors appended
//! to it.
//!
//! # Invariants
//!
//! 1. A `Pad` cell only ever sits directly to the right of a `Glyph`
//!    cell; the writer creates the pair together and nothing else
//!    creates pads.
//! 2. A glyph of a space character is *occupied*, not blank. Blank means
//!    never written (or cleared), which is what overwrite policies test.

use std::fmt;

use smallvec::SmallVec;

/// A drawn character with any selector codepoints attached to it.
///
/// Stays inline for the overwhelmingly common one- or two-codepoint
/// case; longer selector runs spill to the heap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(SmallVec<[char; 2]>);

impl Glyph {
    /// Glyph holding the single codepoint `c`.
    #[must_use]
    pub fn new(c: char) -> Self {
        let mut chars = SmallVec::new();
        chars.push(c);
        Self(chars)
    }

    /// Append a codepoint, used for presentation selectors that modify
    /// the glyph in place.
    pub fn push(&mut self, c: char) {
        self.0.push(c);
    }

    /// The base character the glyph was created with.
    #[inline]
    #[must_use]
    pub fn base(&self) -> char {
        self.0[0]
    }

    /// All codepoints in drawing order, base first.
    #[inline]
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Number of codepoints including the base.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A glyph always has at least its base codepoint.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// One column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Never written, or cleared. Renders as a space.
    #[default]
    Blank,
    /// Trailing column of the double-width glyph immediately to the left.
    Pad,
    /// A drawn glyph occupying this column (and the next one when wide).
    Glyph(Glyph),
}

impl Cell {
    /// Cell holding the single codepoint `c`.
    #[must_use]
    pub fn glyph(c: char) -> Self {
        Self::Glyph(Glyph::new(c))
    }

    /// Whether this cell has never been written (or was cleared).
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Whether this cell is the trailing half of a wide glyph.
    #[inline]
    #[must_use]
    pub fn is_pad(&self) -> bool {
        matches!(self, Self::Pad)
    }

    /// Whether this cell holds a drawn glyph.
    #[inline]
    #[must_use]
    pub fn is_glyph(&self) -> bool {
        matches!(self, Self::Glyph(_))
    }

    /// The glyph in this cell, if any.
    #[inline]
    #[must_use]
    pub fn as_glyph(&self) -> Option<&Glyph> {
        match self {
            Self::Glyph(g) => Some(g),
            _ => None,
        }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Self::glyph(c)
    }
}

impl fmt::Display for Cell {
    /// Debug-oriented rendering: pads show as `▒` so wide-glyph structure
    /// stays visible. Terminal output goes through the grid's renderer,
    /// which strips pads instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, " "),
            Self::Pad => write!(f, "▒"),
            Self::Glyph(g) => write!(f, "{g}"),
        }
    }
}
