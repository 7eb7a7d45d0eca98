#![forbid(unsafe_code)]

//! Character grid storage.
//!
//! [`CharGrid`] is the 2D cell store labels are drawn into, and
//! [`StyleGrid`] is an optional parallel overlay of per-cell tags
//! (colors, link ids, whatever the caller attaches).
//!
//! # Layout
//!
//! Cells are stored in column-major order: `index = x * height + y`.
//! Diagram renderers address by (column, row) pair, never by raw index,
//! so the orientation is an internal detail of both grids.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Out-of-bounds writes are dropped per cell, never an error

use std::fmt;

use crate::cell::Cell;

/// A 2D grid of character cells.
///
/// # Example
///
/// ```
/// use gridtext_canvas::{CharGrid, Cell};
///
/// let mut grid = CharGrid::new(10, 3);
/// grid.set(0, 0, Cell::glyph('H'));
/// grid.set(1, 0, Cell::glyph('i'));
/// assert_eq!(grid.render_row(0).as_deref(), Some("Hi        "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CharGrid {
    /// Create a grid of blank cells with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "grid width must be > 0");
        assert!(height > 0, "grid height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a constructed grid; dimensions are nonzero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether (col, row) lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, col: u16, row: u16) -> bool {
        col < self.width && row < self.height
    }

    /// Convert (col, row) to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, col: u16, row: u16) -> Option<usize> {
        if self.in_bounds(col, row) {
            Some(col as usize * self.height as usize + row as usize)
        } else {
            None
        }
    }

    /// Cell at (col, row), or `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    /// Mutable cell at (col, row), or `None` out of bounds.
    #[inline]
    pub fn get_mut(&mut self, col: u16, row: u16) -> Option<&mut Cell> {
        self.index(col, row).map(|i| &mut self.cells[i])
    }

    /// Store `cell` at (col, row); out-of-bounds writes are dropped.
    ///
    /// Raw store: the text writer keeps glyph/pad pairs consistent, a
    /// caller going through `set` directly takes that on itself.
    #[inline]
    pub fn set(&mut self, col: u16, row: u16, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.fill(Cell::Blank);
    }

    /// Row `row` as terminal-ready text, or `None` out of bounds.
    ///
    /// Pads are dropped so the wide glyph to their left spans both
    /// columns naturally; blanks become spaces. The string's display
    /// width matches the grid width only while every pad still sits
    /// behind a glyph that renders wide. Clipping at the right edge,
    /// a later draw replacing a wide head or its pad, and a selector
    /// widening a glyph the measurer counts single each shift the
    /// measured width by one column.
    #[must_use]
    pub fn render_row(&self, row: u16) -> Option<String> {
        if row >= self.height {
            return None;
        }
        let mut out = String::with_capacity(self.width as usize);
        for col in 0..self.width {
            match &self.cells[col as usize * self.height as usize + row as usize] {
                Cell::Blank => out.push(' '),
                Cell::Pad => {}
                Cell::Glyph(g) => out.extend(g.chars()),
            }
        }
        Some(out)
    }

    /// All rows as terminal-ready text joined with newlines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }
            // Row index is in range by construction.
            if let Some(line) = self.render_row(row) {
                out.push_str(&line);
            }
        }
        out
    }
}

impl fmt::Display for CharGrid {
    /// Structural rendering: every cell shows through its own marker, so
    /// pads appear as `▒`. Use [`CharGrid::render`] for terminal output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                let cell = &self.cells[col as usize * self.height as usize + row as usize];
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Parallel overlay of optional per-cell tags.
///
/// Same column-major addressing as [`CharGrid`]; `None` means untagged.
/// The tag type carries whatever the renderer needs per cell.
#[derive(Debug, Clone)]
pub struct StyleGrid<T> {
    width: u16,
    height: u16,
    tags: Vec<Option<T>>,
}

impl<T> StyleGrid<T> {
    /// Create an untagged overlay with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "style grid width must be > 0");
        assert!(height > 0, "style grid height must be > 0");

        let size = width as usize * height as usize;
        let mut tags = Vec::new();
        tags.resize_with(size, || None);
        Self {
            width,
            height,
            tags,
        }
    }

    /// Overlay width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Overlay height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Whether (col, row) lies inside the overlay.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, col: u16, row: u16) -> bool {
        col < self.width && row < self.height
    }

    #[inline]
    fn index(&self, col: u16, row: u16) -> Option<usize> {
        if self.in_bounds(col, row) {
            Some(col as usize * self.height as usize + row as usize)
        } else {
            None
        }
    }

    /// Tag at (col, row), or `None` when untagged or out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, col: u16, row: u16) -> Option<&T> {
        self.index(col, row).and_then(|i| self.tags[i].as_ref())
    }

    /// Tag (col, row); out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, col: u16, row: u16, tag: T) {
        if let Some(i) = self.index(col, row) {
            self.tags[i] = Some(tag);
        }
    }

    /// Remove the tag at (col, row) if present.
    #[inline]
    pub fn unset(&mut self, col: u16, row: u16) {
        if let Some(i) = self.index(col, row) {
            self.tags[i] = None;
        }
    }

    /// Remove every tag.
    pub fn clear(&mut self) {
        for tag in &mut self.tags {
            *tag = None;
        }
    }
}
