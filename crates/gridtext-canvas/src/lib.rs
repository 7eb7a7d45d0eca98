#![forbid(unsafe_code)]

//! Character grid canvas: cells, grids, and width-aware text drawing.
//!
//! Measurement lives in [`gridtext_width`]; this crate applies the same
//! rules to storage, so a label's cell footprint always matches its
//! measured width.

pub mod cell;
pub mod draw;
pub mod grid;

pub use cell::{Cell, Glyph};
pub use draw::{DrawText, Overwrite};
pub use grid::{CharGrid, StyleGrid};
