#![forbid(unsafe_code)]

//! Terminal display-width measurement for grid text.
//!
//! Everything needed to answer "how many columns does this label occupy",
//! without pulling in a full Unicode database:
//! - [`classify`] / [`WidthClass`] - per-codepoint width classification
//!   backed by compact sorted interval tables
//! - [`display_width`] - selector-aware width of a whole string
//! - [`max_line_width`] - widest line of multi-line text
//! - [`WidthCache`] - LRU cache for repeated measurements
//!
//! Widths follow terminal-grid conventions: CJK and wide emoji occupy
//! two columns, combining marks and joiners none, and the emoji
//! presentation selector (U+FE0F) upgrades the symbol just before it
//! from one column to two. Measurement never fails; unknown codepoints
//! count one column.
//!
//! # Example
//! ```
//! use gridtext_width::{WidthClass, classify, display_width, max_line_width};
//!
//! assert_eq!(display_width("Hello中文"), 9);
//! assert_eq!(display_width("⚠\u{FE0F} hot"), 6);
//!
//! assert_eq!(classify('中'), WidthClass::DoubleWidth);
//! assert_eq!(classify('\u{0301}'), WidthClass::ZeroWidth);
//!
//! assert_eq!(max_line_width("top\n中文中文\nbottom"), 8);
//! ```

pub mod cache;
pub mod classify;
pub mod measure;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};
pub use classify::{
    EMOJI_PRESENTATION_SELECTOR, WidthClass, classify, is_double_width,
    is_presentation_upgradable, is_zero_width,
};
pub use measure::{display_width, max_line_width};

#[cfg(feature = "thread_local_cache")]
pub use cache::{cached_width, clear_thread_cache};
