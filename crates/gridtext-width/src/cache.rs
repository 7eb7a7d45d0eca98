#![forbid(unsafe_code)]

//! LRU width cache for repeated measurements.
//!
//! Label text tends to repeat across frames of the same diagram, so the
//! cache stores computed widths keyed by a 64-bit string hash and answers
//! repeats without rescanning.
//!
//! # Example
//! ```
//! use gridtext_width::WidthCache;
//!
//! let mut cache = WidthCache::new(1000);
//!
//! // First call scans the string
//! assert_eq!(cache.get_or_compute("Hello中文"), 9);
//!
//! // Second call hits the cache
//! assert_eq!(cache.get_or_compute("Hello中文"), 9);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::measure::display_width;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Counters describing cache behavior since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that had to scan the string.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; zero when nothing has been looked up.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache from strings to display widths.
///
/// Entries evict least-recently-used once capacity is reached.
///
/// # Hash Collisions
/// Keys are 64-bit FxHash values rather than owned strings, which keeps
/// the cache small at the cost of a theoretical collision returning the
/// wrong width. At 64 bits that is not a practical concern for label
/// text; callers that cannot tolerate it should measure directly with
/// [`display_width`].
///
/// # Thread Safety
/// Not thread-safe. Wrap in a mutex for shared use, or enable the
/// `thread_local_cache` feature and call [`cached_width`].
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` entries.
    ///
    /// A zero capacity is bumped to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity must be > 0");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache with [`DEFAULT_CACHE_CAPACITY`] entries.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Cached width of `text`, scanning and storing it on a miss.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        self.get_or_compute_with(text, display_width)
    }

    /// Like [`get_or_compute`](Self::get_or_compute) with a caller-supplied
    /// measurement function, for tests or nonstandard terminals.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        let hash = hash_text(text);

        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    /// Whether `text` is currently cached.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Cached width of `text`, or `None` without computing.
    ///
    /// Refreshes the entry in LRU order.
    #[must_use]
    pub fn get(&mut self, text: &str) -> Option<usize> {
        self.cache.get(&hash_text(text)).copied()
    }

    /// Cached width of `text` without touching LRU order.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<usize> {
        self.cache.peek(&hash_text(text)).copied()
    }

    /// Warm the cache with `text` without counting a miss.
    pub fn preload(&mut self, text: &str) {
        let hash = hash_text(text);
        if !self.cache.contains(&hash) {
            self.cache.put(hash, display_width(text));
        }
    }

    /// Warm the cache with several strings.
    pub fn preload_many<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) {
        for text in texts {
            self.preload(text);
        }
    }

    /// Drop all entries; statistics are untouched.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Zero the hit and miss counters.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Snapshot of the counters and occupancy.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Current number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(feature = "thread_local_cache")]
thread_local! {
    static THREAD_CACHE: std::cell::RefCell<WidthCache> =
        std::cell::RefCell::new(WidthCache::with_default_capacity());
}

/// Width of `text` through a per-thread cache.
#[cfg(feature = "thread_local_cache")]
pub fn cached_width(text: &str) -> usize {
    THREAD_CACHE.with(|cache| cache.borrow_mut().get_or_compute(text))
}

/// Drop every entry from this thread's cache.
#[cfg(feature = "thread_local_cache")]
pub fn clear_thread_cache() {
    THREAD_CACHE.with(|cache| cache.borrow_mut().clear());
}
