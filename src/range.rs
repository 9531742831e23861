//! Compact byte-range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for a usize pair).
//! Supports documents up to 4GB in size.

/// Compact range into a text buffer.
///
/// # Example
/// ```
/// use md2html::Range;
///
/// let text = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(text), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the slice this range refers to.
    ///
    /// Range boundaries always fall on ASCII delimiter edges, so slicing
    /// cannot split a multi-byte character.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start as usize..self.end as usize]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
