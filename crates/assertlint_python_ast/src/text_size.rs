//! Byte offsets and ranges into the source text a tree was parsed from.
//!
//! Ranges are opaque to the analysis itself: they are attached to nodes by
//! whichever frontend built the tree and are passed through unchanged into
//! diagnostics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A byte offset into the source text.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextSize(u32);

impl TextSize {
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for TextSize {
    fn from(offset: u32) -> Self {
        Self(offset)
    }
}

impl From<TextSize> for u32 {
    fn from(size: TextSize) -> Self {
        size.0
    }
}

impl fmt::Debug for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open range of byte offsets.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextRange {
    /// Creates a new range.
    ///
    /// # Panics
    /// If `end < start`.
    pub fn new(start: TextSize, end: TextSize) -> Self {
        assert!(start <= end);
        Self { start, end }
    }

    /// An empty range anchored at `offset`.
    pub const fn empty(offset: TextSize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn start(self) -> TextSize {
        self.start
    }

    pub const fn end(self) -> TextSize {
        self.end
    }

    pub const fn len(self) -> u32 {
        self.end.to_u32() - self.start.to_u32()
    }

    pub const fn is_empty(self) -> bool {
        self.start.to_u32() == self.end.to_u32()
    }

    pub fn contains(self, offset: TextSize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

/// Anything that occupies a range of the source text.
pub trait Ranged {
    fn range(&self) -> TextRange;

    fn start(&self) -> TextSize {
        self.range().start()
    }

    fn end(&self) -> TextSize {
        self.range().end()
    }
}

impl Ranged for TextRange {
    fn range(&self) -> TextRange {
        *self
    }
}

impl<T> Ranged for &T
where
    T: Ranged,
{
    fn range(&self) -> TextRange {
        T::range(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{TextRange, TextSize};

    #[test]
    fn contains() {
        let range = TextRange::new(TextSize::new(4), TextSize::new(10));
        assert!(range.contains(TextSize::new(4)));
        assert!(range.contains(TextSize::new(9)));
        assert!(!range.contains(TextSize::new(10)));
        assert!(!range.contains(TextSize::new(3)));
    }

    #[test]
    fn empty() {
        let range = TextRange::empty(TextSize::new(7));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.start(), range.end());
    }
}
