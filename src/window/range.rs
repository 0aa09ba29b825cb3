//! Materialization range and per-item placement.

/// Contiguous span of item indices selected for materialization.
///
/// Both bounds are inclusive.
///
/// # Invariants
/// - `start <= end`
/// - `end <= item_count - 1` of the viewport it was computed from
///
/// The empty window (zero items) has no `Range` at all; see
/// [`Window::range`](super::Window::range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// First materialized index (inclusive).
    pub start: usize,
    /// Last materialized index (inclusive).
    pub end: usize,
}

impl Range {
    /// Create a range, enforcing `start <= end`.
    ///
    /// # Panics
    /// In debug builds, panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} > end {end}");
        Self { start, end }
    }

    /// Number of indices in the range. Always at least one: the empty
    /// window is represented by the absence of a `Range`, not by a
    /// degenerate one, so there is no `is_empty`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Iterate over the contained indices.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Where a materialized item sits on the scroll surface.
///
/// Offsets are absolute (from the start of the scroll surface), so the
/// presentation layer can position items without knowing the scroll
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Item index this placement describes.
    pub index: usize,
    /// Distance from the start of the scroll surface.
    pub offset: f64,
    /// Extent of the item (uniform across the list).
    pub extent: f64,
}
