//! Validated viewport geometry.

use thiserror::Error;

/// Errors raised when constructing or mutating a [`Viewport`].
///
/// Geometry problems are configuration errors: they are rejected eagerly at
/// the boundary rather than clamped to a default that would hide a caller
/// bug (e.g. a zero item extent silently rendering everything at offset 0).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewportError {
    /// Item extent must be a finite, strictly positive number.
    #[error("item extent must be finite and > 0, got {0}")]
    NonPositiveItemExtent(f64),

    /// Container extent must be a finite, non-negative number.
    #[error("container extent must be finite and >= 0, got {0}")]
    NegativeContainerExtent(f64),

    /// Scroll offset must be a finite number.
    #[error("scroll offset must be finite, got {0}")]
    NonFiniteScrollOffset(f64),
}

/// Geometry of a scrollable item list: the complete input to window
/// computation.
///
/// All fields are validated at construction; mutation goes through setters
/// so the invariants cannot be broken afterwards:
/// - `item_extent` is finite and strictly positive
/// - `container_extent` is finite and non-negative
/// - `scroll_offset` is finite and clamped into `[0, max_scroll_offset]`
///
/// A scroll offset is runtime input (it arrives on every scroll event), so
/// out-of-range values are clamped rather than rejected; the extents are
/// configuration and are rejected when invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    item_count: usize,
    item_extent: f64,
    container_extent: f64,
    overscan: usize,
    scroll_offset: f64,
}

impl Viewport {
    /// Create a viewport at scroll offset 0.
    ///
    /// # Errors
    /// Returns [`ViewportError`] if `item_extent` is not finite and
    /// strictly positive, or `container_extent` is not finite and
    /// non-negative.
    pub fn new(
        item_count: usize,
        item_extent: f64,
        container_extent: f64,
        overscan: usize,
    ) -> Result<Self, ViewportError> {
        if !item_extent.is_finite() || item_extent <= 0.0 {
            return Err(ViewportError::NonPositiveItemExtent(item_extent));
        }
        if !container_extent.is_finite() || container_extent < 0.0 {
            return Err(ViewportError::NegativeContainerExtent(container_extent));
        }
        Ok(Self {
            item_count,
            item_extent,
            container_extent,
            overscan,
            scroll_offset: 0.0,
        })
    }

    /// Number of items in the backing list.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Fixed extent (height or width) of a single item.
    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    /// Extent of the visible container.
    pub fn container_extent(&self) -> f64 {
        self.container_extent
    }

    /// Extra items materialized beyond the visible span, on both ends.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Current scroll offset from the start of the scroll surface.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Total extent of the scroll surface (`item_count * item_extent`).
    ///
    /// Callers size their scroll surface to this so native scroll
    /// affordances stay correct.
    pub fn total_extent(&self) -> f64 {
        self.item_count as f64 * self.item_extent
    }

    /// Largest meaningful scroll offset for the current geometry.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_extent() - self.container_extent).max(0.0)
    }

    /// Items that fit in the container, rounded up.
    pub fn visible_count(&self) -> usize {
        (self.container_extent / self.item_extent).ceil() as usize
    }

    /// Update the scroll offset, clamping into `[0, max_scroll_offset]`.
    ///
    /// # Errors
    /// Returns [`ViewportError::NonFiniteScrollOffset`] for NaN or
    /// infinite offsets.
    pub fn set_scroll_offset(&mut self, offset: f64) -> Result<(), ViewportError> {
        if !offset.is_finite() {
            return Err(ViewportError::NonFiniteScrollOffset(offset));
        }
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
        Ok(())
    }

    /// Replace the item count (e.g. after the backing list grows).
    ///
    /// Re-clamps the scroll offset: shrinking the list may invalidate the
    /// current offset.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll_offset());
    }

    /// Replace the container extent (e.g. after a host resize).
    ///
    /// # Errors
    /// Returns [`ViewportError::NegativeContainerExtent`] for negative or
    /// non-finite extents.
    pub fn set_container_extent(&mut self, container_extent: f64) -> Result<(), ViewportError> {
        if !container_extent.is_finite() || container_extent < 0.0 {
            return Err(ViewportError::NegativeContainerExtent(container_extent));
        }
        self.container_extent = container_extent;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll_offset());
        Ok(())
    }
}
