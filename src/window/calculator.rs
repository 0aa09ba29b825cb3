//! Window computation: which indices to materialize for a viewport.

use super::range::{Placement, Range};
use super::viewport::Viewport;

/// Result of a window computation.
///
/// Everything the presentation layer needs to materialize the right items:
/// the index range, an absolute placement per index, and the total extent
/// for sizing the scroll surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Materialized index span; `None` when the item list is empty.
    pub range: Option<Range>,
    /// One placement per index in `range`, in index order.
    pub placements: Vec<Placement>,
    /// Total scrollable extent (`item_count * item_extent`).
    pub total_extent: f64,
}

impl Window {
    /// Whether the window materializes nothing.
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }
}

/// Compute the materialization window for `viewport`.
///
/// Pure and synchronous: the result depends only on the viewport passed in,
/// with no memoization or debouncing. Callers re-invoke on every
/// scroll-offset change; each call is an idempotent recomputation, so the
/// materialized set is always consistent with the latest inputs.
///
/// The window is the strictly visible span widened by `overscan` items on
/// both ends, clamped to the valid index range:
///
/// ```text
/// visible_count = ceil(container_extent / item_extent)
/// start = clamp(floor(scroll_offset / item_extent) - overscan, 0, item_count - 1)
/// end   = clamp(start + visible_count + 2 * overscan, 0, item_count - 1)
/// ```
///
/// Geometry validity (positive item extent, finite values) is enforced by
/// [`Viewport`] construction, so computation itself cannot fail.
pub fn compute(viewport: &Viewport) -> Window {
    if viewport.item_count() == 0 {
        return Window {
            range: None,
            placements: Vec::new(),
            total_extent: 0.0,
        };
    }

    let last = viewport.item_count() - 1;
    let first_in_view = (viewport.scroll_offset() / viewport.item_extent()).floor() as usize;
    let start = first_in_view.saturating_sub(viewport.overscan()).min(last);
    // A tiny positive item extent makes visible_count saturate near
    // usize::MAX, so the sum must saturate too before clamping to last.
    let end = start
        .saturating_add(viewport.visible_count())
        .saturating_add(viewport.overscan().saturating_mul(2))
        .min(last);

    let extent = viewport.item_extent();
    let placements = (start..=end)
        .map(|index| Placement {
            index,
            offset: index as f64 * extent,
            extent,
        })
        .collect();

    Window {
        range: Some(Range::new(start, end)),
        placements,
        total_extent: viewport.total_extent(),
    }
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod calculator_tests;
