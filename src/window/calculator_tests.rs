//! Tests for window computation.

use super::*;

fn viewport(
    item_count: usize,
    item_extent: f64,
    container_extent: f64,
    overscan: usize,
    scroll_offset: f64,
) -> Viewport {
    let mut vp = Viewport::new(item_count, item_extent, container_extent, overscan).unwrap();
    vp.set_scroll_offset(scroll_offset).unwrap();
    vp
}

#[test]
fn worked_example_from_design_review() {
    // 1000 items of extent 50 in a 500-extent container, overscan 2,
    // scrolled to 1000: 10 visible, start 18, end 32.
    let vp = viewport(1000, 50.0, 500.0, 2, 1000.0);
    let window = compute(&vp);
    let range = window.range.unwrap();
    assert_eq!(vp.visible_count(), 10);
    assert_eq!(range.start, 18);
    assert_eq!(range.end, 32);
    assert_eq!(window.total_extent, 50_000.0);
}

#[test]
fn empty_list_yields_empty_window() {
    let vp = viewport(0, 50.0, 500.0, 2, 0.0);
    let window = compute(&vp);
    assert!(window.is_empty());
    assert!(window.placements.is_empty());
    assert_eq!(window.total_extent, 0.0);
}

#[test]
fn start_clamps_to_zero_near_top() {
    let vp = viewport(100, 10.0, 50.0, 5, 0.0);
    let range = compute(&vp).range.unwrap();
    assert_eq!(range.start, 0);
}

#[test]
fn end_clamps_to_last_index_near_bottom() {
    let mut vp = Viewport::new(20, 10.0, 50.0, 3).unwrap();
    vp.set_scroll_offset(vp.max_scroll_offset()).unwrap();
    let range = compute(&vp).range.unwrap();
    assert_eq!(range.end, 19);
    assert!(range.start <= range.end);
}

#[test]
fn denormal_item_extent_clamps_end_without_overflow() {
    // container / extent overflows any integer type here; the window must
    // clamp to the whole list instead of wrapping or panicking.
    let vp = viewport(10, 1e-300, 1.0, 1, 0.0);
    let window = compute(&vp);
    assert_eq!(window.range.unwrap(), Range::new(0, 9));
    assert_eq!(window.placements.len(), 10);
}

#[test]
fn single_item_list_materializes_that_item() {
    let vp = viewport(1, 40.0, 400.0, 4, 0.0);
    let range = compute(&vp).range.unwrap();
    assert_eq!(range, Range::new(0, 0));
}

#[test]
fn placements_are_absolute_multiples_of_extent() {
    let vp = viewport(100, 25.0, 100.0, 1, 250.0);
    let window = compute(&vp);
    let range = window.range.unwrap();
    assert_eq!(window.placements.len(), range.len());
    for (placement, index) in window.placements.iter().zip(range.indices()) {
        assert_eq!(placement.index, index);
        assert_eq!(placement.offset, index as f64 * 25.0);
        assert_eq!(placement.extent, 25.0);
    }
}

#[test]
fn window_covers_at_least_the_visible_span() {
    let vp = viewport(1000, 50.0, 500.0, 0, 12_345.0);
    let range = compute(&vp).range.unwrap();
    assert!(range.len() >= vp.visible_count().min(vp.item_count()));
}

#[test]
fn recomputation_is_pure_with_no_memoized_staleness() {
    // Same inputs twice, with an intervening mutation that is then
    // reverted: all three results must be identical.
    let mut vp = viewport(500, 20.0, 200.0, 2, 600.0);
    let first = compute(&vp);
    let second = compute(&vp);
    assert_eq!(first, second);

    vp.set_scroll_offset(4_000.0).unwrap();
    let moved = compute(&vp);
    assert_ne!(first, moved);

    vp.set_scroll_offset(600.0).unwrap();
    let reverted = compute(&vp);
    assert_eq!(first, reverted);
}

#[test]
fn overscan_widens_both_ends_when_room_allows() {
    let plain = viewport(1000, 10.0, 100.0, 0, 5_000.0);
    let padded = viewport(1000, 10.0, 100.0, 3, 5_000.0);
    let plain_range = compute(&plain).range.unwrap();
    let padded_range = compute(&padded).range.unwrap();
    assert_eq!(padded_range.start, plain_range.start - 3);
    assert_eq!(padded_range.end, plain_range.end + 3);
}
