use super::*;

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolve_defaults_to_first_page() {
    let p = Pagination::resolve(None, 35, PAGE_SIZE);
    assert_eq!(p.page, 1);
    assert_eq!(p.page_count, 4);
    assert_eq!(p.offset(), 0);
    assert_eq!(p.limit(), 10);
}

#[test]
fn resolve_parses_requested_page() {
    let p = Pagination::resolve(Some("3"), 35, PAGE_SIZE);
    assert_eq!(p.page, 3);
    assert_eq!(p.offset(), 20);
}

#[test]
fn resolve_non_decimal_falls_back_to_first() {
    for raw in ["abc", "-2", "1.5", " 2", ""] {
        assert_eq!(Pagination::resolve(Some(raw), 35, PAGE_SIZE).page, 1, "raw={raw:?}");
    }
}

#[test]
fn resolve_past_end_falls_back_to_first() {
    let p = Pagination::resolve(Some("9"), 35, PAGE_SIZE);
    assert_eq!(p.page, 1);
    assert_eq!(p.offset(), 0);
}

#[test]
fn resolve_zero_rows_has_no_pages() {
    let p = Pagination::resolve(Some("1"), 0, PAGE_SIZE);
    assert_eq!(p.page, 1);
    assert_eq!(p.page_count, 0);
    assert_eq!(p.last_page(), 1);
    assert!(p.window().is_empty());
}

#[test]
fn resolve_exact_multiple_has_no_partial_page() {
    assert_eq!(Pagination::resolve(None, 30, PAGE_SIZE).page_count, 3);
}

// =============================================================================
// prev / next
// =============================================================================

#[test]
fn prev_from_first_stays_on_first() {
    assert_eq!(Pagination::resolve(None, 35, PAGE_SIZE).prev_page(), 1);
}

#[test]
fn next_from_last_stays_on_last() {
    let p = Pagination::resolve(Some("4"), 35, PAGE_SIZE);
    assert_eq!(p.next_page(), 4);
    assert_eq!(Pagination::resolve(Some("2"), 35, PAGE_SIZE).next_page(), 3);
}

// =============================================================================
// window
// =============================================================================

#[test]
fn window_covers_all_pages_when_few() {
    let p = Pagination::resolve(Some("2"), 45, PAGE_SIZE);
    assert_eq!(p.window(), 1..=5);
}

#[test]
fn window_pins_to_start_near_first_page() {
    let p = Pagination::resolve(Some("4"), 300, PAGE_SIZE);
    assert_eq!(p.window(), 1..=11);
}

#[test]
fn window_pins_to_end_near_last_page() {
    let p = Pagination::resolve(Some("28"), 300, PAGE_SIZE);
    assert_eq!(p.window(), 20..=30);
}

#[test]
fn window_centres_on_current_page() {
    let p = Pagination::resolve(Some("15"), 300, PAGE_SIZE);
    assert_eq!(p.window(), 10..=20);
}
