use super::*;

#[test]
fn to_i64_passes_small_values() {
    assert_eq!(to_i64(0), 0);
    assert_eq!(to_i64(40), 40);
}

#[test]
fn to_i64_saturates() {
    assert_eq!(to_i64(u64::MAX), i64::MAX);
}

#[test]
fn page_three_slices_rows_twenty_to_thirty() {
    let p = Pagination::resolve(Some("3"), 45, PAGE_SIZE);
    assert_eq!(to_i64(p.offset()), 20);
    assert_eq!(to_i64(p.limit()), 10);
}
