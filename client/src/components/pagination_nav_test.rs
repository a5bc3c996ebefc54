use super::*;

#[test]
fn page_href_appends_page_query() {
    assert_eq!(page_href("/courses", 4), "/courses?page=4");
}

#[test]
fn page_href_first_page_is_explicit() {
    assert_eq!(page_href("/comments", 1), "/comments?page=1");
}
