use super::*;

#[test]
fn add_comment_url_carries_course_id_as_uid() {
    assert_eq!(add_comment_url(42), "/student/addcomment/?uid=42");
}

#[test]
fn add_comment_url_starts_with_endpoint_path() {
    assert!(add_comment_url(7).starts_with(ADD_COMMENT_PATH));
}

#[test]
fn input_id_prefixes_field_name() {
    assert_eq!(input_id("title"), "id_title");
    assert_eq!(input_id("overall_score"), "id_overall_score");
}
