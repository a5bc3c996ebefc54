use super::*;

#[test]
fn gender_options_list_codes_in_order() {
    assert_eq!(gender_options(), vec![("1".to_owned(), "Male"), ("2".to_owned(), "Female")]);
}

#[test]
fn label_for_missing_field_is_blank() {
    let mut labels = FieldLabels::new();
    labels.insert("age".to_owned(), "Enter a whole number.".to_owned());
    assert_eq!(label_for(&labels, "age"), "Enter a whole number.");
    assert_eq!(label_for(&labels, "name"), "");
}
