use super::*;

#[test]
fn create_form_requires_both_fields() {
    assert!(validate_new_labeler("", "").is_err());
    assert!(validate_new_labeler("ada", "").is_err());
    assert!(validate_new_labeler("", "pw").is_err());
    assert!(validate_new_labeler("ada", "pw").is_ok());
}

#[test]
fn whitespace_username_is_rejected() {
    assert!(validate_new_labeler("  ", "pw").is_err());
}
