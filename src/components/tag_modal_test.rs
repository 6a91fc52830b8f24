use super::*;

#[test]
fn empty_name_is_required() {
    let errors = validate_tag_form("", "");
    assert_eq!(errors.name, "Tag name is required");
    assert!(errors.description.is_empty());
    assert!(!errors.is_valid());
}

#[test]
fn whitespace_only_name_is_required() {
    let errors = validate_tag_form("   ", "");
    assert_eq!(errors.name, "Tag name is required");
}

#[test]
fn single_character_name_is_too_short() {
    let errors = validate_tag_form("x", "");
    assert_eq!(errors.name, "Tag name must be at least 2 characters");
}

#[test]
fn name_over_fifty_characters_is_too_long() {
    let errors = validate_tag_form(&"a".repeat(51), "");
    assert_eq!(errors.name, "Tag name must be less than 50 characters");
}

#[test]
fn description_over_two_hundred_characters_is_too_long() {
    let errors = validate_tag_form("car", &"d".repeat(201));
    assert_eq!(errors.description, "Description must be less than 200 characters");
}

#[test]
fn valid_form_passes_both_checks() {
    let errors = validate_tag_form("car", "four wheels");
    assert!(errors.is_valid());
}
