use super::*;

fn labeler(id: i64, username: &str) -> Labeler {
    Labeler { id, username: username.to_owned(), group_ids: Vec::new() }
}

#[test]
fn excludes_current_members() {
    let all = vec![labeler(1, "ada"), labeler(2, "ben"), labeler(3, "cara")];
    let visible = available_labelers(&all, &[2], "");
    let ids: Vec<i64> = visible.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let all = vec![labeler(1, "Ada"), labeler(2, "ben"), labeler(3, "adrian")];
    let visible = available_labelers(&all, &[], "AD");
    let ids: Vec<i64> = visible.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn blank_search_keeps_everyone_not_excluded() {
    let all = vec![labeler(1, "ada"), labeler(2, "ben")];
    assert_eq!(available_labelers(&all, &[], "  ").len(), 2);
}

#[test]
fn empty_message_depends_on_search() {
    assert_eq!(empty_picker_message(""), "No available labelers to add.");
    assert_eq!(empty_picker_message("zzz"), "No labelers found matching your search.");
}
