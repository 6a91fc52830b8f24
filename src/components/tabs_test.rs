use super::*;

#[test]
fn tab_label_includes_count_when_present() {
    let tab = TabItem { id: "tags", label: "Tags", count: Some(4) };
    assert_eq!(tab_label(&tab), "Tags (4)");
}

#[test]
fn tab_label_omits_count_when_absent() {
    let tab = TabItem { id: "tags", label: "Tags", count: None };
    assert_eq!(tab_label(&tab), "Tags");
}
