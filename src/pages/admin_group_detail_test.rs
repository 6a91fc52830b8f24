use super::*;
use crate::net::types::{Group, ImageSummary, Labeler};

fn detail() -> GroupDetailData {
    GroupDetailData {
        group: Group { id: 1, name: "streets".to_owned(), description: None },
        labelers: vec![
            Labeler { id: 4, username: "ada".to_owned(), group_ids: vec![1] },
            Labeler { id: 9, username: "ben".to_owned(), group_ids: vec![1] },
        ],
        tags: vec![],
        images: vec![ImageSummary {
            id: 20,
            filename: "a.png".to_owned(),
            filetype: "png".to_owned(),
            uploaded_at: "2026-08-01T00:00:00Z".to_owned(),
        }],
    }
}

#[test]
fn tabs_carry_section_counts() {
    let tabs = group_tabs(&detail());
    assert_eq!(tabs.len(), 3);
    assert_eq!(tabs[0].count, Some(2));
    assert_eq!(tabs[1].count, Some(0));
    assert_eq!(tabs[2].count, Some(1));
}

#[test]
fn member_ids_lists_current_labelers() {
    assert_eq!(member_ids(&detail()), vec![4, 9]);
}
