use super::*;
use crate::net::types::ImageRecord;

fn stat(tag_id: i64, percentage: f64, count: i64) -> TagStatistic {
    TagStatistic {
        tag_id,
        tag_name: format!("tag-{tag_id}"),
        count,
        total_labelers: 5,
        percentage,
    }
}

fn final_tag(tag_id: i64) -> FinalTag {
    FinalTag {
        id: tag_id * 100,
        tag_id,
        tag_name: format!("tag-{tag_id}"),
        is_admin_override: false,
        created_at: "2026-08-01T00:00:00Z".to_owned(),
    }
}

fn detail(final_tags: Vec<FinalTag>, has_admin_override: bool) -> ImageDetailData {
    ImageDetailData {
        image: ImageRecord {
            id: 1,
            filename: "a.png".to_owned(),
            filetype: "png".to_owned(),
            base64_data: String::new(),
            uploaded_at: String::new(),
        },
        tag_statistics: Vec::new(),
        final_tags,
        has_admin_override,
    }
}

#[test]
fn exactly_the_low_entry_is_flagged() {
    let stats = [stat(1, 40.0, 2), stat(2, 60.0, 3)];
    let flagged: Vec<i64> =
        stats.iter().filter(|s| below_threshold(s)).map(|s| s.tag_id).collect();
    assert_eq!(flagged, vec![1]);
}

#[test]
fn threshold_boundary_is_not_flagged() {
    assert!(!below_threshold(&stat(1, 50.0, 2)));
    assert!(below_threshold(&stat(1, 49.9, 2)));
}

#[test]
fn auto_generation_runs_only_without_tags_or_override() {
    assert!(needs_auto_generate(&detail(Vec::new(), false)));
    assert!(!needs_auto_generate(&detail(vec![final_tag(1)], false)));
    assert!(!needs_auto_generate(&detail(Vec::new(), true)));
}

#[test]
fn toggle_removes_a_present_tag() {
    let tags = vec![final_tag(1), final_tag(2)];
    assert_eq!(toggled_tag_ids(&tags, 1), vec![2]);
}

#[test]
fn toggle_appends_a_missing_tag() {
    let tags = vec![final_tag(1)];
    assert_eq!(toggled_tag_ids(&tags, 3), vec![1, 3]);
}

#[test]
fn toggle_on_empty_set_selects_the_tag() {
    assert_eq!(toggled_tag_ids(&[], 7), vec![7]);
}
