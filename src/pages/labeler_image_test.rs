use super::*;

fn image(id: i64, status: ImageStatus) -> LabelerImage {
    LabelerImage { id, filename: format!("img-{id}.png"), status }
}

#[test]
fn toggle_adds_then_removes() {
    let once = toggled_selection(&[1, 2], 3);
    assert_eq!(once, vec![1, 2, 3]);
    let twice = toggled_selection(&once, 3);
    assert_eq!(twice, vec![1, 2]);
}

#[test]
fn toggle_keeps_other_selections() {
    assert_eq!(toggled_selection(&[4, 5, 6], 5), vec![4, 6]);
}

#[test]
fn next_pending_skips_the_current_image() {
    let images = [
        image(1, ImageStatus::Done),
        image(2, ImageStatus::Pending),
        image(3, ImageStatus::Pending),
    ];
    assert_eq!(next_pending_image(&images, 2), Some(3));
    assert_eq!(next_pending_image(&images, 9), Some(2));
}

#[test]
fn next_pending_is_none_when_everything_is_done() {
    let images = [image(1, ImageStatus::Done), image(2, ImageStatus::Done)];
    assert_eq!(next_pending_image(&images, 1), None);
}

#[test]
fn next_pending_is_none_when_only_the_current_image_remains() {
    let images = [image(1, ImageStatus::Done), image(2, ImageStatus::Pending)];
    assert_eq!(next_pending_image(&images, 2), None);
}

#[test]
fn suggestion_match_is_exact() {
    let suggestions = vec!["tree".to_owned(), "river".to_owned()];
    assert!(is_suggested(&suggestions, "tree"));
    assert!(!is_suggested(&suggestions, "Tree"));
    assert!(!is_suggested(&suggestions, "road"));
}
