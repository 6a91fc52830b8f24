use super::*;

fn image(id: i64, status: ImageStatus) -> LabelerImage {
    LabelerImage { id, filename: format!("img-{id}.png"), status }
}

#[test]
fn progress_counts_done_and_pending() {
    let images = vec![
        image(1, ImageStatus::Done),
        image(2, ImageStatus::Pending),
        image(3, ImageStatus::Done),
        image(4, ImageStatus::Pending),
    ];
    let stats = progress(&images);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.done, 2);
    assert_eq!(stats.pending, 2);
    assert!((stats.percentage - 50.0).abs() < f64::EPSILON);
}

#[test]
fn empty_group_has_zero_percentage() {
    let stats = progress(&[]);
    assert_eq!(stats.total, 0);
    assert!((stats.percentage - 0.0).abs() < f64::EPSILON);
}

#[test]
fn with_status_preserves_order() {
    let images = vec![
        image(3, ImageStatus::Pending),
        image(1, ImageStatus::Done),
        image(2, ImageStatus::Pending),
    ];
    let pending: Vec<i64> =
        with_status(&images, ImageStatus::Pending).iter().map(|i| i.id).collect();
    assert_eq!(pending, vec![3, 2]);
}
