use super::*;

#[test]
fn both_branches_succeeding_yields_no_errors() {
    let (labelers, groups, errors) = merge_count_results(Ok(4), Ok(2));
    assert_eq!(labelers, 4);
    assert_eq!(groups, 2);
    assert!(errors.is_empty());
}

#[test]
fn failed_labeler_branch_keeps_group_count() {
    let (labelers, groups, errors) = merge_count_results(Err("boom".to_owned()), Ok(2));
    assert_eq!(labelers, 0);
    assert_eq!(groups, 2);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("labelers"));
    assert!(errors[0].contains("boom"));
}

#[test]
fn failed_group_branch_keeps_labeler_count() {
    let (labelers, groups, errors) = merge_count_results(Ok(4), Err("down".to_owned()));
    assert_eq!(labelers, 4);
    assert_eq!(groups, 0);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("groups"));
}

#[test]
fn both_branches_failing_reports_two_errors() {
    let (_, _, errors) =
        merge_count_results(Err("a".to_owned()), Err("b".to_owned()));
    assert_eq!(errors.len(), 2);
}
