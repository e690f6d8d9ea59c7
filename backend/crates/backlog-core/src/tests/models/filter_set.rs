use crate::FilterSet;

#[test]
fn test_split_list_trims_and_drops_empty_segments() {
    assert_eq!(
        FilterSet::split_list(Some("Bug, Task,,User Story ")),
        Some(vec!["Bug".to_string(), "Task".to_string(), "User Story".to_string()])
    );
}

#[test]
fn test_split_list_empty_is_none() {
    assert_eq!(FilterSet::split_list(None), None);
    assert_eq!(FilterSet::split_list(Some("")), None);
    assert_eq!(FilterSet::split_list(Some(" , ")), None);
}

#[test]
fn test_default_filter_set_is_empty() {
    assert!(FilterSet::default().is_empty());
    assert_eq!(FilterSet::default().summarize(), "none");
}

#[test]
fn test_summarize_counts_only() {
    let filters = FilterSet {
        work_item_types: Some(vec!["Bug".into(), "Task".into()]),
        assigned_to: Some(vec!["secret@example.com".into()]),
        tags: Some("release".into()),
        ..FilterSet::default()
    };

    let summary = filters.summarize();
    assert_eq!(summary, "types=2|assignees=1|tags=1");
    assert!(!summary.contains("secret"));
}

#[test]
fn test_deserialize_partial_body() {
    let filters: FilterSet = serde_json::from_str(r#"{"states": ["Active"]}"#).unwrap();

    assert_eq!(filters.states, Some(vec!["Active".to_string()]));
    assert_eq!(filters.work_item_types, None);
    assert!(!filters.is_empty());
}
