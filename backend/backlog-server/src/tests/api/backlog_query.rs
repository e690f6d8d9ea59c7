use crate::{BacklogQuery, BacklogRequest};

#[test]
fn test_no_filter_params_yields_no_filters() {
    let query = BacklogQuery {
        project_name: Some("P".into()),
        ..Default::default()
    };
    assert!(query.filters().is_none());
}

#[test]
fn test_blank_filter_params_yield_no_filters() {
    let query = BacklogQuery {
        states: Some(" , ".into()),
        tags: Some("  ".into()),
        ..Default::default()
    };
    assert!(query.filters().is_none());
}

#[test]
fn test_comma_separated_lists_are_split_and_trimmed() {
    let query = BacklogQuery {
        work_item_types: Some("Bug, Task,,User Story".into()),
        tags: Some("urgent".into()),
        ..Default::default()
    };

    let filters = query.filters().unwrap();

    assert_eq!(
        filters.work_item_types,
        Some(vec!["Bug".to_string(), "Task".to_string(), "User Story".to_string()])
    );
    assert_eq!(filters.states, None);
    assert_eq!(filters.tags.as_deref(), Some("urgent"));
}

#[test]
fn test_query_converts_to_request() {
    let query = BacklogQuery {
        organization: Some("org".into()),
        project_name: Some("P".into()),
        year: Some(2024),
        month: Some(2),
        states: Some("Active".into()),
        ..Default::default()
    };

    let request = BacklogRequest::from(query);

    assert_eq!(request.organization.as_deref(), Some("org"));
    assert_eq!(request.project_name.as_deref(), Some("P"));
    assert_eq!(request.year, Some(2024));
    assert_eq!(request.month, Some(2));
    assert_eq!(
        request.filters.and_then(|f| f.states),
        Some(vec!["Active".to_string()])
    );
}
