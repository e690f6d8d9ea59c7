use crate::{DateRange, FilterSet, build_wiql, filter_clauses};

use chrono::NaiveDate;

fn full_filters() -> FilterSet {
    FilterSet {
        work_item_types: Some(vec!["Task".into(), "Bug".into()]),
        states: Some(vec!["Active".into(), "New".into()]),
        area_paths: Some(vec!["MyProject\\Area1".into(), "MyProject\\Area2".into()]),
        iteration_paths: Some(vec!["MyProject\\Sprint 1".into()]),
        assigned_to: Some(vec!["John Doe".into()]),
        tags: Some("test".into()),
    }
}

#[test]
fn test_filter_clauses_empty_set() {
    assert!(filter_clauses(&FilterSet::default()).is_empty());
}

#[test]
fn test_filter_clauses_empty_lists_add_nothing() {
    let filters = FilterSet {
        work_item_types: Some(vec![]),
        area_paths: Some(vec![]),
        tags: Some(String::new()),
        ..FilterSet::default()
    };

    assert!(filter_clauses(&filters).is_empty());
}

#[test]
fn test_filter_clauses_all_categories() {
    let clauses = filter_clauses(&full_filters());

    assert_eq!(
        clauses,
        vec![
            "[System.WorkItemType] IN ('Task', 'Bug')",
            "[System.State] IN ('Active', 'New')",
            "[System.AreaPath] UNDER 'MyProject\\Area1'",
            "[System.AreaPath] UNDER 'MyProject\\Area2'",
            "[System.IterationPath] UNDER 'MyProject\\Sprint 1'",
            "[System.AssignedTo] IN ('John Doe')",
            "[System.Tags] CONTAINS 'test'",
        ]
    );
}

#[test]
fn test_build_wiql_unfiltered() {
    let wiql = build_wiql("MyProject", None, None);

    assert_eq!(
        wiql,
        "SELECT [System.Id] FROM WorkItems WHERE [System.TeamProject] = 'MyProject' \
         ORDER BY [System.CreatedDate] DESC"
    );
}

#[test]
fn test_build_wiql_with_date_range() {
    let range = DateRange::for_month(2024, 2).unwrap();
    let wiql = build_wiql("P", Some(&range), None);

    assert!(wiql.contains(
        "[System.TeamProject] = 'P' AND [System.CreatedDate] >= '2024-02-01' \
         AND [System.CreatedDate] <= '2024-02-29'"
    ));
}

#[test]
fn test_build_wiql_with_single_bound() {
    let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 5, 1), None);
    let wiql = build_wiql("P", Some(&range), None);

    assert!(wiql.contains("[System.CreatedDate] >= '2024-05-01'"));
    assert!(!wiql.contains("<="));
}

#[test]
fn test_build_wiql_with_filters() {
    let wiql = build_wiql("P", None, Some(&full_filters()));

    assert!(wiql.starts_with("SELECT [System.Id] FROM WorkItems WHERE [System.TeamProject] = 'P' AND "));
    assert!(wiql.contains(" AND [System.Tags] CONTAINS 'test'"));
    assert!(wiql.ends_with("ORDER BY [System.CreatedDate] DESC"));
    assert_eq!(wiql.matches(" AND ").count(), 7);
}

#[test]
fn test_build_wiql_passes_quotes_through() {
    let filters = FilterSet {
        tags: Some("it's".into()),
        ..FilterSet::default()
    };

    assert!(build_wiql("P", None, Some(&filters)).contains("CONTAINS 'it's'"));
}
