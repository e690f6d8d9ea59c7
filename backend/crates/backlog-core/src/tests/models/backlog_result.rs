use crate::tests::item;
use crate::{BacklogMetadata, BacklogResult, DateRange, FilterSet};

#[test]
fn test_metadata_echoes_inputs() {
    let range = DateRange::for_month(2024, 2).unwrap();
    let filters = FilterSet {
        states: Some(vec!["Active".into()]),
        ..FilterSet::default()
    };

    let metadata = BacklogMetadata::new("org", "P", Some(&range), Some(&filters));

    assert_eq!(metadata.start_date, "2024-02-01");
    assert_eq!(metadata.end_date, "2024-02-29");
    assert_eq!(metadata.organization, "org");
    assert_eq!(metadata.project, "P");
    assert_eq!(metadata.filters, "states=1");
}

#[test]
fn test_metadata_without_range_uses_none_marker() {
    let metadata = BacklogMetadata::new("org", "P", None, None);

    assert_eq!(metadata.start_date, "none");
    assert_eq!(metadata.end_date, "none");
    assert_eq!(metadata.filters, "none");
}

#[test]
fn test_result_totals_derived_from_buckets() {
    let metadata = BacklogMetadata::new("org", "P", None, None);
    let result = BacklogResult::new(
        vec![item(1, Some("Epic"))],
        vec![item(2, Some("Bug")), item(3, Some("Task"))],
        metadata,
    );

    assert_eq!(result.total_items, 3);
    assert_eq!(result.metadata.total_parents, 1);
    assert_eq!(result.metadata.total_children, 2);
}

#[test]
fn test_empty_result() {
    let result = BacklogResult::empty(BacklogMetadata::new("org", "P", None, None));

    assert_eq!(result.total_items, 0);
    assert!(result.parents.is_empty());
    assert!(result.children.is_empty());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total_items"], 0);
    assert_eq!(json["parents"], serde_json::json!([]));
}
