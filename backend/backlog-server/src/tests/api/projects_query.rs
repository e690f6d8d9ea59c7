use crate::{ApiError, ProjectsQuery};

#[test]
fn test_defaults() {
    let query = ProjectsQuery::default();

    assert_eq!(query.top().unwrap(), 100);
    assert_eq!(query.skip().unwrap(), 0);
    assert_eq!(query.continuation_token(), None);
}

#[test]
fn test_top_bounds() {
    for top in [1, 500] {
        let query = ProjectsQuery {
            top: Some(top),
            ..Default::default()
        };
        assert_eq!(i64::from(query.top().unwrap()), top);
    }

    for top in [0, 501, -3] {
        let query = ProjectsQuery {
            top: Some(top),
            ..Default::default()
        };
        match query.top() {
            Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("top")),
            other => panic!("Expected Validation error for top={top}, got {other:?}"),
        }
    }
}

#[test]
fn test_negative_skip_rejected() {
    let query = ProjectsQuery {
        skip: Some(-1),
        ..Default::default()
    };
    assert!(matches!(query.skip(), Err(ApiError::Validation { .. })));
}

#[test]
fn test_empty_continuation_token_is_absent() {
    let query = ProjectsQuery {
        continuation_token: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(query.continuation_token(), None);
}
