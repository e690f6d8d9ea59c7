use crate::{ProjectSummary, ProjectsPage};

fn project(name: &str) -> ProjectSummary {
    ProjectSummary {
        id: format!("id-{name}"),
        name: name.to_string(),
        ..ProjectSummary::default()
    }
}

#[test]
fn test_page_with_token_has_more() {
    let page = ProjectsPage::new(vec![project("a"), project("b")], Some(10), Some("tok".into()));

    assert_eq!(page.count, 2);
    assert_eq!(page.total_count, Some(10));
    assert!(page.has_more);
    assert_eq!(page.continuation_token.as_deref(), Some("tok"));
}

#[test]
fn test_page_without_token_is_last() {
    let page = ProjectsPage::new(vec![project("a")], None, None);

    assert!(!page.has_more);
    assert_eq!(page.continuation_token, None);
}
