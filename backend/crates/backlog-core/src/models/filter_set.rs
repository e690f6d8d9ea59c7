use serde::{Deserialize, Serialize};

/// Optional filter criteria applied on top of the project/date constraints.
///
/// Every field is independent. An empty list or an empty tag adds no clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub work_item_types: Option<Vec<String>>,
    pub states: Option<Vec<String>>,
    pub area_paths: Option<Vec<String>>,
    pub iteration_paths: Option<Vec<String>>,
    pub assigned_to: Option<Vec<String>>,
    pub tags: Option<String>,
}

impl FilterSet {
    /// Split a comma-separated query parameter into a list.
    ///
    /// Segments are trimmed and empty segments dropped; a value with no
    /// remaining segments yields `None`.
    pub fn split_list(value: Option<&str>) -> Option<Vec<String>> {
        let items: Vec<String> = value?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if items.is_empty() { None } else { Some(items) }
    }

    /// True when no field would add a clause to the query.
    pub fn is_empty(&self) -> bool {
        [
            &self.work_item_types,
            &self.states,
            &self.area_paths,
            &self.iteration_paths,
            &self.assigned_to,
        ]
        .iter()
        .all(|list| list.as_ref().is_none_or(Vec::is_empty))
            && self.tag().is_none()
    }

    /// Tag filter, treating an empty string as absent
    pub fn tag(&self) -> Option<&str> {
        self.tags.as_deref().filter(|t| !t.is_empty())
    }

    /// Summary safe for logs: counts only, never the values themselves.
    pub fn summarize(&self) -> String {
        let counted = [
            ("types", &self.work_item_types),
            ("states", &self.states),
            ("areas", &self.area_paths),
            ("iterations", &self.iteration_paths),
            ("assignees", &self.assigned_to),
        ];

        let mut parts: Vec<String> = counted
            .iter()
            .filter_map(|(name, list)| match list {
                Some(values) if !values.is_empty() => Some(format!("{name}={}", values.len())),
                _ => None,
            })
            .collect();

        if self.tag().is_some() {
            parts.push(String::from("tags=1"));
        }

        if parts.is_empty() {
            String::from("none")
        } else {
            parts.join("|")
        }
    }
}
