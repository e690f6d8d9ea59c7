pub mod categorize;
pub mod dates;
pub mod error;
pub mod mask;
pub mod models;
pub mod normalize;
pub mod query;

#[cfg(test)]
mod tests;

pub use categorize::{PARENT_TYPES, categorize, is_parent_type};
pub use error::{CoreError, Result as CoreResult};
pub use mask::mask_identifier;
pub use models::backlog_result::{BacklogMetadata, BacklogResult};
pub use models::date_range::DateRange;
pub use models::filter_set::FilterSet;
pub use models::identity_field::IdentityField;
pub use models::normalized_item::NormalizedItem;
pub use models::project_summary::ProjectSummary;
pub use models::projects_page::ProjectsPage;
pub use models::raw_item::{RawItem, RawRelation};
pub use normalize::{extract_parent, normalize_item, work_item_web_url};
pub use query::{build_wiql, filter_clauses};
