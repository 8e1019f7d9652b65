use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One named point in a partitioned cutter table.
///
/// Stored as `{ "group": "T", "name": "Thomas, J.", "cutter": "36" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceEntry {
    /// Upper-case first letter this entry is filed under
    pub group: String,
    pub name: String,
    pub cutter: String,
}

impl ReferenceEntry {
    pub fn new(group: &str, name: &str, cutter: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            cutter: cutter.to_string(),
        }
    }
}
