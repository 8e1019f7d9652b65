use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ReferenceEntry;

/// Outcome of resolving one name against a cutter table partition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolutionResult {
    /// Trimmed input as supplied by the caller
    pub input: String,
    pub first_letter: String,
    /// `first_letter` followed by the selected entry's cutter
    pub code: String,
    pub selected_entry: ReferenceEntry,
    pub explanation: Vec<String>,
    /// Up to two entries either side of the selection, in table order
    pub nearby_matches: Vec<NearbyMatch>,
}

/// A table entry shown next to the selection, with how the input compared to it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NearbyMatch {
    pub name: String,
    pub cutter: String,
    /// -1 when the input sorts before the entry, 0 when equal, 1 after
    pub comparison: i8,
    pub selected: bool,
}
