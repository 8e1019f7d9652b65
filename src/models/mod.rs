pub mod call_number;
pub mod literature;
pub mod reference_entry;
pub mod resolution;

pub use call_number::{CallNumber, ClassificationRequest, ItemType};
pub use literature::{LiteratureComposition, WorkCategory};
pub use reference_entry::ReferenceEntry;
pub use resolution::{NearbyMatch, ResolutionResult};
