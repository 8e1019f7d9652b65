use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ResolutionResult, WorkCategory};

/// Type of catalog item being classified
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Standard,
    LiteratureP,
    Autobiography,
    MotionPicture,
}

impl ItemType {
    pub fn is_literature(&self) -> bool {
        matches!(self, ItemType::LiteratureP | ItemType::Autobiography)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationRequest {
    pub item_type: ItemType,
    /// Author surname
    pub author: String,
    pub edition: Option<u32>,
    pub category: Option<WorkCategory>,
    pub title: Option<String>,
    pub editor: Option<String>,
    pub publication_year: Option<i32>,
}

impl ClassificationRequest {
    pub fn standard(author: &str) -> Self {
        Self {
            item_type: ItemType::Standard,
            author: author.to_string(),
            edition: None,
            category: None,
            title: None,
            editor: None,
            publication_year: None,
        }
    }

    pub fn literature(author: &str, category: WorkCategory) -> Self {
        Self {
            item_type: ItemType::LiteratureP,
            category: Some(category),
            ..Self::standard(author)
        }
    }
}

/// A complete shelving code with the reasoning that produced it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CallNumber {
    /// Base code and segments joined with dots, e.g. `TT36.A17.W37`
    pub code: String,
    pub base: String,
    pub segments: Vec<String>,
    pub explanation: Vec<String>,
    pub category: Option<WorkCategory>,
    pub resolution: ResolutionResult,
}
