use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kind of literary work, driving which suffix rule applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WorkCategory {
    SpecificTitle,
    BiographyCriticism,
    AutobiographyLiterary,
    AutobiographyNonliterary,
    CollectedEssays,
    CollectedPoems,
    CollectedNovels,
    CollectedPlays,
    Correspondence,
    SelectedWorks,
}

impl WorkCategory {
    pub const ALL: [WorkCategory; 10] = [
        WorkCategory::SpecificTitle,
        WorkCategory::BiographyCriticism,
        WorkCategory::AutobiographyLiterary,
        WorkCategory::AutobiographyNonliterary,
        WorkCategory::CollectedEssays,
        WorkCategory::CollectedPoems,
        WorkCategory::CollectedNovels,
        WorkCategory::CollectedPlays,
        WorkCategory::Correspondence,
        WorkCategory::SelectedWorks,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            WorkCategory::SpecificTitle => "specific-title",
            WorkCategory::BiographyCriticism => "biography-criticism",
            WorkCategory::AutobiographyLiterary => "autobiography-literary",
            WorkCategory::AutobiographyNonliterary => "autobiography-nonliterary",
            WorkCategory::CollectedEssays => "collected-essays",
            WorkCategory::CollectedPoems => "collected-poems",
            WorkCategory::CollectedNovels => "collected-novels",
            WorkCategory::CollectedPlays => "collected-plays",
            WorkCategory::Correspondence => "correspondence",
            WorkCategory::SelectedWorks => "selected-works",
        }
    }

    /// Fixed segment placed right after the author cutter, if any
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            WorkCategory::SpecificTitle => None,
            WorkCategory::BiographyCriticism | WorkCategory::AutobiographyLiterary => Some("Z5"),
            WorkCategory::AutobiographyNonliterary => Some("A1"),
            WorkCategory::CollectedEssays => Some("A16"),
            WorkCategory::CollectedPoems => Some("A17"),
            WorkCategory::CollectedNovels => Some("A15"),
            WorkCategory::CollectedPlays => Some("A19"),
            WorkCategory::Correspondence => Some("A14"),
            WorkCategory::SelectedWorks => Some("A6"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WorkCategory::SpecificTitle => "Specific Title by an Author",
            WorkCategory::BiographyCriticism => "Biography or Criticism of an Author",
            WorkCategory::AutobiographyLiterary => "Autobiography of a Literary Person",
            WorkCategory::AutobiographyNonliterary => "Autobiography of a Non-Literary Person",
            WorkCategory::CollectedEssays => "Collected Essays/Prose/Interviews",
            WorkCategory::CollectedPoems => "Collected Poems",
            WorkCategory::CollectedNovels => "Collected Novels/Stories",
            WorkCategory::CollectedPlays => "Collected Plays",
            WorkCategory::Correspondence => "Correspondence/Journals/Diaries",
            WorkCategory::SelectedWorks => "Selected Works (Plays/Novels/Poems)",
        }
    }
}

impl fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WorkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkCategory::ALL
            .into_iter()
            .find(|c| c.id() == s.trim())
            .ok_or_else(|| format!("Unknown work category: {}", s))
    }
}

/// Suffix segments produced for a literary work, in call-number order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LiteratureComposition {
    pub segments: Vec<String>,
    pub explanation: Vec<String>,
}
