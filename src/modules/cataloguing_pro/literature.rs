//! Literature suffix rules
//!
//! Builds the segments appended after the author cutter for literary works:
//! a fixed category prefix (`Z5`, `A17`, ...) followed by a cutter for the
//! title or editor, or a date code when no editor is known.

use crate::domain::CutterLookup;
use crate::models::{LiteratureComposition, WorkCategory};

/// Where the variable segment of a category comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentSource {
    Title,
    Editor,
    EditorOrYear,
    None,
}

fn segment_source(category: WorkCategory) -> SegmentSource {
    match category {
        WorkCategory::SpecificTitle | WorkCategory::AutobiographyLiterary => SegmentSource::Title,
        WorkCategory::BiographyCriticism => SegmentSource::Editor,
        WorkCategory::AutobiographyNonliterary => SegmentSource::None,
        WorkCategory::CollectedEssays
        | WorkCategory::CollectedPoems
        | WorkCategory::CollectedNovels
        | WorkCategory::CollectedPlays
        | WorkCategory::Correspondence
        | WorkCategory::SelectedWorks => SegmentSource::EditorOrYear,
    }
}

fn short_label(category: WorkCategory) -> &'static str {
    match category {
        WorkCategory::SpecificTitle => "Specific title",
        WorkCategory::BiographyCriticism => "Biography/Criticism",
        WorkCategory::AutobiographyLiterary => "Literary autobiography",
        WorkCategory::AutobiographyNonliterary => "Non-literary autobiography",
        WorkCategory::CollectedEssays => "Collected Essays",
        WorkCategory::CollectedPoems => "Collected Poems",
        WorkCategory::CollectedNovels => "Collected Novels/Stories",
        WorkCategory::CollectedPlays => "Collected Plays",
        WorkCategory::Correspondence => "Correspondence/Journals/Diaries",
        WorkCategory::SelectedWorks => "Selected Works",
    }
}

/// Century letter used by date cutters; anything unmapped counts as modern
fn century_letter(century: i32) -> char {
    match century {
        15 => 'A',
        16 => 'B',
        17 => 'C',
        18 => 'D',
        19 => 'E',
        20 => 'F',
        21 => 'G',
        _ => 'G',
    }
}

/// Date cutter for a publication year: century letter plus two-digit year.
///
/// The century is `year / 100 + 1`, so 1987 gives `F87`.
pub fn year_code(year: i32) -> String {
    let century = year.div_euclid(100) + 1;
    format!("{}{:02}", century_letter(century), year.rem_euclid(100))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Compose the literature segments for one work.
///
/// Failed title/editor lookups drop their segment instead of failing the
/// whole composition.
pub async fn compose(
    lookup: &dyn CutterLookup,
    category: WorkCategory,
    title: Option<&str>,
    editor: Option<&str>,
    publication_year: Option<i32>,
) -> LiteratureComposition {
    let mut composition = LiteratureComposition::default();
    let label = short_label(category);
    let prefix = category.prefix();

    if let Some(prefix) = prefix {
        composition.segments.push(prefix.to_string());
    }
    let lead = match prefix {
        Some(prefix) => format!("{}: .{} + ", label, prefix),
        None => String::new(),
    };

    match segment_source(category) {
        SegmentSource::None => {
            if let Some(prefix) = prefix {
                composition
                    .explanation
                    .push(format!("{}: Add .{} after author cutter", label, prefix));
            }
        }
        SegmentSource::Title => {
            if let Some(title) = present(title)
                && let Some(code) = sub_lookup(lookup, title).await
            {
                let what = if lead.is_empty() { "Title cutter" } else { "title cutter" };
                composition
                    .explanation
                    .push(format!("{}{} for \"{}\": {}", lead, what, title, code));
                composition.segments.push(code);
            }
        }
        SegmentSource::Editor | SegmentSource::EditorOrYear => {
            if let Some(editor) = present(editor) {
                if let Some(code) = sub_lookup(lookup, editor).await {
                    composition
                        .explanation
                        .push(format!("{}editor cutter for \"{}\": {}", lead, editor, code));
                    composition.segments.push(code);
                }
            } else if segment_source(category) == SegmentSource::EditorOrYear
                && let Some(year) = publication_year
            {
                let code = year_code(year);
                composition
                    .explanation
                    .push(format!("{}date cutter for {}: {}", lead, year, code));
                composition.segments.push(code);
            }
        }
    }

    composition
}

async fn sub_lookup(lookup: &dyn CutterLookup, name: &str) -> Option<String> {
    match lookup.lookup(name).await {
        Ok(result) => Some(result.code),
        Err(e) => {
            tracing::warn!("Skipping cutter segment for \"{}\": {}", name, e);
            None
        }
    }
}
