//! Cutter number resolution
//!
//! A name that falls between two table entries takes the code of the entry
//! sorting BEFORE it, never the closer or the following one. Names before the
//! first entry take the first entry, names after the last take the last.

use std::cmp::Ordering;

use crate::domain::ResolutionError;
use crate::models::{NearbyMatch, ReferenceEntry, ResolutionResult};

/// Letters sharing the merged vowels partition
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

const NEARBY_WINDOW: usize = 2;

/// Partition id holding the entries for a first letter
pub fn partition_id(letter: char) -> String {
    let upper = letter.to_ascii_uppercase();
    if VOWELS.contains(&upper) {
        "vowels".to_string()
    } else {
        letter.to_lowercase().collect()
    }
}

/// File name a partition is stored under
pub fn partition_file(partition: &str) -> String {
    format!("cutter_table_{}.json", partition)
}

/// Upper-cased first character of a trimmed name
pub fn first_letter(name: &str) -> Option<String> {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
}

/// Lower-cased entry name with any `, qualifier` tail removed.
///
/// `"Smith, J."` compares as `"smith"`.
pub fn comparison_key(name: &str) -> String {
    let head = match name.find(',') {
        Some(pos) => &name[..pos],
        None => name,
    };
    head.trim().to_lowercase()
}

/// Where a name falls among the sorted comparison keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Exact(usize),
    Between(usize, usize),
    BeforeFirst,
    AfterLast,
}

fn place(needle: &str, keys: &[String]) -> Placement {
    // A qualifier can push a key out of name order ("smith adam" vs "smith, a."),
    // so an exact key wins wherever it sits.
    if let Some(idx) = keys.iter().position(|k| k == needle) {
        return Placement::Exact(idx);
    }

    for (i, key) in keys.iter().enumerate() {
        if needle.cmp(key.as_str()) == Ordering::Less {
            return if i == 0 {
                Placement::BeforeFirst
            } else {
                Placement::Between(i - 1, i)
            };
        }
    }

    Placement::AfterLast
}

fn ordering_value(ord: Ordering) -> i8 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Resolve a surname (or title) against a cutter table.
///
/// The table may hold several letter groups and need not be sorted; only the
/// entries filed under the name's first letter are considered.
pub fn resolve(surname: &str, table: &[ReferenceEntry]) -> Result<ResolutionResult, ResolutionError> {
    let input = surname.trim();
    let letter = first_letter(input).ok_or(ResolutionError::EmptyInput)?;
    let needle = input.to_lowercase();

    let mut group: Vec<&ReferenceEntry> = table.iter().filter(|e| e.group == letter).collect();
    if group.is_empty() {
        return Err(ResolutionError::NoEntriesForLetter(letter));
    }
    // Stable, so equal names keep their stored order
    group.sort_by_cached_key(|e| e.name.to_lowercase());

    let keys: Vec<String> = group.iter().map(|e| comparison_key(&e.name)).collect();
    let code_of = |entry: &ReferenceEntry| format!("{}{}", letter, entry.cutter);

    let mut explanation = Vec::new();
    let selected = match place(&needle, &keys) {
        Placement::Exact(idx) => {
            let entry = group[idx];
            explanation.push(format!(
                "Exact match found: {} ({})",
                entry.name,
                code_of(entry)
            ));
            idx
        }
        Placement::Between(prev, next) => {
            explanation.push(format!(
                "\"{}\" falls between \"{}\" and \"{}\"",
                input, group[prev].name, group[next].name
            ));
            explanation.push(format!(
                "Using the entry BEFORE the closest match: {} ({})",
                group[prev].name,
                code_of(group[prev])
            ));
            prev
        }
        Placement::BeforeFirst => {
            explanation.push(format!(
                "\"{}\" comes before all entries, using first entry: {} ({})",
                input,
                group[0].name,
                code_of(group[0])
            ));
            0
        }
        Placement::AfterLast => {
            let last = group.len() - 1;
            explanation.push(format!(
                "\"{}\" comes after all entries, using last entry: {} ({})",
                input,
                group[last].name,
                code_of(group[last])
            ));
            last
        }
    };

    let start = selected.saturating_sub(NEARBY_WINDOW);
    let end = (selected + NEARBY_WINDOW + 1).min(group.len());
    let nearby_matches = (start..end)
        .map(|i| NearbyMatch {
            name: group[i].name.clone(),
            cutter: group[i].cutter.clone(),
            comparison: ordering_value(needle.as_str().cmp(keys[i].as_str())),
            selected: i == selected,
        })
        .collect();

    let selected_entry = group[selected].clone();
    tracing::debug!(
        "Resolved \"{}\" to {} via {}",
        input,
        code_of(&selected_entry),
        selected_entry.name
    );

    Ok(ResolutionResult {
        input: input.to_string(),
        code: code_of(&selected_entry),
        first_letter: letter,
        selected_entry,
        explanation,
        nearby_matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_table() -> Vec<ReferenceEntry> {
        // Deliberately unsorted, with a foreign group mixed in
        vec![
            ReferenceEntry::new("T", "Thornton, K.", "45"),
            ReferenceEntry::new("T", "Taylor", "39"),
            ReferenceEntry::new("S", "Smith", "65"),
            ReferenceEntry::new("T", "Thomas, J.", "36"),
            ReferenceEntry::new("T", "Tanner", "16"),
            ReferenceEntry::new("T", "Turner", "87"),
            ReferenceEntry::new("T", "Tolkien", "64"),
        ]
    }

    #[test]
    fn test_partition_routing() {
        for v in ['A', 'e', 'I', 'o', 'U'] {
            assert_eq!(partition_id(v), "vowels");
        }
        assert_eq!(partition_id('T'), "t");
        assert_eq!(partition_id('b'), "b");
        assert_eq!(partition_file("vowels"), "cutter_table_vowels.json");
    }

    #[test]
    fn test_comparison_key_strips_qualifier() {
        assert_eq!(comparison_key("Smith, J."), "smith");
        assert_eq!(comparison_key("Thomas"), "thomas");
        assert_eq!(comparison_key("Van Dyke, H., Jr."), "van dyke");
    }

    #[test]
    fn test_between_entries_selects_predecessor() {
        let result = resolve("Thompson", &t_table()).unwrap();
        assert_eq!(result.selected_entry.name, "Thomas, J.");
        assert_eq!(result.code, "T36");
        assert_eq!(result.first_letter, "T");
        assert!(result.explanation[0].contains("falls between \"Thomas, J.\" and \"Thornton, K.\""));
    }

    #[test]
    fn test_exact_match() {
        let result = resolve("  tolkien ", &t_table()).unwrap();
        assert_eq!(result.selected_entry.name, "Tolkien");
        assert_eq!(result.code, "T64");
        assert!(result.explanation[0].starts_with("Exact match found"));
    }

    #[test]
    fn test_exact_match_on_qualified_name() {
        let result = resolve("Thomas", &t_table()).unwrap();
        assert_eq!(result.selected_entry.name, "Thomas, J.");
    }

    #[test]
    fn test_exact_match_out_of_name_order() {
        let table = vec![
            ReferenceEntry::new("S", "Smith Adam", "1"),
            ReferenceEntry::new("S", "Smith, A.", "2"),
        ];
        let result = resolve("smith", &table).unwrap();
        assert_eq!(result.selected_entry.cutter, "2");
    }

    #[test]
    fn test_before_first_uses_first_entry() {
        let result = resolve("Tabor", &t_table()).unwrap();
        assert_eq!(result.selected_entry.name, "Tanner");
        assert!(result.explanation[0].contains("comes before all entries"));
    }

    #[test]
    fn test_after_last_uses_last_entry() {
        let result = resolve("Tyler", &t_table()).unwrap();
        assert_eq!(result.selected_entry.name, "Turner");
        assert!(result.explanation[0].contains("comes after all entries"));
    }

    #[test]
    fn test_deterministic() {
        let table = t_table();
        let first = resolve("Thorne", &table).unwrap();
        for _ in 0..5 {
            assert_eq!(resolve("Thorne", &table).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resolve("", &t_table()), Err(ResolutionError::EmptyInput));
        assert_eq!(resolve("   ", &t_table()), Err(ResolutionError::EmptyInput));
    }

    #[test]
    fn test_no_entries_for_letter() {
        assert_eq!(
            resolve("Quinn", &t_table()),
            Err(ResolutionError::NoEntriesForLetter("Q".to_string()))
        );
    }

    #[test]
    fn test_nearby_window() {
        let result = resolve("Thompson", &t_table()).unwrap();
        // Sorted: Tanner, Taylor, Thomas, Thornton, Tolkien, Turner
        let names: Vec<&str> = result.nearby_matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Tanner", "Taylor", "Thomas, J.", "Thornton, K.", "Tolkien"]);
        let comparisons: Vec<i8> = result.nearby_matches.iter().map(|m| m.comparison).collect();
        assert_eq!(comparisons, vec![1, 1, 1, -1, -1]);
        assert!(result.nearby_matches[2].selected);
        assert_eq!(result.nearby_matches.iter().filter(|m| m.selected).count(), 1);
    }

    #[test]
    fn test_nearby_window_clamped_at_start() {
        let result = resolve("Tabor", &t_table()).unwrap();
        assert_eq!(result.nearby_matches.len(), 3);
        assert!(result.nearby_matches[0].selected);
    }

    #[test]
    fn test_stable_sort_keeps_stored_order_for_ties() {
        let table = vec![
            ReferenceEntry::new("W", "White", "55"),
            ReferenceEntry::new("W", "white", "56"),
        ];
        let result = resolve("White", &table).unwrap();
        assert_eq!(result.selected_entry.cutter, "55");
    }
}
