// Call number assembly

use crate::models::{CallNumber, LiteratureComposition, ResolutionResult, WorkCategory};

/// English ordinal for an edition number ("1st", "12th", "23rd")
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Base code followed by `.segment` for every segment
pub fn join_call_number(base: &str, segments: &[String]) -> String {
    let mut code = base.to_string();
    for segment in segments {
        code.push('.');
        code.push_str(segment);
    }
    code
}

fn base_explanation(resolution: &ResolutionResult) -> Vec<String> {
    let mut explanation = vec![
        format!("Author surname: \"{}\"", resolution.input),
        format!("Base author cutter: {}", resolution.code),
    ];
    explanation.extend(resolution.explanation.iter().cloned());
    explanation
}

/// Call number for a standard item, with an optional edition suffix
pub fn standard_call_number(resolution: ResolutionResult, edition: Option<u32>) -> CallNumber {
    let mut explanation = base_explanation(&resolution);
    let mut segments = Vec::new();

    if let Some(edition) = edition {
        segments.push(edition.to_string());
        explanation.push(format!(
            "Added edition number: .{} (for {} edition)",
            edition,
            ordinal(edition)
        ));
    }

    let code = join_call_number(&resolution.code, &segments);
    explanation.push(format!("Final cutter number: {}", code));

    CallNumber {
        code,
        base: resolution.code.clone(),
        segments,
        explanation,
        category: None,
        resolution,
    }
}

/// Call number for a literary work: author cutter plus composed segments
pub fn literature_call_number(
    resolution: ResolutionResult,
    category: WorkCategory,
    composition: LiteratureComposition,
) -> CallNumber {
    let mut explanation = base_explanation(&resolution);
    explanation.push(format!("Work type: {}", category.description()));
    explanation.extend(composition.explanation);

    let code = join_call_number(&resolution.code, &composition.segments);
    explanation.push(format!("Final cutter number: {}", code));

    CallNumber {
        code,
        base: resolution.code.clone(),
        segments: composition.segments,
        explanation,
        category: Some(category),
        resolution,
    }
}
