//! Title candidate scoring.
//!
//! Recipe titles are the largest text on a recipe's opening page that is
//! neither a quantity line, a section label nor a prose sentence.

use crate::model::Span;
use once_cell::sync::Lazy;
use regex::Regex;

/// Candidates must be strictly shorter than this many characters.
pub const MAX_TITLE_CHARS: usize = 50;

/// Section labels that are never recipe titles (compared case-insensitively).
pub const RESERVED_LABELS: [&str; 5] = [
    "ingredients",
    "method",
    "directions",
    "instructions",
    "the cookery",
];

// Decimal digits of any script (Unicode Nd); fractions and numerals like ½ or Ⅳ are not digits
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

static MEASUREMENT_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(grams|ml|cup|tablespoon|teaspoon|oz)\b")
        .expect("Invalid measurement word regex")
});

/// Whether a span's text may be a recipe title.
pub fn is_candidate(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.chars().count() >= MAX_TITLE_CHARS {
        return false;
    }
    // Quantities, temperatures and page numbers
    if DIGIT.is_match(text) {
        return false;
    }

    let lower = text.to_lowercase();
    !MEASUREMENT_WORD.is_match(&lower)
        && !RESERVED_LABELS.contains(&lower.as_str())
        && !text.ends_with('.')
}

/// Pick the title of a page: the candidate with the largest font size,
/// the earliest one winning ties. Returns the trimmed span text.
pub fn most_likely_title(spans: &[Span]) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for span in spans {
        if span.size.is_nan() || !is_candidate(&span.text) {
            continue;
        }
        match best {
            Some((_, size)) if span.size <= size => {}
            _ => best = Some((span.text.trim(), span.size)),
        }
    }

    best.map(|(text, _)| text)
}
