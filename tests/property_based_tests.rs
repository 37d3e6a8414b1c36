//! Property-based tests for the heading heuristic, segmentation and indexing.

use cookbook_index::headings::detect_headings_in;
use cookbook_index::index::{IngredientIndex, STOP_WORDS};
use cookbook_index::scorer::{is_candidate, most_likely_title, RESERVED_LABELS};
use cookbook_index::segmenter::{front_matter, segment};
use cookbook_index::{normalize_title_key, Heading, Span};
use proptest::prelude::*;
use std::collections::HashSet;

fn span_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z' ]{1,30}",
        "[A-Za-z ]{0,12}[0-9][A-Za-z ]{0,12}",
        "[A-Za-z ]{1,20}\\.",
        "[a-z]{1,8} (cup|ml|oz|grams|teaspoon|tablespoon) [a-z]{1,8}",
        Just("Ingredients".to_string()),
        Just("  METHOD ".to_string()),
        Just("the cookery".to_string()),
        Just("Directions".to_string()),
        Just("instructions ".to_string()),
        Just("Serves 4.".to_string()),
        Just("Grandma's Pie".to_string()),
    ]
}

fn page_spans() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec(
        (span_text(), 6.0f32..72.0).prop_map(|(text, size)| Span::new(text, size)),
        0..10,
    )
}

proptest! {
    #[test]
    fn scorer_never_picks_excluded_text(spans in page_spans()) {
        if let Some(title) = most_likely_title(&spans) {
            prop_assert!(!title.chars().any(|c| c.is_ascii_digit()));
            prop_assert!(!title.ends_with('.'));
            prop_assert!(!RESERVED_LABELS.contains(&title.to_lowercase().as_str()));
            prop_assert!(!title.is_empty() && title.chars().count() < 50);
            prop_assert_eq!(title, title.trim());
        }
    }

    #[test]
    fn scorer_picks_largest_candidate(spans in page_spans()) {
        let candidates: Vec<&Span> = spans
            .iter()
            .filter(|s| is_candidate(&s.text))
            .collect();
        match most_likely_title(&spans) {
            Some(title) => {
                let best = candidates.iter().map(|s| s.size).fold(f32::MIN, f32::max);
                let first_best = candidates.iter().find(|s| s.size == best).unwrap();
                prop_assert_eq!(first_best.text.trim(), title);
            }
            None => prop_assert!(candidates.is_empty()),
        }
    }

    #[test]
    fn headings_are_unique_and_ordered(
        titles in prop::collection::vec(
            prop::option::of(prop::sample::select(vec!["Soup", "Bread", "Cake", "Stew"])),
            0..30,
        )
    ) {
        let pages: Vec<Vec<Span>> = titles
            .iter()
            .map(|t| t.map(|t| vec![Span::new(t, 20.0)]).unwrap_or_default())
            .collect();
        let headings = detect_headings_in(pages.iter().map(Vec::as_slice));

        let distinct: HashSet<_> = headings.iter().map(|h| h.title.as_str()).collect();
        prop_assert_eq!(distinct.len(), headings.len());
        prop_assert!(headings.windows(2).all(|w| w[0].page_index < w[1].page_index));
        for heading in &headings {
            let first = titles.iter().position(|t| *t == Some(heading.title.as_str()));
            prop_assert_eq!(first, Some(heading.page_index));
        }
    }

    #[test]
    fn ranges_and_front_matter_partition_pages(
        starts in prop::collection::vec(any::<bool>(), 0..40)
    ) {
        let page_count = starts.len();
        let headings: Vec<Heading> = starts
            .iter()
            .enumerate()
            .filter(|(_, start)| **start)
            .map(|(i, _)| Heading::new(format!("Recipe {i}"), i))
            .collect();
        let ranges = segment(&headings, page_count);
        prop_assert_eq!(ranges.len(), headings.len());

        let mut covered = vec![0u32; page_count];
        for page in front_matter(&headings, page_count) {
            covered[page] += 1;
        }
        for range in &ranges {
            prop_assert!(!range.is_empty());
            for page in range.pages() {
                covered[page] += 1;
            }
        }
        prop_assert!(covered.iter().all(|&n| n == 1));
        prop_assert!(ranges.windows(2).all(|w| w[0].end_page == w[1].start_page));
        if let Some(last) = ranges.last() {
            prop_assert_eq!(last.end_page, page_count);
        }
    }

    #[test]
    fn index_keys_are_clean(text in "[A-Za-z0-9 ,.\n]{0,300}") {
        let mut index = IngredientIndex::new();
        index.add_recipe("Any", &text);
        for (word, titles) in &index {
            prop_assert!(word.len() > 2);
            prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
            prop_assert!(!STOP_WORDS.contains(&word.as_str()));
            prop_assert_eq!(titles.len(), 1);
        }
    }

    #[test]
    fn index_is_case_insensitive(text in "[A-Za-z ,\n]{0,200}") {
        let mut lower = IngredientIndex::new();
        lower.add_recipe("R", &text.to_lowercase());
        let mut upper = IngredientIndex::new();
        upper.add_recipe("R", &text.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn title_key_ignores_case_and_punctuation(title in "[A-Za-z ]{1,30}") {
        let shouted = format!("{}!", title.to_uppercase());
        let hyphenated = title.replace(' ', "-");
        prop_assert_eq!(normalize_title_key(&title), normalize_title_key(&shouted));
        prop_assert_eq!(normalize_title_key(&title), normalize_title_key(&hyphenated));
    }
}
