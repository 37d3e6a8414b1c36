use crate::document::Document;
use crate::error::Result;
use crate::model::{Heading, Span};
use crate::scorer::most_likely_title;
use log::debug;
use std::collections::HashSet;

#[derive(Default)]
struct Accumulator {
    headings: Vec<Heading>,
    seen: HashSet<String>,
}

impl Accumulator {
    fn push(mut self, page_index: usize, spans: &[Span]) -> Self {
        match most_likely_title(spans) {
            // Exact string match only: a running header repeats the title verbatim
            Some(title) if !self.seen.contains(title) => {
                self.seen.insert(title.to_string());
                self.headings.push(Heading::new(title, page_index));
            }
            Some(title) => debug!("Page {}: '{}' already recorded", page_index, title),
            None => debug!("Page {}: no title candidate", page_index),
        }
        self
    }
}

/// Detect recipe headings from per-page spans, in page order. Each distinct
/// title is recorded once, at the first page it is the page's title.
pub fn detect_headings_in<'a, I>(pages: I) -> Vec<Heading>
where
    I: IntoIterator<Item = &'a [Span]>,
{
    pages
        .into_iter()
        .enumerate()
        .fold(Accumulator::default(), |acc, (i, spans)| acc.push(i, spans))
        .headings
}

/// Detect recipe headings across every page of `doc`.
pub fn detect_headings(doc: &dyn Document) -> Result<Vec<Heading>> {
    let pages = (0..doc.page_count())
        .map(|page| doc.page_spans(page))
        .collect::<Result<Vec<_>>>()?;
    let headings = detect_headings_in(pages);
    debug!("'{}': {} headings", doc.name(), headings.len());
    Ok(headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SpanDocument;
    use crate::model::Page;

    fn titled(title: &str) -> Vec<Span> {
        vec![Span::new(title, 24.0), Span::new("2 cups of water", 10.0)]
    }

    #[test]
    fn test_first_occurrence_wins() {
        let pages = [
            titled("Soup"),
            titled("Soup"),
            titled("Bread"),
            vec![],
            titled("Soup"),
        ];
        let headings = detect_headings_in(pages.iter().map(Vec::as_slice));

        assert_eq!(
            headings,
            vec![Heading::new("Soup", 0), Heading::new("Bread", 2)]
        );
    }

    #[test]
    fn test_dedupe_is_exact_string() {
        let pages = [titled("Apple Pie"), titled("APPLE PIE")];
        let headings = detect_headings_in(pages.iter().map(Vec::as_slice));
        assert_eq!(headings.len(), 2);
    }

    #[test]
    fn test_document_without_titles() {
        let doc = SpanDocument::new(
            "Notes",
            vec![
                Page::new("", vec![Span::new("Ingredients", 20.0)]),
                Page::new("", vec![]),
            ],
        );
        assert!(detect_headings(&doc).unwrap().is_empty());
    }
}
