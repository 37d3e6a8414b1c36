//! Cross-source title matching.
//!
//! Titles that differ only in case, punctuation or whitespace are treated
//! as the same recipe when looking for other books that contain it. The
//! recipes themselves are never merged.

use std::collections::{BTreeMap, BTreeSet};

/// Identity key of a title: alphanumerics only, lowercased.
pub fn normalize_title_key(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Which sources contain a recipe with a given normalized title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: BTreeMap<String, BTreeSet<String>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<'a, I>(&mut self, source: &str, titles: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for title in titles {
            self.sources
                .entry(normalize_title_key(title))
                .or_default()
                .insert(source.to_string());
        }
    }

    /// Union `other` into this registry.
    pub fn merge(&mut self, other: SourceRegistry) {
        for (key, sources) in other.sources {
            self.sources.entry(key).or_default().extend(sources);
        }
    }

    pub fn sources_for(&self, title: &str) -> Option<&BTreeSet<String>> {
        self.sources.get(&normalize_title_key(title))
    }

    /// Sources other than `current` containing the same recipe, sorted.
    pub fn other_sources(&self, title: &str, current: &str) -> Vec<&str> {
        self.sources_for(title)
            .into_iter()
            .flatten()
            .filter(|source| source.as_str() != current)
            .map(String::as_str)
            .collect()
    }

    /// Normalized keys found in more than one source.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.sources
            .iter()
            .filter(|(_, sources)| sources.len() > 1)
            .map(|(key, sources)| (key.as_str(), sources))
    }
}
