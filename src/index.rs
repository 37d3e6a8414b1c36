//! Ingredient presence index: word -> recipes whose text contains it.
//!
//! Only ASCII words are indexed. A word touching a non-ASCII letter or a
//! digit ("jalapeño", "eggs2") is not a token at all.

use crate::document::{range_text, Document};
use crate::error::Result;
use crate::model::RecipeRange;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// Units and filler words that never become index keys.
pub const STOP_WORDS: [&str; 11] = [
    "cup", "cups", "tsp", "tbsp", "grams", "ml", "oz", "and", "with", "for", "the",
];

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z]+\b").expect("Invalid word regex"));

/// Lowercased index keys found in `text`, in order of appearance (with repeats).
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(&word.as_str()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl IngredientIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `title` under every word of `text`.
    pub fn add_recipe(&mut self, title: &str, text: &str) {
        for word in tokenize(text) {
            self.entries.entry(word).or_default().insert(title.to_string());
        }
    }

    /// Union `other` into this index.
    pub fn merge(&mut self, other: IngredientIndex) {
        for (word, titles) in other.entries {
            self.entries.entry(word).or_default().extend(titles);
        }
    }

    pub fn titles(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by word; titles sorted within each entry.
    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a IngredientIndex {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IngredientIndex> for IngredientIndex {
    fn from_iter<T: IntoIterator<Item = IngredientIndex>>(iter: T) -> Self {
        iter.into_iter().fold(IngredientIndex::new(), |mut acc, index| {
            acc.merge(index);
            acc
        })
    }
}

/// Build the index of one document from its recipe ranges, each range
/// contributing only the text of its own pages.
pub fn build_index(doc: &dyn Document, ranges: &[RecipeRange]) -> Result<IngredientIndex> {
    let mut index = IngredientIndex::new();
    for range in ranges {
        let text = range_text(doc, range.pages())?;
        index.add_recipe(&range.title, &text);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_filters_short_and_stop_words() {
        let words: Vec<_> = tokenize("2 cups of Flour and 1 tbsp OIL, with an egg").collect();
        assert_eq!(words, vec!["flour", "oil", "egg"]);
    }

    #[test]
    fn test_tokenize_skips_words_glued_to_digits_or_accents() {
        let words: Vec<_> = tokenize("eggs2 jalapeño 200g sugar").collect();
        assert_eq!(words, vec!["sugar"]);
    }

    #[test]
    fn test_presence_not_frequency() {
        let mut index = IngredientIndex::new();
        index.add_recipe("Toast", "Butter butter BUTTER bread");

        assert_eq!(index.len(), 2);
        assert_eq!(index.titles("butter").unwrap().len(), 1);
        assert!(!index.contains("Butter"));
    }

    #[test]
    fn test_merge_is_union() {
        let mut a = IngredientIndex::new();
        a.add_recipe("Soup", "leek potato");
        let mut b = IngredientIndex::new();
        b.add_recipe("Pie", "potato apple");

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab, ba);
        let potato: Vec<_> = ab.titles("potato").unwrap().iter().cloned().collect();
        assert_eq!(potato, vec!["Pie", "Soup"]);
    }

    #[test]
    fn test_collect_merges() {
        let parts = ["onion", "garlic onion"].iter().enumerate().map(|(i, text)| {
            let mut index = IngredientIndex::new();
            index.add_recipe(&format!("R{i}"), text);
            index
        });
        let merged: IngredientIndex = parts.collect();
        assert_eq!(merged.titles("onion").unwrap().len(), 2);
        assert_eq!(merged.titles("garlic").unwrap().len(), 1);
    }
}
