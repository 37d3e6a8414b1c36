use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A unit of styled text as extracted from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub size: f32,
}

impl Span {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// One page of a source document: its styled spans plus the plain text
/// used for indexing and rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Page {
    pub fn new(text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }
}

/// A detected recipe title anchored to the first page it appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub page_index: usize,
}

impl Heading {
    pub fn new(title: impl Into<String>, page_index: usize) -> Self {
        Self {
            title: title.into(),
            page_index,
        }
    }
}

/// Contiguous pages attributed to one heading. `end_page` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRange {
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
}

impl RecipeRange {
    pub fn pages(&self) -> Range<usize> {
        self.start_page..self.end_page
    }

    pub fn len(&self) -> usize {
        self.end_page - self.start_page
    }

    pub fn is_empty(&self) -> bool {
        self.start_page >= self.end_page
    }
}
