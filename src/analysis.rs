use crate::document::{range_text, Document};
use crate::error::Result;
use crate::headings::detect_headings;
use crate::index::{build_index, IngredientIndex};
use crate::model::{Heading, RecipeRange};
use crate::segmenter::segment;
use log::info;

/// Everything derived from one source document.
#[derive(Debug, Clone)]
pub struct CookbookAnalysis {
    pub source: String,
    pub page_count: usize,
    pub headings: Vec<Heading>,
    pub ranges: Vec<RecipeRange>,
    pub index: IngredientIndex,
}

impl CookbookAnalysis {
    pub fn recipe_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|range| range.title.as_str())
    }
}

/// Detect headings, segment them into recipes and index their ingredients.
pub fn analyze(doc: &dyn Document) -> Result<CookbookAnalysis> {
    let headings = detect_headings(doc)?;
    let ranges = segment(&headings, doc.page_count());
    let index = build_index(doc, &ranges)?;

    if ranges.is_empty() {
        info!("No recipes detected in '{}'", doc.name());
    } else {
        info!(
            "'{}': {} recipes, {} indexed words",
            doc.name(),
            ranges.len(),
            index.len()
        );
    }

    Ok(CookbookAnalysis {
        source: doc.name().to_string(),
        page_count: doc.page_count(),
        headings,
        ranges,
        index,
    })
}

/// Full text of one recipe: its pages concatenated in order.
pub fn recipe_text(doc: &dyn Document, range: &RecipeRange) -> Result<String> {
    range_text(doc, range.pages())
}
