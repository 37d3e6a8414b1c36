pub mod html;
pub mod markdown;
pub mod site;
pub mod split;
pub mod templates;

pub use html::export_html;
pub use markdown::{render_ingredient_index, render_toc};
pub use site::{render_site, SearchRecord, SiteSource};
pub use split::{split_recipes, SplitFile};

use crate::analysis::CookbookAnalysis;
use crate::config::CookbookConfig;
use crate::document::Document;
use crate::error::Result;
use crate::sink::{Prefixed, Sink};
use log::info;

pub const TOC_FILE: &str = "toc.md";
pub const INDEX_FILE: &str = "ingredient_index.md";

/// Where the single-cookbook artifacts go, relative to the sink root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub split_dir: String,
    pub html_dir: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::from(&CookbookConfig::default())
    }
}

impl From<&CookbookConfig> for OutputLayout {
    fn from(config: &CookbookConfig) -> Self {
        Self {
            split_dir: config.split_dir.clone(),
            html_dir: config.html_dir.clone(),
        }
    }
}

/// Summary of a single-cookbook run
#[derive(Debug, Clone)]
pub struct CookbookReport {
    pub recipes: usize,
    pub indexed_words: usize,
    pub split_files: Vec<SplitFile>,
}

/// Write every single-cookbook artifact: per-recipe extracts, TOC,
/// ingredient index and the HTML export.
pub fn write_cookbook(
    doc: &dyn Document,
    analysis: &CookbookAnalysis,
    sink: &dyn Sink,
    layout: &OutputLayout,
) -> Result<CookbookReport> {
    let split_files = split_recipes(doc, &analysis.ranges, sink, &layout.split_dir)?;
    info!("Split {} recipes to: {}", split_files.len(), layout.split_dir);

    sink.write_text(TOC_FILE, &render_toc(&split_files))?;
    sink.write_text(INDEX_FILE, &render_ingredient_index(&analysis.index))?;
    export_html(doc, analysis, &Prefixed::new(sink, &layout.html_dir))?;

    Ok(CookbookReport {
        recipes: analysis.recipe_count(),
        indexed_words: analysis.index.len(),
        split_files,
    })
}
