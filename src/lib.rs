//! Split paginated cookbooks into recipes and build derivative artifacts:
//! per-recipe extracts, a table of contents, an ingredient index and a
//! searchable static site spanning several books.
//!
//! Recipe titles are found with a font-size heuristic ([`scorer`]), turned
//! into page ranges ([`segmenter`]) and indexed by ingredient word
//! ([`index`]). Rendering spans out of the original file is the job of an
//! external extractor; this crate reads its output through [`Document`].

pub mod analysis;
pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod headings;
pub mod index;
pub mod matcher;
pub mod model;
pub mod naming;
pub mod scorer;
pub mod segmenter;
pub mod sink;
pub mod writers;

pub use analysis::{analyze, CookbookAnalysis};
pub use builder::{CookbookSite, CookbookSiteBuilder, InputSource, SiteReport};
pub use config::{load_config, CookbookConfig, SourceConfig, SourceErrorPolicy};
pub use document::{Document, SpanDocument};
pub use error::{CookbookError, Result};
pub use index::IngredientIndex;
pub use matcher::{normalize_title_key, SourceRegistry};
pub use model::{Heading, Page, RecipeRange, Span};
pub use sink::{DirSink, MemorySink, Sink};
pub use writers::{write_cookbook, CookbookReport, OutputLayout};

use std::path::Path;

/// Analyse one cookbook and write its extracts, TOC, index and HTML export.
pub fn process_cookbook(
    doc: &dyn Document,
    sink: &dyn Sink,
    layout: &OutputLayout,
) -> Result<CookbookReport> {
    let analysis = analyze(doc)?;
    write_cookbook(doc, &analysis, sink, layout)
}

/// Convenience wrapper: open a page dump and process it into `out_dir`.
pub fn process_cookbook_file(
    path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    layout: &OutputLayout,
) -> Result<CookbookReport> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let doc = SpanDocument::open(name, path)?;
    process_cookbook(&doc, &DirSink::new(out_dir.as_ref()), layout)
}
