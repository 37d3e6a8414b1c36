use crate::document::Document;
use crate::error::Result;
use crate::model::RecipeRange;
use crate::naming::FileNamer;
use crate::sink::Sink;
use log::debug;

/// A per-recipe extract written by [`split_recipes`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    pub title: String,
    /// Path relative to the sink root
    pub path: String,
}

/// Write one standalone extract per recipe range into `dir`.
pub fn split_recipes(
    doc: &dyn Document,
    ranges: &[RecipeRange],
    sink: &dyn Sink,
    dir: &str,
) -> Result<Vec<SplitFile>> {
    let dir = dir.trim_matches('/');
    let mut namer = FileNamer::new();
    let mut files = Vec::with_capacity(ranges.len());

    for range in ranges {
        let name = namer.claim(&range.title, doc.extension());
        let path = if dir.is_empty() {
            name
        } else {
            format!("{dir}/{name}")
        };

        let bytes = doc.export_pages(range.pages())?;
        sink.write_binary(&path, &bytes)?;
        debug!("Split '{}' pages {:?} -> {}", range.title, range.pages(), path);

        files.push(SplitFile {
            title: range.title.clone(),
            path,
        });
    }

    Ok(files)
}
