//! Paginated source documents.
//!
//! Rendering and span extraction happen outside this crate. A [`Document`]
//! only has to hand out styled spans and plain text per page, plus a way to
//! cut a page range into a standalone extract.

use crate::error::{CookbookError, Result};
use crate::model::{Page, Span};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

pub trait Document {
    /// Display name of the source
    fn name(&self) -> &str;

    fn page_count(&self) -> usize;

    /// Styled spans of one page, in reading order
    fn page_spans(&self, page: usize) -> Result<&[Span]>;

    /// Plain extracted text of one page
    fn page_text(&self, page: usize) -> Result<&str>;

    /// Standalone extract containing only `pages`, in this document's format
    fn export_pages(&self, pages: Range<usize>) -> Result<Vec<u8>>;

    /// File extension used for extracts produced by [`Document::export_pages`]
    fn extension(&self) -> &str;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageDump {
    #[serde(default)]
    pages: Vec<Page>,
}

/// Document backed by a JSON page dump:
///
/// ```json
/// { "pages": [ { "text": "Soup\n...", "spans": [ { "text": "Soup", "size": 24.0 } ] } ] }
/// ```
#[derive(Debug, Clone)]
pub struct SpanDocument {
    name: String,
    pages: Vec<Page>,
}

impl SpanDocument {
    pub fn new(name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Open a page dump from disk. Any IO or parse failure is reported as
    /// [`CookbookError::SourceUnreadable`].
    pub fn open(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let name = name.into();
        let path = path.as_ref();
        debug!("Opening '{}' from {}", name, path.display());

        let raw = std::fs::read(path).map_err(|e| CookbookError::unreadable(&name, e))?;
        Self::from_json(name, &raw)
    }

    pub fn from_json(name: impl Into<String>, json: &[u8]) -> Result<Self> {
        let name = name.into();
        let dump: PageDump =
            serde_json::from_slice(json).map_err(|e| CookbookError::unreadable(&name, e))?;
        Ok(Self::new(name, dump.pages))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn page(&self, page: usize) -> Result<&Page> {
        self.pages.get(page).ok_or(CookbookError::PageOutOfRange {
            page,
            page_count: self.pages.len(),
        })
    }
}

impl Document for SpanDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_spans(&self, page: usize) -> Result<&[Span]> {
        Ok(&self.page(page)?.spans)
    }

    fn page_text(&self, page: usize) -> Result<&str> {
        Ok(&self.page(page)?.text)
    }

    fn export_pages(&self, pages: Range<usize>) -> Result<Vec<u8>> {
        if pages.end > self.pages.len() || pages.start > pages.end {
            return Err(CookbookError::PageOutOfRange {
                page: pages.end.saturating_sub(1).max(pages.start),
                page_count: self.pages.len(),
            });
        }
        let dump = PageDump {
            pages: self.pages[pages].to_vec(),
        };
        Ok(serde_json::to_vec_pretty(&dump)?)
    }

    fn extension(&self) -> &str {
        "json"
    }
}

/// Concatenated plain text of `pages`, exactly as the pages hold it.
pub fn range_text(doc: &dyn Document, pages: Range<usize>) -> Result<String> {
    let mut text = String::new();
    for page in pages {
        text.push_str(doc.page_text(page)?);
    }
    Ok(text)
}
