use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting and indexing cookbooks.
///
/// A document without any detectable recipe is not an error: it simply
/// yields empty artifacts. Pages without a title candidate are skipped
/// silently by the heading detector.
#[derive(Error, Debug)]
pub enum CookbookError {
    /// The source document could not be opened or parsed
    #[error("Source '{source_name}' is unreadable: {reason}")]
    SourceUnreadable { source_name: String, reason: String },

    /// A page index outside the document was requested
    #[error("Page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    /// Failed to write an output artifact
    #[error("Failed to write artifact '{}': {source}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize search data or a page export
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl CookbookError {
    pub(crate) fn unreadable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        CookbookError::SourceUnreadable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = CookbookError> = std::result::Result<T, E>;
