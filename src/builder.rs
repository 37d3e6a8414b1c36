use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use log::{info, warn};

use crate::analysis::{analyze, CookbookAnalysis};
use crate::config::{default_site_title, CookbookConfig, SourceErrorPolicy};
use crate::document::{Document, SpanDocument};
use crate::error::{CookbookError, Result};
use crate::index::IngredientIndex;
use crate::matcher::SourceRegistry;
use crate::sink::Sink;
use crate::writers::{render_site, SiteSource};

/// Deferred document loader; its failure is subject to [`SourceErrorPolicy`]
pub type Opener = Box<dyn FnOnce() -> Result<Box<dyn Document>>>;

/// Where a cookbook comes from
pub enum InputSource {
    /// Page dump on disk, opened at build time
    Path(PathBuf),
    /// Already loaded document
    Document(Box<dyn Document>),
    /// Custom loader run at build time
    Opener(Opener),
}

impl InputSource {
    fn open(self, name: &str) -> Result<Box<dyn Document>> {
        match self {
            InputSource::Path(path) => Ok(Box::new(SpanDocument::open(name, path)?)),
            InputSource::Document(document) => Ok(document),
            InputSource::Opener(open) => open(),
        }
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            InputSource::Document(document) => {
                f.debug_tuple("Document").field(&document.name()).finish()
            }
            InputSource::Opener(_) => f.write_str("Opener"),
        }
    }
}

/// Outcome of a master site build
#[derive(Debug, Clone, Default)]
pub struct SiteReport {
    /// Recipe pages written, across all sources
    pub recipes: usize,
    /// Sources that made it into the site, in build order
    pub sources_built: Vec<String>,
    /// Sources dropped under [`SourceErrorPolicy::Skip`], with the reason
    pub sources_skipped: Vec<(String, String)>,
    /// Normalized titles present in more than one source
    pub shared_titles: Vec<String>,
}

/// Builder for configuring and executing a multi-cookbook site build
#[derive(Debug, Default)]
pub struct CookbookSiteBuilder {
    sources: Vec<(String, InputSource)>,
    policy: SourceErrorPolicy,
    title: Option<String>,
}

impl CookbookSiteBuilder {
    /// Add a cookbook page dump by path
    ///
    /// # Example
    /// ```
    /// use cookbook_index::CookbookSite;
    ///
    /// let builder = CookbookSite::builder()
    ///     .source("Grandma", "books/grandma.json");
    /// ```
    pub fn source(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.sources.push((name.into(), InputSource::Path(path.into())));
        self
    }

    /// Add an already loaded document; its own name is used as source name
    pub fn document(mut self, document: impl Document + 'static) -> Self {
        let name = document.name().to_string();
        self.sources.push((name, InputSource::Document(Box::new(document))));
        self
    }

    /// Add a source loaded by `open` at build time
    ///
    /// # Example
    /// ```
    /// use cookbook_index::{CookbookSite, Document, SpanDocument};
    ///
    /// let builder = CookbookSite::builder().opener("Scans", || {
    ///     let document = SpanDocument::open("Scans", "scans/pages.json")?;
    ///     Ok(Box::new(document) as Box<dyn Document>)
    /// });
    /// ```
    pub fn opener<F>(mut self, name: impl Into<String>, open: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn Document>> + 'static,
    {
        self.sources.push((name.into(), InputSource::Opener(Box::new(open))));
        self
    }

    /// Choose what happens when a source cannot be read
    ///
    /// # Example
    /// ```
    /// use cookbook_index::{CookbookSite, SourceErrorPolicy};
    ///
    /// let builder = CookbookSite::builder()
    ///     .source("Grandma", "books/grandma.json")
    ///     .on_source_error(SourceErrorPolicy::Skip);
    /// ```
    pub fn on_source_error(mut self, policy: SourceErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the heading of the site's index page
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Take sources, policy and title from configuration
    pub fn with_config(mut self, config: &CookbookConfig) -> Self {
        for source in &config.sources {
            self = self.source(source.name.clone(), source.path.clone());
        }
        self.policy = config.on_source_error;
        self.title = Some(config.site_title.clone());
        self
    }

    /// Load and analyse every source, then render the site into `sink`
    ///
    /// # Errors
    /// Returns `CookbookError` if:
    /// - No source was added, or two sources share a name
    /// - A source is unreadable and the policy is [`SourceErrorPolicy::Abort`]
    /// - Any artifact cannot be written
    pub fn build(self, sink: &dyn Sink) -> Result<SiteReport> {
        if self.sources.is_empty() {
            return Err(CookbookError::Builder(
                "No sources specified. Use .source(), .document() or .opener()".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for (name, _) in &self.sources {
            if !names.insert(name.as_str()) {
                return Err(CookbookError::Builder(format!("Duplicate source name '{name}'")));
            }
        }

        let mut report = SiteReport::default();
        let mut loaded: Vec<(Box<dyn Document>, CookbookAnalysis)> = Vec::new();

        for (name, input) in self.sources {
            let document = match input.open(&name) {
                Ok(document) => document,
                Err(err) => match self.policy {
                    SourceErrorPolicy::Abort => return Err(err),
                    SourceErrorPolicy::Skip => {
                        warn!("Skipping source '{}': {}", name, err);
                        report.sources_skipped.push((name, err.to_string()));
                        continue;
                    }
                },
            };
            let mut analysis = analyze(document.as_ref())?;
            // Attribution follows the name the source was registered under
            analysis.source = name.clone();
            report.sources_built.push(name);
            loaded.push((document, analysis));
        }

        let mut registry = SourceRegistry::new();
        for (_, analysis) in &loaded {
            registry.register(&analysis.source, analysis.titles());
        }
        let index: IngredientIndex = loaded
            .iter()
            .map(|(_, analysis)| analysis.index.clone())
            .collect();

        let sources: Vec<SiteSource<'_>> = loaded
            .iter()
            .map(|(document, analysis)| SiteSource {
                document: document.as_ref(),
                analysis,
            })
            .collect();
        let title = self.title.unwrap_or_else(default_site_title);
        let records = render_site(&sources, &registry, &index, &title, sink)?;

        report.recipes = records.len();
        report.shared_titles = registry
            .duplicates()
            .map(|(key, _)| key.to_string())
            .collect();
        if !report.shared_titles.is_empty() {
            info!("{} recipes appear in more than one source", report.shared_titles.len());
        }
        Ok(report)
    }
}

/// Main entry point for the builder API
pub struct CookbookSite;

impl CookbookSite {
    /// Creates a new builder for a master site
    ///
    /// # Example
    /// ```
    /// use cookbook_index::CookbookSite;
    ///
    /// let builder = CookbookSite::builder();
    /// ```
    pub fn builder() -> CookbookSiteBuilder {
        CookbookSiteBuilder::default()
    }
}
