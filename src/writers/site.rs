//! Master site spanning several cookbooks.
//!
//! ```text
//! index.html              search box + every recipe with its source
//! ingredients.html        merged ingredient index
//! style.css
//! recipes/<name>.html     one page per recipe per source
//! recipes/search_data.js  window.searchData = [{title, source, url, body}, ...];
//! ```

use crate::analysis::{recipe_text, CookbookAnalysis};
use crate::document::Document;
use crate::error::Result;
use crate::index::IngredientIndex;
use crate::matcher::SourceRegistry;
use crate::naming::FileNamer;
use crate::sink::Sink;
use crate::writers::html::ingredient_list;
use crate::writers::templates::{
    escape, escape_attr, recipe_body, wrap_html, SEARCH_SCRIPT, STYLESHEET,
};
use log::info;
use serde::Serialize;

/// One analysed cookbook taking part in the site
pub struct SiteSource<'a> {
    pub document: &'a dyn Document,
    pub analysis: &'a CookbookAnalysis,
}

/// Entry of the client-side search data
#[derive(Debug, Clone, Serialize)]
pub struct SearchRecord {
    pub title: String,
    pub source: String,
    pub url: String,
    pub body: String,
}

/// Render the master site for `sources`, in the given order.
pub fn render_site(
    sources: &[SiteSource<'_>],
    registry: &SourceRegistry,
    index: &IngredientIndex,
    site_title: &str,
    sink: &dyn Sink,
) -> Result<Vec<SearchRecord>> {
    let mut namer = FileNamer::new();
    let mut records = Vec::new();

    for source in sources {
        let name = source.analysis.source.as_str();
        for range in &source.analysis.ranges {
            let file = namer.claim(&range.title, "html");
            let text = recipe_text(source.document, range)?;
            let also_found_in = registry.other_sources(&range.title, name);

            let page = recipe_page(&range.title, name, &also_found_in, &text);
            sink.write_text(&format!("recipes/{file}"), &page)?;

            records.push(SearchRecord {
                title: range.title.clone(),
                source: name.to_string(),
                url: format!("recipes/{file}"),
                body: text,
            });
        }
    }

    let search_data = format!("window.searchData = {};", serde_json::to_string_pretty(&records)?);
    sink.write_text("recipes/search_data.js", &search_data)?;
    sink.write_text("index.html", &index_page(site_title, &records))?;

    let body = format!(
        "<h1>Master Ingredient Index</h1>\n<p><a href=\"index.html\">← Back to Index</a></p>\n{}",
        ingredient_list(index)
    );
    sink.write_text(
        "ingredients.html",
        &wrap_html("Ingredient Index", &body, "style.css"),
    )?;
    sink.write_text("style.css", STYLESHEET)?;

    info!(
        "Site built: {} recipes from {} sources",
        records.len(),
        sources.len()
    );
    Ok(records)
}

fn recipe_page(title: &str, source: &str, also_found_in: &[&str], text: &str) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&format!(
        "<p class=\"source\"><em>From: {}</em></p>\n",
        escape(source)
    ));
    if !also_found_in.is_empty() {
        let others: Vec<String> = also_found_in.iter().map(|s| escape(s)).collect();
        body.push_str(&format!(
            "<p class=\"also-found\"><em>Also found in: {}</em></p>\n",
            others.join(", ")
        ));
    }
    body.push_str(
        "<p><a href=\"../index.html\">← Back to Index</a> | \
         <a href=\"../ingredients.html\">Ingredient Index</a></p>\n",
    );
    body.push_str(&format!(
        "<div class=\"recipe\">\n{}\n</div>\n",
        recipe_body(text)
    ));
    wrap_html(title, &body, "../style.css")
}

fn index_page(site_title: &str, records: &[SearchRecord]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(site_title));
    body.push_str(
        "<input type=\"text\" id=\"searchInput\" placeholder=\"Search recipes...\" \
         oninput=\"runSearch()\">\n",
    );
    body.push_str("<p><a href=\"ingredients.html\">Ingredient Index</a></p>\n");
    body.push_str("<ul id=\"searchResults\">\n");
    for record in records {
        body.push_str(&format!(
            "<li><a href=\"{}\">{}</a> <small>({})</small></li>\n",
            escape_attr(&record.url),
            escape(&record.title),
            escape(&record.source)
        ));
    }
    body.push_str("</ul>\n");
    body.push_str("<script src=\"recipes/search_data.js\"></script>\n");
    body.push_str(&format!("<script>\n{SEARCH_SCRIPT}</script>"));
    wrap_html(site_title, &body, "style.css")
}
