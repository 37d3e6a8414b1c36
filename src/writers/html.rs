use crate::analysis::CookbookAnalysis;
use crate::document::Document;
use crate::error::Result;
use crate::index::IngredientIndex;
use crate::naming::FileNamer;
use crate::sink::Sink;
use crate::writers::templates::{escape, escape_attr, wrap_html, STYLESHEET};

/// Browsable HTML export of a single cookbook: an index page, one page per
/// recipe with its raw page text, and the cookbook's ingredient index.
pub fn export_html(doc: &dyn Document, analysis: &CookbookAnalysis, sink: &dyn Sink) -> Result<()> {
    let mut namer = FileNamer::new();
    let mut links = String::new();

    for range in &analysis.ranges {
        let file = namer.claim(&range.title, "html");
        links.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_attr(&file),
            escape(&range.title)
        ));

        let mut body = format!("<h1>{}</h1>\n", escape(&range.title));
        body.push_str("<p><a href=\"index.html\">← Back to Index</a></p>\n");
        for page in range.pages() {
            body.push_str(&format!("<pre>\n{}\n</pre>\n", escape(doc.page_text(page)?)));
        }
        sink.write_text(&file, &wrap_html(&range.title, &body, "style.css"))?;
    }

    let title = format!("{} - Recipe Index", analysis.source);
    let body = format!(
        "<h1>Recipe Index</h1>\n\
         <p><a href=\"ingredients.html\">Ingredient Index</a></p>\n\
         <ul>\n{links}</ul>"
    );
    sink.write_text("index.html", &wrap_html(&title, &body, "style.css"))?;

    let body = format!(
        "<h1>Ingredient Index</h1>\n<p><a href=\"index.html\">← Back to Index</a></p>\n{}",
        ingredient_list(&analysis.index)
    );
    sink.write_text(
        "ingredients.html",
        &wrap_html("Ingredient Index", &body, "style.css"),
    )?;
    sink.write_text("style.css", STYLESHEET)?;

    Ok(())
}

/// `<ul>` of index entries, words and titles sorted.
pub(crate) fn ingredient_list(index: &IngredientIndex) -> String {
    let mut out = String::from("<ul>\n");
    for (word, titles) in index {
        let titles: Vec<String> = titles.iter().map(|t| escape(t)).collect();
        out.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            escape(word),
            titles.join(", ")
        ));
    }
    out.push_str("</ul>");
    out
}
