use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;

pub const STYLESHEET: &str = r#"body {
  font-family: Georgia, "Times New Roman", serif;
  max-width: 46em;
  margin: 2em auto;
  padding: 0 1em;
  line-height: 1.5;
  color: #222;
}
h1, h2 { font-family: "Helvetica Neue", Arial, sans-serif; }
h2 { margin-top: 1.5em; border-bottom: 1px solid #ddd; }
a { color: #8a3b12; }
small, .source { color: #666; }
pre { white-space: pre-wrap; }
#searchInput { width: 100%; padding: 0.5em; margin-bottom: 1em; box-sizing: border-box; }
"#;

pub const SEARCH_SCRIPT: &str = r#"function runSearch() {
  const query = document.getElementById("searchInput").value.toLowerCase();
  const results = document.getElementById("searchResults");
  results.innerHTML = "";
  window.searchData.forEach(entry => {
    const text = (entry.title + " " + entry.body + " " + entry.source).toLowerCase();
    if (text.includes(query)) {
      const li = document.createElement("li");
      const link = document.createElement("a");
      link.href = entry.url;
      link.textContent = entry.title;
      const source = document.createElement("small");
      source.textContent = " (" + entry.source + ")";
      li.appendChild(link);
      li.appendChild(source);
      results.appendChild(li);
    }
  });
}
"#;

/// Section labels promoted to sub-headings in recipe bodies
const SECTION_LABELS: [&str; 3] = ["Ingredients", "Method", "Directions"];

static SECTION_PATTERNS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    SECTION_LABELS
        .iter()
        .map(|label| {
            let pattern = Regex::new(&format!(r"(?i)\b{label}\b"))
                .expect("Invalid section label regex");
            (pattern, format!("<h2>{label}</h2>"))
        })
        .collect()
});

pub fn escape(text: &str) -> String {
    encode_text(text).into_owned()
}

pub fn escape_attr(text: &str) -> String {
    encode_double_quoted_attribute(text).into_owned()
}

/// Complete HTML page around `body`, which must already be markup.
pub fn wrap_html(title: &str, body: &str, stylesheet: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{}</title>
  <link rel="stylesheet" href="{}">
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        escape_attr(stylesheet),
        body
    )
}

/// Recipe text as HTML: escaped, the first occurrence of each section label
/// turned into an `<h2>`, newlines turned into `<br>`.
pub fn recipe_body(text: &str) -> String {
    let mut html = escape(text.trim());
    for (pattern, heading) in SECTION_PATTERNS.iter() {
        html = pattern.replacen(&html, 1, heading.as_str()).into_owned();
    }
    html.replace('\n', "<br>\n")
}
