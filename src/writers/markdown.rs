use crate::index::IngredientIndex;
use crate::writers::split::SplitFile;

/// Numbered Markdown list linking every recipe to its extract.
pub fn render_toc(files: &[SplitFile]) -> String {
    let mut out = String::from("## Table of Contents\n\n");
    for (i, file) in files.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}]({})\n",
            i + 1,
            escape_link_text(&file.title),
            file.path
        ));
    }
    out
}

fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Bullet list of words, each with the sorted titles that mention it.
pub fn render_ingredient_index(index: &IngredientIndex) -> String {
    let mut out = String::from("## Ingredient Index\n\n");
    for (word, titles) in index {
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        out.push_str(&format!("- **{}** → {}\n", word, titles.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_format() {
        let files = vec![
            SplitFile {
                title: "Soup".into(),
                path: "SplitRecipes/Soup.json".into(),
            },
            SplitFile {
                title: "Grandma's Pie".into(),
                path: "SplitRecipes/Grandma_s_Pie.json".into(),
            },
        ];
        assert_eq!(
            render_toc(&files),
            "## Table of Contents\n\n\
             1. [Soup](SplitRecipes/Soup.json)\n\
             2. [Grandma's Pie](SplitRecipes/Grandma_s_Pie.json)\n"
        );
    }

    #[test]
    fn test_toc_escapes_link_text() {
        let files = vec![SplitFile {
            title: "Stew [Winter] \\ Spring".into(),
            path: "SplitRecipes/Stew_Winter_Spring.json".into(),
        }];
        assert_eq!(
            render_toc(&files),
            "## Table of Contents\n\n\
             1. [Stew \\[Winter\\] \\\\ Spring](SplitRecipes/Stew_Winter_Spring.json)\n"
        );
    }

    #[test]
    fn test_index_format_is_sorted() {
        let mut index = IngredientIndex::new();
        index.add_recipe("Soup", "onion leek");
        index.add_recipe("Bread", "onion flour");

        assert_eq!(
            render_ingredient_index(&index),
            "## Ingredient Index\n\n\
             - **flour** → Bread\n\
             - **leek** → Soup\n\
             - **onion** → Bread, Soup\n"
        );
    }

    #[test]
    fn test_empty_outputs_keep_headers() {
        assert_eq!(render_toc(&[]), "## Table of Contents\n\n");
        assert_eq!(
            render_ingredient_index(&IngredientIndex::new()),
            "## Ingredient Index\n\n"
        );
    }
}
