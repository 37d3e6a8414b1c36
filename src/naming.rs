use std::collections::HashSet;

/// File stem for a recipe title: anything other than alphanumerics, spaces
/// and underscores becomes `_`, then surrounding whitespace is trimmed and
/// inner spaces become `_`.
pub fn safe_file_stem(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = replaced.trim().replace(' ', "_");
    if stem.is_empty() {
        "recipe".to_string()
    } else {
        stem
    }
}

/// Hands out file names that are unique within one output directory.
/// Later claims of a taken name get `_2`, `_3`, ... appended to the stem.
#[derive(Debug, Default)]
pub struct FileNamer {
    taken: HashSet<String>,
}

impl FileNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, title: &str, extension: &str) -> String {
        let stem = safe_file_stem(title);
        let mut name = format!("{stem}.{extension}");
        let mut n = 2;
        while !self.taken.insert(name.to_lowercase()) {
            name = format!("{stem}_{n}.{extension}");
            n += 1;
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("Grandma's Apple Pie"), "Grandma_s_Apple_Pie");
        assert_eq!(safe_file_stem("  Soup  "), "Soup");
        assert_eq!(safe_file_stem("Crème brûlée"), "Crème_brûlée");
        assert_eq!(safe_file_stem("a/b\\c"), "a_b_c");
        assert_eq!(safe_file_stem("   "), "recipe");
    }

    #[test]
    fn test_claim_disambiguates() {
        let mut namer = FileNamer::new();
        assert_eq!(namer.claim("Apple Pie", "html"), "Apple_Pie.html");
        assert_eq!(namer.claim("Apple  Pie", "html"), "Apple__Pie.html");
        assert_eq!(namer.claim("Apple Pie", "html"), "Apple_Pie_2.html");
        assert_eq!(namer.claim("apple pie", "html"), "apple_pie_3.html");
        assert_eq!(namer.claim("Apple Pie", "json"), "Apple_Pie.json");
    }
}
