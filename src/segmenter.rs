use crate::model::{Heading, RecipeRange};

/// Turn ordered headings into page ranges. Each range ends where the next
/// heading starts; the last one runs to the end of the document.
///
/// Pages before the first heading belong to no recipe. Zero headings means
/// zero ranges.
pub fn segment(headings: &[Heading], page_count: usize) -> Vec<RecipeRange> {
    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| RecipeRange {
            title: heading.title.clone(),
            start_page: heading.page_index,
            end_page: headings
                .get(i + 1)
                .map_or(page_count, |next| next.page_index),
        })
        .collect()
}

/// Pages preceding the first heading (cover, foreword, contents). Together
/// with [`segment`]'s ranges they cover the whole document exactly once.
pub fn front_matter(headings: &[Heading], page_count: usize) -> std::ops::Range<usize> {
    0..headings.first().map_or(page_count, |first| first.page_index)
}
