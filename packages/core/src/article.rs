//! Built-in sample article shown in the preview

/// Static article content rendered by the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
}

impl Article {
    /// The bundled sample used by the desktop preview
    pub const fn sample() -> Self {
        Self {
            title: "The Quiet Craft of Reading Interfaces",
            subtitle: "Why typography settings belong to the reader, not the designer",
            paragraphs: &[
                "Every reader brings their own eyes to a page. A line length \
                 that feels generous on one monitor crowds another, and a \
                 typeface that sings at eighteen pixels can mumble at \
                 thirty-eight. Interfaces that publish long-form text owe \
                 their readers a handful of levers: face, size, color, \
                 backdrop, and measure.",
                "The panel on the left edge of this window holds exactly \
                 those levers. Open it with the arrow, adjust the draft to \
                 taste, and press Apply to restyle this page. Reset returns \
                 the page to its shipped defaults. Nothing is saved anywhere; \
                 the preview lives and dies with the window.",
                "Clicking anywhere on the article, or pressing Escape, tucks \
                 the panel away again without touching your draft. That small \
                 courtesy - dismissal without commitment - is most of what \
                 separates a pleasant settings surface from a modal chore.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_article_has_content() {
        let article = Article::sample();
        assert!(!article.title.is_empty());
        assert!(!article.subtitle.is_empty());
        assert_eq!(article.paragraphs.len(), 3);
        assert!(article.paragraphs.iter().all(|p| !p.is_empty()));
    }
}
