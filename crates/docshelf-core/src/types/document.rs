//! Document rendering classification.

use std::fmt;

/// How a document is presented when viewed.
///
/// The mode is derived from the name suffix alone: `.md` documents are
/// converted from Markdown to HTML, everything else (including `.txt` and
/// unrecognized suffixes) is served verbatim as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Served as-is with a `text/plain` content type.
    PlainText,
    /// Converted to HTML and served as `text/html`.
    Markdown,
}

impl RenderMode {
    /// Classify a document by its name.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".md") {
            Self::Markdown
        } else {
            Self::PlainText
        }
    }

    /// The `Content-Type` header value for a rendered document.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain; charset=utf-8",
            Self::Markdown => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainText => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_classification() {
        assert_eq!(RenderMode::from_name("about.md"), RenderMode::Markdown);
        assert_eq!(RenderMode::from_name("changes.txt"), RenderMode::PlainText);
        assert_eq!(RenderMode::from_name("notes.rst"), RenderMode::PlainText);
        assert_eq!(RenderMode::from_name("md"), RenderMode::PlainText);
    }

    #[test]
    fn test_content_types() {
        assert!(RenderMode::PlainText.content_type().starts_with("text/plain"));
        assert!(RenderMode::Markdown.content_type().starts_with("text/html"));
    }
}
