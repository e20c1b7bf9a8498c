/// Inline text spans produced by the inline tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl TextSpan {
    /// Display text of the span (alt text for images).
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    /// Target of a link or image, `None` for every other span.
    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }
}

/// Block-level kinds a markdown block can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

#[cfg(test)]
mod tests {
    use super::TextSpan;

    #[test]
    fn url_only_on_links_and_images() {
        assert_eq!(TextSpan::Plain("a".into()).url(), None);
        assert_eq!(TextSpan::Code("a".into()).url(), None);
        let link = TextSpan::Link {
            text: "home".into(),
            url: "/".into(),
        };
        assert_eq!(link.url(), Some("/"));
        assert_eq!(link.text(), "home");
    }

    #[test]
    fn image_text_is_alt() {
        let image = TextSpan::Image {
            alt: "cat".into(),
            url: "cat.png".into(),
        };
        assert_eq!(image.text(), "cat");
        assert!(!image.is_plain());
    }
}
