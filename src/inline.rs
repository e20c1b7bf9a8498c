use std::sync::OnceLock;

use log::trace;
use regex::{Captures, Regex};

use crate::block::TextSpan;
use crate::error::{Error, Result};
use crate::node::Node;

/// Delimiter passes, applied in this order to the still-plain spans.
const DELIMITERS: [(&str, fn(String) -> TextSpan); 3] = [
    ("**", TextSpan::Bold),
    ("_", TextSpan::Italic),
    ("`", TextSpan::Code),
];

/// `[text](url)`, optionally preceded by `!`. A leading `!` marks an image,
/// which the link pass has to leave alone.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
    })
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

/// Split a line of markdown text into typed inline spans.
///
/// Bold, italic and code delimiters are resolved first, then links, then
/// images. Only spans that are still plain are rewritten by each pass.
pub fn tokenize_inline(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = Vec::new();
    if !text.is_empty() {
        spans.push(TextSpan::Plain(text.to_string()));
    }

    for (delimiter, make) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, make)?;
    }
    let spans = split_links(spans);
    let spans = split_images(spans);

    trace!("tokenized {:?} into {} spans", text, spans.len());
    Ok(spans)
}

/// Split every plain span on `delimiter`, turning the odd-numbered segments
/// into spans built by `make`. Empty segments are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    make: fn(String) -> TextSpan,
) -> Result<Vec<TextSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        if text.matches(delimiter).count() % 2 != 0 {
            return Err(Error::UnbalancedDelimiter { delimiter, text });
        }

        for (i, part) in text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::Plain(part.to_string()));
            } else {
                out.push(make(part.to_string()));
            }
        }
    }

    Ok(out)
}

/// Extract `[text](url)` links from plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    extract_pattern(spans, link_regex(), |caps| {
        if caps[0].starts_with('!') {
            return None;
        }
        Some(TextSpan::Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        })
    })
}

/// Extract `![alt](url)` images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    extract_pattern(spans, image_regex(), |caps| {
        Some(TextSpan::Image {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
        })
    })
}

/// Partition each plain span around the matches of `pattern`, left to right.
///
/// Matches for which `build` returns `None` stay part of the surrounding
/// plain text.
fn extract_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    build: impl Fn(&Captures) -> Option<TextSpan>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(extracted) = build(&caps) else {
                continue;
            };
            let whole = caps.get_match();
            if whole.start() > last {
                out.push(TextSpan::Plain(text[last..whole.start()].to_string()));
            }
            out.push(extracted);
            last = whole.end();
        }
        if last < text.len() {
            out.push(TextSpan::Plain(text[last..].to_string()));
        }
    }

    out
}

/// Map an inline span onto the leaf node that renders it.
pub fn span_to_node(span: TextSpan) -> Node {
    match span {
        TextSpan::Plain(text) => Node::text(text),
        TextSpan::Bold(text) => Node::leaf("b", text),
        TextSpan::Italic(text) => Node::leaf("i", text),
        TextSpan::Code(text) => Node::leaf("code", text),
        TextSpan::Link { text, url } => Node::leaf("a", text).with_attr("href", url),
        TextSpan::Image { alt, url } => Node::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", alt),
    }
}

/// Tokenize `text` and convert every span into a node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    Ok(tokenize_inline(text)?
        .into_iter()
        .map(span_to_node)
        .collect())
}
