use log::debug;

use crate::block::{BlockKind, TextSpan};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::inline::{span_to_node, text_to_children};
use crate::node::Node;
use crate::parser::{FENCE, heading_level, parse_blocks};

/// Convert a whole markdown document into a tree rooted at the configured tag.
pub fn markdown_to_node(markdown: &str, config: &Config) -> Result<Node> {
    let children = parse_blocks(markdown)
        .into_iter()
        .map(|(block, kind)| block_to_node(block, kind, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent(config.html.root_tag.as_str(), children))
}

/// Build the tree fragment for one classified block.
pub fn block_to_node(block: &str, kind: BlockKind, config: &Config) -> Result<Node> {
    let node = match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => code_to_node(block, config),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    };
    node.inspect_err(|e| debug!("failed to convert {kind:?} block: {e}"))
}

fn paragraph_to_node(block: &str) -> Result<Node> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(Node::parent("p", text_to_children(&text)?))
}

fn heading_to_node(block: &str) -> Result<Node> {
    let invalid = || Error::InvalidHeading {
        block: block.to_string(),
    };

    let level = heading_level(block).ok_or_else(invalid)?;
    // heading_level guarantees a space right after the hashes
    let text = &block[level + 1..];
    if text.is_empty() {
        return Err(invalid());
    }

    Ok(Node::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_node(block: &str, config: &Config) -> Result<Node> {
    if !block.starts_with(FENCE) || !block.ends_with(FENCE) {
        return Err(Error::InvalidCodeBlock {
            block: block.to_string(),
        });
    }

    let (info, body) = split_fence(block);
    let mut code = Node::parent("code", vec![span_to_node(TextSpan::Plain(body.to_string()))]);
    if config.html.code_language_class && !info.is_empty() {
        code = code.with_attr("class", format!("language-{info}"));
    }

    Ok(Node::parent("pre", vec![code]))
}

/// Split a fenced block into its info string and raw body.
///
/// The body is what lies strictly between the opening fence line and the
/// closing fence. Fences that overlap leave an empty body. Only the first
/// word of the opening line counts as the info string.
fn split_fence(block: &str) -> (&str, &str) {
    if block.len() < 2 * FENCE.len() {
        return ("", "");
    }
    let inner = &block[FENCE.len()..block.len() - FENCE.len()];
    match inner.split_once('\n') {
        Some((info, body)) => (info.split_whitespace().next().unwrap_or(""), body),
        None => ("", inner),
    }
}

fn quote_to_node(block: &str) -> Result<Node> {
    let lines = block
        .lines()
        .map(|line| {
            if !line.starts_with('>') {
                return Err(Error::InvalidQuote {
                    line: line.to_string(),
                });
            }
            Ok(line.trim_start_matches('>').trim())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("blockquote", text_to_children(&lines.join(" "))?))
}

fn unordered_list_to_node(block: &str) -> Result<Node> {
    let items = block
        .lines()
        .map(|line| {
            let text = line
                .strip_prefix("- ")
                .ok_or_else(|| Error::InvalidListItem {
                    line: line.to_string(),
                })?;
            list_item(text)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<Node> {
    let items = block
        .lines()
        .enumerate()
        .map(|(i, line)| {
            // Numbering was checked during classification, so only skip the prefix width
            let width = format!("{}. ", i + 1).len();
            let text = line.get(width..).ok_or_else(|| Error::InvalidListItem {
                line: line.to_string(),
            })?;
            list_item(text)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("ol", items))
}

fn list_item(text: &str) -> Result<Node> {
    Ok(Node::parent("li", text_to_children(text)?))
}
