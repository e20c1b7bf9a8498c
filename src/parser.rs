use log::debug;

use crate::block::BlockKind;

pub(crate) const FENCE: &str = "```";

/// Split markdown into blocks separated by blank lines.
///
/// Any run of blank (or whitespace-only) lines is one separator. Blocks are
/// trimmed slices of the input; blocks that trim to nothing are dropped.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in markdown.split_inclusive('\n') {
        if line.trim().is_empty() {
            push_block(&markdown[start..offset], &mut blocks);
            start = offset + line.len();
        }
        offset += line.len();
    }
    push_block(&markdown[start..], &mut blocks);

    blocks
}

fn push_block<'a>(block: &'a str, blocks: &mut Vec<&'a str>) {
    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block);
    }
}

/// Number of leading `#` when the block is a valid heading (1-6 hashes then a space).
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

/// Classify a single (trimmed) block.
pub fn classify_block(block: &str) -> BlockKind {
    if heading_level(block).is_some() {
        return BlockKind::Heading;
    }
    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockKind::Code;
    }

    // Every line has to agree with the first one, otherwise it's a paragraph
    let mut kinds = block
        .lines()
        .enumerate()
        .map(|(i, line)| classify_line(line, i + 1));
    let Some(first) = kinds.next() else {
        return BlockKind::Paragraph;
    };
    if kinds.all(|kind| kind == first) {
        first
    } else {
        BlockKind::Paragraph
    }
}

/// Per-line tag, `index` is 1-based so ordered lists must count up from 1.
fn classify_line(line: &str, index: usize) -> BlockKind {
    if line.starts_with('>') {
        BlockKind::Quote
    } else if line.starts_with("- ") {
        BlockKind::UnorderedList
    } else if line.starts_with(&format!("{index}. ")) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Split markdown into blocks and classify each one, in source order.
pub fn parse_blocks(markdown: &str) -> Vec<(&str, BlockKind)> {
    split_blocks(markdown)
        .into_iter()
        .map(|block| {
            let kind = classify_block(block);
            debug!("block {:?} -> {:?}", block, kind);
            (block, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn runs_of_blank_lines_are_one_separator() {
        assert_eq!(
            split_blocks("# Heading\n\n\n\n\nparagraph\n \n\t\n- item"),
            vec!["# Heading", "paragraph", "- item"]
        );
    }

    #[test]
    fn blocks_are_trimmed() {
        assert_eq!(split_blocks("  a  \n\n\n   b\nc   \n"), vec!["a", "b\nc"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n  \n").is_empty());
    }

    #[test]
    fn crlf_blank_lines_split() {
        assert_eq!(split_blocks("a\r\n\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn resplitting_joined_blocks_is_idempotent() {
        let md = "# Title\n\n\n\nsome text\nmore\n\n> quote\n\n1. one\n2. two\n";
        let blocks = split_blocks(md);
        let joined = blocks.join("\n\n");
        assert_eq!(split_blocks(&joined), blocks);
    }

    #[rstest]
    #[case("This is a simple paragraph.", BlockKind::Paragraph)]
    #[case("# h", BlockKind::Heading)]
    #[case("###### six", BlockKind::Heading)]
    #[case("####### h", BlockKind::Paragraph)]
    #[case("#h", BlockKind::Paragraph)]
    #[case("```\ncode\n```", BlockKind::Code)]
    #[case("```rust\nfn main() {}\n```", BlockKind::Code)]
    #[case("``````", BlockKind::Code)]
    #[case("```\nunterminated", BlockKind::Paragraph)]
    #[case("> quote\n> more", BlockKind::Quote)]
    #[case(">no space", BlockKind::Quote)]
    #[case("- a\n- b", BlockKind::UnorderedList)]
    #[case("-a", BlockKind::Paragraph)]
    #[case("1. a\n2. b", BlockKind::OrderedList)]
    #[case("2. a\n3. b", BlockKind::Paragraph)]
    #[case("1. a\n3. b", BlockKind::Paragraph)]
    #[case("- a\n1. b", BlockKind::Paragraph)]
    #[case("> a\nb", BlockKind::Paragraph)]
    #[case("# heading\nwith a paragraph line", BlockKind::Heading)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify_block(block), expected);
    }

    #[test]
    fn ordered_list_past_nine() {
        let block = (1..=12)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify_block(&block), BlockKind::OrderedList);
    }

    #[test]
    fn classification_is_stable() {
        let md = "# h\n\npara\n\n```\nx\n```\n\n> q\n\n- u\n\n1. o";
        for (block, kind) in parse_blocks(md) {
            assert_eq!(classify_block(block), kind);
        }
    }

    #[test]
    fn parse_blocks_in_source_order() {
        let kinds: Vec<BlockKind> = parse_blocks("# h\n\npara\n\n- item\n\n1. one")
            .into_iter()
            .map(|(_, kind)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::UnorderedList,
                BlockKind::OrderedList,
            ]
        );
    }

    #[rstest]
    #[case("# a", Some(1))]
    #[case("### a", Some(3))]
    #[case("####### a", None)]
    #[case("#a", None)]
    #[case("#", None)]
    #[case("text", None)]
    fn heading_levels(#[case] block: &str, #[case] expected: Option<usize>) {
        assert_eq!(heading_level(block), expected);
    }
}
