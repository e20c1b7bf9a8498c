mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;

pub use block::{BlockKind, TextSpan};
pub use config::{Config, ConfigError, HtmlConfig, OutputConfig};
pub use error::{Error, Result};
pub use inline::{span_to_node, tokenize_inline};
pub use node::{Attributes, Node};
pub use parser::{classify_block, split_blocks};

/// Split markdown into blocks and classify each one.
pub fn parse_blocks(markdown: &str) -> Vec<(&str, BlockKind)> {
    parser::parse_blocks(markdown)
}

/// Convert markdown to a node tree using default config.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    markdown_to_node_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to a node tree with custom config.
pub fn markdown_to_node_with_config(markdown: &str, config: &Config) -> Result<Node> {
    html::markdown_to_node(markdown, config)
}

/// Convert markdown to an HTML string using default config.
pub fn render_document(markdown: &str) -> Result<String> {
    render_document_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to an HTML string with custom config.
pub fn render_document_with_config(markdown: &str, config: &Config) -> Result<String> {
    markdown_to_node_with_config(markdown, config)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(
        "# this is an h1\n\nthis is paragraph text\n\n## this is an h2\n",
        "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    )]
    #[case("- a\n- b", "<div><ul><li>a</li><li>b</li></ul></div>")]
    #[case("```\ncode\n```", "<div><pre><code>code\n</code></pre></div>")]
    #[case("", "<div></div>")]
    fn renders_documents(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(render_document(markdown).unwrap(), expected);
    }

    #[test]
    fn full_document() {
        let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Hello, World!\")
}
```
";
        let expected = concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>",
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
            "<h2>Blog posts</h2>",
            "<ul>",
            "<li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>",
            "<li><a href=\"/blog/tom\">Why Tom Bombadil Was a Mistake</a></li>",
            "</ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
            "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}\n</code></pre>",
            "</div>",
        );
        assert_eq!(render_document(md).unwrap(), expected);
    }

    #[test]
    fn errors_propagate_from_render_document() {
        assert!(matches!(
            render_document("fine\n\n**broken"),
            Err(Error::UnbalancedDelimiter { delimiter: "**", .. })
        ));
    }

    #[test]
    fn tokenize_inline_is_public() {
        assert_eq!(
            tokenize_inline("a `code` b").unwrap(),
            vec![
                TextSpan::Plain("a ".into()),
                TextSpan::Code("code".into()),
                TextSpan::Plain(" b".into()),
            ]
        );
    }

    #[test]
    fn parse_blocks_keeps_block_text() {
        assert_eq!(
            parse_blocks("# h\n\n1. a\n2. b"),
            vec![("# h", BlockKind::Heading), ("1. a\n2. b", BlockKind::OrderedList)]
        );
    }
}
