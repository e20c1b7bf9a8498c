use thiserror::Error;

/// Everything that can make a markdown conversion fail.
///
/// Every variant aborts the whole conversion; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unbalanced delimiter {delimiter:?} in {text:?}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Invalid heading: {block:?}")]
    InvalidHeading { block: String },

    #[error("Invalid code block: {block:?}")]
    InvalidCodeBlock { block: String },

    #[error("Invalid quote line: {line:?}")]
    InvalidQuote { line: String },

    #[error("Invalid list item: {line:?}")]
    InvalidListItem { line: String },

    #[error("Leaf node has no value")]
    MissingValue,

    #[error("Parent node has no tag")]
    MissingTag,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
