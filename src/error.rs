use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed tree: {0}")]
    MalformedTree(String),

    #[error("Symbol {0:?} has no code in the tree")]
    UnknownSymbol(char),

    #[error("Message ended mid-symbol after {position} bits (decoded so far: {decoded:?})")]
    TruncatedMessage { decoded: String, position: usize },

    #[error("Invalid bit digit {0:?}, expected '0' or '1'")]
    InvalidBit(char),
}

pub type HuffmanResult<T> = Result<T, HuffmanError>;
