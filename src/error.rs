use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected exactly {expected} values, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    #[error("range [{left}, {right}] is invalid for a slice of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("input ended after {read} values")]
    UnexpectedEof { read: usize },

    #[error("`{0}` is not a valid integer")]
    MalformedInteger(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
