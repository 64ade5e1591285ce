use thiserror::Error;

/// Errors from scramble parsing, table generation and table files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid scramble string.")]
    InvalidScramble,
    #[error("Table holds {0} bytes, expected {1}.")]
    InvalidTableSize(usize, usize),
    #[error("Depth table incomplete, {0}/{1} entries filled.")]
    IncompleteTable(usize, usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
