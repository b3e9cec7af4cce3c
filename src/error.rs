//! Error types shared by every sequence operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// FASTA input the parser rejects, such as data before any `>` header
    #[error("malformed FASTA: {0}")]
    MalformedInput(String),

    /// Fewer sequences than the operation needs
    #[error("need at least {required} sequences, got {found}")]
    InsufficientCollection { found: usize, required: usize },

    /// No substring is shared by every sequence in the collection
    #[error("no common substring")]
    NoCommonSubstring,

    #[error("invalid nucleic acid sequence: {0}")]
    InvalidSequence(String),

    #[error("sequences differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("unknown amino acid residue '{0}'")]
    InvalidResidue(char),

    #[error("unknown scan strategy '{0}' (expected anchored or exhaustive)")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
