//! Rosalind - basic functions to work with biological sequences
//!
//! Sequence validation, reverse complement, transcription and translation,
//! Hamming distance, motif search, GC content, protein mass and a FASTA
//! reader, built around a common-substring engine that finds the longest
//! substring shared by a collection of sequences.

pub mod cli;
pub mod config;
pub mod error;
pub mod fasta;
pub mod logging;
pub mod protein;
pub mod sequence;
pub mod substring;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use fasta::{read_multifasta, FastaRecord, FastaRecords};
pub use substring::{
    all_common_substrings, longest_common_substring, longest_common_substring_with, ScanStrategy,
};
