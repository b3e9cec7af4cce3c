use log::warn;
use crate::error::{Error, Result};
use crate::sequence::validation::is_valid;

/// Fraction of G and C bases, in `[0, 1]`.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    if !is_valid(seq) {
        warn!("GC content requested for a non-nucleotide sequence of length {}", seq.len());
    }

    let total = seq.chars().count();
    let gc_count = seq.chars()
        .filter(|&c| matches!(c, 'G' | 'g' | 'C' | 'c'))
        .count();

    gc_count as f64 / total as f64
}

/// Number of substitutions between two sequences of equal length.
///
/// Comparison ignores case.
pub fn hamming_distance(seq1: &str, seq2: &str) -> Result<usize> {
    let left = seq1.chars().count();
    let right = seq2.chars().count();
    if left != right {
        return Err(Error::LengthMismatch { left, right });
    }

    Ok(seq1.chars()
        .zip(seq2.chars())
        .filter(|(c1, c2)| !c1.eq_ignore_ascii_case(c2))
        .count())
}

/// 1-based character positions of every occurrence of `motif`, overlaps included.
pub fn find_motif(seq: &str, motif: &str) -> Vec<usize> {
    let haystack: Vec<char> = seq.chars().collect();
    let needle: Vec<char> = motif.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    haystack.windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(i, _)| i + 1)
        .collect()
}
