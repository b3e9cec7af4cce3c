//! Common-substring discovery across a collection of sequences.
//!
//! The pairwise step enumerates shared substrings between two sequences and
//! the reducer filters that candidate set against every other sequence,
//! keeping the longest survivor. Both are brute force and intended for
//! Rosalind-sized inputs (around 100 sequences of up to 1 kbp).

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use log::{debug, trace};
use crate::error::{Error, Result};
use crate::fasta::read_multifasta;

/// How the pairwise candidate set is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Two-pointer anchored scan, see [`all_common_substrings`].
    #[default]
    Anchored,
    /// Every substring of the first sequence that the second also contains.
    Exhaustive,
}

impl ScanStrategy {
    pub fn common_substrings(self, first: &str, second: &str) -> BTreeSet<String> {
        match self {
            ScanStrategy::Anchored => all_common_substrings(first, second),
            ScanStrategy::Exhaustive => exhaustive_common_substrings(first, second),
        }
    }
}

impl FromStr for ScanStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchored" => Ok(ScanStrategy::Anchored),
            "exhaustive" => Ok(ScanStrategy::Exhaustive),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::Anchored => write!(f, "anchored"),
            ScanStrategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

fn find_from(haystack: &[char], needle: char, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&c| c == needle)
        .map(|offset| from + offset)
}

/// Substrings recorded by a two-pointer anchored scan of `first` against `second`.
///
/// Each position of `first` except the last is an anchor. The anchor is
/// matched at successive occurrences of its character in `second` and
/// extended one character at a time; every extension is recorded. On a
/// mismatch each suffix of the window in `second`, up to and including the
/// mismatching character, is recorded before moving to the next occurrence.
///
/// An occurrence at index 0 of `second` never opens a window.
pub fn all_common_substrings(first: &str, second: &str) -> BTreeSet<String> {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let mut found = BTreeSet::new();

    for start1 in 0..a.len().saturating_sub(1) {
        let anchor = a[start1];
        let Some(mut start2) = find_from(&b, anchor, 0) else {
            continue;
        };
        let mut end1 = start1;
        let mut end2 = start2;

        while end2 > 0 && end2 < b.len() && end1 < a.len() {
            if a[end1] == b[end2] {
                found.insert(a[start1..=end1].iter().collect::<String>());
                end1 += 1;
                end2 += 1;
                continue;
            }

            for k in start2..end2 {
                found.insert(b[k..=end2].iter().collect::<String>());
            }
            end1 = start1;
            match find_from(&b, anchor, start2 + 1) {
                Some(next) => {
                    start2 = next;
                    end2 = next;
                }
                None => break,
            }
        }
    }

    trace!("Anchored scan of {} x {} found {} candidates", a.len(), b.len(), found.len());
    found
}

/// Every distinct non-empty substring present in both sequences.
pub fn exhaustive_common_substrings(first: &str, second: &str) -> BTreeSet<String> {
    let a: Vec<char> = first.chars().collect();
    let mut found = BTreeSet::new();

    for start in 0..a.len() {
        for end in start + 1..=a.len() {
            let candidate: String = a[start..end].iter().collect();
            // extending a substring absent from `second` cannot make it present
            if !second.contains(candidate.as_str()) {
                break;
            }
            found.insert(candidate);
        }
    }

    trace!("Exhaustive scan of {} chars found {} candidates", a.len(), found.len());
    found
}

/// Keep the candidates that also occur somewhere in `sequence`.
pub fn retain_shared(mut candidates: Vec<String>, sequence: &str) -> Vec<String> {
    candidates.retain(|candidate| sequence.contains(candidate.as_str()));
    candidates
}

/// One longest substring shared by every sequence, using the anchored scan.
pub fn longest_common_substring<S: AsRef<str>>(sequences: &[S]) -> Result<String> {
    longest_common_substring_with(sequences, ScanStrategy::default())
}

/// One longest substring shared by every sequence.
///
/// Candidates come from the last sequence scanned against the one before
/// it, then are filtered by the rest in collection order. Matching ignores
/// ASCII case and the result is upper case. Among equally long survivors the
/// lexicographically greatest is returned.
pub fn longest_common_substring_with<S: AsRef<str>>(
    sequences: &[S],
    strategy: ScanStrategy,
) -> Result<String> {
    let count = sequences.len();
    if count < 2 {
        return Err(Error::InsufficientCollection { found: count, required: 2 });
    }

    let folded: Vec<String> = sequences
        .iter()
        .map(|sequence| sequence.as_ref().to_ascii_uppercase())
        .collect();

    let first = &folded[count - 1];
    let second = &folded[count - 2];
    let mut survivors: Vec<String> = strategy.common_substrings(first, second).into_iter().collect();
    debug!("{strategy} scan produced {} candidates", survivors.len());

    for (index, sequence) in folded[..count - 2].iter().enumerate() {
        if survivors.is_empty() {
            break;
        }
        survivors = retain_shared(survivors, sequence);
        trace!("{} candidates survive sequence {}", survivors.len(), index + 1);
    }

    survivors.sort_by_key(|candidate| candidate.chars().count());
    survivors.pop().ok_or(Error::NoCommonSubstring)
}

/// Longest common substring of all records in a FASTA file.
pub fn longest_common_substring_in_fasta(
    path: impl AsRef<Path>,
    strategy: ScanStrategy,
) -> Result<String> {
    let records = read_multifasta(path)?;
    let sequences: Vec<&str> = records.sequences().collect();
    longest_common_substring_with(&sequences, strategy)
}
