//! Base conversion functions for DNA/RNA sequences

use crate::error::Result;
use crate::sequence::validation::ensure_valid;

/// Complement a DNA base, keeping its case. `U` pairs with `A`.
pub fn get_complementary_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' | 'U' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' | 'u' => 'a',
        'g' => 'c',
        'c' => 'g',
        _ => '?',
    }
}

/// Complement an RNA base, keeping its case.
pub fn get_complementary_rna_base(base: char) -> char {
    match base {
        'A' => 'U',
        'U' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 'u',
        'u' => 'a',
        'g' => 'c',
        'c' => 'g',
        _ => '?',
    }
}

/// Reverse complement of a DNA or RNA sequence.
///
/// A sequence holding `U` and no `T` is treated as RNA. Anything else is
/// complemented as DNA, which also turns a stray `U` into `A`.
pub fn reverse_complement(seq: &str) -> Result<String> {
    ensure_valid(seq)?;

    let upper = seq.to_ascii_uppercase();
    let complement: fn(char) -> char = if upper.contains('U') && !upper.contains('T') {
        get_complementary_rna_base
    } else {
        get_complementary_base
    };

    Ok(seq.chars().rev().map(complement).collect())
}

/// Transcribe DNA into RNA by replacing every thymine with uracil.
pub fn transcribe(dna: &str) -> String {
    dna.chars()
        .map(|c| match c {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect()
}
