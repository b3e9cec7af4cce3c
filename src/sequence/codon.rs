use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};

/// Translate one DNA codon with the standard genetic code.
///
/// Returns `None` unless `codon` is exactly three unambiguous bases.
pub fn dna_codon_to_amino_acid(codon: &str) -> Option<char> {
    let codon_seq = codon.parse::<Seq<Dna>>().ok()?;
    if codon_seq.len() != 3 {
        return None;
    }
    STANDARD.to_amino(&codon_seq).to_string().chars().next()
}

pub fn is_stop_codon(codon: &str) -> bool {
    matches!(codon, "TAA" | "TAG" | "TGA" | "UAA" | "UAG" | "UGA")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codon_lookup() {
        assert_eq!(dna_codon_to_amino_acid("ATG"), Some('M'));
        assert_eq!(dna_codon_to_amino_acid("TGG"), Some('W'));
        assert_eq!(dna_codon_to_amino_acid("GCC"), Some('A'));
        assert_eq!(dna_codon_to_amino_acid("AT"), None);
        assert_eq!(dna_codon_to_amino_acid("ATN"), None);
    }

    #[test]
    fn test_stop_codons() {
        assert!(is_stop_codon("TGA"));
        assert!(is_stop_codon("UAG"));
        assert!(!is_stop_codon("ATG"));
    }
}
