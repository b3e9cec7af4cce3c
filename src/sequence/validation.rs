use crate::error::{Error, Result};

/// Check that a string only holds A, C, G, T or U in either case.
///
/// IUPAC ambiguity codes are rejected. The empty string is valid.
pub fn is_valid(seq: &str) -> bool {
    seq.chars()
        .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T' | 'U'))
}

pub(crate) fn ensure_valid(seq: &str) -> Result<()> {
    if is_valid(seq) {
        Ok(())
    } else {
        Err(Error::InvalidSequence(seq.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_dna_and_rna_in_any_case() {
        assert!(is_valid("ATGC"));
        assert!(is_valid("augc"));
        assert!(is_valid("AtGcU"));
        assert!(is_valid(""));
    }

    #[test]
    fn test_rejects_iupac_and_other_letters() {
        assert!(!is_valid("ATGN"));
        assert!(!is_valid("ACGR"));
        assert!(!is_valid("AT GC"));
        assert!(matches!(ensure_valid("XYZ"), Err(Error::InvalidSequence(_))));
    }
}
