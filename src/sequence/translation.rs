use std::path::Path;
use log::debug;
use crate::error::{Error, Result};
use crate::fasta::{read_multifasta, FastaRecords};
use crate::sequence::codon::{dna_codon_to_amino_acid, is_stop_codon};
use crate::sequence::validation::ensure_valid;

/// Translate an mRNA (or DNA) string into a protein with the standard code.
///
/// Reading starts at the first base and stops at the first stop codon, which
/// is not emitted. A trailing partial codon is ignored.
pub fn translate(rna: &str) -> Result<String> {
    ensure_valid(rna)?;

    let dna = rna.to_ascii_uppercase().replace('U', "T");
    let mut protein = String::with_capacity(dna.len() / 3);

    for i in (0..dna.len()).step_by(3) {
        if i + 3 > dna.len() {
            break;
        }
        let codon = &dna[i..i + 3];
        if is_stop_codon(codon) {
            break;
        }
        let amino = dna_codon_to_amino_acid(codon)
            .ok_or_else(|| Error::InvalidSequence(codon.to_string()))?;
        protein.push(amino);
    }

    Ok(protein)
}

/// Remove every intron from the gene and translate the remaining exons.
///
/// The first record is the gene; all later records are introns.
pub fn splice_translate(records: &FastaRecords) -> Result<String> {
    let mut sequences = records.sequences();
    let gene = sequences
        .next()
        .ok_or(Error::InsufficientCollection { found: 0, required: 1 })?;

    let mut exons = gene.to_string();
    for intron in sequences {
        if intron.is_empty() {
            continue;
        }
        exons = exons.replace(intron, "");
    }

    debug!("Spliced {} bases down to {} exon bases", gene.len(), exons.len());
    translate(&exons)
}

/// Splice and translate the records of a FASTA file.
pub fn splice_translate_fasta(path: impl AsRef<Path>) -> Result<String> {
    let records = read_multifasta(path)?;
    splice_translate(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_translate_protein_string() {
        let protein = translate("AUGGCCAUGGCGCCCAGAACUGAGAUCAAUAGUACCCGUAUUAACGGGUGA").unwrap();
        assert_eq!(protein, "MAMAPRTEINSTRING");
    }

    #[test]
    fn test_translate_accepts_dna_and_lowercase() {
        assert_eq!(translate("atggcc").unwrap(), "MA");
    }

    #[test]
    fn test_translate_ignores_partial_codon() {
        assert_eq!(translate("AUGGC").unwrap(), "M");
        assert_eq!(translate("").unwrap(), "");
    }

    #[test]
    fn test_translate_stops_at_first_stop() {
        assert_eq!(translate("UAAAUG").unwrap(), "");
    }

    #[test]
    fn test_translate_rejects_invalid() {
        assert!(matches!(translate("AUGXXX"), Err(Error::InvalidSequence(_))));
    }

    #[test]
    fn test_splice_translate() {
        let records = FastaRecords::from_pairs(vec![
            ("Rosalind_10", "ATGGTCTACATAGCTGACAAACAGCACGTAGCAATCGGTCGAATCTCGAGAGGCATATGGTCACATGATCGGTCGAGCGTGTTTCAAAGTTTGCGCCTAG"),
            ("Rosalind_12", "ATCGGTCGAA"),
            ("Rosalind_15", "ATCGGTCGAGCGTGT"),
        ]);
        assert_eq!(splice_translate(&records).unwrap(), "MVYIADKQHVASREAYGHMFKVCA");
    }

    #[test]
    fn test_splice_translate_fasta_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">gene\nATGGTCTACATAGCGGTCGAAGGTCTGA\n>intron\nGCGGTCGAAG").unwrap();
        file.flush().unwrap();

        assert_eq!(splice_translate_fasta(file.path()).unwrap(), "MVYIV");
    }

    #[test]
    fn test_splice_translate_without_records() {
        let records = FastaRecords::default();
        assert!(matches!(
            splice_translate(&records),
            Err(Error::InsufficientCollection { found: 0, required: 1 })
        ));
    }
}
