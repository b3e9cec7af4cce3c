//! Monoisotopic masses of amino acid residues
//!
//! Masses are in Daltons for residues inside a peptide chain, so the water
//! lost in each peptide bond is already excluded.

use crate::error::{Error, Result};

/// Monoisotopic residue masses of the 20 standard amino acids.
pub static MONOISOTOPIC_MASSES: [(char, f64); 20] = [
    ('A', 71.03711),   // Alanine
    ('C', 103.00919),  // Cysteine
    ('D', 115.02694),  // Aspartic acid
    ('E', 129.04259),  // Glutamic acid
    ('F', 147.06841),  // Phenylalanine
    ('G', 57.02146),   // Glycine
    ('H', 137.05891),  // Histidine
    ('I', 113.08406),  // Isoleucine
    ('K', 128.09496),  // Lysine
    ('L', 113.08406),  // Leucine
    ('M', 131.04049),  // Methionine
    ('N', 114.04293),  // Asparagine
    ('P', 97.05276),   // Proline
    ('Q', 128.05858),  // Glutamine
    ('R', 156.10111),  // Arginine
    ('S', 87.03203),   // Serine
    ('T', 101.04768),  // Threonine
    ('V', 99.06841),   // Valine
    ('W', 186.07931),  // Tryptophan
    ('Y', 163.06333),  // Tyrosine
];

/// Get the monoisotopic mass of a residue by its single-letter code
pub fn get_amino_acid_molecular_weight(amino_acid: char) -> Option<f64> {
    let code = amino_acid.to_ascii_uppercase();
    MONOISOTOPIC_MASSES
        .iter()
        .find(|(residue, _)| *residue == code)
        .map(|&(_, mass)| mass)
}

/// Total monoisotopic mass of a protein string.
pub fn protein_mass(protein: &str) -> Result<f64> {
    protein.chars().try_fold(0.0, |total, residue| {
        get_amino_acid_molecular_weight(residue)
            .map(|mass| total + mass)
            .ok_or(Error::InvalidResidue(residue))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_amino_acid_weights() {
        assert_eq!(get_amino_acid_molecular_weight('A'), Some(71.03711));
        assert_eq!(get_amino_acid_molecular_weight('g'), Some(57.02146));
        assert_eq!(get_amino_acid_molecular_weight('W'), Some(186.07931));
        assert_eq!(get_amino_acid_molecular_weight('*'), None);
        assert_eq!(get_amino_acid_molecular_weight('X'), None);
    }

    #[test]
    fn test_protein_mass() {
        let mass = protein_mass("SKADYEK").unwrap();
        assert!((mass - 821.39192).abs() < 1e-6);
    }

    #[test]
    fn test_protein_mass_is_case_insensitive() {
        let upper = protein_mass("MAMAPRTEINSTRING").unwrap();
        let lower = protein_mass("mamaprteinstring").unwrap();
        assert!((upper - lower).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_protein() {
        assert_eq!(protein_mass("").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_residue() {
        assert!(matches!(protein_mass("AXG"), Err(Error::InvalidResidue('X'))));
    }
}
