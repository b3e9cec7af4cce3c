use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::substring::ScanStrategy;

#[derive(Parser, Debug)]
#[command(name = "rosalind", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error). Overrides ROSALIND_LOG_LEVEL.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Longest substring shared by every record of a FASTA file.
    Lcs {
        #[arg(value_name = "FASTA")]
        input: PathBuf,

        /// Candidate scan (anchored or exhaustive). Overrides ROSALIND_SCAN_STRATEGY.
        #[arg(long, value_name = "STRATEGY")]
        strategy: Option<ScanStrategy>,
    },

    /// All common substrings of two sequences, one per line.
    Substrings {
        first: String,
        second: String,

        #[arg(long, value_name = "STRATEGY")]
        strategy: Option<ScanStrategy>,
    },

    /// Reverse complement of a DNA or RNA sequence.
    Revc { sequence: String },

    /// Transcribe DNA into RNA.
    Rna { sequence: String },

    /// Hamming distance between two sequences of equal length.
    Hamm { first: String, second: String },

    /// 1-based positions of a motif, overlaps included.
    Subs { sequence: String, motif: String },

    /// Translate mRNA into protein.
    Prot { rna: String },

    /// Splice introns out of the first FASTA record and translate it.
    Splc {
        #[arg(value_name = "FASTA")]
        input: PathBuf,
    },

    /// Record with the highest GC content.
    Gc {
        #[arg(value_name = "FASTA")]
        input: PathBuf,
    },

    /// Monoisotopic mass of a protein.
    Prtm { protein: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lcs_with_strategy() {
        let cli = Cli::try_parse_from(["rosalind", "lcs", "input.fa", "--strategy", "exhaustive"]).unwrap();
        match cli.command {
            Commands::Lcs { input, strategy } => {
                assert_eq!(input, PathBuf::from("input.fa"));
                assert_eq!(strategy, Some(ScanStrategy::Exhaustive));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["rosalind", "substrings", "AC", "CA", "--strategy", "fast"]).is_err());
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["rosalind", "revc", "ATGC", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
