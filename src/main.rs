use std::error::Error;
use clap::Parser;
use human_panic::setup_panic;
use log::info;

use rosalind::cli::{Cli, Commands};
use rosalind::config::{parse_log_level, Config};
use rosalind::logging::{init_logging, log_critical_error, log_shutdown, log_system_info};
use rosalind::{fasta, protein, sequence, substring};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(level) = cli.log_level.as_deref() {
        config.log_level = parse_log_level(level);
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Logging disabled: {e}");
    }
    log_system_info(&config);

    let outcome = run(cli.command, &config);
    log_shutdown();

    if let Err(e) = &outcome {
        log_critical_error(&e.to_string(), None);
    }
    outcome
}

fn run(command: Commands, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Lcs { input, strategy } => {
            let strategy = strategy.unwrap_or(config.strategy);
            info!("Longest common substring of {input:?} ({strategy})");
            println!("{}", substring::longest_common_substring_in_fasta(&input, strategy)?);
        }
        Commands::Substrings { first, second, strategy } => {
            let strategy = strategy.unwrap_or(config.strategy);
            for candidate in strategy.common_substrings(&first, &second) {
                println!("{candidate}");
            }
        }
        Commands::Revc { sequence } => {
            println!("{}", sequence::reverse_complement(&sequence)?);
        }
        Commands::Rna { sequence } => {
            println!("{}", sequence::transcribe(&sequence));
        }
        Commands::Hamm { first, second } => {
            println!("{}", sequence::hamming_distance(&first, &second)?);
        }
        Commands::Subs { sequence, motif } => {
            let positions: Vec<String> = sequence::find_motif(&sequence, &motif)
                .iter()
                .map(usize::to_string)
                .collect();
            println!("{}", positions.join(" "));
        }
        Commands::Prot { rna } => {
            println!("{}", sequence::translate(&rna)?);
        }
        Commands::Splc { input } => {
            println!("{}", sequence::splice_translate_fasta(&input)?);
        }
        Commands::Gc { input } => {
            let records = fasta::read_multifasta(&input)?;
            let best = records
                .iter()
                .map(|record| (record, sequence::gc_content(&record.sequence)))
                .max_by(|a, b| a.1.total_cmp(&b.1));
            match best {
                Some((record, gc)) => println!("{}\n{:.6}", record.name, gc * 100.0),
                None => info!("No records in {input:?}"),
            }
        }
        Commands::Prtm { protein } => {
            println!("{:.3}", protein::protein_mass(&protein)?);
        }
    }

    Ok(())
}
