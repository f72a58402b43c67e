//! Murk CLI - noisy captcha image generation tool.

use clap::{Parser, Subcommand};
use colored::Colorize;
use murk_core::MurkError;
use tracing_subscriber::EnvFilter;

mod commands;
mod exit_codes;

use commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "murk")]
#[command(author, version, about = "Noisy captcha image generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a captcha image and write it to a file
    Generate(GenerateArgs),

    /// Print a synthesized passphrase
    Phrase {
        /// Passphrase length in characters
        #[arg(short, long, default_value_t = murk_core::DEFAULT_PASSPHRASE_LEN)]
        length: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Phrase { length } => commands::phrase::execute(length),
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(exit_code_for(&err));
    }
}

/// Map a failure to its sysexits-style exit code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MurkError>() {
        Some(MurkError::Configuration(_) | MurkError::RandomSampling(_)) => {
            exit_codes::USAGE_ERROR
        }
        Some(MurkError::ResourceUnavailable(_)) => exit_codes::INPUT_ERROR,
        Some(MurkError::Encoding(_)) => exit_codes::IO_ERROR,
        None => exit_codes::GENERAL_ERROR,
    }
}
