//! crockford32 CLI

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = run() {
        output::Output::error_user(err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("crockford32 CLI not enabled. Build with: cargo build --features cli --bin crockford32");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
mod commands;
#[cfg(feature = "cli")]
mod error;
#[cfg(feature = "cli")]
mod output;
#[cfg(feature = "cli")]
mod util;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use error::{CliError, Result};
#[cfg(feature = "cli")]
use output::Output;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "crockford32")]
#[command(about = "Crockford Base32 integer codec", version)]
#[command(arg_required_else_help = true)]
/// Command-line arguments.
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    /// Selected subcommand.
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
/// Subcommands.
enum Commands {
    /// Encode non-negative integers
    Encode(commands::encode::EncodeArgs),

    /// Decode symbol strings to integers
    Decode(commands::decode::DecodeArgs),

    /// Print the canonical form of symbol strings
    Normalize(commands::normalize::NormalizeArgs),

    /// Check whether symbol strings can be decoded
    Validate(commands::validate::ValidateArgs),
}

#[cfg(feature = "cli")]
/// Shared state passed to every command.
struct Context {
    /// Output policy.
    out: Output,
}

#[cfg(feature = "cli")]
/// Parses arguments and dispatches to the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet && cli.verbose {
        return Err(CliError::Message(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    let ctx = Context {
        out: Output::new(cli.quiet, cli.verbose),
    };

    match cli.command {
        Commands::Encode(args) => commands::encode::run(&ctx, &args),
        Commands::Decode(args) => commands::decode::run(&ctx, &args),
        Commands::Normalize(args) => commands::normalize::run(&ctx, &args),
        Commands::Validate(args) => commands::validate::run(&ctx, &args),
    }
}
