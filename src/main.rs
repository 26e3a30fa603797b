//! # ulid CLI
//!
//! Command-line interface for generating and parsing ULIDs.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use ulidgen::{
    commands::{self, GenerateArgs, GenerationMode, ParseArgs},
    constants::DEFAULT_LOG_LEVEL,
    logging, Config,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/ulidgen/config   case_mode, output, max_count, log_level

ULID Format:
  26 characters of Crockford Base32 (0-9, A-Z without I, L, O, U)
  TTTTTTTTTTRRRRRRRRRRRRRRRR
  |________||______________|
   time (48 bit ms)  randomness (80 bit)

Environment:
  ULIDGEN_LOG        Tracing filter for stderr diagnostics (e.g. debug)
  ULIDGEN_LOG_JSON   Set to 1 for JSON log lines

Getting Started:
  ulid new                       Generate one ULID
  ulid monotonic -n 5            Generate five strictly increasing ULIDs
  ulid parse 01FR9EZ700RPB9GR0NVWG3MYFY

Learn more:
  ulid <COMMAND> --help          Show detailed help for a command";

#[derive(Parser)]
#[command(name = "ulid")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Generate and parse Universally Unique Lexicographically Sortable Identifiers")]
#[command(
    long_about = "ulid generates and parses ULIDs: 128-bit identifiers made of a 48-bit \
millisecond timestamp and 80 bits of randomness, written as 26 Crockford Base32 characters \
so that sorting the text sorts by creation time.

Monotonic generation keeps ULIDs created within the same millisecond strictly increasing \
by incrementing the random part instead of drawing a new one."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ULIDs for the current time
    #[command(
        long_about = "Generate ULIDs for the current time with fresh randomness.\n\n\
ULIDs from separate calls are only ordered by their millisecond timestamp; \
use 'ulid monotonic' for strict ordering within a millisecond.",
        after_help = "Examples:\n  \
ulid new                  One ULID\n  \
ulid new -n 10            Ten ULIDs, one per line\n  \
ulid new --json           Include timestamp and randomness fields"
    )]
    New {
        /// Number of ULIDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate ULIDs for a given timestamp
    #[command(
        long_about = "Generate ULIDs for an explicit timestamp (Unix milliseconds).\n\n\
Every ULID gets fresh randomness, so ULIDs sharing a seed time are distinct \
but carry no ordering between each other. Without --seed-time the current \
time is used.",
        after_help = "Examples:\n  \
ulid seeded --seed-time 1640995200000\n  \
ulid seeded --seed-time 1640995200000 -n 3 --json"
    )]
    Seeded {
        /// Timestamp in Unix milliseconds (0 to 2^48 - 1)
        #[arg(long, allow_negative_numbers = true)]
        seed_time: Option<i64>,

        /// Number of ULIDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate strictly increasing ULIDs
    #[command(
        long_about = "Generate ULIDs from a monotonic sequencer.\n\n\
When consecutive ULIDs share a millisecond, the random part of the previous \
ULID is incremented by one, so the batch is strictly increasing. In the \
astronomically unlikely case that the random part is already at its maximum, \
fresh randomness is drawn instead.",
        after_help = "Examples:\n  \
ulid monotonic -n 5\n  \
ulid monotonic --seed-time 1640995200000 -n 5"
    )]
    Monotonic {
        /// Timestamp in Unix milliseconds (0 to 2^48 - 1)
        #[arg(long, allow_negative_numbers = true)]
        seed_time: Option<i64>,

        /// Number of ULIDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decompose ULIDs into timestamp and randomness
    #[command(
        long_about = "Parse one or more ULIDs and print their timestamp and date.\n\n\
Only length (26) and alphabet membership are checked. Lower-case input is \
accepted unless --strict is given or case_mode = \"strict\" is configured.",
        after_help = "Examples:\n  \
ulid parse 01FR9EZ700RPB9GR0NVWG3MYFY\n  \
ulid parse 01fr9ez700rpb9gr0nvwg3myfy --json\n  \
ulid parse --strict 01FR9EZ700RPB9GR0NVWG3MYFY"
    )]
    Parse {
        /// ULIDs to parse
        #[arg(required = true)]
        ulids: Vec<String>,

        /// Reject lower-case input
        #[arg(long)]
        strict: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the global configuration file
    Setup,

    /// Print a shell completion script
    #[command(after_help = "Examples:\n  \
ulid completions zsh > ~/.zfunc/_ulid\n  \
ulid completions bash > ~/.local/share/bash-completion/completions/ulid")]
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { count, json } => commands::generate(
            &GenerateArgs {
                mode: GenerationMode::Standard,
                seed_time: None,
                count,
                json,
            },
            &load_config()?,
        ),

        Commands::Seeded {
            seed_time,
            count,
            json,
        } => commands::generate(
            &GenerateArgs {
                mode: GenerationMode::Seeded,
                seed_time,
                count,
                json,
            },
            &load_config()?,
        ),

        Commands::Monotonic {
            seed_time,
            count,
            json,
        } => commands::generate(
            &GenerateArgs {
                mode: GenerationMode::Monotonic,
                seed_time,
                count,
                json,
            },
            &load_config()?,
        ),

        Commands::Parse {
            ulids,
            strict,
            json,
        } => commands::parse(
            &ParseArgs {
                ulids,
                strict,
                json,
            },
            &load_config()?,
        ),

        // Setup must still run against a broken config so it can report it
        Commands::Setup => {
            logging::init(DEFAULT_LOG_LEVEL)?;
            commands::setup()
        }

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

/// Loads the config file and starts logging at its level.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    logging::init(config.log_level())?;
    Ok(config)
}
