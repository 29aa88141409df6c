use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use roman_cli::commands::{config_ops, convert_ops};
use roman_cli::trace_init::init_tracing;
use roman_core::{LetterCase, SubtractiveRule};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion tool")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSONL trace output (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert numerals to integers
    Parse {
        /// Numerals to convert (case-insensitive)
        #[arg(required = true)]
        numerals: Vec<String>,
        /// Only accept IV, IX, XL, XC, CD and CM as subtractive pairs
        #[arg(long, conflicts_with = "permissive")]
        canonical: bool,
        /// Accept any smaller letter before a larger one as subtractive
        #[arg(long)]
        permissive: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert numbers to numerals (rounded to the nearest integer)
    Format {
        /// Values in 1..=3999
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Use lowercase letters
        #[arg(long)]
        lower: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a value/numeral table
    Table {
        /// First value
        #[arg(long, default_value = "1")]
        from: u32,
        /// Last value (inclusive)
        #[arg(long, default_value = "100")]
        to: u32,
    },
    /// Inspect settings files
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Check a settings TOML file
    Validate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let guard = cli.trace_dir.as_deref().and_then(init_tracing);
    if cli.trace_dir.is_some() && guard.is_none() {
        eprintln!("warning: tracing unavailable (build with --features trace)");
    }

    if let Some(file) = &cli.settings {
        die!(config_ops::load_settings(file), "Error: {}");
    }

    let output = match cli.command {
        Command::Parse {
            numerals,
            canonical,
            permissive,
            json,
        } => {
            let rule = if canonical {
                Some(SubtractiveRule::Canonical)
            } else if permissive {
                Some(SubtractiveRule::Permissive)
            } else {
                None
            };
            die!(convert_ops::parse_cmd(&numerals, rule, json), "Error: {}")
        }
        Command::Format {
            values,
            lower,
            json,
        } => {
            let case = lower.then_some(LetterCase::Lower);
            die!(convert_ops::format_cmd(&values, case, json), "Error: {}")
        }
        Command::Table { from, to } => die!(convert_ops::table_cmd(from, to), "Error: {}"),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export().to_string(),
            SettingsAction::Validate { file } => {
                die!(config_ops::settings_validate(&file), "Error: {}")
            }
        },
    };

    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
