use std::ffi::OsStr;

use clap::{CommandFactory, Parser};

use crate::notation::{Intention, RiskLevel};

/// RICM CLI - prefix a commit message with its risk and intention codes
#[derive(Parser, Debug)]
#[command(name = "ricm")]
#[command(about = "Construct a Git commit message")]
#[command(version = "0.1.0")]
#[command(override_usage = "ricm [-H] -r <RISK> -i <INTENTION> <MESSAGE>")]
#[command(args_override_self = true)]
pub struct CliArgs {
    /// Display RICM values for --risk and --intention
    #[arg(short = 'H', long = "HELP_FOR_RICM")]
    pub help_for_ricm: bool,

    /// Risk level
    #[arg(short, long, value_enum)]
    pub risk: Option<RiskLevel>,

    /// Intention
    #[arg(short, long, value_enum)]
    pub intention: Option<Intention>,

    /// Print diagnostic info on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Commit message
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

impl CliArgs {
    /// Usage synopsis printed ahead of usage errors
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Whether the raw arguments ask for the RICM reference.
    ///
    /// Only exact `-H` / `--HELP_FOR_RICM` tokens before a `--` terminator
    /// count; nothing else on the line is validated.
    pub fn requests_reference<I, T>(argv: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        Self::has_flag(argv, "-H", "--HELP_FOR_RICM")
    }

    /// Whether the raw arguments ask for verbose output
    pub fn requests_verbose<I, T>(argv: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        Self::has_flag(argv, "-v", "--verbose")
    }

    fn has_flag<I, T>(argv: I, short: &str, long: &str) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        argv.into_iter()
            .map_while(|arg| {
                let arg = arg.as_ref();
                (arg != "--").then(|| arg == short || arg == long)
            })
            .any(|matched| matched)
    }
}
