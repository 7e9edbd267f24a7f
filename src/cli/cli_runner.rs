use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;

use crate::cli::{CliArgs, OutputFormatter};
use crate::help::render_reference;
use crate::notation::CommitRequest;
use crate::utils::error::{RicmError, RicmResult};

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Print the RICM reference tables
    ShowReference,
    /// Print the composed commit line
    Compose(CommitRequest),
}

/// Main CLI runner that turns parsed arguments into output text
pub struct CliRunner {
    verbose: bool,
}

impl CliRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Decide what to do; the reference flag wins over every missing argument
    pub fn resolve(args: CliArgs) -> RicmResult<Action> {
        if args.help_for_ricm {
            return Ok(Action::ShowReference);
        }

        let message = args.message.filter(|m| !m.is_empty());

        let mut missing = Vec::new();
        if args.risk.is_none() {
            missing.push("--risk <RISK>");
        }
        if args.intention.is_none() {
            missing.push("--intention <INTENTION>");
        }
        if message.is_none() {
            missing.push("<MESSAGE>");
        }

        match (args.risk, args.intention, message) {
            (Some(risk), Some(intention), Some(message)) => {
                Ok(Action::Compose(CommitRequest::new(risk, intention, message)?))
            }
            _ => Err(RicmError::MissingArguments(missing)),
        }
    }

    /// Reference tables as printed for -H/--HELP_FOR_RICM
    pub fn show_reference(&self) -> String {
        if self.verbose {
            eprintln!("{}", OutputFormatter::format_info("Printing RICM reference"));
        }
        render_reference().trim_end().to_string()
    }

    /// Produce the text to print on stdout
    pub fn execute(&self, args: CliArgs) -> RicmResult<String> {
        match Self::resolve(args)? {
            Action::ShowReference => Ok(self.show_reference()),
            Action::Compose(request) => {
                if self.verbose {
                    eprintln!("{}", OutputFormatter::describe_request(&request));
                }
                Ok(request.format())
            }
        }
    }
}

/// Main entry point for CLI execution
pub fn run_cli() -> anyhow::Result<()> {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let raw_args = argv.iter().skip(1);

    // -H wins over anything the strict parse would reject
    let result = if CliArgs::requests_reference(raw_args.clone()) {
        let runner = CliRunner::new(CliArgs::requests_verbose(raw_args));
        write_stdout(runner.show_reference())
    } else {
        let args = CliArgs::parse_from(&argv);
        let runner = CliRunner::new(args.verbose);
        runner.execute(args).and_then(write_stdout)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if e.is_usage_error() {
                println!("{}", CliArgs::usage().trim_end());
                println!("{}", OutputFormatter::format_error(&e));
            } else {
                eprintln!("{}", OutputFormatter::format_error(&e));
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn write_stdout(output: String) -> RicmResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
