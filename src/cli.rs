// src/cli.rs

use crate::errors::Error;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Concatenates FILE/S to standard output.
///
/// Files are printed in the order given. Each one must exist, be readable and be a
/// regular file; the first one that is not stops the run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
#[command(override_usage = "mycat [OPTION/S] [FILE/S]")]
#[command(after_help = concat!("Version: ", env!("CARGO_PKG_VERSION")))]
pub struct Cli {
    /// Files to print, in order.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Numbers each line.
    #[arg(short = 'n', long = "number", action = clap::ArgAction::SetTrue)]
    pub number_lines: bool,

    /// Shows a '$' at the end of each line.
    #[arg(short = 'e', long = "show-ends", action = clap::ArgAction::SetTrue)]
    pub show_line_ends: bool,

    /// Shows each file's name before printing it.
    #[arg(short = 'f', long = "show-filenames", action = clap::ArgAction::SetTrue)]
    pub show_filenames: bool,

    /// Display this help message.
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    /// Renders the help text printed for `-h`.
    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }
}

/// Maps a clap parse failure onto the application's usage errors.
///
/// Unknown flags keep the offending flag so the diagnostic can name it.
pub fn usage_error(err: clap::Error) -> Error {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return Error::UnknownOption(arg.clone());
        }
    }
    let rendered = err.to_string();
    let first_line = rendered
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string();
    Error::Usage(first_line)
}
