// src/config/mod.rs

//! Run configuration: the rendering switches and the files to print.

use std::path::PathBuf;

mod builder;

pub use builder::ConfigBuilder;

/// Rendering switches. Every switch is off unless a flag turned it on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Prefix each line with its right-aligned line number.
    pub number_lines: bool,
    /// Print a `$` right before every newline.
    pub show_line_ends: bool,
    /// Print a `-----<path>-----` banner before each file and a blank separator after it.
    pub show_filenames: bool,
}

/// Everything a run needs. Built once, before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub options: Options,
    /// Files in command-line order. Never empty once built.
    pub files: Vec<PathBuf>,
}
