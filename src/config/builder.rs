// src/config/builder.rs

use super::{Config, Options};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically or from parsed CLI flags.
///
/// # Example
///
/// ```
/// use mycat::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .number_lines(true)
///     .file("notes.txt")
///     .build()
///     .unwrap();
/// assert!(config.options.number_lines);
/// assert!(!config.options.show_line_ends);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    options: Options,
    files: Vec<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with every switch off and no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line flags.
    pub fn from_cli(cli: Cli) -> Self {
        Self::new()
            .number_lines(cli.number_lines)
            .show_line_ends(cli.show_line_ends)
            .show_filenames(cli.show_filenames)
            .files(cli.files)
    }

    pub fn number_lines(mut self, enabled: bool) -> Self {
        self.options.number_lines = enabled;
        self
    }

    pub fn show_line_ends(mut self, enabled: bool) -> Self {
        self.options.show_line_ends = enabled;
        self
    }

    pub fn show_filenames(mut self, enabled: bool) -> Self {
        self.options.show_filenames = enabled;
        self
    }

    /// Appends one file to the list.
    pub fn file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.files.push(path.into());
        self
    }

    /// Appends several files, keeping their order.
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// Returns [`Error::NoFiles`] if no file was added.
    pub fn build(self) -> Result<Config> {
        if self.files.is_empty() {
            return Err(Error::NoFiles);
        }
        Ok(Config {
            options: self.options,
            files: self.files,
        })
    }
}
