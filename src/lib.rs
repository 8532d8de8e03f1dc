//! `mycat` is a library and command-line tool that concatenates files to standard
//! output, optionally numbering lines, marking line ends with `$`, and printing a
//! `-----<path>-----` banner before each file.
//!
//! The pipeline per file is:
//! 1.  **Validate**: stat the path and check that it exists, is readable and is a
//!     regular file ([`FileTarget`]).
//! 2.  **Count**: when numbering, count the file's newlines to size the number field
//!     ([`counter`]).
//! 3.  **Render**: stream the file to the output with the active [`Options`] applied
//!     ([`render`]).
//!
//! The first failing file stops the run.
//!
//! # Example: Library Usage
//!
//! ```
//! use mycat::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let path = temp_dir.path().join("a.txt");
//! fs::write(&path, "hello\nworld\n").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .number_lines(true)
//!     .show_line_ends(true)
//!     .file(&path)
//!     .build()
//!     .unwrap();
//!
//! let mut output = Vec::new();
//! run(&config, &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "  1 hello$\n  2 world$\n");
//! ```

pub mod cli;
pub mod config;
pub mod counter;
pub mod errors;
pub mod render;
pub mod target;

pub use config::{Config, ConfigBuilder, Options};
pub use errors::{Error, Result};
pub use target::{FileKind, FileTarget};

use std::io::Write;
use std::path::Path;

/// Validates and renders every file in `config`, in order, into `writer`.
///
/// Processing stops at the first file that fails. The writer is flushed before
/// any error is returned, so output from earlier files is visible before the
/// caller reports the failure.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<()> {
    let result = config
        .files
        .iter()
        .try_for_each(|path| process_file(path, config.options, writer));
    writer.flush()?;
    result
}

fn process_file(path: &Path, options: Options, writer: &mut dyn Write) -> Result<()> {
    FileTarget::inspect(path).validate()?;
    if options.show_filenames {
        writeln!(writer, "-----{}-----", path.display())?;
    }
    render::render_file(path, options, writer)
}
