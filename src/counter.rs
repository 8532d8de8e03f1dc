// src/counter.rs

use crate::errors::{io_error_with_path, open_error_with_path, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub(crate) const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Reads `reader` to the end in fixed-size chunks, handing each one to `on_chunk`.
///
/// Interrupted reads are retried; any other read failure goes through
/// `on_read_error` so callers can attach their own context.
pub(crate) fn for_each_chunk<R, E, M, F>(
    mut reader: R,
    mut on_read_error: M,
    mut on_chunk: F,
) -> std::result::Result<(), E>
where
    R: Read,
    M: FnMut(io::Error) -> E,
    F: FnMut(&[u8]) -> std::result::Result<(), E>,
{
    let mut buf = [0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => on_chunk(&buf[..n])?,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(on_read_error(e)),
        }
    }
}

/// Counts the newline (`\n`) bytes in the file at `path`.
///
/// The file is opened independently of any other reader. A final line without a
/// trailing newline is not counted, so `"a\nb"` yields 1.
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_error_with_path(e, path))?;
    let count = count_newlines(file).map_err(|e| io_error_with_path(e, path))?;
    log::debug!("Counted {} newlines in '{}'", count, path.display());
    Ok(count)
}

/// Counts the newline bytes produced by `reader`.
pub fn count_newlines<R: Read>(reader: R) -> io::Result<usize> {
    let mut count = 0;
    for_each_chunk(
        reader,
        |e| e,
        |chunk| {
            count += chunk.iter().filter(|&&b| b == b'\n').count();
            Ok(())
        },
    )?;
    Ok(count)
}

/// Number of digits needed to print `line_count`. A count of 0 still needs one digit.
///
/// # Examples
///
/// ```
/// use mycat::counter::number_width;
///
/// assert_eq!(number_width(0), 1);
/// assert_eq!(number_width(9), 1);
/// assert_eq!(number_width(12), 2);
/// ```
#[inline]
pub fn number_width(line_count: usize) -> usize {
    let mut width = 1;
    let mut rest = line_count / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}
