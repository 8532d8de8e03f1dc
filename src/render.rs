// src/render.rs

//! Streams file contents to the output sink with line numbers, end markers and
//! filename separators applied.
//!
//! Input is handled in chunks; a line may span any number of chunks, so the
//! per-line state lives in [`RenderState`] rather than in the read loop.

use crate::config::Options;
use crate::counter::{count_lines, for_each_chunk, number_width};
use crate::errors::{io_error_with_path, open_error_with_path, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Marker written before each newline when line ends are shown.
const LINE_END_MARKER: &[u8] = b"$";

/// Extra indent before the number when line ends are shown, mirroring the `$` on the right.
const LINE_END_INDENT: &[u8] = b"  ";

/// Written after each file's contents when filenames are shown.
const FILE_SEPARATOR: &[u8] = b"\n\n";

/// Per-file rendering state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// 1-based number of the line currently being written.
    pub line: usize,
    /// Whether the current line already has its number prefix.
    pub prefix_emitted: bool,
    /// Field width for line numbers.
    pub width: usize,
}

impl RenderState {
    pub fn new(width: usize) -> Self {
        RenderState {
            line: 1,
            prefix_emitted: false,
            width: width.max(1),
        }
    }
}

/// Writes one file's bytes to `writer`, chunk by chunk.
pub struct Renderer<'w> {
    options: Options,
    state: RenderState,
    writer: &'w mut dyn Write,
}

impl<'w> Renderer<'w> {
    pub fn new(options: Options, width: usize, writer: &'w mut dyn Write) -> Self {
        Renderer {
            options,
            state: RenderState::new(width),
            writer,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Writes `chunk`, inserting prefixes and markers at line boundaries.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        let mut rest = chunk;
        while !rest.is_empty() {
            if self.options.number_lines && !self.state.prefix_emitted {
                self.write_prefix()?;
            }
            match rest.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    self.writer.write_all(&rest[..end])?;
                    if self.options.show_line_ends {
                        self.writer.write_all(LINE_END_MARKER)?;
                    }
                    self.writer.write_all(b"\n")?;
                    self.state.line += 1;
                    self.state.prefix_emitted = false;
                    rest = &rest[end + 1..];
                }
                None => {
                    self.writer.write_all(rest)?;
                    rest = &[];
                }
            }
        }
        Ok(())
    }

    /// Ends the file. Emits the separator when filenames are shown, whether or not
    /// the file ended with a newline.
    pub fn finish(self) -> io::Result<()> {
        if self.options.show_filenames {
            self.writer.write_all(FILE_SEPARATOR)?;
        }
        Ok(())
    }

    fn write_prefix(&mut self) -> io::Result<()> {
        if self.options.show_line_ends {
            self.writer.write_all(LINE_END_INDENT)?;
        }
        // Numbers wider than the field (an unterminated last line) widen it.
        write!(
            self.writer,
            "{:>width$} ",
            self.state.line,
            width = self.state.width
        )?;
        self.state.prefix_emitted = true;
        Ok(())
    }
}

/// Renders everything `reader` yields. `width` is the line-number field width.
pub fn render<R: Read>(
    reader: R,
    options: Options,
    width: usize,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let mut renderer = Renderer::new(options, width, writer);
    for_each_chunk(reader, |e| e, |chunk| renderer.write_chunk(chunk))?;
    renderer.finish()
}

/// Renders the file at `path`.
///
/// With numbering enabled the file is read twice: once to count its newlines for
/// the field width, then to print it.
///
/// # Errors
/// A refused open is an [`Error::PermissionDenied`](crate::errors::Error::PermissionDenied);
/// any other open or read failure is an [`Error::Io`](crate::errors::Error::Io);
/// failing to write is an [`Error::Output`](crate::errors::Error::Output).
pub fn render_file<P: AsRef<Path>>(
    path: P,
    options: Options,
    writer: &mut dyn Write,
) -> Result<()> {
    let path = path.as_ref();
    let width = if options.number_lines {
        number_width(count_lines(path)?)
    } else {
        1
    };
    log::debug!(
        "Rendering '{}' (number width {}, {:?})",
        path.display(),
        width,
        options
    );

    let file = File::open(path).map_err(|e| open_error_with_path(e, path))?;
    let mut renderer = Renderer::new(options, width, writer);
    for_each_chunk(
        file,
        |e| io_error_with_path(e, path),
        |chunk| Ok(renderer.write_chunk(chunk)?),
    )?;
    log::trace!("Finished '{}' at {:?}", path.display(), renderer.state());
    renderer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Spans several read chunks.
    const READ_CHUNK_TEST_LINES: usize = 10_000;

    fn opts(number_lines: bool, show_line_ends: bool, show_filenames: bool) -> Options {
        Options {
            number_lines,
            show_line_ends,
            show_filenames,
        }
    }

    fn render_str(content: &str, options: Options, width: usize) -> String {
        let mut out = Vec::new();
        render(content.as_bytes(), options, width, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_passthrough() {
        let content = "hello\nworld\nno newline at end";
        assert_eq!(render_str(content, Options::default(), 1), content);
    }

    #[test]
    fn test_number_and_ends() {
        let out = render_str("hello\nworld\n", opts(true, true, false), 1);
        assert_eq!(out, "  1 hello$\n  2 world$\n");
    }

    #[test]
    fn test_numbers_only() {
        let out = render_str("a\nb\n", opts(true, false, false), 1);
        assert_eq!(out, "1 a\n2 b\n");
    }

    #[test]
    fn test_numbers_are_right_aligned() {
        let content = "x\n".repeat(12);
        let out = render_str(&content, opts(true, false, false), 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1 x");
        assert_eq!(lines[8], " 9 x");
        assert_eq!(lines[9], "10 x");
        assert_eq!(lines[11], "12 x");
    }

    #[test]
    fn test_ends_only() {
        let out = render_str("a\n\nb", opts(false, true, false), 1);
        assert_eq!(out, "a$\n$\nb");
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert_eq!(render_str("", opts(true, true, false), 1), "");
    }

    #[test]
    fn test_empty_input_with_filenames_emits_separator() {
        assert_eq!(render_str("", opts(true, true, true), 1), "\n\n");
    }

    #[test]
    fn test_single_unterminated_line() {
        let out = render_str("only", opts(true, true, false), 1);
        assert_eq!(out, "  1 only");
    }

    #[test]
    fn test_separator_after_unterminated_line() {
        let out = render_str("a\nb", opts(false, false, true), 1);
        assert_eq!(out, "a\nb\n\n");
    }

    #[test]
    fn test_blank_lines_are_numbered() {
        let out = render_str("\n\n", opts(true, false, false), 1);
        assert_eq!(out, "1 \n2 \n");
    }

    #[test]
    fn test_unterminated_line_widens_field() {
        // 9 newlines give width 1, the tenth line has no newline and prints in full.
        let content = format!("{}last", "x\n".repeat(9));
        let out = render_str(&content, opts(true, false, false), 1);
        assert!(out.ends_with("9 x\n10 last"));
    }

    #[test]
    fn test_line_split_across_chunks() -> io::Result<()> {
        let mut out = Vec::new();
        let mut renderer = Renderer::new(opts(true, true, false), 1, &mut out);
        renderer.write_chunk(b"hel")?;
        renderer.write_chunk(b"lo\nwor")?;
        renderer.write_chunk(b"ld\n")?;
        assert_eq!(renderer.state().line, 3);
        assert!(!renderer.state().prefix_emitted);
        renderer.finish()?;
        assert_eq!(out, b"  1 hello$\n  2 world$\n");
        Ok(())
    }

    #[test]
    fn test_render_file_uses_own_line_count() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let short = temp.path().join("short.txt");
        let long = temp.path().join("long.txt");
        fs::write(&short, "a\nb\n")?;
        fs::write(&long, "x\n".repeat(10))?;

        let mut out = Vec::new();
        render_file(&long, opts(true, false, false), &mut out)?;
        render_file(&short, opts(true, false, false), &mut out)?;
        let text = String::from_utf8(out)?;
        assert!(text.starts_with(" 1 x\n"));
        assert!(text.contains("10 x\n"));
        // The short file is padded for its own two lines, not the previous ten.
        assert!(text.ends_with("1 a\n2 b\n"));
        assert!(!text.ends_with(" 1 a\n 2 b\n"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_render_file_unreadable_for_owner() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir()?;
        let path = temp.path().join("group_only.txt");
        fs::write(&path, "a\n")?;
        // Group and other may read; the owner may not.
        fs::set_permissions(&path, fs::Permissions::from_mode(0o044))?;

        let mut out = Vec::new();
        let result = render_file(&path, opts(true, false, false), &mut out);
        if File::open(&path).is_ok() {
            // Privileged callers bypass mode bits entirely.
            assert!(result.is_ok());
        } else {
            assert!(matches!(
                result,
                Err(crate::errors::Error::PermissionDenied { .. })
            ));
            assert!(out.is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_render_matches_render_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.txt");
        let content = "x\n".repeat(READ_CHUNK_TEST_LINES);
        fs::write(&path, &content)?;
        let options = opts(true, true, true);

        let mut from_file = Vec::new();
        render_file(&path, options, &mut from_file)?;
        let mut from_reader = Vec::new();
        render(
            content.as_bytes(),
            options,
            number_width(READ_CHUNK_TEST_LINES),
            &mut from_reader,
        )?;
        assert_eq!(from_file, from_reader);
        Ok(())
    }

    #[test]
    fn test_render_file_missing_is_io_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut out = Vec::new();
        let result = render_file(temp.path().join("gone"), Options::default(), &mut out);
        assert!(matches!(result, Err(crate::errors::Error::Io { .. })));
        assert!(out.is_empty());
        Ok(())
    }
}
