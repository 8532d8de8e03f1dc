// src/target.rs

//! Classification and validation of the paths named on the command line.

use crate::errors::{Error, Result};
use std::fmt;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// Read bits for owner, group and others.
#[cfg(unix)]
const READ_BITS: u32 = 0o444;

/// What a path on the command line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
    NamedPipe,
    Socket,
    /// Exists, but matches none of the kinds above (e.g. a dangling symlink target on exotic platforms).
    Other,
    /// The path could not be stat'ed.
    Missing,
}

impl FileKind {
    /// Classifies metadata obtained by following symlinks.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_file() {
            return FileKind::Regular;
        }
        if file_type.is_dir() {
            return FileKind::Directory;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_char_device() {
                return FileKind::CharDevice;
            }
            if file_type.is_block_device() {
                return FileKind::BlockDevice;
            }
            if file_type.is_fifo() {
                return FileKind::NamedPipe;
            }
            if file_type.is_socket() {
                return FileKind::Socket;
            }
        }
        FileKind::Other
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Regular => "regular file",
            FileKind::Directory => "directory",
            FileKind::CharDevice => "character device",
            FileKind::BlockDevice => "block device",
            FileKind::NamedPipe => "named pipe",
            FileKind::Socket => "socket",
            FileKind::Other => "special file",
            FileKind::Missing => "missing file",
        };
        f.write_str(name)
    }
}

/// A path supplied on the command line, stat'ed right before it is rendered.
#[derive(Debug, Clone)]
pub struct FileTarget {
    pub path: PathBuf,
    pub kind: FileKind,
    pub readable: bool,
}

impl FileTarget {
    /// Stats `path` (following symlinks) and records its kind and read permission.
    ///
    /// A path that cannot be stat'ed is classified as [`FileKind::Missing`]
    /// rather than returned as an error, so that [`FileTarget::validate`] owns
    /// the ordering of the checks.
    pub fn inspect<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        match fs::metadata(&path) {
            Ok(metadata) => {
                let target = FileTarget {
                    kind: FileKind::from_metadata(&metadata),
                    readable: has_read_permission(&metadata),
                    path,
                };
                log::trace!("Inspected {:?}", target);
                target
            }
            Err(e) => {
                log::debug!("Could not stat '{}': {}", path.display(), e);
                FileTarget {
                    path,
                    kind: FileKind::Missing,
                    readable: false,
                }
            }
        }
    }

    /// Checks existence, then read permission, then that the path is a regular file.
    pub fn validate(&self) -> Result<()> {
        let path = self.path.display().to_string();
        if self.kind == FileKind::Missing {
            return Err(Error::NotFound { path });
        }
        if !self.readable {
            return Err(Error::PermissionDenied { path });
        }
        if self.kind != FileKind::Regular {
            return Err(Error::NotRegularFile {
                path,
                kind: self.kind,
            });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn has_read_permission(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & READ_BITS != 0
}

// Windows has no read bit; any file we could stat is considered readable.
#[cfg(not(unix))]
fn has_read_permission(_metadata: &Metadata) -> bool {
    true
}
