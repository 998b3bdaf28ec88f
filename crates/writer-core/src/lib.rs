//! # writer-core
//!
//! The single-shot file write operation behind the `writer` utility.
//!
//! The operation is deliberately descriptor-level: one `open(2)` with
//! `O_WRONLY | O_CREAT | O_TRUNC`, one `write(2)` attempt, one `close(2)`.
//! Working at this level keeps short writes and close-time flush errors
//! observable, which buffered `std::fs` wrappers hide.
//!
//! Policy is fail-fast at every step: no retry, no resume of a partial
//! write, no recovery. The caller maps any error to a non-zero exit.

pub mod logging;

use std::os::fd::{FromRawFd, IntoRawFd, OwnedFd};
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::fcntl::{self, OFlag};
use nix::sys::stat::Mode;
use nix::unistd;
use tracing::debug;

use thiserror::Error;

/// Errors that can occur during the write operation
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not open file {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: Errno },

    #[error("could not write to file {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: Errno },

    #[error("partial write to file {}: wrote {} of {} bytes", .path.display(), .written, .expected)]
    ShortWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    #[error("could not close file {}: {}", .path.display(), .source)]
    Close { path: PathBuf, source: Errno },
}

pub type Result<T> = std::result::Result<T, WriteError>;

/// Write `content` to the file at `path`, creating or truncating it.
///
/// The file is created with mode 0644 (modulo umask) when it does not
/// exist. The content is written in a single attempt; a short write is an
/// error, never retried. The descriptor is released on every path, but
/// only the success path's `close` is error-checked.
pub fn write_file<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    debug!(
        path = %path.display(),
        content = %String::from_utf8_lossy(content),
        "writing string to file"
    );

    let raw = fcntl::open(
        path,
        OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
        Mode::from_bits_retain(0o644),
    )
    .map_err(|errno| WriteError::Open {
        path: path.to_path_buf(),
        source: errno,
    })?;

    // SAFETY: `raw` was just returned by open(2); nothing else owns it.
    let fd = unsafe { OwnedFd::from_raw_fd(raw) };

    // Dropping `fd` on the error branches below closes it best-effort.
    let written = unistd::write(&fd, content).map_err(|errno| WriteError::Write {
        path: path.to_path_buf(),
        source: errno,
    })?;

    if written != content.len() {
        return Err(WriteError::ShortWrite {
            path: path.to_path_buf(),
            written,
            expected: content.len(),
        });
    }

    // Explicit close so a deferred flush error is visible to the caller.
    unistd::close(fd.into_raw_fd()).map_err(|errno| WriteError::Close {
        path: path.to_path_buf(),
        source: errno,
    })?;

    Ok(())
}
