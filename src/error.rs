use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Errors raised around the scanner: reading the window and picking the files to check.
///
/// Marker anomalies are never errors; they end up in the [`StreamState`](crate::StreamState).
#[derive(Error, Debug)]
pub enum Error {
    /// The file name does not carry a motion-JPEG container extension.
    #[error("unsupported container: {}", .0.display())]
    UnsupportedContainer(PathBuf),
    /// An I/O error occurred while reading the file.
    #[error(transparent)]
    Io(#[from] IoError),
}
