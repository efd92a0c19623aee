use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Size of the window read from the start of a file when nothing else is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 65536;

/// Bounded reads of a scan window.
pub trait WindowRead {
    /// Read at most `limit` bytes into a fresh buffer.
    ///
    /// Unlike [std::io::Read::read_exact], reaching the end of the source early is not an error.
    /// The buffer grows with the bytes actually read, so a huge `limit` costs nothing up front.
    fn read_window(&mut self, limit: usize) -> Result<Vec<u8>>;
}

impl<T: Read> WindowRead for T {
    fn read_window(&mut self, limit: usize) -> Result<Vec<u8>> {
        let limit = u64::try_from(limit).unwrap_or(u64::MAX);
        let mut window = Vec::new();
        Read::by_ref(self).take(limit).read_to_end(&mut window)?;
        Ok(window)
    }
}

/// Open `path`, read its first `limit` bytes and close it again.
pub fn read_window_from_path(path: &Path, limit: usize) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let window = file.read_window(limit)?;
    log::debug!("read {} of at most {} bytes from {}", window.len(), limit, path.display());
    Ok(window)
}
