use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Container formats whose payload is scanned for JPEG markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Raw motion-JPEG, `.mjpeg` or `.mjpg`.
    Mjpeg,
    /// RIFF AVI.
    Avi,
    /// QuickTime movie.
    Mov,
}

impl ContainerKind {
    /// Picks the container from a file extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<ContainerKind> {
        match ext.to_ascii_lowercase().as_str() {
            "mjpeg" | "mjpg" => Some(ContainerKind::Mjpeg),
            "avi" => Some(ContainerKind::Avi),
            "mov" => Some(ContainerKind::Mov),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<ContainerKind> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ContainerKind::from_extension)
            .ok_or_else(|| Error::UnsupportedContainer(path.to_path_buf()))
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            ContainerKind::Mjpeg => "MJPEG",
            ContainerKind::Avi   => "AVI",
            ContainerKind::Mov   => "MOV",
        };
        f.write_str(name)
    }
}
