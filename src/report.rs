use std::fmt;
use std::fmt::Write;

use crate::marker::{classify, MARKER_PREFIX};
use crate::scanner::MarkerHit;

/// Renders bytes as `0x` followed by two lowercase hex digits per byte.
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// A noteworthy marker found during a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A frame header (SOF family or JPG).
    FrameHeader { offset: usize, opcode: u8 },
    /// An opcode outside every known category.
    Unclassified { offset: usize, opcode: u8 },
    /// An EOI while no SOI was open.
    OrphanEnd { offset: usize, opcode: u8 },
}

impl Diagnostic {
    pub fn offset(&self) -> usize {
        match *self {
            Diagnostic::FrameHeader { offset, .. } |
            Diagnostic::Unclassified { offset, .. } |
            Diagnostic::OrphanEnd { offset, .. } => offset,
        }
    }

    pub fn opcode(&self) -> u8 {
        match *self {
            Diagnostic::FrameHeader { opcode, .. } |
            Diagnostic::Unclassified { opcode, .. } |
            Diagnostic::OrphanEnd { opcode, .. } => opcode,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = hex_bytes(&[MARKER_PREFIX, self.opcode()]);
        let mnemonic = classify(self.opcode()).mnemonic();
        let offset = self.offset();
        match *self {
            Diagnostic::FrameHeader { .. }  => write!(f, "found {} ({}) at offset {}", marker, mnemonic, offset),
            Diagnostic::Unclassified { .. } => write!(f, "something not handled yet: {} ({}) at offset {}", marker, mnemonic, offset),
            Diagnostic::OrphanEnd { .. }    => write!(f, "{} ({}) without a preceding SOI at offset {}", marker, mnemonic, offset),
        }
    }
}

/// Sink for scanner diagnostics. Has no influence on the resulting `StreamState`.
pub trait Report {
    fn frame_header(&mut self, hit: &MarkerHit);
    fn unclassified(&mut self, hit: &MarkerHit);
    fn orphan_end(&mut self, hit: &MarkerHit);
}

/// Discards everything.
impl Report for () {
    fn frame_header(&mut self, _hit: &MarkerHit) {}
    fn unclassified(&mut self, _hit: &MarkerHit) {}
    fn orphan_end(&mut self, _hit: &MarkerHit) {}
}

impl<R: Report + ?Sized> Report for &mut R {
    fn frame_header(&mut self, hit: &MarkerHit) {
        (**self).frame_header(hit)
    }

    fn unclassified(&mut self, hit: &MarkerHit) {
        (**self).unclassified(hit)
    }

    fn orphan_end(&mut self, hit: &MarkerHit) {
        (**self).orphan_end(hit)
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReport;

impl Report for LogReport {
    fn frame_header(&mut self, hit: &MarkerHit) {
        log::info!("{}", Diagnostic::FrameHeader { offset: hit.offset, opcode: hit.opcode });
    }

    fn unclassified(&mut self, hit: &MarkerHit) {
        log::warn!("{}", Diagnostic::Unclassified { offset: hit.offset, opcode: hit.opcode });
    }

    fn orphan_end(&mut self, hit: &MarkerHit) {
        log::warn!("{}", Diagnostic::OrphanEnd { offset: hit.offset, opcode: hit.opcode });
    }
}

/// Keeps every diagnostic in order of appearance.
#[derive(Clone, Debug, Default)]
pub struct Collect {
    pub diagnostics: Vec<Diagnostic>,
}

impl Collect {
    pub fn new() -> Collect {
        Collect::default()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Report for Collect {
    fn frame_header(&mut self, hit: &MarkerHit) {
        self.diagnostics.push(Diagnostic::FrameHeader { offset: hit.offset, opcode: hit.opcode });
    }

    fn unclassified(&mut self, hit: &MarkerHit) {
        self.diagnostics.push(Diagnostic::Unclassified { offset: hit.offset, opcode: hit.opcode });
    }

    fn orphan_end(&mut self, hit: &MarkerHit) {
        self.diagnostics.push(Diagnostic::OrphanEnd { offset: hit.offset, opcode: hit.opcode });
    }
}
