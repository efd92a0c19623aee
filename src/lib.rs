//! This crate checks whether motion-JPEG data (raw MJPEG streams, AVI or QuickTime movies) contains
//! a plausible sequence of JPEG markers, without decoding any image.
//!
//! The scanner walks a window of bytes once, resolves `0xFF` fill runs and `FF 00` stuffing,
//! classifies every marker and keeps SOI/EOI nesting and a few counters in a [`StreamState`].
//!
//! # Examples
//!
//! ```
//! use mjrtp_check::scan;
//!
//! let state = scan(&[0xFF, 0xD8, 0xAA, 0xAA, 0xFF, 0xC0, 0xFF, 0xD9]);
//! assert_eq!(state.frame_header_count, 1);
//! assert_eq!(state.open_starts, 0);
//! assert!(state.is_valid());
//! ```
//!
//! Checking a file on disk:
//!
//! ```no_run
//! use std::path::Path;
//! use mjrtp_check::{check_path, Config};
//!
//! let report = check_path(Path::new("clip.mjpeg"), &Config::default()).expect("read failed");
//! println!("{} frame headers, valid: {}", report.state.frame_header_count, report.is_valid());
//! ```

#![deny(missing_debug_implementations)]

pub use crate::check::{check_path, check_paths, check_window, CheckReport, Config};
pub use crate::container::ContainerKind;
pub use crate::error::{Error, Result};
pub use crate::frames::Frames;
pub use crate::marker::{classify, MarkerCategory};
pub use crate::reader::{read_window_from_path, WindowRead, DEFAULT_WINDOW_SIZE};
pub use crate::report::{hex_bytes, Collect, Diagnostic, LogReport, Report};
pub use crate::scanner::{scan, scan_with, MarkerHit, Markers};
pub use crate::state::StreamState;

mod check;
mod container;
mod error;
mod frames;
pub mod marker;
mod reader;
mod report;
mod scanner;
mod state;
