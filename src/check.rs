use std::path::{Path, PathBuf};

use crate::container::ContainerKind;
use crate::error::Result;
use crate::frames::Frames;
use crate::reader::{read_window_from_path, DEFAULT_WINDOW_SIZE};
use crate::report::{Collect, Diagnostic, LogReport, Report};
use crate::scanner::{scan_with, MarkerHit};
use crate::state::StreamState;

/// Settings shared by every file of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of bytes read from the start of each file.
    pub window_size: usize,
    /// Also reject windows that end with an SOI still open.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            window_size: DEFAULT_WINDOW_SIZE,
            strict: false,
        }
    }
}

/// Outcome of checking one window.
#[derive(Clone, Debug)]
pub struct CheckReport {
    pub container: Option<ContainerKind>,
    pub bytes_read: usize,
    pub state: StreamState,
    /// Complete SOI..EOI images in the window.
    pub frames: usize,
    /// An image was cut off by the end of the window.
    pub truncated: bool,
    pub diagnostics: Vec<Diagnostic>,
    strict: bool,
}

impl CheckReport {
    /// The verdict: no orphan EOI, and in strict mode no open SOI either.
    pub fn is_valid(&self) -> bool {
        if self.strict {
            self.state.is_balanced()
        } else {
            self.state.is_valid()
        }
    }
}

/// Collects diagnostics while still logging them.
struct Tee {
    collect: Collect,
}

impl Report for Tee {
    fn frame_header(&mut self, hit: &MarkerHit) {
        LogReport.frame_header(hit);
        self.collect.frame_header(hit);
    }

    fn unclassified(&mut self, hit: &MarkerHit) {
        LogReport.unclassified(hit);
        self.collect.unclassified(hit);
    }

    fn orphan_end(&mut self, hit: &MarkerHit) {
        LogReport.orphan_end(hit);
        self.collect.orphan_end(hit);
    }
}

/// Runs one scan session over an in-memory window.
pub fn check_window(window: &[u8], config: &Config) -> CheckReport {
    let window = &window[..window.len().min(config.window_size)];

    let mut state = StreamState::new();
    let mut tee = Tee { collect: Collect::new() };
    scan_with(window, &mut state, &mut tee);

    let mut frames = Frames::new(window);
    let count = frames.by_ref().count();

    CheckReport {
        container: None,
        bytes_read: window.len(),
        state,
        frames: count,
        truncated: frames.truncated(),
        diagnostics: tee.collect.into_inner(),
        strict: config.strict,
    }
}

/// Checks the extension of `path`, reads its first window and scans it.
pub fn check_path(path: &Path, config: &Config) -> Result<CheckReport> {
    let container = ContainerKind::from_path(path)?;
    let window = read_window_from_path(path, config.window_size)?;
    log::debug!("{}: {} bytes read", path.display(), window.len());

    let mut report = check_window(&window, config);
    report.container = Some(container);

    if !report.is_valid() {
        log::warn!("{}: marker structure invalid: {:?}", path.display(), report.state);
    }
    Ok(report)
}

/// Checks every path in its own session.
///
/// With the `rayon` feature the files are processed on the rayon thread pool; results keep the
/// input order either way.
pub fn check_paths<P>(paths: &[P], config: &Config) -> Vec<(PathBuf, Result<CheckReport>)>
where
    P: AsRef<Path> + Sync,
{
    for_each_path(paths, |path: &P| {
        let path = path.as_ref();
        (path.to_path_buf(), check_path(path, config))
    })
}

#[cfg(feature = "rayon")]
fn for_each_path<P, T, F>(paths: &[P], f: F) -> Vec<T>
where
    P: Sync,
    T: Send,
    F: Fn(&P) -> T + Sync + Send,
{
    use rayon::prelude::*;
    paths.par_iter().map(f).collect()
}

#[cfg(not(feature = "rayon"))]
fn for_each_path<P, T, F>(paths: &[P], f: F) -> Vec<T>
where
    F: Fn(&P) -> T,
{
    paths.iter().map(f).collect()
}
