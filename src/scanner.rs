use crate::marker::{classify, MarkerCategory, MARKER_PREFIX};
use crate::report::{LogReport, Report};
use crate::state::StreamState;

/// One resolved `FF xx` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerHit {
    /// Position of the last prefix byte of the fill run.
    pub offset: usize,
    pub opcode: u8,
    pub category: MarkerCategory,
}

/// Iterates over the markers of a byte window in a single forward pass.
///
/// Bytes other than `0xFF` are never looked at. A run of `0xFF` collapses onto its last byte and
/// the byte after it is the opcode, which is consumed together with the prefix. `FF 00` is
/// yielded as [`MarkerCategory::FillByte`]. A window ending in one or more `0xFF` bytes simply
/// ends the iteration.
#[derive(Clone, Debug)]
pub struct Markers<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Markers<'a> {
    pub fn new(data: &'a [u8]) -> Markers<'a> {
        Markers { data, position: 0 }
    }

    /// Offset of the next byte the iterator would inspect.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Markers<'a> {
    type Item = MarkerHit;

    fn next(&mut self) -> Option<MarkerHit> {
        let rest = self.data.get(self.position..)?;
        let start = match rest.iter().position(|&b| b == MARKER_PREFIX) {
            Some(index) => self.position + index,
            None => {
                self.position = self.data.len();
                return None;
            },
        };

        // Section B.1.1.2
        // "Any marker may optionally be preceded by any number of fill bytes, which are bytes
        //  assigned code X’FF’."
        let run = self.data[start..].iter().take_while(|&&b| b == MARKER_PREFIX).count();
        let last = start + run - 1;

        match self.data.get(last + 1) {
            Some(&opcode) => {
                self.position = last + 2;
                Some(MarkerHit { offset: last, opcode, category: classify(opcode) })
            },
            None => {
                // Prefix run at the very end of the window; the opcode is beyond the boundary.
                self.position = self.data.len();
                None
            },
        }
    }
}

/// Scans `data` with a fresh session and logs diagnostics through `log`.
pub fn scan(data: &[u8]) -> StreamState {
    let mut state = StreamState::new();
    scan_with(data, &mut state, &mut LogReport);
    state
}

/// Scans `data`, folding every marker into `state` and sending diagnostics to `report`.
///
/// The pass always runs to the end of the window, anomalies included.
pub fn scan_with<R: Report + ?Sized>(data: &[u8], state: &mut StreamState, report: &mut R) {
    for hit in Markers::new(data) {
        let open_before = state.open_starts;
        state.apply(hit.opcode, hit.category);

        match hit.category {
            MarkerCategory::FrameHeader => report.frame_header(&hit),
            MarkerCategory::Unclassified => report.unclassified(&hit),
            // Every orphan EOI is reported, not only the one that set `error`.
            MarkerCategory::EndOfImage if open_before == 0 => report.orphan_end(&hit),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Collect, Diagnostic};

    fn quiet_scan(data: &[u8]) -> StreamState {
        let mut state = StreamState::new();
        scan_with(data, &mut state, &mut ());
        state
    }

    #[test]
    fn no_prefix_no_change() {
        let data: Vec<u8> = (0..=0xFEu8).collect();
        assert_eq!(quiet_scan(&data), StreamState::new());
        assert_eq!(quiet_scan(&[]), StreamState::new());
    }

    #[test]
    fn balanced_image_with_frame() {
        let state = quiet_scan(&[0xFF, 0xD8, 0xAA, 0xAA, 0xFF, 0xC0, 0xFF, 0xD9]);
        assert_eq!(state.frame_header_count, 1);
        assert_eq!(state.open_starts, 0);
        assert_eq!(state.error, None);
    }

    #[test]
    fn lone_eoi() {
        let state = quiet_scan(&[0xFF, 0xD9]);
        assert_eq!(state.error, Some(0xD9));
        assert_eq!(state.open_starts, 0);
    }

    #[test]
    fn nested_soi() {
        let state = quiet_scan(&[0xFF, 0xD8, 0xFF, 0xD8, 0xFF, 0xD9]);
        assert_eq!(state.open_starts, 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn error_survives_later_balanced_pair() {
        let state = quiet_scan(&[0xFF, 0xD9, 0xFF, 0xD9, 0xFF, 0xD8, 0xFF, 0xD9]);
        assert_eq!(state.error, Some(0xD9));
        assert_eq!(state.open_starts, 0);
    }

    #[test]
    fn reserved_opcode_is_reported() {
        let mut state = StreamState::new();
        let mut collect = Collect::new();
        scan_with(&[0xFF, 0x02], &mut state, &mut collect);

        assert_eq!(state.error, None);
        assert_eq!(state.open_starts, 0);
        assert_eq!(state.frame_header_count, 0);
        assert_eq!(collect.diagnostics, vec![Diagnostic::Unclassified { offset: 0, opcode: 0x02 }]);
    }

    #[test]
    fn every_orphan_eoi_is_reported() {
        let mut state = StreamState::new();
        let mut collect = Collect::new();
        scan_with(&[0xFF, 0xD9, 0xFF, 0xD8, 0xFF, 0xD9, 0xFF, 0xD9], &mut state, &mut collect);

        assert_eq!(state.error, Some(0xD9));
        assert_eq!(collect.diagnostics, vec![
            Diagnostic::OrphanEnd { offset: 0, opcode: 0xD9 },
            Diagnostic::OrphanEnd { offset: 6, opcode: 0xD9 },
        ]);
    }

    #[test]
    fn frame_header_is_reported_at_last_fill_byte() {
        let mut collect = Collect::new();
        scan_with(&[0x12, 0xFF, 0xFF, 0xC2], &mut StreamState::new(), &mut collect);
        assert_eq!(collect.diagnostics, vec![Diagnostic::FrameHeader { offset: 2, opcode: 0xC2 }]);
    }

    #[test]
    fn fill_run_collapses() {
        let padded = quiet_scan(&[0xFF, 0xFF, 0xFF, 0xD8]);
        let plain = quiet_scan(&[0xFF, 0xD8]);
        assert_eq!(padded, plain);
        assert_eq!(plain.open_starts, 1);
    }

    #[test]
    fn stuffed_byte_is_skipped() {
        assert_eq!(quiet_scan(&[0xFF, 0x00]), StreamState::new());

        let hits: Vec<_> = Markers::new(&[0xFF, 0x00, 0xFF, 0xD8]).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, MarkerCategory::FillByte);
        assert_eq!(hits[1].category, MarkerCategory::StartOfImage);
        assert_eq!(hits[1].offset, 2);
    }

    #[test]
    fn opcode_byte_is_consumed() {
        // The D8 after FF D9 is data, not an opcode.
        let hits: Vec<_> = Markers::new(&[0xFF, 0xD9, 0xD8, 0xFF, 0xFF]).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].opcode, 0xD9);
    }

    #[test]
    fn trailing_prefix_is_ignored() {
        let prefix = [0xFF, 0xD8, 0x11];
        let before = quiet_scan(&prefix);

        for tail in 1..4 {
            let mut data = prefix.to_vec();
            data.extend(std::iter::repeat(0xFF).take(tail));
            assert_eq!(quiet_scan(&data), before);

            let mut markers = Markers::new(&data);
            assert!(markers.next().is_some());
            assert!(markers.next().is_none());
            assert_eq!(markers.position(), data.len());
            assert!(markers.next().is_none());
        }
    }
}
