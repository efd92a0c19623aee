use crate::marker::MarkerCategory;

/// Running marker statistics for one scan session.
///
/// A `StreamState` starts out zeroed, is updated once per resolved marker and is read by the
/// caller after the pass. Every transition is total: no opcode can make `apply` fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamState {
    /// SOI markers seen without a matching EOI.
    pub open_starts: usize,
    /// Number of frame header (SOF family and JPG) markers.
    pub frame_header_count: usize,
    /// Opcode of the first EOI seen while no SOI was open. Never cleared.
    pub error: Option<u8>,

    pub quantization_tables: usize,
    pub huffman_tables: usize,
    pub arithmetic_conditionings: usize,
    pub restart_intervals: usize,
    pub restarts: usize,
    pub scans: usize,
    pub application_segments: usize,
    pub comments: usize,
    pub extensions: usize,
    pub hierarchical: usize,
    pub unclassified: usize,
    /// Resolved markers of any category except stuffing and padding.
    pub markers: usize,
}

impl StreamState {
    pub fn new() -> StreamState {
        StreamState::default()
    }

    /// Folds one resolved opcode into the state.
    pub fn apply(&mut self, opcode: u8, category: MarkerCategory) {
        if category.is_marker() {
            self.markers += 1;
        }

        match category {
            MarkerCategory::StartOfImage => self.open_starts += 1,
            MarkerCategory::EndOfImage => {
                if self.open_starts > 0 {
                    self.open_starts -= 1;
                } else if self.error.is_none() {
                    self.error = Some(opcode);
                }
            },
            MarkerCategory::FrameHeader => self.frame_header_count += 1,
            MarkerCategory::QuantizationTable => self.quantization_tables += 1,
            MarkerCategory::HuffmanTable => self.huffman_tables += 1,
            MarkerCategory::ArithmeticConditioning => self.arithmetic_conditionings += 1,
            MarkerCategory::RestartIntervalDefinition => self.restart_intervals += 1,
            MarkerCategory::Restart => self.restarts += 1,
            MarkerCategory::StartOfScan => self.scans += 1,
            MarkerCategory::Application => self.application_segments += 1,
            MarkerCategory::Comment => self.comments += 1,
            MarkerCategory::Extension => self.extensions += 1,
            MarkerCategory::DefineNumberOfLines |
            MarkerCategory::HierarchicalProgression |
            MarkerCategory::ExpandReference => self.hierarchical += 1,
            MarkerCategory::Unclassified => self.unclassified += 1,
            // Stuffing and padding leave the session untouched.
            MarkerCategory::FillByte | MarkerCategory::PrefixRun => {},
        }
    }

    /// No EOI appeared without an open SOI.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Valid, and every SOI has been closed.
    pub fn is_balanced(&self) -> bool {
        self.is_valid() && self.open_starts == 0
    }
}
