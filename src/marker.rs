/// Every marker starts with this byte. Repeated occurrences are fill bytes.
pub const MARKER_PREFIX: u8 = 0xFF;

// Table B.1
pub const SOF0: u8  = 0xC0; // Baseline DCT
pub const DHT: u8   = 0xC4; // Define Huffman table(s)
pub const JPG: u8   = 0xC8; // Reserved for JPEG extensions
pub const DAC: u8   = 0xCC; // Define arithmetic coding conditioning(s)
pub const RST0: u8  = 0xD0; // Restart with modulo 8 count “m”
pub const RST7: u8  = 0xD7;
pub const SOI: u8   = 0xD8; // Start of image
pub const EOI: u8   = 0xD9; // End of image
pub const SOS: u8   = 0xDA; // Start of scan
pub const DQT: u8   = 0xDB; // Define quantization table(s)
pub const DNL: u8   = 0xDC; // Define number of lines
pub const DRI: u8   = 0xDD; // Define restart interval
pub const DHP: u8   = 0xDE; // Define hierarchical progression
pub const EXP: u8   = 0xDF; // Expand reference component(s)
pub const APP0: u8  = 0xE0; // Reserved for application segments
pub const APP15: u8 = 0xEF;
pub const JPG0: u8  = 0xF0; // Reserved for JPEG extensions
pub const JPG13: u8 = 0xFD;
pub const COM: u8   = 0xFE; // Comment

/// Byte following a prefix inside entropy-coded data.
pub const STUFFED: u8 = 0x00;

/// What the byte after a (collapsed) `0xFF` run stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    StartOfImage,
    EndOfImage,
    /// SOF0-SOF3, SOF5-SOF7, SOF9-SOF11, SOF13-SOF15 and JPG.
    FrameHeader,
    HuffmanTable,
    ArithmeticConditioning,
    /// RST0-RST7
    Restart,
    QuantizationTable,
    DefineNumberOfLines,
    RestartIntervalDefinition,
    HierarchicalProgression,
    ExpandReference,
    StartOfScan,
    Comment,
    /// APP0-APP15
    Application,
    /// JPG0-JPG13
    Extension,
    /// `0x00` after the prefix: byte stuffing in entropy-coded data.
    FillByte,
    /// Another `0xFF` where an opcode was expected.
    PrefixRun,
    /// TEM and the reserved range 0x02-0xBF.
    Unclassified,
}

impl MarkerCategory {
    /// Short mnemonic used in diagnostics.
    pub fn mnemonic(self) -> &'static str {
        match self {
            MarkerCategory::StartOfImage              => "SOI",
            MarkerCategory::EndOfImage                => "EOI",
            MarkerCategory::FrameHeader               => "SOF",
            MarkerCategory::HuffmanTable              => "DHT",
            MarkerCategory::ArithmeticConditioning    => "DAC",
            MarkerCategory::Restart                   => "RST",
            MarkerCategory::QuantizationTable         => "DQT",
            MarkerCategory::DefineNumberOfLines       => "DNL",
            MarkerCategory::RestartIntervalDefinition => "DRI",
            MarkerCategory::HierarchicalProgression   => "DHP",
            MarkerCategory::ExpandReference           => "EXP",
            MarkerCategory::StartOfScan               => "SOS",
            MarkerCategory::Comment                   => "COM",
            MarkerCategory::Application               => "APP",
            MarkerCategory::Extension                 => "JPG",
            MarkerCategory::FillByte                  => "FILL",
            MarkerCategory::PrefixRun                 => "PAD",
            MarkerCategory::Unclassified              => "RES",
        }
    }

    /// Whether the category names a real marker, as opposed to stuffing or padding.
    pub fn is_marker(self) -> bool {
        !matches!(self, MarkerCategory::FillByte | MarkerCategory::PrefixRun)
    }
}

/// Maps an opcode (the byte after the prefix) to its category.
pub fn classify(opcode: u8) -> MarkerCategory {
    match opcode {
        STUFFED => MarkerCategory::FillByte,
        0x01 ..= 0xBF => MarkerCategory::Unclassified,
        DHT => MarkerCategory::HuffmanTable,
        DAC => MarkerCategory::ArithmeticConditioning,
        // Everything else in C0-CF, JPG included, introduces a frame.
        0xC0 ..= 0xCF => MarkerCategory::FrameHeader,
        RST0 ..= RST7 => MarkerCategory::Restart,
        SOI => MarkerCategory::StartOfImage,
        EOI => MarkerCategory::EndOfImage,
        SOS => MarkerCategory::StartOfScan,
        DQT => MarkerCategory::QuantizationTable,
        DNL => MarkerCategory::DefineNumberOfLines,
        DRI => MarkerCategory::RestartIntervalDefinition,
        DHP => MarkerCategory::HierarchicalProgression,
        EXP => MarkerCategory::ExpandReference,
        APP0 ..= APP15 => MarkerCategory::Application,
        JPG0 ..= JPG13 => MarkerCategory::Extension,
        COM => MarkerCategory::Comment,
        MARKER_PREFIX => MarkerCategory::PrefixRun,
    }
}
