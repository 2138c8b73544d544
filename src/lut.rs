//! Waveform tables for partial refresh
//!
//! Tables are opaque byte sequences sent verbatim after
//! [`LOAD_WAVEFORM`](crate::command::LOAD_WAVEFORM). Panel revisions that
//! need a different table supply it through
//! [`Builder::partial_lut`](crate::config::Builder::partial_lut).

/// Length of [`LUT_PARTIAL_350`] in bytes
pub const LUT_PARTIAL_350_SIZE: usize = 233;

/// Partial refresh waveform for the 3.5" 184x384 three-color panel
pub const LUT_PARTIAL_350: [u8; LUT_PARTIAL_350_SIZE] = [
    0x01, 0x10, 0x18, 0x01, 0x32, 0x02, 0x01, 0x10, 0x08, 0x01, 0x03, 0x02,
    0x01, 0x01, 0x01, 0x0A, 0x05, 0x0A, 0x0F, 0x01, 0x01, 0x01, 0x14, 0x0F,
    0x02, 0x02, 0x01, 0x14, 0x01, 0x02, 0x02, 0x04, 0x02, 0x14, 0x12, 0x01,
    0x0A, 0x0F, 0x01, 0x02, 0x01, 0x01, 0x07, 0x05, 0x00, 0x22, 0x02, 0x01,
    0x01, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x50, 0x18, 0x01,
    0x72, 0x02, 0x01, 0x10, 0x88, 0x01, 0x43, 0x02, 0x01, 0x01, 0x01, 0x4A,
    0x85, 0x4A, 0x8F, 0x01, 0x01, 0x01, 0x94, 0x8F, 0x82, 0x42, 0x01, 0x14,
    0x01, 0x82, 0x42, 0x84, 0x42, 0x14, 0x12, 0x01, 0x4A, 0x4F, 0x01, 0x02,
    0x01, 0x01, 0x07, 0x85, 0x00, 0xE2, 0x02, 0x01, 0x01, 0x00, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x50, 0x58, 0x81, 0x72, 0x02, 0x01, 0x10,
    0x88, 0x01, 0x43, 0x42, 0x01, 0x01, 0x01, 0x4A, 0x85, 0x4A, 0x8F, 0x01,
    0x01, 0x01, 0x94, 0x8F, 0x82, 0x42, 0x01, 0x14, 0x01, 0x82, 0x42, 0x84,
    0x42, 0x14, 0x12, 0x01, 0x4A, 0x4F, 0x01, 0x02, 0x01, 0x01, 0x07, 0x85,
    0x00, 0x22, 0x02, 0x01, 0x01, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x50, 0x58, 0x01, 0x72, 0x02, 0x01, 0x10, 0x88, 0x81, 0x43, 0x02,
    0x01, 0x01, 0x01, 0x4A, 0x85, 0x4A, 0x8F, 0x01, 0x01, 0x01, 0x94, 0x8F,
    0x82, 0x42, 0x01, 0x14, 0x01, 0x82, 0x42, 0x84, 0x42, 0x14, 0x12, 0x01,
    0x4A, 0x4F, 0x01, 0x82, 0x01, 0x01, 0x07, 0x05, 0x00, 0x22, 0x42, 0x01,
    0x01, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x02, 0x00, 0x00, 0x22,
    0x17, 0x41, 0xA8, 0x32, 0x50,
];
