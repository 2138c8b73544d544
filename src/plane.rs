//! Bitmap planes and write options
//!
//! Three-color panels take two 1-bit planes per image: the black/white plane
//! and the color plane. Either may be absent, in which case a neutral fill is
//! sent instead. Plane bytes come either from memory or from a
//! [`ByteReader`], which lets bitmaps live in program flash or other
//! non-addressable storage.

use crate::geometry::row_bytes;

/// Source of bitmap bytes that are not directly addressable
pub trait ByteReader {
    /// Number of bytes available
    fn len(&self) -> usize;

    /// Whether the source holds no bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the byte at `index`
    ///
    /// `index` is always below [`len`](Self::len).
    fn read(&self, index: usize) -> u8;
}

/// One bitmap plane, row-major, MSB first, rows padded to whole bytes
#[derive(Clone, Copy)]
pub enum Plane<'a> {
    /// Bytes in RAM
    Memory(&'a [u8]),
    /// Bytes behind a reader
    Reader(&'a dyn ByteReader),
}

impl Plane<'_> {
    /// Number of bytes in the plane
    pub fn len(&self) -> usize {
        match self {
            Self::Memory(bytes) => bytes.len(),
            Self::Reader(reader) => reader.len(),
        }
    }

    /// Whether the plane holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn byte(&self, index: usize) -> u8 {
        match self {
            Self::Memory(bytes) => bytes[index],
            Self::Reader(reader) => reader.read(index),
        }
    }
}

impl core::fmt::Debug for Plane<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Memory(bytes) => f.debug_tuple("Memory").field(&bytes.len()).finish(),
            Self::Reader(reader) => f.debug_tuple("Reader").field(&reader.len()).finish(),
        }
    }
}

impl<'a> From<&'a [u8]> for Plane<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Memory(bytes)
    }
}

/// A two-plane bitmap with its pixel extent
///
/// # Example
///
/// ```
/// use il0373::Image;
///
/// let black = [0xFFu8; 2 * 16];
/// let image = Image::new(16, 16).with_black(&black);
/// assert_eq!(image.required_len(), 32);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Image<'a> {
    /// Black/white plane
    pub black: Option<Plane<'a>>,
    /// Color plane
    pub color: Option<Plane<'a>>,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl<'a> Image<'a> {
    /// Image with no planes
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            black: None,
            color: None,
            width,
            height,
        }
    }

    /// Set the black plane from memory
    #[must_use]
    pub fn with_black(self, bytes: &'a [u8]) -> Self {
        self.with_black_plane(Plane::Memory(bytes))
    }

    /// Set the color plane from memory
    #[must_use]
    pub fn with_color(self, bytes: &'a [u8]) -> Self {
        self.with_color_plane(Plane::Memory(bytes))
    }

    /// Set the black plane
    #[must_use]
    pub fn with_black_plane(mut self, plane: Plane<'a>) -> Self {
        self.black = Some(plane);
        self
    }

    /// Set the color plane
    #[must_use]
    pub fn with_color_plane(mut self, plane: Plane<'a>) -> Self {
        self.color = Some(plane);
        self
    }

    /// Minimum bytes each present plane must hold
    pub fn required_len(&self) -> usize {
        row_bytes(self.width) * usize::from(self.height)
    }

    /// First plane shorter than the extent, as `(required, provided)`
    pub(crate) fn short_plane(&self) -> Option<(usize, usize)> {
        let required = self.required_len();
        [self.black, self.color]
            .into_iter()
            .flatten()
            .map(|plane| plane.len())
            .find(|&len| len < required)
            .map(|provided| (required, provided))
    }
}

/// Per-write transform flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Send the bitwise complement of every source byte
    pub invert: bool,
    /// Read source rows bottom-up
    pub mirror_y: bool,
}

impl WriteOptions {
    /// Fill byte sent for an absent plane
    pub(crate) fn absent_fill(&self) -> u8 {
        if self.invert { 0x00 } else { 0xFF }
    }

    pub(crate) fn apply(&self, byte: u8) -> u8 {
        if self.invert { !byte } else { byte }
    }
}
