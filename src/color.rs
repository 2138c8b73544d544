//! Color types for three-color e-paper panels
//!
//! Each pixel is represented by one bit in each of two planes:
//!
//! | Color     | Black plane | Color plane |
//! |-----------|-------------|-------------|
//! | Black     | 0           | 1           |
//! | White     | 1           | 1           |
//! | Chromatic | 1           | 0           |
//!
//! The color plane is active-low: a cleared bit shows the panel's secondary
//! color (red or yellow depending on the panel).
//!
//! ## Example
//!
//! ```
//! use il0373::Color;
//!
//! assert_eq!(Color::White.black_byte(), 0xFF);
//! assert_eq!(Color::White.color_byte(), 0xFF);
//! assert_eq!(Color::Chromatic.color_byte(), 0x00);
//! ```

/// Colors supported by three-color panels
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Black pixels
    Black,
    /// White pixels
    White,
    /// Secondary color (red or yellow)
    Chromatic,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

impl Color {
    /// Fill byte for the black/white plane
    pub fn black_byte(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White | Self::Chromatic => 0xFF,
        }
    }

    /// Fill byte for the color plane
    pub fn color_byte(self) -> u8 {
        match self {
            Self::Black | Self::White => 0xFF,
            Self::Chromatic => 0x00,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_bytes() {
        assert_eq!((Color::Black.black_byte(), Color::Black.color_byte()), (0x00, 0xFF));
        assert_eq!((Color::White.black_byte(), Color::White.color_byte()), (0xFF, 0xFF));
        assert_eq!(
            (Color::Chromatic.black_byte(), Color::Chromatic.color_byte()),
            (0xFF, 0x00)
        );
    }
}
