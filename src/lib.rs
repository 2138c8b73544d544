//! IL0373 Three-Color E-Paper Display Driver
//!
//! A driver for IL0373-class three-color (black, white, red or yellow)
//! e-paper controllers, defaulting to the 3.5" 184x384 panel.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Clipped, byte-aligned image writes at any position, including partly
//!   off-panel
//! - Sub-rectangle writes from larger bitmaps
//! - Bitmaps in RAM or behind a [`ByteReader`] (flash, external storage)
//! - Full and windowed partial refresh with an injectable waveform table
//! - Power off and deep sleep with automatic wake-up
//! - `embedded-graphics` color and rectangle interop (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use il0373::{Builder, Dimensions, Display, Image, Interface, WriteOptions};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::new().dimensions(Dimensions::PANEL_350C).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.reset(&mut delay);
//! let _ = display.clear_screen(&mut delay);
//!
//! // 16x16 black square, drawn partly off the left edge
//! let black = [0x00u8; 2 * 16];
//! let image = Image::new(16, 16).with_black(&black);
//! let _ = display.draw(&image, -4, 20, WriteOptions::default(), &mut delay);
//!
//! let _ = display.hibernate(&mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Color types for three-color e-paper displays
pub mod color;
/// IL0373 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Rectangle clipping and window arithmetic
pub mod geometry;
/// Hardware interface abstraction
pub mod interface;
/// Waveform tables for partial refresh
pub mod lut;
/// Bitmap planes and write options
pub mod plane;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};
pub use display::{Display, PowerState, RefreshMode};
pub use error::{BuilderError, Error};
pub use geometry::{Rect, Window};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, NoReset};
pub use plane::{ByteReader, Image, Plane, WriteOptions};
