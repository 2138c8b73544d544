//! IL0373 command definitions
//!
//! This module defines the command bytes used to drive IL0373-class
//! three-color e-paper controllers. Commands are sent over SPI with the DC
//! pin low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send data bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use il0373::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Power on the charge pumps
//! let _ = interface.send_command(command::POWER_ON);
//!
//! // Write to the black/white plane
//! let _ = interface.send_command(command::DATA_START_TRANSMISSION_1);
//! let _ = interface.send_data(&pixel_data);
//! ```

// Panel setup commands

/// Panel setting command (0x00)
///
/// Selects LUT source, resolution preset, scan directions and booster.
/// Requires 2 bytes.
pub const PANEL_SETTING: u8 = 0x00;

/// Booster soft-start command (0x06)
///
/// Controls the soft-start phases of the booster circuit.
/// Requires 3 bytes.
pub const BOOSTER_SOFT_START: u8 = 0x06;

/// VCOM and data interval setting command (0x50)
///
/// Controls border output and the VCOM/data interval. Also used to float
/// the border before powering down.
/// Requires 1 byte.
pub const VCOM_AND_DATA_INTERVAL: u8 = 0x50;

/// Resolution setting command (0x61)
///
/// Requires 3 bytes: [width, height (MSB), height (LSB)]
pub const RESOLUTION_SETTING: u8 = 0x61;

// Power management commands

/// Power off command (0x02)
///
/// Turns the charge pumps off. BUSY is asserted until the sequence ends.
pub const POWER_OFF: u8 = 0x02;

/// Power on command (0x04)
///
/// Turns the charge pumps on. BUSY is asserted until the sequence ends.
pub const POWER_ON: u8 = 0x04;

/// Deep sleep command (0x07)
///
/// Enters ultra-low power mode. Only a hardware reset can wake the controller.
/// Requires the check byte [`DEEP_SLEEP_CHECK`].
pub const DEEP_SLEEP: u8 = 0x07;

/// Check byte that must follow [`DEEP_SLEEP`]
pub const DEEP_SLEEP_CHECK: u8 = 0xA5;

// RAM commands

/// Data start transmission 1 command (0x10)
///
/// Writes the black/white plane. Bit=0: Black, Bit=1: White
pub const DATA_START_TRANSMISSION_1: u8 = 0x10;

/// Data start transmission 2 command (0x13)
///
/// Writes the color plane. Bit=0: Color, Bit=1: No color
pub const DATA_START_TRANSMISSION_2: u8 = 0x13;

// Refresh commands

/// Display refresh command (0x12)
///
/// Runs the loaded waveform. BUSY is asserted for the whole refresh.
pub const DISPLAY_REFRESH: u8 = 0x12;

/// Load waveform command (0x32)
///
/// Followed by the complete waveform table as data.
pub const LOAD_WAVEFORM: u8 = 0x32;

// Partial window commands

/// Partial window command (0x90)
///
/// Requires 7 bytes:
/// [x_start, x_end, y_start (MSB), y_start (LSB), y_end (MSB), y_end (LSB), scan]
pub const PARTIAL_WINDOW: u8 = 0x90;

/// Partial in command (0x91)
///
/// Restricts RAM writes and refreshes to the partial window.
pub const PARTIAL_IN: u8 = 0x91;

/// Partial out command (0x92)
///
/// Returns to full-panel addressing.
pub const PARTIAL_OUT: u8 = 0x92;
