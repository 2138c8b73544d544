//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The controller requires:
//! - SPI bus (MOSI + SCK)
//! - GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **BUSY**: Busy status (input, active low on this controller family)
//!   - **RST**: Reset (output, active low, optional)
//!
//! Without a reset line the panel can still be driven, but it cannot be put
//! into deep sleep, since only a hardware reset wakes it up again.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use il0373::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x04); // Power on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! // Wait up to 200ms for the display to become ready
//! let _ = interface.wait_until_ready(&mut delay, 200);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the command/data bus to the controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a bit-banged bus or a shared CS line),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// Bytes must reach the controller in slice order.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset
    ///
    /// Does nothing when no reset line is available.
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Whether a reset line is available
    fn has_reset(&self) -> bool;

    /// Wait for the busy condition to clear
    ///
    /// Returns `Ok(true)` once the controller reports ready, `Ok(false)` if
    /// `timeout_ms` elapsed first. A timeout of 0 disables the bound and
    /// waits indefinitely; [`Display`](crate::display::Display) never passes
    /// 0, since [`Builder::build`](crate::config::Builder::build) rejects
    /// zero timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the busy pin cannot be read.
    fn wait_until_ready<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> InterfaceResult<bool, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Placeholder reset pin for boards without a reset line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReset;

impl ErrorType for NoReset {
    type Error = Infallible;
}

impl OutputPin for NoReset {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`] ([`NoReset`] when absent)
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: Option<RST>,
    /// Busy pin
    busy: BUSY,
    /// Busy pin polarity (true = active high, false = active low)
    busy_active_high: bool,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `busy` - Busy pin (input, active low by default)
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
            busy,
            busy_active_high: false,
        }
    }

    /// Set busy pin polarity
    ///
    /// Default is active-low. Set to true for active-high panels.
    pub fn set_busy_active_high(&mut self, active_high: bool) -> &mut Self {
        self.busy_active_high = active_high;
        self
    }

    /// Get busy pin polarity (true = active high)
    pub fn busy_active_high(&self) -> bool {
        self.busy_active_high
    }
}

impl<SPI, DC, BUSY> Interface<SPI, DC, NoReset, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    BUSY: InputPin,
{
    /// Create an Interface for a board without a reset line
    ///
    /// [`has_reset`](DisplayInterface::has_reset) reports `false`, so the
    /// display skips deep sleep and [`reset`](DisplayInterface::reset) is a
    /// no-op.
    pub fn without_reset(spi: SPI, dc: DC, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst: None,
            busy,
            busy_active_high: false,
        }
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        let Some(rst) = self.rst.as_mut() else {
            return;
        };
        // Reset sequence: HIGH -> wait 10ms -> LOW -> wait 10ms -> HIGH -> wait 10ms
        let _ = rst.set_high();
        delay.delay_ms(10);
        let _ = rst.set_low();
        delay.delay_ms(10);
        let _ = rst.set_high();
        delay.delay_ms(10);
    }

    fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    fn wait_until_ready<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> InterfaceResult<bool, Self::Error> {
        let mut elapsed_ms = 0u32;

        loop {
            let is_busy = if self.busy_active_high {
                self.busy.is_high()
            } else {
                self.busy.is_low()
            }
            .map_err(InterfaceError::Pin)?;

            if !is_busy {
                return Ok(true);
            }

            delay.delay_ms(1);
            elapsed_ms = elapsed_ms.saturating_add(1);
            if timeout_ms > 0 && elapsed_ms >= timeout_ms {
                return Ok(false);
            }
        }
    }
}
