//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Geometry that falls outside the panel and ready-wait timeouts are not
//! errors: the former turns the operation into a no-op, the latter is logged
//! and the sequence continues.
//!
//! ## Example
//!
//! ```
//! use il0373::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Width is not byte-aligned
//! let result = Dimensions::new(150, 296);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum gate outputs (rows) addressable by the partial window
///
/// Row coordinates are sent as 9-bit values.
pub const MAX_GATE_OUTPUTS: u16 = 511;

/// Maximum source outputs (columns) addressable by the partial window
///
/// Column coordinates are sent as a single byte, so the last byte-aligned
/// column group must end below 256.
pub const MAX_SOURCE_OUTPUTS: u16 = 248;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A bitmap plane is shorter than its declared extent
    ///
    /// A plane of `width` x `height` pixels must hold at least
    /// `ceil(width / 8) * height` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// The partial-refresh waveform table is empty
    EmptyLut,
    /// A ready-wait timeout is 0; every wait must be bounded
    ZeroTimeout,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_SOURCE_OUTPUTS}x{MAX_GATE_OUTPUTS}, width must be multiple of 8)"
            ),
            Self::EmptyLut => write!(f, "Partial waveform table must not be empty"),
            Self::ZeroTimeout => write!(f, "Ready-wait timeouts must be non-zero"),
        }
    }
}

impl core::error::Error for BuilderError {}
