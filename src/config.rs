//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};
use crate::lut::LUT_PARTIAL_350;

/// Panel geometry in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (source outputs, byte-addressed axis)
    pub width: u16,
    /// Height in pixels (gate outputs)
    pub height: u16,
}

impl Dimensions {
    /// 3.5" three-color panel, 184 x 384
    pub const PANEL_350C: Self = Self {
        width: 184,
        height: 384,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width or height is zero
    /// - width > MAX_SOURCE_OUTPUTS or height > MAX_GATE_OUTPUTS
    /// - width % 8 != 0 (must be byte-aligned for memory)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if height == 0 || height > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if width == 0 || width > MAX_SOURCE_OUTPUTS || width % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bytes per panel row
    pub fn row_bytes(&self) -> usize {
        self.width as usize / 8
    }

    /// Calculate required size of one full-panel plane in bytes
    pub fn buffer_size(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

/// Display configuration
///
/// This struct holds all panel-specific parameters for the controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Booster soft-start settings (3 bytes for command 0x06)
    pub booster_soft_start: [u8; 3],
    /// Panel setting bytes (2 bytes for command 0x00)
    pub panel_setting: [u8; 2],
    /// VCOM and data interval byte used by the base configuration
    pub vcom_data_interval: u8,
    /// VCOM and data interval byte that overrides the border in partial mode
    pub partial_vcom_data_interval: u8,
    /// VCOM and data interval byte sent before power off (border floating)
    pub power_off_border: u8,
    /// Trailing byte of the partial window command (auto-increment direction)
    pub partial_window_scan: u8,
    /// Waveform table loaded before every partial refresh
    pub partial_lut: &'static [u8],
    /// Whether region refreshes are bracketed by partial in/out
    pub use_partial_window: bool,
    /// Black plane fill used by `clear_screen`
    pub clear_black_value: u8,
    /// Color plane fill used by `clear_screen`
    pub clear_color_value: u8,
    /// Maximum wait after power on, in milliseconds
    pub power_on_timeout_ms: u32,
    /// Maximum wait after power off, in milliseconds
    pub power_off_timeout_ms: u32,
    /// Maximum wait for a partial refresh, in milliseconds
    pub partial_refresh_timeout_ms: u32,
    /// Maximum wait for a full refresh, in milliseconds
    pub full_refresh_timeout_ms: u32,
}

/// Builder for constructing display configuration
///
/// Defaults describe the 3.5" 184x384 three-color panel; override them for
/// other panel revisions.
///
/// # Example
///
/// ```rust,no_run
/// use il0373::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(152, 296) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).full_refresh_timeout(20_000).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    dimensions: Option<Dimensions>,
    booster_soft_start: [u8; 3],
    panel_setting: [u8; 2],
    vcom_data_interval: u8,
    partial_vcom_data_interval: u8,
    power_off_border: u8,
    partial_window_scan: u8,
    partial_lut: &'static [u8],
    use_partial_window: bool,
    clear_black_value: u8,
    clear_color_value: u8,
    power_on_timeout_ms: u32,
    power_off_timeout_ms: u32,
    partial_refresh_timeout_ms: u32,
    full_refresh_timeout_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            booster_soft_start: [0x17, 0x17, 0x17],
            // LUT from OTP, VCOM to 0V fast
            panel_setting: [0x0F, 0x0D],
            vcom_data_interval: 0x77,
            partial_vcom_data_interval: 0xF7,
            power_off_border: 0xF7,
            partial_window_scan: 0x01,
            partial_lut: &LUT_PARTIAL_350,
            use_partial_window: true,
            clear_black_value: 0x00,
            clear_color_value: 0xFF,
            power_on_timeout_ms: 200,
            power_off_timeout_ms: 200,
            partial_refresh_timeout_ms: 5_000,
            full_refresh_timeout_ms: 25_000,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set panel setting bytes
    pub fn panel_setting(mut self, values: [u8; 2]) -> Self {
        self.panel_setting = values;
        self
    }

    /// Set the base VCOM and data interval byte
    pub fn vcom_data_interval(mut self, value: u8) -> Self {
        self.vcom_data_interval = value;
        self
    }

    /// Set the VCOM and data interval byte used in partial mode
    pub fn partial_vcom_data_interval(mut self, value: u8) -> Self {
        self.partial_vcom_data_interval = value;
        self
    }

    /// Set the border byte sent before power off
    pub fn power_off_border(mut self, value: u8) -> Self {
        self.power_off_border = value;
        self
    }

    /// Set the trailing scan byte of the partial window command
    pub fn partial_window_scan(mut self, value: u8) -> Self {
        self.partial_window_scan = value;
        self
    }

    /// Set the waveform table loaded before partial refreshes
    pub fn partial_lut(mut self, lut: &'static [u8]) -> Self {
        self.partial_lut = lut;
        self
    }

    /// Set whether region refreshes use partial in/out
    pub fn use_partial_window(mut self, value: bool) -> Self {
        self.use_partial_window = value;
        self
    }

    /// Set the black plane fill used by `clear_screen`
    pub fn clear_black_value(mut self, value: u8) -> Self {
        self.clear_black_value = value;
        self
    }

    /// Set the color plane fill used by `clear_screen`
    pub fn clear_color_value(mut self, value: u8) -> Self {
        self.clear_color_value = value;
        self
    }

    /// Set the power on timeout in milliseconds (must be non-zero)
    pub fn power_on_timeout(mut self, ms: u32) -> Self {
        self.power_on_timeout_ms = ms;
        self
    }

    /// Set the power off timeout in milliseconds (must be non-zero)
    pub fn power_off_timeout(mut self, ms: u32) -> Self {
        self.power_off_timeout_ms = ms;
        self
    }

    /// Set the partial refresh timeout in milliseconds (must be non-zero)
    pub fn partial_refresh_timeout(mut self, ms: u32) -> Self {
        self.partial_refresh_timeout_ms = ms;
        self
    }

    /// Set the full refresh timeout in milliseconds (must be non-zero)
    pub fn full_refresh_timeout(mut self, ms: u32) -> Self {
        self.full_refresh_timeout_ms = ms;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// `BuilderError::InvalidDimensions` if they fail the checks of
    /// [`Dimensions::new`], `BuilderError::EmptyLut` if the waveform table is
    /// empty, or `BuilderError::ZeroTimeout` if any ready-wait timeout is 0.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        // fields are public, so literals bypass `Dimensions::new`
        let dimensions = Dimensions::new(dims.width, dims.height)?;
        if self.partial_lut.is_empty() {
            return Err(BuilderError::EmptyLut);
        }
        if [
            self.power_on_timeout_ms,
            self.power_off_timeout_ms,
            self.partial_refresh_timeout_ms,
            self.full_refresh_timeout_ms,
        ]
        .contains(&0)
        {
            return Err(BuilderError::ZeroTimeout);
        }
        Ok(Config {
            dimensions,
            booster_soft_start: self.booster_soft_start,
            panel_setting: self.panel_setting,
            vcom_data_interval: self.vcom_data_interval,
            partial_vcom_data_interval: self.partial_vcom_data_interval,
            power_off_border: self.power_off_border,
            partial_window_scan: self.partial_window_scan,
            partial_lut: self.partial_lut,
            use_partial_window: self.use_partial_window,
            clear_black_value: self.clear_black_value,
            clear_color_value: self.clear_color_value,
            power_on_timeout_ms: self.power_on_timeout_ms,
            power_off_timeout_ms: self.power_off_timeout_ms,
            partial_refresh_timeout_ms: self.partial_refresh_timeout_ms,
            full_refresh_timeout_ms: self.full_refresh_timeout_ms,
        })
    }
}
