//! Core display operations
//!
//! [`Display`] owns the bus and drives the controller through its power and
//! refresh sequences. Every caller-visible operation is a method taking
//! `&mut self`, so operations never interleave on the bus.
//!
//! Writes go to controller RAM through a byte-aligned partial window; a
//! refresh then drives the waveform for the affected rectangle. Pixel data is
//! staged with the `stage_*` methods and shown with [`Display::refresh`] or
//! [`Display::refresh_region`], or both at once with the `draw*` methods.

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::color::Color;
use crate::command::{
    BOOSTER_SOFT_START, DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2, DEEP_SLEEP,
    DEEP_SLEEP_CHECK, DISPLAY_REFRESH, LOAD_WAVEFORM, PANEL_SETTING, PARTIAL_IN, PARTIAL_OUT,
    PARTIAL_WINDOW, POWER_OFF, POWER_ON, RESOLUTION_SETTING, VCOM_AND_DATA_INTERVAL,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::geometry::{ImageWindow, Rect, Window, clip_image, clip_image_part, clip_refresh};
use crate::interface::DisplayInterface;
use crate::plane::{Image, Plane, WriteOptions};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Bytes buffered per bus write while streaming a plane
const CHUNK_SIZE: usize = 64;

/// Blank fill for both planes
const BLANK: u8 = 0xFF;

/// Controller power state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// Charge pumps off, registers retained
    #[default]
    Off,
    /// Charge pumps on, ready to refresh
    On,
    /// Deep sleep; only a hardware reset wakes the controller
    Hibernating,
}

/// Refresh mode for display updates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh using the waveform from OTP (slow, no ghosting)
    #[default]
    Full,
    /// Windowed refresh using the configured partial waveform table
    Partial,
}

/// Core display driver for IL0373-class three-color controllers
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Current power state
    power_state: PowerState,
    /// Controller RAM has not been seeded by a full-buffer write yet
    initial_clear_pending: bool,
    /// Cooperative scheduling hook
    yield_hook: Option<fn()>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until the first operation.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            power_state: PowerState::Off,
            initial_clear_pending: true,
            yield_hook: None,
        }
    }

    /// Perform a hardware reset
    ///
    /// Leaves the controller powered off and awake. Without a reset line this
    /// only resets the driver's view of the power state.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);
        self.power_state = PowerState::Off;
        debug!("reset, power off");
        Ok(())
    }

    /// Install a hook called between rows and around image transfers
    ///
    /// Lets long transfers hand control back to a cooperative scheduler or
    /// feed a watchdog. It never reorders bytes on the bus.
    pub fn set_yield_hook(&mut self, hook: Option<fn()>) {
        self.yield_hook = hook;
    }

    /// Current power state
    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// Whether the next image write will blank the whole panel RAM first
    pub fn initial_clear_pending(&self) -> bool {
        self.initial_clear_pending
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fill both planes of the whole panel and refresh
    ///
    /// # Arguments
    ///
    /// * `black` - Fill byte for the black/white plane
    /// * `color` - Fill byte for the color plane
    /// * `delay` - Delay implementation
    pub fn clear<D: DelayNs>(&mut self, black: u8, color: u8, delay: &mut D) -> DisplayResult<I> {
        self.write_screen(black, color, delay)?;
        self.update(RefreshMode::Partial, delay)?;
        self.send_command(PARTIAL_OUT)
    }

    /// Clear with the configured fill bytes
    pub fn clear_screen<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.clear(
            self.config.clear_black_value,
            self.config.clear_color_value,
            delay,
        )
    }

    /// Clear the whole panel to a single color
    pub fn clear_to<D: DelayNs>(&mut self, color: Color, delay: &mut D) -> DisplayResult<I> {
        self.clear(color.black_byte(), color.color_byte(), delay)
    }

    /// Fill both planes of the whole panel without refreshing
    pub fn stage_buffer<D: DelayNs>(
        &mut self,
        black: u8,
        color: u8,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.write_screen(black, color, delay)?;
        self.send_command(PARTIAL_OUT)
    }

    /// Blank both planes of the whole panel without refreshing
    pub fn stage_screen_buffer<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.stage_buffer(BLANK, BLANK, delay)
    }

    /// Write an image to controller RAM at (`x`, `y`) without refreshing
    ///
    /// The image is clipped to the panel, and `x` is moved down to a byte
    /// boundary. A placement with no visible pixels sends nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if a plane is shorter than the image
    /// extent, before any bus traffic.
    pub fn stage_image<D: DelayNs>(
        &mut self,
        image: &Image<'_>,
        x: i32,
        y: i32,
        options: WriteOptions,
        delay: &mut D,
    ) -> DisplayResult<I> {
        Self::check_planes(image)?;
        match clip_image(image.width, image.height, x, y, &self.config.dimensions) {
            Some(clip) => self.write_image(image, &clip, options, delay),
            None => {
                trace!("image at ({x}, {y}) is off panel, skipped");
                Ok(())
            }
        }
    }

    /// Write the `part` sub-rectangle of an image to (`x`, `y`) without
    /// refreshing
    ///
    /// `part` is limited to the image extent before the placement is clipped
    /// to the panel. A negative part size or a part origin outside the image
    /// sends nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if a plane is shorter than the image
    /// extent, before any bus traffic.
    pub fn stage_image_region<D: DelayNs>(
        &mut self,
        image: &Image<'_>,
        part: Rect,
        x: i32,
        y: i32,
        options: WriteOptions,
        delay: &mut D,
    ) -> DisplayResult<I> {
        Self::check_planes(image)?;
        let clip = clip_image_part(
            part,
            image.width,
            image.height,
            x,
            y,
            &self.config.dimensions,
        );
        match clip {
            Some(clip) => self.write_image(image, &clip, options, delay),
            None => {
                trace!("image part {part:?} at ({x}, {y}) is empty, skipped");
                Ok(())
            }
        }
    }

    /// Write an image and refresh the rectangle it covers
    pub fn draw<D: DelayNs>(
        &mut self,
        image: &Image<'_>,
        x: i32,
        y: i32,
        options: WriteOptions,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.stage_image(image, x, y, options, delay)?;
        let rect = Rect::new(x, y, i32::from(image.width), i32::from(image.height));
        self.refresh_region(rect, delay)
    }

    /// Write part of an image and refresh the rectangle it covers
    pub fn draw_region<D: DelayNs>(
        &mut self,
        image: &Image<'_>,
        part: Rect,
        x: i32,
        y: i32,
        options: WriteOptions,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.stage_image_region(image, part, x, y, options, delay)?;
        self.refresh_region(Rect::new(x, y, part.w, part.h), delay)
    }

    /// Refresh the whole panel
    ///
    /// `Full` uses the OTP waveform; `Partial` runs the partial waveform
    /// over a window covering the whole panel.
    pub fn refresh<D: DelayNs>(&mut self, mode: RefreshMode, delay: &mut D) -> DisplayResult<I> {
        match mode {
            RefreshMode::Full => {
                self.init_full(delay)?;
                self.update(RefreshMode::Full, delay)
            }
            RefreshMode::Partial => {
                let window = Window::full(&self.config.dimensions);
                self.refresh_window(&window, delay)
            }
        }
    }

    /// Refresh the panel area covered by `rect`
    ///
    /// The rectangle is intersected with the panel and widened to byte
    /// boundaries.
    ///
    /// A rectangle covering the whole panel gets a full refresh with the OTP
    /// waveform, like [`refresh(RefreshMode::Full)`](Self::refresh), and waits
    /// up to the full refresh timeout. Use
    /// [`refresh(RefreshMode::Partial)`](Self::refresh) for a partial waveform
    /// over the whole panel. `draw` and `draw_region` refresh through this
    /// method, so a full-screen draw also gets a full refresh.
    pub fn refresh_region<D: DelayNs>(&mut self, rect: Rect, delay: &mut D) -> DisplayResult<I> {
        let Some(window) = clip_refresh(rect, &self.config.dimensions) else {
            trace!("refresh of {rect:?} is off panel, skipped");
            return Ok(());
        };
        if window.is_full(&self.config.dimensions) {
            return self.refresh(RefreshMode::Full, delay);
        }
        self.refresh_window(&window, delay)
    }

    /// Turn off the charge pumps
    ///
    /// Floats the border first. Does nothing while hibernating.
    pub fn power_off<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.power_state == PowerState::Hibernating {
            trace!("power off while hibernating, skipped");
            return Ok(());
        }
        self.send_command(VCOM_AND_DATA_INTERVAL)?;
        self.send_data(&[self.config.power_off_border])?;
        self.send_command(POWER_OFF)?;
        self.wait("power off", self.config.power_off_timeout_ms, delay)?;
        self.power_state = PowerState::Off;
        debug!("power off");
        Ok(())
    }

    /// Power off and enter deep sleep
    ///
    /// Deep sleep needs a reset line to wake up again; without one the
    /// controller is only powered off. The next operation after hibernation
    /// resets the controller before initializing it.
    pub fn hibernate<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.power_state == PowerState::Hibernating {
            return Ok(());
        }
        self.power_off(delay)?;
        if !self.interface.has_reset() {
            warn!("no reset line, deep sleep skipped");
            return Ok(());
        }
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_CHECK])?;
        self.power_state = PowerState::Hibernating;
        debug!("hibernating");
        Ok(())
    }

    fn check_planes(image: &Image<'_>) -> DisplayResult<I> {
        match image.short_plane() {
            Some((required, provided)) => Err(Error::BufferTooSmall { required, provided }),
            None => Ok(()),
        }
    }

    /// Fill both planes of the whole panel, leaving partial mode entered
    fn write_screen<D: DelayNs>(&mut self, black: u8, color: u8, delay: &mut D) -> DisplayResult<I> {
        self.init_partial(delay)?;
        self.send_command(PARTIAL_IN)?;
        let window = Window::full(&self.config.dimensions);
        self.set_partial_window(&window)?;
        self.fill_window(DATA_START_TRANSMISSION_1, &window, black)?;
        self.fill_window(DATA_START_TRANSMISSION_2, &window, color)?;
        // RAM counts as seeded only once both planes went out
        self.initial_clear_pending = false;
        Ok(())
    }

    fn write_image<D: DelayNs>(
        &mut self,
        image: &Image<'_>,
        clip: &ImageWindow,
        options: WriteOptions,
        delay: &mut D,
    ) -> DisplayResult<I> {
        if self.initial_clear_pending {
            trace!("seeding controller RAM before first image write");
            self.stage_screen_buffer(delay)?;
        }
        self.yield_now();
        self.init_partial(delay)?;
        self.send_command(PARTIAL_IN)?;
        self.set_partial_window(&clip.window)?;
        self.transfer_plane(DATA_START_TRANSMISSION_1, image.black, clip, options)?;
        self.transfer_plane(DATA_START_TRANSMISSION_2, image.color, clip, options)?;
        self.send_command(PARTIAL_OUT)?;
        self.yield_now();
        Ok(())
    }

    /// Stream one plane into the current window, row-major
    fn transfer_plane(
        &mut self,
        command: u8,
        plane: Option<Plane<'_>>,
        clip: &ImageWindow,
        options: WriteOptions,
    ) -> DisplayResult<I> {
        self.send_command(command)?;
        let row_bytes = clip.window.row_bytes();
        let mut chunk = [0u8; CHUNK_SIZE];
        let mut filled = 0;
        for row in 0..clip.window.h {
            let offset = clip.source_row_offset(row, options.mirror_y);
            for column in 0..row_bytes {
                chunk[filled] = match plane {
                    Some(plane) => options.apply(plane.byte(offset + column)),
                    None => options.absent_fill(),
                };
                filled += 1;
                if filled == CHUNK_SIZE {
                    self.send_data(&chunk)?;
                    filled = 0;
                }
            }
            self.yield_now();
        }
        if filled > 0 {
            self.send_data(&chunk[..filled])?;
        }
        Ok(())
    }

    fn fill_window(&mut self, command: u8, window: &Window, value: u8) -> DisplayResult<I> {
        self.send_command(command)?;
        let chunk = [value; CHUNK_SIZE];
        let mut remaining = window.byte_count();
        while remaining > 0 {
            let n = remaining.min(CHUNK_SIZE);
            self.send_data(&chunk[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    fn refresh_window<D: DelayNs>(&mut self, window: &Window, delay: &mut D) -> DisplayResult<I> {
        self.init_partial(delay)?;
        let use_window = self.config.use_partial_window;
        if use_window {
            self.send_command(PARTIAL_IN)?;
        }
        self.set_partial_window(window)?;
        self.update(RefreshMode::Partial, delay)?;
        if use_window {
            self.send_command(PARTIAL_OUT)?;
        }
        Ok(())
    }

    fn set_partial_window(&mut self, window: &Window) -> DisplayResult<I> {
        trace!("partial window {window:?}");
        let x_end = window.x_end();
        let y_end = window.y_end();
        self.send_command(PARTIAL_WINDOW)?;
        self.send_data(&[
            (window.x & 0xF8) as u8,
            (x_end & 0xFF) as u8,
            (window.y >> 8) as u8,
            (window.y & 0xFF) as u8,
            (y_end >> 8) as u8,
            (y_end & 0xFF) as u8,
            self.config.partial_window_scan,
        ])
    }

    /// Base register setup shared by both refresh modes
    fn init_display<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.power_state == PowerState::Hibernating {
            self.interface.reset(delay);
            self.power_state = PowerState::Off;
            debug!("woke from hibernation");
        }

        self.send_command(BOOSTER_SOFT_START)?;
        let booster = self.config.booster_soft_start;
        self.send_data(&booster)?;

        self.send_command(PANEL_SETTING)?;
        let panel = self.config.panel_setting;
        self.send_data(&panel)?;

        self.send_command(VCOM_AND_DATA_INTERVAL)?;
        self.send_data(&[self.config.vcom_data_interval])?;

        let Dimensions { width, height } = self.config.dimensions;
        self.send_command(RESOLUTION_SETTING)?;
        self.send_data(&[width as u8, (height >> 8) as u8, (height & 0xFF) as u8])
    }

    fn init_full<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.init_display(delay)?;
        self.power_on(delay)
    }

    fn init_partial<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.init_display(delay)?;
        // border and VCOM override for partial mode
        self.send_command(VCOM_AND_DATA_INTERVAL)?;
        self.send_data(&[self.config.partial_vcom_data_interval])?;
        self.power_on(delay)
    }

    fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.power_state == PowerState::On {
            return Ok(());
        }
        self.send_command(POWER_ON)?;
        self.wait("power on", self.config.power_on_timeout_ms, delay)?;
        self.power_state = PowerState::On;
        debug!("power on");
        Ok(())
    }

    /// Run the refresh waveform over the current window
    fn update<D: DelayNs>(&mut self, mode: RefreshMode, delay: &mut D) -> DisplayResult<I> {
        debug!("{mode:?} refresh");
        let timeout_ms = match mode {
            RefreshMode::Full => self.config.full_refresh_timeout_ms,
            RefreshMode::Partial => {
                self.send_command(LOAD_WAVEFORM)?;
                let lut = self.config.partial_lut;
                self.send_data(lut)?;
                self.config.partial_refresh_timeout_ms
            }
        };
        self.send_command(DISPLAY_REFRESH)?;
        self.wait("refresh", timeout_ms, delay)
    }

    fn wait<D: DelayNs>(&mut self, operation: &str, timeout_ms: u32, delay: &mut D) -> DisplayResult<I> {
        let ready = self
            .interface
            .wait_until_ready(delay, timeout_ms)
            .map_err(Error::Interface)?;
        if !ready {
            warn!("{operation}: busy timeout after {timeout_ms} ms");
        }
        Ok(())
    }

    fn yield_now(&self) {
        if let Some(hook) = self.yield_hook {
            hook();
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
