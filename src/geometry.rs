//! Rectangle clipping and byte-aligned window arithmetic
//!
//! The controller addresses RAM in groups of 8 columns, so every window sent
//! to it starts and ends on a byte boundary. Requests are clipped rather than
//! rejected: a rectangle that ends up with no pixels on the panel yields
//! `None` and the caller skips the operation entirely.
//!
//! ## Example
//!
//! ```
//! use il0373::geometry::clip_image;
//! use il0373::Dimensions;
//!
//! let panel = Dimensions::PANEL_350C;
//!
//! // A 20x10 image placed 3 pixels off the left edge
//! if let Some(clipped) = clip_image(20, 10, -3, 0, &panel) {
//!     assert_eq!(clipped.window.x, 0);
//!     assert_eq!(clipped.window.w, 16);
//!     assert_eq!(clipped.dx, 8);
//! }
//!
//! // Entirely off-panel
//! assert!(clip_image(20, 10, 400, 0, &panel).is_none());
//! ```

use crate::config::Dimensions;

/// Rectangle in pixel units
///
/// Signed so that requests may start off-panel before clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    #[allow(clippy::many_single_char_names)]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::primitives::Rectangle> for Rect {
    fn from(rect: embedded_graphics_core::primitives::Rectangle) -> Self {
        Self {
            x: rect.top_left.x,
            y: rect.top_left.y,
            w: i32::try_from(rect.size.width).unwrap_or(i32::MAX),
            h: i32::try_from(rect.size.height).unwrap_or(i32::MAX),
        }
    }
}

/// Byte-aligned window of panel RAM
///
/// Invariants: `x % 8 == 0`, `w % 8 == 0`, `w > 0`, `h > 0`, and the window
/// lies inside the panel it was clipped against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left edge in pixels
    pub x: u16,
    /// Top edge in pixels
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Window {
    /// Window covering the whole panel
    pub fn full(dims: &Dimensions) -> Self {
        Self {
            x: 0,
            y: 0,
            w: dims.width,
            h: dims.height,
        }
    }

    /// Bytes per window row
    pub fn row_bytes(&self) -> usize {
        usize::from(self.w / 8)
    }

    /// Total bytes addressed by the window
    pub fn byte_count(&self) -> usize {
        self.row_bytes() * usize::from(self.h)
    }

    /// Inclusive end column, rounded to the last column of its byte
    pub fn x_end(&self) -> u16 {
        (self.x + self.w - 1) | 0x0007
    }

    /// Inclusive end row
    pub fn y_end(&self) -> u16 {
        self.y + self.h - 1
    }

    /// Whether this window covers the whole panel
    pub fn is_full(&self, dims: &Dimensions) -> bool {
        *self == Self::full(dims)
    }
}

/// A clipped image placement
///
/// Carries the destination window together with the offsets needed to find
/// the first visible source byte of each destination row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageWindow {
    /// Destination window on the panel
    pub window: Window,
    /// Columns clipped away on the left (multiple of 8)
    pub dx: u16,
    /// Rows clipped away at the top
    pub dy: u16,
    /// Byte column of the sub-image origin in the source
    part_x_byte: usize,
    /// Row of the sub-image origin in the source
    part_y: usize,
    /// Source bytes per row
    source_row_bytes: usize,
    /// Source height in rows
    source_height: usize,
}

impl ImageWindow {
    /// Offset of the first source byte for destination row `row`
    ///
    /// With `mirror_y` the source is read bottom-up.
    pub fn source_row_offset(&self, row: u16, mirror_y: bool) -> usize {
        let source_row = self.part_y + usize::from(row) + usize::from(self.dy);
        let source_row = if mirror_y {
            self.source_height - 1 - source_row
        } else {
            source_row
        };
        source_row * self.source_row_bytes + self.part_x_byte + usize::from(self.dx / 8)
    }

    /// Source bytes per row
    pub fn source_row_bytes(&self) -> usize {
        self.source_row_bytes
    }
}

/// Bytes per row of a bitmap `width` pixels wide (rows are padded)
pub fn row_bytes(width: u16) -> usize {
    usize::from(width).div_ceil(8)
}

/// Clip a whole `width` x `height` bitmap placed at (`x`, `y`)
pub fn clip_image(width: u16, height: u16, x: i32, y: i32, panel: &Dimensions) -> Option<ImageWindow> {
    clip_image_part(
        Rect::new(0, 0, i32::from(width), i32::from(height)),
        width,
        height,
        x,
        y,
        panel,
    )
}

/// Clip the `part` sub-rectangle of a `source_width` x `source_height`
/// bitmap placed at (`x`, `y`)
///
/// The part is first limited to the bitmap extent, then the placement is
/// limited to the panel. Negative sizes and a part origin outside the
/// bitmap yield `None`.
#[allow(clippy::many_single_char_names)]
pub fn clip_image_part(
    part: Rect,
    source_width: u16,
    source_height: u16,
    x: i32,
    y: i32,
    panel: &Dimensions,
) -> Option<ImageWindow> {
    let source_w = i64::from(source_width);
    let source_h = i64::from(source_height);
    let (part_x, part_y) = (i64::from(part.x), i64::from(part.y));

    if part.w < 0 || part.h < 0 {
        return None;
    }
    if part_x < 0 || part_x >= source_w || part_y < 0 || part_y >= source_h {
        return None;
    }

    // bitmap extent
    let part_x = part_x - part_x % 8;
    let w = i64::from(part.w).min(source_w - part_x);
    let h = i64::from(part.h).min(source_h - part_y);

    // byte boundary
    let x = i64::from(x);
    let x = x - x.rem_euclid(8);
    let w = 8 * ((w + 7) / 8);

    // panel bounds
    let y = i64::from(y);
    let (panel_w, panel_h) = (i64::from(panel.width), i64::from(panel.height));
    let x1 = x.max(0);
    let y1 = y.max(0);
    let w1 = if x + w < panel_w { w } else { panel_w - x };
    let h1 = if y + h < panel_h { h } else { panel_h - y };
    let dx = x1 - x;
    let dy = y1 - y;
    let w1 = w1 - dx;
    let h1 = h1 - dy;
    if w1 <= 0 || h1 <= 0 {
        return None;
    }

    Some(ImageWindow {
        window: Window {
            x: x1 as u16,
            y: y1 as u16,
            w: w1 as u16,
            h: h1 as u16,
        },
        dx: dx as u16,
        dy: dy as u16,
        part_x_byte: (part_x / 8) as usize,
        part_y: part_y as usize,
        source_row_bytes: row_bytes(source_width),
        source_height: usize::from(source_height),
    })
}

/// Clip a refresh rectangle to the panel, then widen it to byte boundaries
#[allow(clippy::many_single_char_names)]
pub fn clip_refresh(rect: Rect, panel: &Dimensions) -> Option<Window> {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (w, h) = (i64::from(rect.w), i64::from(rect.h));
    let (panel_w, panel_h) = (i64::from(panel.width), i64::from(panel.height));

    let w1 = if x < 0 { w + x } else { w };
    let h1 = if y < 0 { h + y } else { h };
    let x1 = x.max(0);
    let y1 = y.max(0);
    let w1 = if x1 + w1 < panel_w { w1 } else { panel_w - x1 };
    let h1 = if y1 + h1 < panel_h { h1 } else { panel_h - y1 };
    if w1 <= 0 || h1 <= 0 {
        return None;
    }

    let w1 = w1 + x1 % 8;
    let w1 = 8 * ((w1 + 7) / 8);
    let x1 = x1 - x1 % 8;

    Some(Window {
        x: x1 as u16,
        y: y1 as u16,
        w: w1 as u16,
        h: h1 as u16,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Dimensions = Dimensions {
        width: 152,
        height: 296,
    };

    fn assert_inside(window: &Window, panel: &Dimensions) {
        assert_eq!(window.x % 8, 0, "{window:?}");
        assert_eq!(window.w % 8, 0, "{window:?}");
        assert!(window.w > 0 && window.h > 0, "{window:?}");
        assert!(window.x + window.w <= panel.width, "{window:?}");
        assert!(window.y + window.h <= panel.height, "{window:?}");
    }

    #[test]
    fn test_clip_image_alignment_and_containment() {
        for x in (-40..200).step_by(3) {
            for y in (-40..340).step_by(17) {
                for (w, h) in [(1u16, 1u16), (7, 3), (20, 50), (152, 296), (200, 400)] {
                    if let Some(clipped) = clip_image(w, h, x, y, &PANEL) {
                        assert_inside(&clipped.window, &PANEL);
                        assert_eq!(clipped.dx % 8, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_clip_image_part_alignment_and_containment() {
        let (source_w, source_h) = (60u16, 40u16);
        let source_row_bytes = row_bytes(source_w);
        let source_len = source_row_bytes * usize::from(source_h);
        for part_x in [0, 3, 8, 13, 59] {
            for part_y in [0, 5, 39] {
                for (w, h) in [(1, 1), (9, 7), (30, 30), (100, 100)] {
                    let part = Rect::new(part_x, part_y, w, h);
                    for x in (-70..170).step_by(11) {
                        for y in (-50..310).step_by(29) {
                            let Some(clipped) =
                                clip_image_part(part, source_w, source_h, x, y, &PANEL)
                            else {
                                continue;
                            };
                            assert_inside(&clipped.window, &PANEL);
                            assert_eq!(clipped.dx % 8, 0);

                            // every byte read stays inside the source row and bitmap
                            let row_span = clipped.window.row_bytes();
                            for row in 0..clipped.window.h {
                                for mirror_y in [false, true] {
                                    let first = clipped.source_row_offset(row, mirror_y);
                                    let last = first + row_span - 1;
                                    assert!(last < source_len, "{part:?} at ({x}, {y})");
                                    assert_eq!(
                                        first / source_row_bytes,
                                        last / source_row_bytes,
                                        "{part:?} at ({x}, {y})"
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_clip_refresh_alignment_and_containment() {
        for x in (-40..200).step_by(5) {
            for y in (-40..340).step_by(23) {
                for (w, h) in [(1, 1), (9, 3), (33, 50), (152, 296), (400, 400)] {
                    if let Some(window) = clip_refresh(Rect::new(x, y, w, h), &PANEL) {
                        assert_inside(&window, &PANEL);
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_panel_image_is_unclipped() {
        let clipped = clip_image(152, 296, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.window, Window::full(&PANEL));
        assert_eq!((clipped.dx, clipped.dy), (0, 0));
        assert_eq!(clipped.window.x_end(), 151);
        assert_eq!(clipped.window.y_end(), 295);
    }

    #[test]
    fn test_left_clip_rounds_to_byte() {
        for k in 1..8 {
            let clipped = clip_image(32, 4, -k, 0, &PANEL).unwrap();
            assert_eq!(clipped.window.x, 0);
            assert_eq!(clipped.dx, 8);
            assert_eq!(clipped.window.w, 24);
            assert_eq!(clipped.source_row_offset(0, false), 1);
        }
    }

    #[test]
    fn test_unaligned_x_moves_down_to_byte() {
        let clipped = clip_image(16, 4, 13, 0, &PANEL).unwrap();
        assert_eq!(clipped.window.x, 8);
        assert_eq!(clipped.window.w, 16);
        assert_eq!(clipped.dx, 0);
    }

    #[test]
    fn test_width_rounds_up_to_byte() {
        let clipped = clip_image(9, 2, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.window.w, 16);
        assert_eq!(clipped.source_row_bytes(), 2);
    }

    #[test]
    fn test_top_clip_skips_rows() {
        let clipped = clip_image(16, 10, 0, -4, &PANEL).unwrap();
        assert_eq!(clipped.window.y, 0);
        assert_eq!(clipped.window.h, 6);
        assert_eq!(clipped.dy, 4);
        assert_eq!(clipped.source_row_offset(0, false), 4 * 2);
    }

    #[test]
    fn test_right_and_bottom_clip() {
        let clipped = clip_image(32, 32, 136, 280, &PANEL).unwrap();
        assert_eq!(clipped.window, Window { x: 136, y: 280, w: 16, h: 16 });
        assert_eq!(clipped.source_row_offset(15, false), 15 * 4);
    }

    #[test]
    fn test_off_panel_is_empty() {
        assert!(clip_image(16, 16, 152, 0, &PANEL).is_none());
        assert!(clip_image(16, 16, 0, 296, &PANEL).is_none());
        assert!(clip_image(16, 16, -16, 0, &PANEL).is_none());
        assert!(clip_image(16, 16, 0, -16, &PANEL).is_none());
        assert!(clip_image(0, 16, 0, 0, &PANEL).is_none());
        assert!(clip_image(16, 0, 0, 0, &PANEL).is_none());
    }

    #[test]
    fn test_mirror_reads_bottom_up() {
        let clipped = clip_image(16, 10, 0, 0, &PANEL).unwrap();
        for row in 0..10 {
            assert_eq!(
                clipped.source_row_offset(row, true),
                clipped.source_row_offset(9 - row, false)
            );
        }
    }

    #[test]
    fn test_mirror_with_top_clip() {
        let clipped = clip_image(16, 10, 0, -3, &PANEL).unwrap();
        // first visible row is source row 3, mirrored to 10 - 1 - 3
        assert_eq!(clipped.source_row_offset(0, true), 6 * 2);
    }

    #[test]
    fn test_part_offsets() {
        let clipped = clip_image_part(Rect::new(8, 8, 16, 16), 32, 32, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.window, Window { x: 0, y: 0, w: 16, h: 16 });
        assert_eq!(clipped.source_row_offset(0, false), 8 * 4 + 1);
        assert_eq!(clipped.source_row_offset(1, false), 9 * 4 + 1);
    }

    #[test]
    fn test_part_origin_aligns_down() {
        let clipped = clip_image_part(Rect::new(11, 0, 8, 1), 32, 1, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.source_row_offset(0, false), 1);
    }

    #[test]
    fn test_part_limited_by_bitmap_before_panel() {
        // 24 rows requested, only 8 left below the part origin
        let clipped = clip_image_part(Rect::new(0, 24, 32, 24), 32, 32, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.window.h, 8);
        assert_eq!(clipped.window.w, 32);
        // 24 columns requested, only 16 left right of the part origin
        let clipped = clip_image_part(Rect::new(16, 0, 24, 4), 32, 4, 0, 0, &PANEL).unwrap();
        assert_eq!(clipped.window.w, 16);
    }

    #[test]
    fn test_part_mirror_uses_bitmap_height() {
        let clipped = clip_image_part(Rect::new(0, 8, 16, 4), 16, 32, 0, 0, &PANEL).unwrap();
        // source row 8 mirrored within the 32-row bitmap
        assert_eq!(clipped.source_row_offset(0, true), (32 - 1 - 8) * 2);
    }

    #[test]
    fn test_part_rejects_out_of_range_origin() {
        assert!(clip_image_part(Rect::new(-1, 0, 8, 8), 32, 32, 0, 0, &PANEL).is_none());
        assert!(clip_image_part(Rect::new(0, -1, 8, 8), 32, 32, 0, 0, &PANEL).is_none());
        assert!(clip_image_part(Rect::new(32, 0, 8, 8), 32, 32, 0, 0, &PANEL).is_none());
        assert!(clip_image_part(Rect::new(0, 32, 8, 8), 32, 32, 0, 0, &PANEL).is_none());
        assert!(clip_image_part(Rect::new(0, 0, -8, 8), 32, 32, 0, 0, &PANEL).is_none());
        assert!(clip_image_part(Rect::new(0, 0, 8, -8), 32, 32, 0, 0, &PANEL).is_none());
    }

    #[test]
    fn test_refresh_widens_to_bytes() {
        let window = clip_refresh(Rect::new(13, 5, 10, 7), &PANEL).unwrap();
        assert_eq!(window, Window { x: 8, y: 5, w: 16, h: 7 });
        assert_eq!(window.x_end(), 23);
    }

    #[test]
    fn test_refresh_intersects_before_widening() {
        let window = clip_refresh(Rect::new(-5, -5, 20, 20), &PANEL).unwrap();
        assert_eq!(window, Window { x: 0, y: 0, w: 16, h: 15 });
        let window = clip_refresh(Rect::new(140, 290, 40, 40), &PANEL).unwrap();
        assert_eq!(window, Window { x: 136, y: 290, w: 16, h: 6 });
        assert!(clip_refresh(Rect::new(152, 0, 8, 8), &PANEL).is_none());
        assert!(clip_refresh(Rect::new(0, 0, 0, 8), &PANEL).is_none());
    }

    #[test]
    fn test_x_end_rounds_to_last_column_of_byte() {
        let window = Window { x: 8, y: 0, w: 8, h: 1 };
        assert_eq!(window.x_end(), 15);
        assert!(!window.is_full(&PANEL));
        assert!(Window::full(&PANEL).is_full(&PANEL));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_rect_from_rectangle() {
        use embedded_graphics::prelude::{Point, Size};
        use embedded_graphics::primitives::Rectangle;

        let rect = Rect::from(Rectangle::new(Point::new(-3, 4), Size::new(10, 20)));
        assert_eq!(rect, Rect::new(-3, 4, 10, 20));
    }
}
