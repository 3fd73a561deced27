//! Calendar page rendering: the surface abstraction, layout metrics, the
//! month/page layout engine, and the software rasterizer.

pub mod layout;
pub mod raster;

pub use layout::{render_month_grid, render_year_page};
pub use raster::PixelSurface;

use crate::geometry::Point;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Status panel background.
    pub const PANEL_BG: Rgb = Rgb(33, 33, 33);
    /// Selected status line.
    pub const HIGHLIGHT: Rgb = Rgb(128, 128, 255);
}

/// Size of a rendered text run in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

/// Day marker geometry shared by every grid on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Day marker circle radius.
    pub radius: i32,
    /// Gap between adjacent marker rings.
    pub margin: i32,
    /// Ring width.
    pub stroke: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            radius: 41,
            margin: 5,
            stroke: 6,
        }
    }
}

impl LayoutMetrics {
    /// Center-to-center spacing of adjacent day markers. Computed once per
    /// render pass; rows and columns must use the identical pitch.
    pub fn pitch(&self) -> i32 {
        2 * self.margin + 2 * self.radius + 2 * self.stroke
    }
}

/// Minimal drawing interface the layout engine renders against.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Flood the whole surface with one color.
    fn fill(&mut self, color: Rgb);

    /// Outlined circle: a ring `stroke` pixels wide, drawn inward from
    /// `radius`.
    fn stroke_circle(&mut self, center: Point, radius: i32, stroke: i32, color: Rgb);

    /// Draw `text` with its top-left corner at `origin`. Returns the extent
    /// actually drawn.
    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Rgb) -> TextExtent;

    /// Extent `text` would occupy at `size`, without drawing.
    fn text_extent(&self, text: &str, size: f32) -> TextExtent;

    /// Smoothly resample the surface into a new one of the given dimensions.
    fn resampled(&self, width: u32, height: u32) -> Self
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pitch() {
        assert_eq!(LayoutMetrics::default().pitch(), 104);
    }

    #[test]
    fn test_pitch_tracks_metrics() {
        let metrics = LayoutMetrics {
            radius: 10,
            margin: 2,
            stroke: 1,
        };
        assert_eq!(metrics.pitch(), 26);
    }
}
