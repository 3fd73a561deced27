//! Printcal
//!
//! Renders printable yearly calendar sheets: each month is a grid of
//! outlined circles (one per day, the current day marked with a concentric
//! inner ring) with the month number underneath. An interactive preview
//! window lets you pick the font, year, starting month and number of months
//! before exporting the full-resolution page as a PNG.
//!
//! # Example
//!
//! ```
//! use printcal::fonts::FontFace;
//! use printcal::{render_year_page, CalendarDate, PageConfig, PixelSurface};
//!
//! let config = PageConfig::default();
//! let mut page = PixelSurface::new(config.page_width, config.page_height, FontFace::builtin());
//! let preview = render_year_page(
//!     &mut page,
//!     &config,
//!     CalendarDate::new(2026, 5),
//!     3,
//!     printcal::calendar::today(),
//! );
//! # use printcal::Surface;
//! assert_eq!(preview.width(), config.preview_width);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod app;
pub mod calendar;
pub mod export;
pub mod fonts;
pub mod geometry;
pub mod rendering;
pub mod ui;

pub use calendar::CalendarDate;
pub use geometry::Point;
pub use rendering::{
    render_month_grid, render_year_page, LayoutMetrics, PixelSurface, Rgb, Surface, TextExtent,
};

/// Page and window geometry for one session.
///
/// The defaults match the printed sheets this tool was built for: an A4 page
/// at 300 dpi, previewed at roughly a fifth of its size next to a 400 px
/// status panel.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Full-resolution working page width, retained for export.
    pub page_width: u32,
    /// Full-resolution working page height.
    pub page_height: u32,
    /// Width of the downscaled preview pane.
    pub preview_width: u32,
    /// Height of the downscaled preview pane (also the window height).
    pub preview_height: u32,
    /// Width of the status panel beside the preview.
    pub panel_width: u32,
    /// Top-left anchor of the first month grid on the page.
    pub anchor: Point,
    /// Day marker geometry.
    pub metrics: LayoutMetrics,
    /// Text size of the page title and month labels.
    pub title_size: f32,
    /// Text size of the status panel rows.
    pub status_size: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: 2480,
            page_height: 3508,
            preview_width: 500,
            preview_height: 707,
            panel_width: 400,
            anchor: Point::new(100, 300),
            metrics: LayoutMetrics::default(),
            title_size: 128.0,
            status_size: 16.0,
        }
    }
}
