//! Month-grid and year-page layout.
//!
//! All positions are derived from a single pitch (marker center-to-center
//! spacing) so the printed sheet stays on a regular grid. The layout engine
//! is generic over [`Surface`] and carries no pixel state of its own.

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::calendar::CalendarDate;
use crate::geometry::Point;
use crate::rendering::{LayoutMetrics, Rgb, Surface};
use crate::PageConfig;

/// Render one month as a grid of outlined day markers with the month number
/// centered underneath.
///
/// The first row starts at the weekday column of the 1st (0 = Monday); rows
/// wrap after the seventh column. The day matching `today` gets a concentric
/// half-radius marker. Returns the maximum (x, y) offset the grid consumed
/// relative to `anchor`, which the page layout uses to place the next month.
pub fn render_month_grid<S: Surface>(
    surface: &mut S,
    date: CalendarDate,
    anchor: Point,
    metrics: &LayoutMetrics,
    label_size: f32,
    today: NaiveDate,
) -> Point {
    let pitch = metrics.pitch();
    let first_weekday = date.first_weekday() as i32;
    let days = date.days_in_month() as i32;
    let is_current_month = today.year() == date.year && today.month() == date.month;

    debug!(
        "month {}-{:02}: {} days, first weekday {}, anchor ({}, {})",
        date.year, date.month, days, first_weekday, anchor.x, anchor.y
    );

    let mut offset = Point::new(first_weekday * pitch, 0);
    let mut weekday = first_weekday;
    let mut bounds = Point::new(0, 0);

    for day in 1..=days {
        let center = anchor + offset;
        if is_current_month && today.day() as i32 == day {
            surface.stroke_circle(center, metrics.radius / 2, metrics.stroke, Rgb::BLACK);
        }
        surface.stroke_circle(center, metrics.radius, metrics.stroke, Rgb::BLACK);

        offset.x += pitch;
        weekday += 1;
        if weekday > 6 {
            offset = Point::new(0, offset.y + pitch);
            weekday = 0;
        }
        bounds.x = bounds.x.max(offset.x);
        bounds.y = bounds.y.max(offset.y);
    }

    let label = date.month.to_string();
    let extent = surface.text_extent(&label, label_size);
    let label_origin = anchor + (bounds.x / 2 - extent.width / 2, bounds.y + pitch);
    surface.draw_text(label_origin, &label, label_size, Rgb::BLACK);

    bounds
}

/// Render a calendar page and return its downscaled preview.
///
/// The page is cleared white and titled "{year} year". When the requested
/// month is not January its predecessor is rendered first for context, then
/// months advance until `months_to_print` grids are placed or December is
/// reached; the sheet never rolls into the next year. Grids flow left to
/// right and wrap to a new band when the next one would overrun the page.
pub fn render_year_page<S: Surface>(
    surface: &mut S,
    config: &PageConfig,
    date: CalendarDate,
    months_to_print: u32,
    today: NaiveDate,
) -> S {
    let pitch = config.metrics.pitch();

    surface.fill(Rgb::WHITE);

    let title = format!("{} year", date.year);
    let title_extent = surface.text_extent(&title, config.title_size);
    let title_origin = Point::new(surface.width() as i32 / 2 - title_extent.width / 2, 0);
    surface.draw_text(title_origin, &title, config.title_size, Rgb::BLACK);

    let mut anchor = Point::new(config.anchor.x, title_extent.height + pitch);
    let mut printed = 0u32;
    let mut bounds;

    if date.month > 1 {
        bounds = render_month_grid(
            surface,
            date.with_month(date.month - 1),
            anchor,
            &config.metrics,
            config.title_size,
            today,
        );
        printed += 1;
        anchor.x += bounds.x + pitch * 2;
    }

    bounds = render_month_grid(surface, date, anchor, &config.metrics, config.title_size, today);
    printed += 1;

    for step in 1..=months_to_print.saturating_sub(printed) {
        let month = date.month + step;
        if month > 12 {
            debug!("stopping at December, {printed} of {months_to_print} months printed");
            break;
        }
        anchor.x += bounds.x + pitch * 2;
        if anchor.x + pitch * 6 > surface.width() as i32 {
            anchor = Point::new(config.anchor.x, anchor.y + pitch * 8);
        }
        bounds = render_month_grid(
            surface,
            date.with_month(month),
            anchor,
            &config.metrics,
            config.title_size,
            today,
        );
        printed += 1;
    }

    surface.resampled(config.preview_width, config.preview_height)
}
