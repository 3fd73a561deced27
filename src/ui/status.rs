//! The status panel beside the preview: key help plus the current settings,
//! with the selected setting highlighted.

use crate::geometry::Point;
use crate::rendering::{Rgb, Surface};
use crate::ui::{SettingKind, Settings};

pub const PANEL_HEADER: &str = "Controls and info:";

/// One label/value row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub label: String,
    pub value: String,
    /// The setting this row displays, for editable rows.
    pub kind: Option<SettingKind>,
    /// Marks the save help row so the post-save flash can target it.
    pub save_hint: bool,
}

impl StatusLine {
    fn help(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            kind: None,
            save_hint: false,
        }
    }

    fn setting(kind: SettingKind, value: String) -> Self {
        Self {
            label: kind.label().to_string(),
            value,
            kind: Some(kind),
            save_hint: false,
        }
    }
}

/// What the panel highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusHighlight {
    /// The setting under the cursor.
    Setting(SettingKind),
    /// The save help row, flashed after a successful export.
    Saved,
}

/// Build the panel rows for the current settings. Every editable setting
/// carries its own kind tag; highlighting never relies on row positions.
pub fn status_lines(settings: &Settings, font_name: &str) -> Vec<StatusLine> {
    let mut save = StatusLine::help("Ctrl+S", "save generated image to file");
    save.save_hint = true;
    vec![
        save,
        StatusLine::help("Horizontal arrows", "change option"),
        StatusLine::help("Vertical arrows", "change between options"),
        StatusLine::setting(SettingKind::Font, font_name.to_string()),
        StatusLine::setting(SettingKind::Year, settings.date.year.to_string()),
        StatusLine::setting(SettingKind::Month, settings.date.month.to_string()),
        StatusLine::setting(
            SettingKind::MonthsToPrint,
            settings.months_to_print.to_string(),
        ),
    ]
}

/// Redraw the panel: header centered on top, labels left-aligned, values
/// right-aligned, highlighted row in the selection color.
pub fn render_status_panel<S: Surface>(
    surface: &mut S,
    lines: &[StatusLine],
    highlight: StatusHighlight,
    text_size: f32,
) {
    surface.fill(Rgb::PANEL_BG);

    let width = surface.width() as i32;
    let header_extent = surface.text_extent(PANEL_HEADER, text_size);
    surface.draw_text(
        Point::new(width / 2 - header_extent.width / 2, 6),
        PANEL_HEADER,
        text_size,
        Rgb::WHITE,
    );

    let row_height = header_extent.height + 6;
    for (row, line) in lines.iter().enumerate() {
        let selected = match highlight {
            StatusHighlight::Setting(kind) => line.kind == Some(kind),
            StatusHighlight::Saved => line.save_hint,
        };
        let color = if selected { Rgb::HIGHLIGHT } else { Rgb::WHITE };
        let y = (row as i32 + 1) * row_height + 6;
        surface.draw_text(Point::new(2, y), &line.label, text_size, color);
        let value_extent = surface.text_extent(&line.value, text_size);
        surface.draw_text(
            Point::new(width - value_extent.width, y),
            &line.value,
            text_size,
            color,
        );
    }
}
