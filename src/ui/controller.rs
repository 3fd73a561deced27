//! Cursor state machine over the editable settings.

use crate::calendar::CalendarDate;
use crate::fonts::FontLibrary;

/// The editable settings, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Font,
    Year,
    Month,
    MonthsToPrint,
}

impl SettingKind {
    pub const ALL: [SettingKind; 4] = [
        SettingKind::Font,
        SettingKind::Year,
        SettingKind::Month,
        SettingKind::MonthsToPrint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingKind::Font => "Font",
            SettingKind::Year => "Year",
            SettingKind::Month => "Month",
            SettingKind::MonthsToPrint => "Months to print",
        }
    }
}

/// Direction of a Left/Right adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Decrease,
    Increase,
}

/// The state both renders are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub font_index: usize,
    pub date: CalendarDate,
    pub months_to_print: u32,
}

/// Owns the settings and the selection cursor. All key input funnels through
/// here, so no out-of-range setting value is ever observable.
#[derive(Debug)]
pub struct Controller {
    settings: Settings,
    cursor: usize,
    fonts: FontLibrary,
}

impl Controller {
    pub fn new(fonts: FontLibrary, date: CalendarDate, months_to_print: u32) -> Self {
        Self {
            settings: Settings {
                font_index: 0,
                date,
                months_to_print: months_to_print.clamp(1, 12),
            },
            cursor: 0,
            fonts,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// The setting currently under the cursor.
    pub fn cursor_kind(&self) -> SettingKind {
        SettingKind::ALL[self.cursor]
    }

    pub fn cursor_up(&mut self) {
        self.cursor = if self.cursor == 0 {
            SettingKind::ALL.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % SettingKind::ALL.len();
    }

    /// Apply a Left/Right adjustment to the selected setting. Font selection
    /// wraps over the deduplicated list; the numeric settings clamp at their
    /// bounds. Returns true when the value actually changed.
    pub fn adjust(&mut self, direction: Adjust) -> bool {
        let before = self.settings;
        match self.cursor_kind() {
            SettingKind::Font => {
                self.settings.font_index = match direction {
                    Adjust::Decrease => self.fonts.previous_index(self.settings.font_index),
                    Adjust::Increase => self.fonts.next_index(self.settings.font_index),
                };
            }
            SettingKind::Year => {
                self.settings.date = match direction {
                    Adjust::Decrease => self.settings.date.prev_year(),
                    Adjust::Increase => self.settings.date.next_year(),
                };
            }
            SettingKind::Month => {
                self.settings.date = match direction {
                    Adjust::Decrease => self.settings.date.prev_month(),
                    Adjust::Increase => self.settings.date.next_month(),
                };
            }
            SettingKind::MonthsToPrint => {
                let count = self.settings.months_to_print;
                self.settings.months_to_print = match direction {
                    Adjust::Decrease => count.saturating_sub(1).max(1),
                    Adjust::Increase => (count + 1).min(12),
                };
            }
        }
        self.settings != before
    }
}
