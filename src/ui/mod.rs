//! Interactive controls: the setting cursor, setting mutations, and the
//! status panel beside the preview.

mod controller;
mod status;

pub use controller::{Adjust, Controller, SettingKind, Settings};
pub use status::{render_status_panel, status_lines, StatusHighlight, StatusLine, PANEL_HEADER};
