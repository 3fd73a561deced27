//! The interactive preview: window setup, event loop, and the session state
//! tying the controller to the renderer.

use std::path::PathBuf;

use log::{debug, error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowBuilder;

use crate::calendar::{self, CalendarDate};
use crate::error::{Error, Result};
use crate::export;
use crate::fonts::FontLibrary;
use crate::geometry::Point;
use crate::rendering::{render_year_page, PixelSurface};
use crate::ui::{
    render_status_panel, status_lines, Adjust, Controller, SettingKind, StatusHighlight,
};
use crate::PageConfig;

/// Default number of month grids on a fresh session.
const DEFAULT_MONTHS_TO_PRINT: u32 = 3;

/// One interactive editing session: the controller, the full-resolution page
/// and the two panes composited into the window frame.
struct Session {
    config: PageConfig,
    controller: Controller,
    page: PixelSurface,
    preview: PixelSurface,
    panel: PixelSurface,
    output: PathBuf,
    /// Highlight the save help line instead of the cursor until the next key.
    saved_flash: bool,
}

impl Session {
    fn new(config: PageConfig, output: PathBuf) -> Result<Self> {
        let fonts = FontLibrary::discover();
        info!("{} usable font(s) found", fonts.len());
        let face = fonts.load(0)?;

        let controller = Controller::new(fonts, CalendarDate::today(), DEFAULT_MONTHS_TO_PRINT);
        let page = PixelSurface::new(config.page_width, config.page_height, face.clone());
        let preview = PixelSurface::new(config.preview_width, config.preview_height, face.clone());
        let panel = PixelSurface::new(config.panel_width, config.preview_height, face);

        let mut session = Self {
            config,
            controller,
            page,
            preview,
            panel,
            output,
            saved_flash: false,
        };
        session.render_page();
        session.render_panel();
        Ok(session)
    }

    fn render_page(&mut self) {
        let settings = self.controller.settings();
        self.preview = render_year_page(
            &mut self.page,
            &self.config,
            settings.date,
            settings.months_to_print,
            calendar::today(),
        );
    }

    fn render_panel(&mut self) {
        let settings = self.controller.settings();
        let font_name = self
            .controller
            .fonts()
            .entry(settings.font_index)
            .map(|e| e.family.clone())
            .unwrap_or_default();
        let lines = status_lines(&settings, &font_name);
        let highlight = if self.saved_flash {
            StatusHighlight::Saved
        } else {
            StatusHighlight::Setting(self.controller.cursor_kind())
        };
        render_status_panel(&mut self.panel, &lines, highlight, self.config.status_size);
    }

    fn move_cursor(&mut self, up: bool) {
        if up {
            self.controller.cursor_up();
        } else {
            self.controller.cursor_down();
        }
        self.saved_flash = false;
        self.render_panel();
    }

    fn adjust(&mut self, direction: Adjust) {
        let on_font = self.controller.cursor_kind() == SettingKind::Font;
        self.controller.adjust(direction);
        self.saved_flash = false;
        if on_font {
            self.reload_font();
        }
        self.render_page();
        self.render_panel();
    }

    fn reload_font(&mut self) {
        let index = self.controller.settings().font_index;
        match self.controller.fonts().load(index) {
            Ok(face) => {
                debug!("switched to font '{}'", face.name());
                self.page.set_font(face.clone());
                self.panel.set_font(face);
            }
            Err(err) => warn!("keeping previous font: {err}"),
        }
    }

    /// Export the page. Failure is reported but never ends the session.
    fn save(&mut self) {
        match export::save_page(&self.page, &self.output) {
            Ok(path) => {
                println!("Saved to {}", path.display());
                self.saved_flash = true;
            }
            Err(err) => error!("{err}"),
        }
        self.render_panel();
    }

    /// Copy both panes into the window frame: preview on the left, status
    /// panel to its right.
    fn compose(&self, frame: &mut [u8], frame_width: usize) {
        self.preview.blit_into(frame, frame_width, Point::new(0, 0));
        self.panel
            .blit_into(frame, frame_width, Point::new(self.config.preview_width as i32, 0));
    }

    /// Handle one pressed key. Returns true when the frame needs redrawing.
    fn handle_key(&mut self, key: &Key, modifiers: ModifiersState) -> bool {
        match key {
            Key::Named(NamedKey::ArrowUp) => {
                self.move_cursor(true);
                true
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.move_cursor(false);
                true
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.adjust(Adjust::Decrease);
                true
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.adjust(Adjust::Increase);
                true
            }
            Key::Character(text) if modifiers.control_key() && text.eq_ignore_ascii_case("s") => {
                self.save();
                true
            }
            _ => {
                if self.saved_flash {
                    self.saved_flash = false;
                    self.render_panel();
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Open the preview window and run the blocking event loop until the user
/// closes it or presses Escape.
pub fn run(config: PageConfig, output: PathBuf) -> Result<()> {
    let window_width = config.preview_width + config.panel_width;
    let window_height = config.preview_height;
    let mut session = Session::new(config, output)?;

    let event_loop = EventLoop::new().map_err(|e| Error::Window(e.to_string()))?;
    let window = WindowBuilder::new()
        .with_title("printcal")
        .with_inner_size(LogicalSize::new(window_width as f64, window_height as f64))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|e| Error::Window(e.to_string()))?;

    let mut pixels = {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(window_width, window_height, surface_texture)
            .map_err(|e| Error::Window(e.to_string()))?
    };

    let mut modifiers = ModifiersState::default();

    event_loop
        .run(move |event, target| {
            target.set_control_flow(ControlFlow::Wait);
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::ModifiersChanged(state) => modifiers = state.state(),
                    WindowEvent::KeyboardInput { event: key, .. } => {
                        if key.state != ElementState::Pressed {
                            return;
                        }
                        if matches!(key.logical_key, Key::Named(NamedKey::Escape)) {
                            target.exit();
                            return;
                        }
                        if session.handle_key(&key.logical_key, modifiers) {
                            window.request_redraw();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        session.compose(pixels.frame_mut(), window_width as usize);
                        if let Err(err) = pixels.render() {
                            error!("failed to present frame: {err}");
                            target.exit();
                        }
                    }
                    _ => {}
                }
            }
        })
        .map_err(|e| Error::Window(e.to_string()))
}
