//! A Surface implementation that records drawing commands instead of
//! rasterizing, with deterministic text extents.

use printcal::{Point, Rgb, Surface, TextExtent};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill(Rgb),
    Circle {
        center: Point,
        radius: i32,
        stroke: i32,
    },
    Text {
        origin: Point,
        text: String,
        size: f32,
    },
}

pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> Vec<(Point, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(Point, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { origin, text, .. } => Some((*origin, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: i32, stroke: i32, _color: Rgb) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            stroke,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, size: f32, _color: Rgb) -> TextExtent {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            size,
        });
        self.text_extent(text, size)
    }

    // Fixed-width fake metrics: every glyph is half the point size wide.
    fn text_extent(&self, text: &str, size: f32) -> TextExtent {
        TextExtent {
            width: text.chars().count() as i32 * size as i32 / 2,
            height: size as i32,
        }
    }

    fn resampled(&self, width: u32, height: u32) -> Self {
        Self::new(width, height)
    }
}
