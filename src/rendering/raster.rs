//! Software RGBA rasterizer backing the `Surface` abstraction.

use rusttype::{point, Scale};

use crate::fonts::FontFace;
use crate::geometry::Point;
use crate::rendering::{Rgb, Surface, TextExtent};

/// An owned RGBA8 pixel buffer with a current font face for text runs.
///
/// The full-resolution calendar page and both window panes are instances of
/// this type; the layout engine only sees it through [`Surface`].
#[derive(Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    font: FontFace,
}

impl PixelSurface {
    /// A new surface, initially opaque white.
    pub fn new(width: u32, height: u32, font: FontFace) -> Self {
        Self {
            width,
            height,
            data: vec![0xff; width as usize * height as usize * 4],
            font,
        }
    }

    pub fn set_font(&mut self, font: FontFace) {
        self.font = font;
    }

    pub fn font(&self) -> &FontFace {
        &self.font
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Copy this surface into a larger RGBA frame with its top-left corner
    /// at `dst`. Rows falling outside the frame are clipped.
    pub fn blit_into(&self, frame: &mut [u8], frame_width: usize, dst: Point) {
        if dst.x < 0 || dst.y < 0 || frame_width == 0 {
            return;
        }
        let dst_x = dst.x as usize;
        let frame_height = frame.len() / (frame_width * 4);
        let copy_width = (self.width as usize).min(frame_width.saturating_sub(dst_x));
        for row in 0..self.height as usize {
            let frame_row = dst.y as usize + row;
            if frame_row >= frame_height {
                break;
            }
            let src_start = row * self.width as usize * 4;
            let dst_start = (frame_row * frame_width + dst_x) * 4;
            frame[dst_start..dst_start + copy_width * 4]
                .copy_from_slice(&self.data[src_start..src_start + copy_width * 4]);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &mut self.data[idx..idx + 4];
        px[0] = (color.0 as f32 * a + px[0] as f32 * (1.0 - a)).round() as u8;
        px[1] = (color.1 as f32 * a + px[1] as f32 * (1.0 - a)).round() as u8;
        px[2] = (color.2 as f32 * a + px[2] as f32 * (1.0 - a)).round() as u8;
        px[3] = 0xff;
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.0;
            px[1] = color.1;
            px[2] = color.2;
            px[3] = 0xff;
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: i32, stroke: i32, color: Rgb) {
        let outer = radius as f64;
        let inner = (radius - stroke).max(0) as f64;
        let reach = radius + 1;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                // 1px antialiasing band on both ring edges
                let coverage = if dist > outer {
                    1.0 - (dist - outer).min(1.0)
                } else if dist < inner {
                    1.0 - (inner - dist).min(1.0)
                } else {
                    1.0
                };
                if coverage > 0.0 {
                    self.blend_pixel(center.x + dx, center.y + dy, color, coverage as f32);
                }
            }
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Rgb) -> TextExtent {
        let extent = self.text_extent(text, size);
        let scale = Scale::uniform(size);
        let font = self.font.glyph_font().clone();
        let v_metrics = font.v_metrics(scale);
        for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    self.blend_pixel(
                        origin.x + bb.min.x + gx as i32,
                        origin.y + bb.min.y + gy as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
        extent
    }

    fn text_extent(&self, text: &str, size: f32) -> TextExtent {
        let scale = Scale::uniform(size);
        let font = self.font.glyph_font();
        let v_metrics = font.v_metrics(scale);
        let width = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        TextExtent {
            width: width.ceil() as i32,
            height: (v_metrics.ascent - v_metrics.descent).ceil() as i32,
        }
    }

    fn resampled(&self, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height, self.font.clone());
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return out;
        }
        let (sw, sh) = (self.width as usize, self.height as usize);
        for y in 0..height as usize {
            let sy0 = y * sh / height as usize;
            let sy1 = (((y + 1) * sh).div_ceil(height as usize)).clamp(sy0 + 1, sh);
            for x in 0..width as usize {
                let sx0 = x * sw / width as usize;
                let sx1 = (((x + 1) * sw).div_ceil(width as usize)).clamp(sx0 + 1, sw);
                let mut sums = [0u32; 3];
                for sy in sy0..sy1 {
                    for sx in sx0..sx1 {
                        let idx = (sy * sw + sx) * 4;
                        sums[0] += self.data[idx] as u32;
                        sums[1] += self.data[idx + 1] as u32;
                        sums[2] += self.data[idx + 2] as u32;
                    }
                }
                let count = ((sy1 - sy0) * (sx1 - sx0)) as u32;
                let idx = (y * width as usize + x) * 4;
                out.data[idx] = (sums[0] / count) as u8;
                out.data[idx + 1] = (sums[1] / count) as u8;
                out.data[idx + 2] = (sums[2] / count) as u8;
                out.data[idx + 3] = 0xff;
            }
        }
        out
    }
}
