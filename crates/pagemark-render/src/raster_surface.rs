//! Software raster backend built on tiny-skia, with rusttype glyph
//! rendering.

use crate::surface::{StrokeOptions, Surface};
use kurbo::{BezPath, PathEl, Rect};
use pagemark_core::{Raster, TextMeasure};
use peniko::Color;
use rusttype::{point, Font, Scale};
use thiserror::Error;
use tiny_skia::{
    IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, StrokeDash,
    Transform,
};

/// Per-character advance used for measuring when no font is installed,
/// as a fraction of the font size.
const FALLBACK_ADVANCE: f64 = 0.6;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("font data could not be parsed")]
    InvalidFont,
}

/// A CPU pixel buffer implementing [`Surface`].
///
/// Text is rasterized with rusttype when a font is installed; without
/// one, text runs measure at a fixed per-character advance and draw
/// nothing, keeping headless rendering deterministic.
pub struct RasterSurface {
    pixmap: Pixmap,
    transform: Transform,
    stack: Vec<Transform>,
    font: Option<Font<'static>>,
}

fn to_skia_paint(color: Color) -> Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            stack: Vec::new(),
            font: None,
        })
    }

    /// Install a font for glyph rendering and measurement.
    pub fn with_font(mut self, font: Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    /// Parse TTF/OTF bytes into an installable font.
    pub fn load_font(data: Vec<u8>) -> Result<Font<'static>, RenderError> {
        Font::try_from_vec(data).ok_or(RenderError::InvalidFont)
    }

    /// Premultiplied RGBA8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha RGBA8 copy, for encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    fn draw_glyphs(&mut self, line: &str, x: f64, y: f64, font_size: f64, color: Color) {
        let Some(font) = self.font.clone() else {
            return;
        };
        let rgba = color.to_rgba8();
        let scale = Scale::uniform(font_size as f32);
        for glyph in font.layout(line, scale, point(x as f32, y as f32)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            let width = bb.width().max(0) as u32;
            let height = bb.height().max(0) as u32;
            let Some(mut cell) = Pixmap::new(width, height) else {
                continue;
            };
            let pixels = cell.pixels_mut();
            glyph.draw(|gx, gy, coverage| {
                let alpha = (coverage * rgba.a as f32).round().clamp(0.0, 255.0) as u8;
                let straight = tiny_skia::ColorU8::from_rgba(rgba.r, rgba.g, rgba.b, alpha);
                pixels[(gy * width + gx) as usize] = straight.premultiply();
            });
            let placement = self.transform.pre_translate(bb.min.x as f32, bb.min.y as f32);
            self.pixmap
                .draw_pixmap(0, 0, cell.as_ref(), &PixmapPaint::default(), placement, None);
        }
    }
}

impl TextMeasure for RasterSurface {
    fn line_width(&self, line: &str, font_size: f64) -> f64 {
        match &self.font {
            Some(font) => {
                let scale = Scale::uniform(font_size as f32);
                let mut width = 0.0f32;
                for glyph in font.layout(line, scale, point(0.0, 0.0)) {
                    width = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
                }
                width as f64
            }
            None => line.chars().count() as f64 * FALLBACK_ADVANCE * font_size,
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.pre_translate(dx as f32, dy as f32);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self
            .transform
            .pre_concat(Transform::from_rotate(radians.to_degrees() as f32));
    }

    fn stroke_path(&mut self, path: &BezPath, options: &StrokeOptions) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let paint = to_skia_paint(options.color);
        let (cap, join) = if options.round {
            (LineCap::Round, LineJoin::Round)
        } else {
            (LineCap::Butt, LineJoin::Miter)
        };
        let stroke = Stroke {
            width: options.width as f32,
            line_cap: cap,
            line_join: join,
            dash: options
                .dash
                .and_then(|(on, off)| StrokeDash::new(vec![on as f32, off as f32], 0.0)),
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.transform, None);
    }

    fn draw_raster(&mut self, raster: &Raster, dest: Rect) {
        let Some(size) = IntSize::from_wh(raster.width(), raster.height()) else {
            return;
        };
        let Some(source) = Pixmap::from_vec(raster.pixels().to_vec(), size) else {
            return;
        };
        if dest.width() <= 0.0 || dest.height() <= 0.0 {
            return;
        }
        let placement = self
            .transform
            .pre_translate(dest.x0 as f32, dest.y0 as f32)
            .pre_scale(
                (dest.width() / raster.width() as f64) as f32,
                (dest.height() / raster.height() as f64) as f32,
            );
        let paint = PixmapPaint {
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, placement, None);
    }

    fn fill_text(&mut self, line: &str, x: f64, y: f64, font_size: f64, color: Color) {
        self.draw_glyphs(line, x, y, font_size, color);
    }
}
