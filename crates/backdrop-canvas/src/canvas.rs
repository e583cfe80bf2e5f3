//! CPU raster surface with straight-alpha compositing
//!
//! Every paint operation blends OVER the existing pixels, so a
//! translucent full-surface fill leaves a fading imprint of earlier
//! frames (motion trails) instead of clearing them.

use backdrop_sim::Color;
use glam::Vec2;
use image::{Rgba, RgbaImage};

/// A retained drawing surface sized to the viewport.
pub struct Canvas {
    buf: RgbaImage,
    background: Color,
}

impl Canvas {
    /// Allocate a surface filled with the opaque background color.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let [r, g, b] = background;
        Self {
            buf: RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([r, g, b, 0xff])),
            background,
        }
    }

    /// Resize the surface to match the viewport. Idempotent for
    /// unchanged dimensions; a real resize starts from a fresh
    /// background fill (trails do not survive reallocation).
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if self.buf.width() == width && self.buf.height() == height {
            return;
        }
        log::debug!("canvas resize -> {width}x{height}");
        let [r, g, b] = self.background;
        self.buf = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 0xff]));
    }

    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        self.buf.as_raw()
    }

    /// Read one pixel back (test hook; rendering never reads).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buf.get_pixel(x, y).0
    }

    /// Blend a translucent `color` over the whole surface.
    pub fn fill(&mut self, color: Color, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let [r, g, b] = color;
        let (fr, fg, fb) = (r as f32, g as f32, b as f32);
        for px in self.buf.pixels_mut() {
            px.0[0] = (fr * a + px.0[0] as f32 * (1.0 - a)) as u8;
            px.0[1] = (fg * a + px.0[1] as f32 * (1.0 - a)) as u8;
            px.0[2] = (fb * a + px.0[2] as f32 * (1.0 - a)) as u8;
        }
    }

    /// Filled disk with a one-pixel antialiased rim.
    pub fn disk(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }

        let min_x = (center.x - radius).floor().max(0.0) as u32;
        let max_x = ((center.x + radius).ceil() as i64).clamp(0, self.width() as i64 - 1) as u32;
        let min_y = (center.y - radius).floor().max(0.0) as u32;
        let max_y = ((center.y + radius).ceil() as i64).clamp(0, self.height() as i64 - 1) as u32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let d = Vec2::new(px as f32 - center.x, py as f32 - center.y).length();
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_px(px, py, color, alpha * coverage);
                }
            }
        }
    }

    /// Stroke a straight segment of the given width.
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let pad = half + 1.0;

        let min_x = (a.x.min(b.x) - pad).floor().max(0.0) as u32;
        let max_x = ((a.x.max(b.x) + pad).ceil() as i64).clamp(0, self.width() as i64 - 1) as u32;
        let min_y = (a.y.min(b.y) - pad).floor().max(0.0) as u32;
        let max_y = ((a.y.max(b.y) + pad).ceil() as i64).clamp(0, self.height() as i64 - 1) as u32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let p = Vec2::new(px as f32, py as f32);
                let coverage = (half - dist_to_segment(p, a, b) + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_px(px, py, color, alpha * coverage);
                }
            }
        }
    }

    /// Stroke a quadratic Bezier from `p0` to `p1` with control point
    /// `ctrl`, flattened into short segments.
    pub fn stroke_quad(&mut self, p0: Vec2, ctrl: Vec2, p1: Vec2, width: f32, color: Color, alpha: f32) {
        let chord = p0.distance(p1);
        let segments = ((chord / 8.0) as usize).clamp(8, 48);

        let mut prev = p0;
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            let point = p0 * (u * u) + ctrl * (2.0 * u * t) + p1 * (t * t);
            self.line(prev, point, width, color, alpha);
            prev = point;
        }
    }

    fn blend_px(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        let px = self.buf.get_pixel_mut(x, y);
        let a = alpha.clamp(0.0, 1.0);
        px.0[0] = (color[0] as f32 * a + px.0[0] as f32 * (1.0 - a)) as u8;
        px.0[1] = (color[1] as f32 * a + px.0[1] as f32 * (1.0 - a)) as u8;
        px.0[2] = (color[2] as f32 * a + px.0[2] as f32 * (1.0 - a)) as u8;
        // Alpha OVER; the opaque background keeps the surface opaque.
        let da = px.0[3] as f32 / 255.0;
        px.0[3] = ((a + da * (1.0 - a)) * 255.0) as u8;
    }
}

fn dist_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
