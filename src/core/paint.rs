use glam::Vec2;
use std::fmt;

/// sRGB colour with straight alpha, rendered as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with `a` clamped into [0, 1]; NaN maps to fully transparent.
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    /// Hue in degrees, saturation and lightness in [0, 1].
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r1), to_u8(g1), to_u8(b1)).with_alpha(alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Drawing operations the scenes need from a 2D backend, in logical pixels.
pub trait Surface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Disc filled with a radial gradient from `inner` at the center to `outer` at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
    /// Straight line with a linear gradient along its length.
    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        from_color: Rgba,
        to_color: Rgba,
    );
}
