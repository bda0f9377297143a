use super::constants::OFFSCREEN_SENTINEL;
use glam::Vec2;

/// Last known pointer position in canvas logical pixels, plus the press flag.
///
/// Event handlers write it; each frame hands a copy to the scene update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::splat(OFFSCREEN_SENTINEL),
            pressed: false,
        }
    }
}

impl PointerState {
    pub fn move_to(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
        }
    }

    pub fn press_at(&mut self, position: Vec2) {
        self.move_to(position);
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Pointer left the page or the touch ended.
    pub fn leave(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
            dpr: if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// Backing-store size in device pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).round() as u32;
        let h = (self.height * self.dpr).round() as u32;
        (w.max(1), h.max(1))
    }
}
