use glam::Vec2;

pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;
pub const CURSOR_EASE_PER_TICK: f32 = 0.3;
pub const CURSOR_SETTLE_PX: f32 = 0.05; // movement below this skips style writes

/// Size and element-local offset of a click ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

/// Ripple square centred on the click, covering the element's larger side.
pub fn ripple_geometry(origin: Vec2, extent: Vec2, click: Vec2) -> RippleGeometry {
    let size = extent.x.max(extent.y);
    RippleGeometry {
        size,
        left: click.x - origin.x - size / 2.0,
        top: click.y - origin.y - size / 2.0,
    }
}

/// Percentage of the page scrolled, 0 when the page cannot scroll.
pub fn scroll_progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Speed from a `data-parallax` attribute value.
pub fn parallax_speed(attr: Option<&str>) -> f32 {
    attr.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_offset(scroll_y: f64, speed: f32) -> f32 {
    (scroll_y * speed as f64) as f32
}

pub fn translate_y(px: f32) -> String {
    format!("translateY({}px)", px)
}

/// Cursor ring that eases toward the mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorGlow {
    pub target: Vec2,
    pub position: Vec2,
    pub visible: bool,
    revealed: bool,
}

impl CursorGlow {
    pub fn point_at(&mut self, target: Vec2) {
        self.target = target;
        self.revealed |= !self.visible;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Move a `1 - 0.7^dt` fraction of the way to the target.
    ///
    /// Returns the new position only while the ring is shown and still moving,
    /// or on the first step after it reappears.
    pub fn step(&mut self, dt: f32) -> Option<Vec2> {
        let before = self.position;
        let t = 1.0 - (1.0 - CURSOR_EASE_PER_TICK).powf(dt.max(0.0));
        self.position += (self.target - self.position) * t;
        let moved = self.position.distance_squared(before) > CURSOR_SETTLE_PX * CURSOR_SETTLE_PX;
        let revealed = std::mem::take(&mut self.revealed);
        (self.visible && (moved || revealed)).then_some(self.position)
    }
}
