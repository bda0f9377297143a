use super::input::{PointerState, Viewport};
use super::paint::Surface;

/// A canvas background driven by the frame loop.
pub trait Scene {
    fn resize(&mut self, viewport: Viewport);
    /// Advance by `dt` normalized ticks (1.0 == one 60fps frame).
    fn update(&mut self, dt: f32, pointer: &PointerState);
    fn render(&self, surface: &mut dyn Surface, dark: bool);
}
