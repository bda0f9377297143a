use crate::canvas::Canvas2d;
use crate::core::{Scene, Viewport};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Current window size in logical pixels and its device pixel ratio.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(
        width as f32,
        height as f32,
        w.device_pixel_ratio() as f32,
    ))
}

/// Resize the canvas backing store and rebuild the scene for the new viewport.
pub fn apply_viewport(surface: &Canvas2d, scene: &mut dyn Scene, viewport: Viewport) {
    surface.resize_to(&viewport);
    scene.resize(viewport);
}

/// Rebuild on every window resize until the returned listener is detached.
pub fn wire_resize(
    surface: Rc<RefCell<Canvas2d>>,
    scene: Rc<RefCell<Box<dyn Scene>>>,
) -> Option<Listener> {
    let window = web::window()?;
    let listener = dom::attach(window.as_ref(), "resize", move |_| {
        let Some(viewport) = window_viewport() else { return };
        let mut scene = scene.borrow_mut();
        apply_viewport(&surface.borrow(), &mut **scene, viewport);
        log::debug!(
            "[resize] {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.dpr
        );
    });
    Some(listener)
}
