use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Client coordinates to canvas logical (CSS) pixels.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas(ev.client_x() as f64, ev.client_y() as f64, canvas)
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(client_to_canvas(
        touch.client_x() as f64,
        touch.client_y() as f64,
        canvas,
    ))
}
