use crate::core::PointerState;
use crate::dom::{self, Listener};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer/touch events into `pointer`, in the canvas's logical pixels.
///
/// Handlers only write the shared state; scenes read a copy each frame. The
/// returned listeners belong to the scene's loop and are detached with it.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) -> Vec<Listener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let target: &web::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(6);

    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        listeners.push(dom::attach(target, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                pointer
                    .borrow_mut()
                    .move_to(input::mouse_canvas_px(ev, &canvas));
            }
        }));
    }
    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        listeners.push(dom::attach(target, "pointerdown", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                pointer
                    .borrow_mut()
                    .press_at(input::mouse_canvas_px(ev, &canvas));
            }
        }));
    }
    {
        let pointer = pointer.clone();
        listeners.push(dom::attach(target, "pointerup", move |_| {
            pointer.borrow_mut().release()
        }));
    }
    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        listeners.push(dom::attach(target, "touchmove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
                if let Some(pos) = input::touch_canvas_px(ev, &canvas) {
                    pointer.borrow_mut().move_to(pos);
                }
            }
        }));
    }
    {
        let pointer = pointer.clone();
        listeners.push(dom::attach(target, "touchend", move |_| {
            pointer.borrow_mut().leave()
        }));
    }
    if let Some(document) = window.document() {
        listeners.push(dom::attach(document.as_ref(), "mouseleave", move |_| {
            pointer.borrow_mut().leave()
        }));
    }
    listeners
}
