use crate::constants::*;
use crate::core::effects::{
    parallax_offset, parallax_speed, ripple_geometry, scroll_progress_percent, translate_y,
    CursorGlow,
};
use crate::dom;
use crate::frame::{self, LoopHandle};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Wire every page effect; returns the cursor-glow loop handle when one started.
pub fn init(document: &web::Document) -> Option<LoopHandle> {
    wire_smooth_scroll(document);
    wire_scroll_reveal(document);
    wire_button_effects(document);
    wire_card_hover(document);
    wire_parallax(document);
    wire_scroll_progress(document);
    wire_body_fade_in(document);
    wire_cursor_glow(document)
}

fn scroll_to_selector(document: &web::Document, selector: &str) {
    let Ok(Some(target)) = document.query_selector(selector) else { return };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href_el = anchor.clone();
        dom::listen(anchor.as_ref(), "click", move |ev| {
            ev.prevent_default();
            if let Some(href) = href_el.get_attribute("href") {
                scroll_to_selector(&doc, &href);
            }
        });
    }

    let hash = web::window()
        .and_then(|w| w.location().hash().ok())
        .filter(|h| h.len() > 1);
    if let Some(hash) = hash {
        let doc = document.clone();
        dom::set_timeout(HASH_SCROLL_DELAY_MS, move || scroll_to_selector(&doc, &hash));
    }
}

fn wire_scroll_reveal(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[effects] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    let mut observed = 0usize;
    for (i, selector) in REVEAL_SELECTORS.iter().enumerate() {
        for el in dom::query_all(document, selector) {
            // explicitly tagged elements are observed even inside opt-out regions
            let opted_out = i > 0 && matches!(el.closest(NO_ANIMATE_SELECTOR), Ok(Some(_)));
            if !opted_out {
                observer.observe(&el);
                observed += 1;
            }
        }
    }
    log::debug!("[effects] reveal observing {} elements", observed);
}

fn wire_button_effects(document: &web::Document) {
    for button in dom::query_all(document, BUTTON_SELECTOR) {
        let doc = document.clone();
        let host = button.clone();
        dom::listen(button.as_ref(), "click", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else { return };
            spawn_ripple(&doc, &host, ev);
        });

        if !button.class_list().contains(NO_LIFT_CLASS) {
            let lifted = button.clone();
            dom::listen(button.as_ref(), "mouseenter", move |_| {
                dom::set_style(&lifted, "transform", &translate_y(BUTTON_LIFT_PX));
            });
            let rested = button.clone();
            dom::listen(button.as_ref(), "mouseleave", move |_| {
                dom::set_style(&rested, "transform", &translate_y(0.0));
            });
        }
    }
}

fn spawn_ripple(document: &web::Document, host: &web::HtmlElement, ev: &web::MouseEvent) {
    let rect = host.get_bounding_client_rect();
    let geometry = ripple_geometry(
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
    );

    if let Ok(old) = host.query_selector_all(&format!(".{}", RIPPLE_CLASS)) {
        for i in 0..old.length() {
            if let Some(el) = old.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                el.remove();
            }
        }
    }

    let Ok(ripple) = document.create_element("span") else { return };
    let Ok(ripple) = ripple.dyn_into::<web::HtmlElement>() else { return };
    let size = format!("{}px", geometry.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &format!("{}px", geometry.left));
    dom::set_style(&ripple, "top", &format!("{}px", geometry.top));
    _ = ripple.class_list().add_1(RIPPLE_CLASS);
    _ = host.append_child(&ripple);
    dom::set_timeout(RIPPLE_LIFETIME_MS, move || ripple.remove());
}

fn wire_card_hover(document: &web::Document) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let hovered = card.clone();
        dom::listen(card.as_ref(), "mouseenter", move |_| {
            dom::set_style(&hovered, "transform", CARD_HOVER_TRANSFORM);
            dom::set_style(&hovered, "box-shadow", CARD_HOVER_SHADOW);
        });
        let rested = card.clone();
        dom::listen(card.as_ref(), "mouseleave", move |_| {
            dom::set_style(&rested, "transform", CARD_REST_TRANSFORM);
            dom::set_style(&rested, "box-shadow", CARD_REST_SHADOW);
        });
        dom::set_style(&card, "transition", CARD_TRANSITION);
    }
}

fn wire_parallax(document: &web::Document) {
    let elements: Vec<(web::HtmlElement, f32)> = dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute(PARALLAX_ATTR).as_deref());
            (el, speed)
        })
        .collect();
    if elements.is_empty() {
        return;
    }
    let Some(window) = web::window() else { return };
    dom::listen_passive(window.as_ref(), "scroll", move || {
        let y = dom::scroll_y();
        for (el, speed) in &elements {
            dom::set_style(el, "transform", &translate_y(parallax_offset(y, *speed)));
        }
    });
}

fn wire_scroll_progress(document: &web::Document) {
    let bar = match document.get_element_by_id(SCROLL_PROGRESS_ID) {
        Some(el) => el.dyn_into::<web::HtmlElement>().ok(),
        None => create_fixed_element(document, SCROLL_PROGRESS_ID, SCROLL_PROGRESS_STYLE),
    };
    let Some(bar) = bar else { return };
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    dom::listen_passive(window.as_ref(), "scroll", move || {
        let Some(root) = doc.document_element() else { return };
        let viewport_h = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let pct = scroll_progress_percent(dom::scroll_y(), root.scroll_height() as f64, viewport_h);
        dom::set_style(&bar, "width", &format!("{}%", pct));
    });
}

fn create_fixed_element(
    document: &web::Document,
    id: &str,
    style: &str,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_id(id);
    _ = el.set_attribute("style", style);
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

fn wire_body_fade_in(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    dom::listen(window.as_ref(), "load", move |_| {
        if let Some(body) = doc.body() {
            dom::set_style(&body, "opacity", "1");
        }
    });
}

fn wire_cursor_glow(document: &web::Document) -> Option<LoopHandle> {
    let ring = create_fixed_element(document, CURSOR_GLOW_ID, CURSOR_GLOW_STYLE)?;
    let glow = Rc::new(RefCell::new(CursorGlow::default()));
    let mut listeners = Vec::with_capacity(2);

    {
        let glow = glow.clone();
        let ring = ring.clone();
        listeners.push(dom::attach(document.as_ref(), "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else { return };
            glow.borrow_mut()
                .point_at(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            dom::set_style(&ring, "opacity", "1");
        }));
    }
    {
        let glow = glow.clone();
        let ring = ring.clone();
        listeners.push(dom::attach(document.as_ref(), "mouseleave", move |_| {
            glow.borrow_mut().hide();
            dom::set_style(&ring, "opacity", "0");
        }));
    }

    let half = CURSOR_GLOW_SIZE / 2.0;
    let handle = frame::start_loop(move |dt| {
        let Some(pos) = glow.borrow_mut().step(dt) else { return };
        dom::set_style(&ring, "left", &format!("{}px", pos.x - half));
        dom::set_style(&ring, "top", &format!("{}px", pos.y - half));
    });
    handle.own_listeners(listeners);
    Some(handle)
}
