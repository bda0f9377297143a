#![cfg(target_arch = "wasm32")]
use crate::canvas::Canvas2d;
use crate::core::{BubbleField, NodeNetwork, PointerState, Scene, Viewport};
use crate::frame::{LoopHandle, SceneRunner};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod theme;

thread_local! {
    static RUNNING: RefCell<Vec<LoopHandle>> = const { RefCell::new(Vec::new()) };
}

fn keep(handle: LoopHandle) {
    RUNNING.with(|r| r.borrow_mut().push(handle));
}

/// Bind a scene to the canvas with `id`; silently skipped when the canvas is absent.
fn mount_scene(
    document: &web::Document,
    id: &str,
    build: impl FnOnce(&Canvas2d, Viewport) -> Box<dyn Scene>,
) -> Option<LoopHandle> {
    let Some(surface) = Canvas2d::acquire(document, id) else {
        log::debug!("[mount] no usable canvas #{}, skipping", id);
        return None;
    };
    let viewport = events::resize::window_viewport()?;
    let scene = build(&surface, viewport);
    surface.resize_to(&viewport);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let mut listeners = events::wire_pointer_tracking(surface.element(), pointer.clone());

    let surface = Rc::new(RefCell::new(surface));
    let scene = Rc::new(RefCell::new(scene));
    listeners.extend(events::wire_resize(surface.clone(), scene.clone()));

    let runner = SceneRunner {
        scene,
        surface,
        pointer,
    };
    let handle = runner.start();
    handle.own_listeners(listeners);
    Some(handle)
}

/// Resolves once the document has finished parsing.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-canvas starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    theme::init(&document);
    if let Some(handle) = effects::init(&document) {
        keep(handle);
    }

    let bubbles = mount_scene(&document, constants::BUBBLE_CANVAS_ID, |surface, viewport| {
        let field = BubbleField::new(surface.bubble_config(), viewport, rand::random());
        log::info!("[bubbles] mounted with {} bubbles", field.bubbles().len());
        Box::new(field)
    });
    let network = mount_scene(&document, constants::NETWORK_CANVAS_ID, |surface, viewport| {
        let net = NodeNetwork::new(surface.network_config(), viewport, rand::random());
        log::info!(
            "[network] mounted with {} nodes, {} particles",
            net.nodes().len(),
            net.particles().len()
        );
        Box::new(net)
    });
    bubbles.into_iter().chain(network).for_each(keep);
    Ok(())
}

/// Stop every animation loop started by this module.
#[wasm_bindgen]
pub fn dispose() {
    let handles = RUNNING.with(|r| std::mem::take(&mut *r.borrow_mut()));
    for handle in &handles {
        handle.stop();
    }
    log::info!("disposed {} loops", handles.len());
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    theme::toggle();
}
