use crate::canvas::Canvas2d;
use crate::core::scheduler::Teardown;
use crate::core::{FrameClock, PointerState, Scene};
use crate::dom::Listener;
use crate::theme;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellation token for a running animation-frame loop.
pub struct LoopHandle {
    clock: Rc<RefCell<FrameClock>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
    teardown: RefCell<Teardown>,
}

impl LoopHandle {
    /// Tie `listeners` to this loop; they are removed when it stops.
    pub fn own_listeners(&self, listeners: Vec<Listener>) {
        self.teardown.borrow_mut().defer(move || {
            for listener in listeners {
                listener.detach();
            }
        });
    }

    /// Stop rescheduling, release the frame callback and detach owned listeners.
    ///
    /// Must not be called from inside the loop's own tick or listeners.
    pub fn stop(&self) {
        self.clock.borrow_mut().stop();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        let detached = self.teardown.borrow_mut().run();
        if detached > 0 {
            log::debug!("[frame] loop stopped, released {} listener groups", detached);
        }
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

/// Drive `on_frame(dt)` from requestAnimationFrame until the handle is stopped.
///
/// `dt` is the clamped elapsed time in 60fps ticks.
pub fn start_loop(mut on_frame: impl FnMut(f32) + 'static) -> LoopHandle {
    let clock = Rc::new(RefCell::new(FrameClock::new()));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let clock_tick = clock.clone();
    let pending_tick = pending.clone();
    let tick_clone = tick.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let now = Instant::now();
        let elapsed = now - last_instant;
        last_instant = now;
        let Some(dt) = clock_tick.borrow().frame_dt(elapsed) else {
            return;
        };
        on_frame(dt);
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));

    clock.borrow_mut().start();
    request_frame(&tick, &pending);
    LoopHandle {
        clock,
        pending,
        tick,
        teardown: RefCell::new(Teardown::new()),
    }
}

/// A scene bound to its canvas and the shared pointer state.
pub struct SceneRunner {
    pub scene: Rc<RefCell<Box<dyn Scene>>>,
    pub surface: Rc<RefCell<Canvas2d>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl SceneRunner {
    /// One update+draw pass; the dark flag is read here and handed to render.
    pub fn frame(&self, dt: f32) {
        let pointer = *self.pointer.borrow();
        let dark = crate::dom::window_document()
            .map(|d| theme::is_dark_active(&d))
            .unwrap_or(false);
        let mut scene = self.scene.borrow_mut();
        scene.update(dt, &pointer);
        scene.render(&mut *self.surface.borrow_mut(), dark);
    }

    pub fn start(self) -> LoopHandle {
        start_loop(move |dt| self.frame(dt))
    }
}
