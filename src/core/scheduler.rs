use super::constants::{MAX_FRAME_MS, TARGET_FRAME_MS};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    /// Terminal; a stopped loop is never restarted.
    Stopped,
}

/// Frame loop state plus elapsed-time normalization.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    state: LoopState,
}

/// Clamp `elapsed` to `MAX_FRAME_MS` and express it in 60fps ticks.
#[inline]
pub fn normalize_elapsed(elapsed: Duration) -> f32 {
    let ms = (elapsed.as_secs_f64() * 1000.0) as f32;
    ms.min(MAX_FRAME_MS) / TARGET_FRAME_MS
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Returns true only on the Idle -> Running transition.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn frame_dt(&self, elapsed: Duration) -> Option<f32> {
        self.is_running().then(|| normalize_elapsed(elapsed))
    }
}

/// Cleanups owned by a loop, run exactly once when it is torn down.
#[derive(Default)]
pub struct Teardown {
    done: bool,
    tasks: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`; after teardown it runs immediately instead.
    pub fn defer(&mut self, task: impl FnOnce() + 'static) {
        if self.done {
            task();
        } else {
            self.tasks.push(Box::new(task));
        }
    }

    /// Run queued tasks newest first. Returns how many ran; 0 on repeat calls.
    pub fn run(&mut self) -> usize {
        self.done = true;
        let tasks = std::mem::take(&mut self.tasks);
        let count = tasks.len();
        for task in tasks.into_iter().rev() {
            task();
        }
        count
    }
}
