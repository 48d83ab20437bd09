//! Frame and view clocks
//!
//! All times are milliseconds as reported by a [`Clock`] (`performance.now()`
//! in the browser).

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic millisecond time source supplied by the host
pub trait Clock {
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Hand-driven clock for native runs and tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Frame statistics, updated at the start and end of every frame
#[derive(Debug, Clone)]
pub struct Timing {
    /// Frames since the game started
    pub game_frames: u64,
    /// Frames since the current view became active
    pub view_frames: u64,
    pub game_start: f64,
    /// Elapsed since game start, as of the current frame
    pub game_time: f64,
    /// Elapsed since the current view became active
    pub view_time: f64,
    /// Duration between the starts of the last two frames
    pub frame_time: f64,
    /// Time between the end of the previous frame and the start of this one
    pub frame_idle_time: f64,
    pub fps: f64,
    /// Fraction of the frame spent computing (0.0 - 1.0)
    pub load: f64,
    view_start: f64,
    frame_start: f64,
    frame_end: f64,
}

impl Timing {
    pub fn new(now: f64) -> Self {
        Self {
            game_frames: 0,
            view_frames: 0,
            game_start: now,
            game_time: 0.0,
            view_time: 0.0,
            frame_time: 0.0,
            frame_idle_time: 0.0,
            fps: 60.0,
            load: 0.0,
            view_start: now,
            frame_start: now,
            frame_end: now,
        }
    }

    /// Time spent computing the previous frame
    pub fn frame_compute_time(&self) -> f64 {
        self.frame_time - self.frame_idle_time
    }

    pub fn on_view_switched(&mut self, now: f64) {
        self.view_frames = 0;
        self.view_start = now;
    }

    pub fn on_frame_start(&mut self, now: f64) {
        self.game_frames += 1;
        self.view_frames += 1;
        self.frame_idle_time = now - self.frame_end;
        self.game_time = now - self.game_start;
        self.view_time = now - self.view_start;
        self.frame_time = now - self.frame_start;
        self.frame_start = now;

        // Two frames in the same millisecond say nothing about the rate
        if self.frame_time > 0.0 {
            self.fps = (1000.0 / self.frame_time).round();
            self.load = (self.frame_compute_time() / self.frame_time).clamp(0.0, 1.0);
        }
    }

    pub fn on_frame_end(&mut self, now: f64) {
        self.frame_end = now;
    }
}
