//! Loading screen shown while images are in flight

use crate::consts::LOAD_MIN_VIEW_TIME_MS;
use crate::renderer::{Surface, TextAlign, colors, write_text};
use crate::resources::ResourceRepository;
use crate::timing::Timing;

use super::ViewBase;

#[derive(Debug, Clone)]
pub struct LoadScreen {
    /// View to hand over to
    target: String,
    /// The handover was asked for; a failed switch is not retried
    handed_over: bool,
}

impl LoadScreen {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            handed_over: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn has_handed_over(&self) -> bool {
        self.handed_over
    }

    pub fn draw(&self, base: &ViewBase, surface: &mut dyn Surface) {
        write_text(surface, "Loading...", 80.0, base.center, TextAlign::Center, colors::TEXT);
    }

    /// Leave once nothing is loading and the screen has been up long enough.
    /// The target is asked for at most once.
    pub fn adjust(&mut self, timing: &Timing, repo: &dyn ResourceRepository) -> Option<String> {
        if !self.handed_over && !repo.is_loading() && timing.view_time > LOAD_MIN_VIEW_TIME_MS {
            self.handed_over = true;
            Some(self.target.clone())
        } else {
            None
        }
    }
}
