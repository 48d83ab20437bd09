//! State that outlives a single view

use crate::highscores::HighScores;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Session {
    pub player: String,
    pub score: u64,
    /// Number of big asteroids a level starts with
    pub level: u32,
    pub lives: u32,
    pub debug: bool,
    pub highscores: HighScores,
}

impl Session {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            player: settings.player_name.clone(),
            score: 0,
            level: settings.starting_level,
            lives: settings.starting_lives,
            debug: settings.debug,
            highscores: HighScores::seeded(),
        }
    }

    /// Put the current score on the leaderboard; returns the rank it reached
    pub fn record_score(&mut self) -> Option<usize> {
        self.highscores.add_score(&self.player, self.score)
    }
}
