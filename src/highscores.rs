//! High score leaderboard
//!
//! In memory only, seeded with the house scores and capped at the top 10.

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u64,
}

impl HighScoreEntry {
    pub fn new(player_name: impl Into<String>, score: u64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
        }
    }
}

/// High score leaderboard, sorted best first
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Leaderboard every new session starts with
    pub fn seeded() -> Self {
        Self {
            entries: vec![
                HighScoreEntry::new("Loek", 40000),
                HighScoreEntry::new("Daan", 34000),
                HighScoreEntry::new("Rimmert", 200),
            ],
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, player_name: &str, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry::new(player_name, score);

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("{} entered the high scores at #{} with {}", player_name, rank, score);
        Some(rank)
    }
}
