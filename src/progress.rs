use serde::{Deserialize, Serialize};

use crate::constants::{COMPLETION_STARS, MAX_STARS_PER_LEVEL, TOTAL_LEVELS};

/// Mastery record for a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level_id: u8,
    /// 0-3, never regresses except on a full reset.
    pub stars: u8,
    pub unlocked: bool,
}

/// Ordered table of one [`LevelProgress`] record per level.
///
/// Invariant: exactly [`TOTAL_LEVELS`] records, level ids 1..=10 in order,
/// no gaps, no duplicates. Construction and loading both enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    levels: Vec<LevelProgress>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Fresh default: level 1 unlocked, everything else locked, all stars 0.
    pub fn new() -> Self {
        let levels = (1..=TOTAL_LEVELS)
            .map(|level_id| LevelProgress {
                level_id,
                stars: 0,
                unlocked: level_id == 1,
            })
            .collect();
        Self { levels }
    }

    /// Validation gate for persisted state. Returns `None` for any sequence
    /// that is not a well-formed level table; callers treat that the same as
    /// an absent save and fall back to [`Progress::new`].
    pub fn from_levels(levels: Vec<LevelProgress>) -> Option<Self> {
        if levels.len() != TOTAL_LEVELS as usize {
            return None;
        }
        for (index, record) in levels.iter().enumerate() {
            if record.level_id != index as u8 + 1 || record.stars > MAX_STARS_PER_LEVEL {
                return None;
            }
        }
        Some(Self { levels })
    }

    pub fn levels(&self) -> &[LevelProgress] {
        &self.levels
    }

    /// Records a quiz result: raises the level's stars to the better of old
    /// and new (never lowers them) and unlocks the next level if there is
    /// one. An unknown `level_id` is a silent no-op.
    pub fn record_result(&mut self, level_id: u8, stars: u8) {
        if !self.levels.iter().any(|record| record.level_id == level_id) {
            return;
        }
        let capped = stars.min(MAX_STARS_PER_LEVEL);
        for record in &mut self.levels {
            if record.level_id == level_id {
                record.stars = record.stars.max(capped);
            } else if level_id.checked_add(1) == Some(record.level_id) {
                record.unlocked = true;
            }
        }
    }

    /// Discards all mastery and returns to the fresh default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn total_stars(&self) -> u32 {
        self.levels.iter().map(|record| record.stars as u32).sum()
    }

    /// Whole-game completion: three stars on every level.
    pub fn is_complete(&self) -> bool {
        self.total_stars() >= COMPLETION_STARS
    }

    pub fn is_unlocked(&self, level_id: u8) -> bool {
        self.levels
            .iter()
            .any(|record| record.level_id == level_id && record.unlocked)
    }

    pub fn stars(&self, level_id: u8) -> u8 {
        self.levels
            .iter()
            .find(|record| record.level_id == level_id)
            .map(|record| record.stars)
            .unwrap_or(0)
    }
}
