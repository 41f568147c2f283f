// Level structure constants
pub const TOTAL_LEVELS: u8 = 10;

// Batch generation constants
pub const QUESTIONS_PER_BATCH: usize = 15;
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;

// Star rating constants
pub const MAX_STARS_PER_LEVEL: u8 = 3;
pub const COMPLETION_STARS: u32 = TOTAL_LEVELS as u32 * MAX_STARS_PER_LEVEL as u32;
pub const STAR_TWO_THRESHOLD_PERCENT: usize = 66;
pub const STAR_ONE_THRESHOLD_PERCENT: usize = 33;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x4D41544854524B00; // "MATHTRK\0" in hex
