//! MathTrek - Procedural Math Quiz Engine
//!
//! Ten levels of generated questions, star-based mastery tracking, and the
//! map/quiz game flow. Rendering, audio and storage sit behind the
//! collaborator interfaces in [`feedback`] and [`save_manager`].

pub mod constants;
pub mod feedback;
pub mod game;
pub mod generation;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod save_manager;

pub use constants::{MAX_STARS_PER_LEVEL, QUESTIONS_PER_BATCH, TOTAL_LEVELS};
pub use game::{AnswerOutcome, Game, GameView};
pub use generation::{generate_batch, generate_question};
pub use progress::{LevelProgress, Progress};
pub use question::Question;
pub use quiz::QuizSession;
