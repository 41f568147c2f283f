//! Game flow: the two-state view controller that ties generation, quiz
//! sessions and progress together.
//!
//! The game owns its progress store and its collaborators outright; there
//! is no shared global state anywhere in the crate.

use log::debug;
use rand::RngCore;

use crate::feedback::{FeedbackEvent, FeedbackSink, NullFeedback};
use crate::generation::generate_batch;
use crate::progress::Progress;
use crate::quiz::QuizSession;
use crate::save_manager::{
    decode_progress, encode_progress, FileSaveStore, SaveStore, PLAYER_NAME_KEY, PROGRESS_KEY,
};

/// What the player is currently looking at. Transient, never persisted.
#[derive(Debug, Clone)]
pub enum GameView {
    /// Browsing the level map.
    Map,
    /// Actively answering questions for one level.
    Quiz(QuizSession),
}

/// Result of submitting an answer through [`Game::answer_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// True when this answer was the last one in the batch.
    pub finished: bool,
    /// Star rating for the answers given so far.
    pub stars: u8,
}

pub struct Game {
    view: GameView,
    progress: Progress,
    player_name: String,
    store: Box<dyn SaveStore>,
    feedback: Box<dyn FeedbackSink>,
}

impl Game {
    /// Builds a game from explicit collaborators, loading persisted progress
    /// and player name. Absent or malformed saved state silently falls back
    /// to the defaults.
    pub fn new(store: Box<dyn SaveStore>, feedback: Box<dyn FeedbackSink>) -> Self {
        let progress = match store.load(PROGRESS_KEY) {
            Some(blob) => decode_progress(&blob).unwrap_or_else(|| {
                debug!("malformed progress blob, starting fresh");
                Progress::new()
            }),
            None => Progress::new(),
        };
        let player_name = store
            .load(PLAYER_NAME_KEY)
            .and_then(|blob| String::from_utf8(blob).ok())
            .unwrap_or_default();

        Self {
            view: GameView::Map,
            progress,
            player_name,
            store,
            feedback,
        }
    }

    /// Convenience constructor: file-backed saves, no feedback.
    pub fn with_file_store() -> std::io::Result<Self> {
        let store = FileSaveStore::new()?;
        Ok(Self::new(Box::new(store), Box::new(NullFeedback)))
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn total_stars(&self) -> u32 {
        self.progress.total_stars()
    }

    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    /// Remembers (and persists) the player's display name. An empty or
    /// whitespace name clears the stored one.
    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.trim().to_string();
        if self.player_name.is_empty() {
            self.store.remove(PLAYER_NAME_KEY);
        } else {
            self.store.save(PLAYER_NAME_KEY, self.player_name.as_bytes());
        }
    }

    /// Map -> Quiz: generates a fresh batch for the level and enters it.
    ///
    /// Trusts the caller to only offer unlocked levels; an empty batch is a
    /// valid degenerate quiz the presentation handles with a back action.
    pub fn start_level(&mut self, level_id: u8) {
        let mut rng = rand::thread_rng();
        self.start_level_with_rng(level_id, &mut rng);
    }

    /// [`Game::start_level`] with an explicit RNG, for deterministic tests.
    pub fn start_level_with_rng(&mut self, level_id: u8, rng: &mut dyn RngCore) {
        let questions = generate_batch(level_id, rng);
        self.view = GameView::Quiz(QuizSession::new(level_id, questions));
        self.feedback.notify(FeedbackEvent::UiAction);
    }

    /// Feeds an answer to the active quiz session. Returns `None` outside a
    /// quiz or once the session is finished.
    pub fn answer_current(&mut self, answer: &str) -> Option<AnswerOutcome> {
        let session = match &mut self.view {
            GameView::Quiz(session) => session,
            GameView::Map => return None,
        };
        let correct = session.answer(answer)?;
        let outcome = AnswerOutcome {
            correct,
            finished: session.is_finished(),
            stars: session.stars(),
        };
        self.feedback.notify(if correct {
            FeedbackEvent::Correct
        } else {
            FeedbackEvent::Incorrect
        });
        Some(outcome)
    }

    /// Quiz -> Map: records the result for the active level, persists
    /// progress, and celebrates any starred finish. A no-op on the map.
    pub fn complete_quiz(&mut self, stars: u8) {
        let level_id = match &self.view {
            GameView::Quiz(session) => session.level_id(),
            GameView::Map => return,
        };
        self.progress.record_result(level_id, stars);
        self.persist_progress();
        if stars > 0 {
            self.feedback.notify(FeedbackEvent::LevelWin);
        }
        self.view = GameView::Map;
    }

    /// Quiz -> Map without recording anything. Quitting mid-quiz leaves
    /// progress exactly as it was.
    pub fn quit_quiz(&mut self) {
        if let GameView::Quiz(_) = self.view {
            self.view = GameView::Map;
            self.feedback.notify(FeedbackEvent::UiAction);
        }
    }

    /// Full reset: default progress, forgotten player name, cleared saves.
    pub fn reset_game(&mut self) {
        self.progress.reset();
        self.player_name.clear();
        self.store.remove(PROGRESS_KEY);
        self.store.remove(PLAYER_NAME_KEY);
        self.view = GameView::Map;
        self.feedback.notify(FeedbackEvent::UiAction);
    }

    fn persist_progress(&mut self) {
        if let Some(blob) = encode_progress(&self.progress) {
            // A failed write is tolerated; the store already logged it
            self.store.save(PROGRESS_KEY, &blob);
        }
    }
}
