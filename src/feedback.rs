//! Feedback collaborator interface.
//!
//! The core emits discrete events; the presentation side maps them to
//! sounds or visual flourishes. Fire-and-forget: nothing flows back.

/// Events the presentation layer may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    Correct,
    Incorrect,
    LevelWin,
    UiAction,
}

pub trait FeedbackSink {
    fn notify(&mut self, event: FeedbackEvent);
}

/// Sink that swallows every event, for headless use and tests.
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn notify(&mut self, _event: FeedbackEvent) {}
}
