use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated quiz question.
///
/// Invariant: `options` contains `correct_answer` exactly once and has no
/// duplicate entries. The generators in [`crate::generation`] are responsible
/// for upholding this before the option list is shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque unique token, minted at generation time.
    pub id: String,
    /// The level this question was generated for (1-10).
    pub level_id: u8,
    /// Prompt shown to the player.
    pub text: String,
    pub correct_answer: String,
    /// Ordered answer choices, at least two.
    pub options: Vec<String>,
    /// Optional hint for illustrative media. A keyword the presentation
    /// cannot resolve simply means no illustration is shown.
    pub visual_keyword: Option<String>,
}

impl Question {
    pub fn new(
        level_id: u8,
        text: String,
        correct_answer: String,
        options: Vec<String>,
        visual_keyword: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            level_id,
            text,
            correct_answer,
            options,
            visual_keyword: visual_keyword.map(str::to_string),
        }
    }

    /// Key used to detect duplicate questions within a batch. Intentionally
    /// coarse: two questions with the same prompt and answer collide even if
    /// their option ordering differs.
    pub fn signature(&self) -> String {
        format!("{}{}", self.text, self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            3,
            "2 + 2 = ?".to_string(),
            "4".to_string(),
            vec!["4".to_string(), "5".to_string(), "3".to_string()],
            Some("apple"),
        )
    }

    #[test]
    fn test_signature_concatenates_text_and_answer() {
        let q = sample();
        assert_eq!(q.signature(), "2 + 2 = ?4");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_visual_keyword_is_optional() {
        let q = Question::new(
            1,
            "What number comes after 4?".to_string(),
            "5".to_string(),
            vec!["5".to_string(), "6".to_string()],
            None,
        );
        assert!(q.visual_keyword.is_none());
    }
}
