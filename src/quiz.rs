use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_STARS_PER_LEVEL, STAR_ONE_THRESHOLD_PERCENT, STAR_TWO_THRESHOLD_PERCENT,
};
use crate::question::Question;

/// One playthrough of a level: walks the question batch in order, counts
/// correct answers, and scores stars at the end.
///
/// An empty batch is a valid degenerate session; it is finished from the
/// start and scores zero stars. The presentation layer is expected to offer
/// only a return-to-map action in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    level_id: u8,
    questions: Vec<Question>,
    current: usize,
    correct_count: usize,
}

impl QuizSession {
    pub fn new(level_id: u8, questions: Vec<Question>) -> Self {
        Self {
            level_id,
            questions,
            current: 0,
            correct_count: 0,
        }
    }

    pub fn level_id(&self) -> u8 {
        self.level_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn answered_count(&self) -> usize {
        self.current
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Submits an answer for the current question and advances. Returns
    /// whether the answer was correct, or `None` when the session is
    /// already finished.
    pub fn answer(&mut self, answer: &str) -> Option<bool> {
        let question = self.questions.get(self.current)?;
        let correct = question.correct_answer == answer;
        if correct {
            self.correct_count += 1;
        }
        self.current += 1;
        Some(correct)
    }

    /// Star rating for the answers so far: 3 for a perfect run, 2 at 66%,
    /// 1 at 33%, otherwise 0.
    pub fn stars(&self) -> u8 {
        let total = self.questions.len();
        if total == 0 {
            return 0;
        }
        if self.correct_count == total {
            MAX_STARS_PER_LEVEL
        } else if self.correct_count * 100 >= total * STAR_TWO_THRESHOLD_PERCENT {
            2
        } else if self.correct_count * 100 >= total * STAR_ONE_THRESHOLD_PERCENT {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize) -> Question {
        Question::new(
            3,
            format!("{} + 0 = ?", n),
            n.to_string(),
            vec![n.to_string(), (n + 1).to_string()],
            None,
        )
    }

    fn session(count: usize) -> QuizSession {
        QuizSession::new(3, (0..count).map(question).collect())
    }

    fn play(session: &mut QuizSession, correct: usize) {
        let total = session.questions().len();
        for i in 0..total {
            let answer = if i < correct {
                session.current_question().unwrap().correct_answer.clone()
            } else {
                "wrong".to_string()
            };
            session.answer(&answer).unwrap();
        }
    }

    #[test]
    fn test_star_thresholds() {
        // 15 questions: 15 -> 3, 10 (66.7%) -> 2, 9 (60%) -> 1, 4 (26.7%) -> 0
        for (correct, expected) in [(15, 3), (10, 2), (9, 1), (5, 1), (4, 0), (0, 0)] {
            let mut s = session(15);
            play(&mut s, correct);
            assert!(s.is_finished());
            assert_eq!(s.stars(), expected, "{} correct of 15", correct);
        }
    }

    #[test]
    fn test_empty_batch_is_finished_and_scores_zero() {
        let s = session(0);
        assert!(s.is_finished());
        assert_eq!(s.stars(), 0);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn test_answer_after_finish_returns_none() {
        let mut s = session(1);
        assert!(s.answer("0").is_some());
        assert!(s.answer("0").is_none());
    }

    #[test]
    fn test_counts_track_answers() {
        let mut s = session(3);
        s.answer("0");
        s.answer("wrong");
        assert_eq!(s.answered_count(), 2);
        assert_eq!(s.correct_count(), 1);
        assert!(!s.is_finished());
    }
}
