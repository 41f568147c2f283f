//! Levels 3, 4 and 6: addition and subtraction facts.
//!
//! Operands are bounded so results never leave the level's range, and
//! distractors are off-by-small values clamped to stay non-negative.

use rand::{Rng, RngCore};

use super::random::{random_int, shuffled};
use crate::question::Question;

/// Level 3: sums up to 10.
pub fn addition_to_ten(rng: &mut dyn RngCore, level_id: u8) -> Question {
    addition(rng, level_id, 10)
}

/// Level 4: subtraction within 10.
pub fn subtraction_within_ten(rng: &mut dyn RngCore, level_id: u8) -> Question {
    subtraction(rng, level_id, 10)
}

/// Level 6: mixed addition and subtraction up to 20.
pub fn mixed_to_twenty(rng: &mut dyn RngCore, level_id: u8) -> Question {
    if rng.gen_bool(0.5) {
        addition(rng, level_id, 20)
    } else {
        subtraction(rng, level_id, 20)
    }
}

fn addition(rng: &mut dyn RngCore, level_id: u8, max_result: i64) -> Question {
    let a = random_int(rng, 0, max_result);
    let b = random_int(rng, 0, max_result - a);
    let correct = a + b;
    let options = result_options(rng, correct);
    Question::new(
        level_id,
        format!("{} + {} = ?", a, b),
        correct.to_string(),
        options,
        Some("apple"),
    )
}

fn subtraction(rng: &mut dyn RngCore, level_id: u8, max_result: i64) -> Question {
    let a = random_int(rng, 1, max_result);
    let b = random_int(rng, 0, a);
    let correct = a - b;
    let options = result_options(rng, correct);
    Question::new(
        level_id,
        format!("{} - {} = ?", a, b),
        correct.to_string(),
        options,
        Some("banana"),
    )
}

/// Near-miss distractors around the result. When the result is 0 the
/// clamped "one less" distractor becomes `correct + 2`, which can collide
/// with the random wide distractor, so the wide delta is re-rolled until
/// all four options are distinct.
fn result_options(rng: &mut dyn RngCore, correct: i64) -> Vec<String> {
    let low = if correct >= 1 { correct - 1 } else { correct + 2 };
    let mut wide = correct + random_int(rng, 2, 5);
    while wide == low {
        wide = correct + random_int(rng, 2, 5);
    }
    shuffled(
        rng,
        &[
            correct.to_string(),
            (correct + 1).to_string(),
            low.to_string(),
            wide.to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn operands(text: &str) -> (i64, i64) {
        let parts: Vec<i64> = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        (parts[0], parts[1])
    }

    #[test]
    fn test_addition_results_stay_within_ten() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..300 {
            let q = addition_to_ten(&mut rng, 3);
            let (a, b) = operands(&q.text);
            let answer: i64 = q.correct_answer.parse().unwrap();
            assert_eq!(answer, a + b);
            assert!(answer <= 10);
        }
    }

    #[test]
    fn test_subtraction_never_goes_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..300 {
            let q = subtraction_within_ten(&mut rng, 4);
            let (a, b) = operands(&q.text);
            let answer: i64 = q.correct_answer.parse().unwrap();
            assert_eq!(answer, a - b);
            assert!(answer >= 0);
        }
    }

    #[test]
    fn test_mixed_results_stay_within_twenty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..300 {
            let q = mixed_to_twenty(&mut rng, 6);
            let answer: i64 = q.correct_answer.parse().unwrap();
            assert!((0..=20).contains(&answer), "prompt: {}", q.text);
        }
    }

    #[test]
    fn test_zero_result_still_yields_distinct_options() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        // 0 - 0 and 0 + 0 exercise the clamped distractor path
        for _ in 0..500 {
            let q = mixed_to_twenty(&mut rng, 6);
            let mut options = q.options.clone();
            options.sort();
            options.dedup();
            assert_eq!(options.len(), 4, "prompt: {}", q.text);
            assert!(options.iter().all(|o| o.parse::<i64>().unwrap() >= 0));
        }
    }
}
