//! Level 1: number sense in the 1-50 range.
//!
//! Three framings chosen at random: "what comes after N", "what comes
//! before N", and "find the biggest/smallest of four distinct numbers".

use rand::{Rng, RngCore};

use super::random::{random_int, shuffled};
use crate::question::Question;

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    match random_int(rng, 1, 3) {
        1 => after_question(rng, level_id),
        2 => before_question(rng, level_id),
        _ => compare_question(rng, level_id),
    }
}

fn after_question(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let num = random_int(rng, 1, 49);
    let correct = num + 1;
    let options = shuffled(
        rng,
        &[
            correct.to_string(),
            (correct + 1).to_string(),
            (correct - 2).to_string(),
            (correct + 5).to_string(),
        ],
    );
    Question::new(
        level_id,
        format!("What number comes after {}?", num),
        correct.to_string(),
        options,
        Some("coins"),
    )
}

fn before_question(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let num = random_int(rng, 2, 50);
    let correct = num - 1;
    let options = shuffled(
        rng,
        &[
            correct.to_string(),
            (correct - 1).to_string(),
            (correct + 2).to_string(),
            (correct + 10).to_string(),
        ],
    );
    Question::new(
        level_id,
        format!("What number comes before {}?", num),
        correct.to_string(),
        options,
        Some("coins"),
    )
}

fn compare_question(rng: &mut dyn RngCore, level_id: u8) -> Question {
    // Four distinct values so the extremum is unambiguous
    let mut nums: Vec<i64> = Vec::with_capacity(4);
    while nums.len() < 4 {
        let n = random_int(rng, 1, 50);
        if !nums.contains(&n) {
            nums.push(n);
        }
    }

    let biggest = rng.gen_bool(0.5);
    let correct = if biggest {
        nums.iter().copied().max().unwrap_or(0)
    } else {
        nums.iter().copied().min().unwrap_or(0)
    };

    let labels: Vec<String> = nums.iter().map(|n| n.to_string()).collect();
    Question::new(
        level_id,
        format!(
            "Find the {} number.",
            if biggest { "biggest" } else { "smallest" }
        ),
        correct.to_string(),
        shuffled(rng, &labels),
        Some("scale"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_options_contain_answer_exactly_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..300 {
            let q = generate(&mut rng, 1);
            let hits = q.options.iter().filter(|o| **o == q.correct_answer).count();
            assert_eq!(hits, 1, "prompt: {}", q.text);
        }
    }

    #[test]
    fn test_compare_answer_is_one_of_the_options_as_number() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            let q = generate(&mut rng, 1);
            if !q.text.starts_with("Find the") {
                continue;
            }
            let values: Vec<i64> = q.options.iter().map(|o| o.parse().unwrap()).collect();
            let answer: i64 = q.correct_answer.parse().unwrap();
            let expected = if q.text.contains("biggest") {
                *values.iter().max().unwrap()
            } else {
                *values.iter().min().unwrap()
            };
            assert_eq!(answer, expected);
        }
    }
}
