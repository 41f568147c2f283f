//! Level 2: skip counting by 2s, 5s or 10s.

use rand::RngCore;

use super::random::{random_int, random_item, shuffled};
use crate::question::Question;

const STEPS: [i64; 3] = [2, 5, 10];

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let step = *random_item(rng, &STEPS);
    // Start on a multiple of the step so the sequence reads naturally
    let start = random_int(rng, 1, 5) * step;
    let correct = start + step * 3;

    // Near-miss distractors; distinct because step >= 2
    let options = shuffled(
        rng,
        &[
            correct.to_string(),
            (correct + step).to_string(),
            (correct - step).to_string(),
            (correct + 1).to_string(),
        ],
    );

    Question::new(
        level_id,
        format!(
            "Skip count by {}s: {}, {}, {}, __",
            step,
            start,
            start + step,
            start + step * 2
        ),
        correct.to_string(),
        options,
        Some("coins"),
    )
}
