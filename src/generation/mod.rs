//! Procedural question generation.
//!
//! Ten per-level strategies sit behind a lookup table; the batch generator
//! repeatedly invokes the selected strategy and keeps only questions whose
//! prompt/answer signature has not been seen yet in the batch.

pub mod arithmetic;
pub mod measurement;
pub mod money;
pub mod number_sense;
pub mod patterns;
pub mod random;
pub mod shapes;
pub mod skip_counting;
pub mod sorting;

use std::collections::HashSet;

use rand::RngCore;

use crate::constants::{MAX_GENERATION_ATTEMPTS, QUESTIONS_PER_BATCH, TOTAL_LEVELS};
use crate::question::Question;

/// A per-level question strategy.
pub type QuestionGenerator = fn(&mut dyn RngCore, u8) -> Question;

/// Strategy table, indexed by `level_id - 1`.
const GENERATORS: [QuestionGenerator; TOTAL_LEVELS as usize] = [
    number_sense::generate,
    skip_counting::generate,
    arithmetic::addition_to_ten,
    arithmetic::subtraction_within_ten,
    shapes::generate,
    arithmetic::mixed_to_twenty,
    patterns::generate,
    measurement::generate,
    money::generate,
    sorting::generate,
];

/// Looks up the strategy for a level. Unrecognized ids fall back to the
/// level 1 strategy instead of failing.
pub fn generator_for(level_id: u8) -> QuestionGenerator {
    let index = level_id.checked_sub(1).map(usize::from);
    match index.and_then(|i| GENERATORS.get(i)) {
        Some(generator) => *generator,
        None => GENERATORS[0],
    }
}

/// Generates a single candidate question for a level.
pub fn generate_question(rng: &mut dyn RngCore, level_id: u8) -> Question {
    generator_for(level_id)(rng, level_id)
}

/// Generates a batch of up to [`QUESTIONS_PER_BATCH`] signature-unique
/// questions for a level.
///
/// The attempt counter is global across the batch: it resets on every
/// accepted question and increments on every duplicate, so a level whose
/// content pool runs dry returns a short batch after
/// [`MAX_GENERATION_ATTEMPTS`] consecutive rejections instead of looping
/// forever.
pub fn generate_batch(level_id: u8, rng: &mut dyn RngCore) -> Vec<Question> {
    let generator = generator_for(level_id);
    let mut questions = Vec::with_capacity(QUESTIONS_PER_BATCH);
    let mut signatures = HashSet::new();
    let mut attempts = 0u32;

    while questions.len() < QUESTIONS_PER_BATCH && attempts < MAX_GENERATION_ATTEMPTS {
        let question = generator(rng, level_id);
        if signatures.insert(question.signature()) {
            questions.push(question);
            attempts = 0;
        } else {
            attempts += 1;
        }
    }

    questions
}
