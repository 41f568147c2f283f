//! Level 7: repeating patterns.
//!
//! Three framings: a numeric ABAB sequence, a two-symbol ABAB sequence
//! (colors, shapes, words), and a fixed AAB sequence. The answer is always
//! the element that correctly continues the pattern.

use rand::RngCore;

use super::random::{random_int, random_item, shuffled};
use crate::question::Question;

const SYMBOL_PAIRS: [(&str, &str); 5] = [
    ("Red", "Blue"),
    ("Circle", "Square"),
    ("Sun", "Moon"),
    ("Up", "Down"),
    ("A", "B"),
];

const SYMBOL_DECOYS: [&str; 5] = ["Green", "Triangle", "Star", "Left", "C"];

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    match random_int(rng, 1, 3) {
        1 => numeric_pattern(rng, level_id),
        2 => symbolic_pattern(rng, level_id),
        _ => aab_pattern(rng, level_id),
    }
}

fn numeric_pattern(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let start = random_int(rng, 1, 10);
    let step = random_int(rng, 1, 3);
    let correct = start;

    // The stepped distractor can coincide with a fixed offset, so collect
    // more candidates than needed and drop duplicates before taking three
    let candidates = [start + step, start + 2, start + 5, start + 1];
    let mut distractors: Vec<i64> = Vec::new();
    for candidate in candidates {
        if candidate != correct && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }
    distractors.truncate(3);

    let mut options: Vec<String> = distractors.iter().map(|d| d.to_string()).collect();
    options.push(correct.to_string());

    Question::new(
        level_id,
        format!(
            "Complete: {}, {}, {}, {}, __",
            start,
            start + step,
            start,
            start + step
        ),
        correct.to_string(),
        shuffled(rng, &options),
        Some("coins"),
    )
}

fn symbolic_pattern(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let &(first, second) = random_item(rng, &SYMBOL_PAIRS);
    let decoys: Vec<&str> = SYMBOL_DECOYS
        .iter()
        .copied()
        .filter(|d| *d != first && *d != second)
        .collect();
    let decoys = shuffled(rng, &decoys);

    let options = vec![
        first.to_string(),
        second.to_string(),
        decoys[0].to_string(),
        decoys[1].to_string(),
    ];

    let visual = match first {
        "Circle" => "circle",
        "Sun" => "sun",
        "Up" => "ladder",
        "A" => "book",
        _ => "apple",
    };

    Question::new(
        level_id,
        format!("Complete: {}, {}, {}, {}, __", first, second, first, second),
        first.to_string(),
        shuffled(rng, &options),
        Some(visual),
    )
}

fn aab_pattern(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let options = shuffled(
        rng,
        &[
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ],
    );
    Question::new(
        level_id,
        "Complete: A, A, B, A, A, B, __".to_string(),
        "A".to_string(),
        options,
        Some("book"),
    )
}
