//! Level 8: comparing sizes and weights.
//!
//! Two distinct catalog objects are compared by weight, size, or height
//! (height reuses size). The second object is re-picked until the compared
//! values actually differ, so the question always has a single right answer.

use rand::{Rng, RngCore};

use super::random::{random_int, random_item, shuffled};
use crate::question::Question;

pub struct MeasuredObject {
    pub name: &'static str,
    pub size: f64,
    pub weight: f64,
    pub visual: &'static str,
}

pub const MEASURE_OBJECTS: [MeasuredObject; 9] = [
    MeasuredObject {
        name: "Elephant",
        size: 10.0,
        weight: 10.0,
        visual: "elephant",
    },
    MeasuredObject {
        name: "Mouse",
        size: 1.0,
        weight: 1.0,
        visual: "mouse",
    },
    MeasuredObject {
        name: "Dog",
        size: 4.0,
        weight: 4.0,
        visual: "dog",
    },
    MeasuredObject {
        name: "Giraffe",
        size: 9.0,
        weight: 8.0,
        visual: "giraffe",
    },
    MeasuredObject {
        name: "Ant",
        size: 0.1,
        weight: 0.1,
        visual: "ant",
    },
    MeasuredObject {
        name: "Bus",
        size: 8.0,
        weight: 9.0,
        visual: "bus",
    },
    MeasuredObject {
        name: "Car",
        size: 6.0,
        weight: 7.0,
        visual: "car",
    },
    MeasuredObject {
        name: "Feather",
        size: 2.0,
        weight: 0.01,
        visual: "bird",
    },
    MeasuredObject {
        name: "Rock",
        size: 2.0,
        weight: 3.0,
        visual: "scale",
    },
];

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Weight,
    Size,
    Height,
}

impl Comparison {
    fn value_of(self, object: &MeasuredObject) -> f64 {
        match self {
            Comparison::Weight => object.weight,
            Comparison::Size | Comparison::Height => object.size,
        }
    }
}

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let comparison = match random_int(rng, 1, 3) {
        1 => Comparison::Weight,
        2 => Comparison::Size,
        _ => Comparison::Height,
    };

    let first = random_item(rng, &MEASURE_OBJECTS);
    // Feather and Rock share a size, so "which is bigger" needs a re-pick
    let mut second = random_item(rng, &MEASURE_OBJECTS);
    while second.name == first.name
        || comparison.value_of(second) == comparison.value_of(first)
    {
        second = random_item(rng, &MEASURE_OBJECTS);
    }

    let (text, wants_larger, visual) = match comparison {
        Comparison::Weight => {
            let heavier = rng.gen_bool(0.5);
            (
                format!("Which is {}?", if heavier { "heavier" } else { "lighter" }),
                heavier,
                "scale",
            )
        }
        Comparison::Size => {
            let bigger = rng.gen_bool(0.5);
            (
                format!("Which is {}?", if bigger { "bigger" } else { "smaller" }),
                bigger,
                "ruler",
            )
        }
        Comparison::Height => ("Which is taller?".to_string(), true, "giraffe"),
    };

    let first_wins = (comparison.value_of(first) > comparison.value_of(second)) == wants_larger;
    let correct = if first_wins { first.name } else { second.name };

    Question::new(
        level_id,
        text,
        correct.to_string(),
        shuffled(rng, &[first.name.to_string(), second.name.to_string()]),
        Some(visual),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn object(name: &str) -> &'static MeasuredObject {
        MEASURE_OBJECTS.iter().find(|o| o.name == name).unwrap()
    }

    #[test]
    fn test_two_options_both_from_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        for _ in 0..300 {
            let q = generate(&mut rng, 8);
            assert_eq!(q.options.len(), 2);
            assert_ne!(q.options[0], q.options[1]);
            for option in &q.options {
                assert!(MEASURE_OBJECTS.iter().any(|o| o.name == *option));
            }
        }
    }

    #[test]
    fn test_answer_satisfies_the_asked_relation() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        for _ in 0..500 {
            let q = generate(&mut rng, 8);
            let winner = object(&q.correct_answer);
            let loser = object(
                q.options
                    .iter()
                    .find(|o| **o != q.correct_answer)
                    .unwrap(),
            );
            if q.text.contains("heavier") {
                assert!(winner.weight > loser.weight, "{}", q.text);
            } else if q.text.contains("lighter") {
                assert!(winner.weight < loser.weight, "{}", q.text);
            } else if q.text.contains("smaller") {
                assert!(winner.size < loser.size, "{}", q.text);
            } else {
                // bigger and taller both compare size
                assert!(winner.size > loser.size, "{}", q.text);
            }
        }
    }
}
