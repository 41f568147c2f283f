//! Level 10: data and sorting.
//!
//! A category catalog maps category names to member items. The question
//! asks "which one is a {category}" with one correct member and three
//! decoys drawn from a different category.

use rand::RngCore;

use super::random::{random_item, shuffled};
use crate::question::Question;

pub struct Category {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

pub const CATEGORIES: [Category; 5] = [
    Category {
        name: "Fruit",
        members: &["Apple", "Banana", "Cherry", "Strawberry"],
    },
    Category {
        name: "Animal",
        members: &["Dog", "Cat", "Elephant", "Fish", "Bird"],
    },
    Category {
        name: "Toy",
        members: &["Doll", "Ball", "Car", "Block"],
    },
    Category {
        name: "Furniture",
        members: &["Chair", "Table", "Bed", "Lamp"],
    },
    Category {
        name: "Vehicle",
        members: &["Car", "Bus", "Train", "Boat"],
    },
];

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let target = random_item(rng, &CATEGORIES);
    let mut decoy_source = random_item(rng, &CATEGORIES);
    while decoy_source.name == target.name {
        decoy_source = random_item(rng, &CATEGORIES);
    }

    let correct = *random_item(rng, target.members);

    // "Car" belongs to both Toy and Vehicle; a decoy equal to the correct
    // answer would break the unique-options invariant
    let decoys: Vec<String> = decoy_source
        .members
        .iter()
        .filter(|m| **m != correct)
        .map(|m| m.to_string())
        .collect();
    let mut options = shuffled(rng, &decoys);
    options.truncate(3);
    options.push(correct.to_string());

    let visual = match target.name {
        "Fruit" => "apple",
        "Animal" => "dog",
        "Vehicle" => "car",
        _ => "box",
    };

    Question::new(
        level_id,
        format!("Which one is a {}?", target.name),
        correct.to_string(),
        shuffled(rng, &options),
        Some(visual),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn category(name: &str) -> &'static Category {
        CATEGORIES.iter().find(|c| c.name == name).unwrap()
    }

    #[test]
    fn test_answer_belongs_to_the_asked_category() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        for _ in 0..300 {
            let q = generate(&mut rng, 10);
            let asked = q
                .text
                .strip_prefix("Which one is a ")
                .and_then(|t| t.strip_suffix('?'))
                .unwrap();
            assert!(category(asked).members.contains(&q.correct_answer.as_str()));
        }
    }

    #[test]
    fn test_decoys_never_duplicate_the_answer() {
        let mut rng = ChaCha8Rng::seed_from_u64(20);
        for _ in 0..500 {
            let q = generate(&mut rng, 10);
            assert_eq!(q.options.len(), 4);
            let hits = q.options.iter().filter(|o| **o == q.correct_answer).count();
            assert_eq!(hits, 1, "prompt: {}", q.text);
        }
    }
}
