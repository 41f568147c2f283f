//! Level 5: shape properties.
//!
//! Questions are drawn from a fixed catalog of shapes. Three framings:
//! a numeric property lookup, identify-by-property (where distractors must
//! not share the queried value), and a real-world analogy.

use rand::{Rng, RngCore};

use super::random::{random_int, random_item, shuffled};
use crate::question::Question;

pub struct ShapeInfo {
    pub name: &'static str,
    pub sides: i64,
    pub corners: i64,
    pub look_alike: &'static str,
    pub visual: &'static str,
}

pub const SHAPES: [ShapeInfo; 6] = [
    ShapeInfo {
        name: "Circle",
        sides: 0,
        corners: 0,
        look_alike: "Ball",
        visual: "circle",
    },
    ShapeInfo {
        name: "Square",
        sides: 4,
        corners: 4,
        look_alike: "Box",
        visual: "square",
    },
    ShapeInfo {
        name: "Triangle",
        sides: 3,
        corners: 3,
        look_alike: "Pizza Slice",
        visual: "triangle",
    },
    ShapeInfo {
        name: "Rectangle",
        sides: 4,
        corners: 4,
        look_alike: "Door",
        visual: "square",
    },
    ShapeInfo {
        name: "Hexagon",
        sides: 6,
        corners: 6,
        look_alike: "Honeycomb",
        visual: "hexagon",
    },
    ShapeInfo {
        name: "Octagon",
        sides: 8,
        corners: 8,
        look_alike: "Stop Sign",
        visual: "octagon",
    },
];

#[derive(Debug, Clone, Copy)]
enum ShapeProperty {
    Sides,
    Corners,
}

impl ShapeProperty {
    fn pick(rng: &mut dyn RngCore) -> Self {
        if rng.gen_bool(0.5) {
            ShapeProperty::Sides
        } else {
            ShapeProperty::Corners
        }
    }

    fn label(self) -> &'static str {
        match self {
            ShapeProperty::Sides => "sides",
            ShapeProperty::Corners => "corners",
        }
    }

    fn value_of(self, shape: &ShapeInfo) -> i64 {
        match self {
            ShapeProperty::Sides => shape.sides,
            ShapeProperty::Corners => shape.corners,
        }
    }
}

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let shape = random_item(rng, &SHAPES);
    match random_int(rng, 1, 3) {
        1 => property_count(rng, level_id, shape),
        2 => identify_by_property(rng, level_id, shape),
        _ => real_world_analogy(rng, level_id, shape),
    }
}

fn property_count(rng: &mut dyn RngCore, level_id: u8, shape: &ShapeInfo) -> Question {
    let prop = ShapeProperty::pick(rng);
    let value = prop.value_of(shape);
    // A circle has zero sides, so "one less" is replaced by a clearly wrong 5
    let low = if value > 0 { value - 1 } else { 5 };
    let options = shuffled(
        rng,
        &[
            value.to_string(),
            (value + 1).to_string(),
            (value + 2).to_string(),
            low.to_string(),
        ],
    );
    Question::new(
        level_id,
        format!("How many {} does a {} have?", prop.label(), shape.name),
        value.to_string(),
        options,
        Some(shape.visual),
    )
}

fn identify_by_property(rng: &mut dyn RngCore, level_id: u8, shape: &ShapeInfo) -> Question {
    let prop = ShapeProperty::pick(rng);
    let value = prop.value_of(shape);

    // Distractors must not satisfy the asked property themselves, otherwise
    // the question would have two right answers (Square vs. Rectangle)
    let decoys: Vec<String> = SHAPES
        .iter()
        .filter(|s| prop.value_of(s) != value)
        .map(|s| s.name.to_string())
        .collect();
    let mut options = shuffled(rng, &decoys);
    options.truncate(3);
    options.push(shape.name.to_string());

    Question::new(
        level_id,
        format!("Which shape has {} {}?", value, prop.label()),
        shape.name.to_string(),
        shuffled(rng, &options),
        Some(shape.visual),
    )
}

fn real_world_analogy(rng: &mut dyn RngCore, level_id: u8, shape: &ShapeInfo) -> Question {
    let decoys: Vec<String> = SHAPES
        .iter()
        .filter(|s| s.name != shape.name)
        .map(|s| s.name.to_string())
        .collect();
    let mut options = shuffled(rng, &decoys);
    options.truncate(3);
    options.push(shape.name.to_string());

    Question::new(
        level_id,
        format!("Which shape looks like a {}?", shape.look_alike),
        shape.name.to_string(),
        shuffled(rng, &options),
        Some(shape.visual),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_square_property_count_is_four() {
        // Sides and corners are both 4 for a square
        let square = &SHAPES[1];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..20 {
            let q = property_count(&mut rng, 5, square);
            assert_eq!(q.correct_answer, "4");
        }
    }

    #[test]
    fn test_identify_distractors_never_share_the_property() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..300 {
            let q = generate(&mut rng, 5);
            if !q.text.starts_with("Which shape has") {
                continue;
            }
            let queried: i64 = q
                .text
                .split_whitespace()
                .find_map(|w| w.parse().ok())
                .unwrap();
            let prop_is_sides = q.text.contains("sides");
            for option in q.options.iter().filter(|o| **o != q.correct_answer) {
                let shape = SHAPES.iter().find(|s| s.name == *option).unwrap();
                let value = if prop_is_sides { shape.sides } else { shape.corners };
                assert_ne!(value, queried, "ambiguous option in: {}", q.text);
            }
        }
    }

    #[test]
    fn test_analogy_answer_matches_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..300 {
            let q = generate(&mut rng, 5);
            if let Some(look) = q
                .text
                .strip_prefix("Which shape looks like a ")
                .and_then(|t| t.strip_suffix('?'))
            {
                let shape = SHAPES.iter().find(|s| s.look_alike == look).unwrap();
                assert_eq!(q.correct_answer, shape.name);
            }
        }
    }
}
