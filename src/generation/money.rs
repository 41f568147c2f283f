//! Level 9: coin values.
//!
//! Canadian coin catalog with integer cent values. Three framings: value
//! lookup, a two-coin sum (small denominations only, so the sums stay
//! intuitive), and reverse lookup by value.

use rand::RngCore;

use super::random::{random_int, random_item, shuffled};
use crate::question::Question;

pub struct Coin {
    pub name: &'static str,
    pub cents: i64,
    pub visual: &'static str,
}

pub const COINS: [Coin; 5] = [
    Coin {
        name: "Nickel",
        cents: 5,
        visual: "nickel",
    },
    Coin {
        name: "Dime",
        cents: 10,
        visual: "dime",
    },
    Coin {
        name: "Quarter",
        cents: 25,
        visual: "quarter",
    },
    Coin {
        name: "Loonie",
        cents: 100,
        visual: "loonie",
    },
    Coin {
        name: "Toonie",
        cents: 200,
        visual: "toonie",
    },
];

/// Only these take part in the two-coin sum framing.
const SUM_MAX_CENTS: i64 = 25;

const VALUE_DECOYS: [&str; 6] = [
    "1 cent",
    "5 cents",
    "10 cents",
    "25 cents",
    "1 dollar(s)",
    "2 dollar(s)",
];

pub fn value_text(cents: i64) -> String {
    if cents >= 100 {
        format!("{} dollar(s)", cents / 100)
    } else {
        format!("{} cents", cents)
    }
}

pub fn generate(rng: &mut dyn RngCore, level_id: u8) -> Question {
    match random_int(rng, 1, 3) {
        1 => value_lookup(rng, level_id),
        2 => coin_sum(rng, level_id),
        _ => reverse_lookup(rng, level_id),
    }
}

fn value_lookup(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let coin = random_item(rng, &COINS);
    let correct = value_text(coin.cents);

    // The static decoy list contains the correct value, so filter it out
    let decoys: Vec<String> = VALUE_DECOYS
        .iter()
        .filter(|d| **d != correct)
        .map(|d| d.to_string())
        .collect();
    let mut options = shuffled(rng, &decoys);
    options.truncate(3);
    options.push(correct.clone());

    Question::new(
        level_id,
        format!("What is a {} worth?", coin.name),
        correct,
        shuffled(rng, &options),
        Some(coin.visual),
    )
}

fn coin_sum(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let small: Vec<&Coin> = COINS.iter().filter(|c| c.cents <= SUM_MAX_CENTS).collect();
    let first = *random_item(rng, &small);
    let second = *random_item(rng, &small);
    let sum = first.cents + second.cents;

    let correct = format!("{} cents", sum);
    let options = shuffled(
        rng,
        &[
            correct.clone(),
            format!("{} cents", sum + 5),
            format!("{} cents", sum - 5),
            "100 cents".to_string(),
        ],
    );

    Question::new(
        level_id,
        format!("{} + {} = ?", first.name, second.name),
        correct,
        options,
        Some("coins"),
    )
}

fn reverse_lookup(rng: &mut dyn RngCore, level_id: u8) -> Question {
    let coin = random_item(rng, &COINS);
    let decoys: Vec<String> = COINS
        .iter()
        .filter(|c| c.name != coin.name)
        .map(|c| c.name.to_string())
        .collect();
    let mut options = shuffled(rng, &decoys);
    options.truncate(3);
    options.push(coin.name.to_string());

    Question::new(
        level_id,
        format!("Which coin is worth {}?", value_text(coin.cents)),
        coin.name.to_string(),
        shuffled(rng, &options),
        Some(coin.visual),
    )
}
