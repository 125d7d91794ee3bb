//! Random helpers behind the `choose`, `rand`, `randint`, `randcard` and `dice` commands.
//!
//! Every function takes the random source as a parameter so callers decide between
//! `thread_rng` and a seeded generator.

use crate::errors::{Error, Result};
use rand::{Rng, seq::SliceRandom};

/// Card suits
pub const SUITS: [&str; 4] = ["Diamonds", "Hearts", "Spades", "Clubs"];
/// Card ranks, ace low
pub const RANKS: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];
/// Die sizes `dice` accepts
pub const DIE_FACES: [u32; 20] = [
    1, 2, 3, 4, 5, 6, 7, 12, 14, 16, 18, 20, 24, 30, 34, 48, 50, 60, 100, 120,
];
/// Most dice rolled at once
pub const MAX_DICE: u32 = 20;

/// Splits the raw `choose` argument into choices.
///
/// Commas separate choices when present, so `"red wine, beer"` is two choices;
/// otherwise every word is one. Blank entries are dropped.
#[must_use]
pub fn split_choices(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else {
        raw.split_whitespace().collect()
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Picks one of `choices`.
pub fn choose<'a, R: Rng + ?Sized>(choices: &'a [String], rng: &mut R) -> Result<&'a str> {
    choices
        .choose(rng)
        .map(String::as_str)
        .ok_or(Error::NothingToChoose)
}

/// Uniform float in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.r#gen()
}

/// Uniform integer in `[min, max]`; reversed bounds are swapped.
pub fn int_between<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

/// A random playing card such as `"Queen of Hearts"`.
pub fn card<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suit = SUITS[rng.gen_range(0..SUITS.len())];
    let rank = RANKS[rng.gen_range(0..RANKS.len())];
    format!("{rank} of {suit}")
}

/// Rolls `count` dice with `faces` sides. `count` is clamped to `1..=20`.
pub fn roll_dice<R: Rng + ?Sized>(count: u32, faces: u32, rng: &mut R) -> Result<Vec<u32>> {
    if !DIE_FACES.contains(&faces) {
        return Err(Error::InvalidDieFaces {
            faces,
            valid: die_faces_list(),
        });
    }

    let count = count.clamp(1, MAX_DICE);
    Ok((0..count).map(|_| rng.gen_range(1..=faces)).collect())
}

/// Formats roll results the way the `dice` command prints them.
#[must_use]
pub fn format_rolls(rolls: &[u32]) -> String {
    let joined = rolls
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("\n\t - ");
    format!("Result(s):\n\t - {joined}")
}

fn die_faces_list() -> String {
    DIE_FACES
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(909)
    }

    #[test]
    fn test_choose() {
        let mut rng = seeded();
        let choices = vec!["tea".to_string(), "coffee".to_string()];
        for _ in 0..20 {
            let picked = choose(&choices, &mut rng).unwrap();
            assert!(picked == "tea" || picked == "coffee");
        }
        assert!(matches!(choose(&[], &mut rng), Err(Error::NothingToChoose)));
    }

    #[test]
    fn test_split_choices() {
        assert_eq!(split_choices("tea coffee  water"), vec!["tea", "coffee", "water"]);
        assert_eq!(split_choices("red wine, beer ,, "), vec!["red wine", "beer"]);
        assert!(split_choices("   ").is_empty());
    }

    #[test]
    fn test_unit_range() {
        let mut rng = seeded();
        for _ in 0..100 {
            let value = unit(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_int_between_inclusive_and_swapped() {
        let mut rng = seeded();
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..500 {
            let value = int_between(3, 1, &mut rng);
            assert!((1..=3).contains(&value));
            seen_low |= value == 1;
            seen_high |= value == 3;
        }
        assert!(seen_low && seen_high);
        assert_eq!(int_between(7, 7, &mut rng), 7);
    }

    #[test]
    fn test_card_shape() {
        let mut rng = seeded();
        let card = card(&mut rng);
        let (rank, suit) = card.split_once(" of ").unwrap();
        assert!(RANKS.contains(&rank));
        assert!(SUITS.contains(&suit));
    }

    #[test]
    fn test_roll_dice_clamps_count() {
        let mut rng = seeded();
        assert_eq!(roll_dice(0, 6, &mut rng).unwrap().len(), 1);
        assert_eq!(roll_dice(50, 6, &mut rng).unwrap().len(), 20);
        let rolls = roll_dice(5, 20, &mut rng).unwrap();
        assert_eq!(rolls.len(), 5);
        assert!(rolls.iter().all(|roll| (1..=20).contains(roll)));
    }

    #[test]
    fn test_roll_dice_rejects_odd_faces() {
        let mut rng = seeded();
        let error = roll_dice(1, 8, &mut rng).unwrap_err();
        assert!(matches!(error, Error::InvalidDieFaces { faces: 8, .. }));
        assert!(error.to_string().ends_with("1 2 3 4 5 6 7 12 14 16 18 20 24 30 34 48 50 60 100 120"));
    }

    #[test]
    fn test_format_rolls() {
        assert_eq!(format_rolls(&[4, 2]), "Result(s):\n\t - 4\n\t - 2");
    }
}
