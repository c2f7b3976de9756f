use std::ops::RangeInclusive;

use rand::Rng;

pub const CORRECT_COINS: RangeInclusive<u32> = 10..=20;
pub const INCORRECT_COINS: u32 = 2;
pub const CONSOLATION_BADGE: &str = "Curious Explorer";

/// Used when a quiz comes without its own badges.
pub const DEFAULT_BADGE_POOL: [&str; 3] = [
    "Wiki Wizard",
    "Knowledge Knight",
    "Editor Extraordinaire",
];

const CELEBRATIONS: [&str; 5] = [
    "🎉 A dancing cat in a graduation cap!",
    "🎊 Confetti raining down on a smiling Wikipedia logo!",
    "🏆 A cartoon editor doing a victory dance!",
    "⭐ Sparkling stars around an encyclopedia!",
    "🚀 A rocket soaring upward with 'Knowledge' written on it!",
];

const ENCOURAGEMENTS: [&str; 5] = [
    "💪 A penguin trying again and succeeding!",
    "🌱 A small plant growing into a tree of knowledge!",
    "🧠 A brain lighting up with a new idea!",
    "🔍 A detective finding an important clue!",
    "🧩 A puzzle piece fitting perfectly into place!",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub coins: u32,
    pub badge: &'static str,
    pub cheer: &'static str,
}

/// Draws the coins, badge and cheer line for one submitted answer.
pub fn draw<R: Rng>(correct: bool, badge_pool: &[&'static str], rng: &mut R) -> Reward {
    if !correct {
        return Reward {
            coins: INCORRECT_COINS,
            badge: CONSOLATION_BADGE,
            cheer: pick(&ENCOURAGEMENTS, rng),
        };
    }

    let pool = if badge_pool.is_empty() {
        &DEFAULT_BADGE_POOL[..]
    } else {
        badge_pool
    };
    Reward {
        coins: rng.gen_range(CORRECT_COINS),
        badge: pick(pool, rng),
        cheer: pick(&CELEBRATIONS, rng),
    }
}

// Callers guarantee a non-empty slice.
fn pick<R: Rng>(items: &[&'static str], rng: &mut R) -> &'static str {
    items[rng.gen_range(0..items.len())]
}
