//! # Feature: Omikuji
//!
//! Draws one of six fortunes uniformly at random for `/omikuji`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use rand::Rng;

/// Fortune outcomes, best to worst
pub const OUTCOMES: [&str; 6] = ["大吉", "中吉", "小吉", "吉", "凶", "大凶"];

/// Pick an outcome with a uniform index in `[0, OUTCOMES.len())`
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    OUTCOMES[rng.random_range(0..OUTCOMES.len())]
}

pub fn fortune_reply(outcome: &str) -> String {
    format!("あなたの今日の運勢は... {outcome} です！")
}
