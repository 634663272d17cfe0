//! Domain vocabulary — the fixed value sets for every categorical field.
//!
//! Tables are ordered; the form renders options in this order. Membership is
//! all the validator cares about.

use std::ops::RangeInclusive;

// ─── Styles ──────────────────────────────────────────────────────────────────

/// `(style, description)` pairs.
pub const STYLES: [(&str, &str); 8] = [
  ("Ankle", "Low-cut socks that hit just above the ankle"),
  ("Crew", "Classic mid-calf length socks"),
  ("Knee-High", "Socks that extend to just below the knee"),
  ("No-Show", "Ultra-low socks that are hidden in shoes"),
  ("Dress", "Thin, formal socks for business or formal wear"),
  ("Athletic", "Moisture-wicking socks for sports and exercise"),
  ("Compression", "Tight-fitting socks that promote circulation"),
  ("Wool", "Warm, natural fiber socks for cold weather"),
];

// ─── Hues ────────────────────────────────────────────────────────────────────

/// `(emoji, color)` pairs. Emojis repeat (Navy and Blue share one), so this is
/// a list, not a map.
pub const HUES: [(&str, &str); 12] = [
  ("⚫", "Black"),
  ("⚪", "White"),
  ("🔘", "Gray"),
  ("🔵", "Navy"),
  ("🟤", "Brown"),
  ("🔴", "Red"),
  ("🔵", "Blue"),
  ("🟢", "Green"),
  ("🟡", "Yellow"),
  ("🟣", "Purple"),
  ("🌸", "Pink"),
  ("🟠", "Orange"),
];

/// Shown next to a hue that is not (or no longer) in [`HUES`].
pub const FALLBACK_EMOJI: &str = "🧦";

// ─── Sizes ───────────────────────────────────────────────────────────────────

/// `(code, label)` pairs.
pub const SIZES: [(&str, &str); 6] = [
  ("XS", "Pixie Feet"),
  ("S", "Nimble Toes"),
  ("M", "Average Joe Soles"),
  ("L", "Bigfoot Juniors"),
  ("XL", "Sasquatch Specials"),
  ("XXL", "Yeti Yacht Socks"),
];

// ─── Moods & ratings ─────────────────────────────────────────────────────────

pub const MOODS: [&str; 6] =
  ["Happy", "Sad", "Excited", "Relaxed", "Energetic", "Cozy"];

pub const RATINGS: RangeInclusive<i64> = 1..=10;

// ─── Membership ──────────────────────────────────────────────────────────────

pub fn is_style(s: &str) -> bool { STYLES.iter().any(|(name, _)| *name == s) }

pub fn is_hue(s: &str) -> bool { HUES.iter().any(|(_, color)| *color == s) }

pub fn is_size(s: &str) -> bool { SIZES.iter().any(|(code, _)| *code == s) }

pub fn is_mood(s: &str) -> bool { MOODS.contains(&s) }

pub fn is_rating(r: i64) -> bool { RATINGS.contains(&r) }

/// Emoji for `color`: the first matching entry in [`HUES`], else
/// [`FALLBACK_EMOJI`].
pub fn hue_emoji(color: &str) -> &'static str {
  HUES
    .iter()
    .find(|(_, c)| *c == color)
    .map(|(emoji, _)| *emoji)
    .unwrap_or(FALLBACK_EMOJI)
}
