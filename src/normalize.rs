//! Free-text career data → chart scores.
//!
//! Salary ranges ("$70,000 - $150,000+") and job outlook phrases
//! ("Much faster than average", "Growth of 12%") arrive as whatever the
//! server rendered. These functions turn them into a 0..=100 score and never
//! fail: anything unrecognizable scores [`FALLBACK_SCORE`].

use std::sync::LazyLock;

use regex::Regex;

// Digit classes are ASCII-only: Unicode digits ("$٣,٠٠٠", "１２%") are not
// amounts, so text written with them falls back like any other unreadable text.

/// Score used whenever the text carries nothing we can read.
pub const FALLBACK_SCORE: u8 = 50;

/// Salary that maps to a full score.
pub const SALARY_CEILING: u64 = 200_000;

/// Qualitative outlook phrases, checked in order. First match wins, so
/// "much faster" has to stay ahead of "faster".
pub const OUTLOOK_PHRASES: [(&str, u8); 5] = [
    ("much faster", 90),
    ("faster", 75),
    ("average", 50),
    ("slower", 25),
    ("decline", 10),
];

/// Each point of growth percentage is worth this much score (20% → 100).
const PERCENT_WEIGHT: u64 = 5;

static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[0-9]+(?:,[0-9]+)+\+?").unwrap());

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)%").unwrap());

/// All dollar amounts in `text`, in order of appearance.
///
/// Only comma-grouped amounts count ("$70,000", "$1,200,000+"); a bare
/// "$5000" is not treated as a salary figure. Amounts too large for `u64`
/// saturate.
pub fn dollar_amounts(text: &str) -> Vec<u64> {
    DOLLAR_AMOUNT
        .find_iter(text)
        .map(|m| {
            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u64>().unwrap_or(u64::MAX)
        })
        .collect()
}

/// Score a salary range by its highest amount, relative to [`SALARY_CEILING`].
pub fn normalize_salary(text: Option<&str>) -> u8 {
    let Some(text) = text else {
        return FALLBACK_SCORE;
    };
    match dollar_amounts(text).into_iter().max() {
        Some(highest) => scale_to_score(highest, SALARY_CEILING),
        None => FALLBACK_SCORE,
    }
}

/// Score a job outlook description.
pub fn normalize_outlook(text: Option<&str>) -> u8 {
    let Some(text) = text else {
        return FALLBACK_SCORE;
    };
    let lower = text.to_lowercase();

    if let Some((_, score)) = OUTLOOK_PHRASES
        .iter()
        .find(|(phrase, _)| lower.contains(phrase))
    {
        return *score;
    }

    match PERCENTAGE.captures(&lower) {
        Some(caps) => {
            let percent = caps[1].parse::<u64>().unwrap_or(u64::MAX);
            percent.saturating_mul(PERCENT_WEIGHT).min(100) as u8
        }
        None => FALLBACK_SCORE,
    }
}

/// Lowest and highest dollar amounts found in a salary text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalaryBounds {
    pub min: u64,
    pub max: u64,
}

pub fn salary_bounds(text: &str) -> Option<SalaryBounds> {
    let amounts = dollar_amounts(text);
    let min = *amounts.iter().min()?;
    let max = *amounts.iter().max()?;
    Some(SalaryBounds { min, max })
}

/// `round(value / ceiling * 100)`, clamped to 100. Rounds half up.
fn scale_to_score(value: u64, ceiling: u64) -> u8 {
    let scaled = (value as u128 * 200 + ceiling as u128) / (ceiling as u128 * 2);
    scaled.min(100) as u8
}
