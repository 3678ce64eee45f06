//! Career records as the server renders them into `data-*` attributes.
//!
//! The server emits snake_case keys while older templates use camelCase,
//! so every multi-word field accepts both.

use serde::Deserialize;

use crate::normalize::{normalize_outlook, normalize_salary, FALLBACK_SCORE};

/// Upper end of the 1–5 rating scale used by career records.
pub const RATING_MAX: f64 = 5.0;

/// Rating assumed when a record does not carry one.
pub const DEFAULT_RATING: f64 = 3.0;

/// Skill axes of the skills radar chart, scored 0–10.
pub const SKILL_AXES: [&str; 6] = [
    "Technical Skills",
    "Communication",
    "Problem Solving",
    "Creativity",
    "Leadership",
    "Analytical Thinking",
];

pub const SKILL_RATING_MAX: f64 = 10.0;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CareerRecord {
    #[serde(alias = "name")]
    pub title: String,
    #[serde(alias = "skills_required", alias = "skillsRequired")]
    pub skills: Vec<String>,
    #[serde(alias = "salaryRange")]
    pub salary_range: Option<String>,
    #[serde(alias = "jobOutlook")]
    pub job_outlook: Option<String>,
    pub milestones: Vec<Milestone>,
    #[serde(alias = "workLifeBalance")]
    pub work_life_balance: Option<f64>,
    #[serde(alias = "jobSatisfaction")]
    pub job_satisfaction: Option<f64>,
    #[serde(alias = "jobStability")]
    pub job_stability: Option<f64>,
    /// Per-axis ratings keyed by [`SKILL_AXES`] label.
    #[serde(alias = "skillRatings")]
    pub skill_ratings: std::collections::BTreeMap<String, f64>,
}

impl CareerRecord {
    pub fn work_life_balance(&self) -> f64 {
        rating_or_default(self.work_life_balance)
    }

    pub fn job_satisfaction(&self) -> f64 {
        rating_or_default(self.job_satisfaction)
    }

    pub fn job_stability(&self) -> f64 {
        rating_or_default(self.job_stability)
    }

    /// Skills radar series: one value per [`SKILL_AXES`] entry, 0 when unrated.
    pub fn skill_axis_scores(&self) -> Vec<f64> {
        SKILL_AXES
            .iter()
            .map(|axis| {
                self.skill_ratings
                    .get(*axis)
                    .copied()
                    .unwrap_or(0.0)
                    .clamp(0.0, SKILL_RATING_MAX)
            })
            .collect()
    }
}

/// Zero and missing ratings both mean "not rated".
fn rating_or_default(rating: Option<f64>) -> f64 {
    match rating {
        Some(r) if r > 0.0 => r,
        _ => DEFAULT_RATING,
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub enum MilestoneLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Milestone {
    pub title: String,
    pub level: MilestoneLevel,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Recommendation {
    pub career: String,
    pub score: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkillGap {
    #[serde(alias = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(alias = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// One career's position on the comparison radar, every axis on 0..=100.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonProfile {
    pub name: String,
    pub skill_match: f64,
    pub education_fit: f64,
    pub salary_potential: f64,
    pub growth_outlook: f64,
    pub work_life_balance: f64,
}

pub const COMPARISON_AXES: [&str; 5] = [
    "Skill Match",
    "Education Fit",
    "Salary Potential",
    "Growth Outlook",
    "Work/Life Balance",
];

impl ComparisonProfile {
    /// Profile with nothing known beyond the name.
    pub fn unscored(name: impl Into<String>) -> Self {
        let neutral = FALLBACK_SCORE as f64;
        Self {
            name: name.into(),
            skill_match: 0.0,
            education_fit: neutral,
            salary_potential: neutral,
            growth_outlook: neutral,
            work_life_balance: neutral,
        }
    }

    /// Derive salary, growth, and balance axes from a record's free text and ratings.
    pub fn from_record(record: &CareerRecord, skill_match: f64, education_fit: f64) -> Self {
        Self {
            name: record.title.clone(),
            skill_match,
            education_fit,
            salary_potential: normalize_salary(record.salary_range.as_deref()) as f64,
            growth_outlook: normalize_outlook(record.job_outlook.as_deref()) as f64,
            work_life_balance: (record.work_life_balance() / RATING_MAX * 100.0).clamp(0.0, 100.0),
        }
    }

    pub fn axis_values(&self) -> Vec<f64> {
        vec![
            self.skill_match,
            self.education_fit,
            self.salary_potential,
            self.growth_outlook,
            self.work_life_balance,
        ]
    }
}

/// Parse a numeric `data-*` value like `parseFloat`: the longest leading
/// `[+-]digits[.digits][e[+-]digits]` wins, anything unreadable falls back
/// to `default`.
pub fn parse_attr_number(raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim();
    trimmed[..leading_number_len(trimmed.as_bytes())]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(default)
}

/// Only ASCII bytes are consumed, so the result is always a char boundary.
fn leading_number_len(bytes: &[u8]) -> usize {
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end = skip_digits(end);
    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = skip_digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    end
}
