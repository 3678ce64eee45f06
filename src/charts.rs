//! The page's charts, each expressed as a call into the [`ChartConfig`] builder.

use crate::career::{
    CareerRecord, ComparisonProfile, Milestone, MilestoneLevel, Recommendation, SkillGap,
    COMPARISON_AXES, SKILL_AXES, SKILL_RATING_MAX,
};
use crate::chart::{
    ChartConfig, ChartKind, ChartOptions, Color, Dataset, Paint, Tooltip, ValueAxis, BLUE,
    GRAY, GREEN, PINK, PURPLE, RED, SERIES, SILVER, TEAL, YELLOW,
};
use crate::normalize::{salary_bounds, SalaryBounds};

pub const ROADMAP_STAGES: [&str; 4] = ["Entry Level", "Mid-Level", "Senior Level", "Expert / Leadership"];

/// Salary ranges assumed for the first and second career when theirs is missing.
pub const DEFAULT_SALARY_RANGES: [&str; 2] = ["$70,000 - $120,000", "$60,000 - $100,000"];

fn to_labels<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}

/// Four-stage progress bar. Stages up to `current_stage` are filled, the
/// current one is outlined.
pub fn roadmap_stage_chart(current_stage: i64) -> ChartConfig {
    let reached = |i: i64| current_stage >= i;
    let background = (0..ROADMAP_STAGES.len() as i64)
        .map(|i| if reached(i) { GREEN.rgba(0.7) } else { GRAY.rgba(0.3) })
        .collect();
    let border = (0..ROADMAP_STAGES.len() as i64)
        .map(|i| if current_stage == i { GREEN.rgba(1.0) } else { GRAY.rgba(0.5) })
        .collect();

    let dataset = Dataset::new(
        Some("Career Progression".into()),
        vec![100.0; ROADMAP_STAGES.len()],
        Paint::Each(background),
    )
    .with_border(Paint::Each(border), 2);

    ChartConfig::new(ChartKind::HorizontalBar, to_labels(&ROADMAP_STAGES))
        .dataset(dataset)
        .options(ChartOptions {
            maintain_aspect_ratio: false,
            legend: false,
            value_axis: Some(ValueAxis {
                hidden: true,
                max: Some(100.0),
                ..Default::default()
            }),
            ..Default::default()
        })
}

fn radar_options(suggested_max: f64) -> ChartOptions {
    ChartOptions {
        line_width: Some(3),
        value_axis: Some(ValueAxis {
            angle_lines: true,
            suggested_min: Some(0.0),
            suggested_max: Some(suggested_max),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Two careers side by side on the five comparison axes.
pub fn comparison_chart(first: &ComparisonProfile, second: &ComparisonProfile) -> ChartConfig {
    [first, second]
        .iter()
        .zip(SERIES)
        .fold(
            ChartConfig::new(ChartKind::Radar, to_labels(&COMPARISON_AXES)),
            |config, (profile, color)| {
                config.dataset(Dataset::radar_series(&profile.name, profile.axis_values(), color))
            },
        )
        .options(radar_options(100.0))
}

/// Match score per recommended career. `None` for an empty list.
pub fn recommendation_chart(recommendations: &[Recommendation]) -> Option<ChartConfig> {
    if recommendations.is_empty() {
        return None;
    }
    let labels = recommendations.iter().map(|r| r.career.clone()).collect();
    let scores = recommendations.iter().map(|r| r.score).collect();

    Some(
        ChartConfig::new(ChartKind::HorizontalBar, labels)
            .dataset(Dataset::bars("Match Score", scores, TEAL, 0.7))
            .options(ChartOptions {
                maintain_aspect_ratio: false,
                legend: false,
                value_axis: Some(ValueAxis {
                    title: Some("Match Score".into()),
                    begin_at_zero: true,
                    ..Default::default()
                }),
                ..Default::default()
            }),
    )
}

/// Matching vs missing skill counts.
pub fn skill_gap_chart(gap: &SkillGap) -> ChartConfig {
    let dataset = Dataset::new(
        None,
        vec![gap.matching_skills.len() as f64, gap.missing_skills.len() as f64],
        Paint::Each(vec![GREEN.rgba(0.7), RED.rgba(0.7)]),
    )
    .with_border(Paint::Each(vec![GREEN.rgba(1.0), RED.rgba(1.0)]), 1);

    ChartConfig::new(ChartKind::Doughnut, to_labels(&["Matching Skills", "Skill Gaps"]))
        .dataset(dataset)
        .options(ChartOptions {
            maintain_aspect_ratio: false,
            tooltip: Tooltip::ShareOfTotal,
            ..Default::default()
        })
}

/// Salary bounds for a career, or the default range for its slot.
pub fn salary_bounds_or_default(record: &CareerRecord, slot: usize) -> SalaryBounds {
    let fallback = DEFAULT_SALARY_RANGES[slot.min(DEFAULT_SALARY_RANGES.len() - 1)];
    record
        .salary_range
        .as_deref()
        .and_then(salary_bounds)
        .or_else(|| salary_bounds(fallback))
        .unwrap_or(SalaryBounds { min: 0, max: 0 })
}

/// Minimum and maximum salary for two careers.
pub fn salary_comparison_chart(first: &CareerRecord, second: &CareerRecord) -> ChartConfig {
    [first, second]
        .iter()
        .zip(SERIES)
        .enumerate()
        .fold(
            ChartConfig::new(ChartKind::Bar, to_labels(&["Minimum Salary", "Maximum Salary"])),
            |config, (slot, (record, color))| {
                let bounds = salary_bounds_or_default(record, slot);
                config.dataset(Dataset {
                    border: Some(Paint::All(color.rgb())),
                    ..Dataset::bars(
                        &record.title,
                        vec![bounds.min as f64, bounds.max as f64],
                        color,
                        0.5,
                    )
                })
            },
        )
        .options(ChartOptions {
            value_axis: Some(ValueAxis {
                title: Some("Salary (USD)".into()),
                begin_at_zero: true,
                ..Default::default()
            }),
            ..Default::default()
        })
}

fn milestone_color(level: MilestoneLevel) -> Color {
    match level {
        MilestoneLevel::Beginner => TEAL,
        MilestoneLevel::Intermediate => BLUE,
        MilestoneLevel::Advanced => PURPLE,
        MilestoneLevel::Other => SILVER,
    }
}

/// Milestones as an ascending staircase, colored by level. `None` without milestones.
pub fn milestone_chart(milestones: &[Milestone]) -> Option<ChartConfig> {
    if milestones.is_empty() {
        return None;
    }
    let labels = milestones.iter().map(|m| m.title.clone()).collect();
    let steps = (1..=milestones.len()).map(|i| i as f64).collect();
    let colors = || milestones.iter().map(|m| milestone_color(m.level));

    let dataset = Dataset::new(
        Some("Career Progression".into()),
        steps,
        Paint::Each(colors().map(|c| c.rgba(0.5)).collect()),
    )
    .with_border(Paint::Each(colors().map(Color::rgb).collect()), 1);

    Some(
        ChartConfig::new(ChartKind::HorizontalBar, labels)
            .dataset(dataset)
            .options(ChartOptions {
                value_axis: Some(ValueAxis {
                    title: Some("Progression".into()),
                    begin_at_zero: true,
                    ..Default::default()
                }),
                tooltip: Tooltip::AfterLabel(
                    milestones.iter().map(|m| m.description.clone()).collect(),
                ),
                ..Default::default()
            }),
    )
}

/// Work-life balance, satisfaction and stability ratings out of 5.
pub fn job_metrics_chart(record: &CareerRecord) -> ChartConfig {
    let dataset = Dataset {
        hover_offset: Some(4),
        ..Dataset::new(
            Some("Job Metrics".into()),
            vec![
                record.work_life_balance(),
                record.job_satisfaction(),
                record.job_stability(),
            ],
            Paint::Each(vec![PINK.rgb(), BLUE.rgb(), YELLOW.rgb()]),
        )
    };

    ChartConfig::new(
        ChartKind::Doughnut,
        to_labels(&["Work-Life Balance", "Job Satisfaction", "Job Stability"]),
    )
    .dataset(dataset)
    .options(ChartOptions {
        tooltip: Tooltip::RatingOutOf(5),
        ..Default::default()
    })
}

/// Two careers on the fixed skill axes. `None` when neither career is rated.
pub fn skills_radar_chart(first: &CareerRecord, second: &CareerRecord) -> Option<ChartConfig> {
    if first.skill_ratings.is_empty() && second.skill_ratings.is_empty() {
        return None;
    }
    let config = [first, second].iter().zip(SERIES).fold(
        ChartConfig::new(ChartKind::Radar, to_labels(&SKILL_AXES)),
        |config, (record, color)| {
            config.dataset(
                Dataset::radar_series(&record.title, record.skill_axis_scores(), color).with_fill(),
            )
        },
    );
    Some(config.options(radar_options(SKILL_RATING_MAX)))
}
