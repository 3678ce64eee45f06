//! Page controller: decides which charts to draw and how the page reacts to
//! events, against an abstract [`Surface`].
//!
//! The surface is the only thing that knows about the browser. Handlers
//! never touch it directly; they turn an [`EventPayload`] into a list of
//! [`UiCommand`]s that the surface applies.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::career::{parse_attr_number, CareerRecord, ComparisonProfile, Recommendation, SkillGap};
use crate::chart::{format_value, ChartConfig};
use crate::charts;
use crate::form::{
    check_resume_upload, FileInfo, StepView, UploadCheck, EMPTY_FILE_LABEL, UPLOAD_REJECTED,
};
use crate::normalize::FALLBACK_SCORE;

// ── Regions ───────────────────────────────────────────────────────────

/// Chart canvases the page may contain, by element id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    Roadmap,
    Comparison,
    Recommendations,
    SkillGap,
    SalaryComparison,
    SkillsRadar,
    Milestones,
    JobMetrics,
}

pub const ALL_REGIONS: [Region; 8] = [
    Region::Roadmap,
    Region::Comparison,
    Region::Recommendations,
    Region::SkillGap,
    Region::SalaryComparison,
    Region::SkillsRadar,
    Region::Milestones,
    Region::JobMetrics,
];

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Roadmap => "roadmapChart",
            Region::Comparison => "comparisonChart",
            Region::Recommendations => "recommendationChart",
            Region::SkillGap => "skillGapChart",
            Region::SalaryComparison => "salaryChart",
            Region::SkillsRadar => "skillsRadarChart",
            Region::Milestones => "milestoneChart",
            Region::JobMetrics => "jobMetricsChart",
        }
    }
}

pub const RESUME_INPUT: &str = "resume";
pub const CAREER_SELECT: &str = "career";
pub const FILE_LABEL: &str = ".custom-file-label";
pub const VALIDATED_FORMS: &str = ".needs-validation";
pub const MULTI_STEP_FORMS: &str = ".multi-step-form";
pub const FORM_STEPS: &str = ".form-step";
pub const NEXT_BUTTONS: &str = ".btn-next";
pub const PREV_BUTTONS: &str = ".btn-prev";
pub const PROGRESS_BAR: &str = ".progress-bar";
pub const STEP_FIELDS: &str = "input, select, textarea";

/// Bootstrap components started on page load: trigger selector, then the
/// constructor name under the `bootstrap` global.
pub const BOOTSTRAP_WIDGETS: [(&str, &str); 2] = [
    (r#"[data-bs-toggle="tooltip"]"#, "Tooltip"),
    (r#"[data-bs-toggle="popover"]"#, "Popover"),
];

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceError {
    /// The global `Chart` constructor is not loaded.
    MissingChartLibrary,
    /// The region exists but has no 2d drawing context.
    NoContext(String),
    /// A `data-*` attribute holds something we cannot read.
    BadData {
        region: &'static str,
        key: &'static str,
        reason: String,
    },
    /// A call into JavaScript threw.
    Js(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::MissingChartLibrary => write!(f, "Chart.js is not loaded"),
            SurfaceError::NoContext(id) => write!(f, "#{id} has no 2d context"),
            SurfaceError::BadData { region, key, reason } => {
                write!(f, "#{region} data-{key} is unreadable: {reason}")
            }
            SurfaceError::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

// ── Events and commands ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiEvent {
    Change,
    Click,
    Submit,
}

impl UiEvent {
    pub fn dom_name(self) -> &'static str {
        match self {
            UiEvent::Change => "change",
            UiEvent::Click => "click",
            UiEvent::Submit => "submit",
        }
    }
}

/// What the surface read off the element that fired the event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventPayload {
    pub value: Option<String>,
    pub file: Option<FileInfo>,
    /// Native form validity, for submit events.
    pub valid: Option<bool>,
}

/// Which element(s) a command or listener applies to. Selectors are
/// resolved within the current scope (the document, or a form).
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Id(&'static str),
    All(&'static str),
    Nth(&'static str, usize),
    /// The element the event fired on.
    Current,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    SetText { target: Target, text: String },
    ClearValue { target: Target },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetStyle { target: Target, property: &'static str, value: String },
    SetDisabled { target: Target, disabled: bool },
    Alert(String),
    Log(String),
    /// `preventDefault` + `stopPropagation` on the triggering event.
    CancelEvent,
}

pub type Handler = Rc<dyn Fn(&EventPayload) -> Vec<UiCommand>>;

/// The capabilities the controller needs from a page.
pub trait Surface {
    fn has_element(&self, id: &str) -> bool;

    /// A `data-*` attribute of the element, by its camelCase dataset key.
    fn data(&self, id: &str, key: &str) -> Option<String>;

    fn draw_chart(&mut self, id: &str, config: &ChartConfig) -> Result<(), SurfaceError>;

    /// Attach `handler` to every element `target` resolves to.
    fn listen(&mut self, target: Target, event: UiEvent, handler: Handler);

    fn log(&self, message: &str);

    fn warn(&self, message: &str);
}

// ── Handlers ──────────────────────────────────────────────────────────

pub fn resume_upload_commands(payload: &EventPayload) -> Vec<UiCommand> {
    match check_resume_upload(payload.file.as_ref()) {
        UploadCheck::Accepted { label } => vec![UiCommand::SetText {
            target: Target::All(FILE_LABEL),
            text: label,
        }],
        UploadCheck::Rejected => vec![
            UiCommand::Alert(UPLOAD_REJECTED.to_string()),
            UiCommand::ClearValue {
                target: Target::Current,
            },
            UiCommand::SetText {
                target: Target::All(FILE_LABEL),
                text: EMPTY_FILE_LABEL.to_string(),
            },
        ],
    }
}

pub fn career_select_commands(payload: &EventPayload) -> Vec<UiCommand> {
    match payload.value.as_deref() {
        Some(career) if !career.is_empty() => {
            vec![UiCommand::Log(format!("Career selected: {career}"))]
        }
        _ => Vec::new(),
    }
}

pub fn form_submit_commands(payload: &EventPayload) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    if payload.valid == Some(false) {
        commands.push(UiCommand::CancelEvent);
    }
    commands.push(UiCommand::AddClass {
        target: Target::Current,
        class: "was-validated",
    });
    commands
}

/// Commands that present `view` inside a multi-step form.
pub fn step_commands(view: &StepView) -> Vec<UiCommand> {
    let progress = format_value(view.progress_percent);
    vec![
        UiCommand::AddClass {
            target: Target::All(FORM_STEPS),
            class: "d-none",
        },
        UiCommand::RemoveClass {
            target: Target::Nth(FORM_STEPS, view.visible_step),
            class: "d-none",
        },
        UiCommand::SetStyle {
            target: Target::All(PROGRESS_BAR),
            property: "width",
            value: format!("{progress}%"),
        },
        UiCommand::SetAttribute {
            target: Target::All(PROGRESS_BAR),
            name: "aria-valuenow",
            value: progress,
        },
        UiCommand::SetDisabled {
            target: Target::All(PREV_BUTTONS),
            disabled: view.prev_disabled,
        },
        UiCommand::SetText {
            target: Target::All(NEXT_BUTTONS),
            text: view.next_label.to_string(),
        },
        UiCommand::AddClass {
            target: Target::All(NEXT_BUTTONS),
            class: view.next_class,
        },
        UiCommand::RemoveClass {
            target: Target::All(NEXT_BUTTONS),
            class: view.stale_class,
        },
        UiCommand::SetAttribute {
            target: Target::All(NEXT_BUTTONS),
            name: "type",
            value: view.next_type.to_string(),
        },
    ]
}

// ── Controller ────────────────────────────────────────────────────────

pub struct PageController<S: Surface> {
    surface: S,
}

impl<S: Surface> PageController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Attach the upload, career-select and submit handlers.
    pub fn wire_handlers(&mut self) {
        if self.surface.has_element(RESUME_INPUT) {
            self.surface.listen(
                Target::Id(RESUME_INPUT),
                UiEvent::Change,
                Rc::new(resume_upload_commands),
            );
        }
        if self.surface.has_element(CAREER_SELECT) {
            self.surface.listen(
                Target::Id(CAREER_SELECT),
                UiEvent::Change,
                Rc::new(career_select_commands),
            );
        }
        self.surface.listen(
            Target::All(VALIDATED_FORMS),
            UiEvent::Submit,
            Rc::new(form_submit_commands),
        );
    }

    /// Draw every chart whose region is on the page. Returns the ids drawn.
    pub fn setup_charts(&mut self) -> Vec<&'static str> {
        let mut drawn = Vec::new();
        for region in ALL_REGIONS {
            let id = region.element_id();
            if !self.surface.has_element(id) {
                continue;
            }
            let result = self
                .chart_for(region)
                .and_then(|config| match config {
                    Some(config) => self.surface.draw_chart(id, &config).map(|_| true),
                    None => Ok(false),
                });
            match result {
                Ok(true) => drawn.push(id),
                Ok(false) => {}
                Err(e) => self.surface.warn(&format!("career-charts: skipped #{id}: {e}")),
            }
        }
        if !drawn.is_empty() {
            self.surface
                .log(&format!("career-charts: drew {}", drawn.join(", ")));
        }
        drawn
    }

    /// Build the configuration for one region from its `data-*` attributes.
    /// `Ok(None)` means there is nothing to show.
    pub fn chart_for(&self, region: Region) -> Result<Option<ChartConfig>, SurfaceError> {
        let id = region.element_id();
        match region {
            Region::Roadmap => {
                let stage = parse_attr_number(self.surface.data(id, "currentStage").as_deref(), 0.0);
                Ok(Some(charts::roadmap_stage_chart(stage.trunc() as i64)))
            }
            Region::Comparison => {
                let pair = self.career_pair(region)?;
                let first = self.comparison_profile(id, 1, pair.as_ref().map(|(a, _)| a));
                let second = self.comparison_profile(id, 2, pair.as_ref().map(|(_, b)| b));
                Ok(Some(charts::comparison_chart(&first, &second)))
            }
            Region::Recommendations => {
                let recs: Vec<Recommendation> = self.json_data(region, "recommendations")?.unwrap_or_default();
                Ok(charts::recommendation_chart(&recs))
            }
            Region::SkillGap => {
                let gap: Option<SkillGap> = self.json_data(region, "skills")?;
                Ok(gap.map(|g| charts::skill_gap_chart(&g)))
            }
            Region::SalaryComparison => Ok(self
                .career_pair(region)?
                .map(|(a, b)| charts::salary_comparison_chart(&a, &b))),
            Region::SkillsRadar => Ok(self
                .career_pair(region)?
                .and_then(|(a, b)| charts::skills_radar_chart(&a, &b))),
            Region::Milestones => {
                let career: Option<CareerRecord> = self.json_data(region, "career")?;
                Ok(career.and_then(|c| charts::milestone_chart(&c.milestones)))
            }
            Region::JobMetrics => {
                let career: Option<CareerRecord> = self.json_data(region, "career")?;
                Ok(career.map(|c| charts::job_metrics_chart(&c)))
            }
        }
    }

    /// Comparison series `n` (1 or 2). Starts from the career record when the
    /// page embeds one, then applies `data-career{n}`, `data-skill-match{n}`, ...
    fn comparison_profile(&self, id: &str, n: u8, record: Option<&CareerRecord>) -> ComparisonProfile {
        let read = |key: &str, default: f64| {
            parse_attr_number(self.surface.data(id, &format!("{key}{n}")).as_deref(), default)
        };
        let mut profile = match record {
            Some(record) => ComparisonProfile::from_record(record, 0.0, FALLBACK_SCORE as f64),
            None => ComparisonProfile::unscored(""),
        };
        if let Some(name) = self.surface.data(id, &format!("career{n}")) {
            profile.name = name;
        }
        profile.skill_match = read("skillMatch", profile.skill_match);
        profile.education_fit = read("eduFit", profile.education_fit);
        profile.salary_potential = read("salary", profile.salary_potential);
        profile.growth_outlook = read("growth", profile.growth_outlook);
        profile.work_life_balance = read("balance", profile.work_life_balance);
        profile
    }

    fn json_data<T: DeserializeOwned>(
        &self,
        region: Region,
        key: &'static str,
    ) -> Result<Option<T>, SurfaceError> {
        let Some(raw) = self.surface.data(region.element_id(), key) else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SurfaceError::BadData {
                region: region.element_id(),
                key,
                reason: e.to_string(),
            })
    }

    /// The two careers in `data-careers`. Fewer than two means nothing to compare.
    fn career_pair(&self, region: Region) -> Result<Option<(CareerRecord, CareerRecord)>, SurfaceError> {
        let careers: Vec<CareerRecord> = self.json_data(region, "careers")?.unwrap_or_default();
        let mut careers = careers.into_iter();
        Ok(match (careers.next(), careers.next()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockSurface {
        elements: HashMap<&'static str, HashMap<&'static str, String>>,
        drawn: Vec<(String, ChartConfig)>,
        listeners: Vec<(Target, UiEvent, Handler)>,
        warnings: RefCell<Vec<String>>,
        fail_draw: bool,
    }

    impl MockSurface {
        fn with(mut self, id: &'static str, data: &[(&'static str, &str)]) -> Self {
            self.elements.insert(
                id,
                data.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            );
            self
        }

        fn fire(&self, target: &Target, payload: &EventPayload) -> Vec<UiCommand> {
            self.listeners
                .iter()
                .filter(|(t, _, _)| t == target)
                .flat_map(|(_, _, h)| h(payload))
                .collect()
        }
    }

    impl Surface for MockSurface {
        fn has_element(&self, id: &str) -> bool {
            self.elements.contains_key(id)
        }

        fn data(&self, id: &str, key: &str) -> Option<String> {
            self.elements.get(id)?.get(key).cloned()
        }

        fn draw_chart(&mut self, id: &str, config: &ChartConfig) -> Result<(), SurfaceError> {
            if self.fail_draw {
                return Err(SurfaceError::MissingChartLibrary);
            }
            self.drawn.push((id.to_string(), config.clone()));
            Ok(())
        }

        fn listen(&mut self, target: Target, event: UiEvent, handler: Handler) {
            self.listeners.push((target, event, handler));
        }

        fn log(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn empty_page_draws_nothing() {
        let mut page = PageController::new(MockSurface::default());
        assert!(page.setup_charts().is_empty());
        assert!(page.surface().warnings.borrow().is_empty());
    }

    #[test]
    fn roadmap_reads_current_stage() {
        let surface = MockSurface::default().with("roadmapChart", &[("currentStage", "2")]);
        let mut page = PageController::new(surface);
        assert_eq!(page.setup_charts(), vec!["roadmapChart"]);
        let (_, config) = &page.surface().drawn[0];
        assert_eq!(config.datasets[0].border, Some(crate::chart::Paint::Each(vec![
            "rgba(108, 117, 125, 0.5)".into(),
            "rgba(108, 117, 125, 0.5)".into(),
            "rgba(40, 167, 69, 1)".into(),
            "rgba(108, 117, 125, 0.5)".into(),
        ])));
    }

    #[test]
    fn comparison_defaults_missing_attributes() {
        let surface = MockSurface::default().with(
            "comparisonChart",
            &[
                ("career1", "Developer"),
                ("career2", "Analyst"),
                ("skillMatch1", "72.5"),
                ("salary2", "90"),
            ],
        );
        let page = PageController::new(surface);
        let config = page.chart_for(Region::Comparison).unwrap().unwrap();
        assert_eq!(config.datasets[0].label.as_deref(), Some("Developer"));
        assert_eq!(config.datasets[0].data, vec![72.5, 50.0, 50.0, 50.0, 50.0]);
        assert_eq!(config.datasets[1].data, vec![0.0, 50.0, 90.0, 50.0, 50.0]);
    }

    #[test]
    fn comparison_scores_embedded_records() {
        let careers = r#"[
            {"title": "Developer", "salary_range": "$70,000 - $150,000+", "job_outlook": "Much faster than average", "work_life_balance": 4},
            {"title": "Designer", "salary_range": "$50,000 - $110,000+", "job_outlook": "Growth of 3%"}
        ]"#;
        let surface = MockSurface::default().with(
            "comparisonChart",
            &[("careers", careers), ("skillMatch1", "40"), ("career2", "UX Designer")],
        );
        let page = PageController::new(surface);
        let config = page.chart_for(Region::Comparison).unwrap().unwrap();
        assert_eq!(config.datasets[0].label.as_deref(), Some("Developer"));
        assert_eq!(config.datasets[0].data, vec![40.0, 50.0, 75.0, 90.0, 80.0]);
        assert_eq!(config.datasets[1].label.as_deref(), Some("UX Designer"));
        assert_eq!(config.datasets[1].data, vec![0.0, 50.0, 55.0, 15.0, 60.0]);
    }

    #[test]
    fn recommendations_empty_list_is_skipped_silently() {
        let surface = MockSurface::default().with("recommendationChart", &[("recommendations", "[]")]);
        let mut page = PageController::new(surface);
        assert!(page.setup_charts().is_empty());
        assert!(page.surface().warnings.borrow().is_empty());
    }

    #[test]
    fn recommendations_drawn() {
        let surface = MockSurface::default().with(
            "recommendationChart",
            &[("recommendations", r#"[{"career": "Nurse", "score": 70}]"#)],
        );
        let mut page = PageController::new(surface);
        assert_eq!(page.setup_charts(), vec!["recommendationChart"]);
    }

    #[test]
    fn malformed_json_warns_and_continues() {
        let surface = MockSurface::default()
            .with("recommendationChart", &[("recommendations", "{not json")])
            .with("roadmapChart", &[]);
        let mut page = PageController::new(surface);
        assert_eq!(page.setup_charts(), vec!["roadmapChart"]);
        let warnings = page.surface().warnings.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("recommendationChart"), "{}", warnings[0]);
    }

    #[test]
    fn draw_failure_is_reported() {
        let mut surface = MockSurface::default().with("roadmapChart", &[]);
        surface.fail_draw = true;
        let mut page = PageController::new(surface);
        assert!(page.setup_charts().is_empty());
        assert!(page.surface().warnings.borrow()[0].contains("Chart.js is not loaded"));
    }

    #[test]
    fn career_pair_charts() {
        let careers = r#"[
            {"title": "Developer", "salary_range": "$70,000 - $150,000+", "skill_ratings": {"Creativity": 6}},
            {"title": "Designer"}
        ]"#;
        let surface = MockSurface::default()
            .with("salaryChart", &[("careers", careers)])
            .with("skillsRadarChart", &[("careers", careers)]);
        let mut page = PageController::new(surface);
        assert_eq!(page.setup_charts(), vec!["salaryChart", "skillsRadarChart"]);
    }

    #[test]
    fn single_career_is_not_a_pair() {
        let surface = MockSurface::default().with("salaryChart", &[("careers", r#"[{"title": "A"}]"#)]);
        let page = PageController::new(surface);
        assert_eq!(page.chart_for(Region::SalaryComparison), Ok(None));
    }

    #[test]
    fn career_charts_from_single_record() {
        let career = r#"{"title": "Nurse", "milestones": [{"title": "License", "level": "Beginner", "description": "Pass exam"}]}"#;
        let surface = MockSurface::default()
            .with("milestoneChart", &[("career", career)])
            .with("jobMetricsChart", &[("career", career)])
            .with("skillGapChart", &[("skills", r#"{"matching_skills": ["a"], "missing_skills": []}"#)]);
        let mut page = PageController::new(surface);
        assert_eq!(
            page.setup_charts(),
            vec!["skillGapChart", "milestoneChart", "jobMetricsChart"]
        );
    }

    #[test]
    fn handlers_only_for_present_inputs() {
        let mut page = PageController::new(MockSurface::default().with("career", &[]));
        page.wire_handlers();
        let targets: Vec<&Target> = page.surface().listeners.iter().map(|(t, _, _)| t).collect();
        assert_eq!(targets, vec![&Target::Id("career"), &Target::All(VALIDATED_FORMS)]);
    }

    #[test]
    fn resume_upload_rejects_non_pdf() {
        let mut page = PageController::new(MockSurface::default().with("resume", &[]));
        page.wire_handlers();
        let payload = EventPayload {
            file: Some(FileInfo {
                name: "cv.png".into(),
                mime: "image/png".into(),
            }),
            ..Default::default()
        };
        let commands = page.surface().fire(&Target::Id("resume"), &payload);
        assert_eq!(commands[0], UiCommand::Alert("Please upload a PDF file".into()));
        assert_eq!(commands[1], UiCommand::ClearValue { target: Target::Current });
        assert_eq!(
            commands[2],
            UiCommand::SetText {
                target: Target::All(FILE_LABEL),
                text: "Choose file".into()
            }
        );
    }

    #[test]
    fn resume_upload_shows_file_name() {
        let payload = EventPayload {
            file: Some(FileInfo {
                name: "cv.pdf".into(),
                mime: "application/pdf".into(),
            }),
            ..Default::default()
        };
        assert_eq!(
            resume_upload_commands(&payload),
            vec![UiCommand::SetText {
                target: Target::All(FILE_LABEL),
                text: "cv.pdf".into()
            }]
        );
    }

    #[test]
    fn career_select_logs_non_empty_choice() {
        let payload = EventPayload {
            value: Some("data scientist".into()),
            ..Default::default()
        };
        assert_eq!(
            career_select_commands(&payload),
            vec![UiCommand::Log("Career selected: data scientist".into())]
        );
        assert!(career_select_commands(&EventPayload::default()).is_empty());
    }

    #[test]
    fn invalid_submit_is_cancelled() {
        let invalid = EventPayload {
            valid: Some(false),
            ..Default::default()
        };
        let commands = form_submit_commands(&invalid);
        assert_eq!(commands[0], UiCommand::CancelEvent);
        assert_eq!(commands.len(), 2);

        let valid = EventPayload {
            valid: Some(true),
            ..Default::default()
        };
        assert_eq!(
            form_submit_commands(&valid),
            vec![UiCommand::AddClass {
                target: Target::Current,
                class: "was-validated"
            }]
        );
    }

    #[test]
    fn step_commands_show_one_step() {
        let mut form = crate::form::MultiStepForm::new(3);
        form.advance(&[]);
        let commands = step_commands(&form.view().unwrap());
        assert!(commands.contains(&UiCommand::RemoveClass {
            target: Target::Nth(FORM_STEPS, 1),
            class: "d-none"
        }));
        assert!(commands.contains(&UiCommand::SetDisabled {
            target: Target::All(PREV_BUTTONS),
            disabled: false
        }));
        assert!(commands.contains(&UiCommand::SetText {
            target: Target::All(NEXT_BUTTONS),
            text: "Next".into()
        }));
    }

    #[test]
    fn step_commands_progress_width() {
        let form = crate::form::MultiStepForm::new(4);
        let commands = step_commands(&form.view().unwrap());
        assert!(commands.contains(&UiCommand::SetStyle {
            target: Target::All(PROGRESS_BAR),
            property: "width",
            value: "25%".into()
        }));
        assert!(commands.contains(&UiCommand::SetAttribute {
            target: Target::All(PROGRESS_BAR),
            name: "aria-valuenow",
            value: "25".into()
        }));
    }

    #[test]
    fn bootstrap_widgets_match_their_toggle() {
        for (selector, component) in BOOTSTRAP_WIDGETS {
            let toggle = component.to_lowercase();
            assert_eq!(selector, format!("[data-bs-toggle=\"{toggle}\"]"));
        }
    }
}
