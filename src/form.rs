//! Form behavior that does not need a browser: multi-step navigation,
//! required-field checks, and resume upload validation.
//!
//! The DOM layer reads inputs into [`FieldSnapshot`]s, asks these types what
//! should happen, and applies the answer.

/// What the page knows about one input when "Next" is pressed.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    pub required: bool,
    pub value: String,
}

impl FieldSnapshot {
    pub fn new(required: bool, value: impl Into<String>) -> Self {
        Self {
            required,
            value: value.into(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.required && self.value.is_empty()
    }
}

/// Result of pressing "Next".
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// One flag per field of the step that was validated, `true` = mark `is-invalid`.
    pub invalid: Vec<bool>,
    pub moved: bool,
}

/// How the form should look for the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepView {
    pub visible_step: usize,
    pub progress_percent: f64,
    pub prev_disabled: bool,
    pub next_label: &'static str,
    pub next_type: &'static str,
    pub next_class: &'static str,
    pub stale_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultiStepForm {
    step_count: usize,
    current: usize,
}

impl MultiStepForm {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_last(&self) -> bool {
        self.step_count > 0 && self.current == self.step_count - 1
    }

    /// Validate the current step's fields and move forward if they pass.
    pub fn advance(&mut self, fields: &[FieldSnapshot]) -> StepOutcome {
        let invalid: Vec<bool> = fields.iter().map(FieldSnapshot::is_invalid).collect();
        let valid = !invalid.iter().any(|bad| *bad);
        let moved = valid && self.current + 1 < self.step_count;
        if moved {
            self.current += 1;
        }
        StepOutcome { invalid, moved }
    }

    /// Move back one step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// `None` for a form without steps.
    pub fn view(&self) -> Option<StepView> {
        if self.step_count == 0 {
            return None;
        }
        let last = self.is_last();
        Some(StepView {
            visible_step: self.current,
            progress_percent: (self.current + 1) as f64 / self.step_count as f64 * 100.0,
            prev_disabled: self.current == 0,
            next_label: if last { "Submit" } else { "Next" },
            next_type: if last { "submit" } else { "button" },
            next_class: if last { "btn-success" } else { "btn-primary" },
            stale_class: if last { "btn-primary" } else { "btn-success" },
        })
    }
}

// ── Resume upload ─────────────────────────────────────────────────────

pub const ACCEPTED_UPLOAD_TYPES: [&str; 1] = ["application/pdf"];
pub const EMPTY_FILE_LABEL: &str = "Choose file";
pub const UPLOAD_REJECTED: &str = "Please upload a PDF file";

/// A selected file as reported by the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadCheck {
    /// Show this text on the file label.
    Accepted { label: String },
    /// Alert, clear the input, reset the label.
    Rejected,
}

pub fn check_resume_upload(file: Option<&FileInfo>) -> UploadCheck {
    match file {
        None => UploadCheck::Accepted {
            label: EMPTY_FILE_LABEL.to_string(),
        },
        Some(f) if ACCEPTED_UPLOAD_TYPES.contains(&f.mime.as_str()) => UploadCheck::Accepted {
            label: if f.name.is_empty() {
                EMPTY_FILE_LABEL.to_string()
            } else {
                f.name.clone()
            },
        },
        Some(_) => UploadCheck::Rejected,
    }
}
