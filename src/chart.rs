//! Declarative Chart.js configuration.
//!
//! Every chart on the page is a [`ChartConfig`]: a kind, labels, datasets,
//! and a small [`ChartOptions`] record. `to_json()` renders the object that
//! `new Chart(ctx, config)` expects. Nothing here touches the DOM.

use serde_json::{json, Map, Value};

// ── Palette ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub const BLUE: Color = Color::new(54, 162, 235);
pub const PINK: Color = Color::new(255, 99, 132);
pub const TEAL: Color = Color::new(75, 192, 192);
pub const GREEN: Color = Color::new(40, 167, 69);
pub const GRAY: Color = Color::new(108, 117, 125);
pub const RED: Color = Color::new(220, 53, 69);
pub const PURPLE: Color = Color::new(153, 102, 255);
pub const SILVER: Color = Color::new(201, 203, 207);
pub const YELLOW: Color = Color::new(255, 205, 86);

/// First and second series colors when two careers are compared.
pub const SERIES: [Color; 2] = [BLUE, PINK];

// ── Kinds ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartKind {
    Radar,
    Bar,
    /// Bars laid out along the y axis (`bar` with `indexAxis: "y"`).
    HorizontalBar,
    Doughnut,
}

impl ChartKind {
    pub fn js_type(self) -> &'static str {
        match self {
            ChartKind::Radar => "radar",
            ChartKind::Bar | ChartKind::HorizontalBar => "bar",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Scale key that carries the values, if the kind has one.
    fn value_scale(self) -> Option<&'static str> {
        match self {
            ChartKind::Bar => Some("y"),
            ChartKind::HorizontalBar => Some("x"),
            ChartKind::Radar => Some("r"),
            ChartKind::Doughnut => None,
        }
    }
}

// ── Datasets ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    All(String),
    Each(Vec<String>),
}

impl Paint {
    fn to_json(&self) -> Value {
        match self {
            Paint::All(c) => json!(c),
            Paint::Each(cs) => json!(cs),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background: Paint,
    pub border: Option<Paint>,
    pub border_width: Option<u32>,
    /// Radar point colors: the series color, with white highlights.
    pub points: Option<Color>,
    pub fill: bool,
    pub hover_offset: Option<u32>,
}

impl Dataset {
    pub fn new(label: Option<String>, data: Vec<f64>, background: Paint) -> Self {
        Self {
            label,
            data,
            background,
            border: None,
            border_width: None,
            points: None,
            fill: false,
            hover_offset: None,
        }
    }

    /// A translucent radar series with solid outline and points.
    pub fn radar_series(label: impl Into<String>, data: Vec<f64>, color: Color) -> Self {
        Self {
            border: Some(Paint::All(color.rgb())),
            points: Some(color),
            ..Self::new(Some(label.into()), data, Paint::All(color.rgba(0.2)))
        }
    }

    /// Bars of one color, solid border.
    pub fn bars(label: impl Into<String>, data: Vec<f64>, color: Color, alpha: f64) -> Self {
        Self {
            border: Some(Paint::All(color.rgba(1.0))),
            border_width: Some(1),
            ..Self::new(Some(label.into()), data, Paint::All(color.rgba(alpha)))
        }
    }

    pub fn with_fill(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn with_border(mut self, border: Paint, width: u32) -> Self {
        self.border = Some(border);
        self.border_width = Some(width);
        self
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(label) = &self.label {
            obj.insert("label".into(), json!(label));
        }
        obj.insert("data".into(), json!(self.data));
        if self.fill {
            obj.insert("fill".into(), json!(true));
        }
        obj.insert("backgroundColor".into(), self.background.to_json());
        if let Some(border) = &self.border {
            obj.insert("borderColor".into(), border.to_json());
        }
        if let Some(width) = self.border_width {
            obj.insert("borderWidth".into(), json!(width));
        }
        if let Some(color) = self.points {
            obj.insert("pointBackgroundColor".into(), json!(color.rgb()));
            obj.insert("pointBorderColor".into(), json!("#fff"));
            obj.insert("pointHoverBackgroundColor".into(), json!("#fff"));
            obj.insert("pointHoverBorderColor".into(), json!(color.rgb()));
        }
        if let Some(offset) = self.hover_offset {
            obj.insert("hoverOffset".into(), json!(offset));
        }
        Value::Object(obj)
    }
}

// ── Options ───────────────────────────────────────────────────────────

/// The scale carrying the values (y for bars, x for horizontal bars, r for radar).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueAxis {
    pub title: Option<String>,
    pub begin_at_zero: bool,
    pub hidden: bool,
    pub max: Option<f64>,
    /// Radar only: draw angle lines between the axes.
    pub angle_lines: bool,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
}

/// How hovering a data point is described. Chart.js tooltips are JS
/// callbacks, so this is kept out of the JSON and installed by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tooltip {
    #[default]
    Default,
    /// "label: value (share%)" against the dataset total.
    ShareOfTotal,
    /// "Rating: value out of max".
    RatingOutOf(u32),
    /// Extra line under each point, indexed by data position.
    AfterLabel(Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: bool,
    pub value_axis: Option<ValueAxis>,
    pub line_width: Option<u32>,
    pub tooltip: Tooltip,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: true,
            legend: true,
            value_axis: None,
            line_width: None,
            tooltip: Tooltip::Default,
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            labels,
            datasets: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn to_json(&self) -> Value {
        let datasets: Vec<Value> = self.datasets.iter().map(Dataset::to_json).collect();

        let mut options = Map::new();
        if self.kind == ChartKind::HorizontalBar {
            options.insert("indexAxis".into(), json!("y"));
        }
        options.insert("responsive".into(), json!(self.options.responsive));
        options.insert(
            "maintainAspectRatio".into(),
            json!(self.options.maintain_aspect_ratio),
        );
        if let Some(width) = self.options.line_width {
            options.insert("elements".into(), json!({ "line": { "borderWidth": width } }));
        }
        if let (Some(axis), Some(key)) = (&self.options.value_axis, self.kind.value_scale()) {
            let mut scales = Map::new();
            scales.insert(key.into(), axis_json(axis));
            options.insert("scales".into(), Value::Object(scales));
        }
        if !self.options.legend {
            options.insert("plugins".into(), json!({ "legend": { "display": false } }));
        }

        json!({
            "type": self.kind.js_type(),
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": Value::Object(options),
        })
    }
}

fn axis_json(axis: &ValueAxis) -> Value {
    let mut obj = Map::new();
    if axis.hidden {
        obj.insert("display".into(), json!(false));
    }
    if axis.begin_at_zero {
        obj.insert("beginAtZero".into(), json!(true));
    }
    if let Some(max) = axis.max {
        obj.insert("max".into(), json!(max));
    }
    if axis.angle_lines {
        obj.insert("angleLines".into(), json!({ "display": true }));
    }
    if let Some(min) = axis.suggested_min {
        obj.insert("suggestedMin".into(), json!(min));
    }
    if let Some(max) = axis.suggested_max {
        obj.insert("suggestedMax".into(), json!(max));
    }
    if let Some(title) = &axis.title {
        obj.insert("title".into(), json!({ "display": true, "text": title }));
    }
    Value::Object(obj)
}

// ── Tooltip text ──────────────────────────────────────────────────────

/// Render a chart value the way Chart.js shows it: no trailing `.0`.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// "Matching Skills: 3 (60%)". An all-zero dataset reads as 0%.
pub fn share_of_total_label(label: &str, value: f64, data: &[f64]) -> String {
    let total: f64 = data.iter().sum();
    let percent = if total > 0.0 {
        (value / total * 100.0).round()
    } else {
        0.0
    };
    format!("{}: {} ({}%)", label, format_value(value), format_value(percent))
}

pub fn rating_label(value: f64, max: u32) -> String {
    format!("Rating: {} out of {}", format_value(value), max)
}

/// Resolve the tooltip lines for one hovered point, per the chart's mode.
/// Returns `None` when Chart.js should use its own text.
pub fn tooltip_label(tooltip: &Tooltip, label: &str, value: f64, data: &[f64]) -> Option<String> {
    match tooltip {
        Tooltip::Default | Tooltip::AfterLabel(_) => None,
        Tooltip::ShareOfTotal => Some(share_of_total_label(label, value, data)),
        Tooltip::RatingOutOf(max) => Some(rating_label(value, *max)),
    }
}

pub fn tooltip_after_label(tooltip: &Tooltip, index: usize) -> Option<String> {
    match tooltip {
        Tooltip::AfterLabel(lines) => lines.get(index).cloned(),
        _ => None,
    }
}
