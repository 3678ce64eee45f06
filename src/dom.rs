//! Browser side of the page: implements [`Surface`] with web_sys and wires
//! the multi-step forms. Only built for wasm32.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

use crate::chart::{tooltip_after_label, tooltip_label, ChartConfig, Tooltip};
use crate::form::{FieldSnapshot, FileInfo, MultiStepForm};
use crate::page::{
    step_commands, EventPayload, BOOTSTRAP_WIDGETS, Handler, PageController, Surface, SurfaceError, Target,
    UiCommand, UiEvent, FORM_STEPS, MULTI_STEP_FORMS, NEXT_BUTTONS, PREV_BUTTONS, STEP_FIELDS,
};

/// Entry point: start now, or once the document has finished parsing.
pub fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once(start);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            web_sys::console::warn_1(&format!("career-charts: could not wait for DOM: {e:?}").into());
        }
        on_ready.forget();
    } else {
        start();
    }
}

fn start() {
    let Some(surface) = DomSurface::new() else {
        web_sys::console::warn_1(&"career-charts: no document available".into());
        return;
    };
    let document = surface.document.clone();
    start_bootstrap_widgets(&surface.window, &document);

    let mut page = PageController::new(surface);
    page.wire_handlers();
    let forms = setup_multi_step_forms(&document);
    page.setup_charts();

    if forms > 0 {
        web_sys::console::log_1(&format!("career-charts: {forms} multi-step form(s)").into());
    }
}

/// Start Bootstrap tooltips and popovers when the page loads Bootstrap.
fn start_bootstrap_widgets(window: &Window, document: &Document) {
    let bootstrap = match js_sys::Reflect::get(window, &JsValue::from_str("bootstrap")) {
        Ok(b) if b.is_object() => b,
        _ => return,
    };
    let scope = Scope::Document(document.clone());
    for (selector, component) in BOOTSTRAP_WIDGETS {
        let Some(ctor) = js_sys::Reflect::get(&bootstrap, &JsValue::from_str(component))
            .ok()
            .and_then(|c| c.dyn_into::<js_sys::Function>().ok())
        else {
            continue;
        };
        for element in scope.query_all(selector) {
            if let Err(e) = js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(&element)) {
                web_sys::console::warn_1(
                    &format!("career-charts: bootstrap.{component} failed: {e:?}").into(),
                );
            }
        }
    }
}

// ── Surface ───────────────────────────────────────────────────────────

pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn chart_constructor(&self) -> Result<js_sys::Function, SurfaceError> {
        js_sys::Reflect::get(&self.window, &JsValue::from_str("Chart"))
            .ok()
            .and_then(|ctor| ctor.dyn_into::<js_sys::Function>().ok())
            .ok_or(SurfaceError::MissingChartLibrary)
    }
}

impl Surface for DomSurface {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn data(&self, id: &str, key: &str) -> Option<String> {
        let element = self.element(id)?.dyn_into::<HtmlElement>().ok()?;
        element.dataset().get(key)
    }

    fn draw_chart(&mut self, id: &str, config: &ChartConfig) -> Result<(), SurfaceError> {
        let canvas = self
            .element(id)
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SurfaceError::NoContext(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| SurfaceError::NoContext(id.to_string()))?;

        let ctor = self.chart_constructor()?;
        let js_config = js_sys::JSON::parse(&config.to_json().to_string()).map_err(js_error)?;
        install_tooltip(&js_config, &config.options.tooltip)?;

        js_sys::Reflect::construct(&ctor, &js_sys::Array::of2(&ctx, &js_config))
            .map(|_| ())
            .map_err(js_error)
    }

    fn listen(&mut self, target: Target, event: UiEvent, handler: Handler) {
        let scope = Scope::Document(self.document.clone());
        for element in scope.resolve(&target, None) {
            let current = element.clone();
            let document = self.document.clone();
            let handler = handler.clone();
            let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                let payload = read_payload(&current, &ev);
                let commands = handler(&payload);
                apply_commands(
                    &Scope::Document(document.clone()),
                    &commands,
                    Some(&current),
                    Some(&ev),
                );
            });
            if let Err(e) = element
                .add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref())
            {
                self.warn(&format!("career-charts: could not listen for {}: {e:?}", event.dom_name()));
            }
            callback.forget();
        }
    }

    fn log(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&message.into());
    }
}

fn js_error(e: JsValue) -> SurfaceError {
    SurfaceError::Js(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

// ── Tooltips ──────────────────────────────────────────────────────────

/// `obj[key]`, creating an empty object there if it is missing.
fn child_object(obj: &JsValue, key: &str) -> Result<JsValue, SurfaceError> {
    let key = JsValue::from_str(key);
    let existing = js_sys::Reflect::get(obj, &key).map_err(js_error)?;
    if existing.is_object() {
        return Ok(existing);
    }
    let created: JsValue = js_sys::Object::new().into();
    js_sys::Reflect::set(obj, &key, &created).map_err(js_error)?;
    Ok(created)
}

fn get_number(obj: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_string()
}

fn dataset_values(context: &JsValue) -> Vec<f64> {
    js_sys::Reflect::get(context, &JsValue::from_str("dataset"))
        .and_then(|ds| js_sys::Reflect::get(&ds, &JsValue::from_str("data")))
        .ok()
        .and_then(|data| data.dyn_into::<js_sys::Array>().ok())
        .map(|arr| arr.iter().filter_map(|v| v.as_f64()).collect())
        .unwrap_or_default()
}

/// Chart.js calls these with a tooltip context; they read it and defer to
/// the pure formatters in `chart`.
fn install_tooltip(js_config: &JsValue, tooltip: &Tooltip) -> Result<(), SurfaceError> {
    if *tooltip == Tooltip::Default {
        return Ok(());
    }
    let options = child_object(js_config, "options")?;
    let plugins = child_object(&options, "plugins")?;
    let tooltip_obj = child_object(&plugins, "tooltip")?;
    let callbacks = child_object(&tooltip_obj, "callbacks")?;

    let (name, callback) = match tooltip {
        Tooltip::AfterLabel(_) => {
            let mode = tooltip.clone();
            let cb = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
                let index = get_number(&context, "dataIndex").unwrap_or(0.0) as usize;
                tooltip_after_label(&mode, index)
                    .map(|s| JsValue::from_str(&s))
                    .unwrap_or(JsValue::UNDEFINED)
            });
            ("afterLabel", cb)
        }
        _ => {
            let mode = tooltip.clone();
            let cb = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |context: JsValue| {
                let label = get_string(&context, "label").unwrap_or_default();
                let value = get_number(&context, "raw")
                    .or_else(|| get_number(&context, "parsed"))
                    .unwrap_or(0.0);
                tooltip_label(&mode, &label, value, &dataset_values(&context))
                    .map(|s| JsValue::from_str(&s))
                    .unwrap_or(JsValue::UNDEFINED)
            });
            ("label", cb)
        }
    };
    js_sys::Reflect::set(&callbacks, &JsValue::from_str(name), callback.as_ref()).map_err(js_error)?;
    callback.forget();
    Ok(())
}

// ── Commands ──────────────────────────────────────────────────────────

/// Where selectors are resolved: the whole document or one form.
enum Scope {
    Document(Document),
    Element(Element),
}

impl Scope {
    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self {
            Scope::Document(d) => d.query_selector_all(selector),
            Scope::Element(e) => e.query_selector_all(selector),
        };
        let Ok(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        match self {
            Scope::Document(d) => d.get_element_by_id(id),
            Scope::Element(e) => e.owner_document()?.get_element_by_id(id),
        }
    }

    fn resolve(&self, target: &Target, current: Option<&Element>) -> Vec<Element> {
        match target {
            Target::Id(id) => self.by_id(id).into_iter().collect(),
            Target::All(selector) => self.query_all(selector),
            Target::Nth(selector, n) => self.query_all(selector).into_iter().nth(*n).into_iter().collect(),
            Target::Current => current.cloned().into_iter().collect(),
        }
    }
}

fn apply_commands(scope: &Scope, commands: &[UiCommand], current: Option<&Element>, event: Option<&Event>) {
    for command in commands {
        match command {
            UiCommand::SetText { target, text } => {
                for el in scope.resolve(target, current) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
            UiCommand::ClearValue { target } => {
                for el in scope.resolve(target, current) {
                    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                        input.set_value("");
                    }
                }
            }
            UiCommand::AddClass { target, class } => {
                for el in scope.resolve(target, current) {
                    let _ = el.class_list().add_1(class);
                }
            }
            UiCommand::RemoveClass { target, class } => {
                for el in scope.resolve(target, current) {
                    let _ = el.class_list().remove_1(class);
                }
            }
            UiCommand::SetAttribute { target, name, value } => {
                for el in scope.resolve(target, current) {
                    let _ = el.set_attribute(name, value);
                }
            }
            UiCommand::SetStyle { target, property, value } => {
                for el in scope.resolve(target, current) {
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        let _ = html.style().set_property(property, value);
                    }
                }
            }
            UiCommand::SetDisabled { target, disabled } => {
                for el in scope.resolve(target, current) {
                    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                        button.set_disabled(*disabled);
                    }
                }
            }
            UiCommand::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
            UiCommand::Log(message) => web_sys::console::log_1(&message.into()),
            UiCommand::CancelEvent => {
                if let Some(ev) = event {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
            }
        }
    }
}

// ── Reading elements ──────────────────────────────────────────────────

fn element_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        el.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
    }
}

fn read_payload(el: &Element, _event: &Event) -> EventPayload {
    let file = el
        .dyn_ref::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .map(|f| FileInfo {
            name: f.name(),
            mime: f.type_(),
        });
    EventPayload {
        value: element_value(el),
        file,
        valid: el.dyn_ref::<HtmlFormElement>().map(|f| f.check_validity()),
    }
}

// ── Multi-step forms ──────────────────────────────────────────────────

/// Wire every `.multi-step-form` on the page. Returns how many were found.
fn setup_multi_step_forms(document: &Document) -> usize {
    let forms = Scope::Document(document.clone()).query_all(MULTI_STEP_FORMS);
    for form in &forms {
        wire_multi_step_form(form.clone());
    }
    forms.len()
}

fn listen_or_warn(element: &Element, event: UiEvent, callback: &Closure<dyn FnMut(Event)>) {
    if let Err(e) = element.add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref()) {
        web_sys::console::warn_1(
            &format!("career-charts: could not listen for {}: {e:?}", event.dom_name()).into(),
        );
    }
}

fn wire_multi_step_form(form: Element) {
    let scope = Rc::new(Scope::Element(form));
    let steps = Rc::new(scope.query_all(FORM_STEPS));
    let state = Rc::new(RefCell::new(MultiStepForm::new(steps.len())));

    let show = {
        let scope = scope.clone();
        move |state: &MultiStepForm| {
            if let Some(view) = state.view() {
                apply_commands(&scope, &step_commands(&view), None, None);
            }
        }
    };
    show(&*state.borrow());
    let show = Rc::new(show);

    for button in scope.query_all(NEXT_BUTTONS) {
        let steps = steps.clone();
        let state = state.clone();
        let show = show.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            let mut form = state.borrow_mut();
            let Some(step) = steps.get(form.current()) else {
                return;
            };
            let fields = Scope::Element(step.clone()).query_all(STEP_FIELDS);
            let snapshots: Vec<FieldSnapshot> = fields
                .iter()
                .map(|f| FieldSnapshot::new(f.has_attribute("required"), element_value(f).unwrap_or_default()))
                .collect();

            let outcome = form.advance(&snapshots);
            for (field, invalid) in fields.iter().zip(outcome.invalid) {
                let classes = field.class_list();
                let _ = if invalid {
                    classes.add_1("is-invalid")
                } else {
                    classes.remove_1("is-invalid")
                };
            }
            if outcome.moved {
                show(&*form);
            }
        });
        listen_or_warn(&button, UiEvent::Click, &on_click);
        on_click.forget();
    }

    for button in scope.query_all(PREV_BUTTONS) {
        let state = state.clone();
        let show = show.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            let mut form = state.borrow_mut();
            if form.retreat() {
                show(&*form);
            }
        });
        listen_or_warn(&button, UiEvent::Click, &on_click);
        on_click.forget();
    }
}
