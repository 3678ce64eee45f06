//! Lint: keep chart data deterministic and browser access in one place.
//!
//! Only `src/dom.rs` may talk to the browser (`web_sys`, `js_sys`,
//! `wasm_bindgen`). Everything else has to run under `cargo test` on the
//! host, so a stray DOM call there would only fail in the browser.
//!
//! Chart inputs must come from page data. Placeholder scores from a random
//! source render plausible-looking charts that mean nothing, so no module
//! may reach for randomness.

use std::fs;
use std::path::Path;

const BROWSER_CRATES: [&str; 3] = ["web_sys", "js_sys", "wasm_bindgen"];
const RANDOM_SOURCES: [&str; 4] = ["rand::", "Math.random", "Math::random", "getrandom"];
const BROWSER_MODULE: &str = "dom.rs";

/// Lines (1-based) that mention any of `needles` outside comments.
fn find_uses(source: &str, needles: &[&str]) -> Vec<(usize, String)> {
    let mut hits = Vec::new();
    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        if needles.iter().any(|n| line.contains(n)) {
            hits.push((line_num_0 + 1, trimmed.to_string()));
        }
    }
    hits
}

fn source_files() -> Vec<(String, String)> {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    visit(&src_dir, &mut files);
    files
}

fn visit(dir: &Path, files: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit(&path, files);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            files.push((path.display().to_string(), source));
        }
    }
}

fn report(title: &str, violations: &[(String, usize, String)]) {
    if violations.is_empty() {
        return;
    }
    let mut msg = format!("{title}\n\n");
    for (file, line_num, line) in violations {
        msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
    }
    panic!("{}", msg);
}

#[test]
fn browser_access_only_in_dom_module() {
    let mut violations = Vec::new();
    for (path, source) in source_files() {
        if path.ends_with(BROWSER_MODULE) {
            continue;
        }
        for (line_num, line) in find_uses(&source, &BROWSER_CRATES) {
            violations.push((path.clone(), line_num, line));
        }
    }
    report("Browser APIs used outside src/dom.rs:", &violations);
}

#[test]
fn no_random_chart_data() {
    let mut violations = Vec::new();
    for (path, source) in source_files() {
        for (line_num, line) in find_uses(&source, &RANDOM_SOURCES) {
            violations.push((path.clone(), line_num, line));
        }
    }
    report("Random sources found; chart data must come from the page:", &violations);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_browser_call() {
        let source = "let w = web_sys::window();";
        assert_eq!(find_uses(source, &BROWSER_CRATES).len(), 1);
    }

    #[test]
    fn ignores_comments() {
        let source = "// web_sys::window() lives in dom.rs\n/// js_sys::Reflect";
        assert!(find_uses(source, &BROWSER_CRATES).is_empty());
    }

    #[test]
    fn reports_line_numbers() {
        let source = "fn a() {}\nlet x = rand::random::<u8>();";
        assert_eq!(find_uses(source, &RANDOM_SOURCES), vec![(2, "let x = rand::random::<u8>();".to_string())]);
    }
}
