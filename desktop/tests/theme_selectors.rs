#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the dashboard components rely on (sidebar inputs,
  judge verdict tones, timeline legend) remain present in the shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class the Rust markup still emits.

How it works:
- The theme is embedded with `include_str!` from the shared `ui/` location
  (mirrors the constant in `desktop/src/main.rs`).
- A substring presence check over a curated list of selectors.

If you rename or remove a selector, update the component markup first, then
adjust REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Header
    ".navbar__inner",
    ".navbar__brand-link",
    ".navbar__locale",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dashboard layout
    ".dashboard {",
    ".dashboard__main",
    ".dashboard__judge",
    ".dashboard-tabs__tab",
    ".dashboard-tabs__tab--active",
    ".dashboard-card",
    ".dashboard-card__header",
    ".dashboard-card__meta--error",
    // Sidebar
    ".routine-input__slider",
    ".routine-input__swatch",
    ".routine-input__total",
    ".routine-input__warning",
    // Judge
    ".judge-panel__actions",
    ".judge-panel__pending",
    ".judge-result__metric-value",
    // Visualizations
    ".chart-panel__image",
    ".timeline-panel__image",
    ".timeline-panel__legend",
    ".timeline-panel__swatch",
    ".dashboard-download",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

/// Every tone the judge verdict can take maps to a modifier class.
const VERDICT_TONES: &[&str] = &["prompt", "success", "caution", "alarm"];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn verdict_tones_are_styled() {
    let missing: Vec<_> = VERDICT_TONES
        .iter()
        .filter(|tone| !THEME_CSS.contains(&format!(".judge-result--{tone}")))
        .collect();
    assert!(
        missing.is_empty(),
        "Judge verdict tone classes missing: {missing:?}"
    );
}
