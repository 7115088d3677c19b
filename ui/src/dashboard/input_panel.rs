use api::{Category, RoutineInput};
use dioxus::prelude::*;

use super::category_label;
use crate::core::{format, palette};
use crate::t;

const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 24.0;
const SLIDER_STEP: f64 = 0.5;

/// Five independent range inputs plus the running total. Totals above 24 h
/// only raise a warning; nothing is rejected.
#[component]
pub fn RoutineInputPanel(routine: Signal<RoutineInput>) -> Element {
    let current = routine();
    let total = current.total();
    let total_label = format::format_hours_label(total);

    rsx! {
        aside { class: "routine-input",
            h2 { "📝 " {t!("input-title")} }
            p { class: "routine-input__hint", {t!("input-hint")} }

            for category in Category::ALL {
                {render_slider(category, current.hours(category), routine)}
            }

            div { class: "routine-input__total",
                span { class: "routine-input__total-label", {t!("input-total-label")} }
                strong { class: "routine-input__total-value", "{total_label}" }
            }

            if current.is_over_budget() {
                p { class: "routine-input__warning",
                    "⚠️ "
                    {t!("input-over-budget", total = format::format_hours(total))}
                }
            }
        }
    }
}

fn render_slider(category: Category, hours: f64, routine: Signal<RoutineInput>) -> Element {
    let id = format!("routine-{}", category.slug());
    let label = category_label(category);
    let swatch = palette::color_for(category).to_hex();
    let value_label = format::format_hours_label(hours);

    rsx! {
        div { class: "routine-input__field",
            label { class: "routine-input__label", r#for: "{id}",
                span { class: "routine-input__swatch", style: "background: {swatch}" }
                span { class: "routine-input__name", "{label}" }
                span { class: "routine-input__value", "{value_label}" }
            }
            input {
                id: "{id}",
                class: "routine-input__slider",
                r#type: "range",
                min: "{SLIDER_MIN}",
                max: "{SLIDER_MAX}",
                step: "{SLIDER_STEP}",
                value: "{hours}",
                oninput: move |evt: FormEvent| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        let mut routine = routine;
                        routine.with_mut(|r| r.set(category, value));
                    }
                },
            }
        }
    }
}
