use api::RoutineInput;
use dioxus::prelude::*;

use super::{category_label, Artifact, DownloadButton};
use crate::core::format;
use crate::render::{data_url, TimelineStrip};
use crate::t;

#[component]
pub fn TimelinePanel(routine: RoutineInput) -> Element {
    let strip = TimelineStrip::layout(&routine);
    let image = strip.to_png().map(|bytes| data_url("image/png", &bytes));
    let alt = t!("timeline-alt");

    let legend: Vec<(String, String, String)> = strip
        .segments
        .iter()
        .map(|segment| {
            let (name, hours) = match segment.category {
                Some(category) => (category_label(category), routine.hours(category)),
                None => (
                    t!("timeline-unused"),
                    strip.scale_hours - routine.total(),
                ),
            };
            (segment.color.to_hex(), name, format::format_hours_label(hours))
        })
        .collect();

    rsx! {
        section { class: "dashboard-card timeline-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("timeline-title")} }
            }
            p { {t!("timeline-intro")} }

            match image {
                Ok(src) => rsx! {
                    img { class: "timeline-panel__image", src: "{src}", alt: "{alt}" }
                },
                Err(err) => rsx! {
                    p { class: "dashboard-card__meta dashboard-card__meta--error", "⚠️ {err}" }
                },
            }

            ul { class: "timeline-panel__legend",
                for (color, name, hours) in legend {
                    li { class: "timeline-panel__legend-item",
                        span { class: "timeline-panel__swatch", style: "background: {color}" }
                        span { "{name}" }
                        span { class: "timeline-panel__hours", "{hours}" }
                    }
                }
            }

            DownloadButton { artifact: Artifact::Timeline, routine }
        }
    }
}
