use api::RoutineInput;
use dioxus::prelude::*;

use super::{Artifact, DownloadButton};
use crate::render::{data_url, BarChart};
use crate::t;

/// Bar chart of the current routine. The SVG is shown directly so the
/// browser renders its text; the download button rasterizes it.
#[component]
pub fn ChartPanel(routine: RoutineInput) -> Element {
    let chart = BarChart::layout(&routine);
    let src = data_url("image/svg+xml", chart.to_svg().as_bytes());
    let alt = t!("chart-alt");

    rsx! {
        section { class: "dashboard-card chart-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-title")} }
            }
            img { class: "chart-panel__image", src: "{src}", alt: "{alt}" }
            DownloadButton { artifact: Artifact::Chart, routine }
        }
    }
}
