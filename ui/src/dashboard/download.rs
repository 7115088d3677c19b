use api::RoutineInput;
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::platform;
use crate::render::{BarChart, RenderError, TimelineStrip};
use crate::t;

/// Filename of the downloadable timeline strip.
pub const TIMELINE_FILENAME: &str = "my_life_rhythm.png";
pub const CHART_FILENAME: &str = "my_life_rhythm_chart.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Timeline,
    Chart,
}

impl Artifact {
    pub fn filename(self) -> &'static str {
        match self {
            Artifact::Timeline => TIMELINE_FILENAME,
            Artifact::Chart => CHART_FILENAME,
        }
    }

    pub fn render(self, routine: &RoutineInput) -> Result<Vec<u8>, RenderError> {
        match self {
            Artifact::Timeline => TimelineStrip::layout(routine).to_png(),
            Artifact::Chart => BarChart::layout(routine).to_png(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum DownloadStatus {
    Idle,
    Working,
    Done(Option<String>),
    Error(String),
}

/// Button rendering `artifact` for the current routine and handing it to
/// the platform download path.
#[component]
pub fn DownloadButton(artifact: Artifact, routine: RoutineInput) -> Element {
    let mut status = use_signal(|| DownloadStatus::Idle);

    let label = match artifact {
        Artifact::Timeline => t!("download-timeline"),
        Artifact::Chart => t!("download-chart"),
    };

    let feedback = match status() {
        DownloadStatus::Idle => None,
        DownloadStatus::Working => Some(("dashboard-card__meta".to_string(), t!("download-working"))),
        DownloadStatus::Done(Some(path)) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {}", t!("download-saved", path = path)),
        )),
        DownloadStatus::Done(None) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {}", t!("download-started")),
        )),
        DownloadStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let busy = status() == DownloadStatus::Working;

    let on_download = move |_| {
        if status() == DownloadStatus::Working {
            return;
        }
        status.set(DownloadStatus::Working);
        let outcome = artifact
            .render(&routine)
            .map_err(|err| err.to_string())
            .and_then(|bytes| platform::deliver_download(artifact.filename(), "image/png", bytes));
        match outcome {
            Ok(saved) => {
                info!(file = artifact.filename(), ?saved, "download delivered");
                status.set(DownloadStatus::Done(saved));
            }
            Err(err) => {
                warn!(file = artifact.filename(), %err, "download failed");
                status.set(DownloadStatus::Error(err));
            }
        }
    };

    rsx! {
        div { class: "dashboard-download",
            button {
                r#type: "button",
                class: "button",
                disabled: busy,
                onclick: on_download,
                "⬇️ {label}"
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
