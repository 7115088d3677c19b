//! The single-page dashboard: routine sliders on the side, two tabs of output.
//!
//! State lives in two signals installed by [`use_dashboard_provider`] in the
//! app root, above the subtree a language switch remounts. `routine` is
//! rewritten by every slider move and read by the renderers. `session` holds
//! the judge state and is only written by the judge runner, which is
//! installed alongside it so an evaluation keeps running while the timeline
//! tab is shown or the language changes.

mod chart_panel;
mod download;
mod input_panel;
mod judge_panel;
mod timeline_panel;

pub use chart_panel::ChartPanel;
pub use download::{Artifact, DownloadButton};
pub use input_panel::RoutineInputPanel;
pub use judge_panel::{use_judge_runner, JudgeCommand, JudgePanel};
pub use timeline_panel::TimelinePanel;

use api::{Category, JudgeClient, JudgeConfig, RoutineInput};
use dioxus::prelude::*;

use crate::core::session::JudgeSession;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Judge,
    Timeline,
}

/// Signals shared by every dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardState {
    pub routine: Signal<RoutineInput>,
    pub session: Signal<JudgeSession>,
}

/// Create the dashboard state and start the judge runner in the calling
/// scope, then provide both as context. Call once from the app root.
pub fn use_dashboard_provider() -> DashboardState {
    let routine = use_signal(RoutineInput::default);
    let session = use_signal(JudgeSession::new);
    use_judge_runner(session, || JudgeClient::new(JudgeConfig::from_env()));
    use_context_provider(|| DashboardState { routine, session })
}

/// Requires [`use_dashboard_provider`] in an ancestor.
#[component]
pub fn Dashboard() -> Element {
    let DashboardState { routine, session } = use_context::<DashboardState>();
    let mut active_tab = use_signal(|| DashboardTab::Judge);

    let tab_class = move |tab: DashboardTab| {
        if active_tab() == tab {
            "dashboard-tabs__tab dashboard-tabs__tab--active"
        } else {
            "dashboard-tabs__tab"
        }
    };

    rsx! {
        div { class: "dashboard",
            RoutineInputPanel { routine }

            div { class: "dashboard__main",
                div { class: "dashboard__header",
                    h1 { {t!("dashboard-title")} }
                    p { {t!("dashboard-intro")} }
                }

                div { class: "dashboard-tabs", role: "tablist",
                    button {
                        r#type: "button",
                        role: "tab",
                        class: tab_class(DashboardTab::Judge),
                        onclick: move |_| active_tab.set(DashboardTab::Judge),
                        "📊 "
                        {t!("tab-judge")}
                    }
                    button {
                        r#type: "button",
                        role: "tab",
                        class: tab_class(DashboardTab::Timeline),
                        onclick: move |_| active_tab.set(DashboardTab::Timeline),
                        "🎨 "
                        {t!("tab-timeline")}
                    }
                }

                match active_tab() {
                    DashboardTab::Judge => rsx! {
                        div { class: "dashboard__judge",
                            ChartPanel { routine: routine() }
                            JudgePanel { routine, session }
                        }
                    },
                    DashboardTab::Timeline => rsx! {
                        TimelinePanel { routine: routine() }
                    },
                }
            }
        }
    }
}

/// Localized label for a category.
pub fn category_label(category: Category) -> String {
    match category {
        Category::Sleep => t!("category-sleep"),
        Category::Study => t!("category-study"),
        Category::Screen => t!("category-screen"),
        Category::Exercise => t!("category-exercise"),
        Category::Social => t!("category-social"),
    }
}
