use api::judge::Transport;
use api::{JudgeClient, RoutineInput};
use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, info};

use crate::core::format;
use crate::core::session::{EvaluationState, JudgeDisplay, JudgeSession};
use crate::t;

/// Requests from the judge panel to the evaluation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JudgeCommand {
    Evaluate(RoutineInput),
    Cancel,
}

/// Evaluation loop owned by the calling component.
///
/// The request task is spawned from the loop, so it lives as long as the
/// caller and survives the panel being unmounted (switching tabs). Each
/// `Evaluate` opens a new run in the session and aborts the previous request;
/// completions are handed back with their run id, so a superseded or
/// cancelled run can never overwrite a newer verdict.
pub fn use_judge_runner<T>(
    session: Signal<JudgeSession>,
    make_client: impl FnOnce() -> JudgeClient<T>,
) -> Coroutine<JudgeCommand>
where
    T: Transport + Clone + 'static,
{
    let client = use_hook(make_client);

    use_coroutine(move |mut rx: UnboundedReceiver<JudgeCommand>| {
        let client = client.clone();
        let mut session = session;

        async move {
            let mut in_flight: Option<Task> = None;

            while let Some(command) = rx.next().await {
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }

                match command {
                    JudgeCommand::Evaluate(input) => {
                        let run_id = session.with_mut(|s| s.begin());
                        info!(run_id, total_hours = input.total(), "judge evaluation started");

                        let client = client.clone();
                        in_flight = Some(spawn(async move {
                            let result = client.evaluate(&input).await;
                            let score = result.score;
                            if session.with_mut(|s| s.complete(run_id, result)) {
                                info!(run_id, score, "judge evaluation stored");
                            } else {
                                debug!(run_id, "discarding superseded judge verdict");
                            }
                        }));
                    }
                    JudgeCommand::Cancel => {
                        if let Some(run_id) = session.with_mut(|s| s.cancel()) {
                            info!(run_id, "judge evaluation cancelled");
                        }
                    }
                }
            }
        }
    })
}

/// Evaluate button, pending/cancel controls and the verdict box. Commands go
/// to the runner installed by [`use_judge_runner`] in an ancestor.
#[component]
pub fn JudgePanel(routine: Signal<RoutineInput>, session: Signal<JudgeSession>) -> Element {
    let runner = use_coroutine_handle::<JudgeCommand>();

    let evaluate = move |_| runner.send(JudgeCommand::Evaluate(routine()));
    let cancel = move |_| runner.send(JudgeCommand::Cancel);

    let snapshot = session();
    let pending = snapshot.is_pending();
    let cancelled = snapshot.state() == EvaluationState::Cancelled;

    rsx! {
        section { class: "dashboard-card judge-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("judge-title")} }
            }
            p { {t!("judge-intro")} }

            div { class: "judge-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: pending,
                    onclick: evaluate,
                    "⚖️ "
                    {t!("judge-evaluate")}
                }
                if pending {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: cancel,
                        {t!("judge-cancel")}
                    }
                }
            }

            if pending {
                p { class: "judge-panel__pending", {t!("judge-pending")} }
            } else if cancelled {
                p { class: "dashboard-card__meta", {t!("judge-cancelled")} }
            }

            match snapshot.display() {
                JudgeDisplay::Prompt => rsx! {
                    div { class: "judge-result judge-result--prompt",
                        "👈 "
                        {t!("judge-prompt")}
                    }
                },
                JudgeDisplay::Verdict { score, advice, tone } => rsx! {
                    div { class: "judge-result__metric",
                        span { class: "judge-result__metric-label", {t!("judge-score-label")} }
                        strong { class: "judge-result__metric-value", "{format::format_score(score)}" }
                    }
                    div { class: "judge-result {tone.css_class()}",
                        "🤖 "
                        strong { "AI:" }
                        " {advice}"
                    }
                },
            }
        }
    }
}
