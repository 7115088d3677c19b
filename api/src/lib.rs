//! Domain model and remote judge client shared by the LifeRhythm front-ends.
//!
//! Nothing in here touches Dioxus; the `ui` crate owns presentation and
//! session state and only calls into [`judge::JudgeClient`].

pub mod judge;
pub mod routine;

pub use judge::{JudgeClient, JudgeConfig, JudgeResult};
pub use routine::{format_hours, Category, RoutineInput};
