//! Formatting helpers for presenting hours and scores.

pub use api::format_hours;

pub fn format_hours_label(hours: f64) -> String {
    format!("{}h", format_hours(hours))
}

pub fn format_score(score: u32) -> String {
    format!("{score}/100")
}
