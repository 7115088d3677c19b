//! Daily routine input: hours spent per fixed category.

use serde::{Deserialize, Serialize};

/// Hours in a day; totals above this are "over budget" but still accepted.
pub const DAY_HOURS: f64 = 24.0;

/// The five fixed life-activity buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sleep,
    Study,
    Screen,
    Exercise,
    Social,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sleep,
        Category::Study,
        Category::Screen,
        Category::Exercise,
        Category::Social,
    ];

    /// Stable English name, used in the judge prompt and on chart axes.
    pub fn name(self) -> &'static str {
        match self {
            Category::Sleep => "Sleep",
            Category::Study => "Study",
            Category::Screen => "Screen",
            Category::Exercise => "Exercise",
            Category::Social => "Social",
        }
    }

    /// Lowercase slug for ids and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Study => "study",
            Category::Screen => "screen",
            Category::Exercise => "exercise",
            Category::Social => "social",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Hours per category. Always holds exactly one value for each [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutineInput {
    hours: [f64; 5],
}

impl RoutineInput {
    pub fn zero() -> Self {
        Self { hours: [0.0; 5] }
    }

    /// Build from values given in [`Category::ALL`] order.
    pub fn from_hours(hours: [f64; 5]) -> Self {
        let mut input = Self::zero();
        for (category, value) in Category::ALL.into_iter().zip(hours) {
            input.set(category, value);
        }
        input
    }

    pub fn hours(&self, category: Category) -> f64 {
        self.hours[category.index()]
    }

    /// Store `hours` for `category`. Negative or non-finite values become
    /// zero; there is no other upper bound.
    pub fn set(&mut self, category: Category, hours: f64) {
        let value = if !hours.is_finite() || hours < 0.0 {
            0.0
        } else {
            hours
        };
        self.hours[category.index()] = value;
    }

    pub fn with(mut self, category: Category, hours: f64) -> Self {
        self.set(category, hours);
        self
    }

    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }

    pub fn is_over_budget(&self) -> bool {
        self.total() > DAY_HOURS
    }

    /// `(category, hours)` pairs in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.hours(c)))
    }
}

impl Default for RoutineInput {
    /// Slider defaults of a fresh session.
    fn default() -> Self {
        Self::from_hours([7.0, 6.0, 3.0, 1.0, 2.0])
    }
}

/// Hour value as shown to users and the judge: always carries a decimal
/// part (`7.0`, `0.5`, `12.25`).
pub fn format_hours(hours: f64) -> String {
    format!("{hours:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_slider_defaults() {
        let input = RoutineInput::default();
        assert_eq!(input.hours(Category::Sleep), 7.0);
        assert_eq!(input.hours(Category::Social), 2.0);
        assert_eq!(input.total(), 19.0);
        assert!(!input.is_over_budget());
    }

    #[test]
    fn iter_yields_every_category_once_in_order() {
        let names: Vec<_> = RoutineInput::zero().iter().map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["Sleep", "Study", "Screen", "Exercise", "Social"]);
    }

    #[test]
    fn over_budget_is_accepted_unmodified() {
        let input = RoutineInput::zero()
            .with(Category::Sleep, 20.0)
            .with(Category::Screen, 24.0);
        assert_eq!(input.total(), 44.0);
        assert!(input.is_over_budget());
        assert_eq!(input.hours(Category::Screen), 24.0);
    }

    #[test]
    fn negative_and_nan_hours_are_zeroed() {
        let input = RoutineInput::zero()
            .with(Category::Study, -3.0)
            .with(Category::Exercise, f64::NAN);
        assert_eq!(input.hours(Category::Study), 0.0);
        assert_eq!(input.hours(Category::Exercise), 0.0);
    }

    #[test]
    fn infinite_hours_are_zeroed() {
        let input = RoutineInput::from_hours([f64::INFINITY, 6.0, f64::NEG_INFINITY, 1.0, 2.0]);
        assert_eq!(input.hours(Category::Sleep), 0.0);
        assert_eq!(input.hours(Category::Screen), 0.0);
        assert_eq!(input.total(), 9.0);
        assert!(input.total().is_finite());
    }

    #[test]
    fn hours_always_show_a_decimal() {
        assert_eq!(format_hours(7.0), "7.0");
        assert_eq!(format_hours(0.5), "0.5");
        assert_eq!(format_hours(12.25), "12.25");
    }
}
