//! Natural-language request sent to the judge.

use url::Url;

use crate::routine::{format_hours, RoutineInput};

/// `Sleep: 7.0h, Study: 6.0h, ...` in fixed category order.
pub fn describe_routine(input: &RoutineInput) -> String {
    input
        .iter()
        .map(|(category, hours)| format!("{}: {}h", category.name(), format_hours(hours)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full instruction text asking for a `SCORE: <n>` first line and advice after it.
pub fn build_prompt(input: &RoutineInput) -> String {
    let data = describe_routine(input);
    format!(
        "Analyze this daily routine data: [{data}].\n\
         \n\
         Task 1: Evaluate the life balance and give a Score (0-100) based on your judgment.\n\
         Task 2: Give a witty, slightly savage advice in Korean based on the score.\n\
         \n\
         IMPORTANT FORMAT:\n\
         The first line MUST be exactly: \"SCORE: <number>\"\n\
         Then write your advice on the next line.\n\
         \n\
         Example:\n\
         SCORE: 75\n\
         잠이 조금 부족하네요... (Your advice here)\n"
    )
}

/// Append `prompt` as the final, percent-encoded path segment of `base`.
///
/// `base` must be able to carry path segments (see [`super::JudgeConfig`]);
/// otherwise it is returned unchanged.
pub fn request_url(base: &Url, prompt: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(prompt);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::Category;

    #[test]
    fn describes_every_category_with_hour_suffix() {
        let text = describe_routine(&RoutineInput::default());
        assert_eq!(
            text,
            "Sleep: 7.0h, Study: 6.0h, Screen: 3.0h, Exercise: 1.0h, Social: 2.0h"
        );
    }

    #[test]
    fn prompt_embeds_data_and_format_instruction() {
        let input = RoutineInput::zero().with(Category::Screen, 13.5);
        let prompt = build_prompt(&input);
        assert!(prompt.contains("[Sleep: 0.0h, Study: 0.0h, Screen: 13.5h"));
        assert!(prompt.contains("The first line MUST be exactly: \"SCORE: <number>\""));
        assert!(prompt.contains("in Korean"));
    }

    #[test]
    fn prompt_becomes_single_encoded_path_segment() {
        let base = Url::parse("https://text.pollinations.ai/").unwrap();
        let url = request_url(&base, "Score this: a/b?\nSCORE: <n>");

        assert_eq!(url.host_str(), Some("text.pollinations.ai"));
        assert_eq!(url.query(), None);
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].contains(' '));
        assert!(!segments[0].contains('/'));
        assert!(segments[0].contains("%0A"));
    }

    #[test]
    fn nested_base_path_is_preserved() {
        let base = Url::parse("http://localhost:8080/judge/").unwrap();
        let url = request_url(&base, "hi there");
        assert_eq!(url.path(), "/judge/hi%20there");
    }
}
