//! Extraction of the score token from the judge's free-form reply.

use std::sync::OnceLock;

use regex::Regex;

use super::JudgeResult;

/// Literal prefix the judge is asked to put in front of its score.
pub const SCORE_PREFIX: &str = "SCORE:";

fn re_score() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"SCORE:\s*(\d+)").unwrap())
}

fn re_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d$").unwrap())
}

fn is_decimal(c: char) -> bool {
    let mut buf = [0u8; 4];
    re_digit().is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (`Nd`). Every script encodes its digits
/// as contiguous runs of ten starting at zero, so the offset from the start
/// of the surrounding run, modulo ten, is the value.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal(c) {
        return None;
    }
    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

fn parse_digits(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("response carries no `SCORE:` token")]
    MissingScore { raw: String },
    #[error("score `{digits}` does not fit an integer")]
    MalformedScore { digits: String, raw: String },
}

/// Split a reply into score and advice.
///
/// The first `SCORE: <digits>` occurrence anywhere in the text wins. Digits
/// of any script count (Arabic-Indic, fullwidth, ...). The score is not
/// clamped to 0–100. Advice is the reply with every copy of the
/// matched token removed, trimmed.
pub fn parse_response(text: &str) -> Result<JudgeResult, ParseError> {
    let Some(captures) = re_score().captures(text) else {
        return Err(ParseError::MissingScore {
            raw: text.to_string(),
        });
    };

    let token = &captures[0];
    let digits = &captures[1];
    let score = parse_digits(digits).ok_or_else(|| ParseError::MalformedScore {
        digits: digits.to_string(),
        raw: text.to_string(),
    })?;

    let advice = text.replace(token, "").trim().to_string();
    Ok(JudgeResult { score, advice })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply() {
        let result = parse_response("SCORE: 83\n인생 잘 사네요").unwrap();
        assert_eq!(result.score, 83);
        assert_eq!(result.advice, "인생 잘 사네요");
    }

    #[test]
    fn token_may_appear_after_preamble() {
        let result = parse_response("Sure! Here you go.\nSCORE:41\nSleep more.  ").unwrap();
        assert_eq!(result.score, 41);
        assert_eq!(result.advice, "Sure! Here you go.\n\nSleep more.");
    }

    #[test]
    fn first_token_wins() {
        let result = parse_response("SCORE: 10\nno wait\nSCORE: 90").unwrap();
        assert_eq!(result.score, 10);
        assert!(result.advice.contains("SCORE: 90"));
    }

    #[test]
    fn out_of_range_score_passes_through() {
        let result = parse_response("SCORE: 250\ntoo good").unwrap();
        assert_eq!(result.score, 250);
    }

    #[test]
    fn missing_token_keeps_raw_text() {
        let raw = "I refuse to evaluate this.";
        assert_eq!(
            parse_response(raw),
            Err(ParseError::MissingScore {
                raw: raw.to_string()
            })
        );
    }

    #[test]
    fn prefix_without_digits_is_missing() {
        assert!(matches!(
            parse_response("SCORE: high\nnice"),
            Err(ParseError::MissingScore { .. })
        ));
    }

    #[test]
    fn lowercase_prefix_is_not_a_token() {
        assert!(matches!(
            parse_response("score: 70"),
            Err(ParseError::MissingScore { .. })
        ));
    }

    #[test]
    fn overflowing_digits_are_malformed() {
        let raw = "SCORE: 99999999999999999999\nwow";
        match parse_response(raw) {
            Err(ParseError::MalformedScore { digits, raw: kept }) => {
                assert_eq!(digits, "99999999999999999999");
                assert_eq!(kept, raw);
            }
            other => panic!("expected malformed score, got {other:?}"),
        }
    }

    #[test]
    fn digits_from_other_scripts_are_read() {
        let arabic = parse_response("SCORE: \u{668}\u{665}\n좋아요").unwrap();
        assert_eq!(arabic.score, 85);
        assert_eq!(arabic.advice, "좋아요");

        let fullwidth = parse_response("SCORE: ７０").unwrap();
        assert_eq!(fullwidth.score, 70);
    }

    #[test]
    fn digit_values_follow_their_run_of_ten() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('\u{966}'), Some(0));
        assert_eq!(digit_value('\u{96F}'), Some(9));
        // Mathematical digits are five consecutive runs.
        assert_eq!(digit_value('\u{1D7D8}'), Some(0));
        assert_eq!(digit_value('\u{1D7E3}'), Some(1));
        assert_eq!(digit_value('x'), None);
        assert_eq!(digit_value('Ⅻ'), None);
    }
}
