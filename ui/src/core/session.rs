//! Per-session judge state: the latest verdict and the evaluation in flight.
//!
//! The dashboard owns one `JudgeSession` inside a signal. Only the evaluate,
//! complete and cancel handlers mutate it. Routine edits never touch it, so
//! an older verdict stays on screen next to newer inputs until the user asks
//! again.

use api::JudgeResult;

/// Score at or above which the verdict box is shown as a success.
pub const SUCCESS_THRESHOLD: u32 = 80;
/// Score at or above which the verdict box is shown as a caution.
pub const CAUTION_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Caution,
    Alarm,
}

impl Tone {
    pub fn for_score(score: u32) -> Self {
        if score >= SUCCESS_THRESHOLD {
            Tone::Success
        } else if score >= CAUTION_THRESHOLD {
            Tone::Caution
        } else {
            Tone::Alarm
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "judge-result--success",
            Tone::Caution => "judge-result--caution",
            Tone::Alarm => "judge-result--alarm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationState {
    #[default]
    Idle,
    Pending {
        run_id: u64,
    },
    Cancelled,
}

/// What the verdict area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeDisplay {
    Prompt,
    Verdict {
        score: u32,
        advice: String,
        tone: Tone,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgeSession {
    last_result: Option<JudgeResult>,
    state: EvaluationState,
    next_run_id: u64,
}

impl JudgeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an evaluation and return its run id. A run still pending is
    /// superseded; its completion will be ignored.
    pub fn begin(&mut self) -> u64 {
        self.next_run_id += 1;
        let run_id = self.next_run_id;
        self.state = EvaluationState::Pending { run_id };
        run_id
    }

    /// Store `result` if `run_id` is the pending run. Returns whether it was
    /// applied.
    pub fn complete(&mut self, run_id: u64, result: JudgeResult) -> bool {
        if self.state != (EvaluationState::Pending { run_id }) {
            return false;
        }
        self.last_result = Some(result);
        self.state = EvaluationState::Idle;
        true
    }

    /// Abandon the pending run, keeping the previous verdict. Returns the
    /// abandoned run id, if any.
    pub fn cancel(&mut self) -> Option<u64> {
        match self.state {
            EvaluationState::Pending { run_id } => {
                self.state = EvaluationState::Cancelled;
                Some(run_id)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> EvaluationState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, EvaluationState::Pending { .. })
    }

    pub fn last_result(&self) -> Option<&JudgeResult> {
        self.last_result.as_ref()
    }

    pub fn display(&self) -> JudgeDisplay {
        match &self.last_result {
            None => JudgeDisplay::Prompt,
            Some(result) => JudgeDisplay::Verdict {
                score: result.score,
                advice: result.advice.clone(),
                tone: Tone::for_score(result.score),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(score: u32, advice: &str) -> JudgeResult {
        JudgeResult {
            score,
            advice: advice.to_string(),
        }
    }

    #[test]
    fn starts_absent_with_neutral_prompt() {
        let session = JudgeSession::new();
        assert!(session.last_result().is_none());
        assert_eq!(session.display(), JudgeDisplay::Prompt);
        assert_eq!(session.state(), EvaluationState::Idle);
    }

    #[test]
    fn completion_overwrites_unconditionally() {
        let mut session = JudgeSession::new();
        let first = session.begin();
        assert!(session.is_pending());
        assert!(session.complete(first, verdict(91, "great")));

        let second = session.begin();
        assert!(session.complete(second, verdict(0, "AI 서버 연결 오류입니다.")));
        assert_eq!(session.last_result(), Some(&verdict(0, "AI 서버 연결 오류입니다.")));
        assert_eq!(session.state(), EvaluationState::Idle);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut session = JudgeSession::new();
        let old = session.begin();
        let fresh = session.begin();
        assert!(!session.complete(old, verdict(12, "old")));
        assert!(session.last_result().is_none());
        assert!(session.complete(fresh, verdict(64, "fresh")));
        assert!(!session.complete(old, verdict(12, "old")));
        assert_eq!(session.last_result().map(|r| r.score), Some(64));
    }

    #[test]
    fn cancel_keeps_previous_verdict() {
        let mut session = JudgeSession::new();
        let run = session.begin();
        session.complete(run, verdict(72, "fine"));

        let abandoned = session.begin();
        assert_eq!(session.cancel(), Some(abandoned));
        assert_eq!(session.state(), EvaluationState::Cancelled);
        assert!(!session.complete(abandoned, verdict(5, "late")));
        assert_eq!(session.last_result().map(|r| r.score), Some(72));
        assert_eq!(session.cancel(), None);
    }

    #[test]
    fn tone_thresholds() {
        assert_eq!(Tone::for_score(100), Tone::Success);
        assert_eq!(Tone::for_score(80), Tone::Success);
        assert_eq!(Tone::for_score(79), Tone::Caution);
        assert_eq!(Tone::for_score(50), Tone::Caution);
        assert_eq!(Tone::for_score(49), Tone::Alarm);
        assert_eq!(Tone::for_score(0), Tone::Alarm);
        assert_eq!(Tone::for_score(250), Tone::Success);
    }

    #[test]
    fn display_carries_score_advice_and_tone() {
        let mut session = JudgeSession::new();
        let run = session.begin();
        session.complete(run, verdict(55, "잠을 더 자세요"));
        assert_eq!(
            session.display(),
            JudgeDisplay::Verdict {
                score: 55,
                advice: "잠을 더 자세요".to_string(),
                tone: Tone::Caution,
            }
        );
    }
}
