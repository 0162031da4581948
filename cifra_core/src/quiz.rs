//! # Quiz Session
//!
//! One parameterized session state machine shared by every trivia page:
//! the question bank, scoring, timer budget, and reveal window are all
//! data in [`QuizConfig`], so a page instantiates a session instead of
//! re-implementing the flow.
//!
//! ## Lifecycle
//!
//! ```text
//! Introduction --start()--> Active --(pool exhausted | timer zero)--> Finished
//! ```
//!
//! While `Active`, exactly one question is live, drawn without replacement
//! from the pool shuffled at session creation. Answering opens a
//! non-cancelable reveal window; when it expires the session advances to
//! the next question, or to `Finished` if none remain. The countdown
//! timer runs independently and forces `Finished` when it reaches zero,
//! even mid-question or mid-reveal.
//!
//! Time advances only through [`QuizSession::tick`], called once per
//! second by the page shell; the machine itself never blocks or sleeps.
//!
//! ## Example
//!
//! ```rust
//! use cifra_core::quiz::{QuizConfig, QuizQuestion, QuizSession};
//!
//! let questions = vec![
//!     QuizQuestion::new("¿Capital de Italia?", vec!["Roma", "Milán"], 0),
//!     QuizQuestion::new("¿Capital de Alemania?", vec!["Bonn", "Berlín"], 1),
//! ];
//! let mut session = QuizSession::new(QuizConfig::default(), questions).unwrap();
//! session.start();
//!
//! let outcome = session.answer(0).unwrap();
//! println!("correct: {}", outcome.correct);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: Vec<&str>, correct_index: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(String::from).collect(),
            correct_index,
        }
    }
}

/// Session parameters, all data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Countdown budget for the whole session in seconds
    pub timer_seconds: u32,
    /// Reveal window after each answer in seconds
    pub reveal_seconds: u32,
    /// Points awarded per correct answer
    pub points_per_correct: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            timer_seconds: 60,
            reveal_seconds: 3,
            points_per_correct: 1,
        }
    }
}

/// Coarse session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    Introduction,
    Active,
    Finished,
}

/// What happened when an answer was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The correct option index, for highlighting during the reveal
    pub correct_index: usize,
    /// Score after this answer
    pub score: u32,
}

/// A running quiz session.
///
/// All mutation happens through [`start`](Self::start),
/// [`answer`](Self::answer), and [`tick`](Self::tick); events that do not
/// apply in the current phase are ignored, matching how the pages treat
/// stray clicks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    id: Uuid,
    config: QuizConfig,
    /// Shuffled pool; `current` advances through it without replacement
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    answered: u32,
    remaining_seconds: u32,
    /// `Some(n)` while the reveal window is open, counting down to advance
    reveal_remaining: Option<u32>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Create a session, shuffling the question pool.
    pub fn new(config: QuizConfig, questions: Vec<QuizQuestion>) -> CalcResult<Self> {
        Self::with_rng(config, questions, &mut rand::rng())
    }

    /// Create a session with a deterministic shuffle (tests, replays).
    pub fn new_seeded(
        config: QuizConfig,
        questions: Vec<QuizQuestion>,
        seed: u64,
    ) -> CalcResult<Self> {
        Self::with_rng(config, questions, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: rand::Rng + ?Sized>(
        config: QuizConfig,
        mut questions: Vec<QuizQuestion>,
        rng: &mut R,
    ) -> CalcResult<Self> {
        if questions.is_empty() {
            return Err(CalcError::missing_input("questions"));
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(CalcError::out_of_domain(
                    format!("questions[{}]", index),
                    question.options.len().to_string(),
                    "Questions need at least two options",
                ));
            }
            if question.correct_index >= question.options.len() {
                return Err(CalcError::out_of_domain(
                    format!("questions[{}].correct_index", index),
                    question.correct_index.to_string(),
                    "Correct index is out of range",
                ));
            }
        }
        if config.timer_seconds == 0 {
            return Err(CalcError::out_of_domain(
                "timer_seconds",
                "0",
                "Timer budget must be at least one second",
            ));
        }

        questions.shuffle(rng);
        Ok(Self {
            id: Uuid::new_v4(),
            remaining_seconds: config.timer_seconds,
            config,
            questions,
            current: 0,
            score: 0,
            answered: 0,
            reveal_remaining: None,
            phase: QuizPhase::Introduction,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions answered so far
    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The live question, if the session is active
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.phase == QuizPhase::Active {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Whether the post-answer reveal window is open
    pub fn is_revealing(&self) -> bool {
        self.reveal_remaining.is_some()
    }

    /// Leave the introduction and present the first question.
    /// Ignored outside `Introduction`.
    pub fn start(&mut self) {
        if self.phase == QuizPhase::Introduction {
            self.phase = QuizPhase::Active;
        }
    }

    /// Submit an answer for the live question.
    ///
    /// Returns `None` when there is nothing to answer: session not
    /// active, reveal window open, or the option index out of range.
    pub fn answer(&mut self, option_index: usize) -> Option<AnswerOutcome> {
        if self.phase != QuizPhase::Active || self.reveal_remaining.is_some() {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if option_index >= question.options.len() {
            return None;
        }

        let correct = option_index == question.correct_index;
        if correct {
            self.score += self.config.points_per_correct;
        }
        self.answered += 1;
        // The reveal window is non-cancelable; only tick() closes it
        self.reveal_remaining = Some(self.config.reveal_seconds.max(1));

        Some(AnswerOutcome {
            correct,
            correct_index: question.correct_index,
            score: self.score,
        })
    }

    /// Advance time by one second.
    ///
    /// The countdown wins over everything: when it reaches zero the
    /// session finishes immediately, even mid-question or mid-reveal.
    pub fn tick(&mut self) {
        if self.phase != QuizPhase::Active {
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = QuizPhase::Finished;
            self.reveal_remaining = None;
            return;
        }

        if let Some(reveal) = self.reveal_remaining {
            let reveal = reveal.saturating_sub(1);
            if reveal == 0 {
                self.reveal_remaining = None;
                self.current += 1;
                if self.current >= self.questions.len() {
                    self.phase = QuizPhase::Finished;
                }
            } else {
                self.reveal_remaining = Some(reveal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new("q1", vec!["a", "b"], 0),
            QuizQuestion::new("q2", vec!["a", "b", "c"], 2),
            QuizQuestion::new("q3", vec!["a", "b"], 1),
        ]
    }

    fn answer_current_correctly(session: &mut QuizSession) -> AnswerOutcome {
        let correct_index = session.current_question().unwrap().correct_index;
        session.answer(correct_index).unwrap()
    }

    /// Run ticks until the reveal window closes or the session finishes
    fn finish_reveal(session: &mut QuizSession) {
        while session.is_revealing() && session.phase() == QuizPhase::Active {
            session.tick();
        }
    }

    #[test]
    fn test_full_playthrough_all_correct() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 7).unwrap();
        assert_eq!(session.phase(), QuizPhase::Introduction);
        assert!(session.current_question().is_none());

        session.start();
        assert_eq!(session.phase(), QuizPhase::Active);

        for _ in 0..3 {
            answer_current_correctly(&mut session);
            finish_reveal(&mut session);
        }

        assert_eq!(session.phase(), QuizPhase::Finished);
        assert_eq!(session.score(), 3);
        assert_eq!(session.answered(), 3);
    }

    #[test]
    fn test_each_question_appears_once() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 42).unwrap();
        session.start();

        let mut seen = Vec::new();
        while session.phase() == QuizPhase::Active {
            seen.push(session.current_question().unwrap().prompt.clone());
            answer_current_correctly(&mut session);
            finish_reveal(&mut session);
        }

        seen.sort();
        assert_eq!(seen, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn test_wrong_answer_scores_nothing() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 1).unwrap();
        session.start();

        let correct_index = session.current_question().unwrap().correct_index;
        let wrong_index = (correct_index + 1) % 2;
        let outcome = session.answer(wrong_index).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, correct_index);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_reveal_window_blocks_answers() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 1).unwrap();
        session.start();

        answer_current_correctly(&mut session);
        assert!(session.is_revealing());
        // Second submission during the reveal is ignored
        assert!(session.answer(0).is_none());
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn test_reveal_lasts_configured_seconds() {
        let config = QuizConfig {
            reveal_seconds: 3,
            ..QuizConfig::default()
        };
        let mut session = QuizSession::new_seeded(config, three_questions(), 1).unwrap();
        session.start();

        answer_current_correctly(&mut session);
        session.tick();
        session.tick();
        assert!(session.is_revealing());
        session.tick();
        assert!(!session.is_revealing());
    }

    #[test]
    fn test_timer_forces_finish_mid_question() {
        let config = QuizConfig {
            timer_seconds: 2,
            ..QuizConfig::default()
        };
        let mut session = QuizSession::new_seeded(config, three_questions(), 1).unwrap();
        session.start();

        session.tick();
        assert_eq!(session.phase(), QuizPhase::Active);
        session.tick();
        assert_eq!(session.phase(), QuizPhase::Finished);
        assert!(session.answer(0).is_none());
    }

    #[test]
    fn test_timer_forces_finish_mid_reveal() {
        let config = QuizConfig {
            timer_seconds: 2,
            reveal_seconds: 5,
            ..QuizConfig::default()
        };
        let mut session = QuizSession::new_seeded(config, three_questions(), 1).unwrap();
        session.start();

        answer_current_correctly(&mut session);
        assert!(session.is_revealing());
        session.tick();
        session.tick();
        assert_eq!(session.phase(), QuizPhase::Finished);
        assert!(!session.is_revealing());
    }

    #[test]
    fn test_events_outside_phase_are_ignored() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 1).unwrap();
        // Answering before start is ignored
        assert!(session.answer(0).is_none());
        // Ticking before start leaves the timer untouched
        session.tick();
        assert_eq!(session.remaining_seconds(), 60);

        session.start();
        session.start(); // idempotent
        assert_eq!(session.phase(), QuizPhase::Active);
    }

    #[test]
    fn test_out_of_range_option_ignored() {
        let mut session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 1).unwrap();
        session.start();
        assert!(session.answer(99).is_none());
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn test_validation() {
        assert!(QuizSession::new(QuizConfig::default(), vec![]).is_err());

        let one_option = vec![QuizQuestion::new("q", vec!["a"], 0)];
        assert!(QuizSession::new(QuizConfig::default(), one_option).is_err());

        let bad_index = vec![QuizQuestion::new("q", vec!["a", "b"], 5)];
        assert!(QuizSession::new(QuizConfig::default(), bad_index).is_err());

        let zero_timer = QuizConfig {
            timer_seconds: 0,
            ..QuizConfig::default()
        };
        assert!(QuizSession::new(zero_timer, three_questions()).is_err());
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let a = QuizSession::new_seeded(QuizConfig::default(), three_questions(), 9).unwrap();
        let b = QuizSession::new_seeded(QuizConfig::default(), three_questions(), 9).unwrap();
        let prompts = |s: &QuizSession| -> Vec<String> {
            s.questions.iter().map(|q| q.prompt.clone()).collect()
        };
        assert_eq!(prompts(&a), prompts(&b));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let session =
            QuizSession::new_seeded(QuizConfig::default(), three_questions(), 3).unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let roundtrip: QuizSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, roundtrip);
    }
}
