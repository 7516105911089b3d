//! # Quiz Engine
//!
//! Drives a single quiz attempt from the fetched question set through
//! scoring to the result payload sent to the backend.
//!
//! ```text
//! Loading ──questions_loaded──▶ Intro ──start──▶ InProgress
//!                                                 │  select / submit
//!                                                 ▼
//!                                  Choosing ◀──advance── Revealed
//!                                                 │ (last question)
//!                                                 ▼
//!                                  Saving ──save_finished──▶ Result
//! ```
//!
//! The engine is pure: it never performs I/O and takes the current time as
//! an argument so transitions are deterministic under test. One engine value
//! is one attempt; dropping it discards the session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Fraction of correct answers needed to pass, expressed as `PASS_NUM / PASS_DEN`.
const PASS_NUM: usize = 4;
const PASS_DEN: usize = 5;

/// Default number of questions in a quick (random) quiz.
pub const QUICK_QUIZ_SIZE: usize = 20;

// ============================================================================
// Question set
// ============================================================================

/// Categories the backend can filter questions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TrafficSigns,
    RulesOfRoad,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TrafficSigns => "traffic_signs",
            Category::RulesOfRoad => "rules_of_road",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::TrafficSigns => "Traffic Signs Quiz",
            Category::RulesOfRoad => "Rules of the Road",
        }
    }

    /// Short badge shown on the selector ("Part 1A" etc).
    pub fn part(self) -> &'static str {
        match self {
            Category::TrafficSigns => "Part 1A",
            Category::RulesOfRoad => "Part 1B",
        }
    }
}

/// How the question set is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// Random questions from all categories, at most `limit`.
    Quick { limit: usize },
    /// Every question in one category.
    Category(Category),
}

impl Default for QuizMode {
    fn default() -> Self {
        QuizMode::Quick {
            limit: QUICK_QUIZ_SIZE,
        }
    }
}

impl QuizMode {
    /// Identifier stored with the submitted attempt.
    pub fn quiz_type(self) -> &'static str {
        match self {
            QuizMode::Quick { .. } => "quick",
            QuizMode::Category(c) => c.as_str(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuizMode::Quick { .. } => "Quick Quiz",
            QuizMode::Category(c) => c.label(),
        }
    }

    /// Intro text for a loaded set of `count` questions.
    pub fn description(self, count: usize) -> String {
        match self {
            QuizMode::Quick { .. } => {
                format!("{count} questions selected randomly from all categories.")
            }
            QuizMode::Category(Category::TrafficSigns) => {
                format!("{count} questions to test your knowledge of road signs.")
            }
            QuizMode::Category(Category::RulesOfRoad) => {
                format!("{count} questions on traffic laws and regulations.")
            }
        }
    }
}

/// A single multiple-choice question as served by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Question ids arrive as either JSON strings or numbers depending on the
/// backend revision; both are normalised to a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

// ============================================================================
// Attempt records and results
// ============================================================================

/// One answered question. Created on submission and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub question_id: String,
    #[serde(rename = "selectedAnswer")]
    pub selected_index: usize,
    #[serde(rename = "correctAnswer")]
    pub correct_index: usize,
    pub is_correct: bool,
}

/// Scores derived when the last question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_questions: usize,
    #[serde(rename = "correctAnswers")]
    pub correct: usize,
    #[serde(rename = "incorrectAnswers")]
    pub incorrect: usize,
    #[serde(rename = "score")]
    pub percentage: u32,
    pub passed: bool,
    #[serde(rename = "timeTaken")]
    pub elapsed_secs: u64,
}

impl ResultSummary {
    pub fn compute(correct: usize, total: usize, elapsed_secs: u64) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            total_questions: total,
            correct,
            incorrect: total.saturating_sub(correct),
            percentage,
            passed: correct >= pass_mark(total),
            elapsed_secs,
        }
    }
}

/// Minimum correct answers required to pass: `ceil(0.8 * total)`.
pub fn pass_mark(total: usize) -> usize {
    (total * PASS_NUM).div_ceil(PASS_DEN)
}

/// Body posted to the backend when an attempt completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub quiz_type: String,
    #[serde(flatten)]
    pub summary: ResultSummary,
    pub answers: Vec<AttemptRecord>,
    pub completed_at: DateTime<Utc>,
}

/// Outcome of the one-shot result upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Pending,
    Saved { attempt_id: String },
    /// Upload failed; the computed result is still shown.
    Failed(String),
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Submit pressed with nothing selected.
    NoSelection,
    /// The current question has already been submitted.
    AlreadySubmitted,
    OptionOutOfRange { index: usize, options: usize },
    /// Advance requested before the current question was submitted.
    NotRevealed,
    /// The requested transition is not valid from the current phase.
    InvalidPhase(&'static str),
    EmptyQuestionSet,
    MalformedQuestion { id: String, reason: &'static str },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoSelection => write!(f, "select an answer first"),
            QuizError::AlreadySubmitted => write!(f, "answer already submitted"),
            QuizError::OptionOutOfRange { index, options } => {
                write!(f, "option {index} out of range ({options} options)")
            }
            QuizError::NotRevealed => write!(f, "submit the current answer first"),
            QuizError::InvalidPhase(op) => write!(f, "cannot {op} in the current quiz phase"),
            QuizError::EmptyQuestionSet => write!(f, "no questions available for this quiz"),
            QuizError::MalformedQuestion { id, reason } => {
                write!(f, "question {id} is malformed: {reason}")
            }
        }
    }
}

impl std::error::Error for QuizError {}

// ============================================================================
// State machine
// ============================================================================

/// Per-question sub-state while the quiz is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    /// `None` means nothing picked yet; `Some(0)` is the first option.
    Choosing { selected: Option<usize> },
    /// Answer submitted; marking and explanation are visible.
    Revealed { selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    Intro,
    InProgress(QuestionState),
    Saving,
    Result,
}

impl QuizPhase {
    pub fn name(&self) -> &'static str {
        match self {
            QuizPhase::Loading => "loading",
            QuizPhase::Intro => "intro",
            QuizPhase::InProgress(QuestionState::Choosing { .. }) => "in_progress",
            QuizPhase::InProgress(QuestionState::Revealed { .. }) => "submitted",
            QuizPhase::Saving => "saving",
            QuizPhase::Result => "result",
        }
    }
}

/// What happened after `advance()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on to the question at this index.
    NextQuestion(usize),
    /// Last question done; the payload must be uploaded.
    Finished(ResultSubmission),
}

#[derive(Debug)]
pub struct QuizEngine {
    mode: QuizMode,
    phase: QuizPhase,
    questions: Vec<Question>,
    current: usize,
    score: usize,
    attempts: Vec<AttemptRecord>,
    started_at: Option<DateTime<Utc>>,
    summary: Option<ResultSummary>,
    save_status: SaveStatus,
    user_email: Option<String>,
}

impl QuizEngine {
    pub fn new(mode: QuizMode) -> Self {
        Self {
            mode,
            phase: QuizPhase::Loading,
            questions: Vec::new(),
            current: 0,
            score: 0,
            attempts: Vec::new(),
            started_at: None,
            summary: None,
            save_status: SaveStatus::Pending,
            user_email: None,
        }
    }

    /// Attach the signed-in user's email to the eventual submission.
    pub fn with_user_email(mut self, email: Option<String>) -> Self {
        self.user_email = email;
        self
    }

    /// Loading → Intro. Rejects empty sets and questions whose correct index
    /// does not point at an option; the caller aborts the session on error.
    pub fn questions_loaded(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Loading {
            return Err(QuizError::InvalidPhase("load questions"));
        }
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        for q in &questions {
            if q.options.is_empty() {
                return Err(QuizError::MalformedQuestion {
                    id: q.id.clone(),
                    reason: "no options",
                });
            }
            if q.correct_answer_index >= q.options.len() {
                return Err(QuizError::MalformedQuestion {
                    id: q.id.clone(),
                    reason: "correct answer index out of range",
                });
            }
        }
        self.questions = questions;
        self.phase = QuizPhase::Intro;
        Ok(())
    }

    /// Intro → InProgress, resetting pointer, score and attempts.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Intro {
            return Err(QuizError::InvalidPhase("start"));
        }
        self.current = 0;
        self.score = 0;
        self.attempts.clear();
        self.summary = None;
        self.save_status = SaveStatus::Pending;
        self.started_at = Some(now);
        self.phase = QuizPhase::InProgress(QuestionState::Choosing { selected: None });
        Ok(())
    }

    /// Tentatively pick an option. Replaces any earlier pick for this question.
    pub fn select(&mut self, index: usize) -> Result<(), QuizError> {
        let options = self.current_question().map_or(0, |q| q.options.len());
        match &mut self.phase {
            QuizPhase::InProgress(QuestionState::Choosing { selected }) => {
                if index >= options {
                    return Err(QuizError::OptionOutOfRange { index, options });
                }
                *selected = Some(index);
                Ok(())
            }
            QuizPhase::InProgress(QuestionState::Revealed { .. }) => {
                Err(QuizError::AlreadySubmitted)
            }
            _ => Err(QuizError::InvalidPhase("select an option")),
        }
    }

    /// Lock in the current selection. With nothing selected this is a no-op
    /// that reports `NoSelection`.
    pub fn submit(&mut self) -> Result<&AttemptRecord, QuizError> {
        let selected = match self.phase {
            QuizPhase::InProgress(QuestionState::Choosing { selected: Some(s) }) => s,
            QuizPhase::InProgress(QuestionState::Choosing { selected: None }) => {
                return Err(QuizError::NoSelection);
            }
            QuizPhase::InProgress(QuestionState::Revealed { .. }) => {
                return Err(QuizError::AlreadySubmitted);
            }
            _ => return Err(QuizError::InvalidPhase("submit")),
        };

        let question = &self.questions[self.current];
        let is_correct = selected == question.correct_answer_index;
        self.attempts.push(AttemptRecord {
            question_id: question.id.clone(),
            selected_index: selected,
            correct_index: question.correct_answer_index,
            is_correct,
        });
        if is_correct {
            self.score += 1;
        }
        self.phase = QuizPhase::InProgress(QuestionState::Revealed { selected });

        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// Leave a revealed question: move to the next one, or finish and hand
    /// back the submission payload (→ Saving).
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, QuizError> {
        match self.phase {
            QuizPhase::InProgress(QuestionState::Revealed { .. }) => {}
            QuizPhase::InProgress(QuestionState::Choosing { .. }) => {
                return Err(QuizError::NotRevealed);
            }
            _ => return Err(QuizError::InvalidPhase("advance")),
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::InProgress(QuestionState::Choosing { selected: None });
            return Ok(Advance::NextQuestion(self.current));
        }

        let elapsed_secs = self
            .started_at
            .map(|start| (now - start).num_seconds().max(0) as u64)
            .unwrap_or(0);
        let summary = ResultSummary::compute(self.score, self.questions.len(), elapsed_secs);
        self.summary = Some(summary);
        self.phase = QuizPhase::Saving;

        Ok(Advance::Finished(ResultSubmission {
            user_email: self.user_email.clone(),
            quiz_type: self.mode.quiz_type().to_string(),
            summary,
            answers: self.attempts.clone(),
            completed_at: now,
        }))
    }

    /// Saving → Result. Either outcome lands on the result; a failure only
    /// records a warning.
    pub fn save_finished(&mut self, outcome: Result<String, String>) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Saving {
            return Err(QuizError::InvalidPhase("finish saving"));
        }
        self.save_status = match outcome {
            Ok(attempt_id) => SaveStatus::Saved { attempt_id },
            Err(message) => SaveStatus::Failed(message),
        };
        self.phase = QuizPhase::Result;
        Ok(())
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress(_) => self.questions.get(self.current),
            _ => None,
        }
    }

    /// The current pick, whether still tentative or already submitted.
    pub fn selection(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::InProgress(QuestionState::Choosing { selected }) => selected,
            QuizPhase::InProgress(QuestionState::Revealed { selected }) => Some(selected),
            _ => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(
            self.phase,
            QuizPhase::InProgress(QuestionState::Revealed { .. })
        )
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// 1-based position and total, e.g. `(3, 20)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.questions.len())
    }

    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }
}
