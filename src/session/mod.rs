// Quiz session controller - owns the loaded quiz and everything the user did with it

use std::collections::BTreeMap;

use thiserror::Error;

use crate::quiz::LoadedQuiz;

mod answer;
mod load;
mod score;

pub use load::{LoadOutcome, LoadTicket};
pub use score::Score;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please load a quiz first.")]
    NoQuiz,

    #[error("question {index} is out of range ({len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("option {option} is out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}

/// Everything that is reset together when a new quiz is loaded.
#[derive(Debug, Default)]
struct SessionState {
    quiz: Option<LoadedQuiz>,
    /// Question index -> selected option index.
    answers: BTreeMap<usize, usize>,
    current: usize,
    show_results: bool,
    error: Option<String>,
}

/// Single owner of session state. Every mutation goes through its methods.
#[derive(Debug, Default)]
pub struct Controller {
    state: SessionState,
    last_ticket: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiz(&self) -> Option<&LoadedQuiz> {
        self.state.quiz.as_ref()
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn results_shown(&self) -> bool {
        self.state.show_results
    }

    /// The most recent error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.state.answers.get(&question).copied()
    }

    pub fn is_answered(&self, question: usize) -> bool {
        self.state.answers.contains_key(&question)
    }

    pub fn answered_count(&self) -> usize {
        self.state.answers.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.quiz()
            .map_or(0, |q| q.len().saturating_sub(self.answered_count()))
    }

    fn loaded(&self) -> Result<&LoadedQuiz, SessionError> {
        self.state.quiz.as_ref().ok_or(SessionError::NoQuiz)
    }
}
