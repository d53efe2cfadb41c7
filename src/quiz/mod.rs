// Canonical quiz model produced by the normalizer

mod error;
mod normalize;

pub use error::{FetchFailure, LoadError, ValidationError};
pub use normalize::{normalize, parse_document, transform, validate};

use url::Url;

use crate::models::RawQuizDocument;

/// What an option shows. Decided once, during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionContent {
    Text(String),
    Image(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    /// Key from the raw `options` object, matched against `correct_answer`.
    pub key: String,
    pub content: OptionContent,
}

impl QuizOption {
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            OptionContent::Text(text) => Some(text),
            OptionContent::Image(_) => None,
        }
    }

    pub fn image_url(&self) -> Option<&Url> {
        match &self.content {
            OptionContent::Image(url) => Some(url),
            OptionContent::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub image: Option<String>,
    pub options: Vec<QuizOption>,
    /// Position of the option whose key equals `correct_answer`.
    /// `None` when no key matches; no selection will ever be correct.
    pub correct: Option<usize>,
    pub explanation: String,
    pub explanation_image: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct == Some(option)
    }

    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.correct.and_then(|idx| self.options.get(idx))
    }
}

/// A normalized quiz together with the document it came from.
#[derive(Debug, Clone)]
pub struct LoadedQuiz {
    pub document: RawQuizDocument,
    pub questions: Vec<Question>,
}

impl LoadedQuiz {
    pub fn title(&self) -> Option<&str> {
        self.document.title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.document.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// `A`, `B`, ... for option positions.
pub fn option_letter(idx: usize) -> char {
    u8::try_from(idx)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map(char::from)
        .unwrap_or('?')
}
