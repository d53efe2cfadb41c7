use serde_json::Value;
use ulid::{Generator, Ulid};
use url::Url;

use super::{LoadError, LoadedQuiz, OptionContent, Question, QuizOption, ValidationError};
use crate::models::{RawQuestion, RawQuizDocument};

/// Parse JSON text and normalize it into a quiz.
pub fn parse_document(text: &str) -> Result<LoadedQuiz, LoadError> {
    let value = serde_json::from_str::<Value>(text)?;
    Ok(normalize(value)?)
}

/// Validate an already-parsed document and transform it.
pub fn normalize(value: Value) -> Result<LoadedQuiz, ValidationError> {
    validate(&value)?;

    let document = serde_json::from_value::<RawQuizDocument>(value)
        .map_err(|e| ValidationError::Shape(e.to_string()))?;
    let questions = transform(&document);

    Ok(LoadedQuiz {
        document,
        questions,
    })
}

/// Check the minimal shape: a non-empty `questions` array whose entries all
/// carry a question, a non-empty options object and a correct answer key.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let document = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let questions = document
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingQuestions)?;

    if questions.is_empty() {
        return Err(ValidationError::NoQuestions);
    }

    for (index, question) in questions.iter().enumerate() {
        if !is_non_empty_str(question.get("question")) {
            return Err(ValidationError::MissingField {
                index,
                field: "question",
            });
        }

        match question.get("options") {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField {
                    index,
                    field: "options",
                })
            }
            Some(Value::Object(options)) if !options.is_empty() => {}
            Some(_) => return Err(ValidationError::BadOptions { index }),
        }

        if !is_non_empty_str(question.get("correct_answer")) {
            return Err(ValidationError::MissingField {
                index,
                field: "correct_answer",
            });
        }
    }

    Ok(())
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Build canonical questions in document order.
pub fn transform(document: &RawQuizDocument) -> Vec<Question> {
    let mut ids = Generator::new();

    document
        .questions
        .iter()
        .map(|raw| transform_question(raw, &mut ids))
        .collect()
}

fn transform_question(raw: &RawQuestion, ids: &mut Generator) -> Question {
    let options: Vec<QuizOption> = raw
        .options
        .iter()
        .map(|(key, value)| QuizOption {
            key: key.clone(),
            content: classify(value),
        })
        .collect();

    let correct = options.iter().position(|o| o.key == raw.correct_answer);

    Question {
        id: provided_id(raw.id.as_ref()).unwrap_or_else(|| {
            ids.generate()
                .unwrap_or_else(|_| Ulid::new())
                .to_string()
        }),
        text: raw.question.clone(),
        image: either_casing(&raw.question_image, &raw.question_image_capitalized),
        options,
        correct,
        explanation: raw.explanation.clone().unwrap_or_default(),
        explanation_image: either_casing(
            &raw.explanation_image,
            &raw.explanation_image_capitalized,
        ),
    }
}

fn provided_id(id: Option<&Value>) -> Option<String> {
    match id? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn either_casing(lower: &Option<String>, capitalized: &Option<String>) -> Option<String> {
    lower
        .iter()
        .chain(capitalized.iter())
        .find(|s| !s.is_empty())
        .cloned()
}

fn classify(value: &Value) -> OptionContent {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match Url::parse(&text) {
        Ok(url) => OptionContent::Image(url),
        Err(_) => OptionContent::Text(text),
    }
}
