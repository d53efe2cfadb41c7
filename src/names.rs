pub const HOME_URL: &str = "/";
pub const IMPORT_URL: &str = "/import";
pub const SUBMIT_URL: &str = "/submit";
pub const RESTART_URL: &str = "/restart";

pub fn load_preset_url(id: &str) -> String {
    format!("/load-preset/{id}")
}

pub fn answer_url(question_idx: usize, option_idx: usize) -> String {
    format!("/answer/{question_idx}/{option_idx}")
}

pub fn question_url(question_idx: usize) -> String {
    format!("/question/{question_idx}")
}

/// Anchor of a question card on the quiz page.
pub fn question_anchor(question_idx: usize) -> String {
    format!("question-{question_idx}")
}

/// Navigation link that also scrolls to the question without htmx.
pub fn question_link(question_idx: usize) -> String {
    format!(
        "{}#{}",
        question_url(question_idx),
        question_anchor(question_idx)
    )
}

/// Where a plain form post lands after answering a question.
pub fn answered_url(question_idx: usize) -> String {
    format!("{HOME_URL}#{}", question_anchor(question_idx))
}

// Presets
pub const MANIFEST_FILE: &str = "quiz-manifest.json";
pub const DEFAULT_PRESETS_LOCATION: &str = "quizzes";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";

// Multipart field carrying an imported quiz
pub const QUIZ_FILE_FIELD: &str = "quiz_file";
