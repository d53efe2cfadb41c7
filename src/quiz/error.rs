use thiserror::Error;

/// Why a quiz could not be loaded. Each kind maps to one user-facing message.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not fetch {location}: {reason}")]
    Fetch {
        location: String,
        reason: FetchFailure,
    },

    #[error("expected an application/json file, got {content_type:?}")]
    Type { content_type: Option<String> },

    #[error("could not read uploaded file: {0}")]
    Read(String),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid quiz document: {0}")]
    Validation(#[from] ValidationError),

    /// A preset from the catalog failed validation.
    #[error("invalid preset {file}: {error}")]
    PresetValidation {
        file: String,
        #[source]
        error: ValidationError,
    },
}

#[derive(Error, Debug)]
pub enum FetchFailure {
    /// The resource answered, but not successfully (HTTP status, missing file).
    #[error("not available ({0})")]
    Unavailable(String),

    /// The request itself failed.
    #[error("{0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("`questions` is missing or not an array")]
    MissingQuestions,

    #[error("`questions` is empty")]
    NoQuestions,

    #[error("question {index}: `{field}` is missing or empty")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index}: `options` must be a non-empty object")]
    BadOptions { index: usize },

    #[error("{0}")]
    Shape(String),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Fetch {
                reason: FetchFailure::Unavailable(_),
                ..
            } => "Error loading the selected quiz file.",
            LoadError::Fetch {
                reason: FetchFailure::Transport(_),
                ..
            } => "Error fetching quiz data. Please try again.",
            LoadError::Type { .. } => "Please select a valid JSON file.",
            LoadError::Read(_) => "Could not read the uploaded file.",
            LoadError::Parse(_) => {
                "Error parsing JSON file. Please check if the file is valid JSON."
            }
            LoadError::Validation(_) => {
                "Invalid quiz data format. Please check your JSON file structure."
            }
            LoadError::PresetValidation { .. } => "Invalid quiz data format in the selected file.",
        }
    }

    pub(crate) fn unavailable(location: impl ToString, reason: impl ToString) -> Self {
        LoadError::Fetch {
            location: location.to_string(),
            reason: FetchFailure::Unavailable(reason.to_string()),
        }
    }

    pub(crate) fn transport(location: impl ToString, reason: impl ToString) -> Self {
        LoadError::Fetch {
            location: location.to_string(),
            reason: FetchFailure::Transport(reason.to_string()),
        }
    }
}
