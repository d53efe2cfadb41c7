use serde::Deserialize;
use serde_json::{Map, Value};

/// A quiz document as it arrives from a preset file or an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuizDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<RawQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub id: Option<Value>,
    pub question: String,
    /// Keyed options in document order (`serde_json` is built with `preserve_order`).
    pub options: Map<String, Value>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub question_image: Option<String>,
    #[serde(default, rename = "Question_image")]
    pub question_image_capitalized: Option<String>,
    #[serde(default)]
    pub explanation_image: Option<String>,
    #[serde(default, rename = "Explanation_image")]
    pub explanation_image_capitalized: Option<String>,
}

/// The manifest as published. Entries are decoded one at a time so a single
/// bad record does not hide the rest of the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub quizzes: Vec<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub quizzes: Vec<ManifestEntry>,
}

/// One preset quiz in the catalog. `file` is relative to the presets base.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub file: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub questions: u32,
    #[serde(default)]
    pub difficulty: String,
}

impl ManifestEntry {
    /// Title shown in the catalog, the id when the manifest gives none.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}
