// Quiz source resolver - acquires raw quiz JSON from the presets location or an upload

use std::{fmt::Display, future::Future, path::Path};

use color_eyre::{eyre::eyre, Result};
use url::Url;

use crate::{
    models::{Manifest, ManifestEntry, RawManifest},
    names,
    quiz::{self, LoadError, LoadedQuiz},
};

/// Preset quizzes advertised by the manifest.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ManifestEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches the manifest and preset files relative to a fixed base location,
/// either an `http(s)` URL or a local directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    base: Url,
    client: reqwest::Client,
}

impl Resolver {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    /// Accepts `http://`/`https://` URLs and directory paths.
    pub fn from_location(location: &str) -> Result<Self> {
        let base = if location.starts_with("http://") || location.starts_with("https://") {
            let mut url = Url::parse(location)?;
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            url
        } else {
            let path = Path::new(location);
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()?.join(path)
            };
            Url::from_directory_path(&absolute)
                .map_err(|_| eyre!("invalid presets directory: {}", absolute.display()))?
        };

        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Entries that are not usable (no `id`, no `file`, wrong field types)
    /// are skipped with a warning.
    pub async fn manifest(&self) -> Result<Manifest, LoadError> {
        let text = self.fetch_text(names::MANIFEST_FILE).await?;
        let raw = serde_json::from_str::<RawManifest>(&text)?;

        let quizzes = raw
            .quizzes
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| match serde_json::from_value::<ManifestEntry>(value) {
                Ok(entry) if entry.id.is_empty() || entry.file.is_empty() => {
                    tracing::warn!("skipping manifest entry {idx}: empty id or file");
                    None
                }
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("skipping manifest entry {idx}: {e}");
                    None
                }
            })
            .collect();

        Ok(Manifest { quizzes })
    }

    /// Fetch the manifest once. Any failure leaves the catalog empty.
    pub async fn discover(&self) -> Catalog {
        match self.manifest().await {
            Ok(manifest) => {
                tracing::info!(
                    "found {} preset quizzes at {}",
                    manifest.quizzes.len(),
                    self.base
                );
                Catalog::new(manifest.quizzes)
            }
            Err(e) => {
                tracing::warn!("no preset quizzes available: {e}");
                Catalog::default()
            }
        }
    }

    pub async fn load_preset(&self, file: &str) -> Result<LoadedQuiz, LoadError> {
        let text = self.fetch_text(file).await?;
        quiz::parse_document(&text).map_err(|e| match e {
            LoadError::Validation(error) => LoadError::PresetValidation {
                file: file.to_owned(),
                error,
            },
            other => other,
        })
    }

    async fn fetch_text(&self, file: &str) -> Result<String, LoadError> {
        let url = self
            .base
            .join(file)
            .map_err(|e| LoadError::unavailable(file, e))?;

        match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| LoadError::unavailable(&url, "not a local path"))?;
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| LoadError::unavailable(&url, e))
            }
            "http" | "https" => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| LoadError::transport(&url, e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::unavailable(&url, status));
                }

                response
                    .text()
                    .await
                    .map_err(|e| LoadError::transport(&url, e))
            }
            other => Err(LoadError::unavailable(
                &url,
                format!("unsupported scheme {other}"),
            )),
        }
    }
}

/// Whether a declared content type is JSON (parameters such as charset are ignored).
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Load a user-supplied file. The body is only read once its declared
/// content type has been accepted.
pub async fn load_upload<F, E>(content_type: Option<&str>, read: F) -> Result<LoadedQuiz, LoadError>
where
    F: Future<Output = std::result::Result<String, E>>,
    E: Display,
{
    if !is_json_content_type(content_type) {
        return Err(LoadError::Type {
            content_type: content_type.map(str::to_owned),
        });
    }

    let text = read.await.map_err(|e| LoadError::Read(e.to_string()))?;
    quiz::parse_document(&text)
}
