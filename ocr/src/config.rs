use std::path::{Path, PathBuf};

/// Tesseract initialization parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    data_dir: Option<PathBuf>,
    language: String,
}

impl EngineConfig {
    /// Create a configuration for the given language code.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            data_dir: None,
            language: language.into(),
        }
    }

    /// Point Tesseract at an explicit tessdata directory instead of its
    /// default search path.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Directory holding `<lang>.traineddata`, if one was configured.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Language code passed to Tesseract (e.g. `vie`, `eng`).
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new("vie")
    }
}
