//! High-level configuration API
//!
//! Configuration is validated when a [`Summarizer`] is built; a
//! malformed stop-word list or unknown language fails there, never
//! during a summarization call.
//!
//! [`Summarizer`]: crate::Summarizer

use crate::error::{ApiError, Result};
use gist_core::LanguageProfile;
use gist_engine::{EngineConfig, ExecutionMode};

/// High-level summarizer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Language code for the built-in stop-word list
    pub language: String,
    /// Custom stop words; replaces the built-in list when set
    pub stop_words: Option<Vec<String>>,
    /// Execution mode preference
    pub execution_mode: ExecutionMode,
    /// Worker count override (None = detected cores)
    pub threads: Option<usize>,
    /// Sentence count below which the parallel path degrades to
    /// sequential
    pub min_parallel_sentences: usize,
}

impl Default for Config {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            language: "en".to_string(),
            stop_words: None,
            execution_mode: engine.execution_mode,
            threads: engine.threads,
            min_parallel_sentences: engine.min_parallel_sentences,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Sequential preset
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Parallel preset; still degrades below the sentence threshold
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// Recognized keys: `language`, `stop_words`, `execution_mode`
    /// (`"sequential"`, `"parallel"`, `"auto"`), `threads`,
    /// `min_parallel_sentences`.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| ApiError::Config(e.to_string()))?;
        file.into_config()
    }

    /// Read a configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Convert to the engine-layer configuration
    pub(crate) fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            execution_mode: self.execution_mode,
            threads: self.threads,
            min_parallel_sentences: self.min_parallel_sentences,
        }
    }

    /// Build the stop-word profile, surfacing configuration errors
    pub(crate) fn build_profile(&self) -> Result<LanguageProfile> {
        let profile = match &self.stop_words {
            Some(words) => {
                LanguageProfile::from_words(words).map_err(|e| ApiError::Config(e.to_string()))?
            }
            None => LanguageProfile::for_language(&self.language)
                .map_err(|e| ApiError::Config(e.to_string()))?,
        };
        Ok(profile)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language for the built-in stop-word list
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Supply a custom stop-word set, replacing the built-in list
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the worker count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the minimum sentence count for the parallel path
    pub fn min_parallel_sentences(mut self, count: usize) -> Self {
        self.config.min_parallel_sentences = count;
        self
    }

    /// Build the configuration, validating the stop-word profile
    pub fn build(self) -> Result<Config> {
        if self.config.language.is_empty() && self.config.stop_words.is_none() {
            return Err(ApiError::Config(
                "language or stop_words required".to_string(),
            ));
        }
        self.config.build_profile()?;
        Ok(self.config)
    }
}

/// Serde mirror of [`Config`] for file-based configuration
#[cfg(feature = "serde")]
#[derive(Debug, serde::Deserialize)]
struct ConfigFile {
    language: Option<String>,
    stop_words: Option<Vec<String>>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    min_parallel_sentences: Option<usize>,
}

#[cfg(feature = "serde")]
impl ConfigFile {
    fn into_config(self) -> Result<Config> {
        let mut config = Config::default();
        if let Some(language) = self.language {
            config.language = language;
        }
        config.stop_words = self.stop_words;
        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if let Some(count) = self.min_parallel_sentences {
            config.min_parallel_sentences = count;
        }
        config.build_profile()?;
        Ok(config)
    }
}
