// Online translation providers
//
// Each provider is a thin request/response adapter around one external
// translation service. Providers are created through a factory so the
// fallback chain can be reordered from configuration:
// - MyMemory: GET with query parameters
// - LibreTranslate: POST with a form-encoded body
//
// To add a new provider:
// 1. Create a module with the service's request/response structs
// 2. Implement the Provider trait for it
// 3. Add a variant to ProviderKind and wire it into ProviderFactory

pub mod common;
pub mod libretranslate;
pub mod mymemory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::error::{Result, TerjemahError};

pub const SOURCE_LANG: &str = "id";
pub const TARGET_LANG: &str = "en";

/// Where a translation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    MyMemory,
    LibreTranslate,
    Dictionary,
    /// No stage produced text
    None,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MyMemory => "mymemory",
            Self::LibreTranslate => "libretranslate",
            Self::Dictionary => "dictionary",
            Self::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MyMemory => "MyMemory",
            Self::LibreTranslate => "LibreTranslate",
            Self::Dictionary => "Dictionary",
            Self::None => "None",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    source_text: String,
    source_lang: &'static str,
    target_lang: &'static str,
}

impl TranslationRequest {
    /// Build a request from raw user input. Blank input is rejected.
    pub fn new(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TerjemahError::EmptyInput);
        }

        Ok(Self {
            source_text: trimmed.to_string(),
            source_lang: SOURCE_LANG,
            target_lang: TARGET_LANG,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn source_lang(&self) -> &'static str {
        self.source_lang
    }

    pub fn target_lang(&self) -> &'static str {
        self.target_lang
    }

    /// Language pair in MyMemory's `id|en` form
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source_lang, self.target_lang)
    }
}

/// A provider attempt that produced no usable text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub provider_used: ProviderKind,
    /// Failed attempts in the order they were made
    pub failures: Vec<ProviderFailure>,
}

impl TranslationResult {
    pub fn is_fallback(&self) -> bool {
        self.provider_used == ProviderKind::Dictionary
    }

    pub fn is_failure(&self) -> bool {
        self.provider_used == ProviderKind::None
    }
}

/// One external translation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Translate the request with a single network call.
    ///
    /// Every failure (transport, timeout, status, body shape) comes back as
    /// `TerjemahError::ProviderUnavailable`.
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

/// Factory for creating provider instances
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a single provider from configuration
    pub fn create_provider(kind: ProviderKind, config: &Config) -> Result<Box<dyn Provider>> {
        let timeout = config.translate.timeout();
        match kind {
            ProviderKind::MyMemory => Ok(Box::new(mymemory::MyMemoryProvider::new(
                &config.mymemory,
                timeout,
            )?)),
            ProviderKind::LibreTranslate => Ok(Box::new(
                libretranslate::LibreTranslateProvider::new(&config.libretranslate, timeout)?,
            )),
            other => Err(TerjemahError::Config(format!(
                "'{}' is not an online provider",
                other.as_str()
            ))),
        }
    }

    /// Create the configured providers in priority order
    pub fn create_chain(config: &Config) -> Result<Vec<Box<dyn Provider>>> {
        config
            .translate
            .providers
            .iter()
            .map(|kind| Self::create_provider(*kind, config))
            .collect()
    }
}
