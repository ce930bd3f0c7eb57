use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, TerjemahError};
use crate::translate::ProviderKind;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "terjemah.toml";

fn default_providers() -> Vec<ProviderKind> {
    vec![ProviderKind::MyMemory, ProviderKind::LibreTranslate]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_dictionary_fallback() -> bool {
    true
}

fn default_mymemory_endpoint() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_libretranslate_endpoint() -> String {
    "https://libretranslate.com/translate".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub mymemory: MyMemoryConfig,
    #[serde(default)]
    pub libretranslate: LibreTranslateConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Online providers in the order they are tried
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
    /// Per-request timeout for each provider call (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Use the phrase dictionary when every provider fails
    #[serde(default = "default_dictionary_fallback")]
    pub dictionary_fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyMemoryConfig {
    /// GET endpoint of the MyMemory translation API
    #[serde(default = "default_mymemory_endpoint")]
    pub endpoint: String,
    /// Contact email, raises the anonymous daily quota
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreTranslateConfig {
    /// POST endpoint of the LibreTranslate API
    #[serde(default = "default_libretranslate_endpoint")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Extra phrases merged over the built-in table
    #[serde(default)]
    pub phrases: BTreeMap<String, String>,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            timeout_secs: default_timeout_secs(),
            dictionary_fallback: default_dictionary_fallback(),
        }
    }
}

impl Default for MyMemoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_mymemory_endpoint(),
            email: None,
        }
    }
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: default_libretranslate_endpoint(),
            api_key: None,
        }
    }
}

impl TranslateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TerjemahError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| TerjemahError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TerjemahError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TerjemahError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.translate.timeout_secs == 0 {
            return Err(TerjemahError::Config(
                "translate.timeout_secs must be greater than zero".to_string(),
            ));
        }

        let mut seen = Vec::with_capacity(self.translate.providers.len());
        for provider in &self.translate.providers {
            if seen.contains(provider) {
                return Err(TerjemahError::Config(format!(
                    "'{}' is listed more than once in translate.providers",
                    provider.as_str()
                )));
            }
            seen.push(*provider);

            match provider {
                ProviderKind::MyMemory => {
                    if self.mymemory.endpoint.trim().is_empty() {
                        return Err(TerjemahError::Config(
                            "mymemory.endpoint must not be empty".to_string(),
                        ));
                    }
                }
                ProviderKind::LibreTranslate => {
                    if self.libretranslate.endpoint.trim().is_empty() {
                        return Err(TerjemahError::Config(
                            "libretranslate.endpoint must not be empty".to_string(),
                        ));
                    }
                }
                other => {
                    return Err(TerjemahError::Config(format!(
                        "'{}' is not an online provider. Valid providers: mymemory, libretranslate",
                        other.as_str()
                    )));
                }
            }
        }

        if let Some((key, _)) = self
            .dictionary
            .phrases
            .iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(TerjemahError::Config(format!(
                "dictionary.phrases entry '{}' has an empty translation",
                key
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_chain() {
        let config = Config::default();
        assert_eq!(
            config.translate.providers,
            vec![ProviderKind::MyMemory, ProviderKind::LibreTranslate]
        );
        assert_eq!(config.translate.timeout(), Duration::from_secs(10));
        assert!(config.translate.dictionary_fallback);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_takes_defaults() {
        let config = Config::from_toml_str(
            r#"
            [translate]
            providers = ["libretranslate"]

            [libretranslate]
            api_key = "secret"

            [dictionary.phrases]
            kucing = "cat"
            "#,
        )
        .unwrap();

        assert_eq!(config.translate.providers, vec![ProviderKind::LibreTranslate]);
        assert_eq!(config.translate.timeout_secs, 10);
        assert_eq!(config.libretranslate.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.libretranslate.endpoint,
            "https://libretranslate.com/translate"
        );
        assert_eq!(config.mymemory.endpoint, "https://api.mymemory.translated.net/get");
        assert_eq!(config.dictionary.phrases.get("kucing").map(String::as_str), Some("cat"));
    }

    #[test]
    fn rejects_dictionary_in_provider_list() {
        let err = Config::from_toml_str(
            r#"
            [translate]
            providers = ["mymemory", "dictionary"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, TerjemahError::Config(msg) if msg.contains("not an online provider")));
    }

    #[test]
    fn rejects_unknown_provider_name() {
        let err = Config::from_toml_str(
            r#"
            [translate]
            providers = ["google"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, TerjemahError::Config(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Config::from_toml_str("[translate]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, TerjemahError::Config(msg) if msg.contains("timeout_secs")));
    }

    #[test]
    fn rejects_blank_phrase_translation() {
        let err = Config::from_toml_str(
            "[translate]\nproviders = []\n[dictionary.phrases]\nhalo = \"\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, TerjemahError::Config(msg) if msg.contains("halo")));

        let err = Config::from_toml_str("[dictionary.phrases]\nkucing = \"   \"\n").unwrap_err();
        assert!(matches!(err, TerjemahError::Config(msg) if msg.contains("empty translation")));
    }

    #[test]
    fn rejects_duplicate_providers() {
        let err = Config::from_toml_str(
            r#"
            [translate]
            providers = ["mymemory", "mymemory"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, TerjemahError::Config(msg) if msg.contains("more than once")));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut config = Config::default();
        config.mymemory.email = Some("user@example.com".to_string());
        config
            .dictionary
            .phrases
            .insert("kucing".to_string(), "cat".to_string());
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.mymemory.email.as_deref(), Some("user@example.com"));
        assert_eq!(loaded.translate.providers, config.translate.providers);
        assert_eq!(loaded.dictionary.phrases, config.dictionary.phrases);
    }
}
