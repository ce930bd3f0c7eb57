use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dictionary::PhraseDictionary;
use crate::error::{Result, TerjemahError};
use crate::translate::{
    Provider, ProviderFactory, ProviderFailure, ProviderKind, TranslationRequest,
    TranslationResult,
};

/// Runs the fallback chain: each provider in order, then the dictionary.
pub struct TranslationOrchestrator {
    providers: Vec<Box<dyn Provider>>,
    dictionary: Option<PhraseDictionary>,
}

impl TranslationOrchestrator {
    /// `dictionary = None` disables the offline fallback.
    pub fn new(providers: Vec<Box<dyn Provider>>, dictionary: Option<PhraseDictionary>) -> Self {
        Self {
            providers,
            dictionary,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let providers = ProviderFactory::create_chain(config)?;
        let dictionary = config
            .translate
            .dictionary_fallback
            .then(|| PhraseDictionary::with_extra(&config.dictionary.phrases));

        Ok(Self::new(providers, dictionary))
    }

    /// Stages in the order they are tried
    pub fn chain(&self) -> Vec<ProviderKind> {
        let mut chain: Vec<_> = self.providers.iter().map(|p| p.kind()).collect();
        if self.dictionary.is_some() {
            chain.push(ProviderKind::Dictionary);
        }
        chain
    }

    pub fn dictionary(&self) -> Option<&PhraseDictionary> {
        self.dictionary.as_ref()
    }

    /// Validate raw input and translate it
    pub async fn translate_text(&self, text: &str) -> Result<TranslationResult> {
        let request = TranslationRequest::new(text)?;
        Ok(self.translate(&request).await)
    }

    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let kind = provider.kind();
            debug!("Trying provider {}", kind);

            match provider.translate(request).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!("Translated with {}", kind);
                    return TranslationResult {
                        translated_text: text,
                        provider_used: kind,
                        failures,
                    };
                }
                Ok(_) => {
                    info!("{} returned an empty translation", kind);
                    failures.push(ProviderFailure {
                        provider: kind,
                        reason: "Empty translation received".to_string(),
                    });
                }
                Err(TerjemahError::ProviderUnavailable { provider, reason }) => {
                    info!("{} unavailable: {}", provider, reason);
                    failures.push(ProviderFailure { provider, reason });
                }
                Err(e) => {
                    info!("{} failed: {}", kind, e);
                    failures.push(ProviderFailure {
                        provider: kind,
                        reason: e.to_string(),
                    });
                }
            }
        }

        match &self.dictionary {
            Some(dictionary) => {
                info!("All providers failed, using phrase dictionary");
                TranslationResult {
                    translated_text: dictionary.lookup(request.source_text()),
                    provider_used: ProviderKind::Dictionary,
                    failures,
                }
            }
            None => {
                warn!("All providers failed and dictionary fallback is disabled");
                TranslationResult {
                    translated_text: String::new(),
                    provider_used: ProviderKind::None,
                    failures,
                }
            }
        }
    }
}
