use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::common::{build_client, describe_request_error, read_json, usable_text};
use super::{Provider, ProviderKind, TranslationRequest};
use crate::config::LibreTranslateConfig;
use crate::error::{Result, TerjemahError};

#[derive(Debug, Serialize)]
struct LibreTranslateForm<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Secondary provider: LibreTranslate POST API
pub struct LibreTranslateProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    pub fn new(config: &LibreTranslateConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Provider for LibreTranslateProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LibreTranslate
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let kind = self.kind();
        let form = LibreTranslateForm {
            q: request.source_text(),
            source: request.source_lang(),
            target: request.target_lang(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!("Sending translation request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| TerjemahError::unavailable(kind, describe_request_error(&e)))?;

        let body: LibreTranslateResponse = read_json(kind, response).await?;
        usable_text(kind, body.translated_text)
    }
}
