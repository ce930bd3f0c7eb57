use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use reqwest::Client;
use tracing::debug;

use super::common::{build_client, describe_request_error, read_json, usable_text};
use super::{Provider, ProviderKind, TranslationRequest};
use crate::config::MyMemoryConfig;
use crate::error::{Result, TerjemahError};

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
    /// Number or numeric string depending on the endpoint revision
    #[serde(rename = "responseStatus", default)]
    response_status: Option<Value>,
    #[serde(rename = "responseDetails", default)]
    response_details: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    fn status_ok(&self) -> bool {
        match &self.response_status {
            None | Some(Value::Null) => true,
            Some(Value::Number(n)) => n.as_u64() == Some(200),
            Some(Value::String(s)) => s.trim() == "200",
            Some(_) => false,
        }
    }

    fn details(&self) -> String {
        match &self.response_details {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => "no details".to_string(),
        }
    }
}

/// Primary provider: MyMemory GET API
pub struct MyMemoryProvider {
    client: Client,
    endpoint: String,
    email: Option<String>,
}

impl MyMemoryProvider {
    pub fn new(config: &MyMemoryConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: config.endpoint.clone(),
            email: config.email.clone(),
        })
    }
}

#[async_trait]
impl Provider for MyMemoryProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MyMemory
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let kind = self.kind();
        let langpair = request.langpair();
        let mut query = vec![("q", request.source_text()), ("langpair", langpair.as_str())];
        if let Some(email) = self.email.as_deref() {
            query.push(("de", email));
        }

        debug!("Sending translation request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| TerjemahError::unavailable(kind, describe_request_error(&e)))?;

        let body: MyMemoryResponse = read_json(kind, response).await?;

        if !body.status_ok() {
            return Err(TerjemahError::unavailable(
                kind,
                format!("API rejected request: {}", body.details()),
            ));
        }

        usable_text(kind, body.response_data.and_then(|data| data.translated_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn provider_for(server: &MockServer, timeout: Duration) -> MyMemoryProvider {
        let config = MyMemoryConfig {
            endpoint: server.url("/get"),
            email: None,
        };
        MyMemoryProvider::new(&config, timeout).expect("client builds")
    }

    #[tokio::test]
    async fn sends_query_and_extracts_translation() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/get")
                .query_param("q", "Halo, apa kabar?")
                .query_param("langpair", "id|en");
            then.status(200).json_body(json!({
                "responseData": { "translatedText": "Hello, how are you?", "match": 0.99 },
                "responseStatus": 200,
                "responseDetails": ""
            }));
        });

        let provider = provider_for(&server, Duration::from_secs(10));
        let request = TranslationRequest::new("Halo, apa kabar?").unwrap();
        let text = provider.translate(&request).await.unwrap();

        assert_eq!(text, "Hello, how are you?");
        mock.assert();
    }

    #[tokio::test]
    async fn sends_contact_email_when_configured() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/get")
                .query_param("de", "user@example.com");
            then.status(200)
                .json_body(json!({ "responseData": { "translatedText": "hello" } }));
        });

        let config = MyMemoryConfig {
            endpoint: server.url("/get"),
            email: Some("user@example.com".to_string()),
        };
        let provider = MyMemoryProvider::new(&config, Duration::from_secs(10)).unwrap();
        let request = TranslationRequest::new("halo").unwrap();

        assert_eq!(provider.translate(&request).await.unwrap(), "hello");
        mock.assert();
    }

    #[tokio::test]
    async fn non_200_is_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/get");
            then.status(503).body("service down");
        });

        let provider = provider_for(&server, Duration::from_secs(10));
        let request = TranslationRequest::new("halo").unwrap();
        let err = provider.translate(&request).await.unwrap_err();

        assert!(matches!(
            err,
            TerjemahError::ProviderUnavailable { provider: ProviderKind::MyMemory, ref reason }
                if reason.contains("503")
        ));
    }

    #[tokio::test]
    async fn quota_warning_with_200_is_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/get");
            then.status(200).json_body(json!({
                "responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY" },
                "responseStatus": "429",
                "responseDetails": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY"
            }));
        });

        let provider = provider_for(&server, Duration::from_secs(10));
        let request = TranslationRequest::new("halo").unwrap();
        let err = provider.translate(&request).await.unwrap_err();

        assert!(matches!(
            err,
            TerjemahError::ProviderUnavailable { ref reason, .. } if reason.contains("FREE TRANSLATIONS")
        ));
    }

    #[tokio::test]
    async fn missing_field_is_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/get");
            then.status(200).json_body(json!({ "responseStatus": 200 }));
        });

        let provider = provider_for(&server, Duration::from_secs(10));
        let request = TranslationRequest::new("halo").unwrap();

        assert!(matches!(
            provider.translate(&request).await,
            Err(TerjemahError::ProviderUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/get");
            then.status(200).body("<html>not json</html>");
        });

        let provider = provider_for(&server, Duration::from_secs(10));
        let request = TranslationRequest::new("halo").unwrap();

        assert!(matches!(
            provider.translate(&request).await,
            Err(TerjemahError::ProviderUnavailable { ref reason, .. }) if reason.contains("parse")
        ));
    }

    #[tokio::test]
    async fn timeout_is_unavailable() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/get");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "responseData": { "translatedText": "late" } }));
        });

        let provider = provider_for(&server, Duration::from_millis(200));
        let request = TranslationRequest::new("halo").unwrap();
        let err = provider.translate(&request).await.unwrap_err();

        assert!(matches!(
            err,
            TerjemahError::ProviderUnavailable { ref reason, .. } if reason == "request timed out"
        ));
    }
}
