use std::fmt;

use crate::translate::{ProviderKind, TranslationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    fn tag(&self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.tag(), self.text)
    }
}

/// Validation warning for blank input
pub fn empty_input_message() -> StatusMessage {
    StatusMessage::new(StatusLevel::Warning, "Please enter text to translate.")
}

/// Status lines describing how a result was produced
pub fn status_messages(result: &TranslationResult) -> Vec<StatusMessage> {
    let mut messages: Vec<StatusMessage> = result
        .failures
        .iter()
        .map(|failure| {
            StatusMessage::new(
                StatusLevel::Warning,
                format!("{} unavailable: {}", failure.provider, failure.reason),
            )
        })
        .collect();

    let outcome = match result.provider_used {
        ProviderKind::MyMemory | ProviderKind::LibreTranslate => StatusMessage::new(
            StatusLevel::Success,
            format!("Translation succeeded via {}.", result.provider_used),
        ),
        ProviderKind::Dictionary => StatusMessage::new(
            StatusLevel::Warning,
            "Online translation services are unreachable; showing a simple dictionary-based translation.",
        ),
        ProviderKind::None => StatusMessage::new(
            StatusLevel::Error,
            "Translation failed: no provider produced a result.",
        ),
    };
    messages.push(outcome);
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::ProviderFailure;

    fn result(provider_used: ProviderKind, failures: Vec<ProviderFailure>) -> TranslationResult {
        TranslationResult {
            translated_text: "hello".to_string(),
            provider_used,
            failures,
        }
    }

    #[test]
    fn success_without_failures_is_single_line() {
        let messages = status_messages(&result(ProviderKind::MyMemory, vec![]));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, StatusLevel::Success);
        assert_eq!(messages[0].to_string(), "[ok] Translation succeeded via MyMemory.");
    }

    #[test]
    fn failures_are_warnings_before_outcome() {
        let failures = vec![
            ProviderFailure {
                provider: ProviderKind::MyMemory,
                reason: "request timed out".to_string(),
            },
            ProviderFailure {
                provider: ProviderKind::LibreTranslate,
                reason: "API error 503".to_string(),
            },
        ];
        let messages = status_messages(&result(ProviderKind::Dictionary, failures));

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, "MyMemory unavailable: request timed out");
        assert_eq!(messages[1].text, "LibreTranslate unavailable: API error 503");
        assert_eq!(messages[2].level, StatusLevel::Warning);
        assert!(messages[2].text.contains("dictionary"));
    }

    #[test]
    fn total_failure_is_error() {
        let messages = status_messages(&result(ProviderKind::None, vec![]));
        assert_eq!(messages.last().map(|m| m.level), Some(StatusLevel::Error));
    }

    #[test]
    fn empty_input_is_warning() {
        assert_eq!(empty_input_message().to_string(), "[warn] Please enter text to translate.");
    }
}
