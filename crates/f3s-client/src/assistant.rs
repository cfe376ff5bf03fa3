//! Client for the hosted virtual-assistant service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use f3s_core::config::AssistantConfig;
use f3s_core::{AppError, AppResult, ErrorKind};

use crate::error::classify;

/// A user utterance sent to the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessage {
    /// Conversation ID; generated when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Signed-in user, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The utterance.
    pub text: String,
    /// BCP 47 locale.
    #[serde(default)]
    pub locale: Option<String>,
}

/// Slots the assistant has filled so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wants_to_see_matches: Option<bool>,
}

/// Widget the front end should render with the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantUi {
    /// `message`, `cards`, or `paywall`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

/// The assistant's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub reply: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub slots: AssistantSlots,
    pub ui: AssistantUi,
}

/// Posts messages to the assistant's `/va/message` endpoint.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

impl AssistantClient {
    /// Creates a client for the configured service.
    pub fn new(config: AssistantConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self { http, config })
    }

    /// Sends one message, filling in the session ID and locale when absent.
    pub async fn send(&self, message: AssistantMessage) -> AppResult<AssistantReply> {
        if message.text.trim().is_empty() {
            return Err(AppError::validation("Message text is required"));
        }

        let message = AssistantMessage {
            session_id: Some(
                message
                    .session_id
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
            ),
            locale: Some(
                message
                    .locale
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| self.config.default_locale.clone()),
            ),
            ..message
        };

        debug!(session_id = ?message.session_id, "Sending assistant message");
        let response = self
            .http
            .post(&self.config.url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.config.url, error = %e, "Assistant unreachable");
                AppError::with_source(
                    ErrorKind::Network,
                    format!("Virtual assistant unreachable: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Network, format!("Failed to read response: {e}"), e)
        })?;
        if !status.is_success() {
            return Err(classify(status, &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
