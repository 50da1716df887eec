//! Contact message delivery.
//!
//! The form only decides *when* a message is ready; a [`FormSubmitter`]
//! decides where it goes. The UI never waits on delivery: requests are handed
//! to a [`SubmissionWorker`] and the outcome comes back as an app event.

mod outbox;
mod webhook;
mod worker;

pub use outbox::OutboxSubmitter;
pub use webhook::WebhookSubmitter;
pub use worker::{SubmissionWorker, SubmitRequest, SubmitSender, SUBMIT_QUEUE_CAPACITY};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ContactConfig, SubmitterKind};

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint rejected the message (HTTP {status})")]
    Rejected { status: u16 },

    #[error("could not reach the endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not write the outbox: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode the message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("message delivery is unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Where contact messages are delivered.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Used when delivery is switched off; every submit fails visibly.
pub struct DisabledSubmitter;

#[async_trait]
impl FormSubmitter for DisabledSubmitter {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        Err(SubmitError::Unavailable {
            reason: "message delivery is turned off; please use email instead".to_string(),
        })
    }
}

/// Build the submitter selected in the `[contact]` config section.
pub fn from_config(config: &ContactConfig) -> Result<Arc<dyn FormSubmitter>, SubmitError> {
    let submitter: Arc<dyn FormSubmitter> = match config.submitter {
        SubmitterKind::Outbox => Arc::new(OutboxSubmitter::new(config.outbox_path())),
        SubmitterKind::Webhook => {
            let url = config.webhook_url.clone().ok_or_else(|| SubmitError::Unavailable {
                reason: "no webhook_url configured".to_string(),
            })?;
            Arc::new(WebhookSubmitter::new(url, config.timeout())?)
        }
        SubmitterKind::Disabled => Arc::new(DisabledSubmitter),
    };
    tracing::info!(submitter = submitter.name(), "contact submitter ready");
    Ok(submitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_omitted_from_json_when_absent() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: None,
            message: "Hello".into(),
        };
        let json = serde_json::to_value(&message).expect("serializable");
        assert!(json.get("subject").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn disabled_submitter_reports_unavailable() {
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: None,
            message: "Hello".into(),
        };
        let err = DisabledSubmitter.submit(&message).await.unwrap_err();
        assert!(matches!(err, SubmitError::Unavailable { .. }));
    }
}
