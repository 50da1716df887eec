use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use super::{ContactMessage, FormSubmitter, SubmitError};

/// POSTs each message as JSON to a form endpoint.
pub struct WebhookSubmitter {
    client: Client,
    url: String,
}

impl WebhookSubmitter {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl FormSubmitter for WebhookSubmitter {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        tracing::debug!(url = %self.url, "posting contact message");

        let start = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("Accept", "application/json")
            .json(message)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "contact endpoint rejected message");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(status = %status, latency_ms, "contact message delivered");
        Ok(())
    }
}
