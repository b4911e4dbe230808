//! Notification delivery.
//!
//! Delivery happens on a spawned task after the scheduling operation has
//! committed; failures are logged and otherwise ignored.

use std::sync::Arc;

use async_trait::async_trait;
use salonbook_core::{notify::Notifier, store::AppointmentStore};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Writes notifications to the log instead of delivering them.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> eyre::Result<()> {
        info!("Notification to {}: {} - {}", recipient, subject, body);
        Ok(())
    }
}

/// POSTs each notification as JSON to a webhook.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> eyre::Result<()> {
        self.client
            .post(&self.url)
            .json(&json!({
                "recipient": recipient,
                "subject": subject,
                "body": body,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Sends `subject`/`body` to the user's address without waiting for it.
pub fn dispatch(
    store: Arc<dyn AppointmentStore>,
    notifier: Arc<dyn Notifier>,
    user_id: Uuid,
    (subject, body): (String, String),
) {
    tokio::spawn(async move {
        let recipient = match store.find_user_email(user_id).await {
            Ok(Some(email)) => email,
            Ok(None) => {
                warn!("No contact address for user {}, notification dropped", user_id);
                return;
            }
            Err(e) => {
                warn!("Could not look up contact for user {}: {}", user_id, e);
                return;
            }
        };

        if let Err(e) = notifier.notify(&recipient, &subject, &body).await {
            warn!("Failed to send \"{}\" to {}: {}", subject, recipient, e);
        }
    });
}
