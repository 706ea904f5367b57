//! Notification receiver
//!
//! Called once per push message. Messages that name a chat trigger exactly
//! one delivery report; everything else is a no-op. Report failures are
//! logged and returned as an outcome, never propagated to the host.

use anyhow::Result;
use async_trait::async_trait;
use delivery_client::{DeliveryClient, DeliveryStatus};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::message::PushMessage;

/// Sends a delivery status somewhere and returns the response code
#[async_trait]
pub trait DeliveryReporter: Send + Sync {
    async fn report(&self, status: &DeliveryStatus) -> Result<u16>;
}

#[async_trait]
impl DeliveryReporter for DeliveryClient {
    async fn report(&self, status: &DeliveryStatus) -> Result<u16> {
        Ok(self.send(status).await?)
    }
}

/// What happened to one push message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReceiveOutcome {
    /// No `chatId`, nothing was sent
    Ignored,
    /// The endpoint answered; the code is not checked
    Reported { status: u16 },
    /// The report could not be sent
    Failed { error: String },
}

/// Handle one push message from the host runtime.
///
/// Waits for the report round trip when one is made.
pub async fn handle_message<R>(reporter: &R, message: &PushMessage) -> ReceiveOutcome
where
    R: DeliveryReporter + ?Sized,
{
    info!("Message received");

    let Some(status) = message.delivery_status() else {
        debug!("No chatId in push data, skipping delivery report");
        return ReceiveOutcome::Ignored;
    };

    match reporter.report(&status).await {
        Ok(code) => ReceiveOutcome::Reported { status: code },
        Err(e) => {
            error!(
                "Failed to send delivery status for chat {}: {:#}",
                status.chat_id, e
            );
            ReceiveOutcome::Failed {
                error: format!("{:#}", e),
            }
        }
    }
}
