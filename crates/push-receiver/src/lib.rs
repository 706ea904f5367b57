//! Push Receiver Library
//!
//! Receives push messages and reports chat message delivery back to the
//! chat server.

pub mod config;
pub mod host;
pub mod message;
pub mod receiver;

// Re-export key types for convenience
pub use config::Config;
pub use message::PushMessage;
pub use receiver::{handle_message, DeliveryReporter, ReceiveOutcome};
