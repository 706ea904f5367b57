//! Delivery Client - reports push delivery back to the chat server
//!
//! - status: the delivery status value and its request body
//! - client: one-shot HTTP reporter for the status endpoint

pub mod client;
pub mod status;

pub use client::{DeliveryClient, DeliveryError, DEFAULT_ENDPOINT};
pub use status::{DeliveryStatus, JSON_CONTENT_TYPE};
