//! Delivery status report sent once per received chat message

/// Content type sent with every report
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Marks a chat message as delivered to this device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub chat_id: String,
    /// Missing when the push payload carried no `messageId`
    pub message_id: Option<String>,
}

impl DeliveryStatus {
    pub fn new(chat_id: impl Into<String>, message_id: Option<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    /// Renders the request body by plain string concatenation.
    ///
    /// Values are written as-is, so a `"` or `\` inside either id produces
    /// malformed JSON. A missing message id is written as the text `null`
    /// inside the quotes. The chat server parses this exact shape.
    pub fn to_body(&self) -> String {
        let message_id = self.message_id.as_deref().unwrap_or("null");
        format!(
            "{{\"chatId\":\"{}\",\"messageId\":\"{}\"}}",
            self.chat_id, message_id
        )
    }
}
