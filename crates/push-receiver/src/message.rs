use delivery_client::DeliveryStatus;
use serde::Deserialize;
use std::collections::HashMap;

pub const CHAT_ID_KEY: &str = "chatId";
pub const MESSAGE_ID_KEY: &str = "messageId";

/// A push message delivered by the host runtime
///
/// Only the string data map is kept. Deserializes from either a flat JSON
/// object of strings or an FCM-style envelope `{"data": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "PushPayload")]
pub struct PushMessage {
    data: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PushPayload {
    Envelope { data: HashMap<String, String> },
    Flat(HashMap<String, String>),
}

impl From<PushPayload> for PushMessage {
    fn from(payload: PushPayload) -> Self {
        match payload {
            PushPayload::Envelope { data } | PushPayload::Flat(data) => Self { data },
        }
    }
}

impl PushMessage {
    pub fn new(data: HashMap<String, String>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// The delivery report for this message, if it names a chat.
    ///
    /// `messageId` is optional and never validated.
    pub fn delivery_status(&self) -> Option<DeliveryStatus> {
        let chat_id = self.get(CHAT_ID_KEY)?;
        Some(DeliveryStatus::new(
            chat_id,
            self.get(MESSAGE_ID_KEY).map(str::to_string),
        ))
    }
}

impl<K, V> FromIterator<(K, V)> for PushMessage
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_status_requires_chat_id() {
        let message: PushMessage = [("foo", "bar"), ("messageId", "m1")].into_iter().collect();
        assert!(message.delivery_status().is_none());
    }

    #[test]
    fn test_delivery_status_with_both_ids() {
        let message: PushMessage = [("chatId", "c1"), ("messageId", "m1")].into_iter().collect();
        assert_eq!(
            message.delivery_status(),
            Some(DeliveryStatus::new("c1", Some("m1".to_string())))
        );
    }

    #[test]
    fn test_delivery_status_without_message_id() {
        let message: PushMessage = [("chatId", "c1")].into_iter().collect();
        assert_eq!(
            message.delivery_status(),
            Some(DeliveryStatus::new("c1", None))
        );
    }

    #[test]
    fn test_empty_chat_id_still_counts() {
        let message: PushMessage = [("chatId", "")].into_iter().collect();
        assert!(message.delivery_status().is_some());
    }

    #[test]
    fn test_deserialize_flat() {
        let message: PushMessage =
            serde_json::from_str(r#"{"chatId":"c1","messageId":"m1"}"#).unwrap();
        assert_eq!(message.get(CHAT_ID_KEY), Some("c1"));
        assert_eq!(message.get(MESSAGE_ID_KEY), Some("m1"));
    }

    #[test]
    fn test_deserialize_envelope() {
        let message: PushMessage = serde_json::from_str(
            r#"{"from":"/topics/chat","data":{"chatId":"c1","messageId":"m1"}}"#,
        )
        .unwrap();
        assert_eq!(message.data().len(), 2);
        assert_eq!(message.get(CHAT_ID_KEY), Some("c1"));
    }

    #[test]
    fn test_deserialize_flat_with_string_data_key() {
        let message: PushMessage = serde_json::from_str(r#"{"data":"x","chatId":"c1"}"#).unwrap();
        assert_eq!(message.get("data"), Some("x"));
        assert!(message.contains_key(CHAT_ID_KEY));
    }

    #[test]
    fn test_deserialize_rejects_non_string_values() {
        assert!(serde_json::from_str::<PushMessage>(r#"{"chatId":1}"#).is_err());
    }
}
