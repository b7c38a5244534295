use std::result;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::Deserialize;

use crate::error::Result;
use crate::signature_request::SignatureRequestDetail;

/// A callback HelloSign posts to your account or app callback URL.
///
/// HelloSign delivers the payload as the `json` form field of the callback
/// request; pass that field to [`Event::from_json`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct Event {
    pub event: EventDetail,
    pub signature_request: Option<SignatureRequestDetail>,
}

impl Event {
    pub fn from_json(payload: &str) -> Result<Event> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct EventDetail {
    #[serde(
        deserialize_with = "deserialize_event_time",
        serialize_with = "chrono::serde::ts_seconds_option::serialize"
    )]
    pub event_time: Option<DateTime<Utc>>,
    pub event_type: String,
    pub event_hash: String,
    pub event_metadata: EventMetadata,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct EventMetadata {
    pub related_signature_id: Option<String>,
    pub reported_for_account_id: Option<String>,
    pub reported_for_app_id: Option<String>,
}

// Callbacks send the timestamp as a string, API responses as a number.
fn deserialize_event_time<'de, D>(
    deserializer: D,
) -> result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawTime {
        Number(i64),
        Text(String),
    }

    let secs = match Option::<RawTime>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawTime::Number(n)) => n,
        Some(RawTime::Text(s)) if s.is_empty() => return Ok(None),
        Some(RawTime::Text(s)) => {
            s.parse::<i64>().map_err(serde::de::Error::custom)?
        }
    };
    Utc.timestamp_opt(secs, 0)
        .single()
        .map(Some)
        .ok_or_else(|| {
            serde::de::Error::custom(format!("invalid timestamp {}", secs))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_request_signed_event() {
        let event = Event::from_json(
            r#"{
                "event": {
                    "event_time": "1348177752",
                    "event_type": "signature_request_signed",
                    "event_hash": "3a31324d1919d7cdc849ff407adf38fc01e01107d9400b028ff8c892469ca947",
                    "event_metadata": {
                        "related_signature_id": "ad4d8a769b555fa5ef38691465d426682bf2c992",
                        "reported_for_account_id": "63522885f9261e2b04eea043933ee7313eb674fd",
                        "reported_for_app_id": null
                    }
                },
                "signature_request": {
                    "signature_request_id": "2f9781e1a8e2045224d808c153c2e1d3df6f8f2f",
                    "is_complete": false
                }
            }"#,
        )
        .unwrap();
        assert_eq!(event.event.event_type, "signature_request_signed");
        assert_eq!(event.event.event_time.map(|t| t.timestamp()), Some(1348177752));
        assert_eq!(
            event.event.event_metadata.related_signature_id.as_deref(),
            Some("ad4d8a769b555fa5ef38691465d426682bf2c992")
        );
        assert_eq!(event.event.event_metadata.reported_for_app_id, None);
        assert_eq!(
            event.signature_request.unwrap().signature_request_id,
            "2f9781e1a8e2045224d808c153c2e1d3df6f8f2f"
        );
    }

    #[test]
    fn malformed_event_time_is_rejected() {
        let event = Event::from_json(r#"{"event":{"event_time":"yesterday"}}"#);
        assert!(event.is_err());
    }

    #[test]
    fn callback_test_event_has_no_signature_request() {
        let event = Event::from_json(
            r#"{"event":{"event_type":"callback_test","event_time":1348177752}}"#,
        )
        .unwrap();
        assert_eq!(event.event.event_type, "callback_test");
        assert_eq!(event.signature_request, None);
    }
}
