use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::envelope::EnvelopeError;

/// Records delivered to one invocation by the queue trigger.
///
/// Decodes the trigger event shape `{"Records": [...]}`. The relay only ever
/// accepts a batch of exactly one item; see [`crate::extract`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueuedBatch {
    #[serde(rename = "Records", default)]
    records: Vec<QueuedItem>,
}

impl QueuedBatch {
    pub fn new(records: Vec<QueuedItem>) -> Self {
        Self { records }
    }

    /// A batch holding a single item with the given body.
    pub fn single(body: impl Into<String>) -> Self {
        Self::new(vec![QueuedItem::new(body)])
    }

    /// Decode a full trigger event.
    pub fn from_event_json(json: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(json).map_err(EnvelopeError::Event)
    }

    pub fn items(&self) -> &[QueuedItem] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Message id of the first record, if the queue supplied one.
    pub fn message_id(&self) -> Option<&str> {
        self.records.first().and_then(QueuedItem::message_id)
    }
}

/// One queued record. Only `body` is read by the relay; the rest is kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt_handle: Option<String>,
    body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    message_attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    md5_of_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event_source: Option<String>,
    #[serde(
        default,
        rename = "eventSourceARN",
        skip_serializing_if = "Option::is_none"
    )]
    event_source_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aws_region: Option<String>,
}

impl QueuedItem {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            message_id: None,
            receipt_handle: None,
            body: body.into(),
            attributes: BTreeMap::new(),
            message_attributes: BTreeMap::new(),
            md5_of_body: None,
            event_source: None,
            event_source_arn: None,
            aws_region: None,
        }
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    /// Serialized notification envelope.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn receipt_handle(&self) -> Option<&str> {
        self.receipt_handle.as_deref()
    }

    pub fn event_source(&self) -> Option<&str> {
        self.event_source.as_deref()
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }
}
