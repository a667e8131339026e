use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::domain::{MessageText, PhoneNumber, SendSmsError, SmsCandidate};
use crate::transport::queue::QueuedBatch;

const MESSAGE_FIELD: &str = "Message";

#[derive(Debug, thiserror::Error)]
/// Why a queued record could not be unwrapped into a payload.
///
/// Every variant surfaces to callers as [`SendSmsError::Structure`].
pub enum EnvelopeError {
    #[error("invalid queue event JSON: {0}")]
    Event(#[source] serde_json::Error),

    #[error("expected exactly one queued item, got {actual}")]
    BatchSize { actual: usize },

    #[error("invalid envelope JSON: {0}")]
    Body(#[source] serde_json::Error),

    #[error("envelope must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("envelope has no `Message` field")]
    MissingMessage,

    #[error("envelope `Message` must be a string, got {found}")]
    MessageNotAString { found: &'static str },

    #[error("invalid payload JSON: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("payload is null")]
    NullPayload,
}

impl From<EnvelopeError> for SendSmsError {
    fn from(_: EnvelopeError) -> Self {
        Self::Structure
    }
}

/// Unwrap the single queued record into an unvalidated payload.
///
/// Two layers are decoded: the record body is a notification envelope whose
/// `Message` field is itself a serialized `{phoneNumber, message}` payload.
/// Payload fields are returned as-is; validation happens on [`SmsCandidate`].
pub fn extract(batch: &QueuedBatch) -> Result<SmsCandidate, EnvelopeError> {
    let item = match batch.items() {
        [item] => item,
        items => return Err(EnvelopeError::BatchSize { actual: items.len() }),
    };

    let envelope = decode_envelope(item.body())?;
    decode_payload(&payload_json(&envelope)?)
}

fn decode_envelope(body: &str) -> Result<Map<String, Value>, EnvelopeError> {
    match serde_json::from_str::<Value>(body).map_err(EnvelopeError::Body)? {
        Value::Object(envelope) => Ok(envelope),
        other => Err(EnvelopeError::NotAnObject {
            found: type_name(&other),
        }),
    }
}

// Scalar `Message` values are read as their JSON text, so `5` or `true`
// decode to a payload without fields.
fn payload_json(envelope: &Map<String, Value>) -> Result<Cow<'_, str>, EnvelopeError> {
    match envelope.get(MESSAGE_FIELD) {
        Some(value) if !is_truthy(value) => Err(EnvelopeError::MissingMessage),
        None => Err(EnvelopeError::MissingMessage),
        Some(Value::String(payload)) => Ok(Cow::Borrowed(payload)),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(Cow::Owned(scalar.to_string())),
        Some(other) => Err(EnvelopeError::MessageNotAString {
            found: type_name(other),
        }),
    }
}

// A payload that is valid JSON but not an object carries no fields; the
// validators then reject it. `null` cannot be destructured at all.
fn decode_payload(payload: &str) -> Result<SmsCandidate, EnvelopeError> {
    match serde_json::from_str::<Value>(payload).map_err(EnvelopeError::Payload)? {
        Value::Null => Err(EnvelopeError::NullPayload),
        Value::Object(mut fields) => Ok(SmsCandidate {
            phone_number: fields.remove(PhoneNumber::FIELD),
            message: fields.remove(MessageText::FIELD),
        }),
        _ => Ok(SmsCandidate::default()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
