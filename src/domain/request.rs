use serde_json::Value;

use crate::domain::validation::{ValidationError, validate_message, validate_phone};
use crate::domain::value::{MessageText, PhoneNumber};

/// Inner payload as decoded from the envelope, before field validation.
///
/// Fields hold whatever JSON value the payload carried (or `None` when absent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmsCandidate {
    pub phone_number: Option<Value>,
    pub message: Option<Value>,
}

impl SmsCandidate {
    /// Validate the phone number, then the message.
    ///
    /// The first failing check is returned; the message is not inspected when
    /// the phone number is invalid.
    pub fn validate(&self) -> Result<SmsRequest, ValidationError> {
        let phone_number = validate_phone(self.phone_number.as_ref())?;
        let message = validate_message(self.message.as_ref())?;
        Ok(SmsRequest::new(phone_number, message))
    }
}

/// A validated message ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRequest {
    phone_number: PhoneNumber,
    message: MessageText,
}

impl SmsRequest {
    pub fn new(phone_number: PhoneNumber, message: MessageText) -> Self {
        Self {
            phone_number,
            message,
        }
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
