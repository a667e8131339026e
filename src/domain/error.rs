use crate::domain::response::ErrorResponse;
use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, PhoneNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
/// Errors surfaced to the caller of the relay.
///
/// The set is closed and each variant displays as a fixed, user-facing message.
/// Underlying causes are logged, never carried.
pub enum SendSmsError {
    /// The queued batch, envelope, or inner payload is malformed.
    #[error("Please enter a valid mobile number and message")]
    Structure,

    /// `phoneNumber` is missing or not an E.164 number.
    #[error("Please enter a valid mobile number")]
    InvalidPhone,

    /// `message` is missing or outside `5..=200` characters.
    #[error("Please enter a message between 5 - 200 characters")]
    InvalidMessage,

    /// The delivery channel failed.
    #[error("Error sending message, please try again.")]
    Delivery,
}

impl SendSmsError {
    /// Short, stable identifier used as a log field.
    pub fn code(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidMessage => "invalid_message",
            Self::Delivery => "delivery",
        }
    }

    /// Render the `{"state":"error","message":...}` body returned to callers.
    pub fn to_response_body(self) -> ErrorResponse {
        ErrorResponse {
            state: "error",
            message: self.to_string(),
        }
    }
}

impl From<ValidationError> for SendSmsError {
    fn from(value: ValidationError) -> Self {
        match value.field() {
            PhoneNumber::FIELD => Self::InvalidPhone,
            MessageText::FIELD => Self::InvalidMessage,
            // Only payload fields reach the caller; anything else is a malformed request.
            _ => Self::Structure,
        }
    }
}
