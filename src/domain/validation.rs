use std::fmt;

use serde_json::Value;

use crate::domain::value::{MessageText, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing { field: &'static str },
    NotAString { field: &'static str },
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    MessageLengthOutOfRange { min: usize, max: usize, actual: usize },
}

impl ValidationError {
    /// Payload or config field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::NotAString { field } | Self::Empty { field } => field,
            Self::InvalidPhoneNumber { .. } => PhoneNumber::FIELD,
            Self::MessageLengthOutOfRange { .. } => MessageText::FIELD,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is missing"),
            Self::NotAString { field } => write!(f, "{field} must be a string"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => {
                write!(f, "invalid phone number ({} characters)", input.chars().count())
            }
            Self::MessageLengthOutOfRange { min, max, actual } => {
                write!(f, "message length out of range: {actual} (expected {min}..={max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check an untyped `phoneNumber` value taken from a decoded payload.
pub fn validate_phone(value: Option<&Value>) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(require_str(PhoneNumber::FIELD, value)?)
}

/// Check an untyped `message` value taken from a decoded payload.
pub fn validate_message(value: Option<&Value>) -> Result<MessageText, ValidationError> {
    MessageText::new(require_str(MessageText::FIELD, value)?)
}

fn require_str<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a str, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Missing { field: "message" };
        assert_eq!(err.to_string(), "message is missing");

        let err = ValidationError::NotAString {
            field: "phoneNumber",
        };
        assert_eq!(err.to_string(), "phoneNumber must be a string");

        let err = ValidationError::InvalidPhoneNumber {
            input: "ABCDEFGHIJK".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number (11 characters)");

        let err = ValidationError::MessageLengthOutOfRange {
            min: 5,
            max: 200,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "message length out of range: 3 (expected 5..=200)"
        );
    }

    #[test]
    fn phone_must_be_present_and_a_string() {
        assert_eq!(
            validate_phone(None),
            Err(ValidationError::Missing {
                field: PhoneNumber::FIELD
            })
        );
        assert_eq!(
            validate_phone(Some(&Value::Null)),
            Err(ValidationError::Missing {
                field: PhoneNumber::FIELD
            })
        );
        assert_eq!(
            validate_phone(Some(&json!(447973631360_u64))),
            Err(ValidationError::NotAString {
                field: PhoneNumber::FIELD
            })
        );
    }

    #[test]
    fn phone_accepts_e164_string() {
        let phone = validate_phone(Some(&json!("+447973631360"))).unwrap();
        assert_eq!(phone.as_str(), "+447973631360");
    }

    #[test]
    fn message_must_be_present_and_a_string() {
        assert_eq!(
            validate_message(None),
            Err(ValidationError::Missing {
                field: MessageText::FIELD
            })
        );
        assert_eq!(
            validate_message(Some(&json!(["hello world"]))),
            Err(ValidationError::NotAString {
                field: MessageText::FIELD
            })
        );
        assert!(validate_message(Some(&json!("hello"))).is_ok());
    }

    #[test]
    fn field_points_at_the_offending_value() {
        let err = validate_phone(Some(&json!("12345"))).unwrap_err();
        assert_eq!(err.field(), PhoneNumber::FIELD);

        let err = validate_message(Some(&json!("abc"))).unwrap_err();
        assert_eq!(err.field(), MessageText::FIELD);
    }
}
