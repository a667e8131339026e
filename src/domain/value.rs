use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

// ASCII digits only: `\d` in the `regex` crate is Unicode-aware.
static E164_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[1-9][0-9]{10,14}$").expect("E.164 pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number in E.164 form (`phoneNumber`).
///
/// Invariant: a leading `+`, a first digit `1-9`, then 10 to 14 further digits.
/// The value is matched exactly as received: no trimming, no normalization.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Payload field name (`phoneNumber`).
    pub const FIELD: &'static str = "phoneNumber";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !E164_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidPhoneNumber { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the phone number as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: `5..=200` UTF-16 code units. The text is preserved as received.
pub struct MessageText(String);

impl MessageText {
    /// Payload field name (`message`).
    pub const FIELD: &'static str = "message";

    /// Minimum allowed length in UTF-16 code units.
    pub const MIN_LEN: usize = 5;
    /// Maximum allowed length in UTF-16 code units.
    pub const MAX_LEN: usize = 200;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = utf16_len(&value);
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&actual) {
            return Err(ValidationError::MessageLengthOutOfRange {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in UTF-16 code units, the unit the bounds are expressed in.
    pub fn len_utf16(&self) -> usize {
        utf16_len(&self.0)
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Token sent to the publish endpoint as `api_token`.
///
/// Invariant: non-empty after trimming.
pub struct ApiToken(String);

impl ApiToken {
    /// Form field name used by the publish endpoint (`api_token`).
    pub const FIELD: &'static str = "api_token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
