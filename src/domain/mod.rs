//! Domain layer: validated value types and the closed error taxonomy (no I/O).

mod error;
mod request;
mod response;
mod validation;
mod value;

pub use error::SendSmsError;
pub use request::{SmsCandidate, SmsRequest};
pub use response::{DispatchResult, ErrorResponse};
pub use validation::{ValidationError, validate_message, validate_phone};
pub use value::{ApiToken, MessageText, PhoneNumber};
