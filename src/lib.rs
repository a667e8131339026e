//! Single-message SMS relay.
//!
//! A queue trigger hands the relay one record whose body is a notification
//! envelope wrapping a `{phoneNumber, message}` payload. The relay unwraps it,
//! validates both fields, and publishes the message once through a
//! [`DeliveryChannel`]. Every failure is reported as one of the fixed
//! [`SendSmsError`] messages.
//!
//! ```rust,no_run
//! use smsrelay::{HttpDeliveryChannel, Pipeline, QueuedBatch, RelayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RelayConfig::from_env()?;
//!     let pipeline = Pipeline::new(HttpDeliveryChannel::from_config(&config)?);
//!     let batch = QueuedBatch::single(
//!         r#"{"Message":"{\"phoneNumber\":\"+447973631360\",\"message\":\"hello there\"}"}"#,
//!     );
//!     let result = pipeline.process(&batch).await?;
//!     println!("{}", result.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod pipeline;
mod transport;

pub use client::{
    BoxError, BoxFuture, ClientError, DeliveryChannel, Dispatcher, HttpDeliveryChannel,
    HttpDeliveryChannelBuilder,
};
pub use crate::config::RelayConfig;
pub use domain::{
    ApiToken, DispatchResult, ErrorResponse, MessageText, PhoneNumber, SendSmsError, SmsCandidate,
    SmsRequest, ValidationError, validate_message, validate_phone,
};
pub use pipeline::Pipeline;
pub use transport::{EnvelopeError, QueuedBatch, QueuedItem, extract};
