//! Pipeline layer: one queued batch in, one dispatch result (or user-facing error) out.

use tracing::{debug, instrument, warn};

use crate::client::{DeliveryChannel, Dispatcher};
use crate::domain::{DispatchResult, SendSmsError};
use crate::transport::{QueuedBatch, extract};

/// Runs extraction, validation, and dispatch for a single queued message.
///
/// Each step short-circuits: the first failure ends the invocation with its
/// [`SendSmsError`], and nothing is retried or compensated. The pipeline keeps
/// no state between calls, so one instance can serve concurrent invocations.
#[derive(Debug, Clone)]
pub struct Pipeline<C> {
    dispatcher: Dispatcher<C>,
}

impl<C: DeliveryChannel> Pipeline<C> {
    pub fn new(channel: C) -> Self {
        Self {
            dispatcher: Dispatcher::new(channel),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<C> {
        &self.dispatcher
    }

    /// Process exactly one queued message.
    ///
    /// 1. unwrap the envelope ([`SendSmsError::Structure`] on failure),
    /// 2. validate `phoneNumber` ([`SendSmsError::InvalidPhone`]),
    /// 3. validate `message` ([`SendSmsError::InvalidMessage`]),
    /// 4. publish once through the channel ([`SendSmsError::Delivery`]).
    #[instrument(
        name = "smsrelay.process",
        skip_all,
        fields(message_id = batch.message_id().unwrap_or_default(), records = batch.len())
    )]
    pub async fn process(&self, batch: &QueuedBatch) -> Result<DispatchResult, SendSmsError> {
        let candidate = extract(batch).map_err(|err| {
            warn!(reason = %err, "rejecting malformed queued message");
            SendSmsError::from(err)
        })?;

        let request = candidate.validate().map_err(|err| {
            let rejected = SendSmsError::from(err.clone());
            warn!(
                code = rejected.code(),
                field = err.field(),
                "rejecting invalid sms request"
            );
            rejected
        })?;

        debug!(
            message_len = request.message().len_utf16(),
            "sms request validated"
        );
        self.dispatcher.dispatch(&request).await
    }
}
