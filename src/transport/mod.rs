//! Transport layer: queue event decoding, envelope unwrapping, and publish wire format.

mod envelope;
mod publish;
mod queue;

pub use envelope::{EnvelopeError, extract};
pub use publish::{decode_publish_response, encode_publish_form};
pub use queue::{QueuedBatch, QueuedItem};
