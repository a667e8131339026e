//! Minimal host: reads one queue trigger event and runs it through the relay.
//!
//! ```text
//! SMS_RELAY_PUBLISH_ENDPOINT=https://... process_batch event.json
//! SMS_RELAY_PUBLISH_ENDPOINT=https://... process_batch < event.json
//! ```

use std::io::{self, Read};

use smsrelay::{HttpDeliveryChannel, Pipeline, QueuedBatch, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    let event = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let pipeline = Pipeline::new(HttpDeliveryChannel::from_config(&config)?);

    let outcome = match QueuedBatch::from_event_json(&event) {
        Ok(batch) => pipeline.process(&batch).await,
        Err(err) => Err(err.into()),
    };

    match outcome {
        Ok(result) => {
            println!("{}", result.as_str());
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string(&err.to_response_body())?);
            std::process::exit(1);
        }
    }
}
