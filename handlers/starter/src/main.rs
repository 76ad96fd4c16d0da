//! Handler process entry point: connects the starter function to the runtime.

use appwrite_function_sdk::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handler;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,handler_starter=debug".into()),
        )
        // stdout carries the IPC frames; logs must go to stderr
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    loop {
        match read_request() {
            Ok(req) => {
                tracing::debug!(
                    trigger = ?req.env_var("APPWRITE_FUNCTION_TRIGGER"),
                    has_payload = req.payload.is_some(),
                    "invocation received"
                );
                let response = match handler::handle(req) {
                    Ok(resp) => resp,
                    Err(e) => {
                        tracing::error!("handler failed: {}", e);
                        e.to_response()
                    }
                };
                if let Err(e) = send_response(response) {
                    tracing::error!("Failed to send response: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to read request: {}", e);
                break;
            }
        }
    }
}
