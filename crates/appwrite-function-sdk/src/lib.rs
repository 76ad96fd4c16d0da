//! Appwrite Function SDK - Types and utilities for writing cloud function handlers
//!
//! This crate provides the core types that function handlers use to interact
//! with the platform runtime: the invocation request, the response the handler
//! hands back, and the stdin/stdout framing the runtime speaks to the handler
//! process.

pub mod error;
pub mod ipc;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for function handlers
    pub use crate::error::HandlerError;
    pub use crate::ipc::{read_request, send_response};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
