//! IPC protocol for communicating with the function runtime.
//!
//! Handlers communicate with the runtime using a simple length-prefixed JSON
//! protocol: a 4-byte big-endian length followed by the JSON document, read
//! from stdin for requests and written to stdout for responses.
//!
//! # Handler Macros
//!
//! ## `handler_loop!` - Infallible handlers
//! ```ignore
//! fn handle(req: Request) -> Response {
//!     Response::ok(json!({"message": "Hello"}))
//! }
//! handler_loop!(handle);
//! ```
//!
//! ## `handler_loop_result!` - Handlers returning Result
//! ```ignore
//! fn handle(req: Request) -> Result<Response, HandlerError> {
//!     let trigger = req.require_env_var("APPWRITE_FUNCTION_TRIGGER")?;
//!     Ok(Response::ok(json!({"trigger": trigger})))
//! }
//! handler_loop_result!(handle);
//! ```

use crate::{HandlerError, Request, Response};
use std::io::{self, Read, Write};

/// Read one length-prefixed request from `reader`.
pub fn read_request_from<R: Read>(reader: &mut R) -> Result<Request, HandlerError> {
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read length prefix: {}", e)))?;

    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    serde_json::from_slice(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to parse request: {}", e)))
}

/// Write one length-prefixed response to `writer`.
pub fn write_response_to<W: Write>(writer: &mut W, response: &Response) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)
        .map_err(|e| HandlerError::Ipc(format!("Failed to serialize response: {}", e)))?;

    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Read a request from stdin (sent by the runtime)
pub fn read_request() -> Result<Request, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_request_from(&mut handle)
}

/// Send a response to stdout (received by the runtime)
pub fn send_response(response: Response) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_response_to(&mut handle, &response)
}

/// Convenience macro for running an infallible handler loop.
///
/// The handler function takes a `Request` and returns a `Response`.
///
/// # Example
/// ```ignore
/// use appwrite_function_sdk::prelude::*;
///
/// fn handle(req: Request) -> Response {
///     Response::ok(json!({"payload": req.payload}))
/// }
///
/// handler_loop!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop {
    ($handler:expr) => {
        fn main() {
            loop {
                match $crate::ipc::read_request() {
                    Ok(req) => {
                        let response = $handler(req);
                        if let Err(e) = $crate::ipc::send_response(response) {
                            eprintln!("Failed to send response: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to read request: {}", e);
                        break;
                    }
                }
            }
        }
    };
}

/// Convenience macro for running a handler that returns `Result<Response, HandlerError>`.
///
/// Errors are automatically converted to error responses using
/// `HandlerError::to_response()`.
///
/// # Example
/// ```ignore
/// use appwrite_function_sdk::prelude::*;
///
/// fn handle(req: Request) -> Result<Response, HandlerError> {
///     let trigger = req.require_env_var("APPWRITE_FUNCTION_TRIGGER")?;
///     Ok(Response::ok(json!({"trigger": trigger})))
/// }
///
/// handler_loop_result!(handle);
/// ```
#[macro_export]
macro_rules! handler_loop_result {
    ($handler:expr) => {
        fn main() {
            loop {
                match $crate::ipc::read_request() {
                    Ok(req) => {
                        let response = match $handler(req) {
                            Ok(resp) => resp,
                            Err(e) => e.to_response(),
                        };
                        if let Err(e) = $crate::ipc::send_response(response) {
                            eprintln!("Failed to send response: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to read request: {}", e);
                        break;
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frame(json: &str) -> Vec<u8> {
        let mut buf = (json.len() as u32).to_be_bytes().to_vec();
        buf.extend_from_slice(json.as_bytes());
        buf
    }

    #[test]
    fn reads_a_framed_request() {
        let mut input = Cursor::new(frame(
            r#"{"payload":"hi","env":{"APPWRITE_FUNCTION_TRIGGER":"http"}}"#,
        ));
        let req = read_request_from(&mut input).unwrap();
        assert_eq!(req.payload.as_deref(), Some("hi"));
        assert_eq!(
            req.env.get("APPWRITE_FUNCTION_TRIGGER").map(String::as_str),
            Some("http")
        );
    }

    #[test]
    fn truncated_frame_is_an_ipc_error() {
        let mut bytes = frame(r#"{"payload":"hi"}"#);
        bytes.truncate(bytes.len() - 4);
        let mut input = Cursor::new(bytes);
        let err = read_request_from(&mut input).unwrap_err();
        assert!(matches!(err, HandlerError::Ipc(_)));
    }

    #[test]
    fn written_response_parses_back() {
        let mut out = Vec::new();
        write_response_to(&mut out, &Response::ok(serde_json::json!({"n": 1}))).unwrap();

        let len = u32::from_be_bytes(out[..4].try_into().unwrap()) as usize;
        assert_eq!(len, out.len() - 4);

        let parsed: Response = serde_json::from_slice(&out[4..]).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.body.as_deref(), Some(r#"{"n":1}"#));
    }
}
