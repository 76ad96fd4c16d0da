//! Response representation for function handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the response a handler hands back to the runtime.
///
/// Most handlers only ever need [`Response::ok`]:
///
/// ```ignore
/// Response::ok(json!({"message": "Hello!"}))
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP-style status code
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: Option<String>,
}

impl Response {
    /// Create a new response with the given status code (no body).
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a 200 OK response with JSON body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"message": "Success"}))
    /// Response::ok(my_struct) // If my_struct implements Serialize
    /// ```
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a JSON response with a custom status code.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(500, json!({"error": "something went wrong"}))
    /// ```
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status,
            headers,
            body: serde_json::to_string(&body).ok(),
        }
    }

    /// Create a plain text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "text/plain; charset=utf-8".to_string(),
        );

        Self {
            status,
            headers,
            body: Some(body.into()),
        }
    }

    /// Create a 500 Internal Server Error response.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::json(500, serde_json::json!({"error": message.into()}))
    }

    /// Add a header to the response (builder pattern).
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"data": "value"}))
    ///     .with_header("Cache-Control", "max-age=3600")
    /// ```
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_sets_content_type_and_body() {
        let resp = Response::ok(json!({"message": "hi"}));
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(resp.body.as_deref(), Some(r#"{"message":"hi"}"#));
    }

    #[test]
    fn text_and_error_helpers() {
        let text = Response::text(200, "pong");
        assert_eq!(
            text.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(text.body.as_deref(), Some("pong"));

        let err = Response::internal_error("boom");
        assert_eq!(err.status, 500);
        assert_eq!(err.body.as_deref(), Some(r#"{"error":"boom"}"#));
    }

    #[test]
    fn with_header_adds_headers() {
        let resp = Response::new(204).with_header("X-Request-Id", "abc");
        assert_eq!(
            resp.headers.get("X-Request-Id").map(String::as_str),
            Some("abc")
        );
        assert!(resp.body.is_none());
    }
}
