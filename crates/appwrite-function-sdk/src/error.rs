//! Error types for function handlers

use thiserror::Error;

/// Errors that can occur in a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Environment variable not found: {0}")]
    MissingEnvVar(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code.
    ///
    /// Every failure in this contract is the function's fault rather than
    /// the caller's, so everything maps to 500.
    pub fn status_code(&self) -> u16 {
        500
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            serde_json::json!({
                "error": self.to_string()
            }),
        )
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_var_converts_to_error_response() {
        let err = HandlerError::MissingEnvVar("APPWRITE_FUNCTION_TRIGGER".to_string());
        let resp = err.to_response();
        assert_eq!(resp.status, 500);
        assert!(resp
            .body
            .as_deref()
            .unwrap()
            .contains("APPWRITE_FUNCTION_TRIGGER"));
    }
}
