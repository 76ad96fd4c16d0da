//! Invocation request representation for function handlers

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents one function invocation as delivered by the runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// Custom data supplied when the function was executed
    #[serde(default)]
    pub payload: Option<String>,

    /// Variables injected by the platform: values configured in the
    /// function settings plus the runtime-provided `APPWRITE_FUNCTION_*` set
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Invocation headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Request {
    /// The execution payload, or `fallback` when none was provided.
    ///
    /// An empty payload counts as absent: some trigger types deliver an
    /// empty string instead of omitting the field.
    ///
    /// # Example
    /// ```ignore
    /// let data = req.payload_or("No payload provided.");
    /// ```
    pub fn payload_or(&self, fallback: &str) -> String {
        match self.payload.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Parse the payload as JSON into a typed struct.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Input { name: String }
    ///
    /// let input: Input = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        let payload = self.payload.as_deref().unwrap_or("null");
        serde_json::from_str(payload).map_err(HandlerError::from)
    }

    /// Get a variable by name.
    ///
    /// # Example
    /// ```ignore
    /// let endpoint = req.env_var("APPWRITE_FUNCTION_ENDPOINT");
    /// ```
    pub fn env_var(&self, key: &str) -> Option<&String> {
        self.env.get(key)
    }

    /// Get a variable, substituting `fallback` when it is not set.
    ///
    /// # Example
    /// ```ignore
    /// let secret = req.env_var_or("SECRET_KEY", "no secret configured");
    /// ```
    pub fn env_var_or(&self, key: &str, fallback: &str) -> String {
        self.env
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Get a required variable.
    /// Returns `HandlerError::MissingEnvVar` when it is not set.
    ///
    /// # Example
    /// ```ignore
    /// let trigger = req.require_env_var("APPWRITE_FUNCTION_TRIGGER")?;
    /// ```
    pub fn require_env_var(&self, key: &str) -> Result<&String, HandlerError> {
        self.env
            .get(key)
            .ok_or_else(|| HandlerError::MissingEnvVar(key.to_string()))
    }
}
