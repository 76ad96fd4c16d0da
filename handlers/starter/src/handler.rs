use appwrite_function_sdk::prelude::*;

/// Fallback payload when the function is executed without custom data.
const NO_PAYLOAD_FALLBACK: &str =
    "No payload provided. Add custom data when executing function.";

/// Fallback shown when `SECRET_KEY` has not been configured in the
/// function settings.
const SECRET_KEY_FALLBACK: &str =
    "SECRET_KEY environment variable not found. You can set it in Function settings.";

/// Body returned by the starter function.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterResponse {
    pub message: String,
    pub payload: String,
    pub secret_key: String,
    pub random_number: f64,
    pub trigger: String,
}

/// Starter handler: echoes the execution payload, the configured secret and
/// the invocation trigger back to the caller, plus a random number.
///
/// `APPWRITE_FUNCTION_TRIGGER` is injected by the platform on every
/// invocation. Its absence means the request did not come through the
/// runtime, so it surfaces as an error rather than getting a fallback.
pub fn handle(req: Request) -> Result<Response, HandlerError> {
    let payload = req.payload_or(NO_PAYLOAD_FALLBACK);
    let secret_key = req.env_var_or("SECRET_KEY", SECRET_KEY_FALLBACK);

    // Uniform in [0, 1)
    let random_number: f64 = rand::random();

    let trigger = req.require_env_var("APPWRITE_FUNCTION_TRIGGER")?.clone();

    Ok(Response::ok(StarterResponse {
        message: "Hello from Appwrite!".to_string(),
        payload,
        secret_key,
        random_number,
        trigger,
    }))
}
