use thiserror::Error;

/// Failure modes of a single API invocation. Each rendering is printed to
/// stdout verbatim and keeps the `Error` prefix shell callers key off.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("Error: GEMINI_API_KEY environment variable not set.")]
    MissingApiKey,
    #[error("Error: No content generated (check safety settings or prompt).")]
    NoContent,
    #[error("Error calling Gemini API: {0}")]
    Api(String),
}

pub fn exit_code(result: &Result<String, InvokeError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
