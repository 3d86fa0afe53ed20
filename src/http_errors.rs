use std::error::Error as StdError;
use std::io::ErrorKind;

fn error_chain_has_io_kind(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }
        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }
        current = source.source();
    }
    false
}

/// Turns a transport-level failure into the free-text description carried by
/// the API error result.
pub(crate) fn describe_request_error(err: &reqwest::Error, api_url: &str, timeout_secs: u64) -> String {
    if err.is_timeout() || error_chain_has_io_kind(err, ErrorKind::TimedOut, "timed out") {
        return format!(
            "request timed out after {}s while calling '{}'. \
             Increase GEMINI_TIMEOUT_SECS or check model responsiveness.",
            timeout_secs, api_url
        );
    }

    if err.is_connect() {
        if error_chain_has_io_kind(err, ErrorKind::ConnectionRefused, "connection refused") {
            return format!(
                "connection refused by '{}'. \
                 Ensure GEMINI_BASE_URL points at a reachable endpoint.",
                api_url
            );
        }
        return format!(
            "failed to connect to '{}'. \
             Check GEMINI_BASE_URL and network connectivity.",
            api_url
        );
    }

    format!("request to '{}' failed: {}", api_url, err)
}
