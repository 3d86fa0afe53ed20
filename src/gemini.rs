use anyhow::{Context, Result, anyhow, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::http_errors::describe_request_error;
use crate::outcome::InvokeError;

const SYSTEM_PREAMBLE: &str = "Context: Linux. Provide a concise response:\n";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn generate_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

fn full_prompt(prompt: &str) -> String {
    format!("{SYSTEM_PREAMBLE}{prompt}")
}

/// Extracts the generated text from a parsed response. `Ok(None)` means the
/// candidate set was empty (safety filtering or empty generation).
fn extract_text(response: GenerateContentResponse) -> Result<Option<String>> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(None);
    };

    let parts = candidate.content.map(|content| content.parts).unwrap_or_default();
    if parts.is_empty() {
        bail!("response candidate contained no text parts");
    }

    let text: String = parts.into_iter().map(|part| part.text).collect();
    Ok(Some(text.trim().to_string()))
}

/// Sends one generate call for the prompt and returns the generated text.
/// Never propagates a raw failure: every error becomes an `InvokeError`.
pub async fn generate(
    client: &Client,
    cfg: &Config,
    model: &str,
    prompt: &str,
) -> Result<String, InvokeError> {
    let Some(api_key) = cfg.api_key.as_deref() else {
        return Err(InvokeError::MissingApiKey);
    };

    match try_generate(client, cfg, api_key, model, prompt).await {
        Ok(Some(text)) => Ok(text),
        Ok(None) => Err(InvokeError::NoContent),
        Err(err) => Err(InvokeError::Api(format!("{err:#}"))),
    }
}

async fn try_generate(
    client: &Client,
    cfg: &Config,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<Option<String>> {
    let api_url = generate_url(&cfg.base_url, model);
    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: full_prompt(prompt),
            }],
        }],
    };
    debug!(
        api_url = %api_url,
        model = %model,
        prompt_len = prompt.len(),
        "sending generate request"
    );

    let response = client
        .post(&api_url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            warn!(
                api_url = %api_url,
                model = %model,
                error = %err,
                "generate request failed"
            );
            anyhow!(describe_request_error(&err, &api_url, cfg.timeout_secs))
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let response_body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());
        warn!(
            api_url = %api_url,
            model = %model,
            status = %status,
            response_body_len = response_body.len(),
            "generate returned non-success status"
        );
        bail!("request failed with status {}: {}", status, response_body);
    }

    let parsed: GenerateContentResponse = response
        .json()
        .await
        .context("failed to parse generate response")?;
    let text = extract_text(parsed)?;
    debug!(
        model = %model,
        response_len = text.as_deref().map(str::len).unwrap_or(0),
        "received generate response"
    );
    Ok(text)
}
