//! Optional LLM commentary on an extraction.
//!
//! Given sample cell texts, the entry count and the sections found, asks the
//! Anthropic messages API for a short note on the layout and on why the result
//! may be thin. Any failure (no key, network, status, body, timeout) yields
//! `None`; extraction results never depend on it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DiagnosticConfig;

pub const SAMPLE_CELLS: usize = 35;
pub const SAMPLE_CHARS: usize = 120;
const MAX_TOKENS: u32 = 300;

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub fn build_prompt(samples: &[String], entry_count: usize, sections: &[String]) -> String {
    let mut prompt = String::from(
        "You are looking at a university timetable spreadsheet that an automatic parser processed.\n",
    );
    prompt.push_str(&format!("Entries extracted: {}\n", entry_count));
    if sections.is_empty() {
        prompt.push_str("Section codes found: none\n");
    } else {
        prompt.push_str(&format!("Section codes found: {}\n", sections.join(", ")));
    }
    prompt.push_str("\nSample cells (row-major):\n");
    for (i, s) in samples.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, s.replace('\n', " / ")));
    }
    prompt.push_str(
        "\nIn at most three sentences, describe the layout of this timetable and, if few or no \
         entries were extracted, the most likely reason.",
    );
    prompt
}

/// Blocking call to the messages endpoint.
pub fn request_diagnostic(config: &DiagnosticConfig, prompt: String) -> Result<String> {
    let request = AnthropicRequest {
        model: config.model.clone(),
        max_tokens: MAX_TOKENS,
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt,
        }],
    };

    let response = ureq::post(&format!("{}/messages", config.base_url))
        .set("x-api-key", &config.api_key)
        .set("anthropic-version", "2023-06-01")
        .set("content-type", "application/json")
        .timeout(config.timeout)
        .send_json(&request)
        .context("diagnostic request failed")?;

    let response: AnthropicResponse = response
        .into_json()
        .context("diagnostic response was not valid JSON")?;

    let text = response
        .content
        .iter()
        .map(|c| c.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::ensure!(!text.is_empty(), "diagnostic response had no text");
    Ok(text)
}

/// Runs the diagnostic on the blocking pool, bounded by the configured timeout.
pub async fn diagnose(
    config: Option<DiagnosticConfig>,
    samples: Vec<String>,
    entry_count: usize,
    sections: Vec<String>,
) -> Option<String> {
    let config = config?;
    let timeout = config.timeout;
    let prompt = build_prompt(&samples, entry_count, &sections);
    debug!("diagnostic prompt: {} chars", prompt.len());

    let job = tokio::task::spawn_blocking(move || request_diagnostic(&config, prompt));
    match tokio::time::timeout(timeout, job).await {
        Ok(Ok(Ok(text))) => Some(text),
        Ok(Ok(Err(e))) => {
            warn!("diagnostic unavailable: {:#}", e);
            None
        }
        Ok(Err(e)) => {
            warn!("diagnostic task failed: {}", e);
            None
        }
        Err(_) => {
            warn!("diagnostic timed out after {:?}", timeout);
            None
        }
    }
}
