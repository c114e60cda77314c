#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{error, info};
use once_cell::sync::Lazy;
use reqwest::Client;
use std::env;

use crate::shared::types::UsageResponse;

pub const DEFAULT_USAGE_API_URL: &str = "http://localhost:8000";

static CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Runtime env (after `.env`), then the value baked in at build time, then
/// the local development address.
pub fn base_url() -> String {
    env::var("USAGE_API_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| option_env!("USAGE_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_USAGE_API_URL.to_string())
}

fn usage_url(base_url: &str) -> String {
    format!("{}/usage", base_url.trim_end_matches('/'))
}

pub async fn fetch_usage() -> Result<UsageResponse> {
    fetch_usage_from(&base_url()).await
}

pub async fn fetch_usage_from(base_url: &str) -> Result<UsageResponse> {
    let url = usage_url(base_url);
    info!("[usage_api] GET {}", url);
    let res = match CLIENT.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            if e.is_connect() {
                error!(
                    "[usage_api] hint: connection failed (DNS/route/refused/TLS). Check USAGE_API_URL"
                );
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        let snip = text.chars().take(300).collect::<String>();
        error!("[usage_api] request failed: status={} body=\n{}", status, snip);
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    let data: UsageResponse = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snip
        )
    })?;
    Ok(data)
}
