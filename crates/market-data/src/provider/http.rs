//! Shared GET-and-decode helper for the HTTP providers.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;

/// Issues a GET request and decodes the JSON body.
///
/// Status handling mirrors what callers need to tell apart: 404 is
/// `NotFound`, 429 is `RateLimited`, any other non-success is `ProviderError`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    params: &[(&str, String)],
) -> Result<T, MarketDataError> {
    debug!("{} request: {} with {} params", provider, url, params.len());

    let response = client.get(url).query(params).send().await.map_err(|e| {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    })?;

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketDataError::RateLimited {
            provider: provider.to_string(),
        });
    }

    if status == StatusCode::NOT_FOUND {
        return Err(MarketDataError::NotFound(url.to_string()));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: format!("HTTP {} - {}", status, body),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| MarketDataError::ProviderError {
            provider: provider.to_string(),
            message: format!("Failed to read response: {}", e),
        })?;

    decode(provider, &text)
}

pub(crate) fn decode<T: DeserializeOwned>(
    provider: &'static str,
    text: &str,
) -> Result<T, MarketDataError> {
    serde_json::from_str(text).map_err(|e| MarketDataError::Parse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

/// Percent-encodes a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
