//! Shared HTTP plumbing for the JSON rate providers.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::MarketDataError;

/// Build the reqwest client every provider uses.
pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Map a reqwest transport error onto the crate's taxonomy.
pub(crate) fn map_transport_error(provider: &str, error: reqwest::Error) -> MarketDataError {
    if error.is_timeout() {
        MarketDataError::Timeout {
            provider: provider.to_string(),
        }
    } else if let Some(status) = error.status() {
        MarketDataError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        }
    } else {
        MarketDataError::Network {
            provider: provider.to_string(),
            message: error.to_string(),
        }
    }
}

/// Check the status line, failing with `HttpStatus` on anything but 2xx.
pub(crate) fn check_status(provider: &str, status: StatusCode) -> Result<(), MarketDataError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(MarketDataError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        })
    }
}

/// GET `url` and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, MarketDataError> {
    debug!("{} request: {} with {} params", provider, url, query.len());

    let response = client
        .get(url)
        .query(query)
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| map_transport_error(provider, e))?;

    check_status(provider, response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| map_transport_error(provider, e))?;

    serde_json::from_str(&body).map_err(|e| MarketDataError::Parse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}
