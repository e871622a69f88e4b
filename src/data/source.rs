//! Flight data source: local cache or the remote flights API
//!
//! [`FlightSource::acquire`] runs one acquisition cycle: use the cache file if
//! it is fresh, otherwise POST to the API once, mirror the response into the
//! cache, then decode and sort the flights.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::wire::decode_payload;
use super::FlightCollection;
use crate::cache::CacheManager;
use crate::cli::Config;

/// Errors that can occur when acquiring flight data
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP client could not be built
    #[error("Unable to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed (timeout, DNS, connection refused, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Where the payload of an acquisition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    Cache,
    Network,
}

/// Client for the flights API with a write-through disk cache
#[derive(Debug, Clone)]
pub struct FlightSource {
    client: Client,
    cache: CacheManager,
    api_url: String,
    time_format: String,
}

impl FlightSource {
    /// Creates a source from the startup configuration
    pub fn new(config: &Config, cache: CacheManager) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.api_timeout)
            .default_headers(headers)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            cache,
            api_url: config.api_url.clone(),
            time_format: config.wire_time_format.clone(),
        })
    }

    /// Fetches, decodes and sorts all flights
    ///
    /// # Returns
    /// * `Ok(FlightCollection)` with both boards sorted by scheduled time
    /// * `Err(SourceError)` if the network request or decoding fails
    pub async fn acquire(&self) -> Result<FlightCollection, SourceError> {
        self.acquire_with_origin().await.map(|(flights, _)| flights)
    }

    /// Same as [`FlightSource::acquire`], also reporting where the data came from
    pub async fn acquire_with_origin(
        &self,
    ) -> Result<(FlightCollection, PayloadOrigin), SourceError> {
        let (body, origin) = self.load_body().await?;

        let mut flights = decode_payload(&body, &self.time_format)?;
        flights.sort_by_scheduled();

        info!(
            arrivals = flights.arrivals.len(),
            departures = flights.departures.len(),
            ?origin,
            "flights acquired"
        );
        Ok((flights, origin))
    }

    /// Raw payload from a fresh cache, or from the network otherwise
    async fn load_body(&self) -> Result<(Vec<u8>, PayloadOrigin), SourceError> {
        if self.cache.is_fresh() {
            match self.cache.read() {
                Ok(body) => {
                    debug!(bytes = body.len(), "using cached flights");
                    return Ok((body, PayloadOrigin::Cache));
                }
                Err(e) => warn!(error = %e, "cache read failed, fetching from network"),
            }
        }

        let body = self.fetch_from_api().await?;
        self.cache.write(&body);
        Ok((body, PayloadOrigin::Network))
    }

    /// Performs the single POST request to the API
    ///
    /// The status code is not checked: an error page fails later as a
    /// decoding error.
    async fn fetch_from_api(&self) -> Result<Vec<u8>, SourceError> {
        debug!(url = %self.api_url, "fetching flights from API");
        let response = self.client.post(&self.api_url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "API response received");
        Ok(body.to_vec())
    }
}
