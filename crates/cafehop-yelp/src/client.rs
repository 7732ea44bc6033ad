//! HTTP client for the Yelp Fusion business search API.

use std::time::Duration;

use cafehop_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::YelpError;
use crate::types::BusinessSearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3/";
/// Yelp rejects search radii above this (meters).
pub const MAX_RADIUS_METERS: u32 = 40_000;

/// Bearer-authenticated client for Yelp Fusion.
///
/// Use [`YelpClient::new`] for production or [`YelpClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YelpClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YelpClient {
    /// Creates a client against the production Yelp API.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, YelpError> {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YelpError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self, YelpError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("cafehop/0.1 (cafe search)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YelpError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Looks up a photo for a venue by name near a coordinate.
    ///
    /// Returns `Ok(None)` when no business matches or the best match has no
    /// photo. The radius is capped at [`MAX_RADIUS_METERS`].
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::Http`] on network failure, timeout, or a non-2xx
    /// status.
    pub async fn find_photo(
        &self,
        term: &str,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Option<String>, YelpError> {
        let mut url = self
            .base_url
            .join("businesses/search")
            .map_err(|e| YelpError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("term", term);
            pairs.append_pair("latitude", &center.lat.to_string());
            pairs.append_pair("longitude", &center.lon.to_string());
            pairs.append_pair("radius", &radius_m.min(MAX_RADIUS_METERS).to_string());
            pairs.append_pair("categories", "coffee");
            pairs.append_pair("sort_by", "distance");
            pairs.append_pair("limit", "1");
        }

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?
            .error_for_status()?;

        let payload = match response.json::<BusinessSearchResponse>().await {
            Ok(payload) => payload,
            Err(err) => {
                // Shape drift on an optional integration is not worth surfacing.
                tracing::debug!(error = %err, "unexpected Yelp response shape");
                return Ok(None);
            }
        };
        Ok(payload
            .businesses
            .into_iter()
            .next()
            .and_then(|b| b.image_url)
            .filter(|u| !u.is_empty()))
    }
}
