//! Response types for the Yelp Fusion business search endpoint.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BusinessSearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub image_url: Option<String>,
}
