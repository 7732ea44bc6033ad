use thiserror::Error;

/// Errors from the Yelp Fusion client. Callers of the enrichment layer never
/// see these; they exist so per-lookup failures can be logged with a cause.
#[derive(Debug, Error)]
pub enum YelpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Yelp base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
