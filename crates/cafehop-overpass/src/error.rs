use thiserror::Error;

/// Errors returned by the Overpass search client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network failure, timeout, or non-2xx HTTP status from a mirror.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured mirror URL could not be used to build a request.
    #[error("invalid Overpass mirror URL '{url}': {reason}")]
    InvalidMirror { url: String, reason: String },

    /// Every mirror/attempt combination failed without a recordable cause.
    /// Exhaustion with a cause surfaces the last [`OverpassError::Http`]
    /// instead.
    #[error("all Overpass mirrors unavailable")]
    MirrorsExhausted,
}
