pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod retry;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use normalize::normalize_element;
pub use retry::RetryPolicy;
pub use types::{RawElement, SearchParams};
