pub mod client;
pub mod enrich;
pub mod error;
pub mod types;

pub use client::YelpClient;
pub use enrich::{enrich_thumbnails, ENRICH_PREFIX_LIMIT};
pub use error::YelpError;
