//! # stylist-search
//!
//! Catalog lookup for the stylist service.
//!
//! Issues a single top-1 full-text query against an Azure AI Search index,
//! selecting only `id` and `productDisplayName`. Ranking is left entirely
//! to the index; there is no local re-ranking or filtering.

pub mod client;
pub mod types;

pub use client::{top_match, AzureSearchClient};
pub use types::{SearchHit, SearchRequest, SearchResponse};
