//! Service layer for stylist-api.

pub mod pipeline;

pub use pipeline::StylistPipeline;
