//! HTTP handlers for stylist-api.

pub mod health;
pub mod stylist;
