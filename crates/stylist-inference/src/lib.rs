//! # stylist-inference
//!
//! Hosted language-model calls for the stylist service.
//!
//! This crate provides:
//! - An Azure OpenAI chat completion client
//! - The vision description client ([`OpenAIVisionDescriber`])
//! - The recommendation composer ([`OpenAIRecommendationComposer`])
//!
//! Both components share one [`ChatCompletionClient`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stylist_core::StylistConfig;
//! use stylist_inference::{ChatCompletionClient, OpenAIRecommendationComposer, OpenAIVisionDescriber};
//!
//! let config = StylistConfig::from_env().unwrap();
//! let chat = Arc::new(ChatCompletionClient::new(&config.openai, config.upstream_timeout_secs).unwrap());
//! let describer = OpenAIVisionDescriber::new(chat.clone());
//! let composer = OpenAIRecommendationComposer::new(chat);
//! ```

pub mod openai;
pub mod recommendation;
pub mod vision;

pub use openai::ChatCompletionClient;
pub use recommendation::{recommendation_request, OpenAIRecommendationComposer};
pub use vision::{describe_request, OpenAIVisionDescriber};
