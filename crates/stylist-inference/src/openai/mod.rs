//! Azure OpenAI chat completions.
//!
//! Requests go to
//! `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...`
//! with a bearer token. The generated text is read from
//! `choices[0].message.content`; a response without it is a
//! [`MalformedUpstreamResponse`](stylist_core::Error::MalformedUpstreamResponse).

mod backend;
mod types;

pub use backend::ChatCompletionClient;
pub use types::*;
