//! HTTP layer
//!
//! Defines the [`RequestExecutor`] seam the pagination orchestrator calls
//! through, plus [`ApiClient`], the reqwest-backed default executor.
//!
//! The executor performs the network call and header/query injection but
//! never interprets pagination fields; the orchestrator and assembler do
//! that from the raw body. Transport policy (retries, TLS tuning,
//! connection pooling) is deliberately out of scope here: failures
//! propagate to the caller unchanged.

mod client;
mod executor;

pub use client::{ApiClient, ApiClientConfig, ApiClientConfigBuilder};
pub use executor::{RequestExecutor, RequestOptions};
