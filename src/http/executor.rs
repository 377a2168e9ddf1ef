//! Request executor seam
//!
//! The pagination subsystem treats the network as a black box behind this
//! trait. Anything that can issue a single JSON fetch can back the
//! orchestrator: the bundled [`super::ApiClient`], or a test double.

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;

/// Per-request options: extra query parameters and headers
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters
    pub query: StringMap,
    /// Request headers
    pub headers: StringMap,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Executes single request/response round trips on behalf of the
/// pagination orchestrator
///
/// Implementations inject the supplied headers and query parameters and
/// return the raw JSON body. They must not interpret pagination fields,
/// retry, or synthesize partial results; any failure propagates as-is.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Single non-paginated fetch
    async fn get(&self, path: &str, options: &RequestOptions) -> Result<JsonValue>;

    /// Single paginated fetch with pagination wire parameters
    async fn request_with_paging(
        &self,
        method: Method,
        path: &str,
        wire_params: &StringMap,
        options: &RequestOptions,
    ) -> Result<JsonValue>;
}
