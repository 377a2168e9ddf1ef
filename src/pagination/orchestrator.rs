//! Pagination orchestrator
//!
//! The façade every resource service calls. Decides between the paginated
//! and non-paginated flow, delegates the single network call to the
//! [`RequestExecutor`], and threads the per-resource configuration through
//! the validator, mapper, and assembler.
//!
//! Each invocation is a pure function of `(config, options)` plus one
//! network round trip. Executor failures propagate unchanged: no retry, no
//! partial-result synthesis.

use super::types::{ListOptions, ListResult, NonPaginatedResponse, PageInfo, PaginatedResponse};
use super::{assembler, mapper, validator};
use crate::config::{ResourceConfig, SCOPE_PLACEHOLDER};
use crate::error::{Error, Result};
use crate::http::{RequestExecutor, RequestOptions};
use crate::types::{JsonValue, Method, PaginationType};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates listing calls over a shared request executor
#[derive(Clone)]
pub struct Orchestrator {
    executor: Arc<dyn RequestExecutor>,
}

impl Orchestrator {
    /// Create an orchestrator over the given executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// List a resource collection
    ///
    /// Pagination is in effect iff any of `cursor`, `page_size`, or
    /// `jump_to_page` is present in the options; the return shape is
    /// discriminated accordingly. Scope routing and key prefixing behave
    /// identically in both flows.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        config: &ResourceConfig,
        options: &ListOptions,
    ) -> Result<ListResult<T>> {
        let endpoint = resolve_endpoint(config, options);
        let request_options = build_request_options(config, options);

        if options.pagination.is_requested() {
            self.fetch_page(config, options, &endpoint, request_options)
                .await
                .map(ListResult::Paginated)
        } else {
            self.fetch_all(config, &endpoint, request_options)
                .await
                .map(ListResult::All)
        }
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        config: &ResourceConfig,
        endpoint: &str,
        request_options: RequestOptions,
    ) -> Result<NonPaginatedResponse<T>> {
        debug!(endpoint, "fetching unpaginated collection");
        let body = self.executor.get(endpoint, &request_options).await?;

        let page = RawPage::extract(&body, config);
        let items = convert_items(page.items, config)?;

        Ok(NonPaginatedResponse {
            items,
            total_count: page.total_count,
        })
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        config: &ResourceConfig,
        options: &ListOptions,
        endpoint: &str,
        request_options: RequestOptions,
    ) -> Result<PaginatedResponse<T>> {
        let request =
            validator::request_parameters(&options.pagination, Some(config.pagination_type))?;
        let wire_params =
            mapper::to_wire_params(config.pagination_type, &request, &config.param_names);

        debug!(endpoint, ?wire_params, "fetching page");
        let body = self
            .executor
            .request_with_paging(Method::GET, endpoint, &wire_params, &request_options)
            .await?;

        let page = RawPage::extract(&body, config);
        let info = match config.pagination_type {
            PaginationType::Offset => PageInfo {
                total_count: page.total_count,
                current_page: Some(request.page_number.unwrap_or(1)),
                page_size: Some(mapper::effective_page_size(request.page_size)),
                ..PageInfo::default()
            },
            PaginationType::Token => PageInfo {
                total_count: page.total_count,
                page_size: request.page_size.map(|size| size.clamp(1, mapper::MAX_PAGE_SIZE)),
                continuation_token: page.continuation_token.clone(),
                ..PageInfo::default()
            },
        };

        let items = convert_items(page.items, config)?;
        assembler::paginated_response(info, config.pagination_type, items)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish_non_exhaustive()
    }
}

/// One raw backend page, extracted by the configured field names
struct RawPage {
    items: Vec<JsonValue>,
    total_count: Option<u64>,
    continuation_token: Option<String>,
}

impl RawPage {
    /// A body without the configured items field counts as an empty page
    fn extract(body: &JsonValue, config: &ResourceConfig) -> Self {
        let items = body
            .get(&config.items_field)
            .and_then(JsonValue::as_array)
            .cloned()
            .unwrap_or_default();
        let total_count = body
            .get(&config.total_count_field)
            .and_then(JsonValue::as_u64);
        let continuation_token = body
            .get(&config.continuation_token_field)
            .and_then(JsonValue::as_str)
            .map(str::to_string);

        Self {
            items,
            total_count,
            continuation_token,
        }
    }
}

fn convert_items<T: DeserializeOwned>(
    items: Vec<JsonValue>,
    config: &ResourceConfig,
) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|item| {
            let item = match &config.item_transform {
                Some(transform) => transform(item),
                None => item,
            };
            serde_json::from_value(item).map_err(Error::from)
        })
        .collect()
}

fn resolve_endpoint(config: &ResourceConfig, options: &ListOptions) -> String {
    match (&options.scope_id, &config.scoped_endpoint) {
        (Some(scope), Some(scoped)) => scoped.replace(SCOPE_PLACEHOLDER, scope),
        _ => config.endpoint.clone(),
    }
}

fn build_request_options(config: &ResourceConfig, options: &ListOptions) -> RequestOptions {
    let mut request_options = RequestOptions::new();

    if let (Some(header), Some(scope)) = (&config.scope_header, &options.scope_id) {
        request_options = request_options.header(header.clone(), scope.clone());
    }

    for (key, value) in &options.params {
        request_options = request_options.query(prefixed_key(config, key), value.clone());
    }

    request_options
}

fn prefixed_key(config: &ResourceConfig, key: &str) -> String {
    match &config.key_prefix {
        Some(prefix)
            if !key.starts_with(prefix.as_str())
                && !config.exclude_from_prefixing.iter().any(|k| k == key) =>
        {
            format!("{prefix}{key}")
        }
        _ => key.to_string(),
    }
}
