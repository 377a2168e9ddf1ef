//! Per-resource collection configuration
//!
//! Every platform resource lists its collections through the same
//! orchestrated flow; what differs per resource is captured here: which
//! endpoint to hit, which paging style the backend speaks, which response
//! body fields carry the items / total count / continuation token, how the
//! wire query parameters are spelled, and how caller-supplied filter keys
//! are prefixed.

use crate::types::{JsonValue, PaginationType};
use std::fmt;
use std::sync::Arc;

/// Per-item transform applied to every raw item before deserialization
pub type ItemTransform = Arc<dyn Fn(JsonValue) -> JsonValue + Send + Sync>;

/// Placeholder in a scoped endpoint that is replaced with the scope id
pub const SCOPE_PLACEHOLDER: &str = "{scopeId}";

// ============================================================================
// Wire Parameter Names
// ============================================================================

/// Query parameter spellings for pagination on the wire
///
/// Backends agree on pagination semantics but not on parameter names; each
/// resource configures its own spellings. The defaults are the OData-style
/// names used by the platform's offset-paginated listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireParamNames {
    /// Parameter carrying the page size (default `$top`)
    pub page_size: String,
    /// Parameter carrying the number of items to skip (default `$skip`)
    pub skip: String,
    /// Parameter carrying the continuation token (default `continuationToken`)
    pub continuation_token: String,
    /// Parameter requesting total-count inclusion (default `$count`)
    pub include_total: String,
}

impl Default for WireParamNames {
    fn default() -> Self {
        Self {
            page_size: "$top".to_string(),
            skip: "$skip".to_string(),
            continuation_token: "continuationToken".to_string(),
            include_total: "$count".to_string(),
        }
    }
}

impl WireParamNames {
    /// Create a custom set of wire parameter names
    pub fn new(
        page_size: impl Into<String>,
        skip: impl Into<String>,
        continuation_token: impl Into<String>,
        include_total: impl Into<String>,
    ) -> Self {
        Self {
            page_size: page_size.into(),
            skip: skip.into(),
            continuation_token: continuation_token.into(),
            include_total: include_total.into(),
        }
    }
}

// ============================================================================
// Resource Configuration
// ============================================================================

/// Configuration for one resource's listing endpoint
#[derive(Clone)]
pub struct ResourceConfig {
    /// Default endpoint path for the collection
    pub endpoint: String,
    /// Alternate endpoint used when a scope id is present; `{scopeId}`
    /// is replaced with the id
    pub scoped_endpoint: Option<String>,
    /// Header carrying the scope id when one is present
    pub scope_header: Option<String>,
    /// Paging style the backend speaks for this resource
    pub pagination_type: PaginationType,
    /// Body field containing the item array (default `value`)
    pub items_field: String,
    /// Body field containing the total count (default `@odata.count`)
    pub total_count_field: String,
    /// Body field containing the continuation token (default `continuationToken`)
    pub continuation_token_field: String,
    /// Wire query parameter spellings
    pub param_names: WireParamNames,
    /// Prefix added to caller-supplied filter/sort/expand keys
    pub key_prefix: Option<String>,
    /// Keys exempt from the prefix transform
    pub exclude_from_prefixing: Vec<String>,
    /// Optional transform applied to each raw item
    pub item_transform: Option<ItemTransform>,
}

impl ResourceConfig {
    /// Create a config with the documented defaults for the given endpoint
    /// and paging style
    pub fn new(endpoint: impl Into<String>, pagination_type: PaginationType) -> Self {
        Self {
            endpoint: endpoint.into(),
            scoped_endpoint: None,
            scope_header: None,
            pagination_type,
            items_field: "value".to_string(),
            total_count_field: "@odata.count".to_string(),
            continuation_token_field: "continuationToken".to_string(),
            param_names: WireParamNames::default(),
            key_prefix: None,
            exclude_from_prefixing: Vec::new(),
            item_transform: None,
        }
    }

    /// Set the scoped endpoint (use `{scopeId}` as the id placeholder)
    #[must_use]
    pub fn with_scoped_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.scoped_endpoint = Some(endpoint.into());
        self
    }

    /// Set the header carrying the scope id
    #[must_use]
    pub fn with_scope_header(mut self, header: impl Into<String>) -> Self {
        self.scope_header = Some(header.into());
        self
    }

    /// Set the body field containing the item array
    #[must_use]
    pub fn with_items_field(mut self, field: impl Into<String>) -> Self {
        self.items_field = field.into();
        self
    }

    /// Set the body field containing the total count
    #[must_use]
    pub fn with_total_count_field(mut self, field: impl Into<String>) -> Self {
        self.total_count_field = field.into();
        self
    }

    /// Set the body field containing the continuation token
    #[must_use]
    pub fn with_continuation_token_field(mut self, field: impl Into<String>) -> Self {
        self.continuation_token_field = field.into();
        self
    }

    /// Set the wire query parameter spellings
    #[must_use]
    pub fn with_param_names(mut self, names: WireParamNames) -> Self {
        self.param_names = names;
        self
    }

    /// Set the prefix added to caller-supplied filter/sort/expand keys
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the keys exempt from the prefix transform
    #[must_use]
    pub fn with_exclude_from_prefixing(mut self, keys: Vec<String>) -> Self {
        self.exclude_from_prefixing = keys;
        self
    }

    /// Set the per-item transform
    #[must_use]
    pub fn with_item_transform(mut self, transform: ItemTransform) -> Self {
        self.item_transform = Some(transform);
        self
    }
}

impl fmt::Debug for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceConfig")
            .field("endpoint", &self.endpoint)
            .field("scoped_endpoint", &self.scoped_endpoint)
            .field("scope_header", &self.scope_header)
            .field("pagination_type", &self.pagination_type)
            .field("items_field", &self.items_field)
            .field("total_count_field", &self.total_count_field)
            .field("continuation_token_field", &self.continuation_token_field)
            .field("param_names", &self.param_names)
            .field("key_prefix", &self.key_prefix)
            .field("exclude_from_prefixing", &self.exclude_from_prefixing)
            .field("has_item_transform", &self.item_transform.is_some())
            .finish()
    }
}
