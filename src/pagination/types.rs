//! Pagination option and response types
//!
//! Defines the caller-facing option structs and the uniform response shapes
//! shared by every resource service.

use crate::types::PaginationType;
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// Caller Options
// ============================================================================

/// Pagination options supplied by the caller
///
/// `cursor` and `jump_to_page` are mutually exclusive; supplying both fails
/// validation. Supplying any field at all switches a listing call into the
/// paginated flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Requested page size (clamped to the wire ceiling before dispatch)
    pub page_size: Option<u32>,
    /// Opaque cursor returned by a previous paginated response
    pub cursor: Option<String>,
    /// Page number to jump to directly (offset pagination only)
    pub jump_to_page: Option<u32>,
}

impl PaginationOptions {
    /// Create empty pagination options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Resume from a cursor returned by a previous response
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Jump directly to the given page number
    #[must_use]
    pub fn jump_to_page(mut self, page: u32) -> Self {
        self.jump_to_page = Some(page);
        self
    }

    /// Whether the caller asked for pagination at all
    pub fn is_requested(&self) -> bool {
        self.page_size.is_some() || self.cursor.is_some() || self.jump_to_page.is_some()
    }
}

/// Options for a listing call
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Pagination inputs; leaving all unset yields the non-paginated shape
    pub pagination: PaginationOptions,
    /// Scope identifier (folder/tenant id) routing the call
    pub scope_id: Option<String>,
    /// Extra filter/sort/expand parameters passed through to the backend
    pub params: HashMap<String, String>,
}

impl ListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pagination inputs
    #[must_use]
    pub fn pagination(mut self, pagination: PaginationOptions) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the scope identifier
    #[must_use]
    pub fn scope_id(mut self, scope_id: impl Into<String>) -> Self {
        self.scope_id = Some(scope_id.into());
        self
    }

    /// Add a passthrough parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Internal Parameters
// ============================================================================

/// Wire-ready internal parameters resolved from caller options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Paging style the request targets
    pub pagination_type: Option<PaginationType>,
    /// Requested page size, with the cursor's stored value taking precedence
    pub page_size: Option<u32>,
    /// Page number to fetch (offset pagination)
    pub page_number: Option<u32>,
    /// Continuation token to resume from (token pagination)
    pub continuation_token: Option<String>,
}

/// Metadata about one fetched page, used to assemble the response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Whether a further page exists
    pub has_more: bool,
    /// Total item count reported by the backend, when known
    pub total_count: Option<u64>,
    /// Page number that was fetched (offset pagination)
    pub current_page: Option<u32>,
    /// Effective page size of the fetch
    pub page_size: Option<u32>,
    /// Continuation token returned by the backend (token pagination)
    pub continuation_token: Option<String>,
    /// Number of items in the fetched page
    pub items_count: usize,
}

// ============================================================================
// Responses
// ============================================================================

/// Uniform paginated response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in this page
    pub items: Vec<T>,
    /// Total item count, when the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Whether a further page exists
    pub has_next_page: bool,
    /// Cursor for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Cursor for the previous page (offset pagination past page one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_cursor: Option<String>,
    /// Page number of this page (offset pagination)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    /// Total page count, when total count and page size are both known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// Whether `jump_to_page` is meaningful for this resource
    pub supports_page_jump: bool,
}

/// Response shape when no pagination was requested
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonPaginatedResponse<T> {
    /// All items returned by the single fetch
    pub items: Vec<T>,
    /// Total item count, when the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// Result of a listing call, discriminated by whether pagination inputs
/// were supplied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListResult<T> {
    /// Pagination was requested
    Paginated(PaginatedResponse<T>),
    /// No pagination inputs were supplied
    All(NonPaginatedResponse<T>),
}

impl<T> ListResult<T> {
    /// Whether this is the paginated shape
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Paginated(_))
    }

    /// Borrow the items regardless of shape
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paginated(response) => &response.items,
            Self::All(response) => &response.items,
        }
    }

    /// Consume the result, returning the items
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(response) => response.items,
            Self::All(response) => response.items,
        }
    }

    /// Total count regardless of shape, when known
    pub fn total_count(&self) -> Option<u64> {
        match self {
            Self::Paginated(response) => response.total_count,
            Self::All(response) => response.total_count,
        }
    }

    /// Borrow the paginated response, if that is the shape
    pub fn as_paginated(&self) -> Option<&PaginatedResponse<T>> {
        match self {
            Self::Paginated(response) => Some(response),
            Self::All(_) => None,
        }
    }
}
