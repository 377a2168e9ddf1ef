//! Wire parameter mapping
//!
//! Maps resolved internal parameters to the backend-specific query
//! parameters for each paging style. The parameter spellings come from the
//! per-resource [`WireParamNames`] configuration.

use super::types::PageRequest;
use crate::config::WireParamNames;
use crate::types::{PaginationType, StringMap};

/// Page size used when the caller does not supply one (offset pagination)
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Hard ceiling on the page size of any single fetch
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Clamp a requested page size into the allowed range, defaulting when unset
pub fn effective_page_size(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Build the wire query parameters for one page fetch
///
/// Offset: clamped page size, a skip computed from the page number when it
/// is past the first page, and an unconditional request for the total
/// count. Token: the clamped size hint and the continuation token verbatim,
/// each only when present; no skip concept exists.
pub fn to_wire_params(
    pagination_type: PaginationType,
    request: &PageRequest,
    names: &WireParamNames,
) -> StringMap {
    let mut params = StringMap::new();

    match pagination_type {
        PaginationType::Offset => {
            let size = effective_page_size(request.page_size);
            params.insert(names.page_size.clone(), size.to_string());

            if let Some(page) = request.page_number {
                if page > 1 {
                    let skip = u64::from(page - 1) * u64::from(size);
                    params.insert(names.skip.clone(), skip.to_string());
                }
            }

            params.insert(names.include_total.clone(), "true".to_string());
        }
        PaginationType::Token => {
            if let Some(size) = request.page_size {
                params.insert(
                    names.page_size.clone(),
                    size.clamp(1, MAX_PAGE_SIZE).to_string(),
                );
            }
            if let Some(token) = &request.continuation_token {
                params.insert(names.continuation_token.clone(), token.clone());
            }
        }
    }

    params
}
