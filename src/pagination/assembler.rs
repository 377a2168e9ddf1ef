//! Page assembly
//!
//! Given one fetched page and its metadata, computes whether further pages
//! exist, builds next/previous cursors, and assembles the uniform paginated
//! response. Assembly is a pure function of its inputs: identical
//! `(info, type, items)` always produce identical output.

use super::cursor::{self, CursorData};
use super::types::{PageInfo, PaginatedResponse};
use crate::error::Result;
use crate::types::{OptionStringExt, PaginationType};

/// Compute whether a further page exists
///
/// Offset with a known total is exact: `current_page * page_size <
/// total_count`. Without a total the fallback is `items_count == page_size`,
/// which is imprecise on purpose: a final page that exactly fills the
/// requested size is reported as having a next page. Token pagination has
/// more iff the backend returned a non-empty continuation token.
pub fn has_more_pages(pagination_type: PaginationType, info: &PageInfo) -> bool {
    match pagination_type {
        PaginationType::Offset => match (info.total_count, info.current_page, info.page_size) {
            (Some(total), Some(page), Some(size)) => u64::from(page) * u64::from(size) < total,
            _ => info
                .page_size
                .is_some_and(|size| info.items_count == size as usize),
        },
        PaginationType::Token => info
            .continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty()),
    }
}

/// Build the cursor for the next page, or `None` on the last page
///
/// A token cursor is never fabricated: when `has_more` is set but the
/// backend returned no continuation token, there is no way to continue and
/// no cursor is produced.
pub fn create_cursor(info: &PageInfo, pagination_type: PaginationType) -> Result<Option<String>> {
    if !info.has_more {
        return Ok(None);
    }

    match pagination_type {
        PaginationType::Offset => {
            let next = info.current_page.unwrap_or(1) + 1;
            let data = CursorData::offset(next, info.page_size);
            Ok(Some(cursor::encode(&data)?))
        }
        PaginationType::Token => match info.continuation_token.clone().none_if_empty() {
            Some(token) => {
                let data = CursorData::token(token, info.page_size);
                Ok(Some(cursor::encode(&data)?))
            }
            None => Ok(None),
        },
    }
}

fn previous_cursor(info: &PageInfo, pagination_type: PaginationType) -> Result<Option<String>> {
    if pagination_type != PaginationType::Offset {
        return Ok(None);
    }
    match info.current_page {
        Some(page) if page > 1 => {
            let data = CursorData::offset(page - 1, info.page_size);
            Ok(Some(cursor::encode(&data)?))
        }
        _ => Ok(None),
    }
}

/// Assemble the uniform paginated response for one fetched page
pub fn paginated_response<T>(
    mut info: PageInfo,
    pagination_type: PaginationType,
    items: Vec<T>,
) -> Result<PaginatedResponse<T>> {
    info.items_count = items.len();
    info.has_more = has_more_pages(pagination_type, &info);

    let next_cursor = create_cursor(&info, pagination_type)?;
    let previous_cursor = previous_cursor(&info, pagination_type)?;

    let total_pages = match (info.total_count, info.page_size) {
        (Some(total), Some(size)) if size > 0 => Some(total.div_ceil(u64::from(size))),
        _ => None,
    };

    Ok(PaginatedResponse {
        items,
        total_count: info.total_count,
        has_next_page: info.has_more,
        next_cursor,
        previous_cursor,
        current_page: info.current_page,
        total_pages,
        supports_page_jump: pagination_type == PaginationType::Offset,
    })
}
