//! Pagination option validation
//!
//! Validates caller-supplied pagination options and resolves them into
//! wire-ready internal parameters. Everything here runs before any network
//! call: invalid input never triggers a partial or wasted request.

use super::cursor;
use super::types::{PageRequest, PaginationOptions};
use crate::error::{Error, Result};
use crate::types::PaginationType;

/// Validate pagination options against the resource's expected paging style
///
/// Enforces positive `page_size` and `jump_to_page`, rejects `jump_to_page`
/// for token pagination (the backend offers no random access) and in
/// combination with a cursor, and checks that a supplied cursor decodes and
/// matches the expected paging style.
pub fn validate(options: &PaginationOptions, expected: Option<PaginationType>) -> Result<()> {
    if let Some(size) = options.page_size {
        if size == 0 {
            return Err(Error::validation("pageSize must be greater than zero"));
        }
    }

    if let Some(page) = options.jump_to_page {
        if page == 0 {
            return Err(Error::validation("jumpToPage must be greater than zero"));
        }
        if expected == Some(PaginationType::Token) {
            return Err(Error::validation(
                "jumpToPage is not supported with token pagination",
            ));
        }
        if options.cursor.is_some() {
            return Err(Error::validation(
                "cursor and jumpToPage are mutually exclusive",
            ));
        }
    }

    if let Some(raw) = &options.cursor {
        let data = cursor::decode(raw)?;
        if let Some(expected) = expected {
            if data.pagination_type != expected {
                return Err(Error::type_mismatch(expected, data.pagination_type));
            }
        }
    }

    Ok(())
}

/// Resolve validated options into wire-ready internal parameters
///
/// A page jump wins outright; otherwise no cursor means the first page
/// (page number 1 for offset pagination, nothing for token), and a cursor
/// resumes from its decoded state. The cursor's stored page size takes
/// precedence over the caller's so a listing keeps its page geometry.
pub fn request_parameters(
    options: &PaginationOptions,
    expected: Option<PaginationType>,
) -> Result<PageRequest> {
    validate(options, expected)?;

    if let Some(page) = options.jump_to_page {
        return Ok(PageRequest {
            pagination_type: expected,
            page_size: options.page_size,
            page_number: Some(page),
            continuation_token: None,
        });
    }

    match &options.cursor {
        None => Ok(PageRequest {
            pagination_type: expected,
            page_size: options.page_size,
            page_number: (expected == Some(PaginationType::Offset)).then_some(1),
            continuation_token: None,
        }),
        Some(raw) => {
            let data = cursor::decode(raw)?;
            Ok(PageRequest {
                pagination_type: Some(data.pagination_type),
                page_size: data.page_size.or(options.page_size),
                page_number: data.page_number,
                continuation_token: data.continuation_token,
            })
        }
    }
}
