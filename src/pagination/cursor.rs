//! Opaque pagination cursor codec
//!
//! A cursor is the only artifact of this subsystem that crosses a trust
//! boundary: it is handed to callers and later handed back. The payload is
//! compact JSON encoded as URL-safe base64 without padding, carrying an
//! explicit version tag so a future payload shape cannot silently misparse
//! an outstanding cursor.
//!
//! Callers never construct cursors; only the assembler does, after a
//! successful fetch.

use crate::error::{Error, Result};
use crate::types::PaginationType;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Current cursor payload version
pub const CURSOR_VERSION: u8 = 1;

fn default_version() -> u8 {
    CURSOR_VERSION
}

/// Decoded cursor payload
///
/// Shape invariant: an offset cursor never carries a continuation token and
/// a token cursor never carries a page number. Both encode and decode
/// enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorData {
    /// Payload version tag
    #[serde(rename = "v", default = "default_version")]
    pub version: u8,
    /// Paging style this cursor belongs to
    #[serde(rename = "type")]
    pub pagination_type: PaginationType,
    /// Page number to fetch next (offset cursors)
    #[serde(rename = "pageNumber", default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Backend continuation token (token cursors)
    #[serde(
        rename = "continuationToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub continuation_token: Option<String>,
    /// Page size the listing was started with
    #[serde(rename = "pageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl CursorData {
    /// Create an offset cursor payload
    pub fn offset(page_number: u32, page_size: Option<u32>) -> Self {
        Self {
            version: CURSOR_VERSION,
            pagination_type: PaginationType::Offset,
            page_number: Some(page_number),
            continuation_token: None,
            page_size,
        }
    }

    /// Create a token cursor payload
    pub fn token(continuation_token: impl Into<String>, page_size: Option<u32>) -> Self {
        Self {
            version: CURSOR_VERSION,
            pagination_type: PaginationType::Token,
            page_number: None,
            continuation_token: Some(continuation_token.into()),
            page_size,
        }
    }

    fn check_shape(&self) -> Result<()> {
        match self.pagination_type {
            PaginationType::Offset if self.continuation_token.is_some() => Err(
                Error::invalid_cursor("offset cursor must not carry a continuation token"),
            ),
            PaginationType::Token if self.page_number.is_some() => Err(Error::invalid_cursor(
                "token cursor must not carry a page number",
            )),
            _ => Ok(()),
        }
    }
}

/// Encode a cursor payload into its opaque string form
pub fn encode(data: &CursorData) -> Result<String> {
    data.check_shape()?;
    let bytes = serde_json::to_vec(data)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode an opaque cursor string back into its payload
///
/// Fails with [`Error::InvalidCursor`] on empty input, bad base64, malformed
/// JSON, a missing `type` discriminator, a shape violation, or an
/// unsupported payload version.
pub fn decode(value: &str) -> Result<CursorData> {
    if value.is_empty() {
        return Err(Error::invalid_cursor("cursor is empty"));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| Error::invalid_cursor(format!("not valid base64: {e}")))?;

    let data: CursorData = serde_json::from_slice(&bytes)
        .map_err(|e| Error::invalid_cursor(format!("malformed cursor payload: {e}")))?;

    if data.version != CURSOR_VERSION {
        return Err(Error::invalid_cursor(format!(
            "unsupported cursor version {}",
            data.version
        )));
    }
    data.check_shape()?;

    Ok(data)
}
