//! Pagination module
//!
//! Reconciles the platform's two paging styles — offset/total-count and
//! opaque continuation token — behind one uniform, opaque cursor so every
//! resource service exposes identical pagination semantics to callers.
//!
//! # Overview
//!
//! Caller options flow through the [`Orchestrator`], which validates them,
//! maps them to backend wire parameters, hands the single network call to a
//! [`crate::http::RequestExecutor`], and assembles the fetched page into a
//! uniform response. No state survives a call; all continuation state lives
//! in the cursor value the caller holds.

pub mod assembler;
pub mod cursor;
pub mod mapper;
mod orchestrator;
mod types;
pub mod validator;

pub use cursor::{CursorData, CURSOR_VERSION};
pub use mapper::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use orchestrator::Orchestrator;
pub use types::{
    ListOptions, ListResult, NonPaginatedResponse, PageInfo, PageRequest, PaginatedResponse,
    PaginationOptions,
};
