//! # Nimbus Platform Client
//!
//! Rust client library for the Nimbus cloud platform (process
//! orchestration, storage, case instances, human tasks, schema-backed
//! records).
//!
//! The platform's resources page their collections in two incompatible
//! ways: offset/total-count pagination with random access, and opaque
//! continuation-token pagination without it. This crate reconciles both
//! behind one opaque cursor so every resource service exposes identical
//! pagination semantics.
//!
//! ## Features
//!
//! - **Uniform pagination**: one cursor type across offset- and
//!   token-paginated resources
//! - **Discriminated results**: supplying any pagination input yields a
//!   paginated response with cursors; supplying none yields the plain
//!   collection shape
//! - **Per-resource configuration**: body field names, wire parameter
//!   spellings, scope routing, and key prefixing are explicit config
//! - **Pluggable transport**: the orchestrator talks to a
//!   [`http::RequestExecutor`] trait; the bundled [`http::ApiClient`] is
//!   one implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nimbus_client::{ListOptions, NimbusClient, PaginationOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = NimbusClient::new("https://cloud.example.com")?;
//!
//!     // First page of processes in folder 42
//!     let options = ListOptions::new()
//!         .scope_id("42")
//!         .pagination(PaginationOptions::new().page_size(25));
//!     let page = client.processes().list(&options).await?;
//!
//!     // Follow the cursor to the next page
//!     if let Some(cursor) = page.as_paginated().and_then(|p| p.next_cursor.clone()) {
//!         let next = ListOptions::new()
//!             .scope_id("42")
//!             .pagination(PaginationOptions::new().cursor(cursor));
//!         let _ = client.processes().list(&next).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller options
//!       │
//! ┌─────▼─────────────────────────────────────────────┐
//! │ Orchestrator  (paginated vs. plain flow, scope,   │
//! │                key prefixing)                     │
//! └─────┬──────────────────────────────────────┬──────┘
//!       │ validator → mapper                   │
//! ┌─────▼──────────────┐              ┌────────▼───────┐
//! │ RequestExecutor    │  raw page    │ PageAssembler  │
//! │ (one network call) ├─────────────▶│ (cursors,      │
//! └────────────────────┘              │  has-more)     │
//!                                     └────────┬───────┘
//!                                              ▼
//!                                     uniform response
//! ```
//!
//! No state survives a call; all continuation state lives in the cursor
//! value the caller holds, so concurrent use is safe by construction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Per-resource collection configuration
pub mod config;

/// HTTP executor seam and default client
pub mod http;

/// Pagination subsystem
pub mod pagination;

/// Built-in resource services
pub mod services;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ResourceConfig, WireParamNames};
pub use error::{Error, Result};
pub use pagination::{
    ListOptions, ListResult, NonPaginatedResponse, Orchestrator, PaginatedResponse,
    PaginationOptions,
};
pub use services::NimbusClient;
pub use types::PaginationType;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
