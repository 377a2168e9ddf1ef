//! Built-in resource services
//!
//! Thin per-resource clients for the platform's five listing surfaces:
//! processes, storage buckets, case instances, human tasks, and
//! schema-backed records. Each service pairs its default [`ResourceConfig`]
//! with the shared pagination [`Orchestrator`], so every resource exposes
//! identical pagination semantics regardless of which paging style its
//! backend speaks.
//!
//! Resource-specific business field mappings stay out of this crate; items
//! come back as raw JSON values unless the caller deserializes them with
//! `list_as`.

use crate::config::ResourceConfig;
use crate::error::Result;
use crate::http::{ApiClient, RequestExecutor};
use crate::pagination::{ListOptions, ListResult, Orchestrator};
use crate::types::{JsonValue, PaginationType};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Header carrying the folder scope id on scoped endpoints
pub const FOLDER_SCOPE_HEADER: &str = "x-nimbus-folder-id";

macro_rules! listing_methods {
    () => {
        /// Get this service's resource configuration
        pub fn config(&self) -> &ResourceConfig {
            &self.config
        }

        /// List the collection as raw JSON items
        pub async fn list(&self, options: &ListOptions) -> Result<ListResult<JsonValue>> {
            self.orchestrator.get_all(&self.config, options).await
        }

        /// List the collection, deserializing each item into `T`
        pub async fn list_as<T: DeserializeOwned>(
            &self,
            options: &ListOptions,
        ) -> Result<ListResult<T>> {
            self.orchestrator.get_all(&self.config, options).await
        }
    };
}

// ============================================================================
// Process Orchestration
// ============================================================================

/// Client for process definitions
///
/// Offset-paginated OData listing, folder-scoped via header. Filter and
/// sort keys are `$`-prefixed on the wire; free-text search is not an
/// OData option and stays unprefixed.
#[derive(Debug, Clone)]
pub struct ProcessService {
    orchestrator: Orchestrator,
    config: ResourceConfig,
}

impl ProcessService {
    /// Create the service over a shared executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        let config = ResourceConfig::new("/orchestrator/processes", PaginationType::Offset)
            .with_scope_header(FOLDER_SCOPE_HEADER)
            .with_key_prefix("$")
            .with_exclude_from_prefixing(vec!["searchTerm".to_string()]);
        Self {
            orchestrator: Orchestrator::new(executor),
            config,
        }
    }

    listing_methods!();
}

// ============================================================================
// Storage Buckets
// ============================================================================

/// Client for storage buckets
///
/// Offset-paginated; bucket listings move to a folder-scoped endpoint when
/// a scope id is present.
#[derive(Debug, Clone)]
pub struct BucketService {
    orchestrator: Orchestrator,
    config: ResourceConfig,
}

impl BucketService {
    /// Create the service over a shared executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        let config = ResourceConfig::new("/storage/buckets", PaginationType::Offset)
            .with_scoped_endpoint("/storage/folders/{scopeId}/buckets")
            .with_scope_header(FOLDER_SCOPE_HEADER)
            .with_key_prefix("$");
        Self {
            orchestrator: Orchestrator::new(executor),
            config,
        }
    }

    listing_methods!();
}

// ============================================================================
// Case Instances
// ============================================================================

/// Client for case/workflow instances
///
/// Offset-paginated, but on a non-OData surface: camelCase wire parameter
/// spellings and plain body field names.
#[derive(Debug, Clone)]
pub struct CaseService {
    orchestrator: Orchestrator,
    config: ResourceConfig,
}

impl CaseService {
    /// Create the service over a shared executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        let config = ResourceConfig::new("/case-management/cases", PaginationType::Offset)
            .with_scope_header(FOLDER_SCOPE_HEADER)
            .with_items_field("items")
            .with_total_count_field("totalCount")
            .with_param_names(crate::config::WireParamNames::new(
                "pageSize",
                "skip",
                "continuationToken",
                "includeTotal",
            ));
        Self {
            orchestrator: Orchestrator::new(executor),
            config,
        }
    }

    listing_methods!();
}

// ============================================================================
// Human Tasks
// ============================================================================

/// Client for human tasks
///
/// Offset-paginated OData listing, folder-scoped via header.
#[derive(Debug, Clone)]
pub struct TaskService {
    orchestrator: Orchestrator,
    config: ResourceConfig,
}

impl TaskService {
    /// Create the service over a shared executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        let config = ResourceConfig::new("/task-management/tasks", PaginationType::Offset)
            .with_scope_header(FOLDER_SCOPE_HEADER)
            .with_key_prefix("$");
        Self {
            orchestrator: Orchestrator::new(executor),
            config,
        }
    }

    listing_methods!();
}

// ============================================================================
// Schema-Backed Records
// ============================================================================

/// Client for schema-backed records
///
/// Token-paginated: the backend hands out continuation tokens and offers
/// neither a total count nor random access, so `jump_to_page` fails
/// validation for this resource.
#[derive(Debug, Clone)]
pub struct RecordService {
    orchestrator: Orchestrator,
    config: ResourceConfig,
}

impl RecordService {
    /// Create the service over a shared executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        let config = ResourceConfig::new("/data-fabric/records", PaginationType::Token)
            .with_scoped_endpoint("/data-fabric/schemas/{scopeId}/records")
            .with_param_names(crate::config::WireParamNames::new(
                "limit",
                "skip",
                "continuationToken",
                "includeTotal",
            ));
        Self {
            orchestrator: Orchestrator::new(executor),
            config,
        }
    }

    listing_methods!();
}

// ============================================================================
// Platform Client
// ============================================================================

/// One client for the whole platform
///
/// Bundles the five resource services over a single shared [`ApiClient`].
#[derive(Debug)]
pub struct NimbusClient {
    processes: ProcessService,
    buckets: BucketService,
    cases: CaseService,
    tasks: TaskService,
    records: RecordService,
}

impl NimbusClient {
    /// Create a platform client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let executor: Arc<dyn RequestExecutor> = Arc::new(ApiClient::new(base_url)?);
        Ok(Self::with_executor(executor))
    }

    /// Create a platform client over a custom executor
    pub fn with_executor(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            processes: ProcessService::new(executor.clone()),
            buckets: BucketService::new(executor.clone()),
            cases: CaseService::new(executor.clone()),
            tasks: TaskService::new(executor.clone()),
            records: RecordService::new(executor),
        }
    }

    /// Process definitions
    pub fn processes(&self) -> &ProcessService {
        &self.processes
    }

    /// Storage buckets
    pub fn buckets(&self) -> &BucketService {
        &self.buckets
    }

    /// Case instances
    pub fn cases(&self) -> &CaseService {
        &self.cases
    }

    /// Human tasks
    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    /// Schema-backed records
    pub fn records(&self) -> &RecordService {
        &self.records
    }
}
