//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: resource service → orchestrator → ApiClient →
//! wire → assembled response.

use nimbus_client::pagination::cursor;
use nimbus_client::{
    Error, ListOptions, NimbusClient, PaginationOptions, PaginationType, ResourceConfig,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Offset Pagination
// ============================================================================

#[tokio::test]
async fn test_offset_listing_first_page_and_cursor_follow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .and(query_param("$top", "10"))
        .and(query_param("$count", "true"))
        .and(query_param_is_missing("$skip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": (0..10).map(|i| json!({"id": i})).collect::<Vec<_>>(),
            "@odata.count": 100
        })))
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(10));
    let result = client.processes().list(&options).await.unwrap();

    let page = result.as_paginated().unwrap();
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_count, Some(100));
    assert_eq!(page.total_pages, Some(10));
    assert_eq!(page.current_page, Some(1));
    assert!(page.has_next_page);
    assert!(page.supports_page_jump);
    assert!(page.previous_cursor.is_none());

    // Follow the returned cursor; page two must hit the wire with a skip.
    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .and(query_param("$top", "10"))
        .and(query_param("$skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": (10..20).map(|i| json!({"id": i})).collect::<Vec<_>>(),
            "@odata.count": 100
        })))
        .mount(&mock_server)
        .await;

    let next_options = ListOptions::new()
        .pagination(PaginationOptions::new().cursor(page.next_cursor.clone().unwrap()));
    let result = client.processes().list(&next_options).await.unwrap();

    let page_two = result.as_paginated().unwrap();
    assert_eq!(page_two.current_page, Some(2));
    let previous = cursor::decode(page_two.previous_cursor.as_deref().unwrap()).unwrap();
    assert_eq!(previous.page_number, Some(1));
}

#[tokio::test]
async fn test_offset_page_size_ceiling_on_wire() {
    let mock_server = MockServer::start().await;

    // Only a clamped request matches; an unclamped 5000 would 404.
    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .and(query_param("$top", "1000"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"value": [], "@odata.count": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(5000));
    let result = client.processes().list(&options).await.unwrap();

    assert!(result.as_paginated().is_some());
}

#[tokio::test]
async fn test_page_jump_skips_directly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .and(query_param("$top", "25"))
        .and(query_param("$skip", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": 101}],
            "@odata.count": 101
        })))
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new()
        .pagination(PaginationOptions::new().page_size(25).jump_to_page(5));
    let result = client.processes().list(&options).await.unwrap();

    let page = result.as_paginated().unwrap();
    assert_eq!(page.current_page, Some(5));
    assert!(!page.has_next_page);
}

// ============================================================================
// Token Pagination
// ============================================================================

#[tokio::test]
async fn test_token_listing_follows_continuation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data-fabric/records"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "r1"}, {"id": "r2"}],
            "continuationToken": "token-page-2"
        })))
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(2));
    let result = client.records().list(&options).await.unwrap();

    let page = result.as_paginated().unwrap();
    assert!(page.has_next_page);
    assert!(!page.supports_page_jump);
    assert!(page.total_count.is_none());

    // The continuation token travels back verbatim.
    Mock::given(method("GET"))
        .and(path("/data-fabric/records"))
        .and(query_param("continuationToken", "token-page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "r3"}]
        })))
        .mount(&mock_server)
        .await;

    let next_options = ListOptions::new()
        .pagination(PaginationOptions::new().cursor(page.next_cursor.clone().unwrap()));
    let result = client.records().list(&next_options).await.unwrap();

    let last_page = result.as_paginated().unwrap();
    assert!(!last_page.has_next_page);
    assert!(last_page.next_cursor.is_none());
}

#[tokio::test]
async fn test_token_resource_rejects_page_jump_before_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().jump_to_page(3));
    let err = client.records().list(&options).await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_cursor_from_wrong_resource_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();

    // An offset cursor handed to a token-paginated resource.
    let foreign =
        cursor::encode(&cursor::CursorData::offset(2, Some(10))).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().cursor(foreign));
    let err = client.records().list(&options).await.unwrap_err();

    assert!(matches!(
        err,
        Error::CursorTypeMismatch {
            expected: PaginationType::Token,
            actual: PaginationType::Offset,
        }
    ));
}

// ============================================================================
// Non-Paginated Flow
// ============================================================================

#[tokio::test]
async fn test_plain_listing_single_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task-management/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": 1}, {"id": 2}, {"id": 3}],
            "@odata.count": 3
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let result = client.tasks().list(&ListOptions::new()).await.unwrap();

    assert!(!result.is_paginated());
    assert_eq!(result.items().len(), 3);
    assert_eq!(result.total_count(), Some(3));
}

// ============================================================================
// Scope Routing
// ============================================================================

#[tokio::test]
async fn test_scoped_bucket_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/storage/folders/42/buckets"))
        .and(header("x-nimbus-folder-id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"name": "invoices"}]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();

    // Same routing with and without pagination.
    let plain = ListOptions::new().scope_id("42");
    let result = client.buckets().list(&plain).await.unwrap();
    assert_eq!(result.items().len(), 1);

    let paged = ListOptions::new()
        .scope_id("42")
        .pagination(PaginationOptions::new().page_size(10));
    let result = client.buckets().list(&paged).await.unwrap();
    assert!(result.is_paginated());
}

// ============================================================================
// Custom Wire Shapes
// ============================================================================

#[tokio::test]
async fn test_case_listing_uses_custom_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/case-management/cases"))
        .and(query_param("pageSize", "10"))
        .and(query_param("includeTotal", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"caseId": "c-1"}],
            "totalCount": 1
        })))
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(10));
    let result = client.cases().list(&options).await.unwrap();

    let page = result.as_paginated().unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_count, Some(1));
}

#[tokio::test]
async fn test_filter_keys_are_prefixed_on_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .and(query_param("$filter", "name eq 'Intake'"))
        .and(query_param("searchTerm", "intake"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"value": [], "@odata.count": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new()
        .param("filter", "name eq 'Intake'")
        .param("searchTerm", "intake");
    let result = client.processes().list(&options).await.unwrap();

    assert!(!result.is_paginated());
}

// ============================================================================
// Error Propagation
// ============================================================================

#[tokio::test]
async fn test_backend_error_propagates_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orchestrator/processes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&mock_server)
        .await;

    let client = NimbusClient::new(mock_server.uri()).unwrap();
    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(10));
    let err = client.processes().list(&options).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance window");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Custom Resource Configuration
// ============================================================================

#[tokio::test]
async fn test_orchestrator_with_custom_config() {
    use nimbus_client::http::{ApiClient, RequestExecutor};
    use nimbus_client::{Orchestrator, WireParamNames};
    use std::sync::Arc;

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/audit/events"))
        .and(query_param("take", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"id": 1}],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let executor: Arc<dyn RequestExecutor> =
        Arc::new(ApiClient::new(mock_server.uri()).unwrap());
    let orchestrator = Orchestrator::new(executor);

    let config = ResourceConfig::new("/audit/events", PaginationType::Offset)
        .with_items_field("events")
        .with_total_count_field("total")
        .with_param_names(WireParamNames::new("take", "skip", "token", "count"));

    let options = ListOptions::new().pagination(PaginationOptions::new().page_size(5));
    let result: nimbus_client::ListResult<serde_json::Value> =
        orchestrator.get_all(&config, &options).await.unwrap();

    let page = result.as_paginated().unwrap();
    assert_eq!(page.total_count, Some(1));
    assert!(!page.has_next_page);
}
