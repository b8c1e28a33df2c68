//! Tests for the base service

use super::*;
use crate::error::Error;
use crate::http::Transport;
use crate::pagination::PageIterator;
use crate::repository::{RepositoryId, RepositoryIdProvider};
use crate::test_support::ScriptedTransport;
use crate::types::{AcceptMediaType, ACCEPT_FULL, ACCEPT_HTML, PAGE_FIRST, PAGE_SIZE};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use test_case::test_case;

fn service(transport: ScriptedTransport) -> (GitHubService<ScriptedTransport>, Arc<ScriptedTransport>) {
    let transport = Arc::new(transport);
    (GitHubService::new(Arc::clone(&transport)), transport)
}

struct FixedId(Option<&'static str>);

impl RepositoryIdProvider for FixedId {
    fn generate_id(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_client_accessor_returns_same_handle() {
    let transport = Arc::new(ScriptedTransport::new());
    let service = GitHubService::new(Arc::clone(&transport));
    assert!(Arc::ptr_eq(service.client(), &transport));
}

#[test]
fn test_try_new_rejects_missing_client() {
    let err = GitHubService::<ScriptedTransport>::try_new(None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_try_new_accepts_client() {
    let transport = Arc::new(ScriptedTransport::new());
    let service = GitHubService::try_new(Some(Arc::clone(&transport))).unwrap();
    assert!(Arc::ptr_eq(service.client(), &transport));
}

#[test]
fn test_service_over_trait_object() {
    let transport: Arc<dyn Transport> = Arc::new(ScriptedTransport::new());
    let service = GitHubService::new(transport);
    assert_eq!(service.defaults(), &RequestDefaults::default());
}

#[test]
fn test_default_client_service() {
    let service = GitHubService::with_default_client().unwrap();
    assert_eq!(service.client().config().base_url, "https://api.github.com");
}

// ============================================================================
// Request Factories
// ============================================================================

#[test]
fn test_create_request_has_no_target() {
    let (service, _) = service(ScriptedTransport::new());
    let request = service.create_request();
    assert!(request.uri.is_none());
    assert!(request.accept.is_none());
}

#[test]
fn test_create_request_applies_accept_default() {
    let (service, _) = service(ScriptedTransport::new());
    let service =
        service.with_defaults(RequestDefaults::default().with_accept(AcceptMediaType::Html));

    assert_eq!(service.create_request().accept.as_deref(), Some(ACCEPT_HTML));
    assert_eq!(
        service.create_paged_request().request.accept.as_deref(),
        Some(ACCEPT_HTML)
    );
}

#[test]
fn test_create_paged_request_defaults() {
    let (service, _) = service(ScriptedTransport::new());
    let request = service.create_paged_request();
    assert_eq!(request.page, PAGE_FIRST);
    assert_eq!(request.page_size, PAGE_SIZE);
}

#[test]
fn test_create_paged_request_overridden_defaults() {
    let (service, _) = service(ScriptedTransport::new());
    let service = service.with_defaults(
        RequestDefaults::default()
            .with_start_page(3)
            .with_page_size(30),
    );
    let request = service.create_paged_request();
    assert_eq!((request.page, request.page_size), (3, 30));
}

#[test]
fn test_request_defaults_keep_paging_positive() {
    let defaults = RequestDefaults::default()
        .with_start_page(0)
        .with_page_size(0);
    assert_eq!((defaults.start_page, defaults.page_size), (PAGE_FIRST, 1));
    assert!(defaults.validate().is_ok());

    let (service, _) = service(ScriptedTransport::new());
    let request = service.with_defaults(defaults).create_paged_request();
    assert_eq!((request.page, request.page_size), (PAGE_FIRST, 1));
}

#[test]
fn test_request_defaults_validate_rejects_zero() {
    let defaults = RequestDefaults {
        start_page: 0,
        ..RequestDefaults::default()
    };
    assert!(matches!(defaults.validate(), Err(Error::Config { .. })));

    let defaults = RequestDefaults {
        page_size: 0,
        ..RequestDefaults::default()
    };
    assert!(matches!(defaults.validate(), Err(Error::Config { .. })));
}

#[test]
fn test_create_paged_request_with_explicit_paging() {
    let (service, _) = service(ScriptedTransport::new());
    let request = service.create_paged_request_with(5, 10);
    assert_eq!((request.page, request.page_size), (5, 10));

    // no bounds validation at this layer
    let request = service.create_paged_request_with(0, 0);
    assert_eq!((request.page, request.page_size), (0, 0));
}

#[test]
fn test_create_page_iterator_is_ready() {
    let (service, _) = service(ScriptedTransport::new());
    let pages: PageIterator<Value, _> =
        service.create_page_iterator(service.create_paged_request_with(2, 10));
    assert!(pages.has_next());
    assert_eq!(pages.next_page(), Some(2));
}

// ============================================================================
// get_all
// ============================================================================

#[tokio::test]
async fn test_get_all_concatenates_pages_in_order() {
    let (service, transport) = service(
        ScriptedTransport::new()
            .page(json!([1, 2]), Some(2))
            .page(json!([3, 4]), Some(3))
            .page(json!([5]), None),
    );
    let request = service.create_paged_request().with_uri("/user/repos");

    let all: Vec<u32> = service.get_all(request).await.unwrap();
    assert_eq!(all, vec![1, 2, 3, 4, 5]);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_get_all_keeps_duplicates() {
    let (service, _) = service(
        ScriptedTransport::new()
            .page(json!([1, 1]), Some(2))
            .page(json!([1]), None),
    );
    let all: Vec<u32> = service
        .get_all(service.create_paged_request().with_uri("/x"))
        .await
        .unwrap();
    assert_eq!(all, vec![1, 1, 1]);
}

#[tokio::test]
async fn test_get_all_single_page() {
    let (service, transport) = service(ScriptedTransport::new().page(json!([7]), None));
    let all: Vec<u32> = service
        .get_all(service.create_paged_request().with_uri("/x"))
        .await
        .unwrap();
    assert_eq!(all, vec![7]);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_get_all_empty_collection() {
    let (service, _) = service(ScriptedTransport::new().page(json!([]), None));
    let all: Vec<u32> = service
        .get_all(service.create_paged_request().with_uri("/x"))
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_get_all_from_exhausted_iterator() {
    let (service, transport) = service(ScriptedTransport::new().page(json!([1]), None));
    let mut pages: PageIterator<u32, _> =
        service.create_page_iterator(service.create_paged_request().with_uri("/x"));
    pages.next().await.unwrap();

    let all = service.get_all_from(pages).await.unwrap();
    assert!(all.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test_case(1 ; "first page fails")]
#[test_case(3 ; "later page fails")]
#[tokio::test]
async fn test_get_all_unwraps_page_failure(failing_page: u32) {
    let mut transport = ScriptedTransport::new();
    for page in 1..failing_page {
        transport = transport.page(json!([page]), Some(page + 1));
    }
    let (service, _) = service(transport.fail(Error::http_status(500, "Server Error")));

    let err = service
        .get_all::<u32>(service.create_paged_request().with_uri("/x"))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server Error");
        }
        other => panic!("Expected the transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_all_unwraps_decode_failure() {
    let (service, _) = service(ScriptedTransport::new().page(json!(["not a number"]), None));
    let err = service
        .get_all::<u32>(service.create_paged_request().with_uri("/x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

// ============================================================================
// check
// ============================================================================

#[tokio::test]
async fn test_check_true_on_success() {
    let (service, transport) = service(ScriptedTransport::new().page(json!({"sha": "abc"}), None));
    assert!(service.check("/repos/octo/hello/contents/README.md").await.unwrap());

    let requests = transport.requests();
    assert_eq!(
        requests[0].uri.as_deref(),
        Some("/repos/octo/hello/contents/README.md")
    );
    assert!(requests[0].params.is_empty());
}

#[tokio::test]
async fn test_check_false_on_not_found() {
    let (service, _) = service(ScriptedTransport::new().fail(Error::http_status(404, "Not Found")));
    assert!(!service.check("/repos/octo/missing").await.unwrap());
}

#[test_case(401 ; "unauthorized")]
#[test_case(403 ; "forbidden")]
#[test_case(500 ; "server error")]
#[tokio::test]
async fn test_check_propagates_other_statuses(status: u16) {
    let (service, _) = service(ScriptedTransport::new().fail(Error::http_status(status, "nope")));
    let err = service.check("/repos/octo/hello").await.unwrap_err();
    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn test_check_propagates_non_status_errors() {
    let (service, _) = service(ScriptedTransport::new().fail(Error::config("broken")));
    let err = service.check("/repos/octo/hello").await.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_check_uses_accept_default() {
    let (service, transport) = service(ScriptedTransport::new().page(json!({}), None));
    let service =
        service.with_defaults(RequestDefaults::default().with_accept(AcceptMediaType::Full));
    service.check("/gists/1").await.unwrap();
    assert_eq!(transport.requests()[0].accept.as_deref(), Some(ACCEPT_FULL));
}

// ============================================================================
// Argument Guards
// ============================================================================

#[test]
fn test_require_repository_id_missing_provider() {
    let (service, _) = service(ScriptedTransport::new());
    let err = service.require_repository_id(None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test_case(None ; "absent id")]
#[test_case(Some("") ; "empty id")]
fn test_require_repository_id_rejects(id: Option<&'static str>) {
    let (service, _) = service(ScriptedTransport::new());
    let provider = FixedId(id);
    let err = service.require_repository_id(Some(&provider)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_require_repository_id_returns_id() {
    let (service, _) = service(ScriptedTransport::new());
    let provider = FixedId(Some("abc"));
    assert_eq!(service.require_repository_id(Some(&provider)).unwrap(), "abc");

    let repo = RepositoryId::new("octo", "hello").unwrap();
    assert_eq!(service.require_repository_id(Some(&repo)).unwrap(), "octo/hello");
}

#[test_case(Some(""), Some("repo") ; "empty owner")]
#[test_case(Some("user"), Some("") ; "empty name")]
#[test_case(None, Some("repo") ; "missing owner")]
#[test_case(Some("user"), None ; "missing name")]
fn test_require_owner_and_name_rejects(owner: Option<&str>, name: Option<&str>) {
    let (service, _) = service(ScriptedTransport::new());
    let err = service.require_owner_and_name(owner, name).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_require_owner_and_name_returns_service() {
    let (service, _) = service(ScriptedTransport::new());
    let returned = service
        .require_owner_and_name(Some("user"), Some("repo"))
        .unwrap();
    assert!(std::ptr::eq(returned, &service));
}
