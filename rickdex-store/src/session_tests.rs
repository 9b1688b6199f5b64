//! Session state machine tests.
//!
//! Exercises pagination, exhaustion, filtering, and failure classification
//! against a scripted in-memory transport.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use rickdex_core::{CharacterStatus, NetworkError, ParsingError, RequestError};
use rickdex_fetch::{ApiRequest, RequestClient, Transport};

use crate::session::CatalogSession;

// ============================================================================
// Scripted Transport
// ============================================================================

/// Transport double that replays scripted responses and records every
/// request it receives.
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, NetworkError>>>,
    requests: Mutex<Vec<ApiRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<Vec<u8>, NetworkError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Makes every send block until the gate receives a permit.
    fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn request(&self, index: usize) -> ApiRequest {
        self.requests.lock().await[index].clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, NetworkError> {
        self.requests.lock().await.push(request.clone());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(NetworkError::NoData))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

const STATUS_CYCLE: [&str; 3] = ["Alive", "Dead", "unknown"];

fn character_json(id: u64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "unknown",
        "origin": { "name": "Earth", "url": "" },
        "location": { "name": "Earth", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// Builds one page of `count` characters starting at `start_id`, statuses
/// cycling Alive/Dead/unknown.
fn page_body(start_id: u64, count: usize, has_next: bool) -> Vec<u8> {
    let results: Vec<_> = (0..count)
        .map(|i| character_json(start_id + i as u64, STATUS_CYCLE[i % 3]))
        .collect();

    let next = has_next.then(|| "https://rickandmortyapi.com/api/character?page=2".to_string());
    serde_json::to_vec(&serde_json::json!({
        "info": { "count": 826, "pages": 42, "next": next, "prev": null },
        "results": results
    }))
    .unwrap()
}

fn session_over(transport: Arc<ScriptedTransport>) -> CatalogSession {
    CatalogSession::new(RequestClient::with_transport(transport))
}

// ============================================================================
// Initial State
// ============================================================================

#[tokio::test]
async fn test_new_session_starts_empty() {
    let session = session_over(Arc::new(ScriptedTransport::new(Vec::new())));

    let snapshot = session.snapshot().await;
    assert!(snapshot.visible.is_empty());
    assert!(!snapshot.loading);
    assert!(snapshot.last_error.is_none());
    assert!(!snapshot.exhausted);
    assert!(snapshot.active_filter.is_none());
}

// ============================================================================
// Accumulation & Pagination
// ============================================================================

#[tokio::test]
async fn test_successful_fetch_accumulates() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(page_body(1, 20, true))]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;

    assert_eq!(session.visible().await.len(), 20);
    assert!(session.last_error().await.is_none());
    assert!(session.has_more().await);
}

#[tokio::test]
async fn test_second_page_extends_list() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Ok(page_body(1, 20, true)),
        Ok(page_body(21, 20, true)),
    ]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;
    assert_eq!(session.visible().await.len(), 20);

    session.fetch_next_page().await;
    assert_eq!(session.visible().await.len(), 40);

    // Cursor advanced between the calls
    assert_eq!(transport.request(0).await.query_value("page"), Some("1"));
    assert_eq!(transport.request(1).await.query_value("page"), Some("2"));
}

#[tokio::test]
async fn test_terminal_page_stops_fetching() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(page_body(1, 20, false))]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;
    assert_eq!(session.visible().await.len(), 20);
    assert!(!session.has_more().await);

    // Exhaustion is permanent: no further network call, no state change
    session.fetch_next_page().await;
    assert_eq!(session.visible().await.len(), 20);
    assert_eq!(transport.request_count().await, 1);
}

#[tokio::test]
async fn test_duplicate_page_delivery_discarded() {
    // The server delivers page 1's content twice; the repeat is dropped
    // whole, silently, and the cursor stays where it was.
    let transport = Arc::new(ScriptedTransport::new(vec![
        Ok(page_body(1, 20, true)),
        Ok(page_body(1, 20, true)),
        Ok(page_body(21, 20, true)),
    ]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;
    session.fetch_next_page().await;

    assert_eq!(session.visible().await.len(), 20);
    assert!(session.last_error().await.is_none());
    assert!(session.has_more().await);

    // The discarded delivery did not advance the cursor
    session.fetch_next_page().await;
    assert_eq!(transport.request(1).await.query_value("page"), Some("2"));
    assert_eq!(transport.request(2).await.query_value("page"), Some("2"));
    assert_eq!(session.visible().await.len(), 40);
}

// ============================================================================
// Failure Classification
// ============================================================================

#[tokio::test]
async fn test_404_means_exhaustion_not_error() {
    let transport = Arc::new(ScriptedTransport::new(vec![Err(
        NetworkError::UnexpectedStatusCode(404),
    )]));
    let session = session_over(Arc::clone(&transport));
    assert!(session.has_more().await);

    session.fetch_next_page().await;

    assert!(session.last_error().await.is_none());
    assert!(!session.has_more().await);
}

#[tokio::test]
async fn test_network_errors_surface_without_exhausting() {
    let errors = vec![
        NetworkError::InvalidServerResponse("connection reset".to_string()),
        NetworkError::InvalidUrl("not a url".to_string()),
        NetworkError::NoData,
        NetworkError::NoInternetConnection,
        NetworkError::UnexpectedStatusCode(500),
    ];

    for expected in errors {
        let transport = Arc::new(ScriptedTransport::new(vec![Err(expected.clone())]));
        let session = session_over(Arc::clone(&transport));

        session.fetch_next_page().await;

        assert_eq!(
            session.last_error().await,
            Some(RequestError::Network(expected.clone())),
            "wrong classification for {expected:?}"
        );
        assert!(session.has_more().await, "{expected:?} must not exhaust");
        assert!(session.visible().await.is_empty());
    }
}

#[tokio::test]
async fn test_parsing_error_surfaces() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(b"invalid data".to_vec())]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;

    assert!(matches!(
        session.last_error().await,
        Some(RequestError::Parsing(ParsingError::InvalidData(_)))
    ));
    assert!(session.has_more().await);
}

#[tokio::test]
async fn test_failed_page_retries_same_cursor() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Err(NetworkError::UnexpectedStatusCode(500)),
        Ok(page_body(1, 20, true)),
    ]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;
    assert!(session.last_error().await.is_some());

    // Retry is a plain re-invocation; the cursor did not advance and the
    // previous error is cleared on entry.
    session.fetch_next_page().await;
    assert_eq!(transport.request(0).await.query_value("page"), Some("1"));
    assert_eq!(transport.request(1).await.query_value("page"), Some("1"));
    assert!(session.last_error().await.is_none());
    assert_eq!(session.visible().await.len(), 20);
}

// ============================================================================
// Filtering
// ============================================================================

#[tokio::test]
async fn test_filter_restricts_and_restores() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(page_body(1, 6, true))]));
    let session = session_over(Arc::clone(&transport));
    session.fetch_next_page().await;

    session.apply_filter(CharacterStatus::Alive).await;
    let visible = session.visible().await;
    let ids: Vec<u64> = visible.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4], "alive subset, original order");
    assert!(visible.iter().all(|c| c.status == CharacterStatus::Alive));

    session.clear_filter().await;
    assert_eq!(session.visible().await.len(), 6);
    assert!(session.active_filter().await.is_none());
}

#[tokio::test]
async fn test_filter_applies_to_later_pages() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Ok(page_body(1, 6, true)),
        Ok(page_body(7, 6, true)),
    ]));
    let session = session_over(Arc::clone(&transport));

    session.fetch_next_page().await;
    session.apply_filter(CharacterStatus::Dead).await;
    assert_eq!(session.visible().await.len(), 2);

    // Newly fetched items flow through the active filter
    session.fetch_next_page().await;
    let visible = session.visible().await;
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|c| c.status == CharacterStatus::Dead));
}

#[tokio::test]
async fn test_filter_never_triggers_a_fetch() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(page_body(1, 6, true))]));
    let session = session_over(Arc::clone(&transport));
    session.fetch_next_page().await;

    session.apply_filter(CharacterStatus::Unknown).await;
    session.clear_filter().await;

    assert_eq!(transport.request_count().await, 1);
    assert!(session.has_more().await);
}

#[tokio::test]
async fn test_filter_value_reaches_the_wire() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Ok(page_body(1, 6, true)),
        Ok(page_body(7, 6, true)),
    ]));
    let session = session_over(Arc::clone(&transport));

    // No filter: the wire convention is an empty status value
    session.fetch_next_page().await;
    assert_eq!(transport.request(0).await.query_value("status"), Some(""));

    session.apply_filter(CharacterStatus::Dead).await;
    session.fetch_next_page().await;
    assert_eq!(
        transport.request(1).await.query_value("status"),
        Some("Dead")
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_single_fetch_in_flight() {
    let gate = Arc::new(Semaphore::new(0));
    let transport = Arc::new(
        ScriptedTransport::new(vec![Ok(page_body(1, 20, true))]).gated(Arc::clone(&gate)),
    );
    let session = session_over(Arc::clone(&transport));

    let background = session.clone();
    let first = tokio::spawn(async move { background.fetch_next_page().await });

    // Let the first fetch reach the transport and park on the gate
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(session.is_loading().await);

    // Re-entrant call observes a pure no-op: no second network call
    session.fetch_next_page().await;
    assert_eq!(transport.request_count().await, 1);
    assert!(session.visible().await.is_empty());

    gate.add_permits(1);
    first.await.unwrap();

    assert_eq!(transport.request_count().await, 1);
    assert_eq!(session.visible().await.len(), 20);
    assert!(!session.is_loading().await);
}

// ============================================================================
// Observability
// ============================================================================

#[tokio::test]
async fn test_subscribers_see_published_snapshots() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(page_body(1, 20, true))]));
    let session = session_over(Arc::clone(&transport));
    let mut rx = session.subscribe();

    session.fetch_next_page().await;

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.visible.len(), 20);
    assert!(!snapshot.loading);
    assert!(snapshot.last_error.is_none());
}
