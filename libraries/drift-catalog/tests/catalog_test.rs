//! Catalog client tests against a mock HTTP server

use drift_catalog::{
    Catalog, CatalogConfig, CatalogError, CatalogWithFallback, HttpCatalog, RequestTracker,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(CatalogConfig::new(server.uri())).unwrap()
}

fn tracks_body() -> serde_json::Value {
    serde_json::json!({
        "tracks": [
            {
                "id": "t-1",
                "title": "Rainy Window",
                "artist": "Night Owl",
                "stream_url": "https://cdn.example.com/t-1.mp3",
                "duration_seconds": 180,
                "genre": "Lofi Hip Hop",
                "album_art_url": "https://cdn.example.com/t-1.jpg"
            },
            {
                "id": "t-2",
                "title": "Paper Boats",
                "artist": "Driftwood",
                "stream_url": "https://cdn.example.com/t-2.mp3"
            }
        ],
        "total": 2,
        "page": 1
    })
}

#[tokio::test]
async fn fetch_tracks_parses_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tracks_body()))
        .mount(&server)
        .await;

    let tracks = client_for(&server).fetch_tracks(1, 20).await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Rainy Window");
    assert_eq!(tracks[0].duration.as_secs(), 180);
    // Missing optional fields get defaults.
    assert_eq!(tracks[1].genre, "Lofi");
    assert_eq!(tracks[1].duration.as_secs(), 0);
}

#[tokio::test]
async fn search_hits_search_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/search"))
        .and(query_param("q", "rain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tracks_body()))
        .mount(&server)
        .await;

    let tracks = client_for(&server).search_tracks("rain").await.unwrap();
    assert_eq!(tracks.len(), 2);
}

#[tokio::test]
async fn stations_parse_with_live_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/radio/stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stations": [
                {
                    "id": "s-1",
                    "name": "Midnight FM",
                    "stream_url": "https://stream.example.com/midnight",
                    "genre": "Chillhop"
                }
            ]
        })))
        .mount(&server)
        .await;

    let stations = client_for(&server).fetch_stations().await.unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Midnight FM");
    assert!(stations[0].is_live);
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_tracks(1, 20).await.unwrap_err();
    match err {
        CatalogError::ServerError { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_tracks(1, 20).await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[tokio::test]
async fn fallback_substitutes_samples_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = CatalogWithFallback::new(client_for(&server));

    let tracks = catalog.fetch_tracks(1, 20).await.unwrap();
    assert!(!tracks.is_empty());

    let stations = catalog.fetch_stations().await.unwrap();
    assert!(!stations.is_empty());
}

#[tokio::test]
async fn fallback_passes_successful_responses_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tracks_body()))
        .mount(&server)
        .await;

    let catalog = CatalogWithFallback::new(client_for(&server));
    let tracks = catalog.fetch_tracks(1, 20).await.unwrap();
    assert_eq!(tracks[0].title, "Rainy Window");
}

#[tokio::test]
async fn fallback_search_filters_samples() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let catalog = CatalogWithFallback::new(client_for(&server));

    // Sample playlist contains "Midnight Dreams" by Lofi Collective.
    let hits = catalog.search_tracks("midnight").await.unwrap();
    assert!(hits.iter().any(|t| t.title == "Midnight Dreams"));

    let misses = catalog.search_tracks("zzz-no-such-track").await.unwrap();
    assert!(misses.is_empty());
}

#[test]
fn request_tracker_applies_only_newest() {
    let tracker = RequestTracker::new();
    let stale = tracker.begin();
    let fresh = tracker.begin();

    // Simulating the stale response arriving second changes nothing: its
    // token no longer matches.
    assert!(tracker.is_current(fresh));
    assert!(!tracker.is_current(stale));
}
