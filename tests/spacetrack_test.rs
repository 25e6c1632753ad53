use std::collections::HashMap;

use axum::extract::{Form, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use tokio::net::TcpListener;

use satplot::config::Credentials;
use satplot::spacetrack::{ElementProvider, FetchOutcome, SpaceTrackClient};

const STUB_PAYLOAD: &str = "0 ISS (ZARYA)\n1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992\n2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

fn cutoff() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn credentials() -> Credentials {
    Credentials {
        identity: "orbit_watcher".to_string(),
        password: "hunter2".to_string(),
    }
}

async fn login(Form(fields): Form<HashMap<String, String>>) -> StatusCode {
    let identity = fields.get("identity").map(String::as_str);
    let password = fields.get("password").map(String::as_str);
    if identity == Some("orbit_watcher") && password == Some("hunter2") {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn query(Path(rest): Path<String>) -> Response {
    // The client percent-encodes the comparison operators; axum hands the
    // wildcard back decoded.
    if rest.contains("EPOCH/>2024-01-01T00:00:00Z")
        && rest.contains("MEAN_MOTION/>11.25")
        && rest.contains("ECCENTRICITY/<0.25")
        && rest.contains("format/3le")
    {
        STUB_PAYLOAD.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_elements_success() {
    let app = Router::new()
        .route("/ajaxauth/login", post(login))
        .route("/basicspacedata/query/{*rest}", get(query));
    let base = spawn_stub(app).await;

    let client = SpaceTrackClient::new(credentials()).with_base_url(base);
    match client.fetch_elements(cutoff()).await {
        FetchOutcome::Retrieved(lines) => {
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "0 ISS (ZARYA)");
        }
        other => panic!("expected Retrieved, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_login_is_auth_failure() {
    let app = Router::new()
        .route("/ajaxauth/login", post(login))
        .route("/basicspacedata/query/{*rest}", get(query));
    let base = spawn_stub(app).await;

    let bad_credentials = Credentials {
        identity: "orbit_watcher".to_string(),
        password: "wrong".to_string(),
    };
    let client = SpaceTrackClient::new(bad_credentials).with_base_url(base);
    assert_eq!(client.fetch_elements(cutoff()).await, FetchOutcome::AuthFailed);
}

#[tokio::test]
async fn test_failing_data_call_is_fetch_failure() {
    let app = Router::new()
        .route("/ajaxauth/login", post(login))
        .route(
            "/basicspacedata/query/{*rest}",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base = spawn_stub(app).await;

    let client = SpaceTrackClient::new(credentials()).with_base_url(base);
    assert_eq!(client.fetch_elements(cutoff()).await, FetchOutcome::FetchFailed);
}

#[tokio::test]
async fn test_unreachable_provider_is_auth_failure() {
    let client = SpaceTrackClient::new(credentials()).with_base_url("http://127.0.0.1:1");
    assert_eq!(client.fetch_elements(cutoff()).await, FetchOutcome::AuthFailed);
}
