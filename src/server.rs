//! # Request Handler
//!
//! The single-page HTTP surface: `GET /` with zero or more repeatable
//! `date_input` query values, each a `YYYY-MM-DD HH:MM:SS` timestamp.
//!
//! ## Behavior
//! -----------------
//! Values are processed strictly in input order. Empty values are skipped.
//! Each value is validated **inside** the processing loop: the first
//! unparsable value immediately replaces the entire page with a JSON error
//! body, discarding panels already rendered for earlier values. For each
//! valid timestamp the pipeline Fetch → Parse → Derive → Plot produces one
//! panel; a fetch-stage failure degrades to a literal "no data" placeholder
//! for that timestamp only.
//!
//! Derivation and rendering faults are not recovered: they propagate as
//! [`SatplotError`] and surface as a generic 500 response.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::orbital_state::derive_samples;
use crate::plot::orbit_distribution_figure;
use crate::satplot_errors::SatplotError;
use crate::spacetrack::{ElementProvider, FetchOutcome};
use crate::three_line::ThreeLineSet;

/// Query parameter carrying the requested timestamps.
pub const DATE_INPUT_PARAM: &str = "date_input";

/// Expected timestamp format for `date_input` values.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error message returned for an unparsable `date_input` value.
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Please use 'YYYY-MM-DD HH:MM:SS'.";

/// Panel substituted for a timestamp whose fetch failed.
pub const NO_DATA_PLACEHOLDER: &str = "<p>No data available for the selected date.</p>";

/// Shared router state: the element-set provider, holding only immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct AppState<P> {
    pub provider: P,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Build the application router around an element-set provider.
pub fn router<P: ElementProvider>(provider: P) -> Router {
    Router::new()
        .route("/", get(index::<P>))
        .with_state(AppState { provider })
}

/// `GET /`: validate and process every `date_input` value in order, then
/// assemble the page from the collected fragments.
async fn index<P: ElementProvider>(
    State(state): State<AppState<P>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, SatplotError> {
    let mut panels = Vec::new();

    for (key, raw) in params {
        if key != DATE_INPUT_PARAM || raw.is_empty() {
            continue;
        }

        let target = match NaiveDateTime::parse_from_str(&raw, DATE_INPUT_FORMAT) {
            Ok(target) => target,
            Err(_) => {
                debug!(value = %raw, "rejecting malformed date_input");
                return Ok(Json(ErrorBody {
                    error: INVALID_DATE_MESSAGE,
                })
                .into_response());
            }
        };

        let panel = match state.provider.fetch_elements(target).await {
            FetchOutcome::Retrieved(lines) => {
                let records = ThreeLineSet::from_lines(&lines);
                debug!(records = records.len(), date = %raw, "payload parsed");
                let samples = derive_samples(&records)?;
                orbit_distribution_figure(&samples, &target)?
            }
            FetchOutcome::AuthFailed | FetchOutcome::FetchFailed => {
                warn!(date = %raw, "no element sets retrieved, emitting placeholder");
                NO_DATA_PLACEHOLDER.to_string()
            }
        };
        panels.push(panel);
    }

    Ok(Html(render_page(&panels)).into_response())
}

/// Assemble the response page from the ordered panel fragments.
fn render_page(panels: &[String]) -> String {
    let mut body = String::new();
    for panel in panels {
        body.push_str(&format!("    <div class=\"plot-panel\">{panel}</div>\n"));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Satellite Altitude and Inclination</title>\n</head>\n<body>\n  <h1>Satellite Altitude and Inclination</h1>\n{body}</body>\n</html>\n"
    )
}

impl IntoResponse for SatplotError {
    fn into_response(self) -> Response {
        error!(error = %self, "request processing failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal error: {self}"),
        )
            .into_response()
    }
}
