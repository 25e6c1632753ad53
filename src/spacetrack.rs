//! # Space-Track Data Fetcher
//!
//! Authenticated retrieval of **general perturbations (GP)** element sets
//! from the Space-Track API.
//!
//! ## Overview
//! -----------------
//! One invocation performs a session-scoped, two-step exchange:
//!
//! 1. a credential-bearing form `POST` to the fixed login endpoint,
//! 2. on success, a `GET` of the GP query for the requested cutoff epoch,
//!    carried on the same cookie-bearing session.
//!
//! The query selects payloads whose epoch is after the cutoff, with mean
//! motion above 11.25 revs/day and eccentricity below 0.25, ordered by
//! catalog id then epoch, in three-line element text format.
//!
//! ## Failure model
//! -----------------
//! The fetcher **never raises**: every failure is folded into the returned
//! [`FetchOutcome`]. The two failure stages stay distinguishable
//! (`AuthFailed` vs `FetchFailed`) even though the request handler treats
//! them identically, rendering a per-timestamp "no data" placeholder. Any
//! non-200 status is a failure; there is no retry and no explicit timeout.
//!
//! ## See also
//! ------------
//! * [`crate::config::Credentials`] – Account identity read at startup.
//! * [`crate::three_line`] – Consumes the returned line sequence.

use std::future::Future;

use chrono::NaiveDateTime;
use reqwest::StatusCode;
use tracing::warn;

use crate::config::Credentials;

/// Production Space-Track API root.
pub const DEFAULT_BASE_URL: &str = "https://www.space-track.org";

/// Epoch lower-bound format required by the GP query (ISO-8601, `Z`-suffixed).
pub const EPOCH_QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Result of one fetch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response body, split into lines.
    Retrieved(Vec<String>),
    /// The login call failed (transport error or non-200 status).
    AuthFailed,
    /// The data call failed (transport error, non-200 status, or an
    /// unreadable body).
    FetchFailed,
}

/// Seam between the request handler and the element-set source, so tests can
/// substitute a stub provider for the remote API.
pub trait ElementProvider: Clone + Send + Sync + 'static {
    /// Retrieve the raw 3LE payload for objects with epochs after `cutoff`.
    fn fetch_elements(&self, cutoff: NaiveDateTime) -> impl Future<Output = FetchOutcome> + Send;
}

/// Build the GP query URL for a cutoff epoch.
///
/// Arguments
/// -----------------
/// * `base_url`: API root, without a trailing slash.
/// * `cutoff`: epoch lower bound; objects with epochs after this instant
///   are selected.
///
/// Return
/// ----------
/// * The fully parameterized query URL (fixed orbital-regime filter, sorted
///   by `NORAD_CAT_ID,EPOCH`, three-line element format).
pub fn query_url(base_url: &str, cutoff: &NaiveDateTime) -> String {
    format!(
        "{base_url}/basicspacedata/query/class/gp/EPOCH/%3E{}/MEAN_MOTION/%3E11.25/ECCENTRICITY/%3C0.25/OBJECT_TYPE/payload/orderby/NORAD_CAT_ID,EPOCH/format/3le",
        cutoff.format(EPOCH_QUERY_FORMAT)
    )
}

/// Live Space-Track client holding the immutable account configuration.
#[derive(Debug, Clone)]
pub struct SpaceTrackClient {
    credentials: Credentials,
    base_url: String,
}

impl SpaceTrackClient {
    /// Create a client against the production API root.
    pub fn new(credentials: Credentials) -> Self {
        SpaceTrackClient {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at an alternate API root (stand-in providers,
    /// tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ElementProvider for SpaceTrackClient {
    /// Perform the login + query exchange on a fresh session.
    ///
    /// A new cookie-store client is built per invocation, so the
    /// authenticated session lives exactly as long as one fetch and nothing
    /// is shared across requests.
    fn fetch_elements(&self, cutoff: NaiveDateTime) -> impl Future<Output = FetchOutcome> + Send {
        async move {
            let session = match reqwest::Client::builder().cookie_store(true).build() {
                Ok(client) => client,
                Err(e) => {
                    warn!(error = %e, "unable to build the HTTP session");
                    return FetchOutcome::AuthFailed;
                }
            };

            let login_url = format!("{}/ajaxauth/login", self.base_url);
            let form = [
                ("identity", self.credentials.identity.as_str()),
                ("password", self.credentials.password.as_str()),
            ];
            let login = match session.post(&login_url).form(&form).send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(error = %e, "Space-Track login call failed");
                    return FetchOutcome::AuthFailed;
                }
            };
            if login.status() != StatusCode::OK {
                warn!(status = %login.status(), "Space-Track login rejected");
                return FetchOutcome::AuthFailed;
            }

            let url = query_url(&self.base_url, &cutoff);
            let data = match session.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(error = %e, "Space-Track query call failed");
                    return FetchOutcome::FetchFailed;
                }
            };
            if data.status() != StatusCode::OK {
                warn!(status = %data.status(), "Space-Track query rejected");
                return FetchOutcome::FetchFailed;
            }

            match data.text().await {
                Ok(body) => FetchOutcome::Retrieved(body.lines().map(str::to_owned).collect()),
                Err(e) => {
                    warn!(error = %e, "unable to read the Space-Track response body");
                    FetchOutcome::FetchFailed
                }
            }
        }
    }
}
