//! Strictly Scoreboard - serving tennis matches over HTTP.
//!
//! Wraps the pure [`strictly_tennis`] engine with everything it leaves out:
//! an in-memory match store, name and form validation, completed-match
//! listings, an axum REST API, TOML configuration and a CLI.
//!
//! # Architecture
//!
//! - **Store**: [`MatchRecord`](strictly_tennis::MatchRecord)s behind per-match locks
//! - **Service**: create, score, look up and list matches
//! - **Validation**: player names, page numbers, point form fields
//! - **API**: routes mapping service errors onto HTTP statuses
//! - **Scoreboard**: text rendering and offline point sequences

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod scoreboard;
pub mod service;
pub mod store;
pub mod validation;

pub use api::{ApiError, AppState, MatchView, router};
pub use config::{ConfigError, ServerConfig};
pub use scoreboard::{PlayError, render_scoreboard, score_sequence};
pub use service::{CompletedMatch, CompletedPage, MatchService, ServiceError};
pub use store::{MatchStore, StoreError};
pub use validation::{NameError, NameErrors};
