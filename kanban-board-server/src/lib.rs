//! HTTP/JSON front end for the kanban board engine
//!
//! Exposes the board, task and checklist commands under `/boards`, with a
//! `/health` probe. Errors are returned as `{"message": ...}` with 404 for
//! addressing failures and 500 for everything else.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{ConfigOverrides, ServerConfig, StorageKind};
pub use error::ApiError;
pub use routes::{router, AppState};
pub use server::{app, init_tracing, open_context, serve};
