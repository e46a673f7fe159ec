//! JSON API over the care engine.
//!
//! Thin axum handlers over the pure engine modules. The only shared state
//! is the experience memory store.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::{api_router, build_router};
pub use server::{start_api_server, ApiServer};
pub use types::{ApiContext, SESSION_HEADER};
