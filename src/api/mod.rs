//! HTTP API module for the quoting engine.
//!
//! This module provides the REST endpoint for computing quotes. It is a
//! thin boundary: it looks up the shop configuration and material the way a
//! persistence layer would, calls the pure engine, and stamps the response.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{JobInputRequest, QuoteRequest};
pub use response::{ApiError, QuoteResponse};
pub use state::AppState;
