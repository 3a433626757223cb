//! # Inventory API
//!
//! HTTP layer of the inventory backend: actix-web routes that translate
//! requests into mediator requests, JWT authentication middleware, CORS and
//! the mapping of response envelopes onto status codes.

pub mod app;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::{AppState, Repositories};
