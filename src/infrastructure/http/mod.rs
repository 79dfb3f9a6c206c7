//! HTTP boundary for the reply pipeline
//!
//! - `OPTIONS /chat`: CORS preflight, 204 with no body
//! - `POST /chat`: `{ "message" }` in, `{ "reply" }` out, always 200
//! - `GET /health`: liveness probe

pub mod handlers;
pub mod server;

pub use server::{build_router, AppState, ChatHttpServer, CORS_ALLOW_HEADERS};
