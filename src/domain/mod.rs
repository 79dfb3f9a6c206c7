//! Domain layer for the medchat reply pipeline
//!
//! This module contains the request/reply models, rule and endpoint
//! definitions, the error taxonomy and the ports adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ChatError, ChatResult};
