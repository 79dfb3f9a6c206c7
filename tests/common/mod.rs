//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use medchat::domain::models::GenerationParameters;
use medchat::{
    CascadeConfig, ChatError, ChatResult, Config, ModelEndpoint, ReplyPipeline,
    TextGenerationClient,
};
use serde_json::Value;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// What a stub endpoint does when called
#[derive(Clone)]
pub enum StubBehavior {
    Reply(Value),
    Fail,
    Slow(Duration, Value),
    Panic,
}

/// In-memory text generation client scripted per model id.
///
/// Models without a behavior fail. Every call is recorded.
#[derive(Default)]
pub struct StubClient {
    behaviors: HashMap<String, StubBehavior>,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, model: &str, behavior: StubBehavior) -> Self {
        self.behaviors.insert(model.to_string(), behavior);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationClient for StubClient {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, endpoint: &ModelEndpoint, _message: &str) -> ChatResult<Value> {
        self.calls.lock().unwrap().push(endpoint.model.clone());
        match self.behaviors.get(&endpoint.model).cloned() {
            Some(StubBehavior::Reply(value)) => Ok(value),
            Some(StubBehavior::Slow(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Some(StubBehavior::Panic) => panic!("stub endpoint exploded"),
            Some(StubBehavior::Fail) | None => Err(ChatError::EndpointFailure {
                endpoint: endpoint.model.clone(),
                reason: "HTTP 503: unavailable".to_string(),
            }),
        }
    }
}

/// Config whose cascade is the given model ids, in order.
pub fn config_with_models(models: &[&str]) -> Config {
    Config {
        cascade: CascadeConfig {
            endpoints: models
                .iter()
                .map(|m| ModelEndpoint::new(*m, GenerationParameters::default()))
                .collect(),
            endpoint_timeout_ms: 500,
            deadline_ms: 2_000,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn pipeline_with(client: Arc<StubClient>, models: &[&str]) -> ReplyPipeline {
    ReplyPipeline::from_config(&config_with_models(models), client)
}
