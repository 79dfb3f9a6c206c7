//! Remote text-generation endpoint definitions.
//!
//! Each endpoint knows how to build its request body and how to pull
//! candidate text out of whatever JSON shape the service answers with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One remote text-generation service in the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelEndpoint {
    /// Model identifier, e.g. `microsoft/DialoGPT-medium`
    pub model: String,

    /// Full URL override. Defaults to `{base_url}/{model}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Sampling parameters sent with every request
    #[serde(default)]
    pub parameters: GenerationParameters,

    /// Ask the service to wait for a cold model instead of failing fast
    #[serde(default = "default_wait_for_model")]
    pub wait_for_model: bool,

    /// Which response shapes are accepted
    #[serde(default)]
    pub response_format: ResponseFormat,
}

const fn default_wait_for_model() -> bool {
    true
}

impl ModelEndpoint {
    pub fn new(model: impl Into<String>, parameters: GenerationParameters) -> Self {
        Self {
            model: model.into(),
            url: None,
            parameters,
            wait_for_model: default_wait_for_model(),
            response_format: ResponseFormat::default(),
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn id(&self) -> &str {
        &self.model
    }

    /// URL this endpoint is called at, given the configured base URL.
    pub fn resolve_url(&self, base_url: &str) -> String {
        self.url.clone().unwrap_or_else(|| {
            format!("{}/{}", base_url.trim_end_matches('/'), self.model)
        })
    }

    pub fn build_request(&self, message: &str) -> GenerationRequest {
        GenerationRequest {
            inputs: message.to_string(),
            parameters: self.parameters.clone(),
            options: GenerationOptions {
                wait_for_model: self.wait_for_model,
                use_cache: false,
            },
        }
    }

    pub fn extract(&self, raw: &Value) -> Option<String> {
        self.response_format.extract(raw)
    }
}

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerationParameters {
    /// Upper bound on generated length
    #[serde(default = "default_max_length")]
    pub max_length: u32,

    /// Sampling temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Enable stochastic sampling
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
}

const fn default_max_length() -> u32 {
    100
}

const fn default_temperature() -> f64 {
    0.7
}

const fn default_do_sample() -> bool {
    true
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            temperature: default_temperature(),
            do_sample: default_do_sample(),
        }
    }
}

/// Service-side options sent alongside the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub wait_for_model: bool,
    pub use_cache: bool,
}

/// Request body: `{ inputs, parameters, options }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
    pub options: GenerationOptions,
}

/// Accepted response shapes.
///
/// - `Array`: `[{ "generated_text": ... } | { "text": ... }, ...]`, element 0 is used
/// - `Object`: `{ "generated_text": ... }`
/// - `Auto`: either of the above
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Auto,
    Array,
    Object,
}

impl ResponseFormat {
    /// Candidate text from a raw response, or `None` if the shape is unknown.
    pub fn extract(self, raw: &Value) -> Option<String> {
        match (self, raw) {
            (Self::Auto | Self::Array, Value::Array(items)) => items
                .first()
                .and_then(|item| text_field(item, &["generated_text", "text"])),
            (Self::Auto | Self::Object, Value::Object(_)) => text_field(raw, &["generated_text"]),
            _ => None,
        }
    }
}

fn text_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
