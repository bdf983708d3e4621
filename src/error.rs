use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The `error` object returned by the action API in place of `entities`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ApiErrorPayload {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

impl ApiErrorPayload {
    pub fn new<S1: Into<String>, S2: Into<String>>(code: S1, info: S2) -> Self {
        Self {
            code: code.into(),
            info: info.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

impl Display for ApiErrorPayload {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.info)
    }
}

#[derive(Debug, Error)]
pub enum EnricherError {
    #[error("{status} {status_text}")]
    HttpStatus {
        status: reqwest::StatusCode,
        status_text: String,
    },
    #[error("API error {0}")]
    ApiError(ApiErrorPayload),
    #[error("Entity {0} does not exist")]
    MissingEntity(String),
    #[error("{}", missing_or_invalid(.field, .j))]
    MissingOrInvalidField { field: String, j: Value },
    #[error("API URL does not contain '/api.php': {0}")]
    ApiUrlInvalid(String),
    #[error("Stub is not a JSON object: {0}")]
    StubNotAnObject(Value),
    #[error("Invalid date {time} (precision {precision})")]
    InvalidDate { time: String, precision: u8 },
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn missing_or_invalid(field: &str, j: &Value) -> String {
    if j.get(field).is_none() {
        format!("Missing field {field}: {j}")
    } else {
        format!("Invalid field type for {field}: {j}")
    }
}

impl EnricherError {
    /// Builds an `HttpStatus` error from a non-success response.
    pub fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        EnricherError::HttpStatus {
            status,
            status_text,
        }
    }
}
