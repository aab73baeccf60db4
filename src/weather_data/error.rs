use crate::types::period::FetchPeriod;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {period} ({url})")]
    NetworkRequest {
        period: FetchPeriod,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {period} ({url}) with status {status}")]
    HttpStatus {
        period: FetchPeriod,
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body for {period}")]
    ResponseBody {
        period: FetchPeriod,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed JSON response for {period}")]
    MalformedJson {
        period: FetchPeriod,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response shape for {period}: {message}")]
    UnexpectedShape { period: FetchPeriod, message: String },

    #[error("Unparseable timestamp '{value}' in response for {period}")]
    Timestamp {
        period: FetchPeriod,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot build a request for {period}: no such calendar period")]
    InvalidPeriod { period: FetchPeriod },
}

impl FetchError {
    /// The period whose request failed.
    pub fn period(&self) -> FetchPeriod {
        match self {
            FetchError::NetworkRequest { period, .. }
            | FetchError::HttpStatus { period, .. }
            | FetchError::ResponseBody { period, .. }
            | FetchError::MalformedJson { period, .. }
            | FetchError::UnexpectedShape { period, .. }
            | FetchError::Timestamp { period, .. }
            | FetchError::InvalidPeriod { period } => *period,
        }
    }
}
