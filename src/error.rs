// Error types for the SimplyBook client
use chrono::NaiveDate;
use thiserror::Error;

// Failure of a single HTTP exchange, surfaced unchanged by every stage
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum SimplybookError {
    #[error("Authentication failed: {0}")]
    Authentication(#[source] TransportError),

    #[error("Failed to fetch bookings for {date}: {source}")]
    Fetch {
        date: NaiveDate,
        #[source]
        source: TransportError,
    },

    #[error("Booking #{index} is missing required field `{field}`")]
    Mapping { index: usize, field: &'static str },

    #[error("Date {0} cannot be formatted as YYYY-MM-DD")]
    InvalidDate(NaiveDate),
}

impl SimplybookError {
    /// Underlying transport failure for the auth and fetch stages.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            SimplybookError::Authentication(err) => Some(err),
            SimplybookError::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}
