use serde::{Deserialize, Serialize};

// Data structures for SimplyBook admin API responses
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingsResponse {
    pub data: Vec<RawBooking>,
}

// Optional fields let the mapper report a malformed booking by position
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawBooking {
    #[serde(default)]
    pub client: Option<RawClient>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawClient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
