// SimplyBook admin API client: confirmed bookings for a date as BookingInfo records

pub mod auth;
pub mod bookings;
pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod transport;
pub mod vendor;

#[cfg(test)]
mod test_logs;

// Re-export key types for convenience
pub use auth::AuthToken;
pub use client::SimplybookClient;
pub use config::SimplybookConfig;
pub use error::{ConfigError, SimplybookError, TransportError};
pub use mapper::{map_bookings, BookingInfo};
pub use transport::{HttpTransport, ReqwestTransport};
pub use vendor::{RawBooking, RawClient};
