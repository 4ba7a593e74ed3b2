// Top-level SimplyBook client: authenticate -> fetch -> map on every call
use chrono::NaiveDate;

use crate::auth::{self, AuthToken};
use crate::bookings;
use crate::config::SimplybookConfig;
use crate::error::SimplybookError;
use crate::mapper::{self, BookingInfo};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::vendor::RawBooking;

/// Stateless client; no token or response outlives a single call.
#[derive(Debug)]
pub struct SimplybookClient<T: HttpTransport = ReqwestTransport> {
    config: SimplybookConfig,
    transport: T,
}

impl SimplybookClient<ReqwestTransport> {
    pub fn new(config: SimplybookConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> SimplybookClient<T> {
    pub fn with_transport(config: SimplybookConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SimplybookConfig {
        &self.config
    }

    pub async fn authenticate(&self) -> Result<AuthToken, SimplybookError> {
        auth::authenticate(&self.config, &self.transport).await
    }

    pub async fn fetch_bookings_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<RawBooking>, SimplybookError> {
        bookings::fetch_bookings_for_date(&self.config, &self.transport, date).await
    }

    /// Confirmed bookings for `date` as `BookingInfo`, in vendor order.
    pub async fn get_therapy_booking_info_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<BookingInfo>, SimplybookError> {
        let raw = self.fetch_bookings_for_date(date).await?;
        mapper::map_bookings(raw, date)
    }
}
