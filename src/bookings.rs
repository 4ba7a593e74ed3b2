// Booking fetcher: confirmed bookings for a single calendar date
use chrono::{Datelike, NaiveDate};
use tracing::{debug, error};

use crate::auth::{authenticate, JSON_CONTENT_TYPE};
use crate::config::SimplybookConfig;
use crate::error::{SimplybookError, TransportError};
use crate::transport::HttpTransport;
use crate::vendor::{BookingsResponse, RawBooking};

pub const CONFIRMED_STATUS: &str = "confirmed";

/// Format `date` as the ten-character `YYYY-MM-DD` filter value.
///
/// Years outside `0..=9999` would need a sign or a fifth digit, so they are
/// rejected instead of being sent to the vendor.
pub fn filter_date_string(date: NaiveDate) -> Result<String, SimplybookError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(SimplybookError::InvalidDate(date));
    }
    Ok(date.format("%Y-%m-%d").to_string())
}

pub async fn fetch_bookings_for_date<T>(
    config: &SimplybookConfig,
    transport: &T,
    date: NaiveDate,
) -> Result<Vec<RawBooking>, SimplybookError>
where
    T: HttpTransport + ?Sized,
{
    let filter_date = filter_date_string(date)?;
    let token = authenticate(config, transport).await?;

    let url = config.endpoint("bookings");
    let query = [
        ("filter[date]", filter_date),
        ("filter[status]", CONFIRMED_STATUS.to_string()),
    ];
    let headers = [
        (JSON_CONTENT_TYPE.0, JSON_CONTENT_TYPE.1.to_string()),
        ("X-Company-Login", config.company_login.clone()),
        ("X-Token", token.as_str().to_string()),
    ];

    let result = async {
        let body = transport.get_json(&url, &query, &headers).await?;
        let response: BookingsResponse = serde_json::from_value(body)?;
        Ok::<_, TransportError>(response.data)
    }
    .await;

    match result {
        Ok(bookings) => {
            debug!(%date, count = bookings.len(), "fetched confirmed bookings");
            Ok(bookings)
        }
        Err(err) => {
            error!(
                %date,
                error = %err,
                "failed to retrieve client booking information from SimplyBook API"
            );
            Err(SimplybookError::Fetch { date, source: err })
        }
    }
}
