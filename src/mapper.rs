// Result mapper: projects raw vendor bookings into BookingInfo records
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SimplybookError;
use crate::vendor::RawBooking;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub client_email: String,
    pub booking_code: String,
    // The queried date, never a value read from the booking
    pub date: NaiveDate,
}

impl TryFrom<(usize, RawBooking, NaiveDate)> for BookingInfo {
    type Error = SimplybookError;

    fn try_from((index, raw, date): (usize, RawBooking, NaiveDate)) -> Result<Self, Self::Error> {
        let client = raw
            .client
            .ok_or(SimplybookError::Mapping { index, field: "client" })?;
        let client_email = client.email.ok_or(SimplybookError::Mapping {
            index,
            field: "client.email",
        })?;
        let booking_code = raw
            .code
            .ok_or(SimplybookError::Mapping { index, field: "code" })?;

        Ok(Self {
            client_email,
            booking_code,
            date,
        })
    }
}

/// Map vendor bookings in their original order, stamping each with `date`.
///
/// Fails on the first booking that lacks `client`, `client.email` or `code`.
pub fn map_bookings(
    bookings: Vec<RawBooking>,
    date: NaiveDate,
) -> Result<Vec<BookingInfo>, SimplybookError> {
    bookings
        .into_iter()
        .enumerate()
        .map(|(index, raw)| BookingInfo::try_from((index, raw, date)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::RawClient;

    fn raw(name: &str, email: Option<&str>, code: Option<&str>) -> RawBooking {
        RawBooking {
            client: Some(RawClient {
                name: Some(name.to_string()),
                email: email.map(str::to_string),
            }),
            code: code.map(str::to_string),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_map_preserves_order_and_date() {
        let bookings = vec![
            raw("B", Some("b@x.com"), Some("C2")),
            raw("A", Some("a@x.com"), Some("C1")),
        ];

        let infos = map_bookings(bookings, date()).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].client_email, "b@x.com");
        assert_eq!(infos[0].booking_code, "C2");
        assert_eq!(infos[1].client_email, "a@x.com");
        assert!(infos.iter().all(|info| info.date == date()));
    }

    #[test]
    fn test_map_empty() {
        assert!(map_bookings(Vec::new(), date()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_client_fails_fast() {
        let bookings = vec![
            raw("A", Some("a@x.com"), Some("C1")),
            RawBooking {
                client: None,
                code: Some("C2".to_string()),
            },
        ];

        let err = map_bookings(bookings, date()).unwrap_err();
        assert!(matches!(
            err,
            SimplybookError::Mapping { index: 1, field: "client" }
        ));
    }

    #[test]
    fn test_missing_email_and_code_are_reported() {
        let err = map_bookings(vec![raw("A", None, Some("C1"))], date()).unwrap_err();
        assert!(matches!(
            err,
            SimplybookError::Mapping { index: 0, field: "client.email" }
        ));

        let err = map_bookings(vec![raw("A", Some("a@x.com"), None)], date()).unwrap_err();
        assert!(matches!(
            err,
            SimplybookError::Mapping { index: 0, field: "code" }
        ));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let info = BookingInfo {
            client_email: "a@x.com".to_string(),
            booking_code: "C1".to_string(),
            date: date(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"clientEmail": "a@x.com", "bookingCode": "C1", "date": "2024-03-15"})
        );
    }
}
