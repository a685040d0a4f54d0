//! Day-off domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A calendar date on which a barber does not take bookings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayOff {
    pub id: i64,
    #[schema(example = "lele")]
    pub barber_id: String,
    #[schema(value_type = String, example = "2024-06-01")]
    pub date: NaiveDate,
}

/// Single day-off request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDayOff {
    #[validate(length(min = 1, message = "barberId is required"))]
    #[schema(example = "lele")]
    pub barber_id: String,
    #[schema(value_type = String, example = "2024-06-01")]
    pub date: NaiveDate,
}

/// Inclusive date range request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayOffRange {
    #[validate(length(min = 1, message = "barberId is required"))]
    #[schema(example = "lele")]
    pub barber_id: String,
    #[schema(value_type = String, example = "2024-06-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, example = "2024-06-03")]
    pub end_date: NaiveDate,
}

/// Query for the day-off check; `date` is parsed by the handler
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DayOffCheckQuery {
    pub barber_id: String,
    pub date: String,
}

/// Every date from `start` to `end`, both inclusive, ascending.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_dates_between_inclusive() {
        let days: Vec<_> = dates_between(date("2024-06-01"), date("2024-06-03")).collect();
        assert_eq!(
            days,
            vec![date("2024-06-01"), date("2024-06-02"), date("2024-06-03")]
        );
    }

    #[test]
    fn test_dates_between_crosses_month_end() {
        let days: Vec<_> = dates_between(date("2024-02-28"), date("2024-03-01")).collect();
        assert_eq!(days.len(), 3); // leap year
    }

    #[test]
    fn test_dates_between_reversed_is_empty() {
        assert_eq!(dates_between(date("2024-06-03"), date("2024-06-01")).count(), 0);
    }

    #[test]
    fn test_range_body_uses_client_field_names() {
        let json = r#"{"barberId":"lele","startDate":"2024-06-01","endDate":"2024-06-03"}"#;
        let range: DayOffRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.barber_id, "lele");
        assert_eq!(range.end_date, date("2024-06-03"));
    }
}
