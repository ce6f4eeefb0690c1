//! Field parsing helpers shared by HTTP handlers.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{Error, MeetupId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldErrorCode {
    InvalidUuid,
    InvalidTimestamp,
    InvalidRange,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::InvalidRange => "invalid_range",
        }
    }
}

/// Name of a request field as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: FieldErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_meetup_id(value: &str, field: FieldName) -> Result<MeetupId, Error> {
    value.parse().map_err(|_| {
        field_error(
            field,
            FieldErrorCode::InvalidUuid,
            format!("{} must be a valid UUID", field.as_str()),
            value,
        )
    })
}

pub(crate) fn parse_rfc3339_timestamp(
    value: &str,
    field: FieldName,
) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            field_error(
                field,
                FieldErrorCode::InvalidTimestamp,
                format!("{} must be an RFC 3339 timestamp", field.as_str()),
                value,
            )
        })
}

/// Reject ranges whose end precedes their start.
pub(crate) fn ensure_ordered(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    field: FieldName,
) -> Result<(), Error> {
    if end < start {
        return Err(field_error(
            field,
            FieldErrorCode::InvalidRange,
            format!("{} must not be before the start", field.as_str()),
            &end.to_rfc3339(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("startDate");

    #[rstest]
    #[case("2026-11-03T18:00:00Z", true)]
    #[case("2026-11-03T18:00:00+02:00", true)]
    #[case("2026-11-03 18:00", false)]
    #[case("", false)]
    fn timestamps_must_be_rfc3339(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_rfc3339_timestamp(raw, FIELD).is_ok(), ok);
    }

    #[rstest]
    fn offsets_are_normalised_to_utc() {
        let parsed = parse_rfc3339_timestamp("2026-11-03T20:00:00+02:00", FIELD)
            .expect("valid timestamp");
        assert_eq!(parsed.to_rfc3339(), "2026-11-03T18:00:00+00:00");
    }

    #[rstest]
    fn malformed_id_reports_field_and_value() {
        let err = parse_meetup_id("42", FieldName::new("meetupId")).expect_err("not a uuid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details are attached");
        assert_eq!(details["field"], "meetupId");
        assert_eq!(details["value"], "42");
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[rstest]
    fn reversed_range_is_rejected() {
        let start = parse_rfc3339_timestamp("2026-11-03T18:00:00Z", FIELD).expect("valid");
        let end = parse_rfc3339_timestamp("2026-11-03T17:00:00Z", FIELD).expect("valid");
        assert!(ensure_ordered(start, end, FieldName::new("endDate")).is_err());
        assert!(ensure_ordered(start, start, FieldName::new("endDate")).is_ok());
    }
}
