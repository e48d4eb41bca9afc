//! Show form submission and start time parsing

use chrono::{DateTime, NaiveDateTime, Utc};

use super::{FormFields, ValidationError};

/// Accepted naive layouts, tried in order. Naive values are taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A validated show submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    /// Parse a submitted show form.
    ///
    /// Both ids must be present and numeric; whether they reference real
    /// rows is left to the database's foreign keys.
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            artist_id: fields.required_id("artist_id")?,
            venue_id: fields.required_id("venue_id")?,
            start_time: parse_start_time(&fields.required_text("start_time")?)?,
        })
    }
}

/// Parse a start time from a form value (RFC 3339 or a naive UTC layout).
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "expected YYYY-MM-DD HH:MM:SS",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::fields;
    use chrono::TimeZone;

    #[test]
    fn parses_layouts() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        for raw in [
            "2035-04-01 20:00:00",
            "2035-04-01 20:00",
            "2035-04-01T20:00",
            "2035-04-01T20:00:00Z",
            "2035-04-01T22:00:00+02:00",
        ] {
            assert_eq!(parse_start_time(raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn rejects_garbage_time() {
        assert!(matches!(
            parse_start_time("next tuesday"),
            Err(ValidationError::InvalidFormat { field: "start_time", .. })
        ));
    }

    #[test]
    fn absent_foreign_key_is_rejected() {
        let err = ShowForm::parse(&fields(&[
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .unwrap_err();

        assert_eq!(err, ValidationError::Missing { field: "artist_id" });
    }

    #[test]
    fn parses_full_submission() {
        let form = ShowForm::parse(&fields(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2019-05-21 21:30:00"),
        ]))
        .unwrap();

        assert_eq!(form.artist_id, 4);
        assert_eq!(form.venue_id, 1);
        assert_eq!(
            form.start_time,
            Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap()
        );
    }
}
