use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Display timezone for absolute dates: the machine's local zone by default,
/// or a named IANA zone from `--timezone`/config.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Render a UTC instant in this zone with the given chrono format string.
    pub(crate) fn format(self, utc: DateTime<Utc>, fmt: &str) -> String {
        match self {
            Timezone::Local => {
                let local: DateTime<Local> = utc.into();
                local.format(fmt).to_string()
            }
            Timezone::Named(tz) => utc.with_timezone(&tz).format(fmt).to_string(),
        }
    }

    /// Calendar date of a UTC instant in this zone; drives since/until filters.
    pub(crate) fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => {
                let local: DateTime<Local> = utc.into();
                local.date_naive()
            }
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_empty_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("local")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn parse_whitespace_trimmed() {
        assert!(matches!(
            Timezone::parse(Some("  local  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn format_utc_preserves_time() {
        let utc = "2026-02-12T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(tz.format(utc, "%H:%M"), "10:00");
    }

    #[test]
    fn format_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(tz.format(utc, "%H:%M"), "08:00");
    }

    #[test]
    fn date_of_respects_zone() {
        let utc = "2026-02-06T01:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let ny = Timezone::parse(Some("America/New_York")).unwrap();
        // 01:00Z is still the previous evening in New York
        assert_eq!(
            ny.date_of(utc),
            NaiveDate::from_ymd_opt(2026, 2, 5).unwrap()
        );
        assert_eq!(
            Timezone::Named(chrono_tz::UTC).date_of(utc),
            NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
        );
    }

    #[test]
    fn format_tooltip_style() {
        let utc = "2026-01-14T15:04:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(
            tz.format(utc, crate::consts::DATE_TOOLTIP_FORMAT),
            "Wed, Jan 14, 2026 3:04 pm"
        );
    }
}
