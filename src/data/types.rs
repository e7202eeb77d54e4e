use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One scheduled call as stored on disk. Known columns are lifted to fields;
/// everything else lands in `extra` and is rendered as-is.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScheduledCall {
    pub(crate) name: Option<String>,
    pub(crate) contact: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) status: Option<String>,
    #[serde(flatten)]
    pub(crate) extra: BTreeMap<String, serde_json::Value>,
}

impl ScheduledCall {
    /// Parsed call timestamp, `None` when missing or not RFC 3339.
    pub(crate) fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref()?.parse::<DateTime<Utc>>().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Contact {
    pub(crate) name: String,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) full_name: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) email_id: Option<String>,
    pub(crate) mobile_no: Option<String>,
}

impl Contact {
    /// `full_name` when the record carries one, otherwise first+last joined.
    pub(crate) fn display_name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_deref() {
            let full = full.trim();
            if !full.is_empty() {
                return Some(full.to_string());
            }
        }
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let joined = joined.trim();
        if joined.is_empty() {
            None
        } else {
            Some(joined.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_timestamp_parses_rfc3339() {
        let call: ScheduledCall =
            serde_json::from_str(r#"{"name":"c1","date":"2026-02-06T10:00:00Z"}"#).unwrap();
        assert_eq!(
            call.timestamp().unwrap().to_rfc3339(),
            "2026-02-06T10:00:00+00:00"
        );
    }

    #[test]
    fn call_timestamp_none_for_garbage() {
        let call: ScheduledCall =
            serde_json::from_str(r#"{"name":"c1","date":"tomorrow"}"#).unwrap();
        assert!(call.timestamp().is_none());
    }

    #[test]
    fn extra_fields_are_captured() {
        let call: ScheduledCall =
            serde_json::from_str(r#"{"name":"c1","note":"call after lunch","priority":2}"#)
                .unwrap();
        assert_eq!(
            call.extra.get("note").and_then(|v| v.as_str()),
            Some("call after lunch")
        );
        assert_eq!(call.extra.get("priority").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn display_name_prefers_full_name() {
        let c = Contact {
            name: "CONT-1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            full_name: Some("Ada K. Lovelace".to_string()),
            ..Contact::default()
        };
        assert_eq!(c.display_name().unwrap(), "Ada K. Lovelace");
    }

    #[test]
    fn display_name_joins_and_trims_parts() {
        let c = Contact {
            name: "CONT-2".to_string(),
            first_name: Some("Grace".to_string()),
            ..Contact::default()
        };
        assert_eq!(c.display_name().unwrap(), "Grace");
    }

    #[test]
    fn display_name_none_when_empty() {
        let c = Contact {
            name: "CONT-3".to_string(),
            full_name: Some("   ".to_string()),
            ..Contact::default()
        };
        assert!(c.display_name().is_none());
    }
}
