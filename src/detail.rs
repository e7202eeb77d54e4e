//! Row-detail resolution for the call sheet.
//!
//! Each table cell is produced from a row key ("contact", "date", "status",
//! or any other field name) and one `ScheduledCall`. Missing data never
//! errors; it degrades to the documented defaults.

use chrono::{DateTime, Utc};

use crate::consts::{DATE_TOOLTIP_FORMAT, DEFAULT_STATUS, UNKNOWN_CONTACT};
use crate::data::{ContactStore, ScheduledCall};
use crate::utils::{Timezone, time_ago};

/// Color bucket for a call status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusColor {
    Green,
    Gray,
    Red,
    Blue,
}

impl StatusColor {
    pub(crate) fn name(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Gray => "gray",
            StatusColor::Red => "red",
            StatusColor::Blue => "blue",
        }
    }
}

/// Fixed status→color map; anything unrecognized is gray.
pub(crate) fn status_color(status: Option<&str>) -> StatusColor {
    match status {
        Some("Completed") => StatusColor::Green,
        Some("Pending") => StatusColor::Gray,
        Some("Cancelled") => StatusColor::Red,
        Some("Scheduled") => StatusColor::Blue,
        _ => StatusColor::Gray,
    }
}

/// What a single cell displays, per row key.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RowDetail {
    Contact {
        label: String,
        image: Option<String>,
    },
    Date {
        label: String,
        time_ago: String,
    },
    Status {
        label: String,
        color: StatusColor,
    },
    /// Pass-through of an arbitrary record field, `None` when absent.
    Field(Option<serde_json::Value>),
}

impl RowDetail {
    /// The cell text shown in table output.
    pub(crate) fn label(&self) -> String {
        match self {
            RowDetail::Contact { label, .. }
            | RowDetail::Date { label, .. }
            | RowDetail::Status { label, .. } => label.clone(),
            RowDetail::Field(value) => field_text(value.as_ref()),
        }
    }
}

fn field_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Resolve one row key against a call record.
///
/// `now` drives the relative-time string and `tz` the absolute one; both are
/// supplied by the caller, so resolution itself reads no clock.
pub(crate) fn call_row_detail(
    row: &str,
    call: &ScheduledCall,
    contacts: &ContactStore,
    now: DateTime<Utc>,
    tz: Timezone,
) -> RowDetail {
    match row {
        "contact" => {
            let contact = call.contact.as_deref().and_then(|id| contacts.get(id));
            RowDetail::Contact {
                label: contact
                    .and_then(|c| c.display_name())
                    .unwrap_or_else(|| UNKNOWN_CONTACT.to_string()),
                image: contact.and_then(|c| c.image.clone()),
            }
        }
        "date" => match call.timestamp() {
            Some(ts) => RowDetail::Date {
                label: tz.format(ts, DATE_TOOLTIP_FORMAT),
                time_ago: time_ago(ts, now),
            },
            // Unparseable dates fall back to the raw value, no error
            None => RowDetail::Date {
                label: call.date.clone().unwrap_or_default(),
                time_ago: String::new(),
            },
        },
        "status" => {
            let status = call.status.as_deref().filter(|s| !s.is_empty());
            RowDetail::Status {
                label: status.unwrap_or(DEFAULT_STATUS).to_string(),
                color: status_color(status),
            }
        }
        other => RowDetail::Field(lookup_field(call, other)),
    }
}

fn lookup_field(call: &ScheduledCall, key: &str) -> Option<serde_json::Value> {
    match key {
        "name" => call.name.clone().map(serde_json::Value::String),
        _ => call.extra.get(key).cloned(),
    }
}
