use chrono::{DateTime, Utc};

use crate::cli::SortOrder;
use crate::data::{ContactStore, ScheduledCall};
use crate::detail::{RowDetail, call_row_detail};
use crate::output::table::sort_calls;
use crate::utils::Timezone;

/// JSON shape of one resolved detail, mirroring the table branches.
fn detail_json(detail: RowDetail) -> serde_json::Value {
    match detail {
        RowDetail::Contact { label, image } => serde_json::json!({
            "label": label,
            "image": image,
        }),
        RowDetail::Date { label, time_ago } => serde_json::json!({
            "label": label,
            "time_ago": time_ago,
        }),
        RowDetail::Status { label, color } => serde_json::json!({
            "label": label,
            "color": color.name(),
        }),
        RowDetail::Field(value) => value.unwrap_or(serde_json::Value::Null),
    }
}

pub(crate) fn output_calls_json(
    calls: &[ScheduledCall],
    contacts: &ContactStore,
    columns: &[String],
    order: SortOrder,
    now: DateTime<Utc>,
    timezone: Timezone,
) -> String {
    let mut sorted = calls.to_vec();
    sort_calls(&mut sorted, order);

    let output: Vec<serde_json::Value> = sorted
        .iter()
        .map(|call| {
            let mut row = serde_json::Map::new();
            for key in columns {
                let detail = call_row_detail(key, call, contacts, now, timezone);
                row.insert(key.clone(), detail_json(detail));
            }
            serde_json::Value::Object(row)
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

pub(crate) fn output_contacts_json(contacts: &ContactStore) -> String {
    let output: Vec<serde_json::Value> = contacts
        .sorted()
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.name,
                "full_name": c.display_name(),
                "image": c.image,
                "email_id": c.email_id,
                "mobile_no": c.mobile_no,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Contact;

    fn now() -> DateTime<Utc> {
        "2026-02-06T12:00:00Z".parse().unwrap()
    }

    fn store() -> ContactStore {
        ContactStore::new(vec![Contact {
            name: "CONT-1".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            ..Contact::default()
        }])
    }

    #[test]
    fn calls_json_resolves_each_column() {
        let calls: Vec<ScheduledCall> = serde_json::from_str(
            r#"[{"name":"SC-1","contact":"CONT-1","date":"2026-02-06T09:00:00Z","status":"Scheduled","note":"ring twice"}]"#,
        )
        .unwrap();
        let columns: Vec<String> = ["contact", "date", "status", "note", "owner"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let json = output_calls_json(
            &calls,
            &store(),
            &columns,
            SortOrder::Asc,
            now(),
            Timezone::Named(chrono_tz::UTC),
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let row = &parsed[0];
        assert_eq!(row["contact"]["label"], "Ada Lovelace");
        assert_eq!(row["contact"]["image"], serde_json::Value::Null);
        assert_eq!(row["date"]["label"], "Fri, Feb 6, 2026 9:00 am");
        assert_eq!(row["date"]["time_ago"], "3 hours ago");
        assert_eq!(row["status"]["label"], "Scheduled");
        assert_eq!(row["status"]["color"], "blue");
        assert_eq!(row["note"], "ring twice");
        assert_eq!(row["owner"], serde_json::Value::Null);
    }

    #[test]
    fn calls_json_desc_order() {
        let calls: Vec<ScheduledCall> = serde_json::from_str(
            r#"[
                {"name":"SC-1","date":"2026-02-06T09:00:00Z"},
                {"name":"SC-2","date":"2026-02-07T09:00:00Z"}
            ]"#,
        )
        .unwrap();
        let columns = vec!["name".to_string()];
        let json = output_calls_json(
            &calls,
            &store(),
            &columns,
            SortOrder::Desc,
            now(),
            Timezone::Named(chrono_tz::UTC),
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "SC-2");
        assert_eq!(parsed[1]["name"], "SC-1");
    }

    #[test]
    fn contacts_json_sorted_by_id() {
        let store = ContactStore::new(vec![
            Contact {
                name: "CONT-2".to_string(),
                ..Contact::default()
            },
            Contact {
                name: "CONT-1".to_string(),
                ..Contact::default()
            },
        ]);
        let json = output_contacts_json(&store);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "CONT-1");
        assert_eq!(parsed[1]["name"], "CONT-2");
    }
}
