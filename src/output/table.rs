use chrono::{DateTime, Utc};
use comfy_table::Cell;

use crate::cli::SortOrder;
use crate::data::{ContactStore, ScheduledCall};
use crate::detail::{RowDetail, call_row_detail};
use crate::output::format::{
    column_title, create_styled_table, header_cell, styled_cell, terminal_color,
};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CallTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) now: DateTime<Utc>,
    pub(crate) timezone: Timezone,
}

fn count_noun(n: i64, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Summary line shown under the calls table.
fn summary_line(shown: usize, skipped: i64) -> String {
    let calls = count_noun(shown as i64, "scheduled call");
    if skipped > 0 {
        format!("{} ({} skipped)", calls, count_noun(skipped, "record"))
    } else {
        calls
    }
}

/// Sort calls by date; undated calls sink to the end in either order.
pub(crate) fn sort_calls(calls: &mut [ScheduledCall], order: SortOrder) {
    calls.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.cmp(&y),
            SortOrder::Desc => y.cmp(&x),
        },
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

fn detail_cell(detail: &RowDetail, opts: &CallTableOptions) -> Cell {
    match detail {
        RowDetail::Status { label, color } => {
            let fg = opts.use_color.then(|| terminal_color(*color));
            styled_cell(label, fg, false)
        }
        RowDetail::Date { label, time_ago } => {
            if opts.compact || time_ago.is_empty() {
                styled_cell(label, None, false)
            } else {
                styled_cell(&format!("{label}\n{time_ago}"), None, false)
            }
        }
        other => styled_cell(&other.label(), None, false),
    }
}

pub(crate) fn print_calls_table(
    calls: &[ScheduledCall],
    contacts: &ContactStore,
    columns: &[String],
    skipped: i64,
    opts: CallTableOptions,
) {
    let mut sorted = calls.to_vec();
    sort_calls(&mut sorted, opts.order);

    let mut table = create_styled_table();
    if opts.use_color {
        table.enforce_styling();
    }
    table.set_header(
        columns
            .iter()
            .map(|key| header_cell(&column_title(key), opts.use_color))
            .collect::<Vec<_>>(),
    );

    for call in &sorted {
        let row: Vec<Cell> = columns
            .iter()
            .map(|key| {
                let detail = call_row_detail(key, call, contacts, opts.now, opts.timezone);
                detail_cell(&detail, &opts)
            })
            .collect();
        table.add_row(row);
    }

    println!("{table}");
    println!("\n  {}\n", summary_line(sorted.len(), skipped));
}

pub(crate) fn print_contacts_table(contacts: &ContactStore, use_color: bool) {
    let mut table = create_styled_table();
    if use_color {
        table.enforce_styling();
    }
    table.set_header(vec![
        header_cell("Id", use_color),
        header_cell("Name", use_color),
        header_cell("Email", use_color),
        header_cell("Mobile", use_color),
    ]);

    for contact in contacts.sorted() {
        table.add_row(vec![
            styled_cell(&contact.name, None, false),
            styled_cell(&contact.display_name().unwrap_or_default(), None, false),
            styled_cell(contact.email_id.as_deref().unwrap_or(""), None, false),
            styled_cell(contact.mobile_no.as_deref().unwrap_or(""), None, false),
        ]);
    }

    println!("{table}");
    println!("\n  {}\n", count_noun(contacts.len() as i64, "contact"));
}
