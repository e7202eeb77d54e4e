use chrono::{DateTime, Utc};

use crate::cli::{Cli, Commands};
use crate::data::{LoadedData, ScheduledCall};
use crate::output::{
    CallTableOptions, output_calls_json, output_contacts_json, print_calls_table,
    print_contacts_table,
};
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
    pub(crate) now: DateTime<Utc>,
}

/// A call still worth dialing: anything not already closed out.
fn awaiting_call(call: &ScheduledCall) -> bool {
    !matches!(call.status.as_deref(), Some("Completed") | Some("Cancelled"))
}

fn handle_calls(data: &LoadedData, ctx: &CommandContext<'_>, today_only: bool) {
    let calls: Vec<ScheduledCall> = if today_only {
        data.calls
            .iter()
            .filter(|c| awaiting_call(c))
            .cloned()
            .collect()
    } else {
        data.calls.clone()
    };

    if calls.is_empty() {
        println!("No scheduled calls found.");
        return;
    }

    let columns = ctx.cli.column_keys();
    if ctx.cli.json {
        let json = output_calls_json(
            &calls,
            &data.contacts,
            &columns,
            ctx.cli.order,
            ctx.now,
            ctx.timezone,
        );
        println!("{json}");
    } else {
        print_calls_table(
            &calls,
            &data.contacts,
            &columns,
            data.skipped,
            CallTableOptions {
                order: ctx.cli.order,
                use_color: ctx.cli.use_color(),
                compact: ctx.cli.compact,
                now: ctx.now,
                timezone: ctx.timezone,
            },
        );
    }
}

fn handle_contacts(data: &LoadedData, ctx: &CommandContext<'_>) {
    if data.contacts.is_empty() {
        println!("No contacts found.");
        return;
    }
    if ctx.cli.json {
        println!("{}", output_contacts_json(&data.contacts));
    } else {
        print_contacts_table(&data.contacts, ctx.cli.use_color());
    }
}

pub(crate) fn run(data: &LoadedData, ctx: &CommandContext<'_>) {
    match ctx.cli.command {
        Some(Commands::Contacts) => handle_contacts(data, ctx),
        Some(Commands::Today) => handle_calls(data, ctx, true),
        Some(Commands::List) | None => handle_calls(data, ctx, false),
    }
}
