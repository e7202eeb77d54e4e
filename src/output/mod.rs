mod format;
mod json;
mod table;

pub(crate) use json::{output_calls_json, output_contacts_json};
pub(crate) use table::{CallTableOptions, print_calls_table, print_contacts_table};
