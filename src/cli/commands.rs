//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show all scheduled calls (default)
    List,
    /// Show today's calls still awaiting a call
    Today,
    /// Show the contact roster
    Contacts,
}

impl Commands {
    /// Whether this command restricts the view to today's date.
    pub(crate) fn needs_today_filter(&self) -> bool {
        matches!(self, Commands::Today)
    }
}
