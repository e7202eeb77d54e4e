//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};
use crate::consts::DEFAULT_COLUMNS;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ConfigSortOrder> for SortOrder {
    fn from(order: ConfigSortOrder) -> Self {
        match order {
            ConfigSortOrder::Asc => SortOrder::Asc,
            ConfigSortOrder::Desc => SortOrder::Desc,
        }
    }
}

impl From<ConfigColorMode> for ColorMode {
    fn from(color: ConfigColorMode) -> Self {
        match color {
            ConfigColorMode::Auto => ColorMode::Auto,
            ConfigColorMode::Always => ColorMode::Always,
            ConfigColorMode::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser)]
#[command(name = "callsheet")]
#[command(about = "CRM call sheet: scheduled-call tables", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) until: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order by call date
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Compact output (labels only, no relative times)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Timezone for date display (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Comma-separated row keys to render (e.g., "contact,date,status,note")
    #[arg(long, global = true, value_name = "KEYS")]
    pub(crate) columns: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is at default
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = order.into();
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = color.into();
        }

        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.columns.is_none() {
            self.columns = config.columns.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Row keys to render, in order, with the built-in default list.
    pub(crate) fn column_keys(&self) -> Vec<String> {
        match self.columns.as_deref() {
            Some(raw) => {
                let keys: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect();
                if keys.is_empty() {
                    DEFAULT_COLUMNS.iter().map(|k| k.to_string()).collect()
                } else {
                    keys
                }
            }
            None => DEFAULT_COLUMNS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["callsheet"])
    }

    #[test]
    fn column_keys_default() {
        assert_eq!(bare_cli().column_keys(), ["contact", "date", "status"]);
    }

    #[test]
    fn column_keys_parses_list() {
        let cli = Cli::parse_from(["callsheet", "--columns", "contact, note ,status"]);
        assert_eq!(cli.column_keys(), ["contact", "note", "status"]);
    }

    #[test]
    fn column_keys_empty_value_falls_back() {
        let cli = Cli::parse_from(["callsheet", "--columns", " , "]);
        assert_eq!(cli.column_keys(), ["contact", "date", "status"]);
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            compact: true,
            order: Some(ConfigSortOrder::Desc),
            color: Some(ConfigColorMode::Never),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert!(cli.compact);
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn cli_color_beats_config() {
        let config = Config {
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = Cli::parse_from(["callsheet", "--color", "always"]).with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn no_color_forces_plain_output() {
        let cli = Cli::parse_from(["callsheet", "--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }
}
