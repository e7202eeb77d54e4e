/// Standard date format for since/until filters: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tooltip-style absolute date format: "Tue, Jan 14, 2025 3:04 pm"
pub(crate) const DATE_TOOLTIP_FORMAT: &str = "%a, %b %-d, %Y %-I:%M %P";

/// Fallback label when a call's contact is missing or unknown
pub(crate) const UNKNOWN_CONTACT: &str = "Unknown";

/// Fallback status label when a call carries no status
pub(crate) const DEFAULT_STATUS: &str = "Pending";

/// Columns rendered when neither CLI nor config selects any
pub(crate) const DEFAULT_COLUMNS: [&str; 3] = ["contact", "date", "status"];
