/// Length of the default history window, today included.
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

/// ISO date format used for every date string in the dashboard.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Message shown when the latest rates table cannot be loaded.
pub const RATES_ERROR_MESSAGE: &str = "Unable to load the latest rates. Please try again later.";

/// Message shown when the historical series cannot be loaded.
pub const SERIES_ERROR_MESSAGE: &str = "Historical data is currently unavailable.";

/// Chart label used when no currency is selected.
pub const DEFAULT_SERIES_LABEL: &str = "FX Rate";
