/// Currency selected in the "from" picker on first launch
pub const DEFAULT_FROM_CURRENCY: &str = "USD";

/// Currency selected in the "to" picker on first launch
pub const DEFAULT_TO_CURRENCY: &str = "EUR";
