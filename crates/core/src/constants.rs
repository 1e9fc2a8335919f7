/// Number of months in a (fiscal or calendar) year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Fiscal year start month used when no company or asset setting exists.
/// January means the fiscal year is the calendar year.
pub const DEFAULT_FISCAL_YEAR_START_MONTH: u32 = 1;
