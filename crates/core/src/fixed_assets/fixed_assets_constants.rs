/// Periodicity codes. The code is the number of months in one depreciation period.
pub const PERIODICITY_TYPE_MONTH: i32 = 1;
pub const PERIODICITY_TYPE_YEAR: i32 = 12;

/// Depreciation plan identifiers
pub mod depreciation_plans {
    pub const ECONOMIC: &str = "ECONOMIC";
    pub const FISCAL: &str = "FISCAL";
    pub const IFRS: &str = "IFRS";
}
