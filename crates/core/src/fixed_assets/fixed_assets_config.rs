//! Company-level configuration for first depreciation date computation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FISCAL_YEAR_START_MONTH, MONTHS_PER_YEAR};
use crate::{Error, Result};

/// Configuration shared by every asset the calculator processes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DepreciationConfig {
    /// First month of the company fiscal year, used by the fiscal plan when the
    /// asset carries no override (default: 1 = calendar year)
    pub fiscal_year_start_month: u32,

    /// Check fiscal dates against economic dates when both plans share their
    /// configuration (default: true)
    pub cross_check_fiscal: bool,
}

impl Default for DepreciationConfig {
    fn default() -> Self {
        Self {
            fiscal_year_start_month: DEFAULT_FISCAL_YEAR_START_MONTH,
            cross_check_fiscal: true,
        }
    }
}

impl DepreciationConfig {
    /// Parses a configuration from JSON. Missing keys take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DepreciationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MONTHS_PER_YEAR).contains(&self.fiscal_year_start_month) {
            return Err(Error::InvalidConfigValue(format!(
                "fiscalYearStartMonth must be between 1 and 12, got {}",
                self.fiscal_year_start_month
            )));
        }
        Ok(())
    }
}
