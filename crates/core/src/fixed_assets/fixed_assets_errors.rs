//! First depreciation date error types.
//!
//! Each plan derivation fails with a [`FixedAssetDateError`]. The orchestrating
//! computation gathers per-plan failures into [`PlanComputationErrors`] so that
//! one failing plan never hides another.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::fixed_assets_model::{DateAnchor, DepreciationPlan};

/// Errors raised while deriving a plan's first depreciation date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedAssetDateError {
    /// Periodicity code outside the recognized set (monthly, yearly).
    #[error("Invalid periodicity type: {0}")]
    InvalidPeriodicity(i32),

    /// The plan is selected but no periodicity is configured for it.
    #[error("No periodicity type configured for the {plan} plan")]
    MissingPeriodicity { plan: DepreciationPlan },

    /// The date the plan is anchored on is absent.
    #[error("Missing {anchor} required by the {plan} plan")]
    MissingAnchorDate {
        plan: DepreciationPlan,
        anchor: DateAnchor,
    },

    /// The anchor lies before the acquisition date.
    #[error("The {anchor} {date} of the {plan} plan is before the acquisition date {acquisition_date}")]
    AnchorBeforeAcquisition {
        plan: DepreciationPlan,
        anchor: DateAnchor,
        date: NaiveDate,
        acquisition_date: NaiveDate,
    },

    #[error("Invalid fiscal year start month: {0}")]
    InvalidFiscalYearStartMonth(u32),

    /// Fiscal and economic plans share their configuration but produced different dates.
    #[error("Fiscal first depreciation date {fiscal} differs from economic first depreciation date {economic} under identical periodicity configuration")]
    InconsistentPlanConfiguration {
        economic: NaiveDate,
        fiscal: NaiveDate,
    },

    /// The period boundary falls outside the supported calendar range.
    #[error("Period boundary for {0} is out of the supported date range")]
    DateOutOfRange(NaiveDate),
}

impl FixedAssetDateError {
    /// Creates a MissingAnchorDate error.
    pub fn missing_anchor(plan: DepreciationPlan, anchor: DateAnchor) -> Self {
        Self::MissingAnchorDate { plan, anchor }
    }
}

/// One failed plan and the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFailure {
    pub plan: DepreciationPlan,
    pub error: FixedAssetDateError,
}

impl fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.plan, self.error)
    }
}

/// Aggregate of every plan that failed during one computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} plan(s) failed: {}", .failures.len(), join_failures(.failures))]
pub struct PlanComputationErrors {
    pub failures: Vec<PlanFailure>,
}

impl PlanComputationErrors {
    /// Returns the error recorded for the given plan, if that plan failed.
    pub fn for_plan(&self, plan: DepreciationPlan) -> Option<&FixedAssetDateError> {
        self.failures
            .iter()
            .find(|failure| failure.plan == plan)
            .map(|failure| &failure.error)
    }
}

fn join_failures(failures: &[PlanFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
