//! Fixed asset domain models.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::fixed_assets_constants::*;
use super::fixed_assets_errors::{FixedAssetDateError, PlanComputationErrors, PlanFailure};
use crate::constants::MONTHS_PER_YEAR;
use crate::utils::time_utils::{end_of_calendar_year, end_of_fiscal_year, end_of_month};
use crate::{errors::ValidationError, Error, Result};

/// Granularity of a depreciation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodicityType {
    Monthly,
    Yearly,
}

impl PeriodicityType {
    /// Returns the stored periodicity code (months per period).
    pub fn code(&self) -> i32 {
        match self {
            PeriodicityType::Monthly => PERIODICITY_TYPE_MONTH,
            PeriodicityType::Yearly => PERIODICITY_TYPE_YEAR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodicityType::Monthly => "MONTHLY",
            PeriodicityType::Yearly => "YEARLY",
        }
    }

    /// Returns the last day of the period of this type that contains `date`.
    ///
    /// Monthly periods end on the last day of the month. Yearly periods end on
    /// December 31, or on the last day of the fiscal year when
    /// `fiscal_year_start_month` is given.
    pub fn last_day_of_period(
        &self,
        date: NaiveDate,
        fiscal_year_start_month: Option<u32>,
    ) -> std::result::Result<NaiveDate, FixedAssetDateError> {
        if let Some(month) = fiscal_year_start_month {
            if !(1..=MONTHS_PER_YEAR).contains(&month) {
                return Err(FixedAssetDateError::InvalidFiscalYearStartMonth(month));
            }
        }

        let last_day = match (self, fiscal_year_start_month) {
            (PeriodicityType::Monthly, _) => end_of_month(date),
            (PeriodicityType::Yearly, Some(month)) => end_of_fiscal_year(date, month),
            (PeriodicityType::Yearly, None) => end_of_calendar_year(date),
        };
        last_day.ok_or(FixedAssetDateError::DateOutOfRange(date))
    }
}

impl TryFrom<i32> for PeriodicityType {
    type Error = FixedAssetDateError;

    fn try_from(code: i32) -> std::result::Result<Self, Self::Error> {
        match code {
            PERIODICITY_TYPE_MONTH => Ok(PeriodicityType::Monthly),
            PERIODICITY_TYPE_YEAR => Ok(PeriodicityType::Yearly),
            other => Err(FixedAssetDateError::InvalidPeriodicity(other)),
        }
    }
}

impl fmt::Display for PeriodicityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Depreciation regimes an asset can run in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepreciationPlan {
    /// Management / book plan
    Economic,
    /// Tax plan
    Fiscal,
    Ifrs,
}

impl DepreciationPlan {
    pub const ALL: [DepreciationPlan; 3] = [
        DepreciationPlan::Economic,
        DepreciationPlan::Fiscal,
        DepreciationPlan::Ifrs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepreciationPlan::Economic => depreciation_plans::ECONOMIC,
            DepreciationPlan::Fiscal => depreciation_plans::FISCAL,
            DepreciationPlan::Ifrs => depreciation_plans::IFRS,
        }
    }
}

impl fmt::Display for DepreciationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DepreciationPlan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            depreciation_plans::ECONOMIC => Ok(DepreciationPlan::Economic),
            depreciation_plans::FISCAL => Ok(DepreciationPlan::Fiscal),
            depreciation_plans::IFRS => Ok(DepreciationPlan::Ifrs),
            other => Err(format!("Unknown depreciation plan: {}", other)),
        }
    }
}

/// Parses a comma-separated plan selection such as `"ECONOMIC,IFRS"`.
///
/// Empty segments are ignored, so an empty string selects no plan.
pub fn parse_depreciation_plan_select(select: &str) -> Result<BTreeSet<DepreciationPlan>> {
    select
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            segment
                .parse::<DepreciationPlan>()
                .map_err(|e| Error::Validation(ValidationError::InvalidInput(e)))
        })
        .collect()
}

/// Which asset date anchors a plan's first depreciation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FirstDepreciationDateInit {
    #[default]
    AcquisitionDate,
    FirstServiceDate,
}

/// A date field of the asset used as the starting point of a derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateAnchor {
    AcquisitionDate,
    FirstServiceDate,
    IfrsStartDate,
}

impl DateAnchor {
    pub fn label(&self) -> &'static str {
        match self {
            DateAnchor::AcquisitionDate => "acquisition date",
            DateAnchor::FirstServiceDate => "first service date",
            DateAnchor::IfrsStartDate => "IFRS start date",
        }
    }
}

impl fmt::Display for DateAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<FirstDepreciationDateInit> for DateAnchor {
    fn from(init: FirstDepreciationDateInit) -> Self {
        match init {
            FirstDepreciationDateInit::AcquisitionDate => DateAnchor::AcquisitionDate,
            FirstDepreciationDateInit::FirstServiceDate => DateAnchor::FirstServiceDate,
        }
    }
}

/// Lifecycle status of a fixed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedAssetStatus {
    /// Dates may still be recomputed
    #[default]
    Draft,
    /// Depreciation schedule is locked
    Validated,
    Disposed,
}

/// Domain model representing a fixed asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    /// Sequence-assigned reference, set by the caller
    pub reference: Option<String>,
    pub status: FixedAssetStatus,
    pub acquisition_date: Option<NaiveDate>,
    pub first_service_date: Option<NaiveDate>,
    #[serde(default)]
    pub first_depreciation_date_init_select: FirstDepreciationDateInit,
    #[serde(default)]
    pub fiscal_first_depreciation_date_init_select: FirstDepreciationDateInit,
    pub periodicity_type_economic: Option<i32>,
    pub periodicity_type_fiscal: Option<i32>,
    /// Dedicated IFRS periodicity. Falls back to the economic one when absent.
    pub periodicity_type_ifrs: Option<i32>,
    #[serde(default)]
    pub depreciation_plan_select: BTreeSet<DepreciationPlan>,
    /// First month (1-12) of the fiscal year used by the fiscal plan
    pub fiscal_year_start_month_override: Option<u32>,
    pub ifrs_start_date: Option<NaiveDate>,
    pub prorata_temporis: bool,
    pub first_depreciation_date_economic: Option<NaiveDate>,
    pub first_depreciation_date_fiscal: Option<NaiveDate>,
    pub first_depreciation_date_ifrs: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FixedAsset {
    /// Returns true if the plan is part of the asset's plan selection.
    pub fn has_plan(&self, plan: DepreciationPlan) -> bool {
        self.depreciation_plan_select.contains(&plan)
    }

    pub fn first_depreciation_date(&self, plan: DepreciationPlan) -> Option<NaiveDate> {
        match plan {
            DepreciationPlan::Economic => self.first_depreciation_date_economic,
            DepreciationPlan::Fiscal => self.first_depreciation_date_fiscal,
            DepreciationPlan::Ifrs => self.first_depreciation_date_ifrs,
        }
    }

    pub(crate) fn set_first_depreciation_date(
        &mut self,
        plan: DepreciationPlan,
        date: Option<NaiveDate>,
    ) {
        match plan {
            DepreciationPlan::Economic => self.first_depreciation_date_economic = date,
            DepreciationPlan::Fiscal => self.first_depreciation_date_fiscal = date,
            DepreciationPlan::Ifrs => self.first_depreciation_date_ifrs = date,
        }
    }

    /// Returns true while the first depreciation dates may be recomputed.
    pub fn is_draft(&self) -> bool {
        self.status == FixedAssetStatus::Draft
    }
}

/// Input model for creating a new fixed asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub reference: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub first_service_date: Option<NaiveDate>,
    #[serde(default)]
    pub first_depreciation_date_init_select: FirstDepreciationDateInit,
    #[serde(default)]
    pub fiscal_first_depreciation_date_init_select: FirstDepreciationDateInit,
    pub periodicity_type_economic: Option<i32>,
    pub periodicity_type_fiscal: Option<i32>,
    pub periodicity_type_ifrs: Option<i32>,
    #[serde(default)]
    pub depreciation_plan_select: BTreeSet<DepreciationPlan>,
    pub fiscal_year_start_month_override: Option<u32>,
    pub ifrs_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub prorata_temporis: bool,
}

impl NewFixedAsset {
    /// Validates the new fixed asset data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Fixed asset name cannot be empty".to_string(),
            )));
        }
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Fixed asset ID cannot be blank".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Builds a draft asset with no computed dates.
    pub fn into_fixed_asset(self, id: String, now: NaiveDateTime) -> FixedAsset {
        FixedAsset {
            id,
            name: self.name,
            reference: self.reference,
            status: FixedAssetStatus::Draft,
            acquisition_date: self.acquisition_date,
            first_service_date: self.first_service_date,
            first_depreciation_date_init_select: self.first_depreciation_date_init_select,
            fiscal_first_depreciation_date_init_select: self
                .fiscal_first_depreciation_date_init_select,
            periodicity_type_economic: self.periodicity_type_economic,
            periodicity_type_fiscal: self.periodicity_type_fiscal,
            periodicity_type_ifrs: self.periodicity_type_ifrs,
            depreciation_plan_select: self.depreciation_plan_select,
            fiscal_year_start_month_override: self.fiscal_year_start_month_override,
            ifrs_start_date: self.ifrs_start_date,
            prorata_temporis: self.prorata_temporis,
            first_depreciation_date_economic: None,
            first_depreciation_date_fiscal: None,
            first_depreciation_date_ifrs: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of one plan's derivation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The plan is not selected; its date field was left empty
    NotSelected,
    Computed(NaiveDate),
    Failed(FixedAssetDateError),
}

impl PlanOutcome {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            PlanOutcome::Computed(date) => Some(*date),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FixedAssetDateError> {
        match self {
            PlanOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PlanOutcome::Failed(_))
    }
}

impl From<std::result::Result<Option<NaiveDate>, FixedAssetDateError>> for PlanOutcome {
    fn from(result: std::result::Result<Option<NaiveDate>, FixedAssetDateError>) -> Self {
        match result {
            Ok(Some(date)) => PlanOutcome::Computed(date),
            Ok(None) => PlanOutcome::NotSelected,
            Err(err) => PlanOutcome::Failed(err),
        }
    }
}

/// Per-plan outcome of a full first depreciation date computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstDepreciationDateReport {
    pub economic: PlanOutcome,
    pub fiscal: PlanOutcome,
    pub ifrs: PlanOutcome,
}

impl FirstDepreciationDateReport {
    pub fn outcome(&self, plan: DepreciationPlan) -> &PlanOutcome {
        match plan {
            DepreciationPlan::Economic => &self.economic,
            DepreciationPlan::Fiscal => &self.fiscal,
            DepreciationPlan::Ifrs => &self.ifrs,
        }
    }

    /// Returns true if no selected plan failed.
    pub fn is_success(&self) -> bool {
        DepreciationPlan::ALL
            .iter()
            .all(|plan| !self.outcome(*plan).is_failed())
    }

    /// Lists every failed plan, in economic, fiscal, IFRS order.
    pub fn failures(&self) -> Vec<PlanFailure> {
        DepreciationPlan::ALL
            .iter()
            .filter_map(|plan| {
                self.outcome(*plan).error().map(|error| PlanFailure {
                    plan: *plan,
                    error: error.clone(),
                })
            })
            .collect()
    }

    /// Converts the report into an error carrying all failed plans, if any.
    pub fn into_result(self) -> std::result::Result<(), PlanComputationErrors> {
        let failures = self.failures();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(PlanComputationErrors { failures })
        }
    }
}
