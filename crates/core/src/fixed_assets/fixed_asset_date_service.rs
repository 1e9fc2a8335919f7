//! First depreciation date calculator.
//!
//! The three plans share one derivation routine parameterized by the plan's
//! periodicity, anchor date and fiscal-year boundary.

use chrono::NaiveDate;
use log::{debug, warn};

use super::fixed_assets_config::DepreciationConfig;
use super::fixed_assets_errors::FixedAssetDateError;
use super::fixed_assets_model::{
    DateAnchor, DepreciationPlan, FirstDepreciationDateReport, FixedAsset, PeriodicityType,
    PlanOutcome,
};
use super::fixed_assets_traits::FixedAssetDateServiceTrait;
use crate::errors::Result;

type DateResult<T> = std::result::Result<T, FixedAssetDateError>;

/// Inputs of a single plan derivation, read from the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlanParameters {
    plan: DepreciationPlan,
    periodicity_type: Option<i32>,
    anchor: DateAnchor,
    anchor_date: Option<NaiveDate>,
    acquisition_date: Option<NaiveDate>,
    /// `None` means yearly periods follow the calendar year
    fiscal_year_start_month: Option<u32>,
    prorata_temporis: bool,
}

impl PlanParameters {
    fn economic(fixed_asset: &FixedAsset) -> Self {
        let anchor = DateAnchor::from(fixed_asset.first_depreciation_date_init_select);
        Self {
            plan: DepreciationPlan::Economic,
            periodicity_type: fixed_asset.periodicity_type_economic,
            anchor,
            anchor_date: anchor_date_of(fixed_asset, anchor),
            acquisition_date: fixed_asset.acquisition_date,
            fiscal_year_start_month: None,
            prorata_temporis: fixed_asset.prorata_temporis,
        }
    }

    fn fiscal(fixed_asset: &FixedAsset, config: &DepreciationConfig) -> Self {
        let anchor = DateAnchor::from(fixed_asset.fiscal_first_depreciation_date_init_select);
        Self {
            plan: DepreciationPlan::Fiscal,
            periodicity_type: fixed_asset.periodicity_type_fiscal,
            anchor,
            anchor_date: anchor_date_of(fixed_asset, anchor),
            acquisition_date: fixed_asset.acquisition_date,
            fiscal_year_start_month: Some(
                fixed_asset
                    .fiscal_year_start_month_override
                    .unwrap_or(config.fiscal_year_start_month),
            ),
            prorata_temporis: fixed_asset.prorata_temporis,
        }
    }

    fn ifrs(fixed_asset: &FixedAsset) -> Self {
        let anchor = if fixed_asset.ifrs_start_date.is_some() {
            DateAnchor::IfrsStartDate
        } else {
            DateAnchor::AcquisitionDate
        };
        Self {
            plan: DepreciationPlan::Ifrs,
            periodicity_type: fixed_asset
                .periodicity_type_ifrs
                .or(fixed_asset.periodicity_type_economic),
            anchor,
            anchor_date: anchor_date_of(fixed_asset, anchor),
            acquisition_date: fixed_asset.acquisition_date,
            fiscal_year_start_month: None,
            prorata_temporis: fixed_asset.prorata_temporis,
        }
    }

    /// True when both derivations cut periods at the same boundaries from the
    /// same starting date.
    fn shares_boundaries_with(&self, other: &PlanParameters) -> bool {
        if self.periodicity_type.is_none()
            || self.periodicity_type != other.periodicity_type
            || self.anchor_date != other.anchor_date
            || self.prorata_temporis != other.prorata_temporis
        {
            return false;
        }
        let calendar_year = |month: Option<u32>| matches!(month, None | Some(1));
        self.periodicity_type == Some(PeriodicityType::Monthly.code())
            || (calendar_year(self.fiscal_year_start_month)
                && calendar_year(other.fiscal_year_start_month))
    }
}

fn anchor_date_of(fixed_asset: &FixedAsset, anchor: DateAnchor) -> Option<NaiveDate> {
    match anchor {
        DateAnchor::AcquisitionDate => fixed_asset.acquisition_date,
        DateAnchor::FirstServiceDate => fixed_asset.first_service_date,
        DateAnchor::IfrsStartDate => fixed_asset.ifrs_start_date,
    }
}

/// Derives a first depreciation date from plan parameters.
///
/// With prorata temporis the schedule starts on the anchor date itself,
/// otherwise on the last day of the period containing it.
fn derive_first_depreciation_date(params: &PlanParameters) -> DateResult<NaiveDate> {
    let code = params
        .periodicity_type
        .ok_or(FixedAssetDateError::MissingPeriodicity { plan: params.plan })?;
    let periodicity = PeriodicityType::try_from(code)?;

    let acquisition_date = params.acquisition_date.ok_or_else(|| {
        FixedAssetDateError::missing_anchor(params.plan, DateAnchor::AcquisitionDate)
    })?;
    let anchor_date = params
        .anchor_date
        .ok_or_else(|| FixedAssetDateError::missing_anchor(params.plan, params.anchor))?;

    if anchor_date < acquisition_date {
        return Err(FixedAssetDateError::AnchorBeforeAcquisition {
            plan: params.plan,
            anchor: params.anchor,
            date: anchor_date,
            acquisition_date,
        });
    }

    if params.prorata_temporis {
        return Ok(anchor_date);
    }
    periodicity.last_day_of_period(anchor_date, params.fiscal_year_start_month)
}

/// Stateless calculator for first depreciation dates.
#[derive(Debug, Clone, Default)]
pub struct FixedAssetDateService {
    config: DepreciationConfig,
}

impl FixedAssetDateService {
    /// Creates a calculator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a custom configuration.
    pub fn with_config(config: DepreciationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DepreciationConfig {
        &self.config
    }

    /// Runs one plan derivation and writes the result to the plan's field.
    ///
    /// Unselected plans have their field cleared. A failure also clears it.
    fn apply_plan<F>(
        &self,
        fixed_asset: &mut FixedAsset,
        plan: DepreciationPlan,
        derive: F,
    ) -> DateResult<Option<NaiveDate>>
    where
        F: FnOnce(&FixedAsset) -> DateResult<NaiveDate>,
    {
        if !fixed_asset.has_plan(plan) {
            if fixed_asset.first_depreciation_date(plan).is_some() {
                debug!(
                    "Clearing {} first depreciation date of unselected plan on asset {}",
                    plan, fixed_asset.id
                );
            }
            fixed_asset.set_first_depreciation_date(plan, None);
            return Ok(None);
        }

        match derive(&*fixed_asset) {
            Ok(date) => {
                debug!(
                    "Asset {}: {} first depreciation date = {}",
                    fixed_asset.id, plan, date
                );
                fixed_asset.set_first_depreciation_date(plan, Some(date));
                Ok(Some(date))
            }
            Err(err) => {
                fixed_asset.set_first_depreciation_date(plan, None);
                Err(err)
            }
        }
    }
}

impl FixedAssetDateServiceTrait for FixedAssetDateService {
    fn compute_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> FirstDepreciationDateReport {
        debug!("Computing first depreciation dates for asset {}", fixed_asset.id);

        let economic = PlanOutcome::from(self.compute_economic_first_depreciation_date(fixed_asset));
        let fiscal = PlanOutcome::from(self.compute_fiscal_first_depreciation_date(fixed_asset));
        let ifrs = PlanOutcome::from(self.compute_ifrs_first_depreciation_date(fixed_asset));

        let report = FirstDepreciationDateReport {
            economic,
            fiscal,
            ifrs,
        };
        for failure in report.failures() {
            warn!(
                "Asset {}: {} first depreciation date not computed: {}",
                fixed_asset.id, failure.plan, failure.error
            );
        }
        report
    }

    fn compute_economic_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> DateResult<Option<NaiveDate>> {
        self.apply_plan(fixed_asset, DepreciationPlan::Economic, |asset| {
            derive_first_depreciation_date(&PlanParameters::economic(asset))
        })
    }

    fn compute_fiscal_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> DateResult<Option<NaiveDate>> {
        let cross_check = self.config.cross_check_fiscal;
        self.apply_plan(fixed_asset, DepreciationPlan::Fiscal, |asset| {
            let params = PlanParameters::fiscal(asset, &self.config);
            let fiscal = derive_first_depreciation_date(&params)?;

            if !cross_check || !asset.has_plan(DepreciationPlan::Economic) {
                return Ok(fiscal);
            }
            let economic_params = PlanParameters::economic(asset);
            if !params.shares_boundaries_with(&economic_params) {
                return Ok(fiscal);
            }
            // Compared against a fresh economic derivation, never the stored field.
            // A failing economic plan reports its own error.
            let Ok(economic) = derive_first_depreciation_date(&economic_params) else {
                return Ok(fiscal);
            };
            if economic != fiscal {
                return Err(FixedAssetDateError::InconsistentPlanConfiguration {
                    economic,
                    fiscal,
                });
            }
            Ok(fiscal)
        })
    }

    fn compute_ifrs_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> DateResult<Option<NaiveDate>> {
        self.apply_plan(fixed_asset, DepreciationPlan::Ifrs, |asset| {
            derive_first_depreciation_date(&PlanParameters::ifrs(asset))
        })
    }

    fn compute_last_day_of_periodicity(
        &self,
        periodicity_type: i32,
        date: NaiveDate,
    ) -> DateResult<NaiveDate> {
        PeriodicityType::try_from(periodicity_type)?.last_day_of_period(date, None)
    }
}
