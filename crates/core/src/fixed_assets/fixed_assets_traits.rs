//! Fixed asset repository and service traits.
//!
//! These traits define the contract for fixed asset operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::fixed_assets_config::DepreciationConfig;
use super::fixed_assets_errors::FixedAssetDateError;
use super::fixed_assets_model::{FirstDepreciationDateReport, FixedAsset, NewFixedAsset};
use crate::errors::Result;

/// Trait defining the contract for the first depreciation date calculator.
///
/// Every plan-specific operation is a no-op returning `Ok(None)` when the plan
/// is not selected on the asset. A failed plan leaves its date field empty.
pub trait FixedAssetDateServiceTrait: Send + Sync {
    /// Computes the economic, fiscal and IFRS first depreciation dates.
    ///
    /// All three plans are attempted even when one fails.
    fn compute_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> FirstDepreciationDateReport;

    /// Computes the first depreciation date of the economic plan.
    fn compute_economic_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> std::result::Result<Option<NaiveDate>, FixedAssetDateError>;

    /// Computes the first depreciation date of the fiscal plan.
    fn compute_fiscal_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> std::result::Result<Option<NaiveDate>, FixedAssetDateError>;

    /// Computes the first depreciation date of the IFRS plan.
    fn compute_ifrs_first_depreciation_date(
        &self,
        fixed_asset: &mut FixedAsset,
    ) -> std::result::Result<Option<NaiveDate>, FixedAssetDateError>;

    /// Returns the last day of the month or calendar year containing `date`,
    /// depending on the periodicity code.
    fn compute_last_day_of_periodicity(
        &self,
        periodicity_type: i32,
        date: NaiveDate,
    ) -> std::result::Result<NaiveDate, FixedAssetDateError>;
}

/// Trait defining the contract for FixedAsset repository operations.
///
/// Implementations handle persistence and their own transaction management.
#[async_trait]
pub trait FixedAssetRepositoryTrait: Send + Sync {
    /// Inserts a new fixed asset.
    async fn create(&self, fixed_asset: FixedAsset) -> Result<FixedAsset>;

    /// Replaces a stored fixed asset.
    async fn update(&self, fixed_asset: FixedAsset) -> Result<FixedAsset>;

    /// Retrieves a fixed asset by its ID.
    fn get_by_id(&self, fixed_asset_id: &str) -> Result<FixedAsset>;
}

/// Trait defining the contract for fixed asset lifecycle operations.
#[async_trait]
pub trait FixedAssetServiceTrait: Send + Sync {
    /// Creates a draft asset with its first depreciation dates computed.
    ///
    /// Nothing is persisted when any selected plan fails.
    async fn create_fixed_asset(&self, new_fixed_asset: NewFixedAsset) -> Result<FixedAsset>;

    /// Recomputes and persists the first depreciation dates of a draft asset.
    async fn recompute_first_depreciation_dates(
        &self,
        fixed_asset_id: &str,
    ) -> Result<FirstDepreciationDateReport>;

    /// Locks the depreciation schedule of a draft asset.
    async fn validate_fixed_asset(&self, fixed_asset_id: &str) -> Result<FixedAsset>;

    /// Retrieves a fixed asset by ID.
    fn get_fixed_asset(&self, fixed_asset_id: &str) -> Result<FixedAsset>;

    /// Returns the current configuration.
    async fn get_config(&self) -> DepreciationConfig;

    /// Replaces the configuration used for subsequent computations.
    async fn update_config(&self, config: DepreciationConfig) -> Result<()>;
}
