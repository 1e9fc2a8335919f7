//! Fixed assets module - domain models, first depreciation date calculator,
//! lifecycle service, and traits.

mod fixed_asset_date_service;
mod fixed_assets_config;
mod fixed_assets_constants;
mod fixed_assets_errors;
mod fixed_assets_model;
mod fixed_assets_service;
mod fixed_assets_traits;




pub use fixed_asset_date_service::FixedAssetDateService;
pub use fixed_assets_config::DepreciationConfig;
pub use fixed_assets_constants::*;
pub use fixed_assets_errors::{FixedAssetDateError, PlanComputationErrors, PlanFailure};
pub use fixed_assets_model::{
    parse_depreciation_plan_select, DateAnchor, DepreciationPlan, FirstDepreciationDateInit,
    FirstDepreciationDateReport, FixedAsset, FixedAssetStatus, NewFixedAsset, PeriodicityType,
    PlanOutcome,
};
pub use fixed_assets_service::FixedAssetService;
pub use fixed_assets_traits::{
    FixedAssetDateServiceTrait, FixedAssetRepositoryTrait, FixedAssetServiceTrait,
};
