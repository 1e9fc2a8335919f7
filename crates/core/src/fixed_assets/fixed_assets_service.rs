use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::fixed_asset_date_service::FixedAssetDateService;
use super::fixed_assets_config::DepreciationConfig;
use super::fixed_assets_model::{
    FirstDepreciationDateReport, FixedAsset, FixedAssetStatus, NewFixedAsset,
};
use super::fixed_assets_traits::{
    FixedAssetDateServiceTrait, FixedAssetRepositoryTrait, FixedAssetServiceTrait,
};
use crate::errors::{Error, Result};

/// Service for creating fixed assets and maintaining their first depreciation dates.
pub struct FixedAssetService {
    repository: Arc<dyn FixedAssetRepositoryTrait>,
    config: RwLock<DepreciationConfig>,
}

impl FixedAssetService {
    /// Creates a new FixedAssetService with the default configuration.
    pub fn new(repository: Arc<dyn FixedAssetRepositoryTrait>) -> Self {
        Self {
            repository,
            config: RwLock::new(DepreciationConfig::default()),
        }
    }

    /// Creates a FixedAssetService with a custom configuration.
    pub fn with_config(
        repository: Arc<dyn FixedAssetRepositoryTrait>,
        config: DepreciationConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            config: RwLock::new(config),
        })
    }

    async fn calculator(&self) -> Result<FixedAssetDateService> {
        let config = self.config.read().await.clone();
        FixedAssetDateService::with_config(config)
    }

    fn ensure_draft(fixed_asset: &FixedAsset) -> Result<()> {
        if !fixed_asset.is_draft() {
            return Err(Error::ConstraintViolation(format!(
                "Fixed asset {} is {:?}; its depreciation dates are locked",
                fixed_asset.id, fixed_asset.status
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl FixedAssetServiceTrait for FixedAssetService {
    async fn create_fixed_asset(&self, new_fixed_asset: NewFixedAsset) -> Result<FixedAsset> {
        new_fixed_asset.validate()?;

        let id = new_fixed_asset
            .id
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        let mut fixed_asset = new_fixed_asset.into_fixed_asset(id, Utc::now().naive_utc());

        let calculator = self.calculator().await?;
        calculator
            .compute_first_depreciation_date(&mut fixed_asset)
            .into_result()?;

        debug!("Persisting new fixed asset {}", fixed_asset.id);
        let created = self.repository.create(fixed_asset).await?;
        info!("Created fixed asset {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn recompute_first_depreciation_dates(
        &self,
        fixed_asset_id: &str,
    ) -> Result<FirstDepreciationDateReport> {
        let mut fixed_asset = self.repository.get_by_id(fixed_asset_id)?;
        Self::ensure_draft(&fixed_asset)?;

        let calculator = self.calculator().await?;
        let report = calculator.compute_first_depreciation_date(&mut fixed_asset);

        // Failed plans are stored as empty dates, never as stale ones
        fixed_asset.updated_at = Utc::now().naive_utc();
        self.repository.update(fixed_asset).await?;

        info!(
            "Recomputed first depreciation dates for fixed asset {} ({} failed plan(s))",
            fixed_asset_id,
            report.failures().len()
        );
        Ok(report)
    }

    async fn validate_fixed_asset(&self, fixed_asset_id: &str) -> Result<FixedAsset> {
        let mut fixed_asset = self.repository.get_by_id(fixed_asset_id)?;
        Self::ensure_draft(&fixed_asset)?;

        let calculator = self.calculator().await?;
        calculator
            .compute_first_depreciation_date(&mut fixed_asset)
            .into_result()?;

        fixed_asset.status = FixedAssetStatus::Validated;
        fixed_asset.updated_at = Utc::now().naive_utc();
        let validated = self.repository.update(fixed_asset).await?;
        info!("Validated fixed asset {}", validated.id);
        Ok(validated)
    }

    fn get_fixed_asset(&self, fixed_asset_id: &str) -> Result<FixedAsset> {
        self.repository.get_by_id(fixed_asset_id)
    }

    async fn get_config(&self) -> DepreciationConfig {
        self.config.read().await.clone()
    }

    async fn update_config(&self, config: DepreciationConfig) -> Result<()> {
        config.validate()?;
        debug!("Updating depreciation config: {:?}", config);
        *self.config.write().await = config;
        Ok(())
    }
}
