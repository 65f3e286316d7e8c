//! Migration plan generation
//!
//! `generate_plan` is the local, rule-based planner. The `PlanGenerator`
//! trait lets the HTTP shell swap in the remote planner when configured.

pub mod estimator;
pub mod extractor;
pub mod provider;
pub mod template;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::PlanError;
use estimator::{MigrationEstimate, MigrationEstimator, MigrationRates};
use extractor::InfraResources;

pub use provider::{Provider, ServiceMap};

#[derive(Debug, Clone, Serialize)]
pub struct MigrationPlan {
    pub provider: Provider,
    pub resources: InfraResources,
    pub services: ServiceMap,
    pub estimate: MigrationEstimate,
}

impl MigrationPlan {
    pub fn to_markdown(&self) -> String {
        template::render(self)
    }
}

/// Build a plan for `description` targeting `provider`
pub fn generate_plan(description: &str, provider: Provider) -> Result<MigrationPlan, PlanError> {
    let resources = extractor::extract(description);
    tracing::debug!(
        "Extracted for {}: {} VMs, {} databases, {} {}",
        provider,
        resources.vm_count,
        resources.db_count,
        resources.storage_amount,
        resources.storage_unit
    );

    if resources.is_empty() {
        return Err(PlanError::NoResources);
    }

    let estimate = MigrationEstimator::new(MigrationRates::default()).estimate(&resources);

    Ok(MigrationPlan {
        provider,
        resources,
        services: provider.services(),
        estimate,
    })
}

pub fn download_file_name(provider: Provider) -> String {
    format!("migration_plan_{}.md", provider)
}

/// Something that turns a description into plan Markdown
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, description: &str, provider: Provider) -> Result<String, PlanError>;

    fn name(&self) -> &'static str;
}

pub struct LocalPlanner;

#[async_trait]
impl PlanGenerator for LocalPlanner {
    async fn generate(&self, description: &str, provider: Provider) -> Result<String, PlanError> {
        generate_plan(description, provider).map(|plan| plan.to_markdown())
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extractor::StorageUnit;

    #[test]
    fn test_generate_reference_plan() {
        let plan = generate_plan("10 VMs, 2 databases, 5TB storage", Provider::Aws).unwrap();
        assert_eq!(plan.resources.vm_count, 10);
        assert_eq!(plan.resources.db_count, 2);
        assert_eq!(plan.resources.storage_amount, 5);
        assert_eq!(plan.resources.storage_unit, StorageUnit::Tb);
        assert_eq!(plan.estimate.monthly_cents, 2100_00);
        assert_eq!(plan.estimate.timeline_months, 1);
        assert_eq!(plan.services.vm, "EC2");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            generate_plan("nothing to see here", Provider::Aws),
            Err(PlanError::NoResources)
        ));
        let err = generate_plan("no numbers at all", Provider::Azure).unwrap_err();
        assert!(err.to_string().starts_with("Error:"));
        assert!(generate_plan("0 VMs, 0 databases", Provider::Gcp).is_err());
    }

    #[test]
    fn test_single_nonzero_count_is_enough() {
        let text = generate_plan("just 3TB of archives", Provider::Azure)
            .unwrap()
            .to_markdown();
        assert!(text.starts_with("### Migration Plan for Azure"));
        assert!(text.contains("Storage → Blob Storage"));
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name(Provider::Aws), "migration_plan_AWS.md");
        assert_eq!(download_file_name(Provider::Azure), "migration_plan_Azure.md");
        assert_eq!(download_file_name(Provider::Gcp), "migration_plan_GCP.md");
    }

    #[tokio::test]
    async fn test_local_planner_renders_generated_plan() {
        let generator = LocalPlanner;
        let md = generator.generate("5 vms, 1 db, 2gb", Provider::Aws).await.unwrap();
        let expected = generate_plan("5 vms, 1 db, 2gb", Provider::Aws).unwrap().to_markdown();
        assert_eq!(md, expected);
        assert!(md.contains("Approximately $1,000.04/month on AWS."));

        let err = generator.generate("", Provider::Aws).await.unwrap_err();
        assert!(err.to_string().starts_with("Error:"));
    }
}
