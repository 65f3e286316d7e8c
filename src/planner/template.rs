//! Markdown rendering of a migration plan

use std::fmt::Write;

use super::MigrationPlan;
use super::estimator::format_usd;

pub fn render(plan: &MigrationPlan) -> String {
    let res = &plan.resources;
    let services = &plan.services;
    let est = &plan.estimate;
    let provider = plan.provider;

    let mut out = String::new();
    // Writing into a String can't fail
    let _ = write!(
        out,
        "### Migration Plan for {provider}\n\
         **Input Analysis**: {vms} VMs, {dbs} databases, {storage} {unit} storage.\n\
         \n\
         1. **Assessment**:\n   \
            - Identified {vms} VMs, {dbs} databases, {storage} {unit} of storage.\n\
         2. **Cloud Mapping**:\n   \
            - VMs → {vm_service}\n   \
            - Databases → {db_service}\n   \
            - Storage → {storage_service}\n\
         3. **Timeline**: {timeline} month(s) for migration and testing.\n\
         4. **Risks & Mitigations**:\n   \
            - {vm_risk} risk of VM scaling issues; use auto-scaling groups.\n   \
            - {db_risk} risk of database downtime; implement replication.\n   \
            - {storage_risk} risk of data transfer delays; use incremental backups.\n\
         5. **Cost Estimate**: Approximately {cost}/month on {provider}.\n",
        vms = res.vm_count,
        dbs = res.db_count,
        storage = res.storage_amount,
        unit = res.storage_unit,
        vm_service = services.vm,
        db_service = services.db,
        storage_service = services.storage,
        timeline = est.timeline_months,
        vm_risk = est.risks.vm_scaling,
        db_risk = est.risks.db_downtime,
        storage_risk = est.risks.data_transfer,
        cost = format_usd(est.monthly_cents),
    );
    out
}

#[cfg(test)]
mod tests {
    use crate::planner::{Provider, generate_plan};

    #[test]
    fn test_render_reference_plan() {
        let plan = generate_plan("10 VMs, 2 databases, 5TB storage", Provider::Aws).unwrap();
        let md = plan.to_markdown();

        let expected = "### Migration Plan for AWS\n\
            **Input Analysis**: 10 VMs, 2 databases, 5 TB storage.\n\
            \n\
            1. **Assessment**:\n   - Identified 10 VMs, 2 databases, 5 TB of storage.\n\
            2. **Cloud Mapping**:\n   - VMs → EC2\n   - Databases → RDS\n   - Storage → S3\n\
            3. **Timeline**: 1 month(s) for migration and testing.\n\
            4. **Risks & Mitigations**:\n   \
            - Low risk of VM scaling issues; use auto-scaling groups.\n   \
            - Low risk of database downtime; implement replication.\n   \
            - Low risk of data transfer delays; use incremental backups.\n\
            5. **Cost Estimate**: Approximately $2,100/month on AWS.\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_render_gcp_high_risk() {
        let plan = generate_plan("120 vms, 6 dbs, 40 tb", Provider::Gcp).unwrap();
        let md = plan.to_markdown();

        assert!(md.starts_with("### Migration Plan for GCP\n"));
        assert!(md.contains("VMs → Compute Engine (GCE)"));
        assert!(md.contains("Databases → Cloud SQL"));
        assert!(md.contains("Storage → Cloud Storage (GCS)"));
        assert!(md.contains("- High risk of VM scaling issues"));
        assert!(md.contains("- High risk of database downtime"));
        assert!(md.contains("- High risk of data transfer delays"));
        assert!(md.contains("**Timeline**: 6 month(s)"));
        // 12000 + 3000 + 800
        assert!(md.contains("Approximately $15,800/month on GCP."));
    }
}
