//! Cost, timeline and risk estimation for a migration
//!
//! All money is kept in whole cents so GB storage pricing stays exact.

use super::extractor::{InfraResources, StorageUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat monthly rates, in cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationRates {
    pub vm_per_month: u64,
    pub db_per_month: u64,
    pub storage_per_tb_month: u64,
    pub storage_per_gb_month: u64,
}

impl Default for MigrationRates {
    fn default() -> Self {
        Self {
            vm_per_month: 100_00,
            db_per_month: 500_00,
            storage_per_tb_month: 20_00,
            storage_per_gb_month: 2,
        }
    }
}

/// Thresholds above which a risk is rated high
const VM_RISK_THRESHOLD: u64 = 50;
const DB_RISK_THRESHOLD: u64 = 3;
const STORAGE_RISK_THRESHOLD: u64 = 20;

/// Workloads migrated per month
const WORKLOADS_PER_MONTH: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    fn above(value: u64, threshold: u64) -> Self {
        if value > threshold { RiskLevel::High } else { RiskLevel::Low }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => f.pad("High"),
            RiskLevel::Low => f.pad("Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub vm_scaling: RiskLevel,
    pub db_downtime: RiskLevel,
    pub data_transfer: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub vms: u64,
    pub databases: u64,
    pub storage: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationEstimate {
    /// Total monthly cost in cents
    pub monthly_cents: u64,
    pub breakdown: CostBreakdown,
    pub timeline_months: u64,
    pub risks: RiskAssessment,
}

pub struct MigrationEstimator {
    rates: MigrationRates,
}

impl MigrationEstimator {
    pub fn new(rates: MigrationRates) -> Self {
        Self { rates }
    }

    /// Estimate monthly cost, timeline and risks for the given resources
    pub fn estimate(&self, res: &InfraResources) -> MigrationEstimate {
        let vms = res.vm_count.saturating_mul(self.rates.vm_per_month);
        let databases = res.db_count.saturating_mul(self.rates.db_per_month);

        let storage_rate = match res.storage_unit {
            StorageUnit::Tb => self.rates.storage_per_tb_month,
            StorageUnit::Gb => self.rates.storage_per_gb_month,
        };
        let storage = res.storage_amount.saturating_mul(storage_rate);

        let monthly_cents = vms.saturating_add(databases).saturating_add(storage);

        MigrationEstimate {
            monthly_cents,
            breakdown: CostBreakdown {
                vms,
                databases,
                storage,
            },
            timeline_months: timeline_months(res),
            risks: assess_risks(res),
        }
    }
}

pub fn timeline_months(res: &InfraResources) -> u64 {
    let workloads = res.vm_count.saturating_add(res.db_count);
    (workloads / WORKLOADS_PER_MONTH).max(1)
}

pub fn assess_risks(res: &InfraResources) -> RiskAssessment {
    RiskAssessment {
        vm_scaling: RiskLevel::above(res.vm_count, VM_RISK_THRESHOLD),
        db_downtime: RiskLevel::above(res.db_count, DB_RISK_THRESHOLD),
        // Compared on the raw number whatever the unit
        data_transfer: RiskLevel::above(res.storage_amount, STORAGE_RISK_THRESHOLD),
    }
}

/// Format cents as dollars with thousands separators, e.g. `$1,500.04`.
/// Whole-dollar amounts drop the fractional part.
pub fn format_usd(cents: u64) -> String {
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rem == 0 {
        format!("${}", grouped)
    } else {
        format!("${}.{:02}", grouped, rem)
    }
}
