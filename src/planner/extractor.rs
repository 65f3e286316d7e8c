//! Resource extraction from free-text infrastructure descriptions
//!
//! Each quantity is searched for independently, so the order and wording
//! around them doesn't matter ("5TB storage, 10 VMs" works as well).
//! Only ASCII digits count as numbers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static VM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*VMs?").unwrap());

static DB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(database|DB)s?").unwrap());

static STORAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(TB|GB)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StorageUnit {
    #[default]
    #[serde(rename = "TB")]
    Tb,
    #[serde(rename = "GB")]
    Gb,
}

impl StorageUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageUnit::Tb => "TB",
            StorageUnit::Gb => "GB",
        }
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Quantities pulled out of one request's description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InfraResources {
    pub vm_count: u64,
    pub db_count: u64,
    pub storage_amount: u64,
    pub storage_unit: StorageUnit,
}

impl InfraResources {
    /// Nothing recognisable was found
    pub fn is_empty(&self) -> bool {
        self.vm_count == 0 && self.db_count == 0 && self.storage_amount == 0
    }
}

/// Pull VM, database and storage quantities out of `text`
pub fn extract(text: &str) -> InfraResources {
    let vm_count = first_count(&VM_RE, text);
    let db_count = first_count(&DB_RE, text);

    let (storage_amount, storage_unit) = match STORAGE_RE.captures(text) {
        Some(caps) => {
            let amount = parse_count(&caps[1]);
            let unit = if caps[2].eq_ignore_ascii_case("GB") {
                StorageUnit::Gb
            } else {
                StorageUnit::Tb
            };
            (amount, unit)
        }
        None => (0, StorageUnit::Tb),
    };

    InfraResources {
        vm_count,
        db_count,
        storage_amount,
        storage_unit,
    }
}

fn first_count(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .map(|caps| parse_count(&caps[1]))
        .unwrap_or(0)
}

// The patterns only capture ASCII digit runs, so the sole parse failure is
// overflow, which saturates
fn parse_count(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reference_input() {
        let res = extract("10 VMs, 2 databases, 5TB storage");
        assert_eq!(res.vm_count, 10);
        assert_eq!(res.db_count, 2);
        assert_eq!(res.storage_amount, 5);
        assert_eq!(res.storage_unit, StorageUnit::Tb);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let res = extract("5 vms, 1 db, 2gb");
        assert_eq!(
            res,
            InfraResources {
                vm_count: 5,
                db_count: 1,
                storage_amount: 2,
                storage_unit: StorageUnit::Gb,
            }
        );
    }

    #[test]
    fn test_extract_singular_and_plural_forms() {
        let res = extract("1 VM and 3 DBs");
        assert_eq!(res.vm_count, 1);
        assert_eq!(res.db_count, 3);

        let res = extract("a cluster with 1 database");
        assert_eq!(res.db_count, 1);
    }

    #[test]
    fn test_extract_missing_storage_defaults_to_tb() {
        let res = extract("12 VMs only");
        assert_eq!(res.storage_amount, 0);
        assert_eq!(res.storage_unit, StorageUnit::Tb);
    }

    #[test]
    fn test_extract_takes_first_match() {
        let res = extract("8 VMs in dc1, 4 VMs in dc2");
        assert_eq!(res.vm_count, 8);
    }

    #[test]
    fn test_extract_ignores_unrelated_text() {
        let res = extract("a few servers and some disks");
        assert!(res.is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_extract_overflowing_number_saturates() {
        let res = extract("99999999999999999999999 VMs, 2 databases");
        assert_eq!(res.vm_count, u64::MAX);
        assert_eq!(res.db_count, 2);

        let res = extract("99999999999999999999999 VMs");
        assert!(!res.is_empty());

        let res = extract("123456789012345678901234567890 TB");
        assert_eq!(res.storage_amount, u64::MAX);
        assert_eq!(res.storage_unit, StorageUnit::Tb);
    }

    #[test]
    fn test_extract_skips_non_ascii_digits() {
        let res = extract("\u{0665} VMs, 3 VMs");
        assert_eq!(res.vm_count, 3);

        let res = extract("\u{0967}\u{0968} databases, 4 DBs, \u{FF12}TB, 7 GB");
        assert_eq!(res.db_count, 4);
        assert_eq!(res.storage_amount, 7);
        assert_eq!(res.storage_unit, StorageUnit::Gb);

        assert!(extract("\u{FF11}\u{FF10} VMs").is_empty());
    }

    #[test]
    fn test_extract_allows_whitespace_before_unit() {
        let res = extract("300   GB of logs");
        assert_eq!(res.storage_amount, 300);
        assert_eq!(res.storage_unit, StorageUnit::Gb);
    }
}
