//! Target cloud providers and their managed service names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "AWS", alias = "aws")]
    Aws,
    #[serde(rename = "Azure", alias = "azure", alias = "AZURE")]
    Azure,
    #[serde(rename = "GCP", alias = "gcp")]
    Gcp,
}

/// Service names a provider offers for each resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceMap {
    pub vm: &'static str,
    pub db: &'static str,
    pub storage: &'static str,
}

impl Provider {
    /// Selector order, default first
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
        }
    }

    pub fn services(&self) -> ServiceMap {
        match self {
            Provider::Aws => ServiceMap {
                vm: "EC2",
                db: "RDS",
                storage: "S3",
            },
            Provider::Azure => ServiceMap {
                vm: "Virtual Machines",
                db: "Azure SQL Database",
                storage: "Blob Storage",
            },
            Provider::Gcp => ServiceMap {
                vm: "Compute Engine (GCE)",
                db: "Cloud SQL",
                storage: "Cloud Storage (GCS)",
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown provider '{}'. Expected one of: AWS, Azure, GCP", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_table() {
        assert_eq!(
            Provider::Aws.services(),
            ServiceMap { vm: "EC2", db: "RDS", storage: "S3" }
        );
        assert_eq!(
            Provider::Azure.services(),
            ServiceMap {
                vm: "Virtual Machines",
                db: "Azure SQL Database",
                storage: "Blob Storage",
            }
        );
        assert_eq!(
            Provider::Gcp.services(),
            ServiceMap {
                vm: "Compute Engine (GCE)",
                db: "Cloud SQL",
                storage: "Cloud Storage (GCS)",
            }
        );
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("AWS".parse::<Provider>().unwrap(), Provider::Aws);
        assert_eq!("azure".parse::<Provider>().unwrap(), Provider::Azure);
        assert_eq!(" gcp ".parse::<Provider>().unwrap(), Provider::Gcp);
        assert!("oracle".parse::<Provider>().is_err());
    }

    #[test]
    fn test_default_is_aws() {
        assert_eq!(Provider::default(), Provider::Aws);
        assert_eq!(Provider::ALL[0], Provider::Aws);
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&Provider::Azure).unwrap(), "\"Azure\"");
        let p: Provider = serde_json::from_str("\"gcp\"").unwrap();
        assert_eq!(p, Provider::Gcp);
    }
}
