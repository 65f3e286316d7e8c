//! Plan generation errors
//!
//! Every variant displays with an `Error:` prefix; the text surfaces show
//! the display string as-is.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// No VM, database or storage quantity was recognised
    #[error("Error: Please provide valid input (e.g., '10 VMs, 2 databases, 5TB storage').")]
    NoResources,

    #[error("Error: Could not generate plan. API issue: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for PlanError {
    fn from(e: reqwest::Error) -> Self {
        PlanError::Remote(e.to_string())
    }
}
