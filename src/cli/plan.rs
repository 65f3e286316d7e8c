//! One-shot plan commands
//!
//! Generate a plan from the command line instead of through the web form.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::planner::{self, PlanGenerator, Provider};

pub struct PlanCommand {
    pub description: String,
    pub provider: Provider,
    /// Write the plan to this path
    pub out: Option<PathBuf>,
    /// Write the plan to `migration_plan_<Provider>.md` in the working directory
    pub download: bool,
}

/// Returns `Ok(false)` when the plan was rejected; the error text has
/// already been printed to stderr.
pub async fn handle_plan_command(
    cmd: &PlanCommand,
    generator: &dyn PlanGenerator,
) -> anyhow::Result<bool> {
    let markdown = match generator.generate(&cmd.description, cmd.provider).await {
        Ok(md) => md,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };

    println!("{}", markdown);

    let target = match (&cmd.out, cmd.download) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(planner::download_file_name(cmd.provider))),
        (None, false) => None,
    };

    if let Some(path) = target {
        write_plan(&path, &markdown)?;
        println!("✓ Plan saved to {}", path.display());
    }

    Ok(true)
}

fn write_plan(path: &Path, markdown: &str) -> anyhow::Result<()> {
    std::fs::write(path, markdown)
        .with_context(|| format!("Failed to write plan to {}", path.display()))?;
    tracing::info!("Wrote plan to {}", path.display());
    Ok(())
}

pub fn list_providers() {
    println!("╔═══════════════════════════════════════════════════════════════════╗");
    println!("║                      Provider Service Mapping                     ║");
    println!("╠═══════════════════════════════════════════════════════════════════╣");
    for provider in Provider::ALL {
        let services = provider.services();
        println!("║  {:<65}║", provider);
        println!("║    VMs:       {:<52}║", services.vm);
        println!("║    Databases: {:<52}║", services.db);
        println!("║    Storage:   {:<52}║", services.storage);
    }
    println!("╚═══════════════════════════════════════════════════════════════════╝");
}
