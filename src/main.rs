mod cli;
mod config;
mod daemon;
mod error;
mod planner;
mod remote;
mod router;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;

use config::config::Config;
use planner::Provider;

#[derive(Parser)]
#[command(name = "migration-planner")]
#[command(about = "Cloud migration plan generator", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(long = "dev")]
    dev: bool,

    #[arg(long = "config", default_value = "config.json")]
    config: String,

    /// Generate a single plan from this description and exit
    #[arg(long = "plan", value_name = "DESCRIPTION")]
    plan: Option<String>,

    /// Target provider for --plan (AWS, Azure, GCP)
    #[arg(long = "provider")]
    provider: Option<Provider>,

    /// Write the --plan output to this file
    #[arg(long = "out", conflicts_with = "download")]
    out: Option<PathBuf>,

    /// Write the --plan output to migration_plan_<Provider>.md
    #[arg(long = "download")]
    download: bool,

    /// Print the provider service mapping and exit
    #[arg(long = "providers")]
    providers: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    let level = if cli.dev { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if cli.providers {
        cli::plan::list_providers();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", cli.config, e);
            return ExitCode::FAILURE;
        }
    };

    let generator = match daemon::start::build_generator(&config) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("Failed to initialize planner: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(description) = cli.plan {
        let cmd = cli::plan::PlanCommand {
            description,
            provider: cli.provider.unwrap_or(config.planner.default_provider),
            out: cli.out,
            download: cli.download,
        };
        return match cli::plan::handle_plan_command(&cmd, generator.as_ref()).await {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    match serve(config, generator, started).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(
    config: Config,
    generator: std::sync::Arc<dyn planner::PlanGenerator>,
    started: Instant,
) -> anyhow::Result<()> {
    daemon::start::print_banner(&config);

    let planner_state = router::planner::PlannerState {
        generator,
        default_provider: config.planner.default_provider,
        delay: Duration::from_millis(config.planner.simulated_delay_ms),
    };

    let app = router::public::public_router()
        .merge(router::planner::planner_router(planner_state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Total startup time: {}ms\n", started.elapsed().as_millis());
    tracing::info!("Planner listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
