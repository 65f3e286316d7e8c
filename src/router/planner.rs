//! Planner routes: the HTML form, plan download and JSON API

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::planner::{self, estimator::format_usd, MigrationPlan, PlanGenerator, Provider};
use crate::router::page::{self, Outcome, PageInput};

#[derive(Clone)]
pub struct PlannerState {
    pub generator: Arc<dyn PlanGenerator>,
    pub default_provider: Provider,
    /// Pause before answering a form submit
    pub delay: Duration,
}

#[derive(Deserialize)]
struct PlanForm {
    provider: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct PlanRequest {
    #[serde(default)]
    provider: Option<String>,
    description: String,
}

#[derive(Serialize)]
struct PlanResponse {
    provider: Provider,
    file_name: String,
    plan: String,
}

#[derive(Serialize)]
struct EstimateResponse {
    #[serde(flatten)]
    plan: MigrationPlan,
    monthly_cost: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn planner_router(state: PlannerState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/plan", post(submit_plan))
        .route("/plan/download", post(download_plan))
        .route("/api/v1/plan", post(api_plan))
        .route("/api/v1/plan/estimate", post(api_estimate))
        .with_state(state)
}

fn error_json(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Blank form
async fn index(State(state): State<PlannerState>) -> Response {
    Html(page::render(&PageInput {
        provider: state.default_provider,
        description: page::DEFAULT_DESCRIPTION,
        outcome: None,
    }))
    .into_response()
}

/// Form submit: render the plan or an error banner under the form
async fn submit_plan(State(state): State<PlannerState>, Form(form): Form<PlanForm>) -> Response {
    let provider = match form.provider.parse::<Provider>() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Rejected form submit: {}", e);
            let body = page::render(&PageInput {
                provider: state.default_provider,
                description: &form.description,
                outcome: Some(Outcome::Error(&format!("Error: {}", e))),
            });
            return (StatusCode::BAD_REQUEST, Html(body)).into_response();
        }
    };

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let result = state.generator.generate(&form.description, provider).await;
    let message;
    let outcome = match &result {
        Ok(markdown) => {
            tracing::info!("Generated {} plan for {}", state.generator.name(), provider);
            Outcome::Plan(markdown)
        }
        Err(e) => {
            tracing::warn!("Plan rejected: {}", e);
            message = e.to_string();
            Outcome::Error(&message)
        }
    };

    Html(page::render(&PageInput {
        provider,
        description: &form.description,
        outcome: Some(outcome),
    }))
    .into_response()
}

/// Plan as a Markdown attachment
async fn download_plan(State(state): State<PlannerState>, Form(form): Form<PlanForm>) -> Response {
    let provider = match form.provider.parse::<Provider>() {
        Ok(p) => p,
        Err(e) => return (StatusCode::BAD_REQUEST, e).into_response(),
    };

    match state.generator.generate(&form.description, provider).await {
        Ok(markdown) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                planner::download_file_name(provider)
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                markdown,
            )
                .into_response()
        }
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    }
}

async fn api_plan(State(state): State<PlannerState>, Json(req): Json<PlanRequest>) -> Response {
    let provider = match resolve_provider(req.provider.as_deref(), state.default_provider) {
        Ok(p) => p,
        Err(e) => return error_json(StatusCode::BAD_REQUEST, e),
    };

    match state.generator.generate(&req.description, provider).await {
        Ok(plan) => (
            StatusCode::OK,
            Json(PlanResponse {
                provider,
                file_name: planner::download_file_name(provider),
                plan,
            }),
        )
            .into_response(),
        Err(e) => error_json(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    }
}

/// Structured numbers from the local planner, whatever generator is active
async fn api_estimate(State(state): State<PlannerState>, Json(req): Json<PlanRequest>) -> Response {
    let provider = match resolve_provider(req.provider.as_deref(), state.default_provider) {
        Ok(p) => p,
        Err(e) => return error_json(StatusCode::BAD_REQUEST, e),
    };

    match planner::generate_plan(&req.description, provider) {
        Ok(plan) => {
            let monthly_cost = format_usd(plan.estimate.monthly_cents);
            (StatusCode::OK, Json(EstimateResponse { plan, monthly_cost })).into_response()
        }
        Err(e) => error_json(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    }
}

fn resolve_provider(raw: Option<&str>, default: Provider) -> Result<Provider, String> {
    match raw {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}
