//! Remote plan generation through an external text-generation API
//!
//! The endpoint and response shape are placeholders: the request is a JSON
//! POST and the reply is expected to carry the plan in a `text` field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::config::RemoteConfig;
use crate::error::PlanError;
use crate::planner::{PlanGenerator, Provider};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: Option<String>,
}

pub struct RemoteClient {
    url: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, PlanError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }

    /// Ask the remote service for a plan
    pub async fn generate_plan(
        &self,
        description: &str,
        provider: Provider,
    ) -> Result<String, PlanError> {
        let prompt = build_prompt(description, provider);
        let body = GenerateRequest {
            prompt: &prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self.client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: GenerateResponse = response.json().await?;
        tracing::debug!("Remote plan received for {}", provider);

        reply
            .text
            .ok_or_else(|| PlanError::Remote("response has no 'text' field".to_string()))
    }
}

#[async_trait]
impl PlanGenerator for RemoteClient {
    async fn generate(&self, description: &str, provider: Provider) -> Result<String, PlanError> {
        self.generate_plan(description, provider).await.inspect_err(|e| {
            tracing::error!("Remote plan generation failed: {}", e);
        })
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

pub fn build_prompt(description: &str, provider: Provider) -> String {
    format!(
        "Generate a detailed cloud migration plan for the following on-premises setup:\n\
         {description}\n\
         Target cloud: {provider}\n\
         Include:\n\
         1. Assessment of infrastructure\n\
         2. Cloud service mappings\n\
         3. Timeline\n\
         4. Risks and mitigations\n\
         5. Rough cost estimate\n"
    )
}
