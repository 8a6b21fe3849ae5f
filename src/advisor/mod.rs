//! Narrative recommendations from an external text-generation service.
//!
//! The service is best-effort: [`recommend`] never fails and substitutes a
//! fixed pair of recommendations whenever the call or its answer is unusable.

mod prompt;

use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::core::{AnalysisResult, InputProfile};

pub use prompt::build_prompt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum RecommendationCategory {
    Health,
    Wealth,
    Environment,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub impact: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub source: RecommendationSource,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no narrative generator is configured")]
    Unavailable,
    #[error("failed to run narrative command: {0}")]
    Io(#[from] std::io::Error),
    #[error("narrative command exited with status {0}")]
    Status(i32),
    #[error("narrative command did not answer within {0:?}")]
    Timeout(Duration),
    #[error("narrative service returned an empty answer")]
    Empty,
    #[error("narrative answer is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("narrative answer violates the schema: {0}")]
    Schema(String),
}

pub trait NarrativeGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AdvisorError>> + Send;
}

pub const DEFAULT_NARRATIVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pipes the prompt into an external command and reads its answer from
/// stdout. The command is split on whitespace; no shell is involved.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    command: Option<String>,
    timeout: Duration,
}

impl CommandGenerator {
    pub fn new(command: Option<String>) -> Self {
        let command = command.filter(|c| !c.trim().is_empty());
        Self {
            command,
            timeout: DEFAULT_NARRATIVE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.command.is_some()
    }

    async fn run(&self, command: &str, prompt: &str) -> Result<String, AdvisorError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(AdvisorError::Unavailable)?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        // A command may answer without reading its input.
        if let Some(mut stdin) = child.stdin.take() {
            let written = match stdin.write_all(prompt.as_bytes()).await {
                Ok(()) => stdin.shutdown().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(AdvisorError::Status(output.status.code().unwrap_or(-1)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl NarrativeGenerator for CommandGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let command = self.command.as_deref().ok_or(AdvisorError::Unavailable)?;
        timeout(self.timeout, self.run(command, prompt))
            .await
            .map_err(|_| AdvisorError::Timeout(self.timeout))?
    }
}

pub fn parse_recommendations(text: &str) -> Result<Vec<Recommendation>, AdvisorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AdvisorError::Empty);
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    if !value.is_array() {
        return Err(AdvisorError::Schema("expected a JSON array".to_string()));
    }
    let recommendations: Vec<Recommendation> = serde_json::from_value(value)
        .map_err(|e| AdvisorError::Schema(e.to_string()))?;

    if let Some(index) = recommendations
        .iter()
        .position(|r| r.title.trim().is_empty())
    {
        return Err(AdvisorError::Schema(format!(
            "recommendation {index} has a blank title"
        )));
    }
    Ok(recommendations)
}

pub fn fallback_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            category: RecommendationCategory::Health,
            title: "VO2 Max Optimization".to_string(),
            description: "Given your current activity levels, adding 2 sessions of Zone 5 \
                          intervals weekly could improve cardiovascular mortality risk by 20%."
                .to_string(),
            impact: "+3.2 Years".to_string(),
        },
        Recommendation {
            category: RecommendationCategory::Wealth,
            title: "Extended Runway Hedge".to_string(),
            description: "Your projected lifespan exceeds your current financial runway by \
                          4 years. Recommend increasing equity weight to 75% to outpace \
                          inflation."
                .to_string(),
            impact: "+$240k Asset Delta".to_string(),
        },
    ]
}

/// One attempt, no retries. Every failure is logged and replaced by the
/// fallback set.
pub async fn recommend<G: NarrativeGenerator>(
    generator: &G,
    profile: &InputProfile,
    results: &AnalysisResult,
) -> Recommendations {
    let prompt = build_prompt(profile, results);
    let answer = match generator.generate(&prompt).await {
        Ok(text) => parse_recommendations(&text),
        Err(e) => Err(e),
    };

    match answer {
        Ok(recommendations) => Recommendations {
            source: RecommendationSource::Generated,
            recommendations,
        },
        Err(e) => {
            log::warn!("narrative generation failed, using fallback recommendations: {e}");
            Recommendations {
                source: RecommendationSource::Fallback,
                recommendations: fallback_recommendations(),
            }
        }
    }
}
