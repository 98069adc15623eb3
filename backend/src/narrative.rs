//! Client for the external text-generation service that annotates an
//! optimized route with a short travel summary.
//!
//! The service is optional: when it is unconfigured, unreachable or returns
//! malformed data, the caller still gets the numeric route result together
//! with a fixed fallback sentence.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::RoutePlan;

/// Substituted whenever no narrative could be generated.
pub const FALLBACK_TEXT: &str =
    "Your route has been optimized. Follow the stops in the listed order for the shortest trip.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("narrative service returned empty text")]
    EmptyText,
}

#[derive(Clone)]
pub struct NarrativeClient {
    client: reqwest::Client,
    config: Option<NarrativeConfig>,
}

#[derive(Clone)]
struct NarrativeConfig {
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct NarrativeRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct NarrativeReply {
    text: String,
}

impl NarrativeClient {
    /// Configures the client from `NARRATIVE_API_URL` and
    /// `NARRATIVE_API_KEY`. Without a URL the client stays disabled and
    /// [`describe`](Self::describe) always answers with the fallback text.
    pub fn from_env() -> Self {
        let config = std::env::var("NARRATIVE_API_URL")
            .ok()
            .map(|endpoint| NarrativeConfig {
                endpoint,
                api_key: std::env::var("NARRATIVE_API_KEY").ok(),
            });
        match &config {
            Some(cfg) => tracing::info!("narrative service configured at {}", cfg.endpoint),
            None => tracing::info!("narrative service not configured, using fallback text"),
        }
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn disabled() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: None,
        }
    }

    /// Produces a narrative for the optimized route.
    ///
    /// Never fails: any error is logged and replaced by [`FALLBACK_TEXT`],
    /// so the route result itself is returned regardless.
    pub async fn describe(&self, plan: &RoutePlan) -> String {
        let Some(config) = &self.config else {
            return FALLBACK_TEXT.to_string();
        };
        match self.request_summary(config, plan).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("narrative generation failed, using fallback: {err}");
                FALLBACK_TEXT.to_string()
            }
        }
    }

    async fn request_summary(
        &self,
        config: &NarrativeConfig,
        plan: &RoutePlan,
    ) -> Result<String, NarrativeError> {
        let prompt = route_prompt(plan);
        let mut request = self
            .client
            .post(&config.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .json(&NarrativeRequest { prompt: &prompt });
        if let Some(key) = &config.api_key {
            request = request.bearer_auth(key);
        }

        let reply: NarrativeReply = request.send().await?.error_for_status()?.json().await?;
        let text = reply.text.trim();
        if text.is_empty() {
            return Err(NarrativeError::EmptyText);
        }
        Ok(text.to_string())
    }
}

/// Plain-text rendering of the route, the only input the service receives.
fn route_prompt(plan: &RoutePlan) -> String {
    let mut prompt = format!(
        "An optimized multi-stop route visits {} stops over {} km ({} mi):\n",
        plan.stops.len(),
        plan.total_km,
        plan.total_miles
    );
    for stop in &plan.stops {
        prompt.push_str(&format!("{}. {}\n", stop.order, stop.name));
    }
    prompt.push_str("Legs:\n");
    for leg in &plan.legs {
        prompt.push_str(&format!(
            "{} to {}: {} km ({} mi)\n",
            leg.from_name, leg.to_name, leg.km, leg.miles
        ));
    }
    prompt.push_str("Write a short, friendly travel summary for this route.");
    prompt
}
