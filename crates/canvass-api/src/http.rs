//! HTTP implementation of the survey backend

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use canvass_types::{AnswerDraft, AnswerRecord, IdentityClaim, Scenario, ScenarioId, SessionToken};

use crate::backend::{AnswerWriteRequest, ExchangeRequest, SessionEnvelope, SurveyBackend};
use crate::error::{ApiError, ApiResult};

/// Connection settings for the Canvass backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the Canvass backend.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new backend client from config.
    pub fn new(config: &BackendConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn post_authed<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: &SessionToken,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            Err(ApiError::NotFound("Resource not found".into()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl SurveyBackend for HttpBackend {
    async fn exchange_session(&self, claim: &IdentityClaim) -> ApiResult<SessionEnvelope> {
        debug!(guest = claim.is_guest(), "exchanging identity claim for session");
        self.post("/api/v1/sessions", &ExchangeRequest::from(claim))
            .await
    }

    async fn submit_answer(
        &self,
        token: &SessionToken,
        draft: &AnswerDraft,
    ) -> ApiResult<AnswerRecord> {
        self.post_authed(
            "/api/v1/answers",
            token,
            &AnswerWriteRequest::from_draft(draft),
        )
        .await
    }

    async fn fetch_scenario(&self, scenario_id: &ScenarioId) -> ApiResult<Scenario> {
        self.get(&format!("/api/v1/scenarios/{}", scenario_id.as_str()))
            .await
    }
}
