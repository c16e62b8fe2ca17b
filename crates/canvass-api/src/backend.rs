//! Backend trait and wire types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use canvass_types::{
    AnswerDraft, AnswerRecord, ChoiceId, ClientId, IdentityClaim, QuestionId, Scenario, ScenarioId,
    SessionToken,
};

use crate::error::ApiResult;

/// The backend consumed by session bootstrap and the submission pipeline.
///
/// Implementations must be cheap to share; all state lives server-side.
#[async_trait]
pub trait SurveyBackend: Send + Sync {
    /// Exchange an identity claim for a session token.
    async fn exchange_session(&self, claim: &IdentityClaim) -> ApiResult<SessionEnvelope>;

    /// Write one answer; returns the server-confirmed record.
    async fn submit_answer(
        &self,
        token: &SessionToken,
        draft: &AnswerDraft,
    ) -> ApiResult<AnswerRecord>;

    /// Fetch a scenario with its flat, routing-tagged question list.
    async fn fetch_scenario(&self, scenario_id: &ScenarioId) -> ApiResult<Scenario>;
}

/// Session exchange request body.
///
/// Exactly one of `client_id` / `identity_token` is present, matching the
/// claim variant.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_token: Option<String>,
}

impl From<&IdentityClaim> for ExchangeRequest {
    fn from(claim: &IdentityClaim) -> Self {
        match claim {
            IdentityClaim::GuestGenerated { client_id }
            | IdentityClaim::GuestTracked { client_id } => Self {
                client_id: Some(client_id.clone()),
                identity_token: None,
            },
            IdentityClaim::ThirdParty { identity_token } => Self {
                client_id: None,
                identity_token: Some(identity_token.clone()),
            },
        }
    }
}

/// Session exchange response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub token: SessionToken,
}

/// Answer write request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnswerWriteRequest<'a> {
    pub question_id: QuestionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "<[ChoiceId]>::is_empty")]
    pub choice_ids: &'a [ChoiceId],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<&'a str>,
}

impl<'a> AnswerWriteRequest<'a> {
    pub fn from_draft(draft: &'a AnswerDraft) -> Self {
        Self {
            question_id: draft.question_id,
            text: draft.text.as_deref(),
            choice_ids: &draft.choice_ids,
            secret: draft.secret.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_request_carries_exactly_one_field() {
        let guest = IdentityClaim::GuestTracked {
            client_id: ClientId::new("abc123"),
        };
        let json = serde_json::to_value(ExchangeRequest::from(&guest)).unwrap();
        assert_eq!(json, serde_json::json!({ "client_id": "abc123" }));

        let signed_in = IdentityClaim::ThirdParty {
            identity_token: "tok-1".into(),
        };
        let json = serde_json::to_value(ExchangeRequest::from(&signed_in)).unwrap();
        assert_eq!(json, serde_json::json!({ "identity_token": "tok-1" }));
    }

    #[test]
    fn test_answer_write_request_mirrors_draft() {
        let draft = AnswerDraft::text(QuestionId::new(10), "a");
        let json = serde_json::to_value(AnswerWriteRequest::from_draft(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({ "question_id": 10, "text": "a" }));
    }
}
