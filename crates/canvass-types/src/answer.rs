//! Answer drafts and server-confirmed answer records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AnswerRecordId, ChoiceId, QuestionId};

/// A participant's answer to one question, ready for submission.
///
/// Drafts are constructed by the form layer from user input and handed to
/// the submission pipeline as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDraft {
    pub question_id: QuestionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choice_ids: Vec<ChoiceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl AnswerDraft {
    /// Create a free-text answer.
    pub fn text(question_id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            question_id,
            text: Some(text.into()),
            choice_ids: vec![],
            secret: None,
        }
    }

    /// Create a choice answer.
    pub fn choices(question_id: QuestionId, choice_ids: Vec<ChoiceId>) -> Self {
        Self {
            question_id,
            text: None,
            choice_ids,
            secret: None,
        }
    }

    /// Create a secret answer.
    pub fn secret(question_id: QuestionId, secret: impl Into<String>) -> Self {
        Self {
            question_id,
            text: None,
            choice_ids: vec![],
            secret: Some(secret.into()),
        }
    }
}

/// The server-confirmed representation of a submitted [`AnswerDraft`].
///
/// Records are accumulated in the same order as the input drafts. Callers
/// correlate fixed answer positions (e.g. a consent question block) with
/// response content by index, so that order is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub id: AnswerRecordId,
    pub question_id: QuestionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choice_ids: Vec<ChoiceId>,
    pub created_at: DateTime<Utc>,
}
