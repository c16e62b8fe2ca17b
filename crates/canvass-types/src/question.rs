//! Scenarios, questions, and choices
//!
//! A scenario is a named experiment configuration holding a flat question
//! list. Each question may carry (page, view, mode) routing tags; a
//! question missing any tag is excluded from routed resolution.

use serde::{Deserialize, Serialize};

use crate::ids::{ChoiceId, QuestionId, ScenarioId};

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-form text input.
    FreeText,
    /// Exactly one choice.
    SingleChoice,
    /// Zero or more choices.
    MultiChoice,
    /// Sensitive text input, never echoed back by the backend.
    Secret,
}

/// A selectable choice on a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
}

/// A single survey prompt, tagged for routed resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    /// Display position within its resolved bucket, ascending.
    pub order: u32,
    /// Page the question belongs to.
    pub page: Option<u32>,
    /// View variant (alternative phrasing/background); 0 is the default.
    pub view: Option<u32>,
    /// Mode variant (deployment vs experiment); 0 is the default.
    pub mode: Option<u32>,
    pub kind: Option<QuestionKind>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    /// The complete routing triple, or `None` if any tag is missing.
    pub fn routing_key(&self) -> Option<(u32, u32, u32)> {
        Some((self.page?, self.view?, self.mode?))
    }
}

/// A named survey/experiment configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, page: Option<u32>, view: Option<u32>, mode: Option<u32>) -> Question {
        Question {
            id: QuestionId::new(id),
            text: format!("question {}", id),
            order: 0,
            page,
            view,
            mode,
            kind: Some(QuestionKind::FreeText),
            choices: vec![],
        }
    }

    #[test]
    fn test_routing_key_requires_all_tags() {
        assert_eq!(
            question(1, Some(0), Some(1), Some(2)).routing_key(),
            Some((0, 1, 2))
        );
        assert_eq!(question(2, Some(0), None, Some(2)).routing_key(), None);
        assert_eq!(question(3, None, None, None).routing_key(), None);
    }

    #[test]
    fn test_question_deserializes_without_choices() {
        let q: Question = serde_json::from_str(
            r#"{"id":1,"text":"how was it?","order":3,"page":0,"view":0,"mode":0,"kind":"free_text"}"#,
        )
        .unwrap();
        assert!(q.choices.is_empty());
        assert_eq!(q.kind, Some(QuestionKind::FreeText));
    }
}
