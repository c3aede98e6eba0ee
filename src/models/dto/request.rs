use std::collections::HashMap;

use async_graphql::InputObject;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::SubmittedAnswer;

/// Upper bound on answers per submission; a step quiz has at most five
/// questions.
pub const MAX_ANSWERS: u64 = 20;
const MAX_QUESTION_ID_LEN: usize = 100;

/// REST body: answers keyed by question id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    #[validate(length(max = MAX_ANSWERS), custom(function = validate_question_ids))]
    pub answers: HashMap<String, SubmittedAnswer>,
}

fn validate_question_ids(
    answers: &HashMap<String, SubmittedAnswer>,
) -> Result<(), ValidationError> {
    let valid = answers
        .keys()
        .all(|id| !id.trim().is_empty() && id.len() <= MAX_QUESTION_ID_LEN);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_question_id"))
    }
}

/// GraphQL answer entry: `option_id` for multiple-choice, `value` for
/// true/false.
#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitAnswerInput {
    #[validate(length(min = 1, max = 100))]
    pub question_id: String,
    pub option_id: Option<String>,
    pub value: Option<bool>,
}

impl SubmitAnswerInput {
    fn into_answer(self) -> Option<(String, SubmittedAnswer)> {
        let answer = match (self.option_id, self.value) {
            (Some(option_id), _) => SubmittedAnswer::Choice(option_id),
            (None, Some(value)) => SubmittedAnswer::Flag(value),
            (None, None) => return None,
        };
        Some((self.question_id, answer))
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitStepQuizInput {
    #[validate(length(min = 1, max = 100))]
    pub session_id: String,

    #[validate(nested)]
    pub answers: Vec<SubmitAnswerInput>,
}

impl SubmitStepQuizInput {
    /// Entries carrying neither an option nor a value are dropped, which
    /// scores the same as leaving the question unanswered.
    pub fn answer_map(&self) -> HashMap<String, SubmittedAnswer> {
        self.answers
            .iter()
            .cloned()
            .filter_map(SubmitAnswerInput::into_answer)
            .collect()
    }
}
