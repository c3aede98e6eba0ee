use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::QuizQuestion;

/// A generated question set held server-side until answers are submitted.
/// Retrying a step creates a fresh session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub step_index: u32,
    pub questions: Vec<QuizQuestion>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(
        user_id: &str,
        project_id: &str,
        step_index: u32,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        QuizSession {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            step_index,
            questions,
            created_at: Utc::now(),
        }
    }

    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}
