use std::collections::HashMap;

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::Difficulty;

/// A raw answer as submitted by the client: an option id for multiple-choice,
/// a boolean for true/false. Any other JSON value is kept as `Other` and
/// matches no question.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SubmittedAnswer {
    Flag(bool),
    Choice(String),
    Other(serde_json::Value),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizScore {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub total_points: u32,
    pub earned_points: u32,
    pub percentage: u32,
    pub passed: bool,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub step_index: u32,
    pub session_id: String,
    pub answers: HashMap<String, SubmittedAnswer>,
    pub score: QuizScore,
    pub submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(
        user_id: &str,
        project_id: &str,
        step_index: u32,
        session_id: &str,
        answers: HashMap<String, SubmittedAnswer>,
        score: QuizScore,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            step_index,
            session_id: session_id.to_string(),
            answers,
            score,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(percentage: u32, passed: bool) -> QuizScore {
        QuizScore {
            total_questions: 4,
            correct_answers: 3,
            total_points: 100,
            earned_points: percentage,
            percentage,
            passed,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn submitted_answers_accept_option_ids_and_flags() {
        let answers: HashMap<String, SubmittedAnswer> =
            serde_json::from_str(r#"{"step0_q1": "c", "step0_q2": true}"#)
                .expect("answers should deserialize");

        assert_eq!(
            answers.get("step0_q1"),
            Some(&SubmittedAnswer::Choice("c".to_string()))
        );
        assert_eq!(answers.get("step0_q2"), Some(&SubmittedAnswer::Flag(true)));
    }

    #[test]
    fn unexpected_answer_shapes_still_deserialize() {
        let answers: HashMap<String, SubmittedAnswer> =
            serde_json::from_str(r#"{"step0_q1": "b", "step0_q2": null, "step0_q3": 3}"#)
                .expect("answers should deserialize");

        assert_eq!(answers.len(), 3);
        assert_eq!(
            answers.get("step0_q2"),
            Some(&SubmittedAnswer::Other(serde_json::Value::Null))
        );
        assert_eq!(
            answers.get("step0_q3"),
            Some(&SubmittedAnswer::Other(serde_json::json!(3)))
        );
    }

    #[test]
    fn new_attempt_keeps_score_and_context() {
        let attempt = QuizAttempt::new("user-1", "project-1", 2, "session-1", HashMap::new(), score(75, false));

        assert!(!attempt.id.is_empty());
        assert_eq!(attempt.step_index, 2);
        assert_eq!(attempt.score.percentage, 75);
        assert!(!attempt.score.passed);
    }
}
