use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    AchievementCategory, AchievementDefinition, Difficulty, EarnedAchievement, QuestionType,
    QuizAttempt, QuizQuestion, QuizScore, QuizSession,
};

/// Option as shown to the learner, without the correctness flag.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct OptionForTaking {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionForTaking {
    pub id: String,
    pub question_type: QuestionType,
    pub question: String,
    pub options: Vec<OptionForTaking>,
    pub difficulty: Difficulty,
    pub points: u32,
}

impl From<&QuizQuestion> for QuestionForTaking {
    fn from(question: &QuizQuestion) -> Self {
        QuestionForTaking {
            id: question.id.clone(),
            question_type: question.question_type(),
            question: question.question.clone(),
            options: question
                .options()
                .iter()
                .map(|o| OptionForTaking {
                    id: o.id.clone(),
                    text: o.text.clone(),
                })
                .collect(),
            difficulty: question.difficulty,
            points: question.points,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizForTaking {
    pub session_id: String,
    pub project_id: String,
    pub step_index: u32,
    pub total_points: u32,
    pub questions: Vec<QuestionForTaking>,
}

impl From<&QuizSession> for QuizForTaking {
    fn from(session: &QuizSession) -> Self {
        QuizForTaking {
            session_id: session.id.clone(),
            project_id: session.project_id.clone(),
            step_index: session.step_index,
            total_points: session.max_points(),
            questions: session.questions.iter().map(QuestionForTaking::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizAttemptResponse {
    pub attempt_id: String,
    pub project_id: String,
    pub step_index: u32,
    pub score: QuizScore,
    pub submitted_at: DateTime<Utc>,
}

impl From<QuizAttempt> for QuizAttemptResponse {
    fn from(attempt: QuizAttempt) -> Self {
        QuizAttemptResponse {
            attempt_id: attempt.id,
            project_id: attempt.project_id,
            step_index: attempt.step_index,
            score: attempt.score,
            submitted_at: attempt.submitted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AchievementSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub points: u32,
    pub category: AchievementCategory,
}

impl From<&AchievementDefinition> for AchievementSummary {
    fn from(definition: &AchievementDefinition) -> Self {
        AchievementSummary {
            id: definition.id.to_string(),
            title: definition.title.to_string(),
            description: definition.description.to_string(),
            icon_name: definition.icon_name.to_string(),
            points: definition.points,
            category: definition.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AchievementProgress {
    pub achievement: AchievementSummary,
    pub earned: bool,
    pub earned_at: Option<DateTime<Utc>>,
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AchievementOverview {
    pub earned_count: u32,
    pub total_points: u32,
    pub level: u32,
    pub achievements: Vec<AchievementProgress>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AchievementCheckResponse {
    pub newly_earned: Vec<EarnedAchievement>,
    pub total_points: u32,
    pub level: u32,
}
