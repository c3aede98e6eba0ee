use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuizAttempt, QuizQuestion, QuizScore, SubmittedAnswer},
    repositories::{QuizAttemptRepository, QuizSessionRepository},
};

/// Minimum percentage to pass, the same for every tier.
pub const PASS_THRESHOLD: u32 = 90;

pub struct QuizAttemptService {
    session_repository: Arc<dyn QuizSessionRepository>,
    attempt_repository: Arc<dyn QuizAttemptRepository>,
}

impl QuizAttemptService {
    pub fn new(
        session_repository: Arc<dyn QuizSessionRepository>,
        attempt_repository: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self {
            session_repository,
            attempt_repository,
        }
    }

    /// Scores submitted answers against a question set. Missing or mismatched
    /// answers earn nothing; this never fails.
    pub fn calculate_quiz_score(
        answers: &HashMap<String, SubmittedAnswer>,
        questions: &[QuizQuestion],
    ) -> QuizScore {
        let mut total_points = 0;
        let mut earned_points = 0;
        let mut correct_answers = 0;

        for question in questions {
            total_points += question.points;

            let is_correct = answers
                .get(&question.id)
                .is_some_and(|answer| question.is_answered_by(answer));

            if is_correct {
                earned_points += question.points;
                correct_answers += 1;
            }
        }

        let percentage = Self::percentage(earned_points, total_points);

        QuizScore {
            total_questions: questions.len() as u32,
            correct_answers,
            total_points,
            earned_points,
            percentage,
            passed: percentage >= PASS_THRESHOLD,
            difficulty: questions
                .first()
                .map(|q| q.difficulty)
                .unwrap_or(Difficulty::Medium),
        }
    }

    /// `round(100 * earned / total)` with halves rounded up; 0 for an empty set.
    pub fn percentage(earned_points: u32, total_points: u32) -> u32 {
        if total_points == 0 {
            return 0;
        }
        let earned = u64::from(earned_points);
        let total = u64::from(total_points);
        ((earned * 200 + total) / (total * 2)) as u32
    }

    /// Scores answers against a stored session and records the attempt.
    pub async fn submit_answers(
        &self,
        user_id: &str,
        session_id: &str,
        answers: HashMap<String, SubmittedAnswer>,
    ) -> AppResult<QuizAttempt> {
        let session = self
            .session_repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz session with id '{}' not found", session_id))
            })?;

        if session.user_id != user_id {
            return Err(AppError::Forbidden(
                "Quiz session belongs to another user".to_string(),
            ));
        }

        let score = Self::calculate_quiz_score(&answers, &session.questions);

        log::info!(
            "User {} scored {}% on project {} step {} ({})",
            user_id,
            score.percentage,
            session.project_id,
            session.step_index,
            if score.passed { "passed" } else { "failed" }
        );

        let attempt = QuizAttempt::new(
            user_id,
            &session.project_id,
            session.step_index,
            &session.id,
            answers,
            score,
        );
        self.attempt_repository.create(attempt).await
    }

    /// Highest-percentage attempt for a step; the earliest wins a tie.
    pub async fn best_step_score(
        &self,
        user_id: &str,
        project_id: &str,
        step_index: u32,
    ) -> AppResult<Option<QuizAttempt>> {
        let attempts = self
            .attempt_repository
            .find_by_step(user_id, project_id, step_index)
            .await?;

        Ok(best_attempt(attempts))
    }

    /// Attempts for a step, newest first.
    pub async fn step_attempts(
        &self,
        user_id: &str,
        project_id: &str,
        step_index: u32,
    ) -> AppResult<Vec<QuizAttempt>> {
        let mut attempts = self
            .attempt_repository
            .find_by_step(user_id, project_id, step_index)
            .await?;
        attempts.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(attempts)
    }
}

fn best_attempt(attempts: Vec<QuizAttempt>) -> Option<QuizAttempt> {
    attempts.into_iter().reduce(|best, candidate| {
        let better = candidate.score.percentage > best.score.percentage
            || (candidate.score.percentage == best.score.percentage
                && candidate.submitted_at < best.submitted_at);
        if better {
            candidate
        } else {
            best
        }
    })
}
