use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Project, QuizSession},
    repositories::{ProjectRepository, QuizSessionRepository},
    services::quiz_generation_service::QuizGenerationService,
};

pub struct QuizService {
    project_repository: Arc<dyn ProjectRepository>,
    session_repository: Arc<dyn QuizSessionRepository>,
}

impl QuizService {
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        session_repository: Arc<dyn QuizSessionRepository>,
    ) -> Self {
        Self {
            project_repository,
            session_repository,
        }
    }

    pub async fn get_owned_project(&self, user_id: &str, project_id: &str) -> AppResult<Project> {
        let project = self
            .project_repository
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Project with id '{}' not found", project_id))
            })?;

        if project.user_id != user_id {
            return Err(AppError::Forbidden(
                "Project belongs to another user".to_string(),
            ));
        }

        Ok(project)
    }

    /// Generates a fresh question set for a step and stores it as a session.
    /// Each call re-shuffles; earlier sessions stay valid for submission.
    pub async fn start_step_quiz(
        &self,
        user_id: &str,
        project_id: &str,
        step_index: u32,
    ) -> AppResult<QuizSession> {
        let project = self.get_owned_project(user_id, project_id).await?;

        let step = project.step(step_index as usize).ok_or_else(|| {
            AppError::NotFound(format!(
                "Step {} not found in project '{}'",
                step_index, project_id
            ))
        })?;

        let questions = QuizGenerationService::generate_quiz_questions(
            step,
            step_index as usize,
            project.domain.as_deref().unwrap_or_default(),
            project.difficulty,
        );

        let session = QuizSession::new(user_id, project_id, step_index, questions);
        log::info!(
            "Started quiz session {} for user {} on project {} step {}",
            session.id,
            user_id,
            project_id,
            step_index
        );

        self.session_repository.create(session).await
    }
}
