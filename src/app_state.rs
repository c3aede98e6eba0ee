use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AchievementRepository, MongoAchievementRepository, MongoProjectRepository,
        MongoQuizAttemptRepository, MongoQuizSessionRepository, ProjectRepository,
        QuizAttemptRepository, QuizSessionRepository,
    },
    services::{
        achievement_service::AchievementService, quiz_attempt_service::QuizAttemptService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub quiz_attempt_service: Arc<QuizAttemptService>,
    pub achievement_service: Arc<AchievementService>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let project_repository = Arc::new(MongoProjectRepository::new(&db));
        project_repository.ensure_indexes().await?;

        let session_repository = Arc::new(MongoQuizSessionRepository::new(&db));
        session_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let achievement_repository = Arc::new(MongoAchievementRepository::new(&db));
        achievement_repository.ensure_indexes().await?;

        let mut state = Self::with_repositories(
            project_repository,
            session_repository,
            attempt_repository,
            achievement_repository,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires services over arbitrary repository implementations, with no
    /// database handle attached.
    pub fn with_repositories(
        project_repository: Arc<dyn ProjectRepository>,
        session_repository: Arc<dyn QuizSessionRepository>,
        attempt_repository: Arc<dyn QuizAttemptRepository>,
        achievement_repository: Arc<dyn AchievementRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            project_repository.clone(),
            session_repository.clone(),
        ));
        let quiz_attempt_service = Arc::new(QuizAttemptService::new(
            session_repository,
            attempt_repository,
        ));
        let achievement_service = Arc::new(AchievementService::new(
            project_repository,
            achievement_repository,
        ));

        Self {
            quiz_service,
            quiz_attempt_service,
            achievement_service,
            db: None,
        }
    }
}
