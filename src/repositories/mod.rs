pub mod achievement_repository;
pub mod project_repository;
pub mod quiz_attempt_repository;
pub mod quiz_session_repository;

pub use achievement_repository::{AchievementRepository, MongoAchievementRepository};
pub use project_repository::{MongoProjectRepository, ProjectRepository};
pub use quiz_attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use quiz_session_repository::{MongoQuizSessionRepository, QuizSessionRepository};
