pub mod achievement;
pub mod project;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod quiz_session;
pub mod step;
pub mod user_stats;

pub use achievement::{
    AchievementCategory, AchievementDefinition, Criterion, EarnedAchievement, EarnedRef, Metric,
    UserAchievement,
};
pub use project::{Project, ProjectStatus};
pub use quiz_attempt::{QuizAttempt, QuizScore, SubmittedAnswer};
pub use quiz_question::{Difficulty, QuestionKind, QuestionType, QuizOption, QuizQuestion};
pub use quiz_session::QuizSession;
pub use step::Step;
pub use user_stats::UserStats;
