pub mod achievement_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use achievement_handler::{
    achievement_catalog, achievement_overview, achievement_progress, check_achievements,
    user_stats,
};
pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{best_step_score, start_step_quiz, step_attempts, submit_quiz};

/// Registers every REST endpoint. Malformed JSON bodies surface as
/// `AppError::BadRequest`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(health_check)
    .service(health_check_ready)
    .service(start_step_quiz)
    .service(submit_quiz)
    .service(best_step_score)
    .service(step_attempts)
    .service(check_achievements)
    .service(achievement_overview)
    .service(achievement_progress)
    .service(user_stats)
    .service(achievement_catalog);
}
