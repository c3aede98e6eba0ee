pub mod achievement_service;
pub mod quiz_attempt_service;
pub mod quiz_generation_service;
pub mod quiz_helpers;
pub mod quiz_service;
