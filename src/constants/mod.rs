pub mod achievements;
pub mod quiz_text;
