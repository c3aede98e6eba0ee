use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_attempt::SubmittedAnswer;

/// Points awarded by the optional fifth question on hard quizzes.
pub const BONUS_QUESTION_POINTS: u32 = 35;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Maps a project's numeric rating onto a quiz tier. Values outside 1-10
    /// go through the same two thresholds.
    pub fn from_project_difficulty(project_difficulty: i32) -> Self {
        match project_difficulty {
            d if d <= 3 => Difficulty::Easy,
            d if d <= 7 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn base_points(self) -> u32 {
        match self {
            Difficulty::Easy | Difficulty::Medium => 25,
            Difficulty::Hard => 30,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<QuizOption> },
    TrueFalse { correct: bool },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub question: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub points: u32,
}

impl QuizQuestion {
    pub fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::TrueFalse { .. } => QuestionType::TrueFalse,
        }
    }

    pub fn options(&self) -> &[QuizOption] {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => options,
            QuestionKind::TrueFalse { .. } => &[],
        }
    }

    /// Id of the option flagged correct, for multiple-choice questions.
    pub fn correct_option_id(&self) -> Option<&str> {
        self.options()
            .iter()
            .find(|o| o.correct)
            .map(|o| o.id.as_str())
    }

    /// The answer that scores this question, in submitted-answer form.
    pub fn answer_key(&self) -> Option<SubmittedAnswer> {
        match &self.kind {
            QuestionKind::MultipleChoice { .. } => self
                .correct_option_id()
                .map(|id| SubmittedAnswer::Choice(id.to_string())),
            QuestionKind::TrueFalse { correct } => Some(SubmittedAnswer::Flag(*correct)),
        }
    }

    /// Mismatched answer shapes (a flag for a choice question and vice versa)
    /// never match.
    pub fn is_answered_by(&self, answer: &SubmittedAnswer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { .. }, SubmittedAnswer::Choice(choice)) => {
                self.correct_option_id() == Some(choice.as_str())
            }
            (QuestionKind::TrueFalse { correct }, SubmittedAnswer::Flag(flag)) => correct == flag,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question() -> QuizQuestion {
        QuizQuestion {
            id: "step0_q1".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: vec![
                    QuizOption {
                        id: "a".to_string(),
                        text: "Wrong".to_string(),
                        correct: false,
                    },
                    QuizOption {
                        id: "b".to_string(),
                        text: "Right".to_string(),
                        correct: true,
                    },
                ],
            },
            question: "Pick one".to_string(),
            explanation: "Because".to_string(),
            difficulty: Difficulty::Medium,
            points: 25,
        }
    }

    #[test]
    fn project_difficulty_maps_onto_three_tiers() {
        assert_eq!(Difficulty::from_project_difficulty(-4), Difficulty::Easy);
        assert_eq!(Difficulty::from_project_difficulty(3), Difficulty::Easy);
        assert_eq!(Difficulty::from_project_difficulty(4), Difficulty::Medium);
        assert_eq!(Difficulty::from_project_difficulty(7), Difficulty::Medium);
        assert_eq!(Difficulty::from_project_difficulty(8), Difficulty::Hard);
        assert_eq!(Difficulty::from_project_difficulty(42), Difficulty::Hard);
    }

    #[test]
    fn tier_points() {
        assert_eq!(Difficulty::Easy.base_points(), 25);
        assert_eq!(Difficulty::Medium.base_points(), 25);
        assert_eq!(Difficulty::Hard.base_points(), 30);
    }

    #[test]
    fn question_serializes_with_type_tag() {
        let question = QuizQuestion {
            id: "step1_q2".to_string(),
            kind: QuestionKind::TrueFalse { correct: true },
            question: "True or false?".to_string(),
            explanation: "It is.".to_string(),
            difficulty: Difficulty::Easy,
            points: 25,
        };

        let value = serde_json::to_value(&question).expect("question should serialize");
        assert_eq!(value["type"], "true_false");
        assert_eq!(value["correct"], true);
        assert_eq!(value["difficulty"], "easy");

        let parsed: QuizQuestion = serde_json::from_value(value).expect("round trip");
        assert_eq!(parsed, question);
    }

    #[test]
    fn answer_matching_respects_question_shape() {
        let question = choice_question();

        assert!(question.is_answered_by(&SubmittedAnswer::Choice("b".to_string())));
        assert!(!question.is_answered_by(&SubmittedAnswer::Choice("a".to_string())));
        assert!(!question.is_answered_by(&SubmittedAnswer::Flag(true)));
        assert!(!question.is_answered_by(&SubmittedAnswer::Other(serde_json::Value::Null)));
        assert_eq!(
            question.answer_key(),
            Some(SubmittedAnswer::Choice("b".to_string()))
        );
    }
}
