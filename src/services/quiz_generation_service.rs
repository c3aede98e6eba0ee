use rand::Rng;

use crate::constants::quiz_text::{
    APPROACH_DISTRACTORS, APPROACH_EXPLANATION, APPROACH_FALLBACK_ANSWER, APPROACH_QUESTION,
    BONUS_DISTRACTORS, BONUS_EXPLANATION, BONUS_FALLBACK_ANSWER, BONUS_QUESTION,
    FOCUS_DISTRACTORS, FOCUS_FALLBACK_CHARS, FOCUS_FALLBACK_EXPLANATION, FOCUS_QUESTION,
    PURPOSE_STATEMENT, REFLECTION_EXPLANATION, REFLECTION_STATEMENT, UNTITLED_STEP,
};
use crate::models::domain::quiz_question::BONUS_QUESTION_POINTS;
use crate::models::domain::{Difficulty, QuestionKind, QuizQuestion, Step};
use crate::services::quiz_helpers::{excerpt, fill_template, shuffled_options};

pub struct QuizGenerationService;

/// Accumulates questions for one step, numbering them as they are pushed.
struct QuestionSet {
    step_index: usize,
    difficulty: Difficulty,
    questions: Vec<QuizQuestion>,
}

impl QuestionSet {
    fn new(step_index: usize, difficulty: Difficulty) -> Self {
        Self {
            step_index,
            difficulty,
            questions: Vec::with_capacity(5),
        }
    }

    fn push(&mut self, kind: QuestionKind, question: String, explanation: String) {
        let id = format!("step{}_q{}", self.step_index, self.questions.len() + 1);
        self.questions.push(QuizQuestion {
            id,
            kind,
            question,
            explanation,
            difficulty: self.difficulty,
            points: self.difficulty.base_points(),
        });
    }

    fn push_bonus(&mut self, kind: QuestionKind, question: String, explanation: String) {
        self.questions.push(QuizQuestion {
            id: format!("step{}_bonus", self.step_index),
            kind,
            question,
            explanation,
            difficulty: self.difficulty,
            points: BONUS_QUESTION_POINTS,
        });
    }
}

impl QuizGenerationService {
    /// Generates the quiz for one step using the thread-local RNG for option
    /// order.
    pub fn generate_quiz_questions(
        step: &Step,
        step_index: usize,
        domain: &str,
        project_difficulty: i32,
    ) -> Vec<QuizQuestion> {
        Self::generate_with_rng(
            step,
            step_index,
            domain,
            project_difficulty,
            &mut rand::thread_rng(),
        )
    }

    /// Question texts and answer keys depend only on the inputs; `rng` only
    /// decides option order and therefore which letter is correct.
    ///
    /// `domain` does not select distractors yet.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        step: &Step,
        step_index: usize,
        domain: &str,
        project_difficulty: i32,
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        let difficulty = Difficulty::from_project_difficulty(project_difficulty);
        let mut set = QuestionSet::new(step_index, difficulty);

        if let (Some(title), Some(description)) = (step.title(), step.description()) {
            let explanation = match step.connection_to_goal() {
                Some(connection) => connection.to_string(),
                None => fill_template(FOCUS_FALLBACK_EXPLANATION, &[("title", title)]),
            };

            let focus = match step.learning_focus() {
                Some(focus) => focus.to_string(),
                None => excerpt(description, FOCUS_FALLBACK_CHARS),
            };
            set.push(
                QuestionKind::MultipleChoice {
                    options: shuffled_options(&focus, &FOCUS_DISTRACTORS.get(difficulty), rng),
                },
                fill_template(FOCUS_QUESTION, &[("title", title)]),
                explanation.clone(),
            );

            set.push(
                QuestionKind::TrueFalse { correct: true },
                fill_template(PURPOSE_STATEMENT.get(difficulty), &[("title", title)]),
                explanation,
            );
        }

        let approach = step
            .hint(0)
            .unwrap_or_else(|| APPROACH_FALLBACK_ANSWER.get(difficulty));
        set.push(
            QuestionKind::MultipleChoice {
                options: shuffled_options(approach, &APPROACH_DISTRACTORS.get(difficulty), rng),
            },
            APPROACH_QUESTION.get(difficulty).to_string(),
            APPROACH_EXPLANATION.to_string(),
        );

        set.push(
            QuestionKind::TrueFalse { correct: true },
            REFLECTION_STATEMENT.get(difficulty).to_string(),
            REFLECTION_EXPLANATION.to_string(),
        );

        if difficulty == Difficulty::Hard && step.hints.len() >= 2 {
            let practice = step.hint(1).unwrap_or(BONUS_FALLBACK_ANSWER);
            let title = step.title().unwrap_or(UNTITLED_STEP);
            set.push_bonus(
                QuestionKind::MultipleChoice {
                    options: shuffled_options(practice, &BONUS_DISTRACTORS, rng),
                },
                fill_template(BONUS_QUESTION, &[("title", title)]),
                BONUS_EXPLANATION.to_string(),
            );
        }

        log::debug!(
            "Generated {} {:?} questions for step {} (domain '{}')",
            set.questions.len(),
            difficulty,
            step_index,
            domain
        );

        set.questions
    }
}
