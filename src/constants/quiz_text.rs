use crate::models::domain::Difficulty;

/// One value per quiz tier.
#[derive(Clone, Copy, Debug)]
pub struct Tiered<T> {
    pub easy: T,
    pub medium: T,
    pub hard: T,
}

impl<T: Copy> Tiered<T> {
    pub fn get(&self, difficulty: Difficulty) -> T {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

pub const OPTION_IDS: [&str; 4] = ["a", "b", "c", "d"];

pub const FOCUS_FALLBACK_CHARS: usize = 50;

// Wrong answers for "what is the main focus" questions.
const EASY_FOCUS: [&str; 3] = [
    "Memorizing syntax without understanding how it is used",
    "Skipping ahead to the final result without testing anything",
    "Copying code from examples without reading it",
];
const MEDIUM_FOCUS: [&str; 3] = [
    "Optimizing performance before the basic feature works",
    "Adding extra features that are not part of this step",
    "Rewriting earlier steps instead of building on them",
];
const HARD_FOCUS: [&str; 3] = [
    "Designing for hypothetical scale instead of the current requirements",
    "Coupling components tightly so later phases cannot change them independently",
    "Deferring all validation and error handling until the project is finished",
];

// Higher tiers keep one sentence from the tier below.
pub const FOCUS_DISTRACTORS: Tiered<[&str; 3]> = Tiered {
    easy: EASY_FOCUS,
    medium: [EASY_FOCUS[0], MEDIUM_FOCUS[0], MEDIUM_FOCUS[1]],
    hard: [MEDIUM_FOCUS[0], HARD_FOCUS[0], HARD_FOCUS[1]],
};

// Wrong answers for "best approach" questions.
const EASY_APPROACH: [&str; 3] = [
    "Try to finish everything at once without a plan",
    "Skip the instructions and guess how it should work",
    "Wait until the very end to check whether anything works",
];
const MEDIUM_APPROACH: [&str; 3] = [
    "Start coding immediately and decide on the structure later",
    "Build this part in isolation and ignore the earlier steps",
    "Test only after every feature is finished",
];
const HARD_APPROACH: [&str; 3] = [
    "Hard-code values so the first version ships faster",
    "Leave documentation out since the code explains itself",
    "Treat edge cases as out of scope for now",
];

pub const APPROACH_DISTRACTORS: Tiered<[&str; 3]> = Tiered {
    easy: EASY_APPROACH,
    medium: [EASY_APPROACH[0], MEDIUM_APPROACH[0], MEDIUM_APPROACH[1]],
    hard: [MEDIUM_APPROACH[0], HARD_APPROACH[0], HARD_APPROACH[1]],
};

pub const APPROACH_QUESTION: Tiered<&str> = Tiered {
    easy: "What is a helpful approach for completing this step?",
    medium: "What is the most effective strategy for completing this step?",
    hard: "Which approach follows best practices for this step?",
};

pub const APPROACH_FALLBACK_ANSWER: Tiered<&str> = Tiered {
    easy: "Break it into smaller tasks and complete them one at a time",
    medium: "Plan the architecture first, then implement it incrementally",
    hard: "Consider scalability and maintainability while implementing each part",
};

pub const APPROACH_EXPLANATION: &str =
    "Working in small, verified increments keeps each part of the step understandable.";

pub const FOCUS_QUESTION: &str = "What is the main focus of \"{title}\"?";

pub const FOCUS_FALLBACK_EXPLANATION: &str =
    "\"{title}\" builds a skill the rest of the project depends on.";

pub const PURPOSE_STATEMENT: Tiered<&str> = Tiered {
    easy: "True or false: this step helps you understand {title}.",
    medium: "True or false: completing \"{title}\" contributes to achieving the overall project objectives.",
    hard: "True or false: \"{title}\" is a critical dependency for subsequent implementation phases.",
};

pub const REFLECTION_STATEMENT: Tiered<&str> = Tiered {
    easy: "True or false: completing this step contributes to your understanding of the project.",
    medium: "True or false: this step establishes foundational knowledge for the rest of the project.",
    hard: "True or false: this step is critical for the system architecture decisions that follow.",
};

pub const REFLECTION_EXPLANATION: &str =
    "Every step adds something the finished project relies on.";

pub const BONUS_QUESTION: &str =
    "Which practice matters most when taking \"{title}\" further?";

pub const BONUS_FALLBACK_ANSWER: &str =
    "Validate each component against the project requirements before integrating it";

pub const BONUS_DISTRACTORS: [&str; 3] = [
    "Skip testing to save time",
    "Copy solutions without understanding them",
    "Ignore error handling until something breaks",
];

pub const BONUS_EXPLANATION: &str =
    "Advanced work compounds: validating each piece early keeps later phases stable.";

pub const UNTITLED_STEP: &str = "this step";
