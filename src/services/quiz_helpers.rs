use rand::{seq::SliceRandom, Rng};

use crate::constants::quiz_text::OPTION_IDS;
use crate::models::domain::QuizOption;

/// Returns a shuffled copy, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Builds one correct option and its distractors, shuffles them, then labels
/// them `a`, `b`, `c`, ... in shuffled order.
pub fn shuffled_options<R: Rng + ?Sized>(
    correct: &str,
    distractors: &[&str],
    rng: &mut R,
) -> Vec<QuizOption> {
    let mut candidates = Vec::with_capacity(distractors.len() + 1);
    candidates.push((correct, true));
    candidates.extend(distractors.iter().map(|d| (*d, false)));

    shuffled(&candidates, rng)
        .into_iter()
        .zip(OPTION_IDS)
        .map(|((text, correct), id)| QuizOption {
            id: id.to_string(),
            text: text.to_string(),
            correct,
        })
        .collect()
}

/// Replaces `{key}` occurrences in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = tpl.to_string();
    for (k, v) in pairs {
        let needle = format!("{{{}}}", k);
        out = out.replace(&needle, v);
    }
    out
}

/// First `max_chars` characters followed by an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}
