// src/generators/validation.rs
//
// Checks are re-derived from the finished string and never trust how the
// candidate was built.
use thiserror::Error;

use crate::core::policy::Policy;
use crate::models::{CharClass, ClassPresence};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password has {actual} characters, at least {required} required")]
    TooShort { actual: usize, required: usize },

    #[error("password uses {actual} character classes, {required} required")]
    MissingClasses { actual: usize, required: usize },

    #[error("password starts with forbidden character")]
    ForbiddenFirstCharacter,

    #[error("password has a same-class run longer than {max_run}")]
    ExcessConsecutiveRun { max_run: usize },
}

/// Map a character to its class. `None` for anything outside the pool.
pub fn classify(ch: char) -> Option<CharClass> {
    CharClass::ALL.iter().copied().find(|class| class.contains(ch))
}

pub fn classes_present(password: &str) -> ClassPresence {
    let mut presence = ClassPresence::default();
    for class in password.chars().filter_map(classify) {
        presence.set(class);
    }
    presence
}

pub fn count_classes_present(password: &str) -> usize {
    classes_present(password).count()
}

/// True as soon as a run of same-class characters grows past `max_run`.
/// Unclassified characters form runs of their own.
pub fn has_excess_consecutive_run(password: &str, max_run: usize) -> bool {
    let mut current: Option<Option<CharClass>> = None;
    let mut run_len = 0usize;

    for class in password.chars().map(classify) {
        if current == Some(class) {
            run_len += 1;
        } else {
            current = Some(class);
            run_len = 1;
        }

        if run_len > max_run {
            return true;
        }
    }

    false
}

/// Check `password` against every rule of `policy`, reporting the first
/// one it breaks.
pub fn validate(password: &str, policy: &Policy) -> Result<(), PolicyViolation> {
    let length = password.chars().count();
    if length < policy.min_length {
        return Err(PolicyViolation::TooShort {
            actual: length,
            required: policy.min_length,
        });
    }

    let classes = count_classes_present(password);
    if classes < policy.min_classes {
        return Err(PolicyViolation::MissingClasses {
            actual: classes,
            required: policy.min_classes,
        });
    }

    match password.chars().next() {
        Some(first) if policy.is_forbidden_first(first) => {
            return Err(PolicyViolation::ForbiddenFirstCharacter);
        }
        _ => {}
    }

    if let Some(max_run) = policy.max_consecutive_run {
        if has_excess_consecutive_run(password, max_run) {
            return Err(PolicyViolation::ExcessConsecutiveRun { max_run });
        }
    }

    Ok(())
}
