// src/models.rs
use serde::Serialize;

use crate::core::policy::{DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};

// A named, fixed set of characters a password draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Punctuation,
}

impl CharClass {
    /// All classes, in reporting order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Punctuation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
            CharClass::Digits => "Digits",
            CharClass::Punctuation => "Punctuation",
        }
    }

    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Punctuation => PUNCTUATION,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars().contains(ch)
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Which classes occur at least once in a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassPresence {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub punctuation: bool,
}

impl ClassPresence {
    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Punctuation => self.punctuation,
        }
    }

    pub fn set(&mut self, class: CharClass) {
        match class {
            CharClass::Uppercase => self.uppercase = true,
            CharClass::Lowercase => self.lowercase = true,
            CharClass::Digits => self.digits = true,
            CharClass::Punctuation => self.punctuation = true,
        }
    }

    /// Presence flags paired with their class, in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (CharClass, bool)> + '_ {
        CharClass::ALL.iter().map(move |class| (*class, self.get(*class)))
    }

    pub fn count(&self) -> usize {
        self.iter().filter(|(_, present)| *present).count()
    }
}

// What happened when we tried to put the password on the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClipboardOutcome {
    Copied { mechanism: String },
    Failed { reason: String },
    Unsupported { platform: String },
    Skipped,
}

impl ClipboardOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ClipboardOutcome::Copied { .. })
    }
}

// Summary of a single generation, printed as text or JSON
#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    pub password: String,
    pub length: usize,
    pub classes: ClassPresence,
    pub classes_present: usize,
    pub first_char_allowed: bool,
    pub max_consecutive_run: Option<usize>,
    pub consecutive_run_ok: bool,
    pub entropy_bits: f64,
    pub clipboard: ClipboardOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sets_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in CharClass::ALL.iter().skip(i + 1) {
                assert!(
                    !a.chars().chars().any(|c| b.contains(c)),
                    "{} and {} share characters",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn presence_count_tracks_set_flags() {
        let mut presence = ClassPresence::default();
        assert_eq!(presence.count(), 0);

        presence.set(CharClass::Digits);
        presence.set(CharClass::Digits);
        presence.set(CharClass::Punctuation);

        assert_eq!(presence.count(), 2);
        assert!(presence.get(CharClass::Digits));
        assert!(!presence.get(CharClass::Uppercase));
    }

    #[test]
    fn clipboard_outcome_serializes_with_status_tag() {
        let outcome = ClipboardOutcome::Copied { mechanism: "xclip".to_string() };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "copied");
        assert_eq!(json["mechanism"], "xclip");
        assert!(outcome.is_success());
        assert!(!ClipboardOutcome::Skipped.is_success());
    }
}
