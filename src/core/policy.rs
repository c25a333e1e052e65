// src/core/policy.rs
use crate::models::CharClass;

// Character class tables
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!@$&()#^*";

/// Characters a password may never start with. Includes a few that the pool
/// never produces.
pub const FORBIDDEN_FIRST_CHARS: &str = "!()[]{}*.#$";

/// Longest password the CLI and config accept. Much longer candidates
/// almost never pass the run cap.
pub const MAX_PASSWORD_LENGTH: usize = 256;

/// The fixed rule set a generated password has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub min_length: usize,
    pub min_classes: usize,
    pub forbidden_first: &'static str,
    pub max_consecutive_run: Option<usize>,
}

impl Policy {
    /// Length, class and first-character rules only.
    pub const BASIC: Policy = Policy {
        min_length: 20,
        min_classes: 4,
        forbidden_first: FORBIDDEN_FIRST_CHARS,
        max_consecutive_run: None,
    };

    /// The policy the program ships with: basic rules plus a cap of three on
    /// same-class runs.
    pub const STANDARD: Policy = Policy {
        max_consecutive_run: Some(3),
        ..Policy::BASIC
    };

    pub fn is_forbidden_first(&self, ch: char) -> bool {
        self.forbidden_first.contains(ch)
    }

    // Requested lengths below the minimum are raised, never rejected
    pub fn clamp_length(&self, length: usize) -> usize {
        length.max(self.min_length)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::STANDARD
    }
}

/// Every class concatenated in class order.
pub fn full_pool() -> Vec<char> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.chars().chars())
        .collect()
}
