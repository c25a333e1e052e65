//! Policy-checked random password generation.
//!
//! Passwords are drawn from the OS random source and rebuilt until they have
//! at least 20 characters and all four character classes. They must also
//! avoid a forbidden first character and have no same-class run longer than
//! three.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod system;
pub mod utils;

pub use crate::core::policy::Policy;
pub use generators::{
    classes_present, classify, count_classes_present, estimate_entropy_bits, generate_password,
    has_excess_consecutive_run, validate, PasswordGenerator, PolicyViolation,
};
pub use models::{CharClass, ClassPresence, ClipboardOutcome, PasswordReport};
pub use system::copy_to_clipboard;
