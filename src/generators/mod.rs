// src/generators/mod.rs
pub mod password;
pub mod validation;

pub use password::{estimate_entropy_bits, generate_password, PasswordGenerator};
pub use validation::{
    classes_present, classify, count_classes_present, has_excess_consecutive_run, validate,
    PolicyViolation,
};
