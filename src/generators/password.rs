// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand_core::{CryptoRng, RngCore};

use crate::core::policy::{full_pool, Policy};
use crate::generators::validation;
use crate::models::CharClass;

/// Rejection-sampling password generator.
///
/// Candidates are built from one character of every sampled class plus
/// uniform draws from the full pool, shuffled, and then checked against the
/// policy from scratch. Anything that fails is thrown away and rebuilt.
/// There is no retry cap.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
    policy: Policy,
    classes: Vec<(CharClass, Vec<char>)>,
    pool: Vec<char>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator::with_rng(OsRng, Policy::STANDARD)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PasswordGenerator<R> {
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R, policy: Policy) -> Self {
        let classes = CharClass::ALL
            .iter()
            .map(|class| (*class, class.chars().chars().collect()))
            .collect();

        PasswordGenerator {
            rng,
            policy,
            classes,
            pool: full_pool(),
        }
    }

    /// Generate a password of `length` characters, raised to the policy
    /// minimum if shorter.
    pub fn generate(&mut self, length: usize) -> String {
        let length = self.policy.clamp_length(length);
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;
            let candidate = self.build_candidate(length);

            match validation::validate(&candidate, &self.policy) {
                Ok(()) => {
                    log::debug!(
                        "Generated {}-character password after {} attempt(s)",
                        length,
                        attempts
                    );
                    return candidate;
                }
                Err(violation) => {
                    log::trace!("Rejected candidate {}: {}", attempts, violation);
                }
            }
        }
    }

    fn build_candidate(&mut self, length: usize) -> String {
        let mut buffer: Vec<char> = Vec::with_capacity(length);

        // With four classes and four required this is only a permutation,
        // but a smaller requirement would make it a real sample.
        let selected: Vec<&(CharClass, Vec<char>)> = self
            .classes
            .choose_multiple(&mut self.rng, self.policy.min_classes)
            .collect();

        for (_, chars) in selected {
            if let Some(ch) = chars.choose(&mut self.rng) {
                buffer.push(*ch);
            }
        }

        let dist = Uniform::from(0..self.pool.len());
        while buffer.len() < length {
            buffer.push(self.pool[dist.sample(&mut self.rng)]);
        }

        buffer.shuffle(&mut self.rng);
        buffer.into_iter().collect()
    }
}

/// Generate a password under the standard policy using the OS random source.
pub fn generate_password(length: usize) -> String {
    PasswordGenerator::new().generate(length)
}

/// Upper bound on the entropy of a password of `length` characters drawn
/// from the full pool.
pub fn estimate_entropy_bits(length: usize) -> f64 {
    length as f64 * (full_pool().len() as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::FORBIDDEN_FIRST_CHARS;
    use crate::generators::validation::{count_classes_present, has_excess_consecutive_run};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed), Policy::STANDARD)
    }

    #[test]
    fn generated_passwords_satisfy_policy() {
        let mut generator = seeded(7);
        for _ in 0..200 {
            let password = generator.generate(20);
            assert_eq!(password.chars().count(), 20);
            assert_eq!(count_classes_present(&password), 4, "{}", password);

            let first = password.chars().next().unwrap();
            assert!(!FORBIDDEN_FIRST_CHARS.contains(first), "{}", password);
            assert!(!has_excess_consecutive_run(&password, 3), "{}", password);
        }
    }

    #[test]
    fn requested_length_is_honoured() {
        let mut generator = seeded(11);
        for length in [20, 21, 32, 64, 128] {
            assert_eq!(generator.generate(length).chars().count(), length);
        }
    }

    #[test]
    fn short_lengths_are_clamped() {
        let mut generator = seeded(3);
        assert_eq!(generator.generate(5).chars().count(), 20);
        assert_eq!(generator.generate(0).chars().count(), 20);
        assert_eq!(generate_password(5).chars().count(), 20);
    }

    #[test]
    fn only_pool_characters_are_used() {
        let pool = full_pool();
        let mut generator = seeded(99);
        let password = generator.generate(256);
        assert!(password.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn same_seed_same_password() {
        assert_eq!(seeded(42).generate(24), seeded(42).generate(24));
        assert_ne!(seeded(42).generate(24), seeded(43).generate(24));
    }

    #[test]
    fn os_random_passwords_differ() {
        let mut generator = PasswordGenerator::new();
        let a = generator.generate(20);
        let b = generator.generate(20);
        let c = generate_password(20);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn basic_policy_still_enforces_classes_and_first_char() {
        let mut generator =
            PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(5), Policy::BASIC);
        for _ in 0..100 {
            let password = generator.generate(20);
            assert_eq!(count_classes_present(&password), 4);
            assert!(!FORBIDDEN_FIRST_CHARS.contains(password.chars().next().unwrap()));
        }
    }

    #[test]
    fn entropy_scales_with_length() {
        let twenty = estimate_entropy_bits(20);
        assert!((twenty - 20.0 * 71f64.log2()).abs() < 1e-9);
        assert!(estimate_entropy_bits(40) > twenty);
    }
}
