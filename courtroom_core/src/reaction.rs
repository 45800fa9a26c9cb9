//! Reaction line selection.
//!
//! Selection among a severity bucket's lines is uniform-random through an
//! injected [`ReactionSource`], so tests can seed or script it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use case_rules::{Character, Severity};

/// Line used when a character defines no reactions for the chosen tier.
pub const FALLBACK_REACTION: &str = "That doesn't seem right...";

/// Source of reaction picks.
pub trait ReactionSource {
    /// Pick an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReactionSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source seeded once; identical seeds reproduce identical
/// pick sequences.
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl ReactionSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Scripted source for tests. Returns the given indices in order, cycling,
/// clamped into range.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always picks the same index.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl ReactionSource for SequenceSource {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.min(len - 1)
    }
}

/// Select a reaction line from `character` for the given severity tier.
pub fn pick_reaction(
    character: &Character,
    severity: Severity,
    source: &mut dyn ReactionSource,
) -> String {
    let lines = character.reactions.for_severity(severity);
    if lines.is_empty() {
        FALLBACK_REACTION.to_owned()
    } else {
        lines[source.pick(lines.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_rules::Personality;

    fn witness() -> Character {
        Character::new("waitress", "The Waitress", Personality::Sarcastic)
            .with_reaction(Severity::Mild, "That makes no sense.")
            .with_reaction(Severity::Mild, "Charlie, no.")
            .with_reaction(Severity::Severe, "Why am I even here?")
    }

    #[test]
    fn test_scripted_picks() {
        let witness = witness();
        let mut source = SequenceSource::new(vec![1, 0]);

        assert_eq!(
            pick_reaction(&witness, Severity::Mild, &mut source),
            "Charlie, no."
        );
        assert_eq!(
            pick_reaction(&witness, Severity::Mild, &mut source),
            "That makes no sense."
        );
    }

    #[test]
    fn test_empty_bucket_falls_back() {
        let witness = witness();
        let mut source = SequenceSource::constant(0);
        assert_eq!(
            pick_reaction(&witness, Severity::Critical, &mut source),
            FALLBACK_REACTION
        );
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = SeededSource::new(42);
        let mut b = SeededSource::new(42);
        for len in [1, 2, 3, 5, 8, 13] {
            assert_eq!(a.pick(len), b.pick(len));
        }
    }

    #[test]
    fn test_thread_rng_stays_in_range() {
        let mut source = ThreadRngSource::new();
        for _ in 0..100 {
            assert!(source.pick(3) < 3);
        }
    }

    #[test]
    fn test_random_pick_is_a_member() {
        let witness = witness();
        let mut source = ThreadRngSource::new();
        let line = pick_reaction(&witness, Severity::Mild, &mut source);
        assert!(witness.reactions.mild.contains(&line));
    }
}
