//! The confidence economy - the player's bounded, health-like resource.
//!
//! Every mutation goes through [`Confidence::apply`], which clamps to
//! `[0, max]`. Reaching zero is the "case dismissed" signal; the engine only
//! exposes it, the caller decides whether to halt.

use serde::{Deserialize, Serialize};

use case_rules::Severity;

/// Default confidence ceiling.
pub const DEFAULT_MAX_CONFIDENCE: i32 = 100;

/// Heal for presenting evidence the current node accepts.
pub const CORRECT_EVIDENCE_HEAL: i32 = 10;

/// Default penalty for presenting evidence the current node rejects.
/// Individual nodes may override the magnitude.
pub const WRONG_EVIDENCE_PENALTY: i32 = 15;

/// Extra heal for a choice carrying the logic bonus. Stacks with the
/// choice's own delta.
pub const LOGIC_BONUS_HEAL: i32 = 15;

/// Default penalty for a negatively received choice with no stated delta.
pub const NEGATIVE_REACTION_PENALTY: i32 = 10;

/// Default heal for a positively received choice with no stated delta.
pub const POSITIVE_REACTION_HEAL: i32 = 5;

/// Confidence above this is a mild stumble.
const MILD_FLOOR: i32 = 70;

/// Confidence above this (and at most [`MILD_FLOOR`]) is severe; at or
/// below, critical.
const SEVERE_FLOOR: i32 = 30;

/// The player's confidence meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    current: i32,
    max: i32,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::new()
    }
}

impl Confidence {
    /// A full meter at the default ceiling.
    pub fn new() -> Self {
        Self::with_max(DEFAULT_MAX_CONFIDENCE)
    }

    /// A full meter with a custom ceiling.
    pub fn with_max(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    /// Rebuild a meter from persisted values, clamping into range.
    pub fn from_parts(current: i32, max: i32) -> Self {
        let max = max.max(1);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Apply a signed delta, clamped to `[0, max]`. Returns the new value.
    pub fn apply(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(0, self.max);
        self.current
    }

    /// Whether the case-dismissed condition has been reached.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// The reaction severity tier for the current value.
    pub fn severity(&self) -> Severity {
        if self.current > MILD_FLOOR {
            Severity::Mild
        } else if self.current > SEVERE_FLOOR {
            Severity::Severe
        } else {
            Severity::Critical
        }
    }
}
