//! Character definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CharacterId;

/// Emotion tags used by dialogue nodes to select a character sprite.
///
/// The set is closed over every tag appearing in case data. A character's
/// sprite map does not have to cover all of them; display resolution falls
/// back to [`Emotion::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Neutral,
    Happy,
    Angry,
    Confused,
    Thinking,
    Objection,
    Smug,
    Defeated,
    Scheming,
    Sarcastic,
    Serious,
    Shocked,
}

impl Default for Emotion {
    fn default() -> Self {
        Emotion::Neutral
    }
}

/// Broad personality tags. Carried for future behavior branching; no engine
/// logic reads them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Chaotic,
    Serious,
    Sarcastic,
    Nervous,
    Arrogant,
    Narcissistic,
    Eccentric,
    Unhinged,
}

/// Severity tiers for wrong-evidence reactions, driven by the player's
/// remaining confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Severe,
    Critical,
}

/// Reaction lines a character delivers when the player presents the wrong
/// evidence, one ordered list per severity tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReactionSet {
    pub mild: Vec<String>,
    pub severe: Vec<String>,
    pub critical: Vec<String>,
}

impl ReactionSet {
    /// The reaction lines for a severity tier.
    pub fn for_severity(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Mild => &self.mild,
            Severity::Severe => &self.severe,
            Severity::Critical => &self.critical,
        }
    }

    fn for_severity_mut(&mut self, severity: Severity) -> &mut Vec<String> {
        match severity {
            Severity::Mild => &mut self.mild,
            Severity::Severe => &mut self.severe,
            Severity::Critical => &mut self.critical,
        }
    }
}

/// A courtroom character. Immutable once a case is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub title: Option<String>,

    /// Emotion tag -> sprite reference. Presentation data, carried through
    /// but never interpreted by the engine.
    pub sprites: HashMap<Emotion, String>,

    pub personality: Personality,

    /// Flavor lines delivered on wrong-evidence presentations.
    pub reactions: ReactionSet,

    #[serde(default)]
    pub catchphrases: Vec<String>,
}

impl Character {
    /// Create a new character with the given id, display name, and
    /// personality.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        personality: Personality,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            sprites: HashMap::new(),
            personality,
            reactions: ReactionSet::default(),
            catchphrases: Vec::new(),
        }
    }

    /// Set the character's title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Register a sprite reference for an emotion tag.
    pub fn with_sprite(mut self, emotion: Emotion, path: impl Into<String>) -> Self {
        self.sprites.insert(emotion, path.into());
        self
    }

    /// Append a wrong-evidence reaction line to a severity tier.
    pub fn with_reaction(mut self, severity: Severity, line: impl Into<String>) -> Self {
        self.reactions.for_severity_mut(severity).push(line.into());
        self
    }

    /// Append a catchphrase.
    pub fn with_catchphrase(mut self, line: impl Into<String>) -> Self {
        self.catchphrases.push(line.into());
        self
    }

    /// Resolve the sprite reference for an emotion tag, substituting the
    /// neutral sprite when the tag has no entry.
    pub fn sprite_for(&self, emotion: Emotion) -> Option<&str> {
        self.sprites
            .get(&emotion)
            .or_else(|| self.sprites.get(&Emotion::Neutral))
            .map(String::as_str)
    }
}
