//! Evidence items and combination recipes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::EvidenceId;

/// Broad evidence categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    Physical,
    Testimony,
    Document,
    Photo,
}

/// How sound a piece of courtroom reasoning actually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicRating {
    Nonsensical,
    Bizarre,
    AccidentallyBrilliant,
    PureGenius,
}

/// Free-form evidence metadata. Known keys are modeled explicitly; anything
/// case-specific rides in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidenceMetadata {
    pub location: Option<String>,
    pub date_found: Option<String>,
    pub found_by: Option<String>,

    /// The in-universe bird-law angle on this item.
    pub bird_law_relevance: Option<String>,

    pub logic_rating: Option<LogicRating>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A piece of evidence, either seeded from case data or synthesized by a
/// successful combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: EvidenceCategory,

    /// Node/topic identifiers this item bears on. Informational.
    pub relevant_to: Vec<String>,

    /// Authoring hint listing partners this item is meant to combine with.
    #[serde(default)]
    pub combinable_with: Vec<EvidenceId>,

    /// True when this item was synthesized from two others.
    #[serde(default)]
    pub is_combo: bool,

    /// The two source items, present only on synthesized evidence.
    pub combo_components: Option<(EvidenceId, EvidenceId)>,

    /// Evidence or node ids unlocked by presenting this item.
    #[serde(default)]
    pub unlocks: Vec<String>,

    pub metadata: Option<EvidenceMetadata>,
}

impl Evidence {
    /// Create a new evidence item.
    pub fn new(
        id: impl Into<EvidenceId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: EvidenceCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: String::new(),
            category,
            relevant_to: Vec::new(),
            combinable_with: Vec::new(),
            is_combo: false,
            combo_components: None,
            unlocks: Vec::new(),
            metadata: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Mark the topics this item is relevant to.
    pub fn relevant_to<S: Into<String>>(mut self, topics: impl IntoIterator<Item = S>) -> Self {
        self.relevant_to.extend(topics.into_iter().map(Into::into));
        self
    }

    /// Hint at combination partners.
    pub fn combinable_with<I: Into<EvidenceId>>(
        mut self,
        partners: impl IntoIterator<Item = I>,
    ) -> Self {
        self.combinable_with
            .extend(partners.into_iter().map(Into::into));
        self
    }

    /// Mark ids unlocked when this item is presented.
    pub fn with_unlocks<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.unlocks.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: EvidenceMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Mark this item as the product of combining `a` and `b`.
    pub fn as_combo_of(mut self, a: EvidenceId, b: EvidenceId) -> Self {
        self.is_combo = true;
        self.combo_components = Some((a, b));
        self
    }
}

/// How obvious a combination is to spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboDifficulty {
    Easy,
    Medium,
    Hard,
    /// The special tier: pairings only one kind of mind would attempt.
    CharlieLogic,
}

/// A static rule pairing two evidence ids into a derived item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationRecipe {
    pub id: String,

    /// The two input ids. The pair is unordered: lookups match either way.
    pub evidence: (EvidenceId, EvidenceId),

    pub result_id: EvidenceId,

    /// The narrative justification for why the pairing works.
    pub justification: String,

    pub difficulty: ComboDifficulty,
}

impl CombinationRecipe {
    pub fn new(
        id: impl Into<String>,
        a: impl Into<EvidenceId>,
        b: impl Into<EvidenceId>,
        result_id: impl Into<EvidenceId>,
        justification: impl Into<String>,
        difficulty: ComboDifficulty,
    ) -> Self {
        Self {
            id: id.into(),
            evidence: (a.into(), b.into()),
            result_id: result_id.into(),
            justification: justification.into(),
            difficulty,
        }
    }

    /// Whether this recipe covers the unordered pair `{x, y}`.
    pub fn matches_pair(&self, x: &EvidenceId, y: &EvidenceId) -> bool {
        let (a, b) = &self.evidence;
        (a == x && b == y) || (a == y && b == x)
    }
}
