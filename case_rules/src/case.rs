//! Cases - the top-level content unit: dialogue trees, evidence, characters,
//! and combination recipes.

use serde::{Deserialize, Serialize};

use crate::dialogue::DialogueTree;
use crate::entities::{CaseId, Character, CombinationRecipe, Evidence, TreeId};

/// The two story phases of a case. Each holds an ordered tree list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CasePhases {
    pub investigation: Vec<DialogueTree>,
    pub trial: Vec<DialogueTree>,
}

impl CasePhases {
    /// The tree a fresh session opens on: the first investigation tree,
    /// falling back to the first trial tree.
    pub fn opening_tree(&self) -> Option<&DialogueTree> {
        self.investigation.first().or_else(|| self.trial.first())
    }

    /// Iterate every tree across both phases, investigation first.
    pub fn all_trees(&self) -> impl Iterator<Item = &DialogueTree> {
        self.investigation.iter().chain(self.trial.iter())
    }

    /// Find a tree by id in either phase.
    pub fn find_tree(&self, id: &TreeId) -> Option<&DialogueTree> {
        self.all_trees().find(|tree| &tree.id == id)
    }
}

/// A complete case: story trees plus the full evidence and character rosters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub description: String,
    pub phases: CasePhases,
    pub evidence: Vec<Evidence>,
    pub characters: Vec<Character>,

    /// The case's combination recipe set; empty when the case defines none.
    #[serde(default)]
    pub combinations: Vec<CombinationRecipe>,

    /// Human-readable win descriptions shown to the player. Never
    /// machine-checked.
    #[serde(default)]
    pub victory_conditions: Vec<String>,
}

impl Case {
    pub fn new(
        id: impl Into<CaseId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            phases: CasePhases::default(),
            evidence: Vec::new(),
            characters: Vec::new(),
            combinations: Vec::new(),
            victory_conditions: Vec::new(),
        }
    }

    pub fn with_investigation_tree(mut self, tree: DialogueTree) -> Self {
        self.phases.investigation.push(tree);
        self
    }

    pub fn with_trial_tree(mut self, tree: DialogueTree) -> Self {
        self.phases.trial.push(tree);
        self
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Evidence>) -> Self {
        self.evidence.extend(evidence);
        self
    }

    pub fn with_characters(mut self, characters: impl IntoIterator<Item = Character>) -> Self {
        self.characters.extend(characters);
        self
    }

    pub fn with_combinations(
        mut self,
        recipes: impl IntoIterator<Item = CombinationRecipe>,
    ) -> Self {
        self.combinations.extend(recipes);
        self
    }

    pub fn with_victory_conditions<S: Into<String>>(
        mut self,
        conditions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.victory_conditions
            .extend(conditions.into_iter().map(Into::into));
        self
    }
}
