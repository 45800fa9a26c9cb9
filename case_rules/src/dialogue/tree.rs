//! Dialogue trees - closed graphs of nodes plus the characters who speak
//! them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DialogueNode;
use crate::entities::{Character, CharacterId, EvidenceId, NodeId, TreeId};

/// A directed dialogue graph. All node references must resolve within
/// `nodes`; [`crate::validation::validate_tree`] enforces this at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTree {
    pub id: TreeId,
    pub title: String,
    pub description: String,
    pub start_node: NodeId,
    pub nodes: HashMap<NodeId, DialogueNode>,
    pub characters: HashMap<CharacterId, Character>,

    /// Evidence the author considers necessary to finish this tree.
    /// Informational only; never machine-checked.
    #[serde(default)]
    pub required_evidence: Vec<EvidenceId>,
}

impl DialogueTree {
    pub fn new(
        id: impl Into<TreeId>,
        title: impl Into<String>,
        description: impl Into<String>,
        start_node: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            start_node: start_node.into(),
            nodes: HashMap::new(),
            characters: HashMap::new(),
            required_evidence: Vec::new(),
        }
    }

    /// Insert a node, keyed by its own id.
    pub fn with_node(mut self, node: DialogueNode) -> Self {
        self.nodes.insert(node.id.clone(), node);
        self
    }

    /// Insert every node from an iterator.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = DialogueNode>) -> Self {
        for node in nodes {
            self.nodes.insert(node.id.clone(), node);
        }
        self
    }

    /// Insert a character, keyed by its own id.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id.clone(), character);
        self
    }

    /// Insert every character from an iterator.
    pub fn with_characters(mut self, characters: impl IntoIterator<Item = Character>) -> Self {
        for character in characters {
            self.characters.insert(character.id.clone(), character);
        }
        self
    }

    pub fn with_required_evidence<I: Into<EvidenceId>>(
        mut self,
        evidence: impl IntoIterator<Item = I>,
    ) -> Self {
        self.required_evidence
            .extend(evidence.into_iter().map(Into::into));
        self
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&DialogueNode> {
        self.nodes.get(id)
    }

    /// Get a character by id.
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueChoice;
    use crate::entities::{Emotion, Personality};

    #[test]
    fn test_nodes_keyed_by_id() {
        let tree = DialogueTree::new("bird-seed-trial", "Trial", "The trial.", "case-intro")
            .with_node(
                DialogueNode::new("case-intro", "charlie", "Your Honor...", Emotion::Thinking)
                    .with_choice(DialogueChoice::new("go", "Continue", "wrap-up")),
            )
            .with_node(DialogueNode::new(
                "wrap-up",
                "judge",
                "Dismissed.",
                Emotion::Confused,
            ))
            .with_character(Character::new("charlie", "Charlie Kelly", Personality::Chaotic))
            .with_character(Character::new("judge", "Judge", Personality::Serious));

        assert_eq!(tree.nodes.len(), 2);
        let intro = tree.node(&NodeId::new("case-intro")).unwrap();
        assert_eq!(intro.character_id, CharacterId::new("charlie"));
        assert!(tree.character(&CharacterId::new("judge")).is_some());
    }
}
