//! The dialogue graph navigator - a state machine over one validated tree.
//!
//! [`Navigator::start`] refuses an invalid tree, so every lookup afterwards
//! runs against a closed graph: node references taken from the tree itself
//! always resolve.

use tracing::debug;

use case_rules::{
    validate_tree, CaseDataError, Character, ChoiceId, DialogueChoice, DialogueNode, DialogueTree,
    EvidenceId, NodeId, TreeId,
};

use crate::inventory::EvidenceInventory;

/// Navigation state for the active tree: the tree plus the current node id.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: DialogueTree,
    current: NodeId,
}

impl Navigator {
    /// Validate the tree and position at its start node.
    pub fn start(tree: DialogueTree) -> Result<Self, CaseDataError> {
        validate_tree(&tree)?;
        let current = tree.start_node.clone();
        debug!(tree = %tree.id, node = %current, "tree entered");
        Ok(Self { tree, current })
    }

    pub fn tree(&self) -> &DialogueTree {
        &self.tree
    }

    pub fn tree_id(&self) -> &TreeId {
        &self.tree.id
    }

    pub fn current_id(&self) -> &NodeId {
        &self.current
    }

    /// The current node. The graph is closed, so this always resolves.
    pub fn current(&self) -> &DialogueNode {
        &self.tree.nodes[&self.current]
    }

    /// The character speaking the current node.
    pub fn speaker(&self) -> &Character {
        &self.tree.characters[&self.current().character_id]
    }

    /// Look up a choice offered by the current node.
    pub fn choice(&self, id: &ChoiceId) -> Option<&DialogueChoice> {
        self.current().choice(id)
    }

    /// Evidence ids a choice demands that the inventory lacks. Empty means
    /// the choice is not gated, or its gate is satisfied.
    pub fn missing_evidence(
        choice: &DialogueChoice,
        inventory: &EvidenceInventory,
    ) -> Vec<EvidenceId> {
        let mut missing = Vec::new();
        if let Some(id) = &choice.requires_evidence {
            if !inventory.has(id) {
                missing.push(id.clone());
            }
        }
        for id in &choice.requires_all {
            if !inventory.has(id) && !missing.contains(id) {
                missing.push(id.clone());
            }
        }
        missing
    }

    /// Move to a node taken from this tree's own transitions.
    pub fn goto(&mut self, node: NodeId) {
        debug_assert!(self.tree.nodes.contains_key(&node));
        debug!(tree = %self.tree.id, node = %node, "moved");
        self.current = node;
    }

    /// Reposition at an arbitrary node (snapshot restore). Returns false and
    /// leaves the position unchanged when the node is not in this tree.
    pub fn set_position(&mut self, node: NodeId) -> bool {
        if self.tree.nodes.contains_key(&node) {
            self.current = node;
            true
        } else {
            false
        }
    }

    /// Whether the current node ends the tree.
    pub fn is_terminal(&self) -> bool {
        self.current().is_terminal()
    }
}
