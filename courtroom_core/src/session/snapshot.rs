//! The session persistence boundary.
//!
//! Only the light, player-specific fields are persisted. Tree graphs and
//! character rosters are reloaded from the static case catalog by id, which
//! keeps snapshots small and tolerant of case-content edits.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use case_rules::{Case, CaseDataError, CaseId, Evidence, NodeId, TreeId};

use crate::confidence::Confidence;
use crate::inventory::EvidenceInventory;
use crate::navigator::Navigator;
use crate::session::Session;

/// The serializable view of a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_tree_id: Option<TreeId>,
    pub current_node_id: Option<NodeId>,
    pub evidence: Vec<Evidence>,
    pub unlocked_evidence: BTreeSet<String>,
    pub confidence: i32,
    pub max_confidence: i32,
    pub flags: BTreeMap<String, bool>,
    pub completed_trees: BTreeSet<TreeId>,
    pub case_id: Option<CaseId>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Why a snapshot could not be rehydrated against the current catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("case {0} is not in the catalog")]
    UnknownCase(CaseId),

    #[error("tree {tree} is not part of case {case}")]
    UnknownTree { tree: TreeId, case: CaseId },

    #[error("node {node} is not part of tree {tree}")]
    UnknownNode { node: NodeId, tree: TreeId },

    #[error(transparent)]
    InvalidContent(#[from] CaseDataError),
}

impl Session {
    /// Capture the persistable fields.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_tree_id: self.navigator.as_ref().map(|nav| nav.tree_id().clone()),
            current_node_id: self.navigator.as_ref().map(|nav| nav.current_id().clone()),
            evidence: self.inventory.items().to_vec(),
            unlocked_evidence: self.unlocked.clone(),
            confidence: self.confidence.current(),
            max_confidence: self.confidence.max(),
            flags: self.flags.clone(),
            completed_trees: self.completed.clone(),
            case_id: self.case_id.clone(),
        }
    }

    /// Rebuild a session from a snapshot, reloading heavy objects from the
    /// catalog by id. The restored session uses the default reaction source.
    pub fn restore(snapshot: SessionSnapshot, catalog: &[Case]) -> Result<Session, SnapshotError> {
        let mut session = Session::new();
        session.confidence = Confidence::from_parts(snapshot.confidence, snapshot.max_confidence);
        session.inventory = EvidenceInventory::from_items(snapshot.evidence);
        session.unlocked = snapshot.unlocked_evidence;
        session.flags = snapshot.flags;
        session.completed = snapshot.completed_trees;

        let case = match snapshot.case_id {
            Some(case_id) => {
                let case = catalog
                    .iter()
                    .find(|case| case.id == case_id)
                    .ok_or_else(|| SnapshotError::UnknownCase(case_id.clone()))?;
                session.case_id = Some(case_id);
                session.recipes = case.combinations.clone();
                Some(case)
            }
            None => None,
        };

        if let (Some(case), Some(tree_id)) = (case, snapshot.current_tree_id) {
            let tree = case
                .phases
                .find_tree(&tree_id)
                .ok_or_else(|| SnapshotError::UnknownTree {
                    tree: tree_id.clone(),
                    case: case.id.clone(),
                })?;
            let mut navigator = Navigator::start(tree.clone())?;
            if let Some(node_id) = snapshot.current_node_id {
                if !navigator.set_position(node_id.clone()) {
                    return Err(SnapshotError::UnknownNode {
                        node: node_id,
                        tree: tree_id,
                    });
                }
            }
            session.navigator = Some(navigator);
        }

        Ok(session)
    }
}
