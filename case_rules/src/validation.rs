//! Load-time validation for case content.
//!
//! A tree is validated once, when it is registered with a session; traversal
//! may then assume a closed graph. Broken content is rejected here with an
//! error naming the offending tree and reference, never mid-traversal.

use thiserror::Error;
use tracing::warn;

use crate::case::Case;
use crate::dialogue::{DialogueTree, NodeKind};
use crate::entities::{CaseId, CharacterId, ChoiceId, NodeId, TreeId};

/// Content/configuration errors. Fatal at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseDataError {
    #[error("tree {tree}: start node {node} is not defined")]
    MissingStartNode { tree: TreeId, node: NodeId },

    #[error("tree {tree}: node {node} is spoken by unknown character {character}")]
    UnknownCharacter {
        tree: TreeId,
        node: NodeId,
        character: CharacterId,
    },

    #[error("tree {tree}: node {node} choice {choice} targets undefined node {target}")]
    DanglingChoiceTarget {
        tree: TreeId,
        node: NodeId,
        choice: ChoiceId,
        target: NodeId,
    },

    #[error("tree {tree}: node {node} auto-advances to undefined node {target}")]
    DanglingAdvanceTarget {
        tree: TreeId,
        node: NodeId,
        target: NodeId,
    },

    #[error("tree {tree}: node {node} resolves correct presentations to undefined node {target}")]
    DanglingPresentationTarget {
        tree: TreeId,
        node: NodeId,
        target: NodeId,
    },

    #[error("case {case}: neither phase defines a dialogue tree")]
    EmptyCase { case: CaseId },
}

/// Check that a tree's graph is closed: the start node, every choice target,
/// every auto-advance target, and every presentation target resolve in the
/// node map, and every node's speaker resolves in the character map.
///
/// Emotion tags missing from a speaker's sprite map are not errors; display
/// substitutes the neutral sprite. They are logged so authors can spot them.
pub fn validate_tree(tree: &DialogueTree) -> Result<(), CaseDataError> {
    if !tree.nodes.contains_key(&tree.start_node) {
        return Err(CaseDataError::MissingStartNode {
            tree: tree.id.clone(),
            node: tree.start_node.clone(),
        });
    }

    for node in tree.nodes.values() {
        let character = tree.characters.get(&node.character_id).ok_or_else(|| {
            CaseDataError::UnknownCharacter {
                tree: tree.id.clone(),
                node: node.id.clone(),
                character: node.character_id.clone(),
            }
        })?;

        if !character.sprites.contains_key(&node.emotion) {
            warn!(
                tree = %tree.id,
                node = %node.id,
                character = %character.id,
                emotion = ?node.emotion,
                "emotion has no sprite; neutral will be substituted"
            );
        }

        match &node.kind {
            NodeKind::Choices(choices) => {
                for choice in choices {
                    if !tree.nodes.contains_key(&choice.next_node) {
                        return Err(CaseDataError::DanglingChoiceTarget {
                            tree: tree.id.clone(),
                            node: node.id.clone(),
                            choice: choice.id.clone(),
                            target: choice.next_node.clone(),
                        });
                    }
                }
            }
            NodeKind::Presentation(prompt) => {
                if !tree.nodes.contains_key(&prompt.on_correct) {
                    return Err(CaseDataError::DanglingPresentationTarget {
                        tree: tree.id.clone(),
                        node: node.id.clone(),
                        target: prompt.on_correct.clone(),
                    });
                }
            }
            NodeKind::Advance(target) => {
                if !tree.nodes.contains_key(target) {
                    return Err(CaseDataError::DanglingAdvanceTarget {
                        tree: tree.id.clone(),
                        node: node.id.clone(),
                        target: target.clone(),
                    });
                }
            }
            NodeKind::Terminal => {}
        }
    }

    Ok(())
}

/// Validate every tree in both phases and reject a case with no trees at
/// all.
pub fn validate_case(case: &Case) -> Result<(), CaseDataError> {
    if case.phases.investigation.is_empty() && case.phases.trial.is_empty() {
        return Err(CaseDataError::EmptyCase {
            case: case.id.clone(),
        });
    }

    for tree in case.phases.all_trees() {
        validate_tree(tree)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{DialogueChoice, DialogueNode, EvidencePrompt};
    use crate::entities::{Character, Emotion, Personality};

    fn speaker() -> Character {
        Character::new("charlie", "Charlie Kelly", Personality::Chaotic)
            .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
    }

    fn closed_tree() -> DialogueTree {
        DialogueTree::new("trial", "Trial", "A trial.", "intro")
            .with_node(
                DialogueNode::new("intro", "charlie", "Your Honor...", Emotion::Neutral)
                    .with_choice(DialogueChoice::new("rest", "Rest the case", "ending")),
            )
            .with_node(DialogueNode::new(
                "ending",
                "charlie",
                "I rest my case.",
                Emotion::Neutral,
            ))
            .with_character(speaker())
    }

    #[test]
    fn test_closed_tree_passes() {
        assert!(validate_tree(&closed_tree()).is_ok());
    }

    #[test]
    fn test_missing_start_node() {
        let tree = DialogueTree::new("trial", "Trial", "A trial.", "nowhere")
            .with_node(DialogueNode::new("intro", "charlie", "...", Emotion::Neutral))
            .with_character(speaker());

        assert_eq!(
            validate_tree(&tree),
            Err(CaseDataError::MissingStartNode {
                tree: TreeId::new("trial"),
                node: NodeId::new("nowhere"),
            })
        );
    }

    #[test]
    fn test_dangling_choice_target() {
        let tree = DialogueTree::new("trial", "Trial", "A trial.", "intro")
            .with_node(
                DialogueNode::new("intro", "charlie", "...", Emotion::Neutral)
                    .with_choice(DialogueChoice::new("go", "Go", "missing-node")),
            )
            .with_character(speaker());

        assert!(matches!(
            validate_tree(&tree),
            Err(CaseDataError::DanglingChoiceTarget { target, .. })
                if target == NodeId::new("missing-node")
        ));
    }

    #[test]
    fn test_dangling_presentation_target() {
        let tree = DialogueTree::new("trial", "Trial", "A trial.", "demand")
            .with_node(
                DialogueNode::new("demand", "charlie", "Present it!", Emotion::Objection)
                    .with_presentation(EvidencePrompt::new(["pigeon-nest"], "missing-node")),
            )
            .with_character(speaker());

        assert!(matches!(
            validate_tree(&tree),
            Err(CaseDataError::DanglingPresentationTarget { .. })
        ));
    }

    #[test]
    fn test_unknown_character() {
        let tree = DialogueTree::new("trial", "Trial", "A trial.", "intro")
            .with_node(DialogueNode::new("intro", "dennis", "...", Emotion::Smug))
            .with_character(speaker());

        assert!(matches!(
            validate_tree(&tree),
            Err(CaseDataError::UnknownCharacter { character, .. })
                if character == CharacterId::new("dennis")
        ));
    }

    #[test]
    fn test_case_with_no_trees_is_rejected() {
        let case = Case::new("empty-case", "Empty", "Nothing here.");
        assert_eq!(
            validate_case(&case),
            Err(CaseDataError::EmptyCase {
                case: CaseId::new("empty-case"),
            })
        );
    }

    #[test]
    fn test_case_with_only_trial_phase_passes() {
        let case = Case::new("trial-only", "Trial Only", "Straight to court.")
            .with_trial_tree(closed_tree());
        assert!(validate_case(&case).is_ok());
    }
}
