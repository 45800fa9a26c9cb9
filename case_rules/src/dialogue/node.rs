//! Dialogue nodes and player choices.

use serde::{Deserialize, Serialize};

use crate::entities::{CharacterId, ChoiceId, Emotion, EvidenceId, NodeId};

/// How the rest of the room reads a choice. Supplies a default confidence
/// delta when the choice states none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceReaction {
    Positive,
    Negative,
    Neutral,
    Confused,
    Impressed,
    Outraged,
}

/// A player-selectable transition out of a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueChoice {
    pub id: ChoiceId,
    pub text: String,
    pub next_node: NodeId,

    /// Single evidence item the player must hold to take this choice.
    pub requires_evidence: Option<EvidenceId>,

    /// Multi-evidence requirement; every listed id must be held.
    #[serde(default)]
    pub requires_all: Vec<EvidenceId>,

    pub reaction: Option<ChoiceReaction>,

    /// Ids unlocked by taking this choice.
    #[serde(default)]
    pub unlocks: Vec<String>,

    /// Signed confidence delta. Overrides the reaction default when set.
    pub health_delta: Option<i32>,

    /// Absurd reasoning that somehow lands; grants a large fixed confidence
    /// boost on top of any stated delta.
    #[serde(default)]
    pub logic_bonus: bool,
}

impl DialogueChoice {
    pub fn new(
        id: impl Into<ChoiceId>,
        text: impl Into<String>,
        next_node: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            next_node: next_node.into(),
            requires_evidence: None,
            requires_all: Vec::new(),
            reaction: None,
            unlocks: Vec::new(),
            health_delta: None,
            logic_bonus: false,
        }
    }

    /// Gate this choice behind a single evidence item.
    pub fn requires(mut self, evidence: impl Into<EvidenceId>) -> Self {
        self.requires_evidence = Some(evidence.into());
        self
    }

    /// Gate this choice behind every listed evidence item.
    pub fn requires_all<I: Into<EvidenceId>>(
        mut self,
        evidence: impl IntoIterator<Item = I>,
    ) -> Self {
        self.requires_all.extend(evidence.into_iter().map(Into::into));
        self
    }

    pub fn with_reaction(mut self, reaction: ChoiceReaction) -> Self {
        self.reaction = Some(reaction);
        self
    }

    pub fn with_unlocks<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.unlocks.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_health_delta(mut self, delta: i32) -> Self {
        self.health_delta = Some(delta);
        self
    }

    pub fn with_logic_bonus(mut self) -> Self {
        self.logic_bonus = true;
        self
    }
}

/// An evidence demand: the accepted ids, an optional penalty override for
/// wrong presentations, and the node a correct presentation proceeds to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidencePrompt {
    pub accepted: Vec<EvidenceId>,

    /// Wrong-evidence confidence penalty override (positive magnitude).
    pub penalty: Option<i32>,

    pub on_correct: NodeId,
}

impl EvidencePrompt {
    pub fn new<I: Into<EvidenceId>>(
        accepted: impl IntoIterator<Item = I>,
        on_correct: impl Into<NodeId>,
    ) -> Self {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
            penalty: None,
            on_correct: on_correct.into(),
        }
    }

    pub fn with_penalty(mut self, penalty: i32) -> Self {
        self.penalty = Some(penalty);
        self
    }

    /// Whether an id is in the accepted set.
    pub fn accepts(&self, evidence: &EvidenceId) -> bool {
        self.accepted.contains(evidence)
    }
}

/// What a node offers the player. Exactly one shape per node; an invalid
/// mixture cannot be constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The node offers a list of choices.
    Choices(Vec<DialogueChoice>),

    /// The node demands evidence.
    Presentation(EvidencePrompt),

    /// The node advances unconditionally to the target.
    Advance(NodeId),

    /// No outgoing transition; reaching this node ends the tree.
    Terminal,
}

/// Presentation hints and narrative bookkeeping. Only `verdict` carries
/// engine meaning: it marks the owning tree complete when reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFlags {
    #[serde(default)]
    pub objection: bool,
    #[serde(default)]
    pub testimony: bool,
    #[serde(default)]
    pub cross_examination: bool,
    #[serde(default)]
    pub verdict: bool,
}

/// One step of dialogue within a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueNode {
    pub id: NodeId,
    pub character_id: CharacterId,
    pub text: String,
    pub emotion: Emotion,
    pub kind: NodeKind,
    #[serde(default)]
    pub flags: NodeFlags,
}

impl DialogueNode {
    /// Create a terminal node; attach a kind with the builder methods.
    pub fn new(
        id: impl Into<NodeId>,
        character_id: impl Into<CharacterId>,
        text: impl Into<String>,
        emotion: Emotion,
    ) -> Self {
        Self {
            id: id.into(),
            character_id: character_id.into(),
            text: text.into(),
            emotion,
            kind: NodeKind::Terminal,
            flags: NodeFlags::default(),
        }
    }

    /// Append a choice, converting the node into a choice node.
    pub fn with_choice(mut self, choice: DialogueChoice) -> Self {
        match &mut self.kind {
            NodeKind::Choices(choices) => choices.push(choice),
            _ => self.kind = NodeKind::Choices(vec![choice]),
        }
        self
    }

    /// Make this node demand evidence.
    pub fn with_presentation(mut self, prompt: EvidencePrompt) -> Self {
        self.kind = NodeKind::Presentation(prompt);
        self
    }

    /// Make this node auto-advance to the target.
    pub fn advancing_to(mut self, next: impl Into<NodeId>) -> Self {
        self.kind = NodeKind::Advance(next.into());
        self
    }

    /// Mark this node as an objection beat.
    pub fn objection(mut self) -> Self {
        self.flags.objection = true;
        self
    }

    /// Mark this node as a verdict; reaching it completes the tree.
    pub fn verdict(mut self) -> Self {
        self.flags.verdict = true;
        self
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the node has no outgoing transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal)
    }

    /// The node's choices, empty for non-choice nodes.
    pub fn choices(&self) -> &[DialogueChoice] {
        match &self.kind {
            NodeKind::Choices(choices) => choices,
            _ => &[],
        }
    }

    /// Find a choice on this node by id.
    pub fn choice(&self, id: &ChoiceId) -> Option<&DialogueChoice> {
        self.choices().iter().find(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape_is_exclusive() {
        let node = DialogueNode::new("dennis-objects", "dennis", "OBJECTION!", Emotion::Objection)
            .with_choice(DialogueChoice::new("counter", "Counter it", "charlie-counter"))
            .advancing_to("judge-confused");

        // The last builder call wins; the node cannot hold both shapes.
        assert!(matches!(node.kind, NodeKind::Advance(_)));
        assert!(node.choices().is_empty());
    }

    #[test]
    fn test_choice_lookup() {
        let node = DialogueNode::new("case-intro", "charlie", "Your Honor...", Emotion::Thinking)
            .with_choice(DialogueChoice::new("present", "Present the bag", "evidence-presentation"))
            .with_choice(DialogueChoice::new("question", "Question her", "dee-questioning"));

        assert!(node.choice(&ChoiceId::new("question")).is_some());
        assert!(node.choice(&ChoiceId::new("missing")).is_none());
        assert_eq!(node.choices().len(), 2);
    }

    #[test]
    fn test_terminal_by_default() {
        let node = DialogueNode::new("case-conclusion", "judge", "Dismissed.", Emotion::Confused);
        assert!(node.is_terminal());
    }

    #[test]
    fn test_prompt_accepts() {
        let prompt = EvidencePrompt::new(["pigeon-nest", "bird-law-precedent"], "closing-options");
        assert!(prompt.accepts(&EvidenceId::new("pigeon-nest")));
        assert!(!prompt.accepts(&EvidenceId::new("property-deed")));
    }
}
