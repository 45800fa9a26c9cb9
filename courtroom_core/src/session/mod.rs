//! The player session - one mutable game in progress.
//!
//! The session is an explicitly constructed value owned by the caller; there
//! is no ambient global state. It reacts synchronously to one intent at a
//! time (choice, evidence, advance, combination) and reports gameplay
//! failures as ordinary outcomes, never as errors: blundering is expected
//! courtroom behavior.

mod snapshot;

pub use snapshot::*;

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::{debug, info};

use case_rules::{
    validate_case, Case, CaseDataError, CaseId, Character, ChoiceId, ChoiceReaction,
    ComboDifficulty, CombinationRecipe, DialogueChoice, DialogueNode, Emotion, Evidence,
    EvidenceCategory, EvidenceId, EvidenceMetadata, LogicRating, NodeId, NodeKind, Severity,
    TreeId,
};

use crate::confidence::{
    Confidence, CORRECT_EVIDENCE_HEAL, LOGIC_BONUS_HEAL, NEGATIVE_REACTION_PENALTY,
    POSITIVE_REACTION_HEAL, WRONG_EVIDENCE_PENALTY,
};
use crate::inventory::{find_recipe, EvidenceInventory};
use crate::navigator::Navigator;
use crate::reaction::{pick_reaction, ReactionSource, ThreadRngSource};

/// Failure line for combination attempts that match no recipe.
pub const COMBINATION_FAILURE: &str = "These pieces of evidence don't combine in any \
                                       meaningful way... even by bird law standards.";

/// API misuse. Distinct from gameplay failures, which are outcome variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no dialogue tree is active")]
    NoActiveTree,

    #[error("the current node offers no choices")]
    NotAChoiceNode,

    #[error("choice {0} is not offered by the current node")]
    UnknownChoice(ChoiceId),

    #[error("the current node does not call for evidence")]
    NotAwaitingEvidence,

    #[error("evidence {0} is not in the inventory")]
    EvidenceNotHeld(EvidenceId),

    #[error("the current node does not auto-advance")]
    NoAutoAdvance,
}

/// Outcome of submitting a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The choice was taken and the session moved to `node_id`.
    Advanced { node_id: NodeId, confidence: i32 },

    /// The choice is evidence-gated and the gate is unmet. Nothing changed;
    /// the caller should re-present the choice list.
    Blocked { missing_evidence: Vec<EvidenceId> },
}

/// Outcome of presenting evidence at a presentation node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationOutcome {
    /// The node accepted the item; confidence rose and the session moved on.
    Correct { node_id: NodeId, confidence: i32 },

    /// The node rejected the item; confidence dropped, the node did not
    /// change, and the speaker reacts. The player may try again.
    Incorrect {
        reaction: String,
        severity: Severity,
        confidence: i32,
    },
}

/// Outcome of a combination attempt. Wrong guesses are gameplay, not errors.
#[derive(Debug, Clone)]
pub enum CombinationOutcome {
    /// A recipe matched; the synthesized item was added to the inventory.
    /// The two inputs remain held.
    Matched {
        evidence: Evidence,
        justification: String,
    },

    /// No recipe covers the pair (or the inputs are not combinable).
    Unmatched { message: String },
}

/// One player's mutable game state.
pub struct Session {
    navigator: Option<Navigator>,
    confidence: Confidence,
    inventory: EvidenceInventory,
    unlocked: BTreeSet<String>,
    flags: BTreeMap<String, bool>,
    completed: BTreeSet<TreeId>,
    case_id: Option<CaseId>,
    recipes: Vec<CombinationRecipe>,
    reactions: Box<dyn ReactionSource>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session with full confidence and the thread-local RNG for
    /// reaction picks.
    pub fn new() -> Self {
        Self::with_reaction_source(Box::new(ThreadRngSource::new()))
    }

    /// A fresh session with an injected reaction source (seeded or scripted
    /// for deterministic tests).
    pub fn with_reaction_source(reactions: Box<dyn ReactionSource>) -> Self {
        Self {
            navigator: None,
            confidence: Confidence::new(),
            inventory: EvidenceInventory::new(),
            unlocked: BTreeSet::new(),
            flags: BTreeMap::new(),
            completed: BTreeSet::new(),
            case_id: None,
            recipes: Vec::new(),
            reactions,
        }
    }

    /// Seed the session from a case: validates the content, enters the
    /// opening tree (first investigation tree, else first trial tree),
    /// bulk-adds the case's evidence, and loads its recipe set.
    pub fn select_case(&mut self, case: &Case) -> Result<(), CaseDataError> {
        validate_case(case)?;
        let opening = case
            .phases
            .opening_tree()
            .ok_or_else(|| CaseDataError::EmptyCase {
                case: case.id.clone(),
            })?;
        let navigator = Navigator::start(opening.clone())?;

        info!(case = %case.id, tree = %navigator.tree_id(), "case selected");
        self.case_id = Some(case.id.clone());
        self.recipes = case.combinations.clone();
        self.navigator = Some(navigator);
        for item in &case.evidence {
            self.add_evidence(item.clone());
        }
        Ok(())
    }

    /// Insert evidence, recording its id in the unlocked set.
    pub fn add_evidence(&mut self, item: Evidence) {
        self.unlocked.insert(item.id.as_str().to_owned());
        self.inventory.add(item);
    }

    /// Record an id as unlocked without adding anything to the inventory.
    pub fn unlock(&mut self, id: impl Into<String>) {
        self.unlocked.insert(id.into());
    }

    /// Submit a choice offered by the current node.
    pub fn submit_choice(&mut self, choice_id: &ChoiceId) -> Result<ChoiceOutcome, SessionError> {
        let (delta, unlocks, next) = {
            let nav = self.navigator.as_ref().ok_or(SessionError::NoActiveTree)?;
            let node = nav.current();
            if !matches!(node.kind, NodeKind::Choices(_)) {
                return Err(SessionError::NotAChoiceNode);
            }
            let choice = node
                .choice(choice_id)
                .ok_or_else(|| SessionError::UnknownChoice(choice_id.clone()))?;

            let missing = Navigator::missing_evidence(choice, &self.inventory);
            if !missing.is_empty() {
                debug!(choice = %choice_id, "choice blocked on evidence");
                return Ok(ChoiceOutcome::Blocked {
                    missing_evidence: missing,
                });
            }

            (
                choice_delta(choice),
                choice.unlocks.clone(),
                choice.next_node.clone(),
            )
        };

        self.confidence.apply(delta);
        self.unlocked.extend(unlocks);
        self.move_to(next.clone());

        Ok(ChoiceOutcome::Advanced {
            node_id: next,
            confidence: self.confidence.current(),
        })
    }

    /// Present an evidence item at the current presentation node.
    pub fn present_evidence(
        &mut self,
        evidence_id: &EvidenceId,
    ) -> Result<PresentationOutcome, SessionError> {
        enum Verdict {
            Correct { next: NodeId, unlocks: Vec<String> },
            Incorrect {
                penalty: i32,
                reaction: String,
                severity: Severity,
            },
        }

        let verdict = {
            let nav = self.navigator.as_ref().ok_or(SessionError::NoActiveTree)?;
            let prompt = match &nav.current().kind {
                NodeKind::Presentation(prompt) => prompt,
                _ => return Err(SessionError::NotAwaitingEvidence),
            };
            let item = self
                .inventory
                .get(evidence_id)
                .ok_or_else(|| SessionError::EvidenceNotHeld(evidence_id.clone()))?;

            if prompt.accepts(evidence_id) {
                Verdict::Correct {
                    next: prompt.on_correct.clone(),
                    unlocks: item.unlocks.clone(),
                }
            } else {
                // The severity bucket reads the pre-damage confidence.
                let severity = self.confidence.severity();
                let reaction = pick_reaction(nav.speaker(), severity, self.reactions.as_mut());
                Verdict::Incorrect {
                    penalty: prompt.penalty.unwrap_or(WRONG_EVIDENCE_PENALTY),
                    reaction,
                    severity,
                }
            }
        };

        match verdict {
            Verdict::Correct { next, unlocks } => {
                self.confidence.apply(CORRECT_EVIDENCE_HEAL);
                self.unlocked.extend(unlocks);
                self.move_to(next.clone());
                Ok(PresentationOutcome::Correct {
                    node_id: next,
                    confidence: self.confidence.current(),
                })
            }
            Verdict::Incorrect {
                penalty,
                reaction,
                severity,
            } => {
                self.confidence.apply(-penalty);
                debug!(evidence = %evidence_id, ?severity, "wrong evidence presented");
                Ok(PresentationOutcome::Incorrect {
                    reaction,
                    severity,
                    confidence: self.confidence.current(),
                })
            }
        }
    }

    /// Take the current node's unconditional transition. No confidence
    /// effect.
    pub fn advance(&mut self) -> Result<NodeId, SessionError> {
        let next = {
            let nav = self.navigator.as_ref().ok_or(SessionError::NoActiveTree)?;
            match &nav.current().kind {
                NodeKind::Advance(next) => next.clone(),
                _ => return Err(SessionError::NoAutoAdvance),
            }
        };
        self.move_to(next.clone());
        Ok(next)
    }

    /// Try to combine two held items against the loaded recipe set.
    ///
    /// Synthesized evidence cannot be an input, and a pair with no recipe is
    /// a themed failure, not an error: wrong guesses are the gameplay.
    pub fn attempt_combination(
        &mut self,
        a: &EvidenceId,
        b: &EvidenceId,
    ) -> CombinationOutcome {
        let unmatched = || CombinationOutcome::Unmatched {
            message: COMBINATION_FAILURE.to_owned(),
        };

        let (first, second) = match (self.inventory.get(a), self.inventory.get(b)) {
            (Some(first), Some(second)) => (first, second),
            _ => return unmatched(),
        };
        if a == b || first.is_combo || second.is_combo {
            return unmatched();
        }
        let recipe = match find_recipe(&self.recipes, a, b) {
            Some(recipe) => recipe.clone(),
            None => return unmatched(),
        };

        let rating = if recipe.difficulty == ComboDifficulty::CharlieLogic {
            LogicRating::PureGenius
        } else {
            LogicRating::AccidentallyBrilliant
        };
        let mut relevant_to = first.relevant_to.clone();
        for topic in &second.relevant_to {
            if !relevant_to.contains(topic) {
                relevant_to.push(topic.clone());
            }
        }

        let evidence = Evidence::new(
            recipe.result_id.clone(),
            format!("Combined Evidence: {} + {}", first.name, second.name),
            format!(
                "Charlie's brilliant combination of {} and {}",
                first.name, second.name
            ),
            EvidenceCategory::Document,
        )
        .with_image("/evidence/combo-evidence.svg")
        .relevant_to(relevant_to)
        .as_combo_of(a.clone(), b.clone())
        .with_metadata(EvidenceMetadata {
            bird_law_relevance: Some(recipe.justification.clone()),
            logic_rating: Some(rating),
            ..Default::default()
        });

        info!(result = %evidence.id, "evidence combined");
        self.add_evidence(evidence.clone());
        CombinationOutcome::Matched {
            evidence,
            justification: recipe.justification,
        }
    }

    /// The current node, when a tree is active.
    pub fn current_node(&self) -> Option<&DialogueNode> {
        self.navigator.as_ref().map(Navigator::current)
    }

    /// The character speaking the current node.
    pub fn current_speaker(&self) -> Option<&Character> {
        self.navigator.as_ref().map(Navigator::speaker)
    }

    /// The sprite reference for the current node's emotion, with the
    /// neutral fallback applied.
    pub fn current_sprite(&self) -> Option<&str> {
        let nav = self.navigator.as_ref()?;
        nav.speaker().sprite_for(nav.current().emotion)
    }

    /// The current node's emotion tag.
    pub fn current_emotion(&self) -> Option<Emotion> {
        self.current_node().map(|node| node.emotion)
    }

    /// Choices offered by the current node, empty elsewhere.
    pub fn current_choices(&self) -> &[DialogueChoice] {
        self.current_node().map(DialogueNode::choices).unwrap_or(&[])
    }

    pub fn active_tree(&self) -> Option<&TreeId> {
        self.navigator.as_ref().map(Navigator::tree_id)
    }

    pub fn active_case(&self) -> Option<&CaseId> {
        self.case_id.as_ref()
    }

    pub fn inventory(&self) -> &EvidenceInventory {
        &self.inventory
    }

    /// The loaded combination recipe set.
    pub fn available_combinations(&self) -> &[CombinationRecipe] {
        &self.recipes
    }

    pub fn confidence(&self) -> i32 {
        self.confidence.current()
    }

    pub fn max_confidence(&self) -> i32 {
        self.confidence.max()
    }

    /// Whether the case-dismissed condition has been reached. The engine
    /// keeps answering calls; halting is the caller's decision.
    pub fn is_defeated(&self) -> bool {
        self.confidence.is_depleted()
    }

    /// Ids recorded as unlocked, a superset of held evidence ids.
    pub fn unlocked(&self) -> &BTreeSet<String> {
        &self.unlocked
    }

    pub fn completed_trees(&self) -> &BTreeSet<TreeId> {
        &self.completed
    }

    /// Read a story flag; unset flags read as false.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.flags.insert(name.into(), value);
    }

    /// Record a tree as completed. Idempotent.
    pub fn complete_tree(&mut self, tree_id: TreeId) {
        if self.completed.insert(tree_id.clone()) {
            info!(tree = %tree_id, "tree completed");
        }
    }

    /// Restore the session to its new-game state. The reaction source is
    /// kept.
    pub fn reset(&mut self) {
        info!("session reset");
        self.navigator = None;
        self.confidence = Confidence::new();
        self.inventory.clear();
        self.unlocked.clear();
        self.flags.clear();
        self.completed.clear();
        self.case_id = None;
        self.recipes.clear();
    }

    /// Move to a node and run arrival bookkeeping: entering a node carrying
    /// the verdict flag completes the owning tree.
    fn move_to(&mut self, node: NodeId) {
        let mut completed_tree = None;
        if let Some(nav) = self.navigator.as_mut() {
            nav.goto(node);
            if nav.current().flags.verdict {
                completed_tree = Some(nav.tree_id().clone());
            }
        }
        if let Some(tree_id) = completed_tree {
            self.complete_tree(tree_id);
        }
    }
}

/// Resolve a choice's confidence delta: the stated delta wins, otherwise the
/// reaction classification's default; the logic bonus stacks on top.
fn choice_delta(choice: &DialogueChoice) -> i32 {
    let base = choice.health_delta.unwrap_or(match choice.reaction {
        Some(ChoiceReaction::Negative) => -NEGATIVE_REACTION_PENALTY,
        Some(ChoiceReaction::Positive) => POSITIVE_REACTION_HEAL,
        _ => 0,
    });
    let bonus = if choice.logic_bonus { LOGIC_BONUS_HEAL } else { 0 };
    base + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::SequenceSource;
    use case_rules::catalog::pigeon_case;
    use case_rules::{DialogueTree, EvidencePrompt, Personality};

    // A small self-contained case exercising every transition shape:
    //
    //   opening --reckless(-20)--> detour --(advance)--> opening
    //   opening --gamble(bonus)--> testimony
    //   opening --gated(requires missing-item)--> testimony
    //   opening --proceed--> testimony
    //   testimony --(present key-evidence)--> closing --(advance)--> wrap-up
    fn fixture_case() -> Case {
        let attorney = Character::new("attorney", "Charlie Kelly", Personality::Chaotic)
            .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
            .with_reaction(Severity::Mild, "Hold on, that's not bird law.")
            .with_reaction(Severity::Mild, "Let me check my notes.")
            .with_reaction(Severity::Severe, "This theory is falling apart!")
            .with_reaction(Severity::Critical, "The birds have abandoned me!");

        let tree = DialogueTree::new("fixture-trial", "Fixture Trial", "A test.", "opening")
            .with_node(
                DialogueNode::new("opening", "attorney", "Your Honor...", Emotion::Neutral)
                    .with_choice(
                        DialogueChoice::new("reckless", "Insult the judge", "detour")
                            .with_health_delta(-20),
                    )
                    .with_choice(
                        DialogueChoice::new("gamble", "Cite the Magna Carta", "testimony")
                            .with_logic_bonus(),
                    )
                    .with_choice(
                        DialogueChoice::new("gated", "Present the missing item", "testimony")
                            .requires("missing-item"),
                    )
                    .with_choice(DialogueChoice::new("proceed", "Proceed calmly", "testimony")),
            )
            .with_node(
                DialogueNode::new("detour", "attorney", "Perhaps not.", Emotion::Neutral)
                    .advancing_to("opening"),
            )
            .with_node(
                DialogueNode::new(
                    "testimony",
                    "attorney",
                    "Present your evidence!",
                    Emotion::Neutral,
                )
                .with_presentation(EvidencePrompt::new(["key-evidence"], "closing")),
            )
            .with_node(
                DialogueNode::new("closing", "attorney", "And so...", Emotion::Neutral)
                    .advancing_to("wrap-up"),
            )
            .with_node(
                DialogueNode::new("wrap-up", "attorney", "The defense rests.", Emotion::Neutral)
                    .verdict(),
            )
            .with_character(attorney.clone());

        Case::new("fixture-case", "Fixture Case", "A test case.")
            .with_trial_tree(tree)
            .with_characters([attorney])
            .with_evidence([
                Evidence::new("key-evidence", "Key Evidence", "The one.", EvidenceCategory::Document),
                Evidence::new("red-herring", "Red Herring", "Not the one.", EvidenceCategory::Physical),
            ])
    }

    fn scripted_session() -> Session {
        Session::with_reaction_source(Box::new(SequenceSource::constant(0)))
    }

    #[test]
    fn test_select_case_with_empty_investigation_uses_trial_tree() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        // Scenario: the fixture defines no investigation trees.
        assert_eq!(session.active_tree(), Some(&TreeId::new("fixture-trial")));
        assert_eq!(session.current_node().unwrap().id, NodeId::new("opening"));
        assert_eq!(session.inventory().len(), 2);
    }

    #[test]
    fn test_gated_choice_without_evidence_has_no_side_effects() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        let outcome = session.submit_choice(&ChoiceId::new("gated")).unwrap();
        assert_eq!(
            outcome,
            ChoiceOutcome::Blocked {
                missing_evidence: vec![EvidenceId::new("missing-item")],
            }
        );
        assert_eq!(session.confidence(), 100);
        assert_eq!(session.current_node().unwrap().id, NodeId::new("opening"));
    }

    #[test]
    fn test_unknown_choice_is_an_error() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        assert_eq!(
            session.submit_choice(&ChoiceId::new("nope")),
            Err(SessionError::UnknownChoice(ChoiceId::new("nope")))
        );
    }

    #[test]
    fn test_choice_applies_stated_delta() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        let outcome = session.submit_choice(&ChoiceId::new("reckless")).unwrap();
        assert_eq!(
            outcome,
            ChoiceOutcome::Advanced {
                node_id: NodeId::new("detour"),
                confidence: 80,
            }
        );
    }

    #[test]
    fn test_logic_bonus_heals_even_with_no_stated_delta() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        session.submit_choice(&ChoiceId::new("reckless")).unwrap(); // 80
        session.advance().unwrap(); // back to opening

        let outcome = session.submit_choice(&ChoiceId::new("gamble")).unwrap();
        assert_eq!(
            outcome,
            ChoiceOutcome::Advanced {
                node_id: NodeId::new("testimony"),
                confidence: 95,
            }
        );
    }

    #[test]
    fn test_wrong_evidence_damages_and_stays_put() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        session.submit_choice(&ChoiceId::new("proceed")).unwrap();

        // Scenario: fresh confidence of 100, wrong item, default penalty.
        let outcome = session
            .present_evidence(&EvidenceId::new("red-herring"))
            .unwrap();
        match outcome {
            PresentationOutcome::Incorrect {
                reaction,
                severity,
                confidence,
            } => {
                assert_eq!(confidence, 85);
                assert_eq!(severity, Severity::Mild);
                assert_eq!(reaction, "Hold on, that's not bird law.");
            }
            other => panic!("expected Incorrect, got {other:?}"),
        }
        assert_eq!(session.current_node().unwrap().id, NodeId::new("testimony"));
    }

    #[test]
    fn test_severity_reads_pre_damage_confidence() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        session.submit_choice(&ChoiceId::new("reckless")).unwrap(); // 80
        session.advance().unwrap();
        session.submit_choice(&ChoiceId::new("proceed")).unwrap();

        // 80 > 70, so the reaction is mild even though the penalty lands the
        // meter at 65.
        let outcome = session
            .present_evidence(&EvidenceId::new("red-herring"))
            .unwrap();
        match outcome {
            PresentationOutcome::Incorrect {
                severity,
                confidence,
                ..
            } => {
                assert_eq!(severity, Severity::Mild);
                assert_eq!(confidence, 65);
            }
            other => panic!("expected Incorrect, got {other:?}"),
        }
    }

    #[test]
    fn test_correct_evidence_heals_and_advances() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        session.submit_choice(&ChoiceId::new("reckless")).unwrap(); // 80
        session.advance().unwrap();
        session.submit_choice(&ChoiceId::new("proceed")).unwrap();

        let outcome = session
            .present_evidence(&EvidenceId::new("key-evidence"))
            .unwrap();
        assert_eq!(
            outcome,
            PresentationOutcome::Correct {
                node_id: NodeId::new("closing"),
                confidence: 90,
            }
        );
    }

    #[test]
    fn test_presenting_unheld_evidence_is_an_error() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        session.submit_choice(&ChoiceId::new("proceed")).unwrap();

        assert_eq!(
            session.present_evidence(&EvidenceId::new("never-found")),
            Err(SessionError::EvidenceNotHeld(EvidenceId::new("never-found")))
        );
    }

    #[test]
    fn test_advance_rejected_on_choice_node() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        assert_eq!(session.advance(), Err(SessionError::NoAutoAdvance));
    }

    #[test]
    fn test_presentation_rejected_on_choice_node() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        assert_eq!(
            session.present_evidence(&EvidenceId::new("key-evidence")),
            Err(SessionError::NotAwaitingEvidence)
        );
    }

    #[test]
    fn test_reaching_verdict_completes_tree_once() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();
        session.submit_choice(&ChoiceId::new("proceed")).unwrap();
        session
            .present_evidence(&EvidenceId::new("key-evidence"))
            .unwrap();
        session.advance().unwrap(); // closing -> wrap-up, the verdict node

        assert!(session.current_node().unwrap().is_terminal());
        assert_eq!(session.completed_trees().len(), 1);
        assert!(session
            .completed_trees()
            .contains(&TreeId::new("fixture-trial")));

        // A second visit must not duplicate the entry.
        session.complete_tree(TreeId::new("fixture-trial"));
        assert_eq!(session.completed_trees().len(), 1);
    }

    #[test]
    fn test_defeat_is_observable_but_not_enforced() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        for _ in 0..5 {
            session.submit_choice(&ChoiceId::new("reckless")).unwrap();
            session.advance().unwrap();
        }
        assert_eq!(session.confidence(), 0);
        assert!(session.is_defeated());

        // The engine still answers; halting is the caller's call.
        assert!(session.submit_choice(&ChoiceId::new("proceed")).is_ok());
    }

    #[test]
    fn test_pigeon_combination_scenario() {
        let mut session = scripted_session();
        session.select_case(&pigeon_case()).unwrap();

        let outcome = session.attempt_combination(
            &EvidenceId::new("pigeon-droppings"),
            &EvidenceId::new("property-deed"),
        );
        match outcome {
            CombinationOutcome::Matched {
                evidence,
                justification,
            } => {
                assert_eq!(evidence.id, EvidenceId::new("territorial-claim-evidence"));
                assert_eq!(
                    justification,
                    "The droppings prove the pigeons were here first! Property law doesn't \
                     override bird law!"
                );
                assert!(evidence.is_combo);
            }
            CombinationOutcome::Unmatched { message } => {
                panic!("expected a match, got failure: {message}")
            }
        }

        // Additive, not destructive: both inputs remain held.
        assert!(session.inventory().has(&EvidenceId::new("pigeon-droppings")));
        assert!(session.inventory().has(&EvidenceId::new("property-deed")));
        assert!(session
            .inventory()
            .has(&EvidenceId::new("territorial-claim-evidence")));
    }

    #[test]
    fn test_pigeon_case_walkthrough_to_verdict() {
        let mut session = scripted_session();
        session.select_case(&pigeon_case()).unwrap();

        session
            .submit_choice(&ChoiceId::new("present-nest-evidence"))
            .unwrap();
        session.advance().unwrap(); // dennis-objects
        session
            .submit_choice(&ChoiceId::new("counter-objection"))
            .unwrap();
        session.advance().unwrap(); // judge-confused
        session.advance().unwrap(); // dennis-smugness
        session
            .submit_choice(&ChoiceId::new("challenge-ownership"))
            .unwrap();
        session.advance().unwrap(); // frank-testimony
        session
            .submit_choice(&ChoiceId::new("follow-up-frank"))
            .unwrap();
        session.advance().unwrap(); // waitress-testimony
        session
            .submit_choice(&ChoiceId::new("ask-about-behavior"))
            .unwrap();
        session.advance().unwrap(); // case-climax

        // The climax demands evidence; the strongest item is the one the
        // player has to synthesize first.
        session.attempt_combination(
            &EvidenceId::new("pigeon-droppings"),
            &EvidenceId::new("property-deed"),
        );
        let outcome = session
            .present_evidence(&EvidenceId::new("territorial-claim-evidence"))
            .unwrap();
        assert!(matches!(outcome, PresentationOutcome::Correct { .. }));

        session
            .submit_choice(&ChoiceId::new("final-argument"))
            .unwrap();
        session.advance().unwrap(); // charlie-celebration, the verdict

        assert!(session.current_node().unwrap().is_terminal());
        assert!(session
            .completed_trees()
            .contains(&TreeId::new("pigeon-investigation")));
        assert!(!session.is_defeated());
    }

    #[test]
    fn test_combination_order_independence() {
        let mut forward = scripted_session();
        forward.select_case(&pigeon_case()).unwrap();
        let mut reversed = scripted_session();
        reversed.select_case(&pigeon_case()).unwrap();

        let a = EvidenceId::new("pigeon-droppings");
        let b = EvidenceId::new("property-deed");
        let first = forward.attempt_combination(&a, &b);
        let second = reversed.attempt_combination(&b, &a);

        match (first, second) {
            (
                CombinationOutcome::Matched { evidence: x, .. },
                CombinationOutcome::Matched { evidence: y, .. },
            ) => assert_eq!(x.id, y.id),
            other => panic!("both orders should match: {other:?}"),
        }
    }

    #[test]
    fn test_unmatched_combination_is_a_themed_failure() {
        let mut session = scripted_session();
        session.select_case(&pigeon_case()).unwrap();

        let outcome = session.attempt_combination(
            &EvidenceId::new("pigeon-nest"),
            &EvidenceId::new("eviction-notice"),
        );
        match outcome {
            CombinationOutcome::Unmatched { message } => {
                assert_eq!(message, COMBINATION_FAILURE)
            }
            CombinationOutcome::Matched { .. } => panic!("no recipe covers this pair"),
        }
    }

    #[test]
    fn test_combo_evidence_is_not_a_combination_input() {
        let mut session = scripted_session();
        session.select_case(&pigeon_case()).unwrap();

        session.attempt_combination(
            &EvidenceId::new("pigeon-droppings"),
            &EvidenceId::new("property-deed"),
        );
        let outcome = session.attempt_combination(
            &EvidenceId::new("territorial-claim-evidence"),
            &EvidenceId::new("bird-law-precedent"),
        );
        assert!(matches!(outcome, CombinationOutcome::Unmatched { .. }));
    }

    #[test]
    fn test_choice_unlocks_are_recorded() {
        let attorney = Character::new("attorney", "Charlie", Personality::Chaotic)
            .with_reaction(Severity::Mild, "Hm.");
        let tree = DialogueTree::new("t", "T", "T.", "a")
            .with_node(
                DialogueNode::new("a", "attorney", "...", Emotion::Neutral)
                    .with_choice(
                        DialogueChoice::new("go", "Go", "b")
                            .with_unlocks(["secret-path", "bonus-evidence"]),
                    ),
            )
            .with_node(DialogueNode::new("b", "attorney", "...", Emotion::Neutral))
            .with_character(attorney.clone());
        let case = Case::new("c", "C", "C.")
            .with_trial_tree(tree)
            .with_characters([attorney]);

        let mut session = scripted_session();
        session.select_case(&case).unwrap();
        session.submit_choice(&ChoiceId::new("go")).unwrap();

        assert!(session.unlocked().contains("secret-path"));
        assert!(session.unlocked().contains("bonus-evidence"));
    }

    #[test]
    fn test_display_accessors() {
        let mut session = scripted_session();
        session.select_case(&fixture_case()).unwrap();

        assert_eq!(session.current_speaker().unwrap().name, "Charlie Kelly");
        assert_eq!(session.current_emotion(), Some(Emotion::Neutral));
        assert_eq!(
            session.current_sprite(),
            Some("/sprites/charlie-normal.svg")
        );
        assert_eq!(session.current_choices().len(), 4);
        assert_eq!(session.max_confidence(), 100);

        session.unlock("hidden-exhibit");
        assert!(session.unlocked().contains("hidden-exhibit"));
        // Seeded evidence ids are bookkept as unlocked too.
        assert!(session.unlocked().contains("key-evidence"));
    }

    #[test]
    fn test_reset_restores_new_game_state() {
        let mut session = scripted_session();
        session.select_case(&pigeon_case()).unwrap();
        session.set_flag("met-the-judge", true);
        session.attempt_combination(
            &EvidenceId::new("pigeon-droppings"),
            &EvidenceId::new("property-deed"),
        );
        session.complete_tree(TreeId::new("pigeon-investigation"));

        session.reset();

        assert_eq!(session.confidence(), 100);
        assert!(session.inventory().is_empty());
        assert!(session.unlocked().is_empty());
        assert!(!session.flag("met-the-judge"));
        assert!(session.completed_trees().is_empty());
        assert!(session.active_case().is_none());
        assert!(session.current_node().is_none());
        assert!(session.available_combinations().is_empty());
    }

    #[test]
    fn test_calls_without_active_tree_are_errors() {
        let mut session = scripted_session();
        assert_eq!(
            session.submit_choice(&ChoiceId::new("go")),
            Err(SessionError::NoActiveTree)
        );
        assert_eq!(
            session.present_evidence(&EvidenceId::new("x")),
            Err(SessionError::NoActiveTree)
        );
        assert_eq!(session.advance(), Err(SessionError::NoActiveTree));
    }
}
