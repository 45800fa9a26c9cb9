//! "The Pigeon Property Rights Dispute" - the combination-heavy case.

use super::characters::roster;
use crate::case::Case;
use crate::dialogue::{
    ChoiceReaction, DialogueChoice, DialogueNode, DialogueTree, EvidencePrompt,
};
use crate::entities::{
    ComboDifficulty, CombinationRecipe, Emotion, Evidence, EvidenceCategory, EvidenceMetadata,
    LogicRating,
};

pub fn pigeon_case() -> Case {
    Case::new(
        "pigeon-property-case",
        "The Pigeon Property Rights Dispute",
        "Charlie defends a family of pigeons facing eviction from their longtime roost.",
    )
    .with_investigation_tree(tree(
        "pigeon-investigation",
        "Investigating the Pigeon Eviction",
        "Gather evidence about the pigeons' rightful claim to their home.",
        &["pigeon-nest", "pigeon-droppings"],
    ))
    .with_trial_tree(tree(
        "pigeon-trial",
        "The Pigeon Rights Trial",
        "Defend the pigeons' constitutional rights in court.",
        &["pigeon-nest", "bird-law-precedent"],
    ))
    .with_evidence(evidence())
    .with_characters(roster())
    .with_combinations(combinations())
    .with_victory_conditions([
        "Successfully present pigeon nest evidence",
        "Establish bird law precedent",
        "Prove pigeon territorial rights",
        "Achieve victory or compromise ending",
    ])
}

fn evidence() -> Vec<Evidence> {
    vec![
        Evidence::new(
            "pigeon-droppings",
            "Pigeon Droppings Sample",
            "Fresh pigeon droppings found on the disputed property. Clear evidence of pigeon \
             habitation.",
            EvidenceCategory::Physical,
        )
        .with_image("/evidence/pigeon-droppings.svg")
        .relevant_to(["pigeon-habitation", "property-evidence"])
        .combinable_with(["property-deed"])
        .with_metadata(EvidenceMetadata {
            location: Some("Disputed Rooftop".into()),
            date_found: Some("Monday Morning".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "Under the Avian Homestead Act, droppings establish territorial claims.".into(),
            ),
            logic_rating: Some(LogicRating::AccidentallyBrilliant),
            ..Default::default()
        }),
        Evidence::new(
            "property-deed",
            "Property Deed",
            "Legal document showing ownership of the building. Makes no mention of bird \
             rights.",
            EvidenceCategory::Document,
        )
        .with_image("/evidence/property-deed.svg")
        .relevant_to(["legal-ownership", "property-dispute"])
        .combinable_with(["pigeon-droppings", "bird-law-precedent"])
        .with_metadata(EvidenceMetadata {
            location: Some("City Hall".into()),
            date_found: Some("Tuesday".into()),
            found_by: Some("Dennis Reynolds".into()),
            bird_law_relevance: Some(
                "Human property law conflicts with established bird law precedent.".into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "pigeon-nest",
            "Pigeon Nest",
            "A well-constructed pigeon nest with eggs. Shows long-term habitation.",
            EvidenceCategory::Physical,
        )
        .with_image("/evidence/pigeon-nest.svg")
        .relevant_to(["pigeon-habitation", "nesting-rights"])
        .with_unlocks(["pigeon-family-testimony"])
        .with_metadata(EvidenceMetadata {
            location: Some("Building Eaves".into()),
            date_found: Some("Monday".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "Nesting rights are sacred in bird law. This is basically pigeon real estate."
                    .into(),
            ),
            logic_rating: Some(LogicRating::PureGenius),
            ..Default::default()
        }),
        Evidence::new(
            "eviction-notice",
            "Pigeon Eviction Notice",
            "A notice posted by the property developer demanding pigeons vacate the \
             premises.",
            EvidenceCategory::Document,
        )
        .with_image("/evidence/eviction-notice.svg")
        .relevant_to(["illegal-eviction", "bird-rights-violation"])
        .with_metadata(EvidenceMetadata {
            location: Some("Building Entrance".into()),
            date_found: Some("Wednesday".into()),
            found_by: Some("The Waitress".into()),
            bird_law_relevance: Some(
                "You cannot evict birds without proper bird court proceedings!".into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "bird-law-precedent",
            "Bird Law Precedent",
            "Charlie's research on historical bird law cases. Mostly illegible but \
             passionate.",
            EvidenceCategory::Document,
        )
        .with_image("/evidence/bird-law-precedent.svg")
        .relevant_to(["legal-precedent", "charlie-expertise"])
        .combinable_with(["property-deed"])
        .with_metadata(EvidenceMetadata {
            location: Some("Charlie's Apartment".into()),
            date_found: Some("Sunday".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "The case of Pigeon vs. City Hall, 1987. Pigeons won by default when the \
                 judge fell asleep."
                    .into(),
            ),
            logic_rating: Some(LogicRating::Bizarre),
            ..Default::default()
        }),
    ]
}

fn combinations() -> Vec<CombinationRecipe> {
    vec![
        CombinationRecipe::new(
            "droppings-deed-combo",
            "pigeon-droppings",
            "property-deed",
            "territorial-claim-evidence",
            "The droppings prove the pigeons were here first! Property law doesn't override \
             bird law!",
            ComboDifficulty::CharlieLogic,
        ),
        CombinationRecipe::new(
            "precedent-deed-combo",
            "bird-law-precedent",
            "property-deed",
            "legal-conflict-evidence",
            "This creates a legal paradox! Human law vs. bird law! The birds have precedent!",
            ComboDifficulty::Medium,
        ),
    ]
}

fn tree(id: &str, title: &str, description: &str, required_evidence: &[&str]) -> DialogueTree {
    DialogueTree::new(id, title, description, "pigeon-case-intro")
        .with_characters(roster())
        .with_required_evidence(required_evidence.iter().copied())
        .with_nodes(nodes())
}

fn nodes() -> Vec<DialogueNode> {
    vec![
        DialogueNode::new(
            "pigeon-case-intro",
            "charlie",
            "Your Honor, we are here today to address a grave injustice against the pigeon \
             community. These noble birds have established a rightful claim to their roost, \
             and now some developer wants to kick them out without due process!",
            Emotion::Objection,
        )
        .with_choice(
            DialogueChoice::new(
                "present-nest-evidence",
                "Present the pigeon nest as evidence of habitation",
                "nest-presentation",
            )
            .requires("pigeon-nest")
            .with_reaction(ChoiceReaction::Positive)
            .with_health_delta(5),
        )
        .with_choice(
            DialogueChoice::new(
                "cite-bird-law",
                "Cite bird law precedent for nesting rights",
                "bird-law-lecture",
            )
            .requires("bird-law-precedent")
            .with_reaction(ChoiceReaction::Impressed),
        )
        .with_choice(
            DialogueChoice::new(
                "question-developer",
                "Question the developer about the eviction notice",
                "developer-questioning",
            )
            .with_reaction(ChoiceReaction::Neutral),
        ),
        DialogueNode::new(
            "nest-presentation",
            "charlie",
            "As you can see, Your Honor, this nest represents months of careful \
             construction. These pigeons have invested time, energy, and... pigeon sweat \
             into building their home. You can't just tear down someone's house!",
            Emotion::Thinking,
        )
        .advancing_to("dennis-objects"),
        DialogueNode::new(
            "bird-law-lecture",
            "charlie",
            "I direct the court to Pigeon vs. City Hall, 1987. The pigeons won by default \
             when the judge fell asleep, which under bird law makes the precedent doubly \
             binding. Nesting rights are sacred, Your Honor!",
            Emotion::Objection,
        )
        .advancing_to("dennis-objects"),
        DialogueNode::new(
            "developer-questioning",
            "charlie",
            "And where is this developer, Your Honor? Too cowardly to face the birds he's \
             throwing out on the street? Let the record show the eviction notice wasn't even \
             written in a language pigeons can read!",
            Emotion::Thinking,
        )
        .advancing_to("dennis-objects"),
        DialogueNode::new(
            "dennis-objects",
            "dennis",
            "OBJECTION! Your Honor, pigeons are not people! They don't have property rights! \
             This is absurd, even for Charlie. I am a five-star lawyer, and I know the law!",
            Emotion::Objection,
        )
        .objection()
        .with_choice(
            DialogueChoice::new(
                "counter-objection",
                "Counter with bird law constitutional rights",
                "charlie-counter",
            )
            .with_logic_bonus()
            .with_reaction(ChoiceReaction::Outraged),
        )
        .with_choice(
            DialogueChoice::new(
                "present-droppings",
                "Present pigeon droppings as territorial evidence",
                "droppings-evidence",
            )
            .requires("pigeon-droppings")
            .with_reaction(ChoiceReaction::Confused),
        ),
        DialogueNode::new(
            "charlie-counter",
            "charlie",
            "OBJECTION TO YOUR OBJECTION! The Constitution clearly states that all creatures \
             have the right to life, liberty, and the pursuit of happiness! These pigeons \
             are pursuing happiness through quality nesting!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("judge-confused"),
        DialogueNode::new(
            "droppings-evidence",
            "charlie",
            "Exhibit B, Your Honor: fresh droppings, collected Monday morning. Under the \
             Avian Homestead Act, droppings establish territorial claims. These birds have \
             been marking this roost for years!",
            Emotion::Thinking,
        )
        .advancing_to("dennis-smugness"),
        DialogueNode::new(
            "judge-confused",
            "judge",
            "Mr. Kelly, I don't think the Constitution applies to... pigeons. But your \
             passion is... noted. Mr. Reynolds, please continue.",
            Emotion::Confused,
        )
        .advancing_to("dennis-smugness"),
        DialogueNode::new(
            "dennis-smugness",
            "dennis",
            "Thank you, Your Honor. As I was saying, this is a simple matter of property \
             law. My client owns the building, therefore he owns everything on it, including \
             any... bird constructions.",
            Emotion::Smug,
        )
        .with_choice(
            DialogueChoice::new(
                "challenge-ownership",
                "Challenge the concept of ownership over living beings",
                "ownership-challenge",
            )
            .with_logic_bonus(),
        )
        .with_choice(
            DialogueChoice::new(
                "present-eviction-notice",
                "Present the illegal eviction notice",
                "eviction-evidence",
            )
            .requires("eviction-notice")
            .with_reaction(ChoiceReaction::Negative),
        ),
        DialogueNode::new(
            "ownership-challenge",
            "charlie",
            "Your Honor, you can't own a living creature's home! That's like... like \
             slavery, but for birds! These pigeons have established squatter's rights \
             through continuous habitation!",
            Emotion::Angry,
        )
        .advancing_to("frank-testimony"),
        DialogueNode::new(
            "eviction-evidence",
            "charlie",
            "Then explain this notice, Dennis! Thirty days to vacate, posted where no \
             pigeon could possibly read it. You cannot evict birds without proper bird \
             court proceedings. This eviction is illegal!",
            Emotion::Angry,
        )
        .advancing_to("frank-testimony"),
        DialogueNode::new(
            "frank-testimony",
            "frank",
            "I seen them pigeons! They been there longer than most of the tenants! Hell, I \
             tried to charge them rent once, but they just cooed at me. Seemed fair.",
            Emotion::Confused,
        )
        .with_choice(
            DialogueChoice::new(
                "follow-up-frank",
                "Ask Frank about pigeon tenant rights",
                "frank-tenant-rights",
            )
            .with_reaction(ChoiceReaction::Positive),
        )
        .with_choice(
            DialogueChoice::new(
                "object-to-frank",
                "Object to Frank's unreliable testimony",
                "frank-objection",
            )
            .with_reaction(ChoiceReaction::Negative)
            .with_health_delta(-5),
        ),
        DialogueNode::new(
            "frank-tenant-rights",
            "frank",
            "Well, they never missed a payment... mostly because I never figured out how to \
             collect from pigeons. But they kept the place clean! Well, except for the \
             droppings, but that's just... bird rent.",
            Emotion::Thinking,
        )
        .advancing_to("waitress-testimony"),
        DialogueNode::new(
            "frank-objection",
            "judge",
            "Mr. Kelly, you called this witness. You don't get to object to your own \
             testimony just because you don't like where it's going. Ms... Waitress, was \
             it? Please take the stand.",
            Emotion::Serious,
        )
        .advancing_to("waitress-testimony"),
        DialogueNode::new(
            "waitress-testimony",
            "waitress",
            "Look, I work near that building, and those pigeons have been there for months. \
             They're actually pretty well-behaved compared to... some people I know.",
            Emotion::Sarcastic,
        )
        .with_choice(
            DialogueChoice::new(
                "ask-about-behavior",
                "Ask about the pigeons' good behavior",
                "pigeon-behavior",
            )
            .with_reaction(ChoiceReaction::Neutral),
        )
        .with_choice(
            DialogueChoice::new(
                "cross-examine-waitress",
                "Cross-examine about pigeon interactions",
                "waitress-cross-exam",
            )
            .with_reaction(ChoiceReaction::Negative),
        ),
        DialogueNode::new(
            "pigeon-behavior",
            "waitress",
            "They don't harass customers, they clean up after themselves mostly, and \
             they've never once stalked me or left weird notes. They're model citizens \
             compared to certain... bird law experts.",
            Emotion::Sarcastic,
        )
        .advancing_to("case-climax"),
        DialogueNode::new(
            "waitress-cross-exam",
            "waitress",
            "Are you seriously cross-examining me about pigeons, Charlie? Fine. Yes, the \
             birds were there before the developer bought the building. Yes, they coo. No, \
             I will not describe the cooing. Can I go now?",
            Emotion::Angry,
        )
        .advancing_to("case-climax"),
        DialogueNode::new(
            "case-climax",
            "charlie",
            "Your Honor, the evidence is clear! These pigeons have established residency, \
             they're good tenants, and they have constitutional rights under bird law! I \
             move for a dismissal of all eviction proceedings!",
            Emotion::Objection,
        )
        .with_presentation(EvidencePrompt::new(
            [
                "territorial-claim-evidence",
                "pigeon-nest",
                "bird-law-precedent",
            ],
            "closing-options",
        )),
        DialogueNode::new(
            "closing-options",
            "charlie",
            "The courtroom is silent. Even Dennis has stopped smirking. This is the moment \
             the whole case turns on.",
            Emotion::Thinking,
        )
        .with_choice(
            DialogueChoice::new(
                "final-argument",
                "Make final argument for pigeon rights",
                "victory-ending",
            )
            .with_logic_bonus(),
        )
        .with_choice(
            DialogueChoice::new(
                "compromise-solution",
                "Propose a compromise solution",
                "compromise-ending",
            )
            .with_reaction(ChoiceReaction::Positive),
        ),
        DialogueNode::new(
            "victory-ending",
            "judge",
            "Well... Mr. Kelly, your arguments are unconventional, but your passion for... \
             bird law... is undeniable. I hereby grant the pigeons continued residency \
             rights. Case dismissed.",
            Emotion::Thinking,
        )
        .advancing_to("charlie-celebration"),
        DialogueNode::new(
            "compromise-ending",
            "judge",
            "A reasonable proposal at last. The pigeons keep the eaves, the developer \
             renovates the lower floors, and nobody evicts anybody without proper \
             proceedings. Court is adjourned.",
            Emotion::Thinking,
        )
        .advancing_to("charlie-compromise-wrap"),
        DialogueNode::new(
            "charlie-celebration",
            "charlie",
            "YES! Another victory for bird law! The pigeons can keep their home, and \
             justice has been served! Bird law prevails again!",
            Emotion::Happy,
        )
        .verdict(),
        DialogueNode::new(
            "charlie-compromise-wrap",
            "charlie",
            "A win is a win! The pigeons keep their home, the developer keeps his lobby, \
             and bird law keeps its perfect record in this courtroom!",
            Emotion::Happy,
        )
        .verdict(),
    ]
}
