//! "The Great Bird Seed Heist" - the introductory case.

use super::characters::roster;
use crate::case::Case;
use crate::dialogue::{ChoiceReaction, DialogueChoice, DialogueNode, DialogueTree};
use crate::entities::{
    ComboDifficulty, CombinationRecipe, Emotion, Evidence, EvidenceCategory, EvidenceMetadata,
};

pub fn bird_seed_case() -> Case {
    Case::new(
        "case-001",
        "The Great Bird Seed Heist",
        "Someone has been stealing bird seed from behind Paddy's Pub. Charlie must use his \
         extensive bird law knowledge to solve the case.",
    )
    .with_investigation_tree(trial_tree())
    .with_trial_tree(trial_tree())
    .with_evidence(evidence())
    .with_characters(roster())
    .with_combinations(combinations())
    .with_victory_conditions([
        "Present all evidence correctly",
        "Successfully cross-examine Dee",
        "Prove bird law violations",
    ])
}

fn evidence() -> Vec<Evidence> {
    vec![
        Evidence::new(
            "bird-seed-bag",
            "Empty Bird Seed Bag",
            "A torn bag that once contained premium sunflower seeds. Shows clear signs of \
             being pecked open by a large bird.",
            EvidenceCategory::Physical,
        )
        .with_image("/evidence/bird-seed-bag.svg")
        .relevant_to(["seed-theft-testimony", "cross-examine-dee"])
        .with_metadata(EvidenceMetadata {
            location: Some("Paddy's Pub Alley".into()),
            date_found: Some("Tuesday Morning".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "This bag represents a clear violation of the Avian Nutrition Rights Act \
                 of... well, it's definitely illegal to steal bird food. I think."
                    .into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "feather-evidence",
            "Suspicious Feather",
            "A large, blonde feather found at the crime scene. Appears to be from a large \
             bird, possibly a crane or... something else.",
            EvidenceCategory::Physical,
        )
        .with_image("/evidence/feather.svg")
        .relevant_to(["dee-identity-crisis", "bird-transformation"])
        .with_metadata(EvidenceMetadata {
            location: Some("Crime Scene".into()),
            date_found: Some("Tuesday Morning".into()),
            found_by: Some("Mac".into()),
            bird_law_relevance: Some(
                "According to subsection 12 of the Bird Identity Protection Act, this \
                 feather could be evidence of illegal bird impersonation."
                    .into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "witness-testimony",
            "Frank's Testimony",
            "Frank claims he saw \"a giant bird\" stealing the seed. His testimony is... \
             questionable at best.",
            EvidenceCategory::Testimony,
        )
        .with_image("/evidence/testimony.svg")
        .relevant_to(["frank-cross-examination"])
        .with_metadata(EvidenceMetadata {
            date_found: Some("Tuesday Afternoon".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "Eyewitness testimony is crucial in bird law cases, even if the witness \
                 might have been drinking."
                    .into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "security-footage",
            "Blurry Security Footage",
            "Grainy footage from Paddy's security camera showing a tall, bird-like figure \
             near the bird seed.",
            EvidenceCategory::Photo,
        )
        .with_image("/evidence/security-footage.svg")
        .relevant_to(["video-analysis", "dee-identification"])
        .with_metadata(EvidenceMetadata {
            location: Some("Paddy's Pub Security System".into()),
            date_found: Some("Tuesday Evening".into()),
            found_by: Some("Mac".into()),
            bird_law_relevance: Some(
                "Video evidence is admissible in bird court, especially when it shows clear \
                 bird-like behavior."
                    .into(),
            ),
            ..Default::default()
        }),
        Evidence::new(
            "bird-law-book",
            "Charlie's Bird Law Notes",
            "A collection of Charlie's handwritten notes on bird law. Mostly illegible, but \
             contains important legal precedents.",
            EvidenceCategory::Document,
        )
        .with_image("/evidence/bird-law-book.svg")
        .relevant_to(["legal-precedent", "charlie-expertise"])
        .with_metadata(EvidenceMetadata {
            location: Some("Charlie's Apartment".into()),
            date_found: Some("Monday".into()),
            found_by: Some("Charlie Kelly".into()),
            bird_law_relevance: Some(
                "These notes contain years of bird law research and definitely prove that I \
                 know what I'm talking about."
                    .into(),
            ),
            ..Default::default()
        }),
    ]
}

fn combinations() -> Vec<CombinationRecipe> {
    vec![
        CombinationRecipe::new(
            "seed-bag-feather-combo",
            "bird-seed-bag",
            "feather-evidence",
            "bird-forensics-analysis",
            "The feather proves the bag was opened by someone with bird-like \
             characteristics! It's basic bird forensics!",
            ComboDifficulty::CharlieLogic,
        ),
        CombinationRecipe::new(
            "footage-notes-combo",
            "security-footage",
            "bird-law-book",
            "cross-referenced-footage",
            "The footage becomes admissible evidence when cross-referenced with subsection \
             12 of my bird law notes!",
            ComboDifficulty::CharlieLogic,
        ),
    ]
}

fn trial_tree() -> DialogueTree {
    DialogueTree::new(
        "bird-seed-trial",
        "The Case of the Stolen Bird Seed",
        "Charlie defends the rights of birds against Dee, who may or may not be a bird \
         herself.",
        "case-intro",
    )
    .with_characters(roster())
    .with_required_evidence(["bird-seed-bag", "feather-evidence"])
    .with_nodes(nodes())
}

fn nodes() -> Vec<DialogueNode> {
    vec![
        DialogueNode::new(
            "case-intro",
            "charlie",
            "Your Honor, we are here today to address a most serious crime against the avian \
             community. Someone has stolen bird seed from the alley behind Paddy's Pub, and I \
             have reason to believe the defendant is not entirely... human.",
            Emotion::Thinking,
        )
        .with_choice(
            DialogueChoice::new(
                "present-evidence",
                "Present the empty bird seed bag as evidence",
                "evidence-presentation",
            )
            .requires("bird-seed-bag")
            .with_reaction(ChoiceReaction::Positive),
        )
        .with_choice(
            DialogueChoice::new(
                "question-defendant",
                "Question the defendant about her whereabouts",
                "dee-questioning",
            )
            .with_reaction(ChoiceReaction::Neutral),
        )
        .with_choice(
            DialogueChoice::new(
                "bird-law-explanation",
                "Explain the relevant bird law statutes",
                "charlie-law-lecture",
            )
            .with_reaction(ChoiceReaction::Positive),
        ),
        DialogueNode::new(
            "evidence-presentation",
            "charlie",
            "As you can see, Your Honor, this bag has been clearly pecked open by a large \
             bird. The bite marks are consistent with someone who has... bird-like \
             tendencies.",
            Emotion::Objection,
        )
        .advancing_to("judge-response"),
        DialogueNode::new(
            "judge-response",
            "judge",
            "Mr. Kelly, are you suggesting that the defendant is... a bird?",
            Emotion::Confused,
        )
        .with_choice(
            DialogueChoice::new(
                "confirm-bird-theory",
                "OBJECTION! Yes, Your Honor. The evidence clearly shows bird behavior.",
                "charlie-bird-theory",
            )
            .with_reaction(ChoiceReaction::Negative),
        )
        .with_choice(
            DialogueChoice::new(
                "clarify-statement",
                "HOLD IT! Not exactly, but she exhibits bird-like characteristics.",
                "charlie-clarification",
            )
            .with_reaction(ChoiceReaction::Neutral),
        ),
        DialogueNode::new(
            "charlie-bird-theory",
            "charlie",
            "Your Honor, bird law clearly states that anyone who exhibits bird-like behavior \
             in the commission of a crime against birds should be tried under avian \
             jurisdiction. It's in the constitution... probably.",
            Emotion::Objection,
        )
        .advancing_to("dee-objection"),
        DialogueNode::new(
            "dee-objection",
            "dee",
            "OBJECTION! I am NOT a bird! This is ridiculous! Charlie, you can't just accuse \
             people of being birds!",
            Emotion::Angry,
        )
        .objection()
        .with_choice(
            DialogueChoice::new(
                "present-feather",
                "Present the suspicious feather found at the scene",
                "feather-evidence",
            )
            .requires("feather-evidence")
            .with_reaction(ChoiceReaction::Negative),
        )
        .with_choice(
            DialogueChoice::new(
                "cross-examine",
                "Cross-examine the defendant about her bird-like behavior",
                "dee-cross-examination",
            )
            .with_reaction(ChoiceReaction::Neutral),
        ),
        DialogueNode::new(
            "charlie-dramatic-objection",
            "charlie",
            "OBJECTION! Your Honor, this entire case hinges on a fundamental \
             misunderstanding of bird law!",
            Emotion::Objection,
        )
        .objection()
        .with_choice(
            DialogueChoice::new(
                "explain-bird-law",
                "Explain the Bird Rights Amendment of 1987",
                "bird-law-lecture",
            )
            .with_logic_bonus(),
        )
        .with_choice(
            DialogueChoice::new(
                "present-bird-evidence",
                "TAKE THAT! Present the feather evidence",
                "feather-revelation",
            )
            .requires("feather-evidence"),
        ),
        DialogueNode::new(
            "prosecutor-counter",
            "dennis",
            "HOLD IT! Mr. Kelly, there is no such thing as the \"Bird Rights Amendment of \
             1987\"!",
            Emotion::Objection,
        )
        .objection()
        .with_choice(
            DialogueChoice::new(
                "charlie-filibuster",
                "Filibuster! Demand to see their bird law credentials",
                "charlie-filibuster",
            )
            .with_logic_bonus(),
        )
        .with_choice(
            DialogueChoice::new(
                "present-notes",
                "Present Charlie's bird law notes as proof",
                "notes-presentation",
            )
            .requires("bird-law-book"),
        ),
        DialogueNode::new(
            "judge-shocked-reaction",
            "judge",
            "What in the world is happening in my courtroom?! Mr. Kelly, are you making up \
             laws?",
            Emotion::Shocked,
        )
        .with_choice(
            DialogueChoice::new(
                "charlie-confident",
                "Your Honor, bird law is very real and very serious",
                "charlie-explanation",
            )
            .with_reaction(ChoiceReaction::Neutral),
        )
        .with_choice(
            DialogueChoice::new(
                "wildcard",
                "WILDCARD! *throws papers in the air*",
                "charlie-wildcard",
            )
            .with_logic_bonus()
            .with_reaction(ChoiceReaction::Negative),
        ),
        DialogueNode::new(
            "dee-questioning",
            "charlie",
            "Dee, where were you on Tuesday morning when the bird seed was stolen? And don't \
             give me some bird-brained excuse!",
            Emotion::Thinking,
        )
        .with_choice(
            DialogueChoice::new("dee-alibi", "Listen to Dee's alibi", "dee-alibi-response")
                .with_reaction(ChoiceReaction::Neutral),
        )
        .with_choice(
            DialogueChoice::new(
                "press-harder",
                "Press her harder about her whereabouts",
                "dee-defensive",
            )
            .with_reaction(ChoiceReaction::Negative),
        ),
        DialogueNode::new(
            "charlie-law-lecture",
            "charlie",
            "Your Honor, according to the Bird Protection Act of 1976, any theft of bird \
             sustenance is a federal crime punishable by up to 20 years in bird prison. \
             Also, I'm pretty sure there's something about this in the Magna Carta.",
            Emotion::Objection,
        )
        .advancing_to("judge-confused-response"),
        DialogueNode::new(
            "charlie-clarification",
            "charlie",
            "What I mean, Your Honor, is that the defendant has been observed making \
             bird-like sounds, eating seeds, and attempting to fly. These are clear \
             indicators of bird identity fraud.",
            Emotion::Thinking,
        )
        .advancing_to("dee-indignant-response"),
        DialogueNode::new(
            "feather-evidence",
            "charlie",
            "TAKE THAT! This feather was found at the crime scene, and it matches the \
             defendant's... uh... hair color! This proves she was there in her bird form!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("dennis-objects-feather"),
        DialogueNode::new(
            "dee-cross-examination",
            "charlie",
            "Dee, isn't it true that you've been seen pecking at things, making squawking \
             noises, and generally acting like a large, annoying bird?",
            Emotion::Thinking,
        )
        .with_choice(
            DialogueChoice::new("dee-denies", "Let Dee deny the accusations", "dee-denial")
                .with_reaction(ChoiceReaction::Neutral),
        )
        .with_choice(
            DialogueChoice::new(
                "present-witness",
                "Call Frank as a witness to her bird behavior",
                "frank-testimony",
            )
            .with_reaction(ChoiceReaction::Positive),
        ),
        DialogueNode::new(
            "bird-law-lecture",
            "charlie",
            "The Bird Rights Amendment clearly states that all birds have the right to their \
             food, their nests, and their dignity. When someone steals from birds, they \
             become subject to bird law jurisdiction!",
            Emotion::Objection,
        )
        .advancing_to("prosecutor-counter"),
        DialogueNode::new(
            "feather-revelation",
            "charlie",
            "This feather is the smoking gun! Or should I say... the smoking wing! It proves \
             that Dee was at the scene of the crime in her true bird form!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("dee-final-objection"),
        DialogueNode::new(
            "charlie-filibuster",
            "charlie",
            "FILIBUSTER! I demand to see your bird law credentials! I bet you don't even \
             know about the Great Pigeon Accord of 1823 or the Sparrow Sovereignty Act!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("dennis-frustrated"),
        DialogueNode::new(
            "notes-presentation",
            "charlie",
            "These are my extensive bird law notes, compiled over years of rigorous study. \
             As you can see, everything I've said is backed up by legitimate bird law \
             precedent!",
            Emotion::Thinking,
        )
        .advancing_to("judge-examines-notes"),
        DialogueNode::new(
            "charlie-explanation",
            "charlie",
            "Your Honor, bird law is a complex and nuanced field. Just because it's not \
             taught in regular law school doesn't mean it's not real. Birds have rights too!",
            Emotion::Thinking,
        )
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "charlie-wildcard",
            "charlie",
            "WILDCARD! *throws papers everywhere* Your Honor, sometimes you have to think \
             outside the cage! Bird law doesn't follow human logic - it follows bird logic!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("courtroom-chaos"),
        DialogueNode::new(
            "dee-alibi-response",
            "dee",
            "I was at the gym, obviously. Working on my perfect human body that is \
             definitely not bird-like in any way!",
            Emotion::Angry,
        )
        .advancing_to("charlie-suspicious"),
        DialogueNode::new(
            "dee-defensive",
            "dee",
            "Stop harassing me, Charlie! I don't have to answer your stupid bird questions!",
            Emotion::Angry,
        )
        .advancing_to("judge-intervention"),
        DialogueNode::new(
            "judge-confused-response",
            "judge",
            "Mr. Kelly, I'm not sure any of what you just said is actual law. Are you making \
             this up as you go along?",
            Emotion::Confused,
        )
        .advancing_to("charlie-defensive"),
        DialogueNode::new(
            "dee-indignant-response",
            "dee",
            "That is the most ridiculous thing I've ever heard! I am a human woman, not a \
             bird! This whole trial is insane!",
            Emotion::Angry,
        )
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "dennis-objects-feather",
            "dennis",
            "OBJECTION! That feather could have come from any bird! This proves nothing \
             except that Charlie has lost his mind!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("charlie-counter-objection"),
        DialogueNode::new(
            "dee-denial",
            "dee",
            "I absolutely deny all of these ridiculous accusations! I am not a bird and I \
             never stole any bird seed!",
            Emotion::Angry,
        )
        .advancing_to("charlie-presents-more-evidence"),
        DialogueNode::new(
            "frank-testimony",
            "frank",
            "Yeah, I seen her! She was out there making weird noises and pecking at stuff. \
             Looked like a big, ugly bird to me!",
            Emotion::Thinking,
        )
        .advancing_to("dee-outraged"),
        DialogueNode::new(
            "case-conclusion",
            "judge",
            "This has been... the most unusual case I've ever presided over. I'm not sure \
             what bird law is, but I'm declaring this case... dismissed due to confusion.",
            Emotion::Confused,
        )
        .verdict(),
        DialogueNode::new(
            "dee-final-objection",
            "dee",
            "ENOUGH! This is harassment! I demand this case be thrown out immediately!",
            Emotion::Angry,
        )
        .objection()
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "dennis-frustrated",
            "dennis",
            "Your Honor, this is getting ridiculous. Mr. Kelly is clearly making up laws \
             that don't exist!",
            Emotion::Angry,
        )
        .advancing_to("judge-final-decision"),
        DialogueNode::new(
            "judge-examines-notes",
            "judge",
            "These appear to be... crayon drawings of birds with legal terminology written \
             underneath. Mr. Kelly, this is not legitimate legal documentation.",
            Emotion::Confused,
        )
        .advancing_to("charlie-insists"),
        DialogueNode::new(
            "courtroom-chaos",
            "judge",
            "ORDER! ORDER IN THE COURT! Mr. Kelly, please stop throwing papers and sit down!",
            Emotion::Angry,
        )
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "charlie-suspicious",
            "charlie",
            "The gym? That's exactly where a bird would go to practice flying! Your alibi \
             only makes you more suspicious!",
            Emotion::Thinking,
        )
        .advancing_to("dee-exasperated"),
        DialogueNode::new(
            "judge-intervention",
            "judge",
            "Mr. Kelly, please conduct yourself properly in my courtroom. Ms. Reynolds, \
             please answer the question.",
            Emotion::Serious,
        )
        .advancing_to("dee-reluctant-answer"),
        DialogueNode::new(
            "charlie-defensive",
            "charlie",
            "I am not making this up! Bird law is a legitimate field of study! Just because \
             you don't understand it doesn't mean it's not real!",
            Emotion::Angry,
        )
        .advancing_to("judge-final-decision"),
        DialogueNode::new(
            "charlie-counter-objection",
            "charlie",
            "OBJECTION TO YOUR OBJECTION! The feather is clearly from the defendant! Look at \
             the blonde coloring!",
            Emotion::Objection,
        )
        .objection()
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "charlie-presents-more-evidence",
            "charlie",
            "Then explain THIS! *dramatically points* You were seen making bird noises just \
             yesterday!",
            Emotion::Objection,
        )
        .advancing_to("dee-final-objection"),
        DialogueNode::new(
            "dee-outraged",
            "dee",
            "FRANK! You're supposed to be on my side! I am NOT a bird!",
            Emotion::Angry,
        )
        .advancing_to("frank-shrugs"),
        DialogueNode::new(
            "judge-final-decision",
            "judge",
            "I've heard enough. This case is dismissed due to... whatever this was. Court \
             adjourned!",
            Emotion::Confused,
        )
        .verdict(),
        DialogueNode::new(
            "charlie-insists",
            "charlie",
            "Those aren't crayon drawings! They're detailed legal diagrams! The bird with \
             the little hat is clearly representing judicial authority!",
            Emotion::Angry,
        )
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "dee-exasperated",
            "dee",
            "Charlie, you are absolutely insane! Going to the gym doesn't make me a bird!",
            Emotion::Angry,
        )
        .advancing_to("charlie-final-argument"),
        DialogueNode::new(
            "dee-reluctant-answer",
            "dee",
            "Fine! I was at the gym, then I went home. I did NOT steal any bird seed because \
             I am NOT a bird!",
            Emotion::Angry,
        )
        .advancing_to("charlie-final-argument"),
        DialogueNode::new(
            "frank-shrugs",
            "frank",
            "Hey, I calls 'em like I sees 'em. You looked like a bird to me, bird.",
            Emotion::Neutral,
        )
        .advancing_to("case-conclusion"),
        DialogueNode::new(
            "charlie-final-argument",
            "charlie",
            "Your Honor, the evidence is clear! The defendant exhibits all the classic signs \
             of being a bird in disguise! I rest my case!",
            Emotion::Objection,
        )
        .advancing_to("judge-final-decision"),
    ]
}
