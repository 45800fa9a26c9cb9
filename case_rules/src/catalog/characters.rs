//! The shared character roster used by the built-in cases.

use crate::entities::{Character, Emotion, Personality, Severity};

/// Every character appearing in the built-in cases.
pub fn roster() -> Vec<Character> {
    vec![
        charlie(),
        mac(),
        dee(),
        judge(),
        dennis(),
        frank(),
        waitress(),
        cricket(),
        artemis(),
    ]
}

fn charlie() -> Character {
    Character::new("charlie", "Charlie Kelly", Personality::Chaotic)
        .with_title("Bird Law Expert")
        .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/charlie-pointing.svg")
        .with_sprite(Emotion::Confused, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Thinking, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/charlie-pointing.svg")
        .with_reaction(
            Severity::Mild,
            "Wait, let me think about this bird law angle...",
        )
        .with_reaction(Severity::Severe, "This doesn't fit my bird law theory at all!")
        .with_reaction(
            Severity::Critical,
            "The birds are telling me this is all wrong!",
        )
        .with_catchphrase("Bird law in this country is not governed by reason!")
        .with_catchphrase("I'm well versed in bird law.")
        .with_catchphrase("Filibuster!")
        .with_catchphrase("Wildcard, bitches!")
}

fn mac() -> Character {
    Character::new("mac", "Mac", Personality::Serious)
        .with_title("Security Expert")
        .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/charlie-pointing.svg")
        .with_sprite(Emotion::Confused, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Thinking, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/charlie-pointing.svg")
        .with_reaction(Severity::Mild, "Charlie, that's not how evidence works.")
        .with_reaction(Severity::Severe, "Dude, you're completely off base here.")
        .with_reaction(
            Severity::Critical,
            "This is why nobody takes you seriously, Charlie!",
        )
}

fn dee() -> Character {
    Character::new("dee", "Dee Reynolds", Personality::Sarcastic)
        .with_title("The Defendant")
        .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/charlie-pointing.svg")
        .with_sprite(Emotion::Confused, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Thinking, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/charlie-pointing.svg")
        .with_reaction(Severity::Mild, "Charlie, you're being ridiculous.")
        .with_reaction(Severity::Severe, "This is exactly why nobody listens to you!")
        .with_reaction(Severity::Critical, "You're insane! I am NOT a bird!")
}

fn judge() -> Character {
    Character::new("judge", "Judge", Personality::Serious)
        .with_title("Honorable Judge")
        .with_sprite(Emotion::Neutral, "/sprites/judge-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/judge-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/judge-normal.svg")
        .with_sprite(Emotion::Confused, "/sprites/judge-shocked.svg")
        .with_sprite(Emotion::Thinking, "/sprites/judge-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/judge-shocked.svg")
        .with_reaction(
            Severity::Mild,
            "Mr. Kelly, please stay focused on the matter at hand.",
        )
        .with_reaction(Severity::Severe, "This is highly irregular, Mr. Kelly.")
        .with_reaction(Severity::Critical, "I'm considering holding you in contempt!")
}

fn dennis() -> Character {
    Character::new("dennis", "Dennis Reynolds", Personality::Narcissistic)
        .with_title("Prosecuting Attorney")
        .with_sprite(Emotion::Neutral, "/sprites/prosecutor-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/prosecutor-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/prosecutor-pointing.svg")
        .with_sprite(Emotion::Confused, "/sprites/prosecutor-normal.svg")
        .with_sprite(Emotion::Thinking, "/sprites/prosecutor-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/prosecutor-pointing.svg")
        .with_sprite(Emotion::Smug, "/sprites/prosecutor-normal.svg")
        .with_reaction(
            Severity::Mild,
            "Charlie, your legal acumen is... questionable at best.",
        )
        .with_reaction(
            Severity::Severe,
            "This is exactly the kind of incompetence I expected from you.",
        )
        .with_reaction(
            Severity::Critical,
            "You're embarrassing yourself, Charlie. I'm a five-star lawyer!",
        )
        .with_catchphrase("I am a five-star man!")
        .with_catchphrase("I'm a golden god!")
        .with_catchphrase("Because of the implication...")
        .with_catchphrase("I haven't even begun to peak!")
}

fn frank() -> Character {
    Character::new("frank", "Frank Reynolds", Personality::Chaotic)
        .with_title("Witness")
        .with_sprite(Emotion::Neutral, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Happy, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Angry, "/sprites/charlie-pointing.svg")
        .with_sprite(Emotion::Confused, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Thinking, "/sprites/charlie-normal.svg")
        .with_sprite(Emotion::Objection, "/sprites/charlie-pointing.svg")
        .with_reaction(Severity::Mild, "What? That don't make no sense!")
        .with_reaction(
            Severity::Severe,
            "You're as confused as I am, and that's saying something!",
        )
        .with_reaction(
            Severity::Critical,
            "This whole thing's gone to hell! Where's my gun?",
        )
        .with_catchphrase("So anyway, I started blasting...")
        .with_catchphrase("Can I offer you an egg in this trying time?")
        .with_catchphrase("I don't know how many years on this Earth I got left...")
        .with_catchphrase("Rum ham!")
}

fn waitress() -> Character {
    Character::new("waitress", "The Waitress", Personality::Sarcastic)
        .with_title("Reluctant Witness")
        .with_sprite(Emotion::Neutral, "/sprites/waitress-neutral.svg")
        .with_sprite(Emotion::Happy, "/sprites/waitress-happy.svg")
        .with_sprite(Emotion::Angry, "/sprites/waitress-angry.svg")
        .with_sprite(Emotion::Confused, "/sprites/waitress-confused.svg")
        .with_sprite(Emotion::Thinking, "/sprites/waitress-thinking.svg")
        .with_sprite(Emotion::Objection, "/sprites/waitress-objection.svg")
        .with_reaction(Severity::Mild, "Charlie, that makes absolutely no sense.")
        .with_reaction(Severity::Severe, "Why am I even here? This is insane!")
        .with_reaction(Severity::Critical, "I can't take this anymore! You're all crazy!")
}

fn cricket() -> Character {
    Character::new("cricket", "Rickety Cricket", Personality::Unhinged)
        .with_title("Street Witness")
        .with_sprite(Emotion::Neutral, "/sprites/cricket-neutral.svg")
        .with_sprite(Emotion::Happy, "/sprites/cricket-happy.svg")
        .with_sprite(Emotion::Angry, "/sprites/cricket-angry.svg")
        .with_sprite(Emotion::Confused, "/sprites/cricket-confused.svg")
        .with_sprite(Emotion::Thinking, "/sprites/cricket-thinking.svg")
        .with_sprite(Emotion::Objection, "/sprites/cricket-objection.svg")
        .with_reaction(
            Severity::Mild,
            "That's... that's not how I remember it, but then again...",
        )
        .with_reaction(
            Severity::Severe,
            "My mind's been through a lot, Charlie. Are you sure about that?",
        )
        .with_reaction(
            Severity::Critical,
            "The birds... they speak to me sometimes. They're not happy about this.",
        )
}

fn artemis() -> Character {
    Character::new("artemis", "Artemis", Personality::Eccentric)
        .with_title("Court Clerk")
        .with_sprite(Emotion::Neutral, "/sprites/artemis-neutral.svg")
        .with_sprite(Emotion::Happy, "/sprites/artemis-happy.svg")
        .with_sprite(Emotion::Angry, "/sprites/artemis-angry.svg")
        .with_sprite(Emotion::Confused, "/sprites/artemis-confused.svg")
        .with_sprite(Emotion::Thinking, "/sprites/artemis-thinking.svg")
        .with_sprite(Emotion::Objection, "/sprites/artemis-objection.svg")
        .with_reaction(Severity::Mild, "That evidence has no artistic merit whatsoever.")
        .with_reaction(
            Severity::Severe,
            "This is like a bad performance art piece, Charlie.",
        )
        .with_reaction(
            Severity::Critical,
            "I once incorporated a sandwich into my act. This is worse.",
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique() {
        use std::collections::HashSet;

        let roster = roster();
        let ids: HashSet<_> = roster.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_every_character_has_neutral_sprite_and_full_reactions() {
        for character in roster() {
            assert!(
                character.sprites.contains_key(&Emotion::Neutral),
                "{} lacks a neutral sprite",
                character.id
            );
            assert!(!character.reactions.mild.is_empty());
            assert!(!character.reactions.severe.is_empty());
            assert!(!character.reactions.critical.is_empty());
        }
    }
}
