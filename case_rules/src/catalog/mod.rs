//! The built-in case catalog, expressed as static tables.
//!
//! How cases are authored or shipped is a collaborator concern; the engine
//! only ever consumes the ordered list returned by [`catalog`].

mod bird_seed;
mod characters;
mod pigeon;

pub use bird_seed::bird_seed_case;
pub use characters::roster;
pub use pigeon::pigeon_case;

use crate::case::Case;

/// The ordered list of built-in cases.
pub fn catalog() -> Vec<Case> {
    vec![bird_seed_case(), pigeon_case()]
}
