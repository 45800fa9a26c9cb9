//! # Case Rules
//!
//! The "Case File" crate - all courtroom content definitions: characters,
//! evidence, dialogue graphs, cases, and their load-time validation. This
//! crate is the single source of truth for case data and contains no engine
//! logic.

pub mod case;
pub mod catalog;
pub mod dialogue;
pub mod entities;
pub mod validation;

pub use case::*;
pub use dialogue::*;
pub use entities::*;
pub use validation::*;
