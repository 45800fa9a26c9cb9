//! Entity definitions for the courtroom world.

mod character;
mod evidence;

pub use character::*;
pub use evidence::*;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Unique identifier for characters.
    CharacterId
}

string_id! {
    /// Unique identifier for evidence items.
    EvidenceId
}

string_id! {
    /// Unique identifier for a choice within a dialogue node.
    ChoiceId
}

string_id! {
    /// Unique identifier for dialogue nodes.
    NodeId
}

string_id! {
    /// Unique identifier for dialogue trees.
    TreeId
}

string_id! {
    /// Unique identifier for cases.
    CaseId
}
