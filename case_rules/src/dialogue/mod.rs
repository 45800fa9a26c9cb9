//! Dialogue graph definitions - nodes, choices, and trees.

mod node;
mod tree;

pub use node::*;
pub use tree::*;
