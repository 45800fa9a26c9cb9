//! The evidence inventory and combination recipe lookup.

use case_rules::{CombinationRecipe, Evidence, EvidenceId};

/// The player's evidence collection. Ids are unique; adding an item that is
/// already held replaces the earlier entry (last write wins).
#[derive(Debug, Clone, Default)]
pub struct EvidenceInventory {
    items: Vec<Evidence>,
}

impl EvidenceInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an inventory from a persisted item list, re-applying the
    /// id-uniqueness rule.
    pub fn from_items(items: impl IntoIterator<Item = Evidence>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    /// Insert or replace by id. Idempotent; no error condition.
    pub fn add(&mut self, item: Evidence) {
        self.items.retain(|held| held.id != item.id);
        self.items.push(item);
    }

    pub fn has(&self, id: &EvidenceId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn get(&self, id: &EvidenceId) -> Option<&Evidence> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evidence> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Evidence] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items eligible as combination inputs. Synthesized evidence is
    /// excluded: combos of combos are not a thing, and that is an engine
    /// rule rather than a display nicety.
    pub fn combination_candidates(&self) -> impl Iterator<Item = &Evidence> {
        self.items.iter().filter(|item| !item.is_combo)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Find the recipe covering the unordered pair `{a, b}`.
///
/// Recipes are expected to be non-overlapping; if several match the same
/// pair, the first in list order wins. That tie-break is deterministic but
/// authoring order is not meant to be load-bearing.
pub fn find_recipe<'a>(
    recipes: &'a [CombinationRecipe],
    a: &EvidenceId,
    b: &EvidenceId,
) -> Option<&'a CombinationRecipe> {
    recipes.iter().find(|recipe| recipe.matches_pair(a, b))
}
