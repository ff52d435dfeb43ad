//! Session-scoped favorites
//!
//! A working set of favorited specialist ids, alive only for the current
//! session. Updates are reducer-style: apply an action, get the next state.
//! Adds are idempotent, so the count always equals the number of distinct
//! favorited ids.

use std::collections::BTreeSet;

use crate::catalog::SpecialistId;

/// Reducer actions for the favorites set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add(SpecialistId),
    Remove(SpecialistId),
    Clear,
}

/// The favorites working set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<SpecialistId>,
}

impl Favorites {
    /// Start with an empty set, as at provider mount
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the next state
    pub fn apply(mut self, action: FavoriteAction) -> Self {
        match action {
            FavoriteAction::Add(id) => {
                self.ids.insert(id);
            }
            FavoriteAction::Remove(id) => {
                self.ids.remove(&id);
            }
            FavoriteAction::Clear => {
                self.ids.clear();
            }
        }
        self
    }

    /// Flip an id in or out of the set (convenience for interactive use)
    pub fn toggle(self, id: SpecialistId) -> Self {
        if self.contains(id) {
            self.apply(FavoriteAction::Remove(id))
        } else {
            self.apply(FavoriteAction::Add(id))
        }
    }

    pub fn contains(&self, id: SpecialistId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorited specialists
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = SpecialistId> + '_ {
        self.ids.iter().copied()
    }
}
