//! In-memory keyed stores for users and groups.

use std::collections::{hash_map::Entry, HashMap};

use crate::domain::{Group, Identifiable, User};
use crate::errors::SplitError;

/// Keyed store for any entity exposing an identifier.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: HashMap<String, T>,
}

pub type UserRegistry = Registry<User>;
pub type GroupRegistry = Registry<Group>;

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Identifiable> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Stores `entry` under its id, returning the entry it replaced.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.id().to_string(), entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in ascending order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Registry<User> {
    pub fn get(&self, id: &str) -> Result<&User, SplitError> {
        self.find(id)
            .ok_or_else(|| SplitError::UnknownUser(id.to_string()))
    }

    /// Fails with the first id that has no registered user.
    pub fn ensure_all<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<(), SplitError> {
        for id in ids {
            self.get(id)?;
        }
        Ok(())
    }
}

impl Registry<Group> {
    pub fn get(&self, name: &str) -> Result<&Group, SplitError> {
        self.find(name)
            .ok_or_else(|| SplitError::UnknownGroup(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Group, SplitError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| SplitError::UnknownGroup(name.to_string()))
    }

    /// Creates a fresh group, replacing any group with the same name.
    pub fn create(&mut self, name: &str, members: &[String]) -> &mut Group {
        let group = Group::new(name, members.iter().cloned());
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(group);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(group),
        }
    }
}
