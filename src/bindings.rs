use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::MatchError;
use crate::value::Value;

/// Names bound by a successful match, in the order they were first bound.
///
/// The sequence is the canonical form; [`Bindings::get`] and
/// [`Bindings::to_map`] give the name-keyed view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(name: &str, value: Value) -> Self {
        Bindings {
            entries: vec![(name.to_string(), value)],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Positional view, for handing the bindings to a handler as arguments.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    pub fn to_map(&self) -> HashMap<String, Value> {
        self.entries.iter().cloned().collect()
    }

    /// Appends `other` after `self`. Fails with every name the two sets share.
    pub(crate) fn merge(mut self, other: Bindings) -> Result<Bindings, MatchError> {
        let shared: Vec<String> = other
            .names()
            .filter(|n| self.contains(n))
            .map(str::to_string)
            .collect();
        if !shared.is_empty() {
            return Err(MatchError::DuplicateBinding { names: shared });
        }
        self.entries.extend(other.entries);
        Ok(self)
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// Written entry by entry so JSON output keeps binding order.
impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
