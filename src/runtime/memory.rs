use crate::runtime::value::Value;
use std::collections::btree_map::{self, BTreeMap};

/// Per-agent register store. Registers that were never written read as
/// [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Memory {
    registers: BTreeMap<String, Value>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Value {
        self.registers.get(name).cloned().unwrap_or_default()
    }

    pub fn get_ref(&self, name: &str) -> Option<&Value> {
        self.registers.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.registers.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.registers.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.registers.iter()
    }

    /// Copies every entry of `other` over this store, the way a host merges
    /// aggregated inputs before a tick.
    pub fn extend_from(&mut self, other: &Memory) {
        for (name, value) in other.iter() {
            self.registers.insert(name.clone(), value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a Memory {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Memory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut memory = Memory::new();
        for (name, value) in iter {
            memory.set(name, value);
        }
        memory
    }
}
