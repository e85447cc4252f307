use crate::runtime::{
    interpreter::{Message, Outcome},
    memory::Memory,
    value::Value,
};
use std::collections::BTreeMap;

/// Collects `SEND` messages from every agent of one owner during a tick and
/// resolves them into the registers those agents read on the next tick.
///
/// Per key, the highest priority wins. Among submissions at that priority
/// the most frequent value wins, ties going to the value that reached the
/// count first.
#[derive(Clone, Debug, Default)]
pub struct CommsBoard {
    entries: BTreeMap<String, Submissions>,
}

#[derive(Clone, Debug)]
struct Submissions {
    priority: f64,
    values: Vec<Value>,
}

impl CommsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, key: &str, message: &Message) {
        let current = self.entries.get(key).map(|entry| entry.priority);
        match current {
            Some(priority) if priority > message.priority => {}
            Some(priority) if priority == message.priority => {
                if let Some(entry) = self.entries.get_mut(key) {
                    entry.values.push(message.value.clone());
                }
            }
            _ => {
                self.entries.insert(
                    key.to_string(),
                    Submissions {
                        priority: message.priority,
                        values: vec![message.value.clone()],
                    },
                );
            }
        }
    }

    pub fn submit_outcome(&mut self, outcome: &Outcome) {
        for (key, message) in &outcome.comms {
            self.submit(key, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every key and clears the board for the next tick.
    pub fn drain(&mut self) -> Memory {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(key, entry)| (key, most_frequent(entry.values)))
            .collect()
    }
}

fn most_frequent(values: Vec<Value>) -> Value {
    let mut counts: Vec<(Value, usize)> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    for value in values {
        let slot = match counts.iter().position(|(seen, _)| *seen == value) {
            Some(slot) => slot,
            None => {
                counts.push((value, 0));
                counts.len() - 1
            }
        };
        counts[slot].1 += 1;
        let count = counts[slot].1;
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((slot, count));
        }
    }
    best.map(|(slot, _)| counts.swap_remove(slot).0)
        .unwrap_or_default()
}
