use super::topics::{OP_DOCS, REGISTER_DOCS};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub spec: String,
    pub description: String,
}

const DESCRIPTION_FALLBACK_BELOW: usize = 3;
const DESCRIPTION_MIN_QUERY: usize = 3;

/// Looks up opcodes and registers by name prefix, falling back to a
/// description search when the prefix match finds little.
pub fn search_docs(query: &str) -> Vec<SearchResult> {
    let query = query.to_lowercase();
    let mut results = Vec::new();
    let mut added = HashSet::new();

    for doc in OP_DOCS {
        if doc.name().to_lowercase().starts_with(&query) {
            results.push(entry(doc.name(), doc.spec, doc.description));
            added.insert(doc.name());
        }
    }
    for doc in REGISTER_DOCS {
        let bare = doc.name.trim_start_matches('$');
        if doc.name.starts_with(&query) || bare.starts_with(&query) {
            results.push(entry(doc.name, doc.spec, doc.description));
            added.insert(doc.name);
        }
    }

    if results.len() < DESCRIPTION_FALLBACK_BELOW && query.len() >= DESCRIPTION_MIN_QUERY {
        for doc in OP_DOCS {
            if !added.contains(doc.name()) && doc.description.to_lowercase().contains(&query) {
                results.push(entry(doc.name(), doc.spec, doc.description));
                added.insert(doc.name());
            }
        }
        for doc in REGISTER_DOCS {
            if !added.contains(doc.name) && doc.description.to_lowercase().contains(&query) {
                results.push(entry(doc.name, doc.spec, doc.description));
                added.insert(doc.name);
            }
        }
    }
    results
}

/// Every opcode followed by every register, in table order.
pub fn all_docs() -> Vec<SearchResult> {
    OP_DOCS
        .iter()
        .map(|doc| entry(doc.name(), doc.spec, doc.description))
        .chain(
            REGISTER_DOCS
                .iter()
                .map(|doc| entry(doc.name, doc.spec, doc.description)),
        )
        .collect()
}

fn entry(name: &str, spec: &str, description: &str) -> SearchResult {
    SearchResult {
        spec: format!("{name} {spec}"),
        description: description.to_string(),
    }
}
