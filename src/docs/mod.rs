mod printer;
mod search;
mod topics;

pub use printer::{print_reference, print_search};
pub use search::{all_docs, search_docs, SearchResult};
pub use topics::{OpDoc, RegisterDoc, OP_DOCS, REGISTER_DOCS};
