use super::search::{all_docs, search_docs, SearchResult};
use std::io::{self, Write};

pub fn print_reference(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "crasm reference:")?;
    writeln!(
        out,
        "*Hint - use `crasm docs <query>` to search by name or description\n"
    )?;
    print_results(out, &all_docs())
}

/// Prints the matches for `query`. Returns `Ok(false)` when nothing matched.
pub fn print_search(out: &mut dyn Write, query: &str) -> io::Result<bool> {
    let results = search_docs(query);
    if results.is_empty() {
        return Ok(false);
    }
    print_results(out, &results)?;
    Ok(true)
}

fn print_results(out: &mut dyn Write, results: &[SearchResult]) -> io::Result<()> {
    let width = results
        .iter()
        .map(|result| result.spec.len())
        .max()
        .unwrap_or(0);
    for result in results {
        writeln!(out, "{:<width$}  {}", result.spec, result.description)?;
    }
    Ok(())
}
