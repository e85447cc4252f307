use crate::{
    language::errors::ParseError,
    project::config::ConfigError,
    runtime::error::RuntimeError,
};
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(crasm::parse))]
pub struct SyntaxDiagnostic {
    #[source_code]
    src: NamedSource,
    #[label("{label}")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
    message: String,
    label: String,
}

impl SyntaxDiagnostic {
    pub fn from_error(name: &str, err: &ParseError) -> Self {
        let source = err.source_lines.join("\n");
        Self {
            src: NamedSource::new(name, source),
            span: (err.offset(), token_len(err.source_line(), err.column())).into(),
            help: help_for(&err.message),
            message: err.message.clone(),
            label: "here".into(),
        }
    }
}

pub fn emit_parse_error(name: &str, err: &ParseError) {
    let diagnostic = SyntaxDiagnostic::from_error(name, err);
    eprintln!("{:?}", Report::new(diagnostic));
}

pub fn report_runtime_error(name: &str, error: &RuntimeError) {
    eprintln!("Runtime error in {name}: {error}");
}

pub fn report_config_error(error: &ConfigError) {
    eprintln!("Config error: {error}");
}

pub fn report_io_error(path: &Path, error: &std::io::Error) {
    eprintln!("Failed to access {}: {}", path.display(), error);
}

// span covers the rest of the word (or array element) under the caret
fn token_len(line: &str, column: usize) -> usize {
    line.get(column..)
        .map(|rest| {
            rest.chars()
                .take_while(|ch| !ch.is_whitespace() && *ch != ',')
                .map(char::len_utf8)
                .sum::<usize>()
        })
        .unwrap_or(0)
        .max(1)
}

fn help_for(message: &str) -> Option<String> {
    if message.starts_with("Bad instruction") {
        Some("run `crasm docs` for the list of instructions".into())
    } else if message.starts_with("Unexpected code after") {
        Some("put the instruction on the line after the label".into())
    } else if message.contains("should be a register") {
        Some("results can only be stored in a $register".into())
    } else {
        None
    }
}
