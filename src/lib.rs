pub mod cli;
pub mod docs;
pub mod language;
pub mod project;
pub mod runtime;
pub mod tools;


pub use language::{ast::Program, errors::ParseError, parser::parse};
pub use runtime::{
    error::RuntimeError,
    interpreter::{execute, execute_resumable, Interpreter, Message, Outcome},
    memory::Memory,
    value::Value,
};
