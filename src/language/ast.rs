use crate::language::opcode::{ArgKind, Opcode};
use crate::runtime::value::Value;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Register(String),
    Literal(Value),
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Register(_) => ArgKind::Register,
            Arg::Literal(_) => ArgKind::Literal,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Register(name) => f.write_str(name),
            Arg::Literal(value) => write!(f, "{value}"),
        }
    }
}

/// A single parsed instruction. `line` is the 0-based source line it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Op {
    pub opcode: Opcode,
    pub args: Vec<Arg>,
    pub line: usize,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.name())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A flat instruction list plus the label table. A label maps to the index
/// of the instruction that follows it, which may be `ops.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
    pub labels: HashMap<String, usize>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
