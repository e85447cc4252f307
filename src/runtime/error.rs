use crate::language::opcode::Opcode;
use crate::runtime::value::Value;
use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// A fault raised while executing an instruction. `line` is the 0-based
/// source line of that instruction.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("L{} {kind}", .line + 1)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: usize,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Can't {op} {left} {right}")]
    TypeMismatch {
        op: Opcode,
        left: Value,
        right: Value,
    },
    #[error("Can't PUSH {value}, expected array or number")]
    PushOperand { value: Value },
    #[error("{op} expected array, got {value}")]
    ExpectedArray { op: Opcode, value: Value },
    #[error("GET expected index to be a number, got {value}")]
    ExpectedIndex { value: Value },
    #[error("Index {index} out of bounds")]
    IndexOutOfBounds { index: Value },
    #[error("VDIR expected array of length 2, got {value}")]
    ExpectedVector2 { value: Value },
    #[error("{op} expected number, got {value}")]
    ExpectedNumber { op: Opcode, value: Value },
    #[error("Unknown label {label}")]
    UnknownLabel { label: String },
    #[error("Can't {op} to {value}")]
    BadJumpTarget { op: Opcode, value: Value },
    #[error("Can't compare {value} to 0")]
    NotComparable { value: Value },
    #[error("SEND expected priority to be a number, got {value}")]
    ExpectedPriority { value: Value },
    /// Operands missing or of the wrong kind, only possible for programs
    /// that were built by hand instead of parsed.
    #[error("Malformed {op} instruction")]
    MalformedInstruction { op: Opcode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_one_based_line() {
        let err = RuntimeError::new(
            RuntimeErrorKind::TypeMismatch {
                op: Opcode::Add,
                left: Value::from([2.0, 3.0]),
                right: Value::Number(5.0),
            },
            6,
        );
        assert_eq!(err.message(), "Can't ADD 2,3 5");
        assert_eq!(err.to_string(), "L7 Can't ADD 2,3 5");
    }

    #[test]
    fn unknown_label_message() {
        let kind = RuntimeErrorKind::UnknownLabel {
            label: "@nowhere".into(),
        };
        assert_eq!(kind.to_string(), "Unknown label @nowhere");
    }
}
