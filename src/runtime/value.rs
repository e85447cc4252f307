use std::fmt;

/// A runtime value held in a register or written as a literal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    /// A jump target such as `@loop`, sigil included.
    Label(String),
    Array(Vec<f64>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Label(_) => "label",
            Value::Array(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Value::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Zero test used by conditional jumps: `null`, `0` and an all-zero
    /// array are zero. Labels have no zero and yield `None`.
    pub fn is_zero(&self) -> Option<bool> {
        match self {
            Value::Null => Some(true),
            Value::Number(n) => Some(*n == 0.0),
            Value::Array(items) => Some(items.iter().all(|x| *x == 0.0)),
            Value::Label(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::Array(items)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(items: [f64; N]) -> Self {
        Value::Array(items.to_vec())
    }
}

pub(crate) struct NumberDisplay(pub f64);

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            f.write_str("NaN")
        } else if n.is_infinite() {
            f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{n}")
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Number(n) => write!(f, "{}", NumberDisplay(*n)),
            Value::Label(label) => f.write_str(label),
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", NumberDisplay(*item))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_host_rendering() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Label("@end".into()).to_string(), "@end");
        assert_eq!(Value::from([1.0, 2.5]).to_string(), "1,2.5");
        assert_eq!(Value::Array(vec![]).to_string(), "");
    }

    #[test]
    fn zero_test_shapes() {
        assert_eq!(Value::Null.is_zero(), Some(true));
        assert_eq!(Value::Number(0.0).is_zero(), Some(true));
        assert_eq!(Value::Number(5.0).is_zero(), Some(false));
        assert_eq!(Value::from([0.0, 0.0]).is_zero(), Some(true));
        assert_eq!(Value::from([0.0, 1.0]).is_zero(), Some(false));
        assert_eq!(Value::Label("@a".into()).is_zero(), None);
    }
}
