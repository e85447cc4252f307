use crate::language::{
    parser::parse_literal,
    token::{SourceLocation, Token, REGISTER_SIGIL},
};
use crate::runtime::memory::Memory;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

pub const CONFIG_FILE: &str = "crasm.toml";
pub const DEFAULT_CYCLE_LIMIT: usize = 1000;
pub const DEFAULT_TICKS: usize = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {error}", path.display())]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("bad value for register {register}: {message}")]
    BadRegister { register: String, message: String },
}

/// Settings for a `crasm run`, read from `crasm.toml` and overridden by
/// command line flags.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub cycle_limit: usize,
    pub ticks: usize,
    pub entry: Option<String>,
    pub seed: Option<u64>,
    /// Initial register contents, written in literal syntax.
    pub registers: BTreeMap<String, String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycle_limit: DEFAULT_CYCLE_LIMIT,
            ticks: DEFAULT_TICKS,
            entry: None,
            seed: None,
            registers: BTreeMap::new(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Loads `crasm.toml` from `dir` if there is one.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|error| error.to_string())
    }

    /// Parses a `$reg=literal` assignment and records it, replacing any
    /// earlier value for the same register.
    pub fn set_register(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let Some((register, literal)) = assignment.split_once('=') else {
            return Err(ConfigError::BadRegister {
                register: assignment.to_string(),
                message: "expected $register=literal".into(),
            });
        };
        self.registers
            .insert(register.trim().to_string(), literal.trim().to_string());
        Ok(())
    }

    /// Builds the starting register store from `registers`.
    pub fn memory(&self) -> Result<Memory, ConfigError> {
        let mut memory = Memory::new();
        for (register, literal) in &self.registers {
            memory.set(register.as_str(), register_value(register, literal)?);
        }
        Ok(memory)
    }
}

fn register_value(
    register: &str,
    literal: &str,
) -> Result<crate::runtime::value::Value, ConfigError> {
    let bad = |message: String| ConfigError::BadRegister {
        register: register.to_string(),
        message,
    };
    if !register.starts_with(REGISTER_SIGIL) || register.len() < 2 {
        return Err(bad(format!("register names start with {REGISTER_SIGIL}")));
    }
    let literal = literal.trim();
    if literal.is_empty() || literal.contains(char::is_whitespace) {
        return Err(bad(format!("'{literal}' is not a single literal")));
    }
    let lines: Arc<[String]> = Arc::from(vec![literal.to_string()]);
    let token = Token::new(literal, SourceLocation::new(0, 0));
    parse_literal(&token, &lines).map_err(|err| bad(err.message))
}
