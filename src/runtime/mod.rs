pub mod error;
pub mod interpreter;
pub mod memory;
pub mod rng;
pub mod value;

pub use interpreter::{Interpreter, STATE_REGISTER};
