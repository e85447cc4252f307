pub mod comms;
pub mod diagnostics;
pub mod runner;
