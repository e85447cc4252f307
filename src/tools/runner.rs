use crate::language::ast::Program;
use crate::runtime::{
    error::RuntimeError,
    interpreter::{Interpreter, Outcome, STATE_REGISTER},
    memory::Memory,
    rng::{RandomSource, RngStream},
};
use crate::tools::comms::CommsBoard;
use log::{error, info, warn};

/// What happened during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: usize,
    pub outcome: Outcome,
    /// Set when the tick was cut short by a runtime fault. Messages and
    /// register writes made before the fault are kept.
    pub error: Option<RuntimeError>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && !self.outcome.timeout
    }
}

/// Drives one program for a number of ticks against a single register
/// store, the way a host calls it once per simulation step.
pub struct TickRunner<R: RandomSource = RngStream> {
    interpreter: Interpreter<R>,
    ticks: usize,
    entry: Option<String>,
}

impl TickRunner<RngStream> {
    pub fn new(cycle_limit: usize, ticks: usize) -> Self {
        Self::with_interpreter(Interpreter::new(cycle_limit), ticks)
    }
}

impl<R: RandomSource> TickRunner<R> {
    pub fn with_interpreter(interpreter: Interpreter<R>, ticks: usize) -> Self {
        Self {
            interpreter,
            ticks,
            entry: None,
        }
    }

    /// Label to start from on ticks where `$state` holds no label.
    pub fn with_entry(mut self, entry: Option<String>) -> Self {
        self.entry = entry;
        self
    }

    pub fn run(&mut self, program: &Program, memory: &mut Memory) -> Vec<TickReport> {
        (0..self.ticks)
            .map(|tick| self.tick(tick, program, memory))
            .collect()
    }

    fn tick(&mut self, tick: usize, program: &Program, memory: &mut Memory) -> TickReport {
        let state = memory.get(STATE_REGISTER);
        let entry = state.as_label().or(self.entry.as_deref());

        let mut outcome = Outcome::default();
        let result = self
            .interpreter
            .execute_into(program, memory, entry, &mut outcome);

        if let Err(err) = &result {
            error!("tick {tick}: {err}");
        } else if outcome.timeout {
            warn!(
                "tick {tick}: timed out after {} cycles",
                self.interpreter.cycle_limit()
            );
        } else {
            info!("tick {tick}: finished in {} cycles", outcome.cycles);
        }

        // messages sent this tick are readable on the next one
        let mut board = CommsBoard::new();
        board.submit_outcome(&outcome);
        memory.extend_from(&board.drain());

        TickReport {
            tick,
            outcome,
            error: result.err(),
        }
    }
}
