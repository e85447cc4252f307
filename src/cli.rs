use crate::{
    docs,
    language::{ast::Program, parser::parse},
    project::config::RunConfig,
    runtime::{interpreter::Interpreter, memory::Memory, rng::RngStream, value::Value},
    tools::{
        diagnostics::{emit_parse_error, report_config_error, report_io_error, report_runtime_error},
        runner::{TickReport, TickRunner},
    },
};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

#[derive(Debug, Parser)]
#[command(name = "crasm", version, about = "Check, run and look up crasm programs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a program and report the first error
    Check { file: PathBuf },
    /// Run a program for one or more ticks
    Run(RunArgs),
    /// Print the instruction and register reference, or search it
    Docs { query: Option<String> },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    pub file: PathBuf,
    /// Run configuration (defaults to crasm.toml next to the program)
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub cycles: Option<usize>,
    #[arg(long)]
    pub ticks: Option<usize>,
    /// Label to start from while $state holds none
    #[arg(long)]
    pub entry: Option<String>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Preset a register, e.g. --set '$pos=10,20'
    #[arg(long = "set", value_name = "$REG=LITERAL")]
    pub registers: Vec<String>,
}

/// Runs one CLI command, writing results to `out` and diagnostics to
/// stderr. Returns whether the command succeeded.
pub fn dispatch(cli: &Cli, out: &mut dyn Write) -> io::Result<bool> {
    match &cli.command {
        Command::Check { file } => check(file, out),
        Command::Run(args) => run(args, out),
        Command::Docs { query: None } => docs::print_reference(out).map(|_| true),
        Command::Docs { query: Some(query) } => {
            let found = docs::print_search(out, query)?;
            if !found {
                eprintln!("no instruction or register matched `{query}`");
            }
            Ok(found)
        }
    }
}

fn check(file: &Path, out: &mut dyn Write) -> io::Result<bool> {
    let Some(program) = load_program(file) else {
        return Ok(false);
    };
    writeln!(
        out,
        "{}: {} instruction(s), {} label(s)",
        file.display(),
        program.ops.len(),
        program.labels.len()
    )?;
    Ok(true)
}

fn run(args: &RunArgs, out: &mut dyn Write) -> io::Result<bool> {
    let Some(program) = load_program(&args.file) else {
        return Ok(false);
    };
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(err) => {
            report_config_error(&err);
            return Ok(false);
        }
    };
    let mut memory = match config.memory() {
        Ok(memory) => memory,
        Err(err) => {
            report_config_error(&err);
            return Ok(false);
        }
    };
    debug!("run config: {config:?}");

    let rng = config
        .seed
        .map(RngStream::new)
        .unwrap_or_else(RngStream::from_entropy);
    let interpreter = Interpreter::with_rng(config.cycle_limit, rng);
    let reports = TickRunner::with_interpreter(interpreter, config.ticks)
        .with_entry(config.entry.clone())
        .run(&program, &mut memory);

    let name = args.file.display().to_string();
    for report in &reports {
        print_tick(out, report)?;
        if let Some(err) = &report.error {
            report_runtime_error(&name, err);
        }
    }
    print_memory(out, &memory)?;
    Ok(reports.iter().all(|report| report.error.is_none()))
}

fn load_program(file: &Path) -> Option<Program> {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            report_io_error(file, &err);
            return None;
        }
    };
    match parse(&source) {
        Ok(program) => Some(program),
        Err(err) => {
            emit_parse_error(&file.display().to_string(), &err);
            None
        }
    }
}

fn resolve_config(
    args: &RunArgs,
) -> Result<RunConfig, crate::project::config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => {
            let dir = args
                .file
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            RunConfig::discover(dir)?.unwrap_or_default()
        }
    };
    if let Some(cycles) = args.cycles {
        config.cycle_limit = cycles;
    }
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(entry) = &args.entry {
        config.entry = Some(entry.clone());
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    for assignment in &args.registers {
        config.set_register(assignment)?;
    }
    Ok(config)
}

fn print_tick(out: &mut dyn Write, report: &TickReport) -> io::Result<()> {
    let outcome = &report.outcome;
    let status = if report.error.is_some() {
        " (fault)"
    } else if outcome.timeout {
        " (timeout)"
    } else {
        ""
    };
    writeln!(
        out,
        "tick {}: {} cycle(s){status}",
        report.tick, outcome.cycles
    )?;
    for (key, message) in &outcome.comms {
        writeln!(
            out,
            "  send {key} = {} (priority {})",
            message.value,
            Value::Number(message.priority)
        )?;
    }
    Ok(())
}

fn print_memory(out: &mut dyn Write, memory: &Memory) -> io::Result<()> {
    writeln!(out, "registers:")?;
    for (name, value) in memory {
        writeln!(out, "  {name} = {value}")?;
    }
    Ok(())
}
