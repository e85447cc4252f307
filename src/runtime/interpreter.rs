use crate::language::{
    ast::{Arg, Op, Program},
    opcode::Opcode,
};
use crate::runtime::{
    error::{RuntimeError, RuntimeErrorKind, RuntimeResult},
    memory::Memory,
    rng::{RandomSource, RngStream},
    value::Value,
};
use log::{debug, trace};
use std::collections::BTreeMap;

/// Register holding the label a resumable program wants to start from on
/// its next invocation.
pub const STATE_REGISTER: &str = "$state";

/// A value proposed through `SEND` for a shared output key.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub value: Value,
    pub priority: f64,
}

/// Result of a single invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    pub comms: BTreeMap<String, Message>,
    pub cycles: usize,
    /// The cycle budget ran out before the program finished.
    pub timeout: bool,
}

type StepResult<T> = Result<T, RuntimeErrorKind>;

pub struct Interpreter<R: RandomSource = RngStream> {
    cycle_limit: usize,
    rng: R,
}

impl Interpreter<RngStream> {
    pub fn new(cycle_limit: usize) -> Self {
        Self::with_rng(cycle_limit, RngStream::from_entropy())
    }
}

impl<R: RandomSource> Interpreter<R> {
    pub fn with_rng(cycle_limit: usize, rng: R) -> Self {
        Self { cycle_limit, rng }
    }

    pub fn cycle_limit(&self) -> usize {
        self.cycle_limit
    }

    pub fn set_cycle_limit(&mut self, cycle_limit: usize) {
        self.cycle_limit = cycle_limit;
    }

    /// Runs `program` against `memory`, starting at `entry` when that label
    /// exists and at the first instruction otherwise.
    pub fn execute(
        &mut self,
        program: &Program,
        memory: &mut Memory,
        entry: Option<&str>,
    ) -> RuntimeResult<Outcome> {
        let mut outcome = Outcome::default();
        self.execute_into(program, memory, entry, &mut outcome)?;
        Ok(outcome)
    }

    /// Like [`Interpreter::execute`], taking the entry label from
    /// [`STATE_REGISTER`].
    pub fn resume(&mut self, program: &Program, memory: &mut Memory) -> RuntimeResult<Outcome> {
        let entry = memory.get(STATE_REGISTER);
        self.execute(program, memory, entry.as_label())
    }

    /// Runs into a caller-owned [`Outcome`], so the messages and cycle count
    /// gathered before a fault are still available when this returns `Err`.
    pub fn execute_into(
        &mut self,
        program: &Program,
        memory: &mut Memory,
        entry: Option<&str>,
        outcome: &mut Outcome,
    ) -> RuntimeResult<()> {
        *outcome = Outcome::default();
        let mut pc = entry.and_then(|label| program.label(label)).unwrap_or(0);

        while pc < program.ops.len() {
            if outcome.cycles >= self.cycle_limit {
                outcome.timeout = true;
                debug!(
                    "cycle limit {} reached at L{}",
                    self.cycle_limit,
                    program.ops[pc].line + 1
                );
                break;
            }
            outcome.cycles += 1;

            let op = &program.ops[pc];
            trace!("{pc:>4} L{:<4} {op}", op.line + 1);
            pc = self
                .step(program, op, pc, memory, outcome)
                .map_err(|kind| {
                    let err = RuntimeError::new(kind, op.line);
                    debug!("runtime fault: {err}");
                    err
                })?;
        }
        Ok(())
    }

    fn step(
        &mut self,
        program: &Program,
        op: &Op,
        pc: usize,
        memory: &mut Memory,
        outcome: &mut Outcome,
    ) -> StepResult<usize> {
        match op.opcode {
            Opcode::Mov => {
                let value = load(memory, arg(op, 0)?);
                store(memory, op, 1, value)?;
            }
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Mod => {
                let left = load(memory, arg(op, 0)?);
                let right = load(memory, arg(op, 1)?);
                store(memory, op, 2, arithmetic(op.opcode, left, right)?)?;
            }
            Opcode::Rand => {
                let sample = self.rng.uniform();
                store(memory, op, 0, Value::Number(sample))?;
            }
            Opcode::Push => {
                let mut items = push_operand(load(memory, arg(op, 0)?))?;
                items.extend(push_operand(load(memory, arg(op, 1)?))?);
                store(memory, op, 2, Value::Array(items))?;
            }
            Opcode::Get => {
                let array = load(memory, arg(op, 0)?);
                let index = load(memory, arg(op, 1)?);
                store(memory, op, 2, element(array, index)?)?;
            }
            Opcode::Vlen => {
                let value = load(memory, arg(op, 0)?);
                store(memory, op, 1, vector_length(value)?)?;
            }
            Opcode::Vdir => {
                let value = load(memory, arg(op, 0)?);
                store(memory, op, 1, vector_direction(value)?)?;
            }
            Opcode::Unitv => {
                let value = load(memory, arg(op, 0)?);
                store(memory, op, 1, unit_vector(value)?)?;
            }
            Opcode::Jmp => {
                let target = load(memory, arg(op, 0)?);
                return jump_target(program, op.opcode, target);
            }
            Opcode::Jez | Opcode::Jlz | Opcode::Jgz => {
                let value = load(memory, arg(op, 0)?);
                if branch_taken(op.opcode, value)? {
                    let target = load(memory, arg(op, 1)?);
                    return jump_target(program, op.opcode, target);
                }
            }
            Opcode::Ret => return Ok(program.ops.len()),
            Opcode::Send => {
                let priority = load(memory, arg(op, 0)?);
                let value = load(memory, arg(op, 1)?);
                let key = destination(op, 2)?;
                send(outcome, key, priority, value)?;
            }
        }
        Ok(pc + 1)
    }
}

/// One-shot entry point: runs `program` once with a fresh entropy-seeded
/// random source.
pub fn execute(
    program: &Program,
    memory: &mut Memory,
    cycle_limit: usize,
    entry: Option<&str>,
) -> RuntimeResult<Outcome> {
    Interpreter::new(cycle_limit).execute(program, memory, entry)
}

/// One-shot entry point that resumes from [`STATE_REGISTER`].
pub fn execute_resumable(
    program: &Program,
    memory: &mut Memory,
    cycle_limit: usize,
) -> RuntimeResult<Outcome> {
    Interpreter::new(cycle_limit).resume(program, memory)
}

fn arg(op: &Op, position: usize) -> StepResult<&Arg> {
    op.args
        .get(position)
        .ok_or(RuntimeErrorKind::MalformedInstruction { op: op.opcode })
}

fn destination(op: &Op, position: usize) -> StepResult<&str> {
    match arg(op, position)? {
        Arg::Register(name) => Ok(name),
        Arg::Literal(_) => Err(RuntimeErrorKind::MalformedInstruction { op: op.opcode }),
    }
}

fn load(memory: &Memory, operand: &Arg) -> Value {
    match operand {
        Arg::Register(name) => memory.get(name),
        Arg::Literal(value) => value.clone(),
    }
}

fn store(memory: &mut Memory, op: &Op, position: usize, value: Value) -> StepResult<()> {
    let name = destination(op, position)?;
    memory.set(name, value);
    Ok(())
}

fn arithmetic(op: Opcode, left: Value, right: Value) -> StepResult<Value> {
    let apply: fn(f64, f64) -> f64 = match op {
        Opcode::Add => |a, b| a + b,
        Opcode::Sub => |a, b| a - b,
        Opcode::Mul => |a, b| a * b,
        Opcode::Div => |a, b| a / b,
        Opcode::Mod => |a, b| a % b,
        _ => unreachable!("{op} is not an arithmetic opcode"),
    };
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(a, b))),
        (Value::Array(a), Value::Array(b)) if a.len() == b.len() => Ok(Value::Array(
            a.iter().zip(&b).map(|(x, y)| apply(*x, *y)).collect(),
        )),
        (left, right) => Err(RuntimeErrorKind::TypeMismatch { op, left, right }),
    }
}

fn push_operand(value: Value) -> StepResult<Vec<f64>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Number(n) => Ok(vec![n]),
        value => Err(RuntimeErrorKind::PushOperand { value }),
    }
}

fn element(array: Value, index: Value) -> StepResult<Value> {
    let items = match array {
        Value::Array(items) => items,
        value => {
            return Err(RuntimeErrorKind::ExpectedArray {
                op: Opcode::Get,
                value,
            })
        }
    };
    let i = match index {
        Value::Number(i) => i,
        value => return Err(RuntimeErrorKind::ExpectedIndex { value }),
    };
    if i < 0.0 || i >= items.len() as f64 || i.fract() != 0.0 {
        return Err(RuntimeErrorKind::IndexOutOfBounds {
            index: Value::Number(i),
        });
    }
    Ok(Value::Number(items[i as usize]))
}

fn vector_length(value: Value) -> StepResult<Value> {
    match value {
        Value::Array(items) => Ok(Value::Number(
            items.iter().map(|x| x * x).sum::<f64>().sqrt(),
        )),
        value => Err(RuntimeErrorKind::ExpectedArray {
            op: Opcode::Vlen,
            value,
        }),
    }
}

/// Bearing in radians: 0 along +y, pi/2 along +x.
fn vector_direction(value: Value) -> StepResult<Value> {
    match value {
        Value::Array(items) if items.len() == 2 => Ok(Value::Number(items[0].atan2(items[1]))),
        value => Err(RuntimeErrorKind::ExpectedVector2 { value }),
    }
}

fn unit_vector(value: Value) -> StepResult<Value> {
    match value {
        Value::Number(angle) => Ok(Value::Array(vec![angle.sin(), angle.cos()])),
        value => Err(RuntimeErrorKind::ExpectedNumber {
            op: Opcode::Unitv,
            value,
        }),
    }
}

// JEZ accepts null and arrays, JLZ/JGZ only numbers.
fn branch_taken(op: Opcode, value: Value) -> StepResult<bool> {
    let taken = match (op, &value) {
        (Opcode::Jez, _) => value.is_zero(),
        (Opcode::Jlz, Value::Number(n)) => Some(*n < 0.0),
        (Opcode::Jgz, Value::Number(n)) => Some(*n > 0.0),
        _ => None,
    };
    taken.ok_or(RuntimeErrorKind::NotComparable { value })
}

fn jump_target(program: &Program, op: Opcode, target: Value) -> StepResult<usize> {
    match target {
        Value::Label(label) => program
            .label(&label)
            .ok_or(RuntimeErrorKind::UnknownLabel { label }),
        value => Err(RuntimeErrorKind::BadJumpTarget { op, value }),
    }
}

/// Keeps the highest-priority message per key; a later message of equal
/// priority replaces the earlier one.
fn send(outcome: &mut Outcome, key: &str, priority: Value, value: Value) -> StepResult<()> {
    let priority = match priority {
        Value::Number(priority) => priority,
        value => return Err(RuntimeErrorKind::ExpectedPriority { value }),
    };
    match outcome.comms.get(key) {
        Some(current) if current.priority > priority => {}
        _ => {
            outcome
                .comms
                .insert(key.to_string(), Message { value, priority });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parser::parse;

    fn run_with(source: &str, memory: &mut Memory, limit: usize) -> RuntimeResult<Outcome> {
        let program = parse(source).expect("parse");
        Interpreter::with_rng(limit, RngStream::new(7)).execute(&program, memory, None)
    }

    fn run(source: &str) -> (Memory, RuntimeResult<Outcome>) {
        let mut memory = Memory::new();
        let result = run_with(source, &mut memory, 1000);
        (memory, result)
    }

    #[test]
    fn parse_then_run() {
        let (memory, result) = run("\n    add 2,0 10,50 $tmp\n    mov $tmp $dest\n    ret\n");
        let outcome = result.unwrap();
        assert_eq!(memory.get("$dest"), Value::from([12.0, 50.0]));
        assert_eq!(outcome.cycles, 3);
        assert!(!outcome.timeout);
    }

    #[test]
    fn elementwise_and_scalar_arithmetic() {
        let (memory, result) = run(
            "add 2,3 5,7 $z\nsub 10 4 $s\nmul 2,3 4,5 $m\ndiv 9 6 $d\nmod 7 3 $r\nmod -7,7 3,3 $rr",
        );
        result.unwrap();
        assert_eq!(memory.get("$z"), Value::from([7.0, 10.0]));
        assert_eq!(memory.get("$s"), Value::Number(6.0));
        assert_eq!(memory.get("$m"), Value::from([8.0, 15.0]));
        assert_eq!(memory.get("$d"), Value::Number(1.5));
        assert_eq!(memory.get("$r"), Value::Number(1.0));
        assert_eq!(memory.get("$rr"), Value::from([-1.0, 1.0]));
    }

    #[test]
    fn division_follows_ieee() {
        let (memory, result) = run("div 1 0 $inf\nmod 1 0 $nan\ndiv 0,1 0,0 $v");
        result.unwrap();
        assert_eq!(memory.get("$inf"), Value::Number(f64::INFINITY));
        assert!(memory.get("$nan").as_number().unwrap().is_nan());
        let v = memory.get("$v");
        let items = v.as_array().unwrap();
        assert!(items[0].is_nan());
        assert_eq!(items[1], f64::INFINITY);
    }

    #[test]
    fn arithmetic_shape_mismatches_fail() {
        for source in ["add 2,3 5 $z", "add 1,2 1,2,3 $z", "sub $missing 1 $z", "mul @a 2 $z"] {
            let (_, result) = run(source);
            let err = result.unwrap_err();
            assert!(
                matches!(err.kind, RuntimeErrorKind::TypeMismatch { .. }),
                "{source}: {err}"
            );
        }
        let (_, result) = run("add 2,3 5 $z");
        assert_eq!(result.unwrap_err().message(), "Can't ADD 2,3 5");
    }

    #[test]
    fn push_concatenates_and_appends() {
        let (memory, result) = run("push 1 2 $a\npush $a 3,4 $b\npush , 5 $c");
        result.unwrap();
        assert_eq!(memory.get("$a"), Value::from([1.0, 2.0]));
        assert_eq!(memory.get("$b"), Value::from([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(memory.get("$c"), Value::from([5.0]));

        let (_, result) = run("push null 1 $a");
        assert_eq!(
            result.unwrap_err().message(),
            "Can't PUSH null, expected array or number"
        );
    }

    #[test]
    fn get_is_bounds_checked() {
        let (memory, result) = run("get 4,5,6 2 $x");
        result.unwrap();
        assert_eq!(memory.get("$x"), Value::Number(6.0));

        for (source, message) in [
            ("get 4,5,6 3 $x", "Index 3 out of bounds"),
            ("get 4,5,6 -1 $x", "Index -1 out of bounds"),
            ("get 4,5,6 0.5 $x", "Index 0.5 out of bounds"),
            ("get 4 0 $x", "GET expected array, got 4"),
            ("get 4,5 null $x", "GET expected index to be a number, got null"),
        ] {
            let (_, result) = run(source);
            assert_eq!(result.unwrap_err().message(), message, "{source}");
        }
    }

    #[test]
    fn vector_helpers() {
        let (memory, result) = run("vlen 3,4 $l\nvdir 1,0 $east\nvdir 0,1 $north\nunitv 0 $u\nvlen , $zero");
        result.unwrap();
        assert_eq!(memory.get("$l"), Value::Number(5.0));
        assert_eq!(memory.get("$east"), Value::Number(std::f64::consts::FRAC_PI_2));
        assert_eq!(memory.get("$north"), Value::Number(0.0));
        assert_eq!(memory.get("$u"), Value::from([0.0, 1.0]));
        assert_eq!(memory.get("$zero"), Value::Number(0.0));

        let (_, result) = run("vdir 1,2,3 $d");
        assert_eq!(
            result.unwrap_err().message(),
            "VDIR expected array of length 2, got 1,2,3"
        );
        let (_, result) = run("unitv 1,2 $d");
        assert_eq!(result.unwrap_err().message(), "UNITV expected number, got 1,2");
        let (_, result) = run("vlen 3 $d");
        assert_eq!(result.unwrap_err().message(), "VLEN expected array, got 3");
    }

    #[test]
    fn rand_stores_unit_interval_sample() {
        let (memory, result) = run("rand $x\nrand $y");
        result.unwrap();
        for name in ["$x", "$y"] {
            let x = memory.get(name).as_number().unwrap();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn unconditional_jump_skips_ret() {
        let (memory, result) = run("JMP @end\nRET\n@end\nMOV 42 $z");
        result.unwrap();
        assert_eq!(memory.get("$z"), Value::Number(42.0));
    }

    #[test]
    fn jez_zero_shapes() {
        let source = "JEZ $a @skip\nMOV 1 $fell\n@skip";
        for (value, jumps) in [
            (Value::Null, true),
            (Value::Number(0.0), true),
            (Value::from([0.0, 0.0]), true),
            (Value::Number(5.0), false),
            (Value::from([0.0, 1.0]), false),
        ] {
            let mut memory = Memory::new();
            memory.set("$a", value.clone());
            run_with(source, &mut memory, 100).unwrap();
            assert_eq!(memory.contains("$fell"), !jumps, "{value:?}");
        }

        let mut memory = Memory::new();
        memory.set("$a", Value::Label("@x".into()));
        let err = run_with(source, &mut memory, 100).unwrap_err();
        assert_eq!(err.message(), "Can't compare @x to 0");
    }

    #[test]
    fn jlz_and_jgz_require_numbers() {
        let (memory, result) = run("jlz -1 @neg\nmov 1 $wrong\n@neg\njgz 2 @pos\nmov 1 $wrong\n@pos\njgz 0 @none\nmov 1 $ok\n@none");
        result.unwrap();
        assert!(!memory.contains("$wrong"));
        assert_eq!(memory.get("$ok"), Value::Number(1.0));

        for source in ["jlz null @x\n@x", "jgz 1,2 @x\n@x"] {
            let (_, result) = run(source);
            assert!(matches!(
                result.unwrap_err().kind,
                RuntimeErrorKind::NotComparable { .. }
            ));
        }
    }

    #[test]
    fn jump_targets_must_be_known_labels() {
        let (_, result) = run("jmp @nowhere");
        assert_eq!(result.unwrap_err().message(), "Unknown label @nowhere");
        let (_, result) = run("jmp 3");
        assert_eq!(result.unwrap_err().message(), "Can't JMP to 3");
        let (_, result) = run("jez 0 $unset");
        assert_eq!(result.unwrap_err().message(), "Can't JEZ to null");
    }

    #[test]
    fn jump_through_register_label() {
        let (memory, result) = run("mov @b $t\njmp $t\n@a\nmov 1 $x\n@b\nmov 2 $y");
        result.unwrap();
        assert!(!memory.contains("$x"));
        assert_eq!(memory.get("$y"), Value::Number(2.0));
    }

    #[test]
    fn cycle_limit_times_out_without_running_next_instruction() {
        let mut memory = Memory::new();
        let outcome = run_with("@loop\njmp @loop", &mut memory, 100).unwrap();
        assert!(outcome.timeout);
        assert_eq!(outcome.cycles, 100);

        let mut memory = Memory::new();
        let outcome = run_with("@l\nadd $n 1 $n\njmp @l", &mut memory, 5).unwrap_err();
        // unset $n is null, so the first ADD faults
        assert_eq!(outcome.line, 1);

        let mut memory = Memory::new();
        memory.set("$n", 0.0);
        let outcome = run_with("@l\nadd $n 1 $n\njmp @l", &mut memory, 5).unwrap();
        assert!(outcome.timeout);
        assert_eq!(outcome.cycles, 5);
        assert_eq!(memory.get("$n"), Value::Number(3.0));
    }

    #[test]
    fn finishing_exactly_at_the_limit_is_not_a_timeout() {
        let mut memory = Memory::new();
        let outcome = run_with("mov 1 $a\nret\nmov 2 $a", &mut memory, 2).unwrap();
        assert!(!outcome.timeout);
        assert_eq!(outcome.cycles, 2);
        assert_eq!(memory.get("$a"), Value::Number(1.0));

        let outcome = run_with("mov 1 $a", &mut memory, 0).unwrap();
        assert!(outcome.timeout);
        assert_eq!(outcome.cycles, 0);
    }

    #[test]
    fn send_keeps_highest_priority_last_writer_on_ties() {
        let (_, result) = run("send 1 10 $k\nsend 3 30 $k");
        let comms = result.unwrap().comms;
        assert_eq!(
            comms["$k"],
            Message {
                value: Value::Number(30.0),
                priority: 3.0
            }
        );

        let (_, result) = run("send 3 10 $k\nsend 1 30 $k");
        let comms = result.unwrap().comms;
        assert_eq!(comms["$k"].value, Value::Number(10.0));
        assert_eq!(comms["$k"].priority, 3.0);

        let (_, result) = run("send 2 10 $k\nsend 2 1,2 $k\nsend 0 @x $other");
        let comms = result.unwrap().comms;
        assert_eq!(comms["$k"].value, Value::from([1.0, 2.0]));
        assert_eq!(comms["$other"].value, Value::Label("@x".into()));

        let (_, result) = run("send null 1 $k");
        assert_eq!(
            result.unwrap_err().message(),
            "SEND expected priority to be a number, got null"
        );
    }

    #[test]
    fn send_does_not_touch_registers() {
        let (memory, result) = run("send 1 5 $k");
        result.unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn runtime_errors_carry_source_line() {
        let source = "; header\n\n@a\n\nmov 1 $x\n@b\n\nget 1,2 9 $y\nmov 2 $x";
        let mut memory = Memory::new();
        let err = run_with(source, &mut memory, 100).unwrap_err();
        assert_eq!(err.line, 7);
        assert_eq!(err.to_string(), "L8 Index 9 out of bounds");
        // mutations before the fault stay committed
        assert_eq!(memory.get("$x"), Value::Number(1.0));
    }

    #[test]
    fn partial_outcome_survives_fault() {
        let program = parse("send 1 5 $k\nmov 1 $a\nadd null 1 $b").unwrap();
        let mut memory = Memory::new();
        let mut outcome = Outcome::default();
        let mut interpreter = Interpreter::with_rng(10, RngStream::new(1));
        let err = interpreter
            .execute_into(&program, &mut memory, None, &mut outcome)
            .unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(outcome.cycles, 3);
        assert_eq!(outcome.comms["$k"].value, Value::Number(5.0));
        assert_eq!(memory.get("$a"), Value::Number(1.0));
    }

    #[test]
    fn entry_label_sets_initial_pc() {
        let program = parse("mov 1 $a\n@second\nmov 2 $b").unwrap();
        let mut interpreter = Interpreter::with_rng(10, RngStream::new(1));

        let mut memory = Memory::new();
        interpreter.execute(&program, &mut memory, Some("@second")).unwrap();
        assert!(!memory.contains("$a"));
        assert_eq!(memory.get("$b"), Value::Number(2.0));

        let mut memory = Memory::new();
        interpreter.execute(&program, &mut memory, Some("@missing")).unwrap();
        assert_eq!(memory.get("$a"), Value::Number(1.0));
    }

    #[test]
    fn resume_reads_state_register() {
        let program = parse("mov @two $state\nmov 1 $a\nret\n@two\nmov null $state\nmov 2 $b").unwrap();
        let mut interpreter = Interpreter::with_rng(10, RngStream::new(1));
        let mut memory = Memory::new();

        interpreter.resume(&program, &mut memory).unwrap();
        assert_eq!(memory.get("$a"), Value::Number(1.0));
        assert_eq!(memory.get(STATE_REGISTER), Value::Label("@two".into()));

        interpreter.resume(&program, &mut memory).unwrap();
        assert_eq!(memory.get("$b"), Value::Number(2.0));
        assert_eq!(memory.get(STATE_REGISTER), Value::Null);
    }

    #[test]
    fn hand_built_malformed_ops_fail_cleanly() {
        let program = Program {
            ops: vec![Op {
                opcode: Opcode::Mov,
                args: vec![Arg::Literal(Value::Number(1.0)), Arg::Literal(Value::Null)],
                line: 3,
            }],
            labels: Default::default(),
        };
        let mut memory = Memory::new();
        let err = Interpreter::with_rng(10, RngStream::new(1))
            .execute(&program, &mut memory, None)
            .unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, RuntimeErrorKind::MalformedInstruction { op: Opcode::Mov }));
    }

    #[test]
    fn one_shot_execute_matches_interpreter() {
        let program = parse("add 1 2 $x").unwrap();
        let mut memory = Memory::new();
        let outcome = execute(&program, &mut memory, 10, None).unwrap();
        assert_eq!(outcome.cycles, 1);
        assert_eq!(memory.get("$x"), Value::Number(3.0));

        let mut memory = Memory::new();
        let outcome = execute_resumable(&program, &mut memory, 0).unwrap();
        assert!(outcome.timeout);
    }
}
