use std::fmt;

/// Every instruction the engine understands. The discriminant doubles as the
/// index into [`OP_SPECS`], so the two must be kept in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    // Arithmetic
    Mov,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Rand,
    // Arrays
    Push,
    Get,
    Vlen,
    Vdir,
    Unitv,
    // Control flow
    Jmp,
    Jez,
    Jlz,
    Jgz,
    Ret,
    // Messaging
    Send,
}

impl Opcode {
    pub const ALL: [Opcode; 18] = [
        Opcode::Mov,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Mod,
        Opcode::Rand,
        Opcode::Push,
        Opcode::Get,
        Opcode::Vlen,
        Opcode::Vdir,
        Opcode::Unitv,
        Opcode::Jmp,
        Opcode::Jez,
        Opcode::Jlz,
        Opcode::Jgz,
        Opcode::Ret,
        Opcode::Send,
    ];

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn spec(self) -> &'static OpSpec {
        &OP_SPECS[self as usize]
    }

    pub fn operands(self) -> &'static [OperandSpec] {
        self.spec().operands
    }

    pub fn arity(self) -> usize {
        self.operands().len()
    }

    /// Case-insensitive lookup of an opcode mnemonic.
    pub fn from_name(name: &str) -> Option<Opcode> {
        Opcode::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The syntactic kind of an operand as written in source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Register,
    Literal,
}

impl ArgKind {
    pub fn describe(self) -> &'static str {
        match self {
            ArgKind::Register => "register",
            ArgKind::Literal => "literal",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandSpec {
    pub accepts: &'static [ArgKind],
    pub destination: bool,
}

impl OperandSpec {
    pub fn accepts(&self, kind: ArgKind) -> bool {
        if self.destination && kind != ArgKind::Register {
            return false;
        }
        self.accepts.contains(&kind)
    }

    pub fn describe(&self) -> String {
        self.accepts
            .iter()
            .map(|kind| kind.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

#[derive(Debug)]
pub struct OpSpec {
    pub code: Opcode,
    pub name: &'static str,
    pub operands: &'static [OperandSpec],
}

const ANY: OperandSpec = OperandSpec {
    accepts: &[ArgKind::Register, ArgKind::Literal],
    destination: false,
};

const OUT: OperandSpec = OperandSpec {
    accepts: &[ArgKind::Register],
    destination: true,
};

const UNARY: &[OperandSpec] = &[ANY, OUT];
const BINARY: &[OperandSpec] = &[ANY, ANY, OUT];
const BRANCH: &[OperandSpec] = &[ANY, ANY];

macro_rules! op_spec {
    ($code:ident, $name:literal, $operands:expr) => {
        OpSpec {
            code: Opcode::$code,
            name: $name,
            operands: $operands,
        }
    };
}

pub static OP_SPECS: [OpSpec; 18] = [
    op_spec!(Mov, "MOV", UNARY),
    op_spec!(Add, "ADD", BINARY),
    op_spec!(Sub, "SUB", BINARY),
    op_spec!(Mul, "MUL", BINARY),
    op_spec!(Div, "DIV", BINARY),
    op_spec!(Mod, "MOD", BINARY),
    op_spec!(Rand, "RAND", &[OUT]),
    op_spec!(Push, "PUSH", BINARY),
    op_spec!(Get, "GET", BINARY),
    op_spec!(Vlen, "VLEN", UNARY),
    op_spec!(Vdir, "VDIR", UNARY),
    op_spec!(Unitv, "UNITV", UNARY),
    op_spec!(Jmp, "JMP", &[ANY]),
    op_spec!(Jez, "JEZ", BRANCH),
    op_spec!(Jlz, "JLZ", BRANCH),
    op_spec!(Jgz, "JGZ", BRANCH),
    op_spec!(Ret, "RET", &[]),
    op_spec!(Send, "SEND", BINARY),
];
