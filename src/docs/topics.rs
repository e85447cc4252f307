use crate::language::opcode::Opcode;

pub struct OpDoc {
    pub code: Opcode,
    pub spec: &'static str,
    pub description: &'static str,
}

impl OpDoc {
    pub fn name(&self) -> &'static str {
        self.code.name()
    }
}

/// Host-side register conventions. The engine itself only reserves `$state`.
pub struct RegisterDoc {
    pub name: &'static str,
    pub spec: &'static str,
    pub description: &'static str,
}

pub const OP_DOCS: &[OpDoc] = &[
    // Arithmetic
    OpDoc {
        code: Opcode::Mov,
        spec: "in $out",
        description: "copy the value (a register or literal) from in to $out",
    },
    OpDoc {
        code: Opcode::Add,
        spec: "a b $out",
        description: "add a to b (element-wise) and store in $out",
    },
    OpDoc {
        code: Opcode::Sub,
        spec: "a b $out",
        description: "subtract b from a (element-wise) and store in $out",
    },
    OpDoc {
        code: Opcode::Mul,
        spec: "a b $out",
        description: "multiply a with b (element-wise) and store in $out",
    },
    OpDoc {
        code: Opcode::Div,
        spec: "a b $out",
        description: "divide a by b (element-wise) and store in $out",
    },
    OpDoc {
        code: Opcode::Mod,
        spec: "a b $out",
        description: "take the modulo of a by b (element-wise) and store in $out",
    },
    OpDoc {
        code: Opcode::Rand,
        spec: "$out",
        description: "store a random number between 0 and 1 in $out",
    },
    // Arrays
    OpDoc {
        code: Opcode::Push,
        spec: "a0 a1 $out",
        description: "concatenate or append a1 to a0 and store in $out",
    },
    OpDoc {
        code: Opcode::Get,
        spec: "array i $out",
        description: "get the value at index i from array and store in $out",
    },
    OpDoc {
        code: Opcode::Vlen,
        spec: "array $out",
        description: "calculate the Euclidean vector length of array and store in $out",
    },
    OpDoc {
        code: Opcode::Vdir,
        spec: "array $out",
        description: "calculate the vector direction in radians (0 = north, 1.57 = east) from array and store in $out",
    },
    OpDoc {
        code: Opcode::Unitv,
        spec: "angle $out",
        description: "calculate the unit vector for angle and store in $out",
    },
    // Control flow
    OpDoc {
        code: Opcode::Jmp,
        spec: "@label",
        description: "jump to @label",
    },
    OpDoc {
        code: Opcode::Jez,
        spec: "value @label",
        description: "jump to @label if value == 0 or null",
    },
    OpDoc {
        code: Opcode::Jlz,
        spec: "value @label",
        description: "jump to @label if value < 0",
    },
    OpDoc {
        code: Opcode::Jgz,
        spec: "value @label",
        description: "jump to @label if value > 0",
    },
    OpDoc {
        code: Opcode::Ret,
        spec: "",
        description: "end execution of the program (for this update tick)",
    },
    // Messaging
    OpDoc {
        code: Opcode::Send,
        spec: "priority value $out",
        description: "propose value for $out at priority; the highest priority wins and shows up in $out next tick",
    },
];

pub const REGISTER_DOCS: &[RegisterDoc] = &[
    RegisterDoc {
        name: "$state",
        spec: "@lab|null R/W",
        description: "entry point for the next update tick",
    },
    RegisterDoc {
        name: "$dst",
        spec: "x,y|null R/W",
        description: "move towards the coordinates x,y",
    },
    RegisterDoc {
        name: "$tgt",
        spec: "x,y|null R/W",
        description: "attack x,y if in range (note: takes precedence over $dst)",
    },
    RegisterDoc {
        name: "$id",
        spec: "number R",
        description: "critter ID (unique, starting from 0)",
    },
    RegisterDoc {
        name: "$pos",
        spec: "x,y R",
        description: "current position",
    },
    RegisterDoc {
        name: "$hlth",
        spec: "number R",
        description: "current health",
    },
    RegisterDoc {
        name: "$ne",
        spec: "x,y|null R",
        description: "nearest enemy critter position",
    },
    RegisterDoc {
        name: "$nf",
        spec: "x,y|null R",
        description: "nearest friendly critter position",
    },
    RegisterDoc {
        name: "$hb",
        spec: "x,y R",
        description: "first (home) base position",
    },
    RegisterDoc {
        name: "$eb",
        spec: "x,y R",
        description: "enemy base position (not neutral)",
    },
    RegisterDoc {
        name: "$nnb",
        spec: "x,y|null R",
        description: "nearest neutral base position",
    },
    RegisterDoc {
        name: "$mark",
        spec: "x,y|null R",
        description: "user-controlled manual marker position",
    },
    RegisterDoc {
        name: "$time",
        spec: "number R",
        description: "simulation time in seconds",
    },
    RegisterDoc {
        name: "$fcc",
        spec: "number R",
        description: "friendly critter count",
    },
];
