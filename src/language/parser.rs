use crate::language::{
    ast::{Arg, Op, Program},
    errors::ParseError,
    lexer::tokenize,
    opcode::Opcode,
    token::{SourceLocation, Token, ARRAY_SEPARATOR},
};
use crate::runtime::value::Value;
use log::debug;
use nom::{
    combinator::{all_consuming, map_res},
    number::complete::recognize_float,
    IResult,
};
use std::sync::Arc;

/// Parses a whole program. Fails on the first malformed line; no partial
/// program is ever returned.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let lines: Arc<[String]> = source
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    let program = Parser::new(lines).run()?;
    debug!(
        "parsed program: {} instruction(s), {} label(s)",
        program.ops.len(),
        program.labels.len()
    );
    Ok(program)
}

/// Parses a single operand literal: a label, a comma-separated number array,
/// `null`, or a number.
pub fn parse_literal(token: &Token, source_lines: &Arc<[String]>) -> Result<Value, ParseError> {
    let text = token.text.as_str();
    if token.is_label() {
        return Ok(Value::Label(text.to_string()));
    }
    if text.contains(ARRAY_SEPARATOR) {
        let mut items = Vec::new();
        let mut start = 0usize;
        for element in text.split(ARRAY_SEPARATOR) {
            if !element.is_empty() {
                let value = number(element).map(|(_, n)| n).map_err(|_| {
                    ParseError::new(
                        format!("Unexpected array element '{element}'"),
                        token.location.offset(start),
                        source_lines.clone(),
                    )
                })?;
                items.push(value);
            }
            start += element.len() + ARRAY_SEPARATOR.len_utf8();
        }
        return Ok(Value::Array(items));
    }
    if text == "null" {
        return Ok(Value::Null);
    }
    match number(text) {
        Ok((_, value)) => Ok(Value::Number(value)),
        Err(_) => Err(ParseError::new(
            format!("Unexpected literal '{text}'"),
            token.location,
            source_lines.clone(),
        )),
    }
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(all_consuming(recognize_float), str::parse::<f64>)(input)
}

struct Parser {
    lines: Arc<[String]>,
    program: Program,
}

impl Parser {
    fn new(lines: Arc<[String]>) -> Self {
        Self {
            lines,
            program: Program::new(),
        }
    }

    fn run(mut self) -> Result<Program, ParseError> {
        for index in 0..self.lines.len() {
            self.parse_line(index)?;
        }
        Ok(self.program)
    }

    fn parse_line(&mut self, index: usize) -> Result<(), ParseError> {
        let tokens = tokenize(&self.lines[index], index);
        let Some((head, operands)) = tokens.split_first() else {
            return Ok(());
        };

        if head.is_label() {
            if let Some(extra) = operands.first() {
                return Err(self.error("Unexpected code after @label", extra.location));
            }
            self.program
                .labels
                .insert(head.text.clone(), self.program.ops.len());
            return Ok(());
        }

        let Some(opcode) = Opcode::from_name(&head.text) else {
            return Err(self.error(format!("Bad instruction '{}'", head.text), head.location));
        };

        let args = operands
            .iter()
            .map(|token| self.parse_operand(token))
            .collect::<Result<Vec<_>, _>>()?;
        self.validate(opcode, head, operands, &args)?;

        self.program.ops.push(Op {
            opcode,
            args,
            line: index,
        });
        Ok(())
    }

    fn parse_operand(&self, token: &Token) -> Result<Arg, ParseError> {
        if token.is_register() {
            Ok(Arg::Register(token.text.clone()))
        } else {
            parse_literal(token, &self.lines).map(Arg::Literal)
        }
    }

    fn validate(
        &self,
        opcode: Opcode,
        head: &Token,
        operands: &[Token],
        args: &[Arg],
    ) -> Result<(), ParseError> {
        let specs = opcode.operands();
        if specs.len() != args.len() {
            return Err(self.error(
                format!(
                    "{opcode} expects {} arguments, got {}",
                    specs.len(),
                    args.len()
                ),
                head.location,
            ));
        }
        for (position, (spec, arg)) in specs.iter().zip(args).enumerate() {
            if !spec.accepts(arg.kind()) {
                return Err(self.error(
                    format!(
                        "{opcode} argument {} should be a {}, got {}",
                        position + 1,
                        spec.describe(),
                        arg.kind()
                    ),
                    operands[position].location,
                ));
            }
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>, location: SourceLocation) -> ParseError {
        ParseError::new(message, location, self.lines.clone())
    }
}
