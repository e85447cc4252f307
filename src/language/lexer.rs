use crate::language::token::{SourceLocation, Token, COMMENT_MARKER};
use nom::{
    bytes::complete::{take_till, take_till1, take_while},
    IResult,
};

/// Splits one physical source line into whitespace-separated tokens.
///
/// Everything from the first `;` onwards is a comment and never reaches a
/// token. Columns are byte offsets into the original line.
pub fn tokenize(line: &str, line_index: usize) -> Vec<Token> {
    let code = match strip_comment(line) {
        Ok((_, code)) => code,
        Err(_) => line,
    };

    let mut tokens = Vec::new();
    let mut rest = code;
    let mut column = 0usize;
    while let Ok((remaining, (gap, word))) = next_word(rest) {
        column += gap;
        tokens.push(Token::new(word, SourceLocation::new(line_index, column)));
        column += word.len();
        rest = remaining;
    }
    tokens
}

fn strip_comment(input: &str) -> IResult<&str, &str> {
    take_till(|ch: char| ch == COMMENT_MARKER)(input)
}

fn next_word(input: &str) -> IResult<&str, (usize, &str)> {
    let (input, gap) = take_while(char::is_whitespace)(input)?;
    let (input, word) = take_till1(char::is_whitespace)(input)?;
    Ok((input, (gap.len(), word)))
}
