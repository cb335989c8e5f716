use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while1},
    combinator::map,
    IResult,
};
use crate::token::Span;

/// What counts as a word character: letters, digits and the underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Separator(&'a str),
}

/// Splits `original_input` into alternating word and separator runs.
///
/// The spans tile the input exactly, so joining the token texts gives the
/// input back.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    while !input.is_empty() {
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_word_char), RawToken::Word),
            map(take_till1(is_word_char), RawToken::Separator),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let start = original_input.len() - input.len();
                let len = input.len() - next_input.len();

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            // One branch always consumes a non-empty input
            Err(_) => break,
        }
    }

    result
}
