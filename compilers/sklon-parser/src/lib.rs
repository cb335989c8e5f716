pub mod collocation;
pub mod dictionary;
pub mod error;
pub mod parser;
pub mod token;

pub use collocation::decline_collocation;
pub use dictionary::{DictionaryCache, DictionaryConfig, LoadOutcome};
pub use error::DictionaryError;

use crate::parser::{parse_with_spans, RawToken};
use crate::token::{Token, TokenKind};

/// Splits phrases into tokens, classifying words against an optional
/// dictionary of base forms.
pub struct Lexer<'a> {
    dict: Option<&'a DictionaryCache>,
}

impl<'a> Lexer<'a> {
    /// Without a dictionary every word counts as a base form.
    pub fn new(dict: Option<&'a DictionaryCache>) -> Self {
        Self { dict }
    }

    pub fn tokenize<'t>(&self, input: &'t str) -> Vec<Token<'t>> {
        parse_with_spans(input)
            .into_iter()
            .map(|(span, raw)| {
                let text = &input[span.start..span.end];

                let kind = match raw {
                    RawToken::Separator(_) => TokenKind::Separator,
                    RawToken::Word(word) => match self.dict {
                        Some(dict) if !dict.is_base_form(word) => TokenKind::Unknown,
                        _ => TokenKind::BaseForm,
                    },
                };

                Token { span, text, kind }
            })
            .collect()
    }
}
