pub mod token;

use crate::parser::error::{kind::UnknownCharacter, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer.
/// This allows the parser to backtrack in case of an error.
///
/// Returns an error pointing at the first character that does not begin any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) if kind.is_whitespace() => continue,
            Ok(TokenKind::Symbol) | Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(Error::new(vec![lexer.span()], UnknownCharacter { character }));
            },
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
        }
    }

    Ok(tokens.into_boxed_slice())
}
