mod atom;
mod error;
mod expr;
mod lexer;
mod sink;
mod statement;

pub use atom::parse_atom;
pub use error::ParseError;
pub use expr::{parse_condition, parse_expression, MAX_NESTING};
pub use lexer::{lexemes, tokenize, Lexeme, Lexer, Token, TokenKind, RESERVED_IF};
pub use sink::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use statement::Statement;
