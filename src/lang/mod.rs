/*!
# Rust Language Module

This Rust module turns source text into something the machine can run:
comment stripping into logical lines, classification of each line into a
statement, and parsing of expression and condition fragments.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod preprocess;
mod statement;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use line::BLOCK_END;
pub use parse::condition;
pub use parse::expression;
pub use preprocess::preprocess;
pub use statement::statement;
pub use token::{Literal, Operator, Token};

pub mod ast;

/// The mandatory first logical line of every program.
pub const ENTRY_HEADER: &str = "When container main(int):";
