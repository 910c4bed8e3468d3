//! Expression trees over card values: model, exact evaluation, rendering and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod parser;

pub use ast::{Expression, Op};
pub use errors::{ExpressionError, ParseError};
pub use parser::{MAX_PAREN_DEPTH, parse};
