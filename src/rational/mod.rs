//! Exact rational arithmetic backed by arbitrary-precision integers

mod core;
mod errors;

pub use core::{Rational, rational_compare, rational_equals, rational_to_string};
pub use errors::RationalError;
