//! Equivalence of solutions: canonical keys, display rewriting and formatting

pub mod constants;
mod errors;
mod format;
mod key;
mod preference;
mod rewrite;
mod solution_set;
mod terms;

pub use errors::CanonicalError;
pub use format::format_display;
pub use key::canonical_key;
pub use preference::{DisplayRank, prefer_display};
pub use rewrite::normalize;
pub use solution_set::{Canonical, SolutionSet, canonicalize};
