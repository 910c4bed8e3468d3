use thiserror::Error;

use crate::expression::ExpressionError;

/// Errors that stop an expression from being canonicalized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Rewriting did not reach a fixed point within {passes} passes")]
    RewriteLimit { passes: usize },
    #[error("Normal form evaluates to {normalized}, expected {original}")]
    ValueMismatch { original: String, normalized: String },
    #[error("Normal form does not use the same cards as the original")]
    LeafMismatch,
}
