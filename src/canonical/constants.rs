// Configuration constants for canonicalization
pub const MAX_REWRITE_PASSES: usize = 64;
