// Limits on the card sets the solver accepts
pub const MIN_CARD: u32 = 1;
pub const MAX_CARD: u32 = 13;
pub const MAX_CARDS: usize = 6;
