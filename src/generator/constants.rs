// Draw budget before falling back
pub const MAX_SHUFFLE_ATTEMPTS_PER_GOAL: usize = 500;
pub const MAX_GOAL_ATTEMPTS: usize = 10;

// Goals are drawn uniformly from this range
pub const MIN_GOAL: u32 = 1;
pub const MAX_GOAL: u32 = 200;

// Goals below these thresholds get 4 and 5 cards; everything else gets 6
pub const FOUR_CARD_GOAL_LIMIT: u32 = 67;
pub const FIVE_CARD_GOAL_LIMIT: u32 = 134;

// Thirteen ranks, four suits
pub const DECK_RANKS: u32 = 13;
pub const DECK_SUITS: usize = 4;

pub const FALLBACK_GOAL: u32 = 24;
pub const FALLBACK_CARDS: [u32; 4] = [1, 2, 3, 4];
