//! Scoring rules shared by the knock decision and settlement.

/// Cards held between turns.
pub const HAND_SIZE: usize = 10;

/// Cards held after drawing, before the discard that may end the hand.
pub const KNOCK_HAND_SIZE: usize = HAND_SIZE + 1;

/// Highest point value of any single card.
pub const MAX_CARD_POINTS: u32 = 10;

/// Knock threshold and settlement bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rules {
    /// Highest deadwood a player may knock with.
    pub knock_limit: u32,
    /// Bonus for knocking with zero deadwood.
    pub gin_bonus: u32,
    /// Bonus awarded to an opponent who undercuts the knocker.
    pub undercut_bonus: u32,
    /// Whether equal deadwood after lay-offs counts as an undercut.
    pub tie_is_undercut: bool,
}

impl Rules {
    /// Standard two-player Gin Rummy: knock on 10 or less, 25 for gin,
    /// 25 for an undercut, ties go to the knocker.
    pub const fn standard() -> Self {
        Self { knock_limit: 10, gin_bonus: 25, undercut_bonus: 25, tie_is_undercut: false }
    }

    pub fn with_knock_limit(mut self, limit: u32) -> Self {
        self.knock_limit = limit;
        self
    }

    pub fn with_gin_bonus(mut self, bonus: u32) -> Self {
        self.gin_bonus = bonus;
        self
    }

    pub fn with_undercut_bonus(mut self, bonus: u32) -> Self {
        self.undercut_bonus = bonus;
        self
    }

    pub fn with_tie_is_undercut(mut self, tie_is_undercut: bool) -> Self {
        self.tie_is_undercut = tie_is_undercut;
        self
    }

    /// Deadwood above which no single discard can reach the knock limit.
    ///
    /// Dropping one card can lower optimal deadwood by at most that card's
    /// points, so an 11-card hand above `knock_limit + MAX_CARD_POINTS`
    /// cannot knock after any discard.
    pub const fn pre_discard_limit(&self) -> u32 {
        self.knock_limit + MAX_CARD_POINTS
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.knock_limit > MAX_CARD_POINTS {
            return Err(format!(
                "knock limit {} exceeds the maximum of {MAX_CARD_POINTS}",
                self.knock_limit
            ));
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
