//! Game configuration options.

/// Configuration options for a War match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deck_count(2)
///     .with_war_points(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks the provider shuffles together.
    pub deck_count: u8,
    /// Points awarded for winning an ordinary round.
    pub round_points: u32,
    /// Points awarded for winning a war. The source game deliberately pays
    /// wars double, so the default is 2.
    pub war_points: u32,
    /// Cards burned per player before each war flip.
    pub war_burn: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deck_count: 1,
            round_points: 1,
            war_points: 2,
            war_burn: 3,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_deck_count(2);
    /// assert_eq!(options.deck_count, 2);
    /// ```
    #[must_use]
    pub const fn with_deck_count(mut self, deck_count: u8) -> Self {
        self.deck_count = deck_count;
        self
    }

    /// Sets the points awarded for an ordinary round win.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_round_points(5);
    /// assert_eq!(options.round_points, 5);
    /// ```
    #[must_use]
    pub const fn with_round_points(mut self, points: u32) -> Self {
        self.round_points = points;
        self
    }

    /// Sets the points awarded for a war win.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_points(3);
    /// assert_eq!(options.war_points, 3);
    /// ```
    #[must_use]
    pub const fn with_war_points(mut self, points: u32) -> Self {
        self.war_points = points;
        self
    }

    /// Sets the number of cards burned per player before each war flip.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_burn(2);
    /// assert_eq!(options.war_burn, 2);
    /// assert_eq!(options.war_cost(), 6);
    /// ```
    #[must_use]
    pub const fn with_war_burn(mut self, cards: usize) -> Self {
        self.war_burn = cards;
        self
    }

    /// Total cards one war attempt consumes: a burn plus a flip per player.
    ///
    /// With the default 3-card burn this is the classic 8-card requirement.
    #[must_use]
    pub const fn war_cost(&self) -> usize {
        self.war_burn * 2 + 2
    }
}
