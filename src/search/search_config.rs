//! Search tuning knobs.

/// Settings for [`MiniMax`](crate::search::minimax::MiniMax).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched below the root.
    pub depth: u32,
    /// Exponent applied to book play counts before the weighted draw.
    /// Clamped to `[0, 1]`: 0 picks uniformly, 1 follows raw popularity.
    pub book_weight_exponent: f64,
    /// Seed for the book draw. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            book_weight_exponent: 0.5,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_book_weight_exponent(mut self, exponent: f64) -> Self {
        self.book_weight_exponent = exponent.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;

    #[test]
    fn builder_clamps_book_exponent() {
        let config = SearchConfig::default().with_depth(2).with_book_weight_exponent(4.0).with_seed(9);
        assert_eq!(config.depth, 2);
        assert_eq!(config.book_weight_exponent, 1.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(SearchConfig::default().with_book_weight_exponent(-1.0).book_weight_exponent, 0.0);
    }
}
