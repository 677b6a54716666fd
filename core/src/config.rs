use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns on the board.
    pub categories: usize,
    /// Number of rows on the board.
    pub clues_per_category: usize,
    /// Upper bound on random category lookups while collecting distinct categories.
    pub max_category_draws: usize,
    /// Extra attempts for a single request that failed with a retryable error.
    pub fetch_retries: u8,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
    pub const DRAWS_PER_CATEGORY: usize = 20;
    pub const DEFAULT_FETCH_RETRIES: u8 = 1;

    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
            max_category_draws: categories.saturating_mul(Self::DRAWS_PER_CATEGORY),
            fetch_retries: Self::DEFAULT_FETCH_RETRIES,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
    }

    pub const fn with_fetch_retries(self, fetch_retries: u8) -> Self {
        Self {
            fetch_retries,
            ..self
        }
    }

    pub const fn with_max_category_draws(self, max_category_draws: usize) -> Self {
        Self {
            max_category_draws,
            ..self
        }
    }

    pub const fn total_clues(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }

    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.categories == 0 {
            return Err(ConfigError::NoCategories);
        }
        if self.clues_per_category == 0 {
            return Err(ConfigError::NoClues);
        }
        if self.max_category_draws < self.categories {
            return Err(ConfigError::DrawLimitTooLow {
                draws: self.max_category_draws,
                categories: self.categories,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_board() {
        let config = BoardConfig::default();

        assert_eq!(config.categories, 6);
        assert_eq!(config.clues_per_category, 5);
        assert_eq!(config.max_category_draws, 120);
        assert_eq!(config.total_clues(), 30);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn new_clamps_zero_counts() {
        let config = BoardConfig::new(0, 0);

        assert_eq!(config.categories, 1);
        assert_eq!(config.clues_per_category, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unreachable_draw_limit() {
        let config = BoardConfig::new(4, 2).with_max_category_draws(3);

        assert_eq!(
            config.validate(),
            Err(ConfigError::DrawLimitTooLow {
                draws: 3,
                categories: 4
            })
        );
        assert_eq!(
            BoardConfig::new_unchecked(2, 0).validate(),
            Err(ConfigError::NoClues)
        );
    }
}
