use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell")]
    InvalidCell,
    #[error("No board is ready to play")]
    NotReady,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one category is required")]
    NoCategories,
    #[error("At least one clue per category is required")]
    NoClues,
    #[error("Draw limit {draws} cannot yield {categories} distinct categories")]
    DrawLimitTooLow { draws: usize, categories: usize },
}

/// Failure of a single request to the trivia service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether sending the same request again could succeed.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Network(_) => true,
            Self::Status(status) => *status >= 500 || *status == 429,
            Self::Decode(_) => false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Fetch failed")]
    FetchFailure(#[from] FetchError),
    #[error("Category {category} has {available} clues, {required} needed")]
    InsufficientClues {
        category: CategoryId,
        available: usize,
        required: usize,
    },
    #[error("Only {found} of {required} distinct categories after {draws} draws")]
    CategoryDrawsExhausted {
        found: usize,
        required: usize,
        draws: usize,
    },
}

/// Where a board build was when it gave up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildStage {
    SelectingCategories,
    FetchingClues { category_index: usize },
}

/// A board build that stopped part way, nothing of it is usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Board build aborted while {stage:?}")]
pub struct BuildAborted {
    pub stage: BuildStage,
    #[source]
    pub cause: BuildError,
}

impl BuildAborted {
    pub const fn new(stage: BuildStage, cause: BuildError) -> Self {
        Self { stage, cause }
    }

    /// Number of categories that had been completed before the failure.
    pub const fn completed_categories(&self) -> usize {
        match self.stage {
            BuildStage::SelectingCategories => 0,
            BuildStage::FetchingClues { category_index } => category_index,
        }
    }
}
