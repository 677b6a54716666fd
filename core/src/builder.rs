use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Assembles a complete [`Board`] from a [`TriviaService`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardBuilder {
    config: BoardConfig,
}

impl BoardBuilder {
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Selects the categories, then fetches and samples each of them in turn.
    ///
    /// Any failure aborts the whole build, a board is only returned once every column is filled.
    pub async fn build<S, R>(
        &self,
        service: &S,
        rng: &mut R,
    ) -> core::result::Result<Board, BuildAborted>
    where
        S: TriviaService,
        R: Rng + ?Sized,
    {
        let config = &self.config;
        log::info!(
            "building {}x{} board",
            config.categories,
            config.clues_per_category
        );

        let ids = select_categories(service, config)
            .await
            .map_err(|err| BuildAborted::new(BuildStage::SelectingCategories, err))?;

        let mut categories = Vec::with_capacity(ids.len());
        for (category_index, id) in ids.into_iter().enumerate() {
            let category = fetch_category(service, &mut *rng, id, config)
                .await
                .map_err(|err| {
                    log::warn!("category {} ({}) failed: {}", category_index, id, err);
                    BuildAborted::new(BuildStage::FetchingClues { category_index }, err)
                })?;
            log::debug!("category {}: {:?}", category_index, category.title());
            categories.push(category);
        }

        Ok(Board::new(categories))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
