use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::*;

/// Collects `config.categories` distinct category ids in the order they were first drawn.
///
/// Draws are sequential since each acceptance depends on what was already accepted. Gives up with
/// [`BuildError::CategoryDrawsExhausted`] once `config.max_category_draws` lookups have been spent.
pub async fn select_categories<S: TriviaService>(
    service: &S,
    config: &BoardConfig,
) -> core::result::Result<Vec<CategoryId>, BuildError> {
    let mut seen = BTreeSet::new();
    let mut selected = Vec::with_capacity(config.categories);
    let mut draws = 0;

    while selected.len() < config.categories {
        if draws >= config.max_category_draws {
            log::warn!(
                "gave up after {} draws with {} of {} categories",
                draws,
                selected.len(),
                config.categories
            );
            return Err(BuildError::CategoryDrawsExhausted {
                found: selected.len(),
                required: config.categories,
                draws,
            });
        }

        let id = with_retries(config.fetch_retries, || service.random_category()).await?;
        draws += 1;

        if seen.insert(id) {
            log::debug!("accepted category {}", id);
            selected.push(id);
        } else {
            log::debug!("duplicate category {}, drawing again", id);
        }
    }

    Ok(selected)
}
