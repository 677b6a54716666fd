use alloc::vec::Vec;
use core::future::Future;

use crate::*;

/// Remote source of trivia categories and clues.
///
/// Implementations are free to be slow or to fail, callers never assume a response arrives.
pub trait TriviaService {
    /// Looks up one arbitrary category, repeated calls may return the same one.
    fn random_category(&self) -> impl Future<Output = core::result::Result<CategoryId, FetchError>>;

    /// Every known clue of `category`, in service order.
    fn clues_for_category(
        &self,
        category: CategoryId,
    ) -> impl Future<Output = core::result::Result<Vec<ClueRecord>, FetchError>>;
}

/// Runs `request` until it succeeds, fails with a non-retryable error, or `retries` extra attempts are spent.
pub(crate) async fn with_retries<T, F, Fut>(
    retries: u8,
    mut request: F,
) -> core::result::Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = core::result::Result<T, FetchError>>,
{
    let mut attempt = 0u8;
    loop {
        match request().await {
            Err(err) if err.is_retryable() && attempt < retries => {
                attempt += 1;
                log::warn!("request failed ({}), retry {}/{}", err, attempt, retries);
            }
            result => return result,
        }
    }
}
