use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Picks `count` distinct positions out of `available`, in draw order.
pub fn sample_indices<R: Rng + ?Sized>(
    rng: &mut R,
    available: usize,
    count: usize,
) -> Option<Vec<usize>> {
    if count > available {
        return None;
    }
    Some(rand::seq::index::sample(rng, available, count).into_vec())
}

/// Turns the fetched clue list of `category` into a board column of `count` distinct clues.
///
/// Fails with [`BuildError::InsufficientClues`] when the service knows fewer clues than requested.
pub fn sample_category<R: Rng + ?Sized>(
    rng: &mut R,
    category: CategoryId,
    records: Vec<ClueRecord>,
    count: usize,
) -> core::result::Result<Category, BuildError> {
    let available = records.len();
    let Some(indices) = sample_indices(rng, available, count) else {
        return Err(BuildError::InsufficientClues {
            category,
            available,
            required: count,
        });
    };
    log::debug!("category {}: sampled {:?} of {}", category, indices, available);

    let mut records: Vec<Option<ClueRecord>> = records.into_iter().map(Some).collect();
    let mut title = None;
    let mut clues = Vec::with_capacity(count);
    for index in indices {
        let Some(record) = records[index].take() else {
            continue;
        };
        let ClueRecord {
            question,
            answer,
            category_title,
        } = record;
        title.get_or_insert(category_title);
        clues.push(Clue::new(question, answer));
    }

    Ok(Category::new(title.unwrap_or_default(), clues))
}

/// Fetches the clues of `category` and samples a board column from them.
pub async fn fetch_category<S: TriviaService, R: Rng + ?Sized>(
    service: &S,
    rng: &mut R,
    category: CategoryId,
    config: &BoardConfig,
) -> core::result::Result<Category, BuildError> {
    let records =
        with_retries(config.fetch_retries, || service.clues_for_category(category)).await?;
    sample_category(rng, category, records, config.clues_per_category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::format;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn records(count: usize) -> Vec<ClueRecord> {
        (0..count)
            .map(|i| ClueRecord::new(format!("q{}", i), format!("a{}", i), "Science"))
            .collect()
    }

    #[test]
    fn sampled_indices_are_distinct_and_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for seed_round in 0..50 {
            let indices = sample_indices(&mut rng, 10 + seed_round % 5, 5).unwrap();
            let unique: BTreeSet<_> = indices.iter().copied().collect();

            assert_eq!(indices.len(), 5);
            assert_eq!(unique.len(), 5);
            assert!(indices.iter().all(|&i| i < 10 + seed_round % 5));
        }
    }

    #[test]
    fn exact_size_list_uses_every_clue() {
        let mut rng = SmallRng::seed_from_u64(1);
        let category = sample_category(&mut rng, CategoryId(3), records(5), 5).unwrap();
        let questions: BTreeSet<_> = category.clues().iter().map(Clue::question).collect();

        assert_eq!(category.title(), "Science");
        assert_eq!(questions.len(), 5);
        assert!(
            category
                .clues()
                .iter()
                .all(|clue| clue.state() == RevealState::Hidden)
        );
    }

    #[test]
    fn short_list_fails_fast() {
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(
            sample_category(&mut rng, CategoryId(9), records(2), 5),
            Err(BuildError::InsufficientClues {
                category: CategoryId(9),
                available: 2,
                required: 5,
            })
        );
        assert_eq!(sample_indices(&mut rng, 0, 1), None);
    }

    #[test]
    fn questions_keep_their_answers() {
        let mut rng = SmallRng::seed_from_u64(7);
        let category = sample_category(&mut rng, CategoryId(1), records(20), 5).unwrap();

        for clue in category.clues() {
            assert_eq!(&clue.question()[1..], &clue.answer()[1..]);
        }
    }
}
