use rand::Rng;
use rand::seq::index;

use crate::errors::SelectionError;

/// Draw `count` distinct elements of `population`, every subset of that size equally likely.
///
/// The returned order is the draw order, not the population order.
pub fn sample_without_replacement<T, R>(
    population: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, SelectionError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if count > population.len() {
        return Err(SelectionError::InsufficientPopulation {
            available: population.len(),
            requested: count,
        });
    }
    Ok(index::sample(rng, population.len(), count)
        .into_iter()
        .map(|idx| population[idx].clone())
        .collect())
}
