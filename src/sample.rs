//! Random sample data for seeding example trees. Nothing here is used by [`Tree`][crate::Tree]
//! itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::SampleError;

/// How to draw a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    /// How many unique values to draw.
    pub count: usize,
    /// Exclusive upper bound of the values.
    pub max: u32,
    /// Seed for a reproducible sample. Without one the sample comes from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 7,
            max: 200,
            seed: None,
        }
    }
}

/// Draws `count` distinct values from `0..max`, in the order they were drawn.
///
/// # Examples
///
/// ```
/// use balanced_bst::sample::random_unique;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let values = random_unique(10, 20, &mut rng).unwrap();
///
/// assert_eq!(values.len(), 10);
/// assert!(values.iter().all(|&x| x < 20));
///
/// assert!(random_unique(21, 20, &mut rng).is_err());
/// ```
pub fn random_unique<R>(count: usize, max: u32, rng: &mut R) -> Result<Vec<u32>, SampleError>
where
    R: Rng + ?Sized,
{
    if count > max as usize {
        return Err(SampleError::RangeTooSmall { count, max });
    }

    Ok(rand::seq::index::sample(rng, max as usize, count)
        .into_iter()
        .map(|x| x as u32)
        .collect())
}

/// Draws a sample as described by `config`.
pub fn generate(config: &SampleConfig) -> Result<Vec<u32>, SampleError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = random_unique(config.count, config.max, &mut rng)?;
    debug!(?config, ?values, "generated sample");
    Ok(values)
}
