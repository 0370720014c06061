#![warn(missing_docs)]
//! Uniform random distribution
use super::ParticleDistribution;
use crate::error::{PicError, PicResult};
use rand::{rngs::StdRng, Rng};

/// Uniform random distribution within `[low, high)`
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}
impl Uniform {
    /// Create a new [`Uniform`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `low` or `high` are not finite.
    ///   - `low` is not smaller than `high`.
    pub fn new(low: f64, high: f64) -> PicResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(PicError::Other(
                "boundaries of uniform distribution must be finite".into(),
            ));
        }
        if low >= high {
            return Err(PicError::Other(
                "lower boundary of uniform distribution must be smaller than upper boundary"
                    .into(),
            ));
        }
        Ok(Self { low, high })
    }
}
impl Default for Uniform {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}
impl ParticleDistribution for Uniform {
    fn generate(&self, nr_of_values: usize, rng: &mut StdRng) -> Vec<f64> {
        (0..nr_of_values)
            .map(|_| rng.random_range(self.low..self.high))
            .collect()
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    #[test]
    fn new_wrong() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }
    #[test]
    fn generate() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = Uniform::new(-2.0, -1.0).unwrap();
        let values = dist.generate(100, &mut rng);
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (-2.0..-1.0).contains(v)));
    }
}
