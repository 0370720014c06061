#![warn(missing_docs)]
//! Normal (Gaussian) random distribution
use super::ParticleDistribution;
use crate::error::{PicError, PicResult};
use rand::rngs::StdRng;
use rand_distr::Distribution;

/// Normal distribution with a given mean and standard deviation
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}
impl Normal {
    /// Create a new [`Normal`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if the mean is not finite or the standard deviation is
    /// negative or not finite.
    pub fn new(mean: f64, std_dev: f64) -> PicResult<Self> {
        if !mean.is_finite() {
            return Err(PicError::Other("mean must be finite".into()));
        }
        if !std_dev.is_finite() || std_dev.is_sign_negative() {
            return Err(PicError::Other(
                "standard deviation must be >= zero and finite".into(),
            ));
        }
        Ok(Self { mean, std_dev })
    }
}
impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}
impl ParticleDistribution for Normal {
    fn generate(&self, nr_of_values: usize, rng: &mut StdRng) -> Vec<f64> {
        // parameters are validated in `new`
        rand_distr::Normal::new(self.mean, self.std_dev).map_or_else(
            |_| vec![self.mean; nr_of_values],
            |normal| (0..nr_of_values).map(|_| normal.sample(rng)).collect(),
        )
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    #[test]
    fn new_wrong() {
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
        assert!(Normal::new(0.0, 0.0).is_ok());
    }
    #[test]
    fn generate() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = Normal::new(5.0, 0.1).unwrap().generate(1000, &mut rng);
        let mean = values.iter().sum::<f64>() / 1000.0;
        assert!((mean - 5.0).abs() < 0.05);
    }
    #[test]
    fn zero_width() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = Normal::new(2.0, 0.0).unwrap().generate(3, &mut rng);
        assert_eq!(values, vec![2.0; 3]);
    }
}
