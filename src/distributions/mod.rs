#![warn(missing_docs)]
//! Module for handling the random functions used to generate synthetic particles.
//!
//! ## Example
//!
//! ```rust
//! use picshape::distributions::{ParticleDistribution, Uniform};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let values = Uniform::default().generate(10, &mut rng);
//! assert_eq!(values.len(), 10);
//! assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
//! ```
use clap::ValueEnum;
use rand::rngs::StdRng;
use std::fmt::Display;

mod normal;
mod uniform;

pub use normal::Normal;
pub use uniform::Uniform;

/// Trait for the generation of random particle coordinates
pub trait ParticleDistribution {
    /// Generate `nr_of_values` random values using the given random number generator.
    fn generate(&self, nr_of_values: usize, rng: &mut StdRng) -> Vec<f64>;
}

/// The random functions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DistributionType {
    /// uniform distribution in `[0, 1)`
    #[default]
    Uniform,
    /// standard normal distribution
    Normal,
}

impl DistributionType {
    /// Returns the default parameterized distribution of this type.
    #[must_use]
    pub fn distribution(self) -> Box<dyn ParticleDistribution> {
        match self {
            Self::Uniform => Box::new(Uniform::default()),
            Self::Normal => Box::new(Normal::default()),
        }
    }
}

impl Display for DistributionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    #[test]
    fn display() {
        assert_eq!(format!("{}", DistributionType::Uniform), "uniform");
        assert_eq!(format!("{}", DistributionType::Normal), "normal");
    }
    #[test]
    fn boxed_distribution() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = DistributionType::Normal
            .distribution()
            .generate(5, &mut rng);
        assert_eq!(values.len(), 5);
    }
}
