#![warn(missing_docs)]
//! Reader generating synthetic particle data.
use super::ParticleReader;
use crate::{
    analyzer::Quantity,
    distributions::{Normal, ParticleDistribution},
    error::{PicError, PicResult},
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

const SPECIES: &str = "electron";

/// Reader creating fake particle data for testing and demonstration purposes.
///
/// The dump contains a single species (`electron`). Positions are drawn from the given
/// distribution for every spatial dimension, momenta (`px`, `py`, `pz`) always from a
/// standard normal distribution. Every particle has the weight 1.
#[derive(Debug, Clone)]
pub struct DummyReader {
    dimensions: usize,
    positions: Vec<Vec<f64>>,
    momenta: [Vec<f64>; 3],
    weights: Vec<f64>,
}

impl DummyReader {
    /// Creates a new [`DummyReader`] with `nr_of_particles` particles.
    ///
    /// If `seed` is `None`, the random number generator is seeded by the operating system, so
    /// that every reader contains different data.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `nr_of_particles` is zero.
    ///   - `dimensions` is not 1, 2 or 3.
    pub fn new(
        nr_of_particles: usize,
        dimensions: usize,
        seed: Option<u64>,
        distribution: &dyn ParticleDistribution,
    ) -> PicResult<Self> {
        if nr_of_particles == 0 {
            return Err(PicError::Reader("nr_of_particles must be >= 1".into()));
        }
        if !(1..=3).contains(&dimensions) {
            return Err(PicError::Reader(format!(
                "dummy reader supports 1, 2 or 3 dimensions, got {dimensions}"
            )));
        }
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let positions = (0..dimensions)
            .map(|_| distribution.generate(nr_of_particles, &mut rng))
            .collect();
        let normal = Normal::default();
        let momenta = [
            normal.generate(nr_of_particles, &mut rng),
            normal.generate(nr_of_particles, &mut rng),
            normal.generate(nr_of_particles, &mut rng),
        ];
        debug!("created dummy dump with {nr_of_particles} particles in {dimensions}D");
        Ok(Self {
            dimensions,
            positions,
            momenta,
            weights: vec![1.0; nr_of_particles],
        })
    }
    /// Returns the number of particles per species.
    #[must_use]
    pub fn nr_of_particles(&self) -> usize {
        self.weights.len()
    }
    fn check_species(species: &str) -> PicResult<()> {
        if species == SPECIES {
            Ok(())
        } else {
            Err(PicError::Reader(format!(
                "species \"{species}\" not found in dump"
            )))
        }
    }
    fn column(&self, quantity: Quantity) -> PicResult<Vec<f64>> {
        let spatial = |axis: usize| {
            self.positions.get(axis).cloned().ok_or_else(|| {
                PicError::Reader(format!(
                    "quantity {quantity} not available in a {}-dimensional dump",
                    self.dimensions
                ))
            })
        };
        match quantity {
            Quantity::X => spatial(0),
            Quantity::Y => spatial(1),
            Quantity::Z => spatial(2),
            Quantity::Px => Ok(self.momenta[0].clone()),
            Quantity::Py => Ok(self.momenta[1].clone()),
            Quantity::Pz => Ok(self.momenta[2].clone()),
            Quantity::Gamma => Ok(itertools::izip!(
                &self.momenta[0],
                &self.momenta[1],
                &self.momenta[2]
            )
            .map(|(px, py, pz)| (1.0 + px * px + py * py + pz * pz).sqrt())
            .collect()),
        }
    }
}

impl ParticleReader for DummyReader {
    fn species(&self) -> Vec<String> {
        vec![SPECIES.to_owned()]
    }
    fn dimensions(&self) -> usize {
        self.dimensions
    }
    fn quantity(&self, species: &str, quantity: Quantity) -> PicResult<Vec<f64>> {
        Self::check_species(species)?;
        self.column(quantity)
    }
    fn weights(&self, species: &str) -> PicResult<Vec<f64>> {
        Self::check_species(species)?;
        Ok(self.weights.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::distributions::Uniform;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    #[test]
    fn new_wrong() {
        let dist = Uniform::default();
        assert_matches!(DummyReader::new(0, 2, None, &dist), Err(PicError::Reader(_)));
        assert!(DummyReader::new(10, 0, None, &dist).is_err());
        assert!(DummyReader::new(10, 4, None, &dist).is_err());
    }
    #[test]
    fn species() {
        let dr = DummyReader::new(10, 2, Some(1), &Uniform::default()).unwrap();
        assert_eq!(dr.species(), vec!["electron".to_string()]);
        assert_eq!(dr.dimensions(), 2);
        assert_eq!(dr.nr_of_particles(), 10);
        assert!(dr.quantity("proton", Quantity::X).is_err());
        assert!(dr.weights("proton").is_err());
    }
    #[test]
    fn quantities() {
        let dr = DummyReader::new(50, 1, Some(1), &Uniform::default()).unwrap();
        let x = dr.quantity("electron", Quantity::X).unwrap();
        assert_eq!(x.len(), 50);
        assert!(x.iter().all(|v| (0.0..1.0).contains(v)));
        assert_matches!(dr.quantity("electron", Quantity::Y), Err(PicError::Reader(_)));
        assert_eq!(dr.quantity("electron", Quantity::Pz).unwrap().len(), 50);
        let gamma = dr.quantity("electron", Quantity::Gamma).unwrap();
        assert!(gamma.iter().all(|g| *g >= 1.0));
        let w = dr.weights("electron").unwrap();
        assert_relative_eq!(w.iter().sum::<f64>(), 50.0);
    }
    #[test]
    fn seeded_is_reproducible() {
        let dist = Uniform::default();
        let dr1 = DummyReader::new(20, 3, Some(42), &dist).unwrap();
        let dr2 = DummyReader::new(20, 3, Some(42), &dist).unwrap();
        let dr3 = DummyReader::new(20, 3, Some(43), &dist).unwrap();
        assert_eq!(
            dr1.quantity("electron", Quantity::Z).unwrap(),
            dr2.quantity("electron", Quantity::Z).unwrap()
        );
        assert_ne!(
            dr1.quantity("electron", Quantity::X).unwrap(),
            dr3.quantity("electron", Quantity::X).unwrap()
        );
    }
}
