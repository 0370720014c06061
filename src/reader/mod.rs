#![warn(missing_docs)]
//! Access to particle data of a simulation dump.
//!
//! A [`ParticleReader`] provides the particle coordinates and weights of all particle species
//! contained in a single dump. The [`DummyReader`] creates synthetic data and is used for
//! demonstrations and testing.
use crate::{analyzer::Quantity, error::PicResult};

mod dummy;

pub use dummy::DummyReader;

/// Trait for reading particle data of a single simulation dump
pub trait ParticleReader {
    /// Returns the names of all particle species in this dump.
    fn species(&self) -> Vec<String>;
    /// Returns the number of spatial dimensions of the simulation.
    fn dimensions(&self) -> usize;
    /// Returns the values of `quantity` for all particles of `species`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the species is unknown or the quantity is not
    /// available in this dump.
    fn quantity(&self, species: &str, quantity: Quantity) -> PicResult<Vec<f64>>;
    /// Returns the (macro particle) weights of all particles of `species`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the species is unknown.
    fn weights(&self, species: &str) -> PicResult<Vec<f64>>;
}
