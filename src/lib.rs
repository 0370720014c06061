//! This is the documentation for the **picshape** software package. **picshape** deposits the
//! macro particles of particle-in-cell (PIC) simulations onto regular grids using particle
//! shapes of different order and plots the resulting fields.
//!
//! The main building blocks are
//!   - [`shape::ParticleShape`]: the interpolation kernel (nearest grid point, linear, quadratic).
//!   - [`histogram`]: shape aware histograms in one, two and three dimensions.
//!   - [`reader::ParticleReader`]: access to the particle data of a dump.
//!   - [`analyzer::ParticleAnalyzer`]: creates [`field::Field`]s from the particles of a species.
//!   - [`plotter::Plotter`]: writes images of the fields.
//!
//! The [`demo`] module combines all of them to show the differences between the particle shapes.
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod console;
pub mod demo;
pub mod distributions;
pub mod error;
pub mod field;
pub mod histogram;
pub mod plottable;
pub mod plotter;
pub mod reader;
pub mod shape;
pub mod utils;

/// Return the version information of the currently built picshape executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
