#![warn(missing_docs)]
//! Creation of [`Field`]s from the particles of a single species.
//!
//! ## Example
//!
//! ```rust
//! use picshape::{
//!     analyzer::{FieldOptions, ParticleAnalyzer, Quantity},
//!     distributions::Uniform,
//!     reader::DummyReader,
//!     shape::ParticleShape,
//! };
//!
//! let dr = DummyReader::new(300, 2, Some(1), &Uniform::default()).unwrap();
//! let pa = ParticleAnalyzer::new(&dr, "electron").unwrap();
//! let options = FieldOptions::new("3ppc_order1")
//!     .bins(&[100])
//!     .shape(ParticleShape::Linear)
//!     .range(0, (0.0, 1.0));
//! let field = pa.create_field(&[Quantity::X], &options).unwrap();
//! assert_eq!(field.shape(), &[100]);
//! ```
use crate::{
    error::{PicError, PicResult},
    field::{Field, FieldAxis},
    histogram::histogram_dd,
    reader::ParticleReader,
    shape::ParticleShape,
};
use log::debug;
use std::fmt::Display;
use strum::EnumIter;

/// Particle quantities which can be used as field axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Quantity {
    /// position along x
    X,
    /// position along y
    Y,
    /// position along z
    Z,
    /// (normalized) momentum along x
    Px,
    /// (normalized) momentum along y
    Py,
    /// (normalized) momentum along z
    Pz,
    /// Lorentz factor calculated from the normalized momenta
    Gamma,
}

impl Quantity {
    /// Short name of the quantity used as axis label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Px => "px",
            Self::Py => "py",
            Self::Pz => "pz",
            Self::Gamma => "gamma",
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options used for creating a [`Field`] with [`ParticleAnalyzer::create_field`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    title: String,
    bins: Vec<usize>,
    shape: ParticleShape,
    ranges: Vec<Option<(f64, f64)>>,
}

impl FieldOptions {
    /// Creates new [`FieldOptions`] with the given title, 100 bins, no ranges and [`ParticleShape::Ngp`].
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            bins: vec![100],
            shape: ParticleShape::default(),
            ranges: Vec::new(),
        }
    }
    /// Sets the number of bins for each axis.
    #[must_use]
    pub fn bins(mut self, bins: &[usize]) -> Self {
        self.bins = bins.to_vec();
        self
    }
    /// Sets the particle shape used for deposition.
    #[must_use]
    pub const fn shape(mut self, shape: ParticleShape) -> Self {
        self.shape = shape;
        self
    }
    /// Sets the range of the axis with the given index.
    ///
    /// Axes without an explicit range span the extent of the particle data.
    #[must_use]
    pub fn range(mut self, axis: usize, range: (f64, f64)) -> Self {
        if self.ranges.len() <= axis {
            self.ranges.resize(axis + 1, None);
        }
        self.ranges[axis] = Some(range);
        self
    }
    /// Returns the title of the resulting field.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    fn range_of(&self, axis: usize) -> Option<(f64, f64)> {
        self.ranges.get(axis).copied().flatten()
    }
}

/// Analyzer for the particles of a single species within a dump.
#[derive(Debug)]
pub struct ParticleAnalyzer<'a, R: ParticleReader> {
    reader: &'a R,
    species: String,
}

impl<'a, R: ParticleReader> ParticleAnalyzer<'a, R> {
    /// Creates a new [`ParticleAnalyzer`] for `species` of the given dump.
    ///
    /// # Errors
    ///
    /// This function will return an error if the species does not exist in the dump.
    pub fn new(reader: &'a R, species: &str) -> PicResult<Self> {
        if !reader.species().iter().any(|s| s == species) {
            return Err(PicError::Analyzer(format!(
                "species \"{species}\" not found. Available species: {:?}",
                reader.species()
            )));
        }
        Ok(Self {
            reader,
            species: species.to_owned(),
        })
    }
    /// Returns the species name of this analyzer.
    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }
    /// Creates a [`Field`] by depositing all particles onto a grid spanned by `quantities`.
    ///
    /// The field contains the particle density, i.e. the deposited weight divided by the cell volume.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - not between one and three quantities are given.
    ///   - the number of bins does not match the number of quantities.
    ///   - a quantity is not available in the dump.
    ///   - the histogram cannot be created (e.g. invalid ranges).
    pub fn create_field(
        &self,
        quantities: &[Quantity],
        options: &FieldOptions,
    ) -> PicResult<Field> {
        if quantities.is_empty() || quantities.len() > 3 {
            return Err(PicError::Analyzer(format!(
                "fields can be created from 1 to 3 quantities, got {}",
                quantities.len()
            )));
        }
        if options.bins.len() != quantities.len() {
            return Err(PicError::Analyzer(format!(
                "{} bin counts given for {} quantities",
                options.bins.len(),
                quantities.len()
            )));
        }
        let columns = quantities
            .iter()
            .map(|q| self.reader.quantity(&self.species, *q))
            .collect::<PicResult<Vec<_>>>()?;
        let weights = self.reader.weights(&self.species)?;
        let column_refs: Vec<&[f64]> = columns.iter().map(Vec::as_slice).collect();
        let ranges: Vec<Option<(f64, f64)>> =
            (0..quantities.len()).map(|i| options.range_of(i)).collect();
        debug!(
            "create field \"{}\" of {} with bins {:?} and shape order {}",
            options.title,
            quantities.iter().map(|q| q.name()).collect::<Vec<_>>().join(","),
            options.bins,
            options.shape
        );
        let hist = histogram_dd(
            &column_refs,
            Some(&weights),
            &options.bins,
            &ranges,
            options.shape,
        )?;
        let axes: Vec<FieldAxis> = quantities
            .iter()
            .zip(hist.axes())
            .map(|(q, axis)| FieldAxis::new(q.name(), axis.edges()))
            .collect::<PicResult<Vec<_>>>()?;
        Field::from_histogram(&options.title, axes, &hist)
    }
}
