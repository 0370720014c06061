#![warn(missing_docs)]
//! Weighted histograms respecting the particle shape.
//!
//! In contrast to an ordinary histogram, every particle is not simply counted in the bin it
//! falls in but is distributed over the neighboring bins according to its [`ParticleShape`].
//! Histograms of arbitrary dimension are supported by [`Histogram`], the functions
//! [`histogram`], [`histogram2d`] and [`histogram3d`] are shortcuts for the common cases.
//!
//! ## Example
//!
//! ```rust
//! use picshape::{histogram::histogram, shape::ParticleShape};
//!
//! let positions = [4.5, 9.75, 15.0, 20.25];
//! let (counts, edges) =
//!     histogram(&positions, None, 25, Some((0.0, 25.0)), ParticleShape::Linear).unwrap();
//! assert_eq!(counts.len(), 25);
//! assert_eq!(edges.len(), 26);
//! assert!((counts[9] - 0.75).abs() < 1e-12);
//! ```
use crate::{
    error::{PicError, PicResult},
    shape::{ParticleShape, Stencil},
    utils::{
        filter_data::get_min_max_filter_nonfinite,
        grid::{centers_from_edges, linspace},
        usize_to_f64,
    },
};
use kahan::KahanSum;
use log::warn;
use nalgebra::{DMatrix, DVector};

/// A single, equally spaced axis of a [`Histogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramAxis {
    bins: usize,
    min: f64,
    max: f64,
}

impl HistogramAxis {
    /// Creates a new [`HistogramAxis`] with `bins` bins spanning `range`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - `bins` is zero.
    ///   - the range boundaries are not finite.
    ///   - the lower boundary is not smaller than the upper boundary.
    pub fn new(bins: usize, range: (f64, f64)) -> PicResult<Self> {
        let (min, max) = range;
        if bins == 0 {
            return Err(PicError::Histogram("number of bins must be >= 1".into()));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(PicError::Histogram(format!(
                "histogram range ({min}, {max}) must be finite"
            )));
        }
        if min >= max {
            return Err(PicError::Histogram(format!(
                "lower bound of histogram range ({min}, {max}) must be smaller than the upper bound"
            )));
        }
        Ok(Self { bins, min, max })
    }
    /// Creates a new [`HistogramAxis`] fitting the given data.
    ///
    /// If `range` is `None`, the range is determined by the (finite) minimum and maximum of
    /// `data`. Data without any finite value results in the range `(0, 1)`. If all values
    /// are equal, the range is extended by 0.5 in both directions.
    ///
    /// # Errors
    ///
    /// This function will return an error if the resulting axis is invalid. See [`HistogramAxis::new`].
    pub fn from_data(data: &[f64], bins: usize, range: Option<(f64, f64)>) -> PicResult<Self> {
        let range = range.unwrap_or_else(|| {
            get_min_max_filter_nonfinite(data).map_or((0.0, 1.0), |(min, max)| {
                if min < max {
                    (min, max)
                } else {
                    (min - 0.5, max + 0.5)
                }
            })
        });
        Self::new(bins, range)
    }
    /// Returns the number of bins of this axis.
    #[must_use]
    pub const fn bins(&self) -> usize {
        self.bins
    }
    /// Returns the `(min, max)` range of this axis.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
    /// Returns the width of a single bin.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        (self.max - self.min) / usize_to_f64(self.bins)
    }
    /// Returns the `bins + 1` bin edges.
    #[must_use]
    pub fn edges(&self) -> DVector<f64> {
        linspace(self.min, self.max, self.bins + 1)
            .unwrap_or_else(|_| DVector::from_element(self.bins + 1, self.min))
    }
    /// Returns the `bins` bin centers.
    #[must_use]
    pub fn centers(&self) -> DVector<f64> {
        centers_from_edges(&self.edges())
    }
    /// Stencil of a particle located at `value` along this axis.
    ///
    /// Returns `None` if the particle is too far away from the axis to contribute to any bin
    /// or if `value` is not finite. With [`ParticleShape::Ngp`], a particle sitting exactly on
    /// the upper boundary is counted in the last bin.
    #[must_use]
    pub fn stencil(&self, value: f64, shape: ParticleShape) -> Option<Stencil> {
        let bins = usize_to_f64(self.bins);
        let mut x = (value - self.min) / self.cell_width();
        if !x.is_finite() || x < -2.0 || x > bins + 2.0 {
            return None;
        }
        if shape == ParticleShape::Ngp && value <= self.max && x >= bins {
            x = bins - 0.5;
        }
        Some(shape.stencil(x))
    }
    fn contains(&self, idx: isize) -> Option<usize> {
        usize::try_from(idx).ok().filter(|i| *i < self.bins)
    }
}

/// A shape aware histogram of arbitrary dimension.
///
/// The counts are stored in row-major order, i.e. the index of the first axis varies slowest.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    axes: Vec<HistogramAxis>,
    counts: Vec<f64>,
}

impl Histogram {
    /// Creates a new, empty [`Histogram`] with the given axes.
    ///
    /// # Errors
    ///
    /// This function will return an error if no axis is given.
    pub fn new(axes: Vec<HistogramAxis>) -> PicResult<Self> {
        if axes.is_empty() {
            return Err(PicError::Histogram(
                "a histogram needs at least one axis".into(),
            ));
        }
        let len = axes.iter().map(HistogramAxis::bins).product();
        Ok(Self {
            axes,
            counts: vec![0.0; len],
        })
    }
    /// Returns the axes of this [`Histogram`].
    #[must_use]
    pub fn axes(&self) -> &[HistogramAxis] {
        &self.axes
    }
    /// Returns the number of bins along each axis.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(HistogramAxis::bins).collect()
    }
    /// Returns the (row-major) histogram counts.
    #[must_use]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }
    /// Consumes the histogram and returns its axes and counts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<HistogramAxis>, Vec<f64>) {
        (self.axes, self.counts)
    }
    /// Returns the volume (length, area, ...) of a single cell.
    #[must_use]
    pub fn cell_volume(&self) -> f64 {
        self.axes.iter().map(HistogramAxis::cell_width).product()
    }
    /// Returns the total weight deposited into this histogram.
    #[must_use]
    pub fn total(&self) -> f64 {
        let mut sum = KahanSum::new_with_value(0.0);
        for count in &self.counts {
            sum += *count;
        }
        sum.sum()
    }
    /// Deposits a single particle with the given `weight` at the position `coords`.
    ///
    /// Contributions falling outside the histogram are dropped.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the number of coordinates does not match the number of axes.
    ///   - a coordinate or the weight is not finite.
    pub fn deposit(&mut self, coords: &[f64], weight: f64, shape: ParticleShape) -> PicResult<()> {
        if coords.len() != self.axes.len() {
            return Err(PicError::Histogram(format!(
                "got {} coordinates for a {}-dimensional histogram",
                coords.len(),
                self.axes.len()
            )));
        }
        if !weight.is_finite() || coords.iter().any(|c| !c.is_finite()) {
            return Err(PicError::Histogram(format!(
                "cannot deposit particle at {coords:?} with weight {weight}: values must be finite"
            )));
        }
        // (flat index, weight) contributions of the axes processed so far
        let mut contributions: Vec<(usize, f64)> = vec![(0, weight)];
        for (axis, value) in self.axes.iter().zip(coords) {
            let Some(stencil) = axis.stencil(*value, shape) else {
                return Ok(());
            };
            let mut next = Vec::with_capacity(contributions.len() * stencil.len());
            for (flat, w) in &contributions {
                for (idx, sw) in stencil.iter() {
                    if let Some(i) = axis.contains(idx) {
                        next.push((flat * axis.bins + i, w * sw));
                    }
                }
            }
            contributions = next;
            if contributions.is_empty() {
                return Ok(());
            }
        }
        for (flat, w) in contributions {
            self.counts[flat] += w;
        }
        Ok(())
    }
    /// Deposits all particles given as columns (one slice per axis).
    ///
    /// Particles with non-finite coordinates or weights are skipped.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the number of columns does not match the number of axes.
    ///   - the columns (or the weights) have different lengths.
    pub fn fill(
        &mut self,
        columns: &[&[f64]],
        weights: Option<&[f64]>,
        shape: ParticleShape,
    ) -> PicResult<()> {
        if columns.len() != self.axes.len() {
            return Err(PicError::Histogram(format!(
                "got {} data columns for a {}-dimensional histogram",
                columns.len(),
                self.axes.len()
            )));
        }
        let nr_of_particles = columns[0].len();
        if columns.iter().any(|c| c.len() != nr_of_particles) {
            return Err(PicError::Histogram(
                "all data columns must have the same length".into(),
            ));
        }
        if let Some(w) = weights {
            if w.len() != nr_of_particles {
                return Err(PicError::Histogram(format!(
                    "length of weights ({}) does not match length of data ({nr_of_particles})",
                    w.len()
                )));
            }
        }
        let mut skipped = 0_usize;
        let mut coords = vec![0.0; columns.len()];
        for i in 0..nr_of_particles {
            for (c, column) in coords.iter_mut().zip(columns) {
                *c = column[i];
            }
            let weight = weights.map_or(1.0, |w| w[i]);
            if !weight.is_finite() || coords.iter().any(|c| !c.is_finite()) {
                skipped += 1;
                continue;
            }
            self.deposit(&coords, weight, shape)?;
        }
        if skipped > 0 {
            warn!("skipped {skipped} particle(s) with non-finite coordinates or weights");
        }
        Ok(())
    }
}

fn check_dimensions(bins: &[usize], ranges: &[Option<(f64, f64)>]) -> PicResult<()> {
    if bins.len() == ranges.len() {
        Ok(())
    } else {
        Err(PicError::Histogram(format!(
            "number of bins ({}) and ranges ({}) do not match",
            bins.len(),
            ranges.len()
        )))
    }
}

/// Creates a shape aware histogram of arbitrary dimension from particle columns.
///
/// # Errors
///
/// This function will return an error if the number of `columns`, `bins` and `ranges` differ or if
/// any axis or the data is invalid. See [`HistogramAxis::new`] and [`Histogram::fill`].
pub fn histogram_dd(
    columns: &[&[f64]],
    weights: Option<&[f64]>,
    bins: &[usize],
    ranges: &[Option<(f64, f64)>],
    shape: ParticleShape,
) -> PicResult<Histogram> {
    check_dimensions(bins, ranges)?;
    if columns.len() != bins.len() {
        return Err(PicError::Histogram(format!(
            "number of data columns ({}) and bins ({}) do not match",
            columns.len(),
            bins.len()
        )));
    }
    let axes = columns
        .iter()
        .zip(bins.iter().zip(ranges))
        .map(|(data, (b, r))| HistogramAxis::from_data(data, *b, *r))
        .collect::<PicResult<Vec<_>>>()?;
    let mut hist = Histogram::new(axes)?;
    hist.fill(columns, weights, shape)?;
    Ok(hist)
}

/// Computes the one-dimensional, shape aware histogram of `data`.
///
/// # Returns
///
/// Returns the tuple `(counts, edges)` with `bins` counts and `bins + 1` edges.
///
/// # Errors
///
/// This function will return an error if the histogram cannot be created. See [`histogram_dd`].
pub fn histogram(
    data: &[f64],
    weights: Option<&[f64]>,
    bins: usize,
    range: Option<(f64, f64)>,
    shape: ParticleShape,
) -> PicResult<(DVector<f64>, DVector<f64>)> {
    let hist = histogram_dd(&[data], weights, &[bins], &[range], shape)?;
    let edges = hist.axes[0].edges();
    let (_, counts) = hist.into_parts();
    Ok((DVector::from_vec(counts), edges))
}

/// Computes the two-dimensional, shape aware histogram of the particles at (`x`, `y`).
///
/// # Returns
///
/// Returns `(counts, x_edges, y_edges)`. `counts` has `bins.0` rows and `bins.1` columns.
///
/// # Errors
///
/// This function will return an error if the histogram cannot be created. See [`histogram_dd`].
pub fn histogram2d(
    x: &[f64],
    y: &[f64],
    weights: Option<&[f64]>,
    bins: (usize, usize),
    ranges: (Option<(f64, f64)>, Option<(f64, f64)>),
    shape: ParticleShape,
) -> PicResult<(DMatrix<f64>, DVector<f64>, DVector<f64>)> {
    let hist = histogram_dd(
        &[x, y],
        weights,
        &[bins.0, bins.1],
        &[ranges.0, ranges.1],
        shape,
    )?;
    let x_edges = hist.axes[0].edges();
    let y_edges = hist.axes[1].edges();
    let (_, counts) = hist.into_parts();
    Ok((
        DMatrix::from_row_slice(bins.0, bins.1, &counts),
        x_edges,
        y_edges,
    ))
}

/// Computes the three-dimensional, shape aware histogram of the particles at (`x`, `y`, `z`).
///
/// As nalgebra does not provide three-dimensional arrays, the full [`Histogram`] is returned.
///
/// # Errors
///
/// This function will return an error if the histogram cannot be created. See [`histogram_dd`].
pub fn histogram3d(
    coords: [&[f64]; 3],
    weights: Option<&[f64]>,
    bins: [usize; 3],
    ranges: [Option<(f64, f64)>; 3],
    shape: ParticleShape,
) -> PicResult<Histogram> {
    histogram_dd(&coords, weights, &bins, &ranges, shape)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_warnings;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use strum::IntoEnumIterator;

    const DEMO_POSITIONS: [f64; 4] = [4.5, 9.75, 15.0, 20.25];

    #[test]
    fn axis_new_wrong() {
        assert_matches!(HistogramAxis::new(0, (0.0, 1.0)), Err(PicError::Histogram(_)));
        assert!(HistogramAxis::new(1, (1.0, 1.0)).is_err());
        assert!(HistogramAxis::new(1, (2.0, 1.0)).is_err());
        assert!(HistogramAxis::new(1, (f64::NAN, 1.0)).is_err());
        assert!(HistogramAxis::new(1, (0.0, f64::INFINITY)).is_err());
    }
    #[test]
    fn axis_from_data() {
        let axis = HistogramAxis::from_data(&[1.0, 3.0, f64::NAN], 4, None).unwrap();
        assert_eq!(axis.range(), (1.0, 3.0));
        let axis = HistogramAxis::from_data(&[2.0, 2.0], 4, None).unwrap();
        assert_eq!(axis.range(), (1.5, 2.5));
        let axis = HistogramAxis::from_data(&[], 4, None).unwrap();
        assert_eq!(axis.range(), (0.0, 1.0));
        let axis = HistogramAxis::from_data(&[5.0], 4, Some((0.0, 10.0))).unwrap();
        assert_eq!(axis.range(), (0.0, 10.0));
    }
    #[test]
    fn axis_grid() {
        let axis = HistogramAxis::new(4, (0.0, 2.0)).unwrap();
        assert_relative_eq!(axis.cell_width(), 0.5);
        assert_eq!(axis.edges().as_slice(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(axis.centers().as_slice(), &[0.25, 0.75, 1.25, 1.75]);
    }
    #[test]
    fn histogram_lengths() {
        for shape in ParticleShape::iter() {
            let (counts, edges) =
                histogram(&DEMO_POSITIONS, None, 25, Some((0.0, 25.0)), shape).unwrap();
            assert_eq!(counts.len(), 25);
            assert_eq!(edges.len(), 26);
        }
    }
    #[test]
    fn histogram_order0() {
        let (counts, _) =
            histogram(&DEMO_POSITIONS, None, 25, Some((0.0, 25.0)), ParticleShape::Ngp).unwrap();
        assert_relative_eq!(counts[4], 1.0);
        assert_relative_eq!(counts[9], 1.0);
        assert_relative_eq!(counts[15], 1.0);
        assert_relative_eq!(counts[20], 1.0);
        assert_relative_eq!(counts.sum(), 4.0);
    }
    #[test]
    fn histogram_order1() {
        let (counts, _) = histogram(
            &DEMO_POSITIONS,
            None,
            25,
            Some((0.0, 25.0)),
            ParticleShape::Linear,
        )
        .unwrap();
        assert_relative_eq!(counts[4], 1.0);
        assert_relative_eq!(counts[9], 0.75);
        assert_relative_eq!(counts[10], 0.25);
        assert_relative_eq!(counts[14], 0.5);
        assert_relative_eq!(counts[15], 0.5);
        assert_relative_eq!(counts[19], 0.25);
        assert_relative_eq!(counts[20], 0.75);
        assert_relative_eq!(counts.sum(), 4.0);
    }
    #[test]
    fn histogram_order2() {
        let (counts, _) = histogram(
            &DEMO_POSITIONS,
            None,
            25,
            Some((0.0, 25.0)),
            ParticleShape::Quadratic,
        )
        .unwrap();
        assert_relative_eq!(counts[3], 0.125);
        assert_relative_eq!(counts[4], 0.75);
        assert_relative_eq!(counts[5], 0.125);
        // 9.75: d = 0.25
        assert_relative_eq!(counts[8], 0.03125);
        assert_relative_eq!(counts[9], 0.6875);
        assert_relative_eq!(counts[10], 0.28125);
        assert_relative_eq!(counts.sum(), 4.0, epsilon = 1e-12);
    }
    #[test]
    fn histogram_drops_outside() {
        let (counts, _) =
            histogram(&[0.1, 5.0], None, 5, Some((0.0, 5.0)), ParticleShape::Linear).unwrap();
        // 0.1 -> cells -1 (0.4, dropped) and 0 (0.6); 5.0 -> cells 4 (0.5) and 5 (0.5, dropped)
        assert_relative_eq!(counts[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(counts[4], 0.5, epsilon = 1e-12);
        assert_relative_eq!(counts.sum(), 1.1, epsilon = 1e-12);
    }
    #[test]
    fn histogram_far_outside() {
        for shape in ParticleShape::iter() {
            for x in [1e300, -1e300, f64::MAX, f64::MIN] {
                let (counts, _) = histogram(&[x], None, 10, Some((0.0, 1.0)), shape).unwrap();
                assert_eq!(counts.sum(), 0.0);
            }
            let (counts, _, _) = histogram2d(
                &[0.5],
                &[-1e300],
                None,
                (4, 4),
                (Some((0.0, 1.0)), Some((0.0, 1.0))),
                shape,
            )
            .unwrap();
            assert_eq!(counts.sum(), 0.0);
        }
    }
    #[test]
    fn histogram_ngp_upper_edge() {
        let (counts, edges) =
            histogram(&[0.0, 0.5, 1.0], None, 4, None, ParticleShape::Ngp).unwrap();
        assert_eq!(edges[4], 1.0);
        assert_eq!(counts.as_slice(), &[1.0, 0.0, 1.0, 1.0]);
        let (counts, _) =
            histogram(&[2.0], None, 2, Some((0.0, 2.0)), ParticleShape::Ngp).unwrap();
        assert_eq!(counts.as_slice(), &[0.0, 1.0]);
    }
    #[test]
    fn axis_stencil() {
        let axis = HistogramAxis::new(10, (0.0, 1.0)).unwrap();
        assert!(axis.stencil(0.45, ParticleShape::Linear).is_some());
        assert!(axis.stencil(-0.19, ParticleShape::Quadratic).is_some());
        assert!(axis.stencil(1.3, ParticleShape::Quadratic).is_none());
        assert!(axis.stencil(f64::NAN, ParticleShape::Ngp).is_none());
    }
    #[test]
    fn deposit_nonfinite() {
        let mut hist = Histogram::new(vec![HistogramAxis::new(2, (0.0, 1.0)).unwrap()]).unwrap();
        assert_matches!(
            hist.deposit(&[f64::NAN], 1.0, ParticleShape::Ngp),
            Err(PicError::Histogram(_))
        );
        assert!(hist.deposit(&[0.2], f64::INFINITY, ParticleShape::Ngp).is_err());
        assert!(hist.deposit(&[f64::NEG_INFINITY], 1.0, ParticleShape::Linear).is_err());
        assert_eq!(hist.total(), 0.0);
        hist.deposit(&[1e300], 1.0, ParticleShape::Quadratic).unwrap();
        assert_eq!(hist.total(), 0.0);
    }
    #[test]
    fn histogram_weights() {
        let (counts, _) = histogram(
            &[0.5, 1.5],
            Some(&[2.0, 0.5]),
            2,
            Some((0.0, 2.0)),
            ParticleShape::Ngp,
        )
        .unwrap();
        assert_eq!(counts.as_slice(), &[2.0, 0.5]);
    }
    #[test]
    fn histogram_wrong_weights() {
        assert_matches!(
            histogram(&[0.5, 1.5], Some(&[2.0]), 2, None, ParticleShape::Ngp),
            Err(PicError::Histogram(_))
        );
    }
    #[test]
    fn histogram_skips_nonfinite() {
        testing_logger::setup();
        let (counts, _) = histogram(
            &[0.5, f64::NAN, 1.5],
            None,
            2,
            Some((0.0, 2.0)),
            ParticleShape::Ngp,
        )
        .unwrap();
        assert_relative_eq!(counts.sum(), 2.0);
        check_warnings(vec![
            "skipped 1 particle(s) with non-finite coordinates or weights",
        ]);
    }
    #[test]
    fn histogram2d_test() {
        let x = [0.25, 0.75];
        let y = [0.25, 0.25];
        let (counts, x_edges, y_edges) = histogram2d(
            &x,
            &y,
            None,
            (2, 4),
            (Some((0.0, 1.0)), Some((0.0, 1.0))),
            ParticleShape::Ngp,
        )
        .unwrap();
        assert_eq!(counts.shape(), (2, 4));
        assert_eq!(x_edges.len(), 3);
        assert_eq!(y_edges.len(), 5);
        assert_relative_eq!(counts[(0, 1)], 1.0);
        assert_relative_eq!(counts[(1, 1)], 1.0);
        assert_relative_eq!(counts.sum(), 2.0);
    }
    #[test]
    fn histogram2d_quadratic_conserves() {
        let x: Vec<f64> = (0..50).map(|i| 0.2 + 0.012 * f64::from(i)).collect();
        let y: Vec<f64> = (0..50).map(|i| 0.7 - 0.01 * f64::from(i)).collect();
        let (counts, _, _) = histogram2d(
            &x,
            &y,
            None,
            (20, 10),
            (Some((0.0, 1.0)), Some((0.0, 1.0))),
            ParticleShape::Quadratic,
        )
        .unwrap();
        assert_relative_eq!(counts.sum(), 50.0, epsilon = 1e-10);
    }
    #[test]
    fn histogram3d_test() {
        let x = [0.5, 0.5];
        let y = [0.5, 0.1];
        let z = [0.5, 0.9];
        let hist = histogram3d(
            [&x, &y, &z],
            None,
            [4, 4, 2],
            [Some((0.0, 1.0)); 3],
            ParticleShape::Linear,
        )
        .unwrap();
        assert_eq!(hist.shape(), vec![4, 4, 2]);
        assert_eq!(hist.counts().len(), 32);
        assert_relative_eq!(hist.cell_volume(), 0.25 * 0.25 * 0.5);
        // first particle sits exactly on the cell borders in x and y, centered cells in z are at 0.25/0.75
        assert!(hist.total() > 1.0);
        assert!(hist.total() <= 2.0);
    }
    #[test]
    fn histogram_dd_mismatch() {
        assert!(histogram_dd(&[&[1.0]], None, &[2, 2], &[None, None], ParticleShape::Ngp).is_err());
        assert!(histogram_dd(&[&[1.0]], None, &[2], &[None, None], ParticleShape::Ngp).is_err());
        assert!(histogram_dd(
            &[&[1.0], &[1.0, 2.0]],
            None,
            &[2, 2],
            &[None, None],
            ParticleShape::Ngp
        )
        .is_err());
    }
    #[test]
    fn deposit_wrong_dims() {
        let mut hist = Histogram::new(vec![HistogramAxis::new(2, (0.0, 1.0)).unwrap()]).unwrap();
        assert!(hist.deposit(&[0.1, 0.2], 1.0, ParticleShape::Ngp).is_err());
        assert!(Histogram::new(vec![]).is_err());
    }
}
