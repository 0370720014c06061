#![warn(missing_docs)]
//! Particle shapes (interpolation kernels) used for depositing particles onto a grid.
//!
//! A particle of a given shape contributes to the cells around its position. The weights of
//! all contributions always sum up to one so that the deposited charge is conserved.
//!
//! ## Example
//!
//! ```rust
//! use picshape::shape::ParticleShape;
//!
//! // particle sitting on the border between cell 9 and cell 10 (in cell units)
//! let stencil = ParticleShape::Linear.stencil(9.75);
//! let cells: Vec<(isize, f64)> = stencil.iter().collect();
//! assert_eq!(cells, vec![(9, 0.75), (10, 0.25)]);
//! ```
use crate::{
    error::{PicError, PicResult},
    utils::f64_to_isize,
};
use std::fmt::Display;
use strum::EnumIter;

/// Shape (order) of the particles used during deposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum ParticleShape {
    /// nearest grid point (order 0). The whole particle is assigned to the cell it sits in.
    #[default]
    Ngp,
    /// linear weighting / cloud in cell (order 1). Contributes to the two closest cell centers.
    Linear,
    /// quadratic spline / triangular shaped cloud (order 2). Contributes to three cells.
    Quadratic,
}

impl ParticleShape {
    /// Returns the interpolation order of this [`ParticleShape`].
    #[must_use]
    pub const fn order(self) -> usize {
        match self {
            Self::Ngp => 0,
            Self::Linear => 1,
            Self::Quadratic => 2,
        }
    }

    /// Calculate the cells (and their weights) a particle at position `x` contributes to.
    ///
    /// `x` is given in cell units relative to the lower grid boundary: cell `i` spans `[i, i+1)`
    /// and has its center at `i + 0.5`. Returned cell indices may be negative or beyond the grid. It
    /// is the responsibility of the caller to drop those.
    #[must_use]
    pub fn stencil(self, x: f64) -> Stencil {
        match self {
            Self::Ngp => Stencil {
                first: f64_to_isize(x.floor()),
                weights: [1.0, 0.0, 0.0],
                len: 1,
            },
            Self::Linear => {
                let s = x - 0.5;
                let first = s.floor();
                let d = s - first;
                Stencil {
                    first: f64_to_isize(first),
                    weights: [1.0 - d, d, 0.0],
                    len: 2,
                }
            }
            Self::Quadratic => {
                let center = x.floor();
                let d = x - (center + 0.5);
                Stencil {
                    first: f64_to_isize(center).saturating_sub(1),
                    weights: [
                        0.5 * (0.5 - d).powi(2),
                        0.75 - d * d,
                        0.5 * (0.5 + d).powi(2),
                    ],
                    len: 3,
                }
            }
        }
    }
}

impl TryFrom<usize> for ParticleShape {
    type Error = PicError;

    fn try_from(order: usize) -> PicResult<Self> {
        match order {
            0 => Ok(Self::Ngp),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Quadratic),
            _ => Err(PicError::Other(format!(
                "particle shape of order {order} is not supported. Use 0, 1 or 2"
            ))),
        }
    }
}

impl Display for ParticleShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.order())
    }
}

/// Contribution of a single particle to (up to three) consecutive cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    first: isize,
    weights: [f64; 3],
    len: usize,
}

impl Stencil {
    /// Index of the first cell receiving a contribution.
    #[must_use]
    pub const fn first(&self) -> isize {
        self.first
    }
    /// Number of cells receiving a contribution.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }
    /// A stencil never is empty. Only here for completeness.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Iterate over `(cell index, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (isize, f64)> + '_ {
        self.weights[..self.len]
            .iter()
            .enumerate()
            .map(move |(offset, w)| (self.first.saturating_add_unsigned(offset), *w))
    }
    /// Sum of all weights. Equals one for every shape.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights[..self.len].iter().sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use strum::IntoEnumIterator;

    #[test]
    fn order() {
        assert_eq!(ParticleShape::Ngp.order(), 0);
        assert_eq!(ParticleShape::Linear.order(), 1);
        assert_eq!(ParticleShape::Quadratic.order(), 2);
        assert_eq!(ParticleShape::default(), ParticleShape::Ngp);
    }
    #[test]
    fn try_from() {
        assert_eq!(ParticleShape::try_from(0).unwrap(), ParticleShape::Ngp);
        assert_eq!(ParticleShape::try_from(1).unwrap(), ParticleShape::Linear);
        assert_eq!(ParticleShape::try_from(2).unwrap(), ParticleShape::Quadratic);
        assert_matches!(ParticleShape::try_from(3), Err(PicError::Other(_)));
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", ParticleShape::Quadratic), "2");
    }
    #[test]
    fn ngp() {
        let s = ParticleShape::Ngp.stencil(4.5);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(4, 1.0)]);
        let s = ParticleShape::Ngp.stencil(-0.2);
        assert_eq!(s.first(), -1);
    }
    #[test]
    fn linear() {
        let s = ParticleShape::Linear.stencil(4.5);
        let cells: Vec<_> = s.iter().collect();
        assert_eq!(cells[0].0, 4);
        assert_relative_eq!(cells[0].1, 1.0);
        assert_relative_eq!(cells[1].1, 0.0);

        let s = ParticleShape::Linear.stencil(20.25);
        let cells: Vec<_> = s.iter().collect();
        assert_eq!(cells[0].0, 19);
        assert_relative_eq!(cells[0].1, 0.25);
        assert_eq!(cells[1].0, 20);
        assert_relative_eq!(cells[1].1, 0.75);
    }
    #[test]
    fn quadratic() {
        let s = ParticleShape::Quadratic.stencil(4.5);
        let cells: Vec<_> = s.iter().collect();
        assert_eq!(s.len(), 3);
        assert_eq!(cells[0].0, 3);
        assert_relative_eq!(cells[0].1, 0.125);
        assert_relative_eq!(cells[1].1, 0.75);
        assert_relative_eq!(cells[2].1, 0.125);

        let s = ParticleShape::Quadratic.stencil(15.0);
        let cells: Vec<_> = s.iter().collect();
        assert_eq!(cells[0].0, 14);
        assert_relative_eq!(cells[0].1, 0.5);
        assert_relative_eq!(cells[1].1, 0.5);
        assert_relative_eq!(cells[2].1, 0.0);
    }
    #[test]
    fn far_away_positions() {
        for shape in ParticleShape::iter() {
            for x in [1e300, -1e300, f64::MAX, f64::MIN] {
                let cells: Vec<_> = shape.stencil(x).iter().collect();
                assert_eq!(cells.len(), shape.order() + 1);
            }
        }
    }
    #[test]
    fn weights_sum_to_one() {
        for shape in ParticleShape::iter() {
            for i in 0..200 {
                let x = -3.0 + 0.037 * f64::from(i);
                let s = shape.stencil(x);
                assert!(!s.is_empty());
                assert_relative_eq!(s.total(), 1.0, epsilon = 1e-12);
                assert!(s.iter().all(|(_, w)| w >= 0.0));
            }
        }
    }
}
