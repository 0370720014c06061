//! Helpers for regular one-dimensional grids.
#![warn(missing_docs)]
use crate::error::{PicError, PicResult};
use log::warn;
use nalgebra::{DVector, Scalar};
use num::{Float, NumCast};

/// Creates a linearly spaced Vector (Matrix with 1 column and `num` rows) from `start` to `end`
/// # Attributes
/// - `start`:  Start value of the array
/// - `end`:    end value of the array
/// - `num`:    number of elements
///
/// # Errors
/// This function will return an error if `start` or `end` are not finite or if `num` cannot be casted to the float type.
pub fn linspace<T: Float + Scalar>(start: T, end: T, num: usize) -> PicResult<DVector<T>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PicError::Other(
            "start and end values must be finite!".into(),
        ));
    };

    let mut linspace = DVector::<T>::from_element(num, start);
    if num < 2 {
        warn!("Using linspace with less than two elements results in an empty Vector for num=0 or a Vector with one entry being num=start");
        return Ok(linspace);
    }

    let bin_size = (end - start)
        / <T as NumCast>::from(num - 1)
            .ok_or_else(|| PicError::Other("Cannot cast usize to float type!".into()))?;

    for (step, val) in linspace.iter_mut().enumerate() {
        let step = <T as NumCast>::from(step)
            .ok_or_else(|| PicError::Other("Cannot cast usize to float type!".into()))?;
        *val = *val + step * bin_size;
    }
    Ok(linspace)
}

/// Returns the mid points of consecutive `edges`.
///
/// This is the moving average with a window of two, i.e. a vector one element shorter than `edges`.
#[must_use]
pub fn centers_from_edges(edges: &DVector<f64>) -> DVector<f64> {
    if edges.len() < 2 {
        return DVector::zeros(0);
    }
    DVector::from_iterator(
        edges.len() - 1,
        edges
            .as_slice()
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1])),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn linspace_test() {
        let x = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(x.len(), 5);
        assert_relative_eq!(x[0], 0.0);
        assert_relative_eq!(x[1], 0.25);
        assert_relative_eq!(x[4], 1.0);
    }
    #[test]
    fn linspace_single() {
        testing_logger::setup();
        let x = linspace(2.0, 3.0, 1).unwrap();
        assert_eq!(x.len(), 1);
        assert_relative_eq!(x[0], 2.0);
        crate::utils::test_helper::test_helper::check_warnings(vec![
            "Using linspace with less than two elements results in an empty Vector for num=0 or a Vector with one entry being num=start",
        ]);
    }
    #[test]
    fn linspace_nonfinite() {
        assert!(linspace(f64::NAN, 1.0, 3).is_err());
        assert!(linspace(0.0, f64::INFINITY, 3).is_err());
    }
    #[test]
    fn centers() {
        let edges = DVector::from_vec(vec![0.0, 1.0, 2.0, 4.0]);
        let c = centers_from_edges(&edges);
        assert_eq!(c.as_slice(), &[0.5, 1.5, 3.0]);
        assert_eq!(centers_from_edges(&DVector::from_vec(vec![1.0])).len(), 0);
    }
}
