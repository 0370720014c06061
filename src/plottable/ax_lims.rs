//! This module contains the [`AxLims`] struct, which is used to define the axis limits of a plot.
use approx::{abs_diff_ne, RelativeEq};
use log::warn;

use crate::{
    error::{PicError, PicResult},
    utils::filter_data::get_min_max_filter_nonfinite,
};

/// Struct that holds the maximum and minimum values of an axis
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct AxLims {
    /// minimum value of the axis
    pub min: f64,
    /// maximum value of the axis
    pub max: f64,
}

impl TryFrom<Option<(f64, f64)>> for AxLims {
    type Error = PicError;

    fn try_from(value: Option<(f64, f64)>) -> PicResult<Self> {
        if let Some((min, max)) = value {
            Self::new(min, max).map_or_else(
                || {
                    Err(PicError::Plot(format!(
                        "Cannot create AxLim from values (min:{min}, max:{max})"
                    )))
                },
                Ok,
            )
        } else {
            Err(PicError::Plot("Cannot create AxLim from None".into()))
        }
    }
}

impl AxLims {
    ///Creates a new [`AxLims`] struct
    ///
    /// # Returns
    /// This function returns Some([`AxLims`]) or None if the chosen minimum or maximum value is NaN, infinite or if `min >= max`
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let axlim = Self { min, max };
        if axlim.check_validity() {
            Some(axlim)
        } else {
            warn!("Invalid ax limit! Must be finite, not NaN, not equal and min must be smaller than max! AxLimit is set to None!");
            None
        }
    }

    /// Creates a new [`AxLims`] struct from the finite minimum and maximum of the given values.
    ///
    /// Returns None if less than two distinct finite values exist.
    #[must_use]
    pub fn finite_from_values(values: &[f64]) -> Option<Self> {
        get_min_max_filter_nonfinite(values).and_then(|(min, max)| {
            let axlim = Self { min, max };
            if axlim.check_validity() {
                Some(axlim)
            } else {
                None
            }
        })
    }

    /// Checks the validity of the delivered min and max values and returns true if it is valid, false otherwise
    #[must_use]
    pub fn check_validity(self) -> bool {
        self.max.is_finite()
            && self.min.is_finite()
            && abs_diff_ne!(self.max, self.min)
            && self.max > self.min
    }

    /// Returns the range (`max - min`) of this [`AxLims`].
    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }

    /// Shifts the minimum and the maximum to lower and higher values, respectively.
    /// The range expands by the `expansion_factor`, therefore, each limit is shifted by `range` * (`expansion_factor`-1.)/2.
    pub fn expand_lim_range_by_factor(&mut self, expansion_factor: f64) {
        if expansion_factor.is_normal() && expansion_factor.is_sign_positive() {
            let range = self.range();
            self.max += range * (expansion_factor - 1.) / 2.;
            self.min -= range * (expansion_factor - 1.) / 2.;
        } else {
            warn!("Cannot expand ax limits! Expansion factor must be normal and positive!");
        }
    }

    /// This function creates an [`AxLims`] struct from the provided `min` and `max` values
    ///
    /// If min < max and both are finite, these limits are used. Otherwise, the values are
    /// changed such that a valid (non-empty) axis results.
    #[must_use]
    pub fn create_useful_axlims(min_in: f64, max_in: f64) -> Option<Self> {
        if !min_in.is_finite() && !max_in.is_finite() {
            return Self::new(-0.5, 0.5);
        }

        let (min, max) = if !min_in.is_finite() {
            (max_in, max_in)
        } else if !max_in.is_finite() {
            (min_in, min_in)
        } else {
            (min_in, max_in)
        };

        let (mut min, mut max) = if max < min { (max, min) } else { (min, max) };

        let mut ax_range = max - min;

        //check if minimum and maximum values are approximately equal. if so, take the max value as range
        if max.relative_eq(&min, f64::EPSILON, f64::EPSILON) {
            ax_range = max.abs();
            min = max - ax_range / 2.;
            max += ax_range * 0.5;
        };

        //check if for some reason maximum is 0, then set it to 1, so that the axis spans at least some distance
        if ax_range < f64::EPSILON {
            max = 0.5;
            min = -0.5;
        };

        Self::new(min, max)
    }

    /// Joins the minimum and maximum values of this [`AxLims`] struct with another [`AxLims`] struct, such that the maximum and minimum of both structs are used
    pub fn join(&mut self, ax_lim: Self) {
        if self.min > ax_lim.min {
            self.min = ax_lim.min;
        }

        if self.max < ax_lim.max {
            self.max = ax_lim.max;
        }
    }
}
