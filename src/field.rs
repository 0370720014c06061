#![warn(missing_docs)]
//! Gridded data created from particles.
use crate::{
    error::{PicError, PicResult},
    histogram::Histogram,
    utils::grid::centers_from_edges,
};
use kahan::KahanSum;
use log::info;
use nalgebra::{DMatrix, DVector};
use std::path::Path;

/// A named field axis described by its cell edges.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAxis {
    name: String,
    edges: DVector<f64>,
}

impl FieldAxis {
    /// Creates a new [`FieldAxis`].
    ///
    /// # Errors
    ///
    /// This function will return an error if less than two edges are given or the edges are not
    /// strictly increasing.
    pub fn new(name: &str, edges: DVector<f64>) -> PicResult<Self> {
        if edges.len() < 2 {
            return Err(PicError::Field(format!(
                "axis \"{name}\" needs at least two edges"
            )));
        }
        if edges.as_slice().windows(2).any(|e| e[1] <= e[0]) {
            return Err(PicError::Field(format!(
                "edges of axis \"{name}\" must be strictly increasing"
            )));
        }
        Ok(Self {
            name: name.to_owned(),
            edges,
        })
    }
    /// Returns the name of this axis.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the cell edges of this axis.
    #[must_use]
    pub const fn edges(&self) -> &DVector<f64> {
        &self.edges
    }
    /// Returns the cell centers of this axis.
    #[must_use]
    pub fn grid(&self) -> DVector<f64> {
        centers_from_edges(&self.edges)
    }
    /// Returns the number of cells along this axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }
    /// An axis always has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the `(min, max)` extent of this axis.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
    fn cell_width(&self) -> f64 {
        let (min, max) = self.extent();
        (max - min) / crate::utils::usize_to_f64(self.len())
    }
}

/// An n-dimensional (1 to 3) field on a regular grid.
///
/// The data is stored in row-major order, i.e. the index of the first axis varies slowest.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    title: String,
    axes: Vec<FieldAxis>,
    data: Vec<f64>,
}

impl Field {
    /// Creates a new [`Field`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no axis or more than three axes are given.
    ///   - the length of `data` does not match the number of cells.
    pub fn new(title: &str, axes: Vec<FieldAxis>, data: Vec<f64>) -> PicResult<Self> {
        if axes.is_empty() || axes.len() > 3 {
            return Err(PicError::Field(format!(
                "fields must have 1 to 3 axes, got {}",
                axes.len()
            )));
        }
        let cells: usize = axes.iter().map(FieldAxis::len).product();
        if cells != data.len() {
            return Err(PicError::Field(format!(
                "data length ({}) does not match the number of cells ({cells})",
                data.len()
            )));
        }
        Ok(Self {
            title: title.to_owned(),
            axes,
            data,
        })
    }
    /// Creates the density [`Field`] of a [`Histogram`], i.e. the counts divided by the cell volume.
    ///
    /// # Errors
    ///
    /// This function will return an error if the axes do not fit the histogram. See [`Field::new`].
    pub fn from_histogram(title: &str, axes: Vec<FieldAxis>, hist: &Histogram) -> PicResult<Self> {
        if axes.iter().map(FieldAxis::len).collect::<Vec<_>>() != hist.shape() {
            return Err(PicError::Field(
                "field axes do not match the shape of the histogram".into(),
            ));
        }
        let volume = hist.cell_volume();
        let data = hist.counts().iter().map(|c| c / volume).collect();
        Self::new(title, axes, data)
    }
    /// Returns the title of this [`Field`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    /// Returns a name describing this field, e.g. `x_y_1ppc_order0`.
    #[must_use]
    pub fn name(&self) -> String {
        let mut parts: Vec<&str> = self.axes.iter().map(FieldAxis::name).collect();
        parts.push(&self.title);
        parts.join("_")
    }
    /// Returns the number of dimensions of this [`Field`].
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }
    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(FieldAxis::len).collect()
    }
    /// Returns the axes of this [`Field`].
    #[must_use]
    pub fn axes(&self) -> &[FieldAxis] {
        &self.axes
    }
    /// Returns the (row-major) field data.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
    /// Returns the volume of a single cell.
    #[must_use]
    pub fn cell_volume(&self) -> f64 {
        self.axes.iter().map(FieldAxis::cell_width).product()
    }
    fn flat_index(&self, idx: &[usize]) -> Option<usize> {
        if idx.len() != self.axes.len() {
            return None;
        }
        let mut flat = 0;
        for (i, axis) in idx.iter().zip(&self.axes) {
            if *i >= axis.len() {
                return None;
            }
            flat = flat * axis.len() + i;
        }
        Some(flat)
    }
    /// Returns the value of the cell with the given multi-index.
    ///
    /// # Errors
    ///
    /// This function will return an error if the index has the wrong dimension or is out of bounds.
    pub fn value(&self, idx: &[usize]) -> PicResult<f64> {
        self.flat_index(idx)
            .map(|i| self.data[i])
            .ok_or_else(|| PicError::Field(format!("index {idx:?} out of bounds")))
    }
    /// Returns the data of a one-dimensional field as vector.
    ///
    /// # Errors
    ///
    /// This function will return an error if the field is not one-dimensional.
    pub fn as_vector(&self) -> PicResult<DVector<f64>> {
        if self.dimensions() != 1 {
            return Err(PicError::Field(format!(
                "cannot convert a {}-dimensional field into a vector",
                self.dimensions()
            )));
        }
        Ok(DVector::from_column_slice(&self.data))
    }
    /// Returns the data of a two-dimensional field as matrix.
    ///
    /// The rows of the matrix correspond to the second axis (y), the columns to the first axis (x).
    ///
    /// # Errors
    ///
    /// This function will return an error if the field is not two-dimensional.
    pub fn as_matrix(&self) -> PicResult<DMatrix<f64>> {
        if self.dimensions() != 2 {
            return Err(PicError::Field(format!(
                "cannot convert a {}-dimensional field into a matrix",
                self.dimensions()
            )));
        }
        let ny = self.axes[1].len();
        // row-major (x slowest) storage equals column-major storage of a (ny x nx) matrix
        Ok(DMatrix::from_column_slice(
            ny,
            self.axes[0].len(),
            &self.data,
        ))
    }
    /// Returns the integral of this field, i.e. the total deposited weight.
    #[must_use]
    pub fn integral(&self) -> f64 {
        let mut sum = KahanSum::new_with_value(0.0);
        for value in &self.data {
            sum += *value;
        }
        sum.sum() * self.cell_volume()
    }
    /// Returns the maximum (finite) value of this field.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
    /// Returns a copy of this field with the decadic logarithm of all values.
    ///
    /// Non-positive values result in NaN.
    #[must_use]
    pub fn log10(&self) -> Self {
        let data = self
            .data
            .iter()
            .map(|v| if *v > 0.0 { v.log10() } else { f64::NAN })
            .collect();
        Self {
            title: self.title.clone(),
            axes: self.axes.clone(),
            data,
        }
    }
    /// Writes this field as CSV file.
    ///
    /// Every line contains the cell centers of all axes followed by the value of that cell.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file cannot be written.
    pub fn export_csv(&self, path: &Path) -> PicResult<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| PicError::Io(format!("cannot create {}: {e}", path.display())))?;
        let mut header: Vec<String> = self.axes.iter().map(|a| a.name().to_owned()).collect();
        header.push(self.title.clone());
        writer
            .write_record(&header)
            .map_err(|e| PicError::Io(format!("writing csv header failed: {e}")))?;
        let grids: Vec<DVector<f64>> = self.axes.iter().map(FieldAxis::grid).collect();
        let shape = self.shape();
        let mut idx = vec![0_usize; shape.len()];
        for value in &self.data {
            let mut record: Vec<String> = idx
                .iter()
                .zip(&grids)
                .map(|(i, g)| g[*i].to_string())
                .collect();
            record.push(value.to_string());
            writer
                .write_record(&record)
                .map_err(|e| PicError::Io(format!("writing csv record failed: {e}")))?;
            // advance multi-index, last axis fastest
            for (i, n) in idx.iter_mut().zip(&shape).rev() {
                *i += 1;
                if *i < *n {
                    break;
                }
                *i = 0;
            }
        }
        writer
            .flush()
            .map_err(|e| PicError::Io(format!("writing csv file failed: {e}")))?;
        info!("exported field \"{}\" to {}", self.title, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        histogram::{histogram_dd, HistogramAxis},
        shape::ParticleShape,
    };
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    fn axis(name: &str, n: usize) -> FieldAxis {
        FieldAxis::new(name, HistogramAxis::new(n, (0.0, 1.0)).unwrap().edges()).unwrap()
    }
    #[test]
    fn axis_new() {
        assert!(FieldAxis::new("x", DVector::from_vec(vec![0.0])).is_err());
        assert!(FieldAxis::new("x", DVector::from_vec(vec![0.0, 0.0])).is_err());
        let a = FieldAxis::new("x", DVector::from_vec(vec![0.0, 1.0, 2.0])).unwrap();
        assert_eq!(a.name(), "x");
        assert_eq!(a.len(), 2);
        assert!(!a.is_empty());
        assert_eq!(a.extent(), (0.0, 2.0));
        assert_eq!(a.grid().as_slice(), &[0.5, 1.5]);
    }
    #[test]
    fn new_wrong() {
        assert_matches!(Field::new("t", vec![], vec![]), Err(PicError::Field(_)));
        assert!(Field::new("t", vec![axis("x", 2)], vec![1.0]).is_err());
        assert!(Field::new(
            "t",
            vec![axis("a", 1), axis("b", 1), axis("c", 1), axis("d", 1)],
            vec![1.0]
        )
        .is_err());
    }
    #[test]
    fn name() {
        let f = Field::new("demo", vec![axis("x", 1), axis("y", 1)], vec![1.0]).unwrap();
        assert_eq!(f.name(), "x_y_demo");
        assert_eq!(f.title(), "demo");
    }
    #[test]
    fn value_and_matrix() {
        // x: 2 cells, y: 3 cells, value = 10 * ix + iy
        let data = vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
        let f = Field::new("t", vec![axis("x", 2), axis("y", 3)], data).unwrap();
        assert_relative_eq!(f.value(&[1, 2]).unwrap(), 12.0);
        assert!(f.value(&[2, 0]).is_err());
        assert!(f.value(&[0]).is_err());
        let m = f.as_matrix().unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_relative_eq!(m[(2, 1)], 12.0);
        assert_relative_eq!(m[(1, 0)], 1.0);
        assert!(f.as_vector().is_err());
    }
    #[test]
    fn vector() {
        let f = Field::new("t", vec![axis("x", 3)], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(f.as_vector().unwrap().as_slice(), &[1.0, 2.0, 3.0]);
        assert!(f.as_matrix().is_err());
        assert_eq!(f.max(), Some(3.0));
    }
    #[test]
    fn from_histogram() {
        let x = [0.1, 0.3, 0.35];
        let hist =
            histogram_dd(&[&x], None, &[4], &[Some((0.0, 1.0))], ParticleShape::Ngp).unwrap();
        let f = Field::from_histogram("t", vec![axis("x", 4)], &hist).unwrap();
        assert_relative_eq!(f.cell_volume(), 0.25);
        assert_relative_eq!(f.data()[0], 4.0);
        assert_relative_eq!(f.data()[1], 8.0);
        assert_relative_eq!(f.integral(), 3.0);
        assert!(Field::from_histogram("t", vec![axis("x", 3)], &hist).is_err());
    }
    #[test]
    fn log10() {
        let f = Field::new("t", vec![axis("x", 3)], vec![100.0, 0.0, -1.0]).unwrap();
        let l = f.log10();
        assert_relative_eq!(l.data()[0], 2.0);
        assert!(l.data()[1].is_nan());
        assert!(l.data()[2].is_nan());
        assert_eq!(l.max(), Some(2.0));
    }
    #[test]
    fn export_csv() {
        let f = Field::new("t", vec![axis("x", 2), axis("y", 2)], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap();
        let path = NamedTempFile::new().unwrap();
        f.export_csv(path.path()).unwrap();
        let content = std::fs::read_to_string(path.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "x,y,t");
        assert_eq!(lines[1], "0.25,0.25,1");
        assert_eq!(lines[2], "0.25,0.75,2");
        assert_eq!(lines[3], "0.75,0.25,3");
        assert_eq!(lines[4], "0.75,0.75,4");
    }
}
