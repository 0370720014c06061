#![warn(missing_docs)]
//! Plotting of [`Field`]s into image files.
use crate::{
    error::{PicError, PicResult},
    field::Field,
    plottable::{
        AxLims, PlotArgs, PlotData, PlotParameters, PlotSeries, PlotType, Plottable, PltBackEnd,
    },
};
use clap::ValueEnum;
use log::{info, warn};
use plotters::style::RGBAColor;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Image formats of the written plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    /// portable network graphics
    #[default]
    Png,
    /// scalable vector graphics
    Svg,
}

impl ImageFormat {
    /// Returns the plotting backend used to create images of this format.
    #[must_use]
    pub const fn backend(self) -> PltBackEnd {
        match self {
            Self::Png => PltBackEnd::Bitmap,
            Self::Svg => PltBackEnd::Svg,
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.backend().extension())
    }
}

/// Options for plotting a single [`Field`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotOptions {
    /// limits of the value axis of 1D plots. Determined from the data if `None`.
    pub ylim: Option<(f64, f64)>,
    /// limits of the color axis of 2D plots. Determined from the data if `None`.
    pub clim: Option<(f64, f64)>,
    /// plot the decadic logarithm of the field values
    pub log10plot: bool,
}

impl PlotOptions {
    /// Creates [`PlotOptions`] for 1D plots with the given value limits.
    #[must_use]
    pub const fn with_ylim(ylim: (f64, f64)) -> Self {
        Self {
            ylim: Some(ylim),
            clim: None,
            log10plot: false,
        }
    }
    /// Creates [`PlotOptions`] for 2D plots with the given color limits.
    #[must_use]
    pub const fn with_clim(clim: (f64, f64)) -> Self {
        Self {
            ylim: None,
            clim: Some(clim),
            log10plot: false,
        }
    }
}

/// Writes plots of [`Field`]s into an output directory.
///
/// All file names are prefixed with the project name.
#[derive(Debug, Clone)]
pub struct Plotter {
    outdir: PathBuf,
    project: String,
    autosave: bool,
    format: ImageFormat,
}

impl Plotter {
    /// Creates a new [`Plotter`] writing png files into `outdir`.
    #[must_use]
    pub fn new(outdir: &Path, project: &str) -> Self {
        Self {
            outdir: outdir.to_path_buf(),
            project: project.to_owned(),
            autosave: true,
            format: ImageFormat::default(),
        }
    }
    /// Sets the image format of this [`Plotter`].
    #[must_use]
    pub const fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
    /// Enables or disables writing the plots to disk.
    ///
    /// Without autosave, plots are only rendered into memory.
    #[must_use]
    pub const fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
    /// Returns the output directory of this [`Plotter`].
    #[must_use]
    pub fn outdir(&self) -> &Path {
        &self.outdir
    }
    /// Returns the project name of this [`Plotter`].
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }
    /// Returns the path the plot of `field` is saved to.
    ///
    /// The file name has the form `<project>_<n>d_<title>.<ext>`.
    #[must_use]
    pub fn save_path(&self, field: &Field) -> PathBuf {
        self.outdir.join(format!(
            "{}_{}d_{}.{}",
            self.project,
            field.dimensions(),
            field.title(),
            self.format
        ))
    }
    /// Plots a [`Field`].
    ///
    /// One-dimensional fields are drawn as line plot, two-dimensional fields as color mesh
    /// with a colorbar.
    ///
    /// # Returns
    ///
    /// The path of the written file or `None` if autosave is disabled.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the field has more than two dimensions.
    ///   - the given limits are invalid.
    ///   - the plot cannot be rendered or written.
    pub fn plot_field(&self, field: &Field, options: &PlotOptions) -> PicResult<Option<PathBuf>> {
        if field.dimensions() > 2 {
            warn!(
                "{}-dimensional field \"{}\" cannot be plotted",
                field.dimensions(),
                field.title()
            );
            return Err(PicError::Plot(format!(
                "plotting of {}-dimensional fields is not supported",
                field.dimensions()
            )));
        }
        let field = if options.log10plot {
            field.log10()
        } else {
            field.clone()
        };
        let field_plot = FieldPlot {
            field: &field,
            options,
        };
        if self.autosave {
            let path = self.save_path(&field);
            field_plot.to_plot(&path, self.format.backend())?;
            info!("plot written to {}", path.display());
            Ok(Some(path))
        } else {
            field_plot.to_plot(Path::new(""), PltBackEnd::Buf)?;
            Ok(None)
        }
    }
}

struct FieldPlot<'a> {
    field: &'a Field,
    options: &'a PlotOptions,
}

impl FieldPlot<'_> {
    fn value_label(&self) -> String {
        if self.options.log10plot {
            format!("log10({})", self.field.title())
        } else {
            self.field.title().to_owned()
        }
    }
}

impl Plottable for FieldPlot<'_> {
    fn get_plot_series(&self, plt_type: &PlotType) -> PicResult<Option<Vec<PlotSeries>>> {
        let axes = self.field.axes();
        let data = match plt_type {
            PlotType::Line2D(_) => PlotData::new_line(axes[0].grid(), self.field.as_vector()?)?,
            PlotType::ColorMesh(_) => PlotData::new_colormesh(
                axes[0].grid(),
                axes[1].grid(),
                self.field.as_matrix()?,
            )?,
        };
        Ok(Some(vec![PlotSeries::new(
            &data,
            RGBAColor(31, 119, 180, 1.),
            Some(self.field.name()),
        )]))
    }

    fn add_plot_specific_params(&self, plt_params: &mut PlotParameters) -> PicResult<()> {
        let axes = self.field.axes();
        plt_params
            .set(&PlotArgs::Title(self.field.name()))?
            .set(&PlotArgs::XLabel(axes[0].name().to_owned()))?;
        if let Some(y_axis) = axes.get(1) {
            plt_params
                .set(&PlotArgs::YLabel(y_axis.name().to_owned()))?
                .set(&PlotArgs::CBarLabel(self.value_label()))?
                .set(&PlotArgs::ZLim(
                    self.options.clim.map(|r| AxLims::try_from(Some(r))).transpose()?,
                ))?;
        } else {
            plt_params
                .set(&PlotArgs::YLabel(self.value_label()))?
                .set(&PlotArgs::YLim(
                    self.options.ylim.map(|r| AxLims::try_from(Some(r))).transpose()?,
                ))?;
        }
        Ok(())
    }

    fn get_plot_type(&self, plt_params: &PlotParameters) -> PlotType {
        if self.field.dimensions() == 1 {
            PlotType::Line2D(plt_params.clone())
        } else {
            PlotType::ColorMesh(plt_params.clone())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{field::FieldAxis, utils::grid::linspace};
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn field(dims: usize) -> Field {
        let names = ["x", "y", "z"];
        let axes: Vec<FieldAxis> = (0..dims)
            .map(|i| FieldAxis::new(names[i], linspace(0.0, 1.0, 5).unwrap()).unwrap())
            .collect();
        let cells = 4_usize.pow(u32::try_from(dims).unwrap());
        Field::new("1ppc_order0", axes, (0..cells).map(|v| v as f64).collect()).unwrap()
    }
    fn assert_drawing_failed(err: &PicError) {
        assert_matches!(err, PicError::Plot(msg) if msg.starts_with("drawing failed"));
    }
    #[test]
    fn image_format() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
        assert_eq!(ImageFormat::Png.backend(), PltBackEnd::Bitmap);
        assert_eq!(ImageFormat::Svg.backend(), PltBackEnd::Svg);
        assert_eq!(format!("{}", ImageFormat::Svg), "svg");
    }
    #[test]
    fn plot_options() {
        let o = PlotOptions::with_ylim((0.0, 1600.0));
        assert_eq!(o.ylim, Some((0.0, 1600.0)));
        assert!(o.clim.is_none());
        assert!(!o.log10plot);
        let o = PlotOptions::with_clim((0.0, 3e4));
        assert_eq!(o.clim, Some((0.0, 3e4)));
        assert_eq!(PlotOptions::default().ylim, None);
    }
    #[test]
    fn new() {
        let p = Plotter::new(Path::new("out"), "demo");
        assert_eq!(p.outdir(), Path::new("out"));
        assert_eq!(p.project(), "demo");
        assert!(p.autosave);
        assert_eq!(p.format, ImageFormat::Png);
    }
    #[test]
    fn save_path() {
        let p = Plotter::new(Path::new("out"), "particleshapedemo");
        assert_eq!(
            p.save_path(&field(1)),
            PathBuf::from("out/particleshapedemo_1d_1ppc_order0.png")
        );
        let p = p.with_format(ImageFormat::Svg);
        assert_eq!(
            p.save_path(&field(2)),
            PathBuf::from("out/particleshapedemo_2d_1ppc_order0.svg")
        );
    }
    #[test]
    fn plot_field_3d() {
        testing_logger::setup();
        let p = Plotter::new(Path::new("out"), "demo");
        assert_matches!(
            p.plot_field(&field(3), &PlotOptions::default()),
            Err(PicError::Plot(_))
        );
        crate::utils::test_helper::test_helper::check_warnings(vec![
            "3-dimensional field \"1ppc_order0\" cannot be plotted",
        ]);
    }
    #[test]
    fn plot_field_invalid_limits() {
        let p = Plotter::new(Path::new("out"), "demo").with_autosave(false);
        assert_matches!(
            p.plot_field(&field(1), &PlotOptions::with_ylim((1.0, 0.0))),
            Err(PicError::Plot(_))
        );
        assert_matches!(
            p.plot_field(&field(2), &PlotOptions::with_clim((1.0, 1.0))),
            Err(PicError::Plot(_))
        );
    }
    #[test]
    fn plot_field_files() {
        let dir = TempDir::new().unwrap();
        let p = Plotter::new(dir.path(), "demo");
        // rendering text needs system fonts which might not be available
        match p.plot_field(&field(1), &PlotOptions::with_ylim((0.0, 4.0))) {
            Ok(path) => {
                let path = path.unwrap();
                assert_eq!(path, dir.path().join("demo_1d_1ppc_order0.png"));
                assert!(path.exists());
            }
            Err(e) => assert_drawing_failed(&e),
        }
        let options = PlotOptions {
            log10plot: true,
            ..PlotOptions::default()
        };
        match p.plot_field(&field(2), &options) {
            Ok(path) => assert!(path.unwrap().exists()),
            Err(e) => assert_drawing_failed(&e),
        }
    }
    #[test]
    fn plot_field_no_autosave() {
        let p = Plotter::new(Path::new("does_not_exist"), "demo").with_autosave(false);
        match p.plot_field(&field(2), &PlotOptions::with_clim((0.0, 20.0))) {
            Ok(path) => assert!(path.is_none()),
            Err(e) => assert_drawing_failed(&e),
        }
        assert!(!Path::new("does_not_exist").exists());
    }
}
