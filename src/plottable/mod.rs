#![warn(missing_docs)]
//! Trait for adding the possibility to generate a (x/y) plot of an element.
mod ax_lims;

pub use ax_lims::AxLims;

use crate::error::{PicError, PicResult};
use colorous::Gradient;
use image::RgbImage;
use itertools::{iproduct, izip};
use log::warn;
use nalgebra::{DMatrix, DVector};
use num::ToPrimitive;
use plotters::{
    backend::{DrawingBackend, PixelFormat, RGBPixel},
    chart::{ChartBuilder, ChartContext, SeriesLabelPosition},
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    drawing::DrawingAreaErrorKind,
    element::{PathElement, Rectangle},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{Color, IntoFont, RGBAColor, ShapeStyle, BLACK, WHITE},
};
use std::{collections::HashMap, path::Path, path::PathBuf};
use strum::{EnumIter, IntoEnumIterator};

/// Width of the colorbar area of [`PlotType::ColorMesh`] plots in pixels.
const COLORBAR_WIDTH: u32 = 170;

fn plot_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PicError {
    PicError::Plot(format!("drawing failed: {e}"))
}

///Enum to define the type of plot that should be created
pub enum PlotType {
    ///Line plot in two dimensions for pairwise data
    Line2D(PlotParameters),
    ///2D color plot of gridded data with color representing the amplitude over an x-y grid
    ColorMesh(PlotParameters),
}
impl PlotType {
    const fn get_plot_params(&self) -> &PlotParameters {
        match self {
            Self::Line2D(p) | Self::ColorMesh(p) => p,
        }
    }
    fn get_plot_params_mut(&mut self) -> &mut PlotParameters {
        match self {
            Self::Line2D(p) | Self::ColorMesh(p) => p,
        }
    }
    fn create_plot<B: DrawingBackend>(
        &self,
        backend: &DrawingArea<B, Shift>,
        plot: &mut Plot,
    ) -> PicResult<()> {
        plot.define_axes_bounds();
        backend.fill(&WHITE).map_err(plot_error)?;
        let root = if plot.title.is_empty() {
            backend.clone()
        } else {
            backend
                .titled(&plot.title, ("sans-serif", 30))
                .map_err(plot_error)?
        };
        match self {
            Self::Line2D(_) => Self::plot_2d_line(plot, &root)?,
            Self::ColorMesh(_) => Self::plot_color_mesh(plot, &root)?,
        };
        backend.present().map_err(plot_error)
    }

    ///This method sets a plot argument ([`PlotArgs`]) to [`PlotParameters`] which is stored in this [`PlotType`]
    /// # Errors
    /// This method errors if the `set()` function fails
    pub fn set_plot_param(&mut self, plt_arg: &PlotArgs) -> PicResult<&mut Self> {
        self.get_plot_params_mut().set(plt_arg)?;
        Ok(self)
    }

    /// This method creates a plot
    /// # Attributes
    /// - `plt_series`: plot series. See [`PlotSeries`]
    /// # Returns
    /// This method returns an [`PicResult<Option<RgbImage>>`]. It is None if a new file (such as svg, png, bmp or jpg) is created. It is Some(RgbImage) if the image is written to a buffer
    /// # Errors
    /// This method throws an error if
    /// - the backend does not fit the file extension
    /// - the plotting backend fails to draw the plot (e.g. missing fonts, unwritable file)
    /// - the image buffer is too small
    pub fn plot(&self, plt_series: &[PlotSeries]) -> PicResult<Option<RgbImage>> {
        let params = self.get_plot_params();
        params.check_backend_file_ext_compatibility()?;
        let path = params.get_fpath()?;
        let mut plot = Plot::try_from(params)?;
        plot.add_plot_series(plt_series);

        match params.get_backend()? {
            PltBackEnd::Bitmap => {
                let backend = BitMapBackend::new(&path, plot.fig_size).into_drawing_area();
                self.create_plot(&backend, &mut plot)?;
                Ok(None)
            }
            PltBackEnd::Svg => {
                let backend = SVGBackend::new(&path, plot.fig_size).into_drawing_area();
                self.create_plot(&backend, &mut plot)?;
                Ok(None)
            }
            PltBackEnd::Buf => {
                let mut image_buffer =
                    vec![0; (plot.fig_size.0 * plot.fig_size.1) as usize * RGBPixel::PIXEL_SIZE];
                {
                    let backend = BitMapBackend::with_buffer(&mut image_buffer, plot.fig_size)
                        .into_drawing_area();
                    self.create_plot(&backend, &mut plot)?;
                }
                let img = RgbImage::from_raw(plot.fig_size.0, plot.fig_size.1, image_buffer)
                    .ok_or_else(|| PicError::Plot("image buffer size too small".into()))?;
                Ok(Some(img))
            }
        }
    }

    fn tick_formatter(range: core::ops::Range<f64>) -> impl Fn(&f64) -> String {
        let max_abs = range.end.abs().max(range.start.abs());
        let log_val = if max_abs > 0.0 {
            max_abs.log10().floor().to_i32().unwrap_or(0)
        } else {
            0
        };

        move |v: &_| match log_val {
            -3 | -2 => format!("{v:.3}"),
            -1 | 0 => format!("{v:.2}"),
            1 => format!("{v:.1}"),
            2..=4 => format!("{v:.0}"),
            _ => format!("{v:.1e}"),
        }
    }

    fn create_2d_plot_chart<'a, T: DrawingBackend>(
        root: &'a DrawingArea<T, Shift>,
        x_bounds: AxLims,
        y_bounds: AxLims,
        labels: [&str; 2],
        x_ax: bool,
    ) -> PicResult<ChartContext<'a, T, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .margin_right(30)
            .x_label_area_size(if x_ax { 60 } else { 0 })
            .y_label_area_size(90)
            .build_cartesian_2d(x_bounds.min..x_bounds.max, y_bounds.min..y_bounds.max)
            .map_err(plot_error)?;

        let x_format = Self::tick_formatter(chart.x_range());
        let y_format = Self::tick_formatter(chart.y_range());
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(5)
            .y_labels(5)
            .x_label_formatter(&x_format)
            .y_label_formatter(&y_format)
            .disable_mesh()
            .y_desc(labels[1]);
        if x_ax {
            mesh.x_desc(labels[0]);
        } else {
            mesh.disable_x_axis();
        }
        mesh.label_style(("sans-serif", 20).into_font())
            .draw()
            .map_err(plot_error)?;

        Ok(chart)
    }

    fn draw_vertical_lines<T: DrawingBackend>(
        chart: &mut ChartContext<'_, T, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
        x_positions: &[f64],
        y_bounds: AxLims,
        style: ShapeStyle,
    ) -> PicResult<()> {
        for x in x_positions {
            chart
                .draw_series(LineSeries::new(
                    vec![(*x, y_bounds.min), (*x, y_bounds.max)],
                    style,
                ))
                .map_err(plot_error)?;
        }
        Ok(())
    }

    fn plot_2d_line<B: DrawingBackend>(plt: &Plot, root: &DrawingArea<B, Shift>) -> PicResult<()> {
        let (Some(x_bounds), Some(y_bounds)) = (plt.bounds.x, plt.bounds.y) else {
            warn!("No plot series defined! Cannot create plot!");
            return Ok(());
        };
        let mut chart = Self::create_2d_plot_chart(
            root,
            x_bounds,
            y_bounds,
            [&plt.labels[0], &plt.labels[1]],
            true,
        )?;
        Self::draw_vertical_lines(
            &mut chart,
            &plt.minor_grid_x,
            y_bounds,
            BLACK.mix(0.15).into(),
        )?;
        let mut has_legend = false;
        for plt_series in &plt.plot_series {
            if let PlotData::Line { x, y } = &plt_series.data {
                let series_anno = chart
                    .draw_series(LineSeries::new(
                        izip!(x.iter(), y.iter())
                            .filter(|(x, y)| x.is_finite() && y.is_finite())
                            .map(|(x, y)| (*x, *y)),
                        plt_series.color.stroke_width(2),
                    ))
                    .map_err(plot_error)?;
                if let Some(label) = plt_series.get_series_label() {
                    let legend_style = plt_series.color.stroke_width(4);
                    series_anno.label(label).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], legend_style)
                    });
                    has_legend = true;
                }
            } else {
                warn!("Wrong PlotData stored for this plot type! Must use Line! Not all series will be plotted!");
            }
        }
        Self::draw_vertical_lines(
            &mut chart,
            &plt.vertical_lines,
            y_bounds,
            RGBAColor(191, 191, 0, 1.).stroke_width(2),
        )?;
        if has_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .legend_area_size(30)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", 20).into_font())
                .draw()
                .map_err(plot_error)?;
        }
        Ok(())
    }

    fn get_ax_val_half_distance(ax_vals: &DVector<f64>) -> f64 {
        if ax_vals.len() < 2 {
            0.5
        } else {
            0.5 * (ax_vals[1] - ax_vals[0])
        }
    }

    fn draw_2d_colormesh<T: DrawingBackend>(
        chart: &mut ChartContext<'_, T, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
        x_ax: &DVector<f64>,
        y_ax: &DVector<f64>,
        z_dat: &DMatrix<f64>,
        cmap: &Gradient,
        cbounds: AxLims,
    ) -> PicResult<()> {
        let x_dist = Self::get_ax_val_half_distance(x_ax);
        let y_dist = Self::get_ax_val_half_distance(y_ax);

        let (z_shape_rows, z_shape_cols) = z_dat.shape();
        if z_shape_rows != y_ax.len() || z_shape_cols != x_ax.len() {
            warn!("Shapes of x,y and z do not match!");
            return Ok(());
        }
        let z_range = cbounds.range();
        // the matrix is iterated column by column, i.e. y varies fastest
        let series = izip!(iproduct!(x_ax.iter(), y_ax.iter()), z_dat.iter())
            .filter(|(_, z)| z.is_finite())
            .map(|((x, y), z)| {
                let cor = cmap.eval_continuous(((z - cbounds.min) / z_range).clamp(0.0, 1.0));
                let color = RGBAColor(cor.r, cor.g, cor.b, 1.);
                Rectangle::new(
                    [(x - x_dist, y + y_dist), (x + x_dist, y - y_dist)],
                    Into::<ShapeStyle>::into(color).filled(),
                )
            });

        chart.draw_series(series).map_err(plot_error)?;
        Ok(())
    }

    fn plot_color_mesh<B: DrawingBackend>(
        plt: &Plot,
        root: &DrawingArea<B, Shift>,
    ) -> PicResult<()> {
        if plt.plot_series.len() > 1 {
            warn!("For this type of plot only one series can be plotted at a time. Only the first series will be used!");
        }
        let Some(PlotSeries {
            data: PlotData::ColorMesh { x, y, z },
            ..
        }) = plt.plot_series.first()
        else {
            warn!("No ColorMesh data defined! Cannot create plot!");
            return Ok(());
        };
        let (Some(x_bounds), Some(y_bounds), Some(z_bounds)) =
            (plt.bounds.x, plt.bounds.y, plt.bounds.z)
        else {
            warn!("Axes bounds could not be defined! Cannot create plot!");
            return Ok(());
        };
        let (width, _) = root.dim_in_pixel();
        let split_pixel = width.saturating_sub(COLORBAR_WIDTH);
        //split root for main plot and colorbar
        let (main_root, cbar_root) = root.split_horizontally(split_pixel);

        //colorbar. first because otherwise the xlabel of the main plot is cropped
        let mut chart = Self::create_2d_plot_chart(
            &cbar_root,
            AxLims { min: 0., max: 1. },
            z_bounds,
            ["", &plt.cbar_label],
            false,
        )?;
        let c_dat = crate::utils::grid::linspace(z_bounds.min, z_bounds.max, 100)?;
        let c_mat = DMatrix::<f64>::from_columns(&[c_dat.clone(), c_dat.clone()]);
        let c_x = DVector::<f64>::from_vec(vec![0.25, 0.75]);
        Self::draw_2d_colormesh(&mut chart, &c_x, &c_dat, &c_mat, &plt.cmap, z_bounds)?;

        //main plot
        let mut chart = Self::create_2d_plot_chart(
            &main_root,
            x_bounds,
            y_bounds,
            [&plt.labels[0], &plt.labels[1]],
            true,
        )?;
        Self::draw_2d_colormesh(&mut chart, x, y, z, &plt.cmap, z_bounds)
    }
}

#[derive(Debug, Clone)]
///Enum to define the data of a [`PlotSeries`]
pub enum PlotData {
    ///[`PlotData`] for [`PlotType::Line2D`]
    Line {
        /// x values
        x: DVector<f64>,
        /// y values, same length as x
        y: DVector<f64>,
    },
    ///[`PlotData`] for [`PlotType::ColorMesh`]
    ColorMesh {
        /// x axis (n cell centers)
        x: DVector<f64>,
        /// y axis (m cell centers)
        y: DVector<f64>,
        /// values with m rows and n columns
        z: DMatrix<f64>,
    },
}

impl PlotData {
    /// Creates new [`PlotData::Line`]
    /// # Errors
    /// This function errors if x and y have different lengths
    pub fn new_line(x: DVector<f64>, y: DVector<f64>) -> PicResult<Self> {
        if x.len() == y.len() {
            Ok(Self::Line { x, y })
        } else {
            Err(PicError::Plot(format!(
                "x ({}) and y ({}) data must have the same length",
                x.len(),
                y.len()
            )))
        }
    }
    /// Creates new [`PlotData::ColorMesh`]
    /// # Errors
    /// This function errors if the shape of z does not match the lengths of x (columns) and y (rows)
    pub fn new_colormesh(x: DVector<f64>, y: DVector<f64>, z: DMatrix<f64>) -> PicResult<Self> {
        if z.shape() == (y.len(), x.len()) {
            Ok(Self::ColorMesh { x, y, z })
        } else {
            Err(PicError::Plot(format!(
                "shape of z data {:?} does not match lengths of y ({}) and x ({})",
                z.shape(),
                y.len(),
                x.len()
            )))
        }
    }
    /// Returns the data based bounds of this [`PlotData`]
    #[must_use]
    pub fn define_data_based_axes_bounds(&self) -> PlotBounds {
        match self {
            Self::Line { x, y } => PlotBounds {
                x: AxLims::finite_from_values(x.as_slice()),
                y: AxLims::finite_from_values(y.as_slice()).map(|mut lims| {
                    lims.expand_lim_range_by_factor(1.1);
                    lims
                }),
                z: None,
            },
            Self::ColorMesh { x, y, z } => {
                let half_cell = |ax: &DVector<f64>| {
                    AxLims::finite_from_values(ax.as_slice()).map(|mut lims| {
                        let half = PlotType::get_ax_val_half_distance(ax);
                        lims.min -= half;
                        lims.max += half;
                        lims
                    })
                };
                PlotBounds {
                    x: half_cell(x),
                    y: half_cell(y),
                    z: AxLims::finite_from_values(z.as_slice()),
                }
            }
        }
    }
}

/// Trait for adding the possibility to generate a (x/y) plot of an element.
pub trait Plottable {
    /// This method must be implemented in order to retrieve the plot series.
    /// # Errors
    /// Whether an error is thrown depends on the individual implementation of the method
    fn get_plot_series(&self, plt_type: &PlotType) -> PicResult<Option<Vec<PlotSeries>>>;

    /// This method handles the plot creation for a specific data type
    /// # Attributes
    /// - `f_path`: path to the file. Ignored for [`PltBackEnd::Buf`]
    /// - `backend`: used backend to create the plot. See [`PltBackEnd`]
    /// # Errors
    /// This method errors if the plot parameters cannot be set or the plot cannot be created.
    fn to_plot(&self, f_path: &Path, backend: PltBackEnd) -> PicResult<Option<RgbImage>> {
        let mut plt_params = PlotParameters::default();
        if backend != PltBackEnd::Buf {
            let fname = f_path
                .file_name()
                .and_then(|f| f.to_str())
                .ok_or_else(|| PicError::Plot(format!("invalid file path {}", f_path.display())))?;
            plt_params.set(&PlotArgs::FName(fname.to_owned()))?;
            if let Some(dir) = f_path.parent() {
                plt_params.set(&PlotArgs::FDir(dir.into()))?;
            }
        };
        plt_params.set(&PlotArgs::Backend(backend))?;

        self.add_plot_specific_params(&mut plt_params)?;

        let plt_type = self.get_plot_type(&plt_params);

        let plt_series_opt = self.get_plot_series(&plt_type)?;
        plt_series_opt.map_or(Ok(None), |plt_series| plt_type.plot(&plt_series))
    }

    /// This method must be implemented in order to create a plot.
    /// # Errors
    /// This method errors if setting a plot parameter fails
    fn add_plot_specific_params(&self, plt_params: &mut PlotParameters) -> PicResult<()>;

    /// This method must be implemented in order to create a plot.
    /// # Returns
    /// This method returns the [`PlotType`] of this [`Plot`]
    fn get_plot_type(&self, plt_params: &PlotParameters) -> PlotType;
}

///Enum to describe which type of plotting backend should be used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PltBackEnd {
    /// `BitmapBackend`. Used to create .png, .bmp, .jpg
    #[default]
    Bitmap,
    /// `SVGBackend`. Used to create .svg
    Svg,
    /// Buffered Backend. Used to buffer the image data into an image buffer.
    Buf,
}

impl PltBackEnd {
    /// Returns the default file extension of this backend.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Bitmap | Self::Buf => "png",
            Self::Svg => "svg",
        }
    }
}

///Struct to hold the color gradient information of a colorbar
#[derive(Debug, Clone, Copy)]
pub struct CGradient {
    gradient: Gradient,
}

impl CGradient {
    /// Creates a new [`CGradient`].
    #[must_use]
    pub const fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }
    /// Returns the gradient of this [`CGradient`].
    #[must_use]
    pub const fn get_gradient(&self) -> Gradient {
        self.gradient
    }
}
impl Default for CGradient {
    fn default() -> Self {
        Self {
            gradient: colorous::VIRIDIS,
        }
    }
}

/// Struct that holds the axis limits of a plot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotBounds {
    /// limits of the x axis
    pub x: Option<AxLims>,
    /// limits of the y axis
    pub y: Option<AxLims>,
    /// limits of the z axis (color axis of a colormesh)
    pub z: Option<AxLims>,
}

impl PlotBounds {
    /// Joins the bounds of this [`PlotBounds`] with other [`PlotBounds`]
    pub fn join(&mut self, plot_bounds: &Self) {
        for (own, other) in [
            (&mut self.x, plot_bounds.x),
            (&mut self.y, plot_bounds.y),
            (&mut self.z, plot_bounds.z),
        ] {
            let Some(other) = other else {
                continue;
            };
            if let Some(lims) = own.as_mut() {
                lims.join(other);
            } else {
                *own = Some(other);
            }
        }
    }
}

///Enum to hold all Arguments that are necessary to describe a plot
#[derive(EnumIter, Debug, Clone)]
pub enum PlotArgs {
    ///Title of the figure. An empty string disables the title
    Title(String),
    ///Label of the x axis. Holds a String
    XLabel(String),
    ///Label of the y axis. Holds a String
    YLabel(String),
    ///Label of the colorbar. Holds a String
    CBarLabel(String),
    ///Colormap of a colormesh. Holds a [`CGradient`] struct
    CMap(CGradient),
    ///Boundaries of the x axis. If not defined, the plot data will be used to get a reasonable boundary
    XLim(Option<AxLims>),
    ///Boundaries of the y axis. If not defined, the plot data will be used to get a reasonable boundary
    YLim(Option<AxLims>),
    ///Boundaries of the z (color) axis. If not defined, the plot data will be used to get a reasonable boundary
    ZLim(Option<AxLims>),
    ///image size in pixels. Holds an `(u32, u32)` tuple
    PlotSize((u32, u32)),
    ///Path to the save directory of the image. Only necessary if the data is not written into a buffer
    FDir(PathBuf),
    ///Name of the file to be written
    FName(String),
    ///Plotting backend that should be used. Holds a [`PltBackEnd`] enum
    Backend(PltBackEnd),
    ///x positions of vertical marker lines (e.g. particle positions)
    VLines(Vec<f64>),
    ///x positions of minor grid lines
    MinorGridX(Vec<f64>),
}

impl PlotArgs {
    const fn key(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::XLabel(_) => "xlabel",
            Self::YLabel(_) => "ylabel",
            Self::CBarLabel(_) => "cbarlabel",
            Self::CMap(_) => "cmap",
            Self::XLim(_) => "xlim",
            Self::YLim(_) => "ylim",
            Self::ZLim(_) => "zlim",
            Self::PlotSize(_) => "plotsize",
            Self::FDir(_) => "fdir",
            Self::FName(_) => "fname",
            Self::Backend(_) => "backend",
            Self::VLines(_) => "vlines",
            Self::MinorGridX(_) => "minorgridx",
        }
    }
}

/// Holds all necessary plot parameters in a Hashmap that contains a String-key and an [`PlotArgs`] argument.
#[derive(Debug, Clone)]
pub struct PlotParameters {
    params: HashMap<String, PlotArgs>,
}

impl Default for PlotParameters {
    ///This method creates a new [`PlotParameters`] struct that is filled by default values
    /// Default values are:
    /// - `PlotArgs::Title`: empty
    /// - `PlotArgs::XLabel`: `x`
    /// - `PlotArgs::YLabel`: `y`
    /// - `PlotArgs::CBarLabel`: `z value`
    /// - `PlotArgs::CMap`: `colorous::VIRIDIS`
    /// - `PlotArgs::XLim`, `PlotArgs::YLim`, `PlotArgs::ZLim`: `None`
    /// - `PlotArgs::PlotSize`: `(1024, 768)`
    /// - `PlotArgs::FDir`: `.`
    /// - `PlotArgs::FName`: `picshape_plot.png`
    /// - `PlotArgs::Backend`: `PltBackEnd::Bitmap`
    /// - `PlotArgs::VLines`, `PlotArgs::MinorGridX`: empty
    fn default() -> Self {
        let mut plt_params = Self::empty();

        //iterate over all enum variants and provide a default value for the argument of that variant
        for plt_arg in PlotArgs::iter() {
            let default_arg = match plt_arg {
                PlotArgs::XLabel(_) => PlotArgs::XLabel("x".into()),
                PlotArgs::YLabel(_) => PlotArgs::YLabel("y".into()),
                PlotArgs::CBarLabel(_) => PlotArgs::CBarLabel("z value".into()),
                PlotArgs::PlotSize(_) => PlotArgs::PlotSize((1024, 768)),
                PlotArgs::FDir(_) => PlotArgs::FDir(PathBuf::from(".")),
                PlotArgs::FName(_) => PlotArgs::FName("picshape_plot.png".into()),
                other => other,
            };
            plt_params.insert(default_arg);
        }
        plt_params
    }
}

impl PlotParameters {
    ///This method creates a new empty [`PlotParameters`] struct
    #[must_use]
    pub fn empty() -> Self {
        Self {
            params: HashMap::new(),
        }
    }

    ///This method creates a new [`PlotParameters`] struct and inserts the passed [`PlotArgs`]. The other [`PlotArgs`] are set to default
    /// # Errors
    /// This method errors if one of the arguments is invalid.
    pub fn new(plt_args: Vec<PlotArgs>) -> PicResult<Self> {
        let mut plt_params = Self::default();
        for plt_arg in &plt_args {
            plt_params.set(plt_arg)?;
        }
        Ok(plt_params)
    }

    fn get(&self, key: &str) -> PicResult<&PlotArgs> {
        self.params
            .get(key)
            .ok_or_else(|| PicError::Plot(format!("{key} argument not found!")))
    }

    ///This method gets the title which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_title(&self) -> PicResult<String> {
        match self.get("title")? {
            PlotArgs::Title(t) => Ok(t.clone()),
            _ => Err(PicError::Plot("title argument not found!".into())),
        }
    }
    ///This method gets the x and y labels which are stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if an argument is not found
    pub fn get_labels(&self) -> PicResult<[String; 2]> {
        match (self.get("xlabel")?, self.get("ylabel")?) {
            (PlotArgs::XLabel(x), PlotArgs::YLabel(y)) => Ok([x.clone(), y.clone()]),
            _ => Err(PicError::Plot("label arguments not found!".into())),
        }
    }
    ///This method gets the colorbar label which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_cbar_label(&self) -> PicResult<String> {
        match self.get("cbarlabel")? {
            PlotArgs::CBarLabel(l) => Ok(l.clone()),
            _ => Err(PicError::Plot("cbarlabel argument not found!".into())),
        }
    }
    ///This method gets the colormap which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_cmap(&self) -> PicResult<CGradient> {
        match self.get("cmap")? {
            PlotArgs::CMap(c) => Ok(*c),
            _ => Err(PicError::Plot("cmap argument not found!".into())),
        }
    }
    ///This method gets the axis limits (x, y, z) which are stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if an argument is not found
    pub fn get_lims(&self) -> PicResult<PlotBounds> {
        match (self.get("xlim")?, self.get("ylim")?, self.get("zlim")?) {
            (PlotArgs::XLim(x), PlotArgs::YLim(y), PlotArgs::ZLim(z)) => Ok(PlotBounds {
                x: *x,
                y: *y,
                z: *z,
            }),
            _ => Err(PicError::Plot("axis limit arguments not found!".into())),
        }
    }
    ///This method gets the figure size which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_plotsize(&self) -> PicResult<(u32, u32)> {
        match self.get("plotsize")? {
            PlotArgs::PlotSize(s) => Ok(*s),
            _ => Err(PicError::Plot("plotsize argument not found!".into())),
        }
    }
    ///This method gets the backend which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_backend(&self) -> PicResult<PltBackEnd> {
        match self.get("backend")? {
            PlotArgs::Backend(b) => Ok(*b),
            _ => Err(PicError::Plot("backend argument not found!".into())),
        }
    }
    ///This method gets the file name which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_fname(&self) -> PicResult<String> {
        match self.get("fname")? {
            PlotArgs::FName(f) => Ok(f.clone()),
            _ => Err(PicError::Plot("fname argument not found!".into())),
        }
    }
    ///This method gets the file directory which is stored in the [`PlotParameters`]
    /// # Errors
    /// This method throws an error if the argument is not found
    pub fn get_fdir(&self) -> PicResult<PathBuf> {
        match self.get("fdir")? {
            PlotArgs::FDir(d) => Ok(d.clone()),
            _ => Err(PicError::Plot("fdir argument not found!".into())),
        }
    }
    ///This method gets the full file path (directory and name) of the plot
    /// # Errors
    /// This method throws an error if directory or name are not found
    pub fn get_fpath(&self) -> PicResult<PathBuf> {
        Ok(self.get_fdir()?.join(self.get_fname()?))
    }
    ///This method gets the positions of vertical marker lines and minor grid lines
    /// # Errors
    /// This method throws an error if an argument is not found
    pub fn get_vertical_lines(&self) -> PicResult<(Vec<f64>, Vec<f64>)> {
        match (self.get("vlines")?, self.get("minorgridx")?) {
            (PlotArgs::VLines(v), PlotArgs::MinorGridX(g)) => Ok((v.clone(), g.clone())),
            _ => Err(PicError::Plot("vertical line arguments not found!".into())),
        }
    }

    fn check_ax_lim_validity(ax_lim_opt: Option<&AxLims>) -> bool {
        ax_lim_opt.map_or(true, |ax_lim| ax_lim.check_validity())
    }

    fn check_plot_arg_validity(plt_arg: &PlotArgs) -> bool {
        match plt_arg {
            PlotArgs::XLim(l) | PlotArgs::YLim(l) | PlotArgs::ZLim(l) => {
                Self::check_ax_lim_validity(l.as_ref())
            }
            PlotArgs::PlotSize(s) => s.0 > COLORBAR_WIDTH && s.1 > 100,
            PlotArgs::FName(f) => !f.is_empty(),
            PlotArgs::VLines(v) | PlotArgs::MinorGridX(v) => v.iter().all(|x| x.is_finite()),
            _ => true,
        }
    }

    ///This method sets a plot argument ([`PlotArgs`]) to [`PlotParameters`]
    /// # Errors
    /// This function errors if the plot argument is not valid
    pub fn set(&mut self, plt_arg: &PlotArgs) -> PicResult<&mut Self> {
        if Self::check_plot_arg_validity(plt_arg) {
            self.insert(plt_arg.clone());
            Ok(self)
        } else {
            Err(PicError::Plot(format!(
                "Parameter of plot argument \"{plt_arg:?}\" is invalid and could not be set!"
            )))
        }
    }

    /// This method checks the compatibility between the chosen [`PltBackEnd`] and the file extension
    fn check_backend_file_ext_compatibility(&self) -> PicResult<()> {
        let backend = self.get_backend()?;
        let path_fname = self.get_fname()?;
        let has_ext = |valid: &[&str]| {
            Path::new(&path_fname)
                .extension()
                .is_some_and(|ext| valid.iter().any(|v| ext.eq_ignore_ascii_case(v)))
        };
        match backend {
            PltBackEnd::Bitmap => {
                if has_ext(&["png", "bmp", "jpg"]) {
                    Ok(())
                } else {
                    Err(PicError::Plot("Incompatible file extension for DrawingBackend: BitmapBackend! Choose \".jpg\", \".bmp\" or \".png\" for this type of backend!".into()))
                }
            }
            PltBackEnd::Svg => {
                if has_ext(&["svg"]) {
                    Ok(())
                } else {
                    Err(PicError::Plot("Incompatible file extension for DrawingBackend: SVGBackend! Choose \".svg\" for this type of backend!".into()))
                }
            }
            PltBackEnd::Buf => Ok(()),
        }
    }

    fn insert(&mut self, plt_arg: PlotArgs) {
        self.params.insert(plt_arg.key().to_owned(), plt_arg);
    }
}

/// Struct that holds all necessary attributes to describe a plot series
#[derive(Clone, Debug)]
pub struct PlotSeries {
    data: PlotData,
    color: RGBAColor,
    series_label: Option<String>,
}

impl PlotSeries {
    /// creates a new [`PlotSeries`]
    #[must_use]
    pub fn new(data: &PlotData, color: RGBAColor, series_label: Option<String>) -> Self {
        Self {
            data: data.clone(),
            color,
            series_label,
        }
    }
    /// Returns the data of this [`PlotSeries`]
    #[must_use]
    pub const fn get_plot_series_data(&self) -> &PlotData {
        &self.data
    }
    /// Returns the label of this [`PlotSeries`]
    #[must_use]
    pub fn get_series_label(&self) -> Option<String> {
        self.series_label.clone()
    }
}

/// Struct that holds everything needed to render a single figure.
pub struct Plot {
    title: String,
    labels: [String; 2],
    cbar_label: String,
    cmap: Gradient,
    bounds: PlotBounds,
    fig_size: (u32, u32),
    vertical_lines: Vec<f64>,
    minor_grid_x: Vec<f64>,
    plot_series: Vec<PlotSeries>,
}

impl Plot {
    /// Adds [`PlotSeries`] to this [`Plot`]
    pub fn add_plot_series(&mut self, plt_series_vec: &[PlotSeries]) {
        self.plot_series.extend_from_slice(plt_series_vec);
    }

    /// Returns the bounds of this [`Plot`]
    #[must_use]
    pub const fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    /// Defines the axes bounds of this [`Plot`] if the limit is not already defined by the initial [`PlotParameters`].
    ///
    /// Bounds which cannot be determined from the data (e.g. constant data) are replaced by useful default bounds.
    pub fn define_axes_bounds(&mut self) {
        if self.plot_series.is_empty() {
            warn!("No plot series defined! Cannot define axes bounds!");
            return;
        }
        let mut data_bounds = PlotBounds::default();
        for plt_series in &self.plot_series {
            data_bounds.join(&plt_series.data.define_data_based_axes_bounds());
        }
        let fallback = |lims: Option<AxLims>, series_vals: Option<(f64, f64)>| {
            lims.or_else(|| {
                series_vals.and_then(|(min, max)| AxLims::create_useful_axlims(min, max))
            })
        };
        let (x_vals, y_vals, z_vals) = self.finite_extents();
        self.bounds.x = self.bounds.x.or(fallback(data_bounds.x, x_vals));
        self.bounds.y = self.bounds.y.or(fallback(data_bounds.y, y_vals));
        if let Some(PlotData::ColorMesh { .. }) = self.plot_series.first().map(|s| &s.data) {
            self.bounds.z = self.bounds.z.or(fallback(data_bounds.z, z_vals));
        }
    }

    fn finite_extents(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>, Option<(f64, f64)>) {
        use crate::utils::filter_data::get_min_max_filter_nonfinite;
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut zs = Vec::new();
        for s in &self.plot_series {
            match &s.data {
                PlotData::Line { x, y } => {
                    xs.extend(x.iter());
                    ys.extend(y.iter());
                }
                PlotData::ColorMesh { x, y, z } => {
                    xs.extend(x.iter());
                    ys.extend(y.iter());
                    zs.extend(z.iter());
                }
            }
        }
        (
            get_min_max_filter_nonfinite(&xs),
            get_min_max_filter_nonfinite(&ys),
            get_min_max_filter_nonfinite(&zs),
        )
    }
}

impl TryFrom<&PlotParameters> for Plot {
    type Error = PicError;
    fn try_from(plt_params: &PlotParameters) -> PicResult<Self> {
        let (vertical_lines, minor_grid_x) = plt_params.get_vertical_lines()?;
        Ok(Self {
            title: plt_params.get_title()?,
            labels: plt_params.get_labels()?,
            cbar_label: plt_params.get_cbar_label()?,
            cmap: plt_params.get_cmap()?.get_gradient(),
            bounds: plt_params.get_lims()?,
            fig_size: plt_params.get_plotsize()?,
            vertical_lines,
            minor_grid_x,
            plot_series: Vec::new(),
        })
    }
}
