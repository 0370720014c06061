#![warn(missing_docs)]
//! Demonstration of the differences between the particle shapes used for deposition.
//!
//! The demo creates
//!   - one plot per [`ParticleShape`] showing the contributions of four single particles.
//!   - 1D fields with 1, 3 and 10 particles per cell for every shape.
//!   - 2D fields with a coarse and a fine grid for every shape.
//!   - a 3D field, which is only created but not plotted.
use crate::{
    analyzer::{FieldOptions, ParticleAnalyzer, Quantity},
    distributions::DistributionType,
    error::{PicError, PicResult},
    field::Field,
    histogram::histogram,
    plottable::{
        AxLims, PlotArgs, PlotData, PlotParameters, PlotSeries, PlotType, Plottable, PltBackEnd,
    },
    plotter::{ImageFormat, PlotOptions, Plotter},
    reader::{DummyReader, ParticleReader},
    shape::ParticleShape,
    utils::grid::centers_from_edges,
};
use log::info;
use nalgebra::DVector;
use plotters::style::RGBAColor;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Positions of the particles shown by the [`ShapeDemo`].
pub const DEMO_PARTICLES: [f64; 4] = [4.5, 9.75, 15.0, 20.25];
const DEMO_BINS: usize = 25;
const DEMO_RANGE: (f64, f64) = (0.0, 25.0);

/// Bins and titles of the 1D fields.
const BINS_1D: [(usize, &str); 3] = [(300, "1ppc"), (100, "3ppc"), (30, "10ppc")];
/// Bins and titles of the 2D fields.
const BINS_2D: [([usize; 2], &str); 2] = [([300, 30], "1ppc"), ([100, 10], "3ppc")];
const BINS_3D: [usize; 3] = [30, 30, 10];
/// Particles of the 2D and 3D dumps relative to the 1D dump.
const PARTICLE_FACTOR_ND: usize = 30;
const YLIM_1D: (f64, f64) = (0.0, 1600.0);
const CLIM_2D: (f64, f64) = (0.0, 3e4);

/// Configuration of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// directory all images are written to. Created if it does not exist.
    pub outdir: PathBuf,
    /// project name prepended to the file names of all field plots
    pub project: String,
    /// number of particles of the 1D dump. The 2D and 3D dumps contain 30 times as many.
    pub particles: usize,
    /// seed of the random number generator. Seeded by the operating system if `None`.
    pub seed: Option<u64>,
    /// distribution of the particle positions
    pub distribution: DistributionType,
    /// format of the written images
    pub format: ImageFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("_examplepictures"),
            project: "particleshapedemo".into(),
            particles: 300,
            seed: None,
            distribution: DistributionType::default(),
            format: ImageFormat::default(),
        }
    }
}

impl DemoConfig {
    fn reader(&self, particles: usize, dimensions: usize) -> PicResult<DummyReader> {
        DummyReader::new(
            particles,
            dimensions,
            self.seed,
            self.distribution.distribution().as_ref(),
        )
    }
}

fn first_species(reader: &impl ParticleReader) -> PicResult<String> {
    reader
        .species()
        .into_iter()
        .next()
        .ok_or_else(|| PicError::Reader("dump does not contain any particle species".into()))
}

/// Field title of the given particles per cell and shape, e.g. `3ppc_order1`.
fn field_title(ppc: &str, shape: ParticleShape) -> String {
    format!("{ppc}_order{shape}")
}

/// Four particles deposited onto a coarse grid with a single [`ParticleShape`].
#[derive(Debug, Clone)]
pub struct ShapeDemo {
    shape: ParticleShape,
    counts: DVector<f64>,
    edges: DVector<f64>,
}

impl ShapeDemo {
    /// Deposits the [`DEMO_PARTICLES`] onto 25 bins spanning `[0, 25)`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the histogram cannot be created.
    pub fn new(shape: ParticleShape) -> PicResult<Self> {
        let (counts, edges) = histogram(&DEMO_PARTICLES, None, DEMO_BINS, Some(DEMO_RANGE), shape)?;
        Ok(Self {
            shape,
            counts,
            edges,
        })
    }
    /// Returns the deposited weight per bin.
    #[must_use]
    pub const fn counts(&self) -> &DVector<f64> {
        &self.counts
    }
    /// Returns the bin centers.
    #[must_use]
    pub fn centers(&self) -> DVector<f64> {
        centers_from_edges(&self.edges)
    }
    /// Returns the file name of this demo plot, e.g. `particleshapedemo1.png`.
    #[must_use]
    pub fn file_name(&self, backend: PltBackEnd) -> String {
        format!("particleshapedemo{}.{}", self.shape, backend.extension())
    }
}

impl Plottable for ShapeDemo {
    fn get_plot_series(&self, _plt_type: &PlotType) -> PicResult<Option<Vec<PlotSeries>>> {
        let data = PlotData::new_line(self.centers(), self.counts.clone())?;
        Ok(Some(vec![PlotSeries::new(
            &data,
            RGBAColor(31, 119, 180, 1.),
            None,
        )]))
    }

    fn add_plot_specific_params(&self, plt_params: &mut PlotParameters) -> PicResult<()> {
        let centers = self.centers();
        plt_params
            .set(&PlotArgs::Title(format!("ParticleShapeOrder: {}", self.shape)))?
            .set(&PlotArgs::XLabel("x".into()))?
            .set(&PlotArgs::YLabel("weight".into()))?
            .set(&PlotArgs::YLim(AxLims::new(0.0, 1.0)))?
            .set(&PlotArgs::VLines(DEMO_PARTICLES.to_vec()))?
            .set(&PlotArgs::MinorGridX(centers.as_slice().to_vec()))?;
        Ok(())
    }

    fn get_plot_type(&self, plt_params: &PlotParameters) -> PlotType {
        PlotType::Line2D(plt_params.clone())
    }
}

/// Plots the contributions of the [`DEMO_PARTICLES`] for a single [`ParticleShape`].
///
/// # Returns
///
/// The path of the written file or `None` for [`PltBackEnd::Buf`].
///
/// # Errors
///
/// This function will return an error if the plot cannot be created or written.
pub fn particle_shape_demo(
    outdir: &Path,
    shape: ParticleShape,
    backend: PltBackEnd,
) -> PicResult<Option<PathBuf>> {
    let demo = ShapeDemo::new(shape)?;
    let path = outdir.join(demo.file_name(backend));
    demo.to_plot(&path, backend)?;
    if backend == PltBackEnd::Buf {
        Ok(None)
    } else {
        info!("shape demo of order {shape} written to {}", path.display());
        Ok(Some(path))
    }
}

/// Creates and plots the 1D fields for all particle shapes.
///
/// # Errors
///
/// This function will return an error if a field cannot be created or plotted.
pub fn run_1d(config: &DemoConfig, plotter: &Plotter) -> PicResult<Vec<PathBuf>> {
    let reader = config.reader(config.particles, 1)?;
    let analyzer = ParticleAnalyzer::new(&reader, &first_species(&reader)?)?;
    let plot_options = PlotOptions::with_ylim(YLIM_1D);
    let mut written = Vec::new();
    for (bins, ppc) in BINS_1D {
        for shape in ParticleShape::iter() {
            let options = FieldOptions::new(&field_title(ppc, shape))
                .bins(&[bins])
                .shape(shape)
                .range(0, (0.0, 1.0));
            let field = analyzer.create_field(&[Quantity::X], &options)?;
            written.extend(plotter.plot_field(&field, &plot_options)?);
        }
    }
    Ok(written)
}

/// Creates and plots the 2D fields for all particle shapes.
///
/// # Errors
///
/// This function will return an error if a field cannot be created or plotted.
pub fn run_2d(config: &DemoConfig, plotter: &Plotter) -> PicResult<Vec<PathBuf>> {
    let reader = config.reader(config.particles * PARTICLE_FACTOR_ND, 2)?;
    let analyzer = ParticleAnalyzer::new(&reader, &first_species(&reader)?)?;
    let plot_options = PlotOptions::with_clim(CLIM_2D);
    let mut written = Vec::new();
    for (bins, ppc) in BINS_2D {
        for shape in ParticleShape::iter() {
            let options = FieldOptions::new(&field_title(ppc, shape))
                .bins(&bins)
                .shape(shape)
                .range(0, (0.0, 1.0))
                .range(1, (0.0, 1.0));
            let field = analyzer.create_field(&[Quantity::X, Quantity::Y], &options)?;
            written.extend(plotter.plot_field(&field, &plot_options)?);
        }
    }
    Ok(written)
}

/// Creates a 3D field with quadratic particle shape.
///
/// There is no plotting support for 3D fields, so the field is only created.
///
/// # Errors
///
/// This function will return an error if the field cannot be created.
pub fn run_3d(config: &DemoConfig) -> PicResult<Field> {
    let reader = config.reader(config.particles * PARTICLE_FACTOR_ND, 3)?;
    let analyzer = ParticleAnalyzer::new(&reader, &first_species(&reader)?)?;
    let shape = ParticleShape::Quadratic;
    let options = FieldOptions::new(&field_title("1ppc", shape))
        .bins(&BINS_3D)
        .shape(shape)
        .range(0, (0.0, 1.0))
        .range(1, (0.0, 1.0))
        .range(2, (0.0, 1.0));
    let field = analyzer.create_field(&[Quantity::X, Quantity::Y, Quantity::Z], &options)?;
    info!(
        "created 3D field \"{}\" with shape {:?} (not plotted)",
        field.name(),
        field.shape()
    );
    Ok(field)
}

/// Runs the complete demo and returns the paths of all written images.
///
/// # Errors
///
/// This function will return an error if
///   - the output directory cannot be created.
///   - one of the demo steps fails.
pub fn run(config: &DemoConfig) -> PicResult<Vec<PathBuf>> {
    if config.particles == 0 {
        return Err(PicError::Other("number of particles must be >= 1".into()));
    }
    std::fs::create_dir_all(&config.outdir)?;
    info!("writing plots to {}", config.outdir.display());
    let backend = config.format.backend();
    let mut written = Vec::new();
    for shape in ParticleShape::iter() {
        written.extend(particle_shape_demo(&config.outdir, shape, backend)?);
    }
    let plotter = Plotter::new(&config.outdir, &config.project).with_format(config.format);
    written.extend(run_1d(config, &plotter)?);
    written.extend(run_2d(config, &plotter)?);
    run_3d(config)?;
    Ok(written)
}
