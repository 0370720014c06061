//! Handling the picshape CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    demo::DemoConfig,
    distributions::DistributionType,
    error::{PicError, PicResult},
    get_version,
    plotter::ImageFormat,
};
use clap::{builder::Str, Parser};
use std::path::PathBuf;

/// Validated command line arguments of the picshape application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// directory the pictures are written to
    pub outdir: PathBuf,
    /// project name which is prepended to all field plots
    pub project: String,
    /// number of particles of the 1D dump
    pub particles: usize,
    /// seed of the random number generator
    pub seed: Option<u64>,
    /// distribution of the particle positions
    pub distribution: DistributionType,
    /// format of the written images
    pub format: ImageFormat,
}

/// Raw command line arguments as parsed by clap. Converted into [`Args`] after validation.
#[derive(Parser, Debug)]
#[command(author, version = Str::from(&get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// directory the pictures are written to. Created if it does not exist.
    #[arg(short, long, default_value = "_examplepictures")]
    outdir: String,

    /// project name which is prepended to the file names of all field plots
    #[arg(short, long, default_value = "particleshapedemo")]
    project: String,

    /// number of particles of the 1D dump. The 2D and 3D dumps contain 30 times as many particles.
    #[arg(short = 'n', long, default_value_t = 300)]
    particles: usize,

    /// seed of the random number generator. If omitted, the generator is seeded by the operating system.
    #[arg(short, long)]
    seed: Option<u64>,

    /// random distribution of the particle positions
    #[arg(short, long, value_enum, default_value_t = DistributionType::Uniform)]
    distribution: DistributionType,

    /// image format of the written plots
    #[arg(short, long, value_enum, default_value_t = ImageFormat::Png)]
    format: ImageFormat,
}

/// Evaluates if the passed output directory string is valid.
/// # Attributes
/// * `outdir`: String description of the output directory
/// # Returns
/// * [`Option<PathBuf>`] with the directory if valid
/// * None if the string is empty or points to an existing file
fn eval_outdir_input(outdir: &str) -> Option<PathBuf> {
    let path = PathBuf::from(outdir);
    if outdir.trim().is_empty() || path.is_file() {
        None
    } else {
        Some(path)
    }
}

/// Evaluates if the passed project name is valid.
///
/// The project name is part of all file names and must therefore not contain path separators.
fn eval_project_input(project: &str) -> Option<String> {
    if project.is_empty() || project.contains(['/', '\\']) {
        None
    } else {
        Some(project.to_owned())
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = PicError;

    fn try_from(part_args: PartialArgs) -> PicResult<Self> {
        let outdir = eval_outdir_input(&part_args.outdir).ok_or_else(|| {
            PicError::Console(format!(
                "invalid output directory \"{}\"",
                part_args.outdir
            ))
        })?;
        let project = eval_project_input(&part_args.project).ok_or_else(|| {
            PicError::Console(format!(
                "invalid project name \"{}\". Must not be empty or contain path separators",
                part_args.project
            ))
        })?;
        if part_args.particles == 0 {
            return Err(PicError::Console(
                "number of particles must be >= 1".into(),
            ));
        }
        Ok(Self {
            outdir,
            project,
            particles: part_args.particles,
            seed: part_args.seed,
            distribution: part_args.distribution,
            format: part_args.format,
        })
    }
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        Self {
            outdir: args.outdir,
            project: args.project,
            particles: args.particles,
            seed: args.seed,
            distribution: args.distribution,
            format: args.format,
        }
    }
}

/// Creates the intro text shown at program start.
#[must_use]
fn create_intro() -> String {
    format!(
        "{: ^80}\n{: ^80}\n",
        "picshape - particle shape demonstration",
        "version ".to_owned() + &get_version()
    )
}

/// Show the program name and the CLI version information.
pub fn show_intro() {
    println!("{}", create_intro());
}
