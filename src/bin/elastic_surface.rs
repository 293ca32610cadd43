//! Command-line entry point
//!
//! Computes one directional-modulus surface and writes it in the requested
//! format. Elastic constants come either from `--cIJ` options or from a
//! TOML material file (`--config`); the file also carries the symmetry
//! class and takes precedence over the per-constant options.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use elastic_surface::{
    assemble, write_html, write_polydata, Colormap, ColormapName, ElasticConstants, MaterialFile,
    Result, SurfaceError, SymmetryClass,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// VTK XML PolyData (.vtp)
    Vtk,
    /// Interactive x3dom HTML page (.html)
    X3d,
}

#[derive(Parser)]
#[command(name = "elastic_surface")]
#[command(about = "Visualize the directional Young's modulus of an elastic tensor")]
struct Cli {
    /// Output file format
    #[arg(value_enum)]
    format: OutputFormat,

    /// Output file name (extension is replaced per format)
    name: PathBuf,

    /// Crystal structure symmetry
    #[arg(long, value_enum, default_value_t = SymmetryClass::Isotropic)]
    symmetry: SymmetryClass,

    /// Number of recursive sphere refinement steps
    #[arg(short = 'N', long, default_value_t = 5)]
    recursion: u32,

    /// Colormap for the interactive visualization
    #[arg(short, long, value_enum, default_value_t = ColormapName::Viridis)]
    colormap: ColormapName,

    /// Invert the colormap
    #[arg(short, long)]
    invert: bool,

    /// TOML material file replacing --symmetry and the --cIJ options
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    constants: ConstantArgs,
}

/// The 21 independent stiffness components, GPa or any consistent unit.
#[derive(Debug, Clone, clap::Args)]
struct ConstantArgs {
    #[arg(long)]
    c11: Option<f64>,
    #[arg(long)]
    c12: Option<f64>,
    #[arg(long)]
    c13: Option<f64>,
    #[arg(long)]
    c14: Option<f64>,
    #[arg(long)]
    c15: Option<f64>,
    #[arg(long)]
    c16: Option<f64>,
    #[arg(long)]
    c22: Option<f64>,
    #[arg(long)]
    c23: Option<f64>,
    #[arg(long)]
    c24: Option<f64>,
    #[arg(long)]
    c25: Option<f64>,
    #[arg(long)]
    c26: Option<f64>,
    #[arg(long)]
    c33: Option<f64>,
    #[arg(long)]
    c34: Option<f64>,
    #[arg(long)]
    c35: Option<f64>,
    #[arg(long)]
    c36: Option<f64>,
    #[arg(long)]
    c44: Option<f64>,
    #[arg(long)]
    c45: Option<f64>,
    #[arg(long)]
    c46: Option<f64>,
    #[arg(long)]
    c55: Option<f64>,
    #[arg(long)]
    c56: Option<f64>,
    #[arg(long)]
    c66: Option<f64>,
}

impl ConstantArgs {
    /// Validate the minimal input set and collect into `ElasticConstants`.
    fn resolve(&self) -> Result<ElasticConstants> {
        let c11 = self.c11.ok_or(SurfaceError::MissingConstant("c11"))?;
        let c12 = self.c12.ok_or(SurfaceError::MissingConstant("c12"))?;
        Ok(ElasticConstants {
            c11,
            c12,
            c13: self.c13.unwrap_or(0.0),
            c14: self.c14.unwrap_or(0.0),
            c15: self.c15.unwrap_or(0.0),
            c16: self.c16.unwrap_or(0.0),
            c22: self.c22.unwrap_or(0.0),
            c23: self.c23.unwrap_or(0.0),
            c24: self.c24.unwrap_or(0.0),
            c25: self.c25.unwrap_or(0.0),
            c26: self.c26.unwrap_or(0.0),
            c33: self.c33.unwrap_or(0.0),
            c34: self.c34.unwrap_or(0.0),
            c35: self.c35.unwrap_or(0.0),
            c36: self.c36.unwrap_or(0.0),
            c44: self.c44.unwrap_or(0.0),
            c45: self.c45.unwrap_or(0.0),
            c46: self.c46.unwrap_or(0.0),
            c55: self.c55.unwrap_or(0.0),
            c56: self.c56.unwrap_or(0.0),
            c66: self.c66.unwrap_or(0.0),
        })
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (symmetry, constants) = match &cli.config {
        Some(path) => {
            let material = MaterialFile::from_file(path)?;
            if material.constants.c11 == 0.0 || material.constants.c12 == 0.0 {
                return Err(SurfaceError::MissingConstant(
                    if material.constants.c11 == 0.0 { "c11" } else { "c12" },
                ));
            }
            (material.symmetry, material.constants)
        }
        None => (cli.symmetry, cli.constants.resolve()?),
    };

    let surface = assemble(&constants, symmetry, cli.recursion)?;

    match cli.format {
        OutputFormat::Vtk => write_polydata(&cli.name, &surface.points, &surface.triangles)?,
        OutputFormat::X3d => {
            let map = Colormap::new(cli.colormap, cli.invert);
            write_html(&cli.name, &surface.points, &surface.triangles, &map)?;
        }
    }

    println!(
        "{} symmetry, level {}: {} points, {} triangles, E in [{:.4}, {:.4}]",
        symmetry,
        cli.recursion,
        surface.points.len(),
        surface.triangles.len(),
        surface.min_radius(),
        surface.max_radius(),
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
