use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use log::LevelFilter;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::image_size::{ImageSize, ImageSizeError};
use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::params::{DEFAULT_MAX_ITERATIONS, IterationParams};
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::fractals::render_config::RenderConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    MissingSeparator(String),
    InvalidNumber(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(value) => {
                write!(f, "geometry '{}' must look like WIDTHxHEIGHT", value)
            }
            Self::InvalidNumber(value) => {
                write!(f, "'{}' is not a valid pixel count", value)
            }
        }
    }
}

impl Error for GeometryError {}

/// Unvalidated `WIDTHxHEIGHT` pair as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

pub fn parse_geometry(value: &str) -> Result<Geometry, GeometryError> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| GeometryError::MissingSeparator(value.to_string()))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|_| GeometryError::InvalidNumber(part.to_string()))
    };

    Ok(Geometry {
        width: parse(width)?,
        height: parse(height)?,
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteArg {
    #[default]
    Grayscale,
    Fire,
    BlueWhite,
}

impl From<PaletteArg> for ColourMapKinds {
    fn from(palette: PaletteArg) -> Self {
        match palette {
            PaletteArg::Grayscale => Self::Grayscale,
            PaletteArg::Fire => Self::FireGradient,
            PaletteArg::BlueWhite => Self::BlueWhiteGradient,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "escape_time",
    about = "Render Mandelbrot and Julia sets with the escape-time algorithm",
    version
)]
#[command(group(
    ArgGroup::new("fractal")
        .required(true)
        .args(["mandelbrot", "julia"])
))]
pub struct CliArgs {
    /// Image size in pixels
    #[arg(short = 'g', long, value_name = "WxH", value_parser = parse_geometry, default_value = "100x100")]
    pub geometry: Geometry,

    /// Output image; `.ppm` is written natively, other extensions pick an encoder
    #[arg(short = 'o', long, value_name = "FILE", default_value = "out.gif")]
    pub output: PathBuf,

    /// Maximum iterations per point
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    #[arg(long, allow_negative_numbers = true, default_value_t = -2.0)]
    pub x_min: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 2.0)]
    pub x_max: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = -2.0)]
    pub y_min: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 2.0)]
    pub y_max: f64,

    /// Real part of the Julia constant
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub cr: f64,

    /// Imaginary part of the Julia constant
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub ci: f64,

    /// Render the Mandelbrot set
    #[arg(short = 'm', long, action = ArgAction::SetTrue)]
    pub mandelbrot: bool,

    /// Render the Julia set for the constant given by --cr and --ci
    #[arg(short = 'j', long, action = ArgAction::SetTrue)]
    pub julia: bool,

    #[arg(short = 'p', long, value_enum, default_value_t = PaletteArg::default())]
    pub palette: PaletteArg,

    /// Sample points on the rayon thread pool
    #[arg(long, action = ArgAction::SetTrue)]
    pub parallel: bool,

    /// Log progress and print statistics after the render
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logging; the image is not saved
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl CliArgs {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKind {
        if self.julia {
            FractalKind::Julia {
                c: Complex::new(self.cr, self.ci),
            }
        } else {
            FractalKind::Mandelbrot
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliConfigError {
    ImageSize(ImageSizeError),
    PlaneRegion(PlaneRegionError),
    Iterations(EscapeTimeError),
    NonFiniteConstant { cr: f64, ci: f64 },
}

impl fmt::Display for CliConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageSize(err) => write!(f, "invalid geometry: {}", err),
            Self::PlaneRegion(err) => write!(f, "invalid region: {}", err),
            Self::Iterations(err) => write!(f, "invalid iterations: {}", err),
            Self::NonFiniteConstant { cr, ci } => {
                write!(f, "Julia constant must be finite: ({}, {})", cr, ci)
            }
        }
    }
}

impl Error for CliConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ImageSize(err) => Some(err),
            Self::PlaneRegion(err) => Some(err),
            Self::Iterations(err) => Some(err),
            Self::NonFiniteConstant { .. } => None,
        }
    }
}

impl From<ImageSizeError> for CliConfigError {
    fn from(err: ImageSizeError) -> Self {
        Self::ImageSize(err)
    }
}

impl From<PlaneRegionError> for CliConfigError {
    fn from(err: PlaneRegionError) -> Self {
        Self::PlaneRegion(err)
    }
}

impl From<EscapeTimeError> for CliConfigError {
    fn from(err: EscapeTimeError) -> Self {
        Self::Iterations(err)
    }
}

impl TryFrom<&CliArgs> for RenderConfig {
    type Error = CliConfigError;

    fn try_from(args: &CliArgs) -> Result<Self, Self::Error> {
        if args.julia && !(args.cr.is_finite() && args.ci.is_finite()) {
            return Err(CliConfigError::NonFiniteConstant {
                cr: args.cr,
                ci: args.ci,
            });
        }

        Ok(Self {
            size: ImageSize::new(args.geometry.width, args.geometry.height)?,
            region: PlaneRegion::new(args.x_min, args.x_max, args.y_min, args.y_max)?,
            kind: args.fractal_kind(),
            params: IterationParams::new(args.iterations)?,
            colour_map_kind: args.palette.into(),
            parallel: args.parallel,
        })
    }
}
