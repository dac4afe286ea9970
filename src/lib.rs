mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::render::{RenderController, RenderWriteError};
pub use crate::core::actions::collect_statistics::collect_statistics::collect_statistics;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::image_size::{ImageSize, ImageSizeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
pub use crate::core::data::point::Point;
pub use crate::core::data::result_grid::{ResultGrid, ResultGridError};
pub use crate::core::data::statistics::Statistics;
pub use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::colour_mapping::factory::colour_map_factory;
pub use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
pub use crate::core::fractals::escape_time::colour_mapping::map::EscapeColourMap;
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::iterate::iterate;
pub use crate::core::fractals::escape_time::params::{
    DEFAULT_MAX_ITERATIONS, ESCAPE_RADIUS_SQUARED, IterationParams,
};
pub use crate::core::fractals::fractal_kind::FractalKind;
pub use crate::core::fractals::render_config::RenderConfig;
pub use input::cli::args::{CliArgs, CliConfigError, GeometryError};
pub use input::cli::commands::run_cli::RunCliCommand;
pub use presenters::file::factory::{FilePresenter, file_presenter_factory};
pub use presenters::file::image_file::ImageFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
