use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::collect_statistics::collect_statistics::collect_statistics;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::statistics::Statistics;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_mapping::factory::colour_map_factory;
use crate::core::fractals::render_config::RenderConfig;

#[derive(Debug)]
pub enum RenderWriteError {
    NotGenerated,
    Present(PresentError),
}

impl fmt::Display for RenderWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotGenerated => write!(f, "nothing has been rendered yet"),
            Self::Present(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotGenerated => None,
            Self::Present(err) => Some(err),
        }
    }
}

impl From<PresentError> for RenderWriteError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

/// Runs sample, aggregate and colour passes for one configuration and hands
/// the result to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    config: RenderConfig,
    presenter: P,
    statistics: Option<Statistics>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(config: RenderConfig, presenter: P) -> Self {
        Self {
            config,
            presenter,
            statistics: None,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), GeneratePixelBufferError> {
        let config = &self.config;

        info!(
            "Rendering {} set, {} over {}, max iterations {}",
            config.kind.display_name(),
            config.size,
            config.region,
            config.params.max_iterations()
        );

        let algorithm = EscapeTimeAlgorithm::from_config(config);
        let start = Instant::now();
        let grid = if config.parallel {
            generate_fractal_rayon(&algorithm)
        } else {
            generate_fractal(&algorithm)
        };
        debug!(
            "Sampled {} points ({}) in {:?}",
            grid.len(),
            if config.parallel { "rayon" } else { "sequential" },
            start.elapsed()
        );

        let start = Instant::now();
        let statistics = collect_statistics(&grid);
        debug!("Collected statistics in {:?}: {}", start.elapsed(), statistics);

        let start = Instant::now();
        let colour_map = colour_map_factory(config.colour_map_kind, &statistics);
        let buffer = generate_pixel_buffer(&grid, &colour_map)?;
        debug!(
            "Coloured pixel buffer with {} in {:?}",
            colour_map.kind(),
            start.elapsed()
        );

        info!("Render finished: {}", statistics);

        self.statistics = Some(statistics);
        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderWriteError> {
        let filepath = filepath.as_ref();
        let buffer = self.buffer.as_ref().ok_or(RenderWriteError::NotGenerated)?;

        self.presenter.present(buffer, filepath)?;
        info!("Saved to {}", filepath.display());

        Ok(())
    }
}
