use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::image_size::ImageSize;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::iterate::iterate;
use crate::core::fractals::escape_time::params::IterationParams;
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::fractals::render_config::RenderConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    size: ImageSize,
    region: PlaneRegion,
    kind: FractalKind,
    params: IterationParams,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    fn size(&self) -> ImageSize {
        self.size
    }

    fn compute(&self, pixel: Point) -> EscapeResult {
        let point = pixel_to_complex_coords(pixel, self.size, self.region);
        let (z0, c) = self.kind.seed(point);

        iterate(z0, c, self.params.max_iterations())
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        size: ImageSize,
        region: PlaneRegion,
        kind: FractalKind,
        params: IterationParams,
    ) -> Self {
        Self {
            size,
            region,
            kind,
            params,
        }
    }

    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.size, config.region, config.kind, config.params)
    }
}
