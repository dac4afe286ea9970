use crate::core::data::image_size::ImageSize;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::params::IterationParams;
use crate::core::fractals::fractal_kind::FractalKind;

/// Everything one render needs, validated on construction of each part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderConfig {
    pub size: ImageSize,
    pub region: PlaneRegion,
    pub kind: FractalKind,
    pub params: IterationParams,
    pub colour_map_kind: ColourMapKinds,
    pub parallel: bool,
}
