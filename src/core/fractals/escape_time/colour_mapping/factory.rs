use crate::core::data::statistics::Statistics;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::colour_mapping::map::EscapeColourMap;
use crate::core::fractals::escape_time::colour_mapping::maps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient, grayscale::Grayscale,
};

#[must_use]
pub fn colour_map_factory(
    kind: ColourMapKinds,
    statistics: &Statistics,
) -> Box<dyn EscapeColourMap> {
    match kind {
        ColourMapKinds::Grayscale => Box::new(Grayscale::new(statistics)),
        ColourMapKinds::FireGradient => Box::new(FireGradient::new(statistics)),
        ColourMapKinds::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(statistics)),
    }
}
