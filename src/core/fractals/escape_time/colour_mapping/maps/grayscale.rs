use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::statistics::Statistics;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::colour_mapping::map::EscapeColourMap;
use crate::core::fractals::escape_time::colour_mapping::normaliser::EscapeNormaliser;

#[derive(Debug)]
pub struct Grayscale {
    normaliser: EscapeNormaliser,
}

impl ColourMap for Grayscale {
    fn map(&self, result: EscapeResult) -> Colour {
        self.normaliser
            .colour(result, |t| Colour::lerp(Colour::BLACK, Colour::WHITE, t))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for Grayscale {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::Grayscale
    }
}

impl Grayscale {
    #[must_use]
    pub fn new(statistics: &Statistics) -> Self {
        Self {
            normaliser: EscapeNormaliser::new(statistics),
        }
    }
}
