use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::statistics::Statistics;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::colour_mapping::map::EscapeColourMap;
use crate::core::fractals::escape_time::colour_mapping::normaliser::EscapeNormaliser;

const DEEP_BLUE: Colour = Colour { r: 0, g: 7, b: 100 };

#[derive(Debug)]
pub struct BlueWhiteGradient {
    normaliser: EscapeNormaliser,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, result: EscapeResult) -> Colour {
        self.normaliser
            .colour(result, |t| Colour::lerp(DEEP_BLUE, Colour::WHITE, t))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for BlueWhiteGradient {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(statistics: &Statistics) -> Self {
        Self {
            normaliser: EscapeNormaliser::new(statistics),
        }
    }
}
