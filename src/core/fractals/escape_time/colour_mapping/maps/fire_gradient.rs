use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::statistics::Statistics;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::escape_time::colour_mapping::map::EscapeColourMap;
use crate::core::fractals::escape_time::colour_mapping::normaliser::EscapeNormaliser;

#[derive(Debug)]
pub struct FireGradient {
    normaliser: EscapeNormaliser,
}

impl ColourMap for FireGradient {
    fn map(&self, result: EscapeResult) -> Colour {
        self.normaliser.colour(result, fire)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for FireGradient {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(statistics: &Statistics) -> Self {
        Self {
            normaliser: EscapeNormaliser::new(statistics),
        }
    }
}

// Black -> red -> orange -> yellow -> white in four equal bands.
fn fire(t: f64) -> Colour {
    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        ((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255, 255, (local_t * 255.0) as u8)
    };

    Colour { r, g, b }
}
