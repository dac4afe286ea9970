use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMapKinds;

pub trait EscapeColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> ColourMapKinds;
}

impl ColourMap for Box<dyn EscapeColourMap> {
    fn map(&self, result: EscapeResult) -> Colour {
        (**self).map(result)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
