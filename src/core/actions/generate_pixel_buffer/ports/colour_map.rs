use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

pub trait ColourMap {
    fn map(&self, result: EscapeResult) -> Colour;

    fn display_name(&self) -> &str;
}
