pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod image_size;
pub mod pixel_buffer;
pub mod plane_region;
pub mod point;
pub mod result_grid;
pub mod statistics;
