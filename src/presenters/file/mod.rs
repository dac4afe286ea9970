pub mod factory;
pub mod image_file;
pub mod ppm;
