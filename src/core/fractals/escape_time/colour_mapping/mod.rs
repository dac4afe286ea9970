pub mod factory;
pub mod kinds;
pub mod map;
pub mod maps;
pub mod normaliser;
