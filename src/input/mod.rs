//! Input adapters.
//!
//! Each adapter receives input from one source and turns it into a validated
//! render configuration.

pub mod cli;
