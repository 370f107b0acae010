//! Type definitions shared across crates

pub mod geo;

pub use geo::Coordinate;
