pub mod ease;
pub mod geometry;
pub mod slot;
pub mod spin;
