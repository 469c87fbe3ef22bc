pub mod persist;
pub mod resolver;
pub mod state;
