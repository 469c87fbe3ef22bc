pub mod parser;
pub mod segment;
