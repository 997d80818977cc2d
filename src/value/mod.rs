pub mod color;
pub mod resolver;
