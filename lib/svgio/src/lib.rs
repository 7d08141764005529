pub mod model;
pub mod write;
pub mod xml;
