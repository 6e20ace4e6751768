pub mod segment;
pub mod transcriber;
