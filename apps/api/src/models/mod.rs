pub mod cv;
pub mod demo;
