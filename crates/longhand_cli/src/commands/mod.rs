pub mod demo;
pub mod solve;
