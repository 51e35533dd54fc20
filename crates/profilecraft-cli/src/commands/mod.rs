pub mod dashboard;
pub mod demo;
pub mod preview;
