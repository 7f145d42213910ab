pub mod graph;
pub mod scoring;
pub mod util;
