mod graph;

pub use graph::DistrictGraph;
