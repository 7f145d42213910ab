//! Graph representations and associated functionality

pub mod edge_list;


// Re-export types from internal modules
mod graph_traits;
mod adjacency_graph;
mod csr_graph;

// Re-export all public items
pub use graph_traits::*;
pub use adjacency_graph::*;
pub use csr_graph::*;
