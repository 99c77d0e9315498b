//! 图核心模块
//!
//! 定义顶点存储、边存储策略和图门面

mod adjacency;
mod arena;
mod graph;
mod matrix;
mod storage;

pub use adjacency::{AdjacencyStore, EdgeEntry};
pub use arena::VertexArena;
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use matrix::MatrixStore;
pub use storage::EdgeStore;
