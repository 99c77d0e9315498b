//! LiteGraph - 轻量级内存图数据结构库
//!
//! 提供带权有向/无向图的统一存储引擎，支持：
//! - 邻接矩阵与邻接表双存储策略
//! - 顶点槽位生命周期管理与空闲列表复用
//! - 占用率触发的容量翻倍扩容
//! - 面向遍历算法的访问标记（visited）协议
//! - 有序邻居枚举

pub mod error;
pub mod graph;
pub mod metrics;
pub mod sync;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{
    AdjacencyStore, DirectedGraph, EdgeEntry, EdgeStore, Graph, MatrixStore, UndirectedGraph,
    VertexArena,
};
pub use metrics::{global_metrics, Metrics, MetricsSnapshot};
pub use sync::{SharedDirectedGraph, SharedGraph, SharedUndirectedGraph};
pub use types::{GrowthPolicy, SlotId, Weight, NO_EDGE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
