//! 性能指标收集模块
//!
//! 提供图操作计数的收集和导出功能

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// 全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 图操作统计
    graph_stats: GraphStats,
    /// 启动时间
    start_time: Instant,
}

/// 图操作统计
#[derive(Debug, Default)]
struct GraphStats {
    /// 插入顶点数
    vertices_inserted: AtomicU64,
    /// 删除顶点数
    vertices_removed: AtomicU64,
    /// 插入边数
    edges_inserted: AtomicU64,
    /// 删除边数
    edges_removed: AtomicU64,
    /// 设置的访问标记数
    marks_set: AtomicU64,
    /// 容量扩容次数
    capacity_grows: AtomicU64,
}

/// 指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub vertices_inserted: u64,
    pub vertices_removed: u64,
    pub edges_inserted: u64,
    pub edges_removed: u64,
    pub marks_set: u64,
    pub capacity_grows: u64,
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新指标实例
    pub fn new() -> Self {
        Self {
            graph_stats: GraphStats::default(),
            start_time: Instant::now(),
        }
    }

    /// 记录顶点插入
    pub fn record_vertex_insert(&self) {
        self.graph_stats
            .vertices_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录顶点删除
    pub fn record_vertex_remove(&self) {
        self.graph_stats
            .vertices_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边插入
    pub fn record_edge_insert(&self) {
        self.graph_stats
            .edges_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边删除
    pub fn record_edge_remove(&self) {
        self.graph_stats
            .edges_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录访问标记
    pub fn record_mark(&self) {
        self.graph_stats.marks_set.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录容量扩容
    pub fn record_grow(&self) {
        self.graph_stats
            .capacity_grows
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 获取当前快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            vertices_inserted: self.graph_stats.vertices_inserted.load(Ordering::Relaxed),
            vertices_removed: self.graph_stats.vertices_removed.load(Ordering::Relaxed),
            edges_inserted: self.graph_stats.edges_inserted.load(Ordering::Relaxed),
            edges_removed: self.graph_stats.edges_removed.load(Ordering::Relaxed),
            marks_set: self.graph_stats.marks_set.load(Ordering::Relaxed),
            capacity_grows: self.graph_stats.capacity_grows.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.graph_stats.vertices_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.vertices_removed.store(0, Ordering::Relaxed);
        self.graph_stats.edges_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.edges_removed.store(0, Ordering::Relaxed);
        self.graph_stats.marks_set.store(0, Ordering::Relaxed);
        self.graph_stats.capacity_grows.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        metrics.record_vertex_insert();
        metrics.record_vertex_insert();
        metrics.record_edge_insert();
        metrics.record_grow();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vertices_inserted, 2);
        assert_eq!(snapshot.edges_inserted, 1);
        assert_eq!(snapshot.capacity_grows, 1);
        assert_eq!(snapshot.vertices_removed, 0);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = Metrics::new();
        metrics.record_edge_insert();
        metrics.record_mark();

        metrics.reset();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.edges_inserted, 0);
        assert_eq!(snapshot.marks_set, 0);
    }

    #[test]
    fn test_snapshot_serialization() {
        let metrics = Metrics::new();
        metrics.record_vertex_insert();

        let json = serde_json::to_string(&metrics.snapshot()).unwrap();
        assert!(json.contains("\"vertices_inserted\":1"));
    }
}
