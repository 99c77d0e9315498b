//! 图门面
//!
//! 组合顶点存储与一种边存储策略，暴露完整的顶点/边/标记 API，
//! 并持有容量增长策略。有向图与无向图共用同一引擎，
//! 仅通过边存储类型与增长策略区分。

use crate::error::{Error, Result};
use crate::graph::adjacency::AdjacencyStore;
use crate::graph::arena::VertexArena;
use crate::graph::matrix::MatrixStore;
use crate::graph::storage::EdgeStore;
use crate::metrics::global_metrics;
use crate::types::{
    GrowthPolicy, SlotId, Weight, DEFAULT_DIRECTED_CAPACITY, DEFAULT_UNDIRECTED_CAPACITY, NO_EDGE,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// 带权图
///
/// 泛型参数 `S` 选择边存储策略：
/// [`MatrixStore`] 为对称矩阵（无向），[`AdjacencyStore`] 为出边表（有向）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<T: Eq + Hash, S> {
    /// 顶点存储
    arena: VertexArena<T>,
    /// 边存储
    store: S,
    /// 容量增长策略
    policy: GrowthPolicy,
}

/// 无向带权图：邻接矩阵存储，固定容量
pub type UndirectedGraph<T> = Graph<T, MatrixStore>;

/// 有向带权图：邻接表存储，占用率过阈值后容量翻倍
pub type DirectedGraph<T> = Graph<T, AdjacencyStore>;

impl<T, S> Graph<T, S>
where
    T: Eq + Hash + Clone + Debug,
    S: EdgeStore,
{
    /// 以指定容量和增长策略创建图
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            arena: VertexArena::with_capacity(capacity),
            store: S::with_capacity(capacity),
            policy,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 返回分配的槽位；重复值或容量耗尽时拒绝，不产生任何写入。
    /// 翻倍策略下，插入后占用率达到阈值即扩容，已有槽位下标不变。
    pub fn add_vertex(&mut self, value: T) -> Result<SlotId> {
        let id = self.arena.insert(value)?;
        global_metrics().record_vertex_insert();

        if self
            .policy
            .should_grow(self.arena.len(), self.arena.capacity())
        {
            let new_capacity = self.arena.capacity() * 2;
            debug!(capacity = new_capacity, "图容量扩容");
            self.arena.grow(new_capacity);
            self.store.grow(new_capacity);
            global_metrics().record_grow();
        }
        Ok(id)
    }

    /// 判断顶点是否存在
    pub fn has_vertex(&self, value: &T) -> bool {
        self.arena.contains(value)
    }

    /// 删除顶点及其所有关联边
    ///
    /// 先清除边存储中的关联边，再释放槽位；顶点不存在时返回 false
    pub fn remove_vertex(&mut self, value: &T) -> bool {
        let Some(id) = self.arena.slot_of(value) else {
            return false;
        };
        self.store.purge(id);
        self.arena.remove(value);
        global_metrics().record_vertex_remove();
        true
    }

    /// 当前顶点总数
    pub fn total_vertices(&self) -> usize {
        self.arena.len()
    }

    /// 判断图是否为空
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// 判断图是否已满
    pub fn is_full(&self) -> bool {
        self.arena.len() == self.arena.capacity()
    }

    /// 当前顶点容量
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// 按槽位序遍历顶点值
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.arena.values()
    }

    // ==================== 边操作 ====================

    /// 添加带权边
    ///
    /// 权重校验先于端点解析，两者都通过后才写入存储，
    /// 单次调用要么完整提交要么不产生任何写入
    pub fn add_edge(&mut self, src: &T, dst: &T, weight: Weight) -> Result<()> {
        if weight < 0 {
            return Err(Error::InvalidWeight(weight));
        }
        let s = self.resolve(src)?;
        let d = self.resolve(dst)?;
        self.store.set(s, d, weight);
        trace!(src = s.as_usize(), dst = d.as_usize(), weight, "添加边");
        global_metrics().record_edge_insert();
        Ok(())
    }

    /// 读取边权重
    ///
    /// 端点不存在或无边时返回 `NO_EDGE` 哨兵值
    pub fn get_edge(&self, src: &T, dst: &T) -> Weight {
        let (Some(s), Some(d)) = (self.arena.slot_of(src), self.arena.slot_of(dst)) else {
            return NO_EDGE;
        };
        self.store.weight(s, d)
    }

    /// 判断边是否存在
    pub fn contains_edge(&self, src: &T, dst: &T) -> bool {
        self.get_edge(src, dst) != NO_EDGE
    }

    /// 删除边
    ///
    /// 端点不存在或边不存在时返回 false，重复删除同一条边第二次返回 false
    pub fn remove_edge(&mut self, src: &T, dst: &T) -> bool {
        let (Some(s), Some(d)) = (self.arena.slot_of(src), self.arena.slot_of(dst)) else {
            return false;
        };
        let removed = self.store.clear(s, d);
        if removed {
            global_metrics().record_edge_remove();
        }
        removed
    }

    // ==================== 邻居查询 ====================

    /// 按存储序枚举邻居顶点值
    ///
    /// 顶点不存在或无邻居时返回空序列，不是错误
    pub fn neighbors(&self, value: &T) -> Vec<T> {
        let Some(id) = self.arena.slot_of(value) else {
            return Vec::new();
        };
        self.store
            .neighbors(id)
            .into_iter()
            .filter_map(|slot| self.arena.value(slot).cloned())
            .collect()
    }

    /// 按存储序枚举邻居槽位
    pub fn neighbor_slots(&self, value: &T) -> Vec<SlotId> {
        match self.arena.slot_of(value) {
            Some(id) => self.store.neighbors(id),
            None => Vec::new(),
        }
    }

    /// 查找顶点所在槽位
    ///
    /// 槽位在顶点生命周期内稳定，扩容不改变下标，可被调用方缓存
    pub fn slot_of(&self, value: &T) -> Option<SlotId> {
        self.arena.slot_of(value)
    }

    // ==================== 访问标记 ====================

    /// 标记顶点为已访问，顶点不存在时返回 false
    pub fn mark_vertex(&mut self, value: &T) -> bool {
        let marked = self.arena.mark(value);
        if marked {
            global_metrics().record_mark();
        }
        marked
    }

    /// 判断顶点是否已标记
    pub fn is_marked(&self, value: &T) -> bool {
        self.arena.is_marked(value)
    }

    /// 清除全部访问标记
    pub fn clear_all_marks(&mut self) {
        self.arena.clear_all_marks();
    }

    /// 返回槽位序最靠前的未标记顶点，全部已标记时返回 None
    pub fn pick_unmarked(&self) -> Option<&T> {
        self.arena.first_unmarked()
    }

    fn resolve(&self, value: &T) -> Result<SlotId> {
        self.arena
            .slot_of(value)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", value)))
    }
}

impl<T> UndirectedGraph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// 创建默认容量（50）的无向图
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDIRECTED_CAPACITY)
    }

    /// 创建指定容量的无向图，容量为 0 时退回默认值
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_UNDIRECTED_CAPACITY
        } else {
            capacity
        };
        Self::with_policy(capacity, GrowthPolicy::Fixed)
    }
}

impl<T> Default for UndirectedGraph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DirectedGraph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// 创建默认容量（25）的有向图
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DIRECTED_CAPACITY)
    }

    /// 创建指定容量的有向图，容量为 0 时退回默认值
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_DIRECTED_CAPACITY
        } else {
            capacity
        };
        Self::with_policy(capacity, GrowthPolicy::doubling())
    }
}

impl<T> Default for DirectedGraph<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
