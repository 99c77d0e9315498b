//! 邻接表边存储
//!
//! 每个顶点一行 (目标槽位, 权重) 条目，供有向图使用，只记录出边。
//! 边以目标槽位为键而非顶点值，顶点值的外部变化不影响边的可达性。

use crate::graph::storage::EdgeStore;
use crate::types::{SlotId, Weight, NO_EDGE};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 邻接表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    /// 目标槽位
    pub dst: SlotId,
    /// 边权重
    pub weight: Weight,
}

/// 邻接表存储（有向）
///
/// 同一对端点允许追加多条边，读取与删除都取首个匹配条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyStore {
    /// 每个槽位的出边行，行内保持插入顺序
    rows: Vec<SmallVec<[EdgeEntry; 4]>>,
}

impl EdgeStore for AdjacencyStore {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: (0..capacity).map(|_| SmallVec::new()).collect(),
        }
    }

    /// 在源顶点行尾追加条目
    fn set(&mut self, src: SlotId, dst: SlotId, weight: Weight) {
        debug_assert!(src.as_usize() < self.rows.len());
        self.rows[src.as_usize()].push(EdgeEntry { dst, weight });
    }

    /// 行内线性查找，返回首个匹配条目的权重
    fn weight(&self, src: SlotId, dst: SlotId) -> Weight {
        self.rows
            .get(src.as_usize())
            .and_then(|row| row.iter().find(|entry| entry.dst == dst))
            .map(|entry| entry.weight)
            .unwrap_or(NO_EDGE)
    }

    /// 摘除首个匹配条目，无匹配时返回 false
    fn clear(&mut self, src: SlotId, dst: SlotId) -> bool {
        let Some(row) = self.rows.get_mut(src.as_usize()) else {
            return false;
        };
        match row.iter().position(|entry| entry.dst == dst) {
            Some(pos) => {
                row.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 按插入顺序枚举出边目标
    fn neighbors(&self, src: SlotId) -> Vec<SlotId> {
        self.rows
            .get(src.as_usize())
            .map(|row| row.iter().map(|entry| entry.dst).collect())
            .unwrap_or_default()
    }

    /// 清空槽位自身的行，并从其余各行摘除指向它的条目
    ///
    /// 全表扫描 O(V·E)，该规模下可接受
    fn purge(&mut self, slot: SlotId) {
        if let Some(row) = self.rows.get_mut(slot.as_usize()) {
            row.clear();
        }
        for row in &mut self.rows {
            row.retain(|entry| entry.dst != slot);
        }
    }

    fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.rows.len() {
            return;
        }
        self.rows.resize_with(new_capacity, SmallVec::new);
    }
}
