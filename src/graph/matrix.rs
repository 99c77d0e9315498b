//! 邻接矩阵边存储
//!
//! capacity × capacity 的行主序权重矩阵，供无向图使用。
//! 对称性是硬不变量：每次写入同时落在 (i,j) 与 (j,i) 两个单元格。

use crate::graph::storage::EdgeStore;
use crate::types::{SlotId, Weight, NO_EDGE};
use serde::{Deserialize, Serialize};

/// 邻接矩阵存储（无向）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixStore {
    /// 行主序单元格，未设置的单元格恒为哨兵值
    cells: Vec<Weight>,
    /// 顶点容量（矩阵边长）
    capacity: usize,
}

impl MatrixStore {
    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.capacity + col
    }

    fn in_range(&self, src: SlotId, dst: SlotId) -> bool {
        src.as_usize() < self.capacity && dst.as_usize() < self.capacity
    }
}

impl EdgeStore for MatrixStore {
    /// 创建矩阵，全部单元格初始化为哨兵值
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![NO_EDGE; capacity * capacity],
            capacity,
        }
    }

    /// 对称写入，覆盖语义
    fn set(&mut self, src: SlotId, dst: SlotId, weight: Weight) {
        debug_assert!(self.in_range(src, dst));
        let (i, j) = (src.as_usize(), dst.as_usize());
        let forward = self.cell(i, j);
        let backward = self.cell(j, i);
        self.cells[forward] = weight;
        self.cells[backward] = weight;
    }

    fn weight(&self, src: SlotId, dst: SlotId) -> Weight {
        if !self.in_range(src, dst) {
            return NO_EDGE;
        }
        self.cells[self.cell(src.as_usize(), dst.as_usize())]
    }

    /// 对称清除，返回该边是否存在过
    fn clear(&mut self, src: SlotId, dst: SlotId) -> bool {
        if !self.in_range(src, dst) {
            return false;
        }
        let (i, j) = (src.as_usize(), dst.as_usize());
        let forward = self.cell(i, j);
        let backward = self.cell(j, i);
        let existed = self.cells[forward] != NO_EDGE;
        self.cells[forward] = NO_EDGE;
        self.cells[backward] = NO_EDGE;
        existed
    }

    /// 扫描行，按下标升序收集非哨兵列
    fn neighbors(&self, src: SlotId) -> Vec<SlotId> {
        let i = src.as_usize();
        if i >= self.capacity {
            return Vec::new();
        }
        (0..self.capacity)
            .filter(|&j| self.cells[self.cell(i, j)] != NO_EDGE)
            .map(SlotId::from)
            .collect()
    }

    /// 清除槽位所在的整行整列
    fn purge(&mut self, slot: SlotId) {
        let i = slot.as_usize();
        if i >= self.capacity {
            return;
        }
        for j in 0..self.capacity {
            let row = self.cell(i, j);
            let col = self.cell(j, i);
            self.cells[row] = NO_EDGE;
            self.cells[col] = NO_EDGE;
        }
    }

    /// 重新分配矩阵并拷贝旧单元格，新单元格填哨兵值
    fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        let mut cells = vec![NO_EDGE; new_capacity * new_capacity];
        for i in 0..self.capacity {
            for j in 0..self.capacity {
                cells[i * new_capacity + j] = self.cells[self.cell(i, j)];
            }
        }
        self.cells = cells;
        self.capacity = new_capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(i: u32) -> SlotId {
        SlotId::new(i)
    }

    #[test]
    fn test_set_is_symmetric() {
        let mut store = MatrixStore::with_capacity(4);
        store.set(slot(0), slot(2), 10);

        assert_eq!(store.weight(slot(0), slot(2)), 10);
        assert_eq!(store.weight(slot(2), slot(0)), 10);
        assert!(store.contains(slot(0), slot(2)));
        assert!(store.contains(slot(2), slot(0)));
    }

    #[test]
    fn test_unset_cell_is_sentinel() {
        let store = MatrixStore::with_capacity(4);
        assert_eq!(store.weight(slot(1), slot(3)), NO_EDGE);
        assert!(!store.contains(slot(1), slot(3)));
        // 越界读取同样返回哨兵
        assert_eq!(store.weight(slot(7), slot(0)), NO_EDGE);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MatrixStore::with_capacity(4);
        store.set(slot(0), slot(1), 5);
        store.set(slot(0), slot(1), 9);

        assert_eq!(store.weight(slot(0), slot(1)), 9);
        assert_eq!(store.weight(slot(1), slot(0)), 9);
    }

    #[test]
    fn test_clear_is_symmetric() {
        let mut store = MatrixStore::with_capacity(4);
        store.set(slot(0), slot(1), 5);

        assert!(store.clear(slot(1), slot(0)));
        assert_eq!(store.weight(slot(0), slot(1)), NO_EDGE);
        // 第二次清除返回 false
        assert!(!store.clear(slot(0), slot(1)));
    }

    #[test]
    fn test_neighbors_in_index_order() {
        let mut store = MatrixStore::with_capacity(5);
        store.set(slot(2), slot(4), 1);
        store.set(slot(2), slot(0), 1);
        store.set(slot(2), slot(3), 1);

        assert_eq!(store.neighbors(slot(2)), vec![slot(0), slot(3), slot(4)]);
        assert_eq!(store.neighbors(slot(1)), Vec::<SlotId>::new());
    }

    #[test]
    fn test_purge_clears_row_and_column() {
        let mut store = MatrixStore::with_capacity(4);
        store.set(slot(0), slot(1), 5);
        store.set(slot(1), slot(2), 7);
        store.set(slot(0), slot(3), 9);

        store.purge(slot(1));
        assert_eq!(store.weight(slot(0), slot(1)), NO_EDGE);
        assert_eq!(store.weight(slot(1), slot(2)), NO_EDGE);
        assert_eq!(store.weight(slot(2), slot(1)), NO_EDGE);
        // 不涉及该槽位的边保持不变
        assert_eq!(store.weight(slot(0), slot(3)), 9);
    }

    #[test]
    fn test_grow_preserves_edges() {
        let mut store = MatrixStore::with_capacity(2);
        store.set(slot(0), slot(1), 42);

        store.grow(4);
        assert_eq!(store.weight(slot(0), slot(1)), 42);
        assert_eq!(store.weight(slot(1), slot(0)), 42);
        // 新扩出的单元格为哨兵值
        assert_eq!(store.weight(slot(0), slot(3)), NO_EDGE);
        assert_eq!(store.weight(slot(3), slot(2)), NO_EDGE);
    }

    #[test]
    fn test_self_loop() {
        let mut store = MatrixStore::with_capacity(3);
        store.set(slot(1), slot(1), 0);

        assert_eq!(store.weight(slot(1), slot(1)), 0);
        assert_eq!(store.neighbors(slot(1)), vec![slot(1)]);
    }
}
