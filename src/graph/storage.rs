//! 边存储策略接口
//!
//! 图门面通过该接口选择邻接矩阵或邻接表存储，
//! 两种实现对外提供同一组按槽位寻址的边操作。

use crate::types::{SlotId, Weight, NO_EDGE};

/// 边存储能力接口
///
/// 实现方约定：
/// - 权重为非负整数，`NO_EDGE` 哨兵表示无边
/// - 越界槽位读取返回哨兵 / false，不会 panic
/// - `purge` 在顶点槽位释放之前清除所有关联边
pub trait EdgeStore {
    /// 创建指定顶点容量的存储
    fn with_capacity(capacity: usize) -> Self;

    /// 写入一条边
    fn set(&mut self, src: SlotId, dst: SlotId, weight: Weight);

    /// 读取边权重，无边时返回 `NO_EDGE`
    fn weight(&self, src: SlotId, dst: SlotId) -> Weight;

    /// 判断边是否存在
    fn contains(&self, src: SlotId, dst: SlotId) -> bool {
        self.weight(src, dst) != NO_EDGE
    }

    /// 删除一条边，返回该边是否存在过
    fn clear(&mut self, src: SlotId, dst: SlotId) -> bool;

    /// 按存储序枚举邻居槽位
    fn neighbors(&self, src: SlotId) -> Vec<SlotId>;

    /// 清除槽位关联的全部边（顶点删除前调用）
    fn purge(&mut self, slot: SlotId);

    /// 扩容到新的顶点容量，已有边保持不变
    fn grow(&mut self, new_capacity: usize);
}
