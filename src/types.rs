//! 基础类型定义
//!
//! 边权重、哨兵值、槽位 ID 和容量策略

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重（64位整数）
pub type Weight = i64;

/// "无边" 哨兵值，区别于任何合法权重
pub const NO_EDGE: Weight = -1;

/// 无向图默认顶点容量
pub const DEFAULT_UNDIRECTED_CAPACITY: usize = 50;

/// 有向图默认顶点容量
pub const DEFAULT_DIRECTED_CAPACITY: usize = 25;

/// 触发扩容的占用率阈值
pub const LOAD_THRESHOLD: f64 = 0.75;

/// 槽位 ID（顶点在存储中的稳定下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SlotId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<usize> for SlotId {
    fn from(id: usize) -> Self {
        Self(id as u32)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 容量增长策略
///
/// `Fixed` 固定容量，插满后拒绝新顶点；
/// `Doubling` 占用率达到阈值后容量翻倍，已有槽位下标保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GrowthPolicy {
    Fixed,
    Doubling { load_threshold: f64 },
}

impl GrowthPolicy {
    /// 默认的翻倍策略（阈值 0.75）
    pub fn doubling() -> Self {
        GrowthPolicy::Doubling {
            load_threshold: LOAD_THRESHOLD,
        }
    }

    /// 判断当前占用率是否需要扩容
    pub fn should_grow(&self, occupied: usize, capacity: usize) -> bool {
        match self {
            GrowthPolicy::Fixed => false,
            GrowthPolicy::Doubling { load_threshold } => {
                capacity > 0 && (occupied as f64) / (capacity as f64) >= *load_threshold
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_conversions() {
        let id = SlotId::new(7);
        assert_eq!(id.as_usize(), 7);
        assert_eq!(SlotId::from(7usize), id);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_growth_policy_threshold() {
        let fixed = GrowthPolicy::Fixed;
        assert!(!fixed.should_grow(25, 25));

        let doubling = GrowthPolicy::doubling();
        // 18/25 = 0.72，未达阈值
        assert!(!doubling.should_grow(18, 25));
        // 19/25 = 0.76，超过阈值
        assert!(doubling.should_grow(19, 25));
    }
}
