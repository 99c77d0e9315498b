//! 顶点存储
//!
//! 槽位数组 + 访问标记 + 值到槽位的索引。
//! 被删除的顶点留下墓碑槽位，由空闲列表按最低下标优先复用；
//! 扩容只追加槽位，已有下标保持不变。

use crate::error::{Error, Result};
use crate::types::SlotId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点槽位存储
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexArena<T: Eq + Hash> {
    /// 槽位数组，`None` 为墓碑
    slots: Vec<Option<T>>,
    /// 访问标记，与槽位一一对应
    seen: Vec<bool>,
    /// 空闲槽位列表，降序存放，尾部弹出即最低下标
    free: Vec<SlotId>,
    /// 值到槽位的索引
    index: HashMap<T, SlotId>,
    /// 在用槽位数
    occupied: usize,
}

impl<T> VertexArena<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// 创建指定容量的存储，所有槽位初始为空闲
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            seen: vec![false; capacity],
            free: (0..capacity).rev().map(SlotId::from).collect(),
            index: HashMap::new(),
            occupied: 0,
        }
    }

    /// 插入顶点，返回分配的槽位
    ///
    /// 重复值或容量耗尽时拒绝，不产生任何写入
    pub fn insert(&mut self, value: T) -> Result<SlotId> {
        if self.index.contains_key(&value) {
            return Err(Error::DuplicateVertex(format!("{:?}", value)));
        }
        let capacity = self.capacity();
        let id = self
            .free
            .pop()
            .ok_or(Error::CapacityExceeded { capacity })?;
        self.slots[id.as_usize()] = Some(value.clone());
        self.index.insert(value, id);
        self.occupied += 1;
        Ok(id)
    }

    /// 通过值查找槽位
    pub fn slot_of(&self, value: &T) -> Option<SlotId> {
        self.index.get(value).copied()
    }

    /// 判断顶点是否存在
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// 读取槽位上的顶点值
    pub fn value(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.as_usize()).and_then(|slot| slot.as_ref())
    }

    /// 删除顶点，槽位转为墓碑并归还空闲列表
    ///
    /// 同时清除该槽位的访问标记，复用后不会带着旧标记
    pub fn remove(&mut self, value: &T) -> Option<SlotId> {
        let id = self.index.remove(value)?;
        self.slots[id.as_usize()] = None;
        self.seen[id.as_usize()] = false;
        self.occupied -= 1;
        self.release(id);
        Some(id)
    }

    /// 标记顶点为已访问
    pub fn mark(&mut self, value: &T) -> bool {
        match self.slot_of(value) {
            Some(id) => {
                self.seen[id.as_usize()] = true;
                true
            }
            None => false,
        }
    }

    /// 判断顶点是否已标记
    pub fn is_marked(&self, value: &T) -> bool {
        self.slot_of(value)
            .map(|id| self.seen[id.as_usize()])
            .unwrap_or(false)
    }

    /// 清除全部访问标记
    pub fn clear_all_marks(&mut self) {
        self.seen.fill(false);
    }

    /// 返回槽位序最靠前的未标记顶点
    pub fn first_unmarked(&self) -> Option<&T> {
        self.slots
            .iter()
            .zip(self.seen.iter())
            .find_map(|(slot, seen)| match slot {
                Some(value) if !seen => Some(value),
                _ => None,
            })
    }

    /// 扩容到 `new_capacity`，追加的槽位进入空闲列表
    ///
    /// 已有槽位原样拷贝，下标不变；目标容量不大于当前容量时为空操作
    pub fn grow(&mut self, new_capacity: usize) {
        let old = self.capacity();
        if new_capacity <= old {
            return;
        }
        self.slots.resize(new_capacity, None);
        self.seen.resize(new_capacity, false);
        // 新槽位下标都高于存量空闲位，插入降序列表头部
        let mut free: Vec<SlotId> = (old..new_capacity).rev().map(SlotId::from).collect();
        free.append(&mut self.free);
        self.free = free;
    }

    /// 当前容量
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// 在用顶点数
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// 判断是否为空
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// 按槽位序遍历在用顶点
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// 归还槽位，维持空闲列表降序
    fn release(&mut self, id: SlotId) {
        let pos = self
            .free
            .binary_search_by(|probe| id.cmp(probe))
            .unwrap_or_else(|p| p);
        self.free.insert(pos, id);
    }
}
