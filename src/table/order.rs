use std::collections::HashSet;

use crate::error::AppError;
use crate::models::ColumnKey;

/// 列的显示顺序，总是全部列键的一个排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrder(Vec<ColumnKey>);

impl ColumnOrder {
    /// 校验并构造列顺序：每个列键恰好出现一次
    pub fn from_keys(keys: Vec<ColumnKey>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for key in &keys {
            if !seen.insert(*key) {
                return Err(AppError::InvalidColumnOrder(format!("列 {} 重复出现", key)));
            }
        }

        if let Some(missing) = ColumnKey::ALL.iter().find(|key| !seen.contains(key)) {
            return Err(AppError::InvalidColumnOrder(format!("缺少列 {}", missing)));
        }

        Ok(Self(keys))
    }

    pub fn keys(&self) -> &[ColumnKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn position(&self, key: ColumnKey) -> Option<usize> {
        self.0.iter().position(|k| *k == key)
    }

    pub fn get(&self, index: usize) -> Option<ColumnKey> {
        self.0.get(index).copied()
    }

    /// 把 `dragged` 移出原位置，再插入到 `target` 移动前所在的下标
    ///
    /// 两者相同时不做任何改变。返回是否发生了移动。
    pub fn move_before(&mut self, dragged: ColumnKey, target: ColumnKey) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };

        let key = self.0.remove(from);
        self.0.insert(to, key);
        true
    }
}

impl Default for ColumnOrder {
    fn default() -> Self {
        Self(ColumnKey::ALL.to_vec())
    }
}
