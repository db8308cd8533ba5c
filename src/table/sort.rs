use std::cmp::Ordering;

use chrono::{DateTime, Local};

use crate::models::{ColumnKey, Row, resolve_cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "升序",
            SortDirection::Descending => "降序",
        }
    }
}

/// 当前排序设置：未排序，或按某列某方向排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortSpec {
    #[default]
    Unsorted,
    By {
        key: ColumnKey,
        direction: SortDirection,
    },
}

impl SortSpec {
    pub fn key(&self) -> Option<ColumnKey> {
        match self {
            SortSpec::By { key, .. } => Some(*key),
            SortSpec::Unsorted => None,
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortSpec::By { direction, .. } => Some(*direction),
            SortSpec::Unsorted => None,
        }
    }

    /// 点击表头后的排序设置
    ///
    /// 同一列升序再点变为降序，其余情况一律升序。降序不会回到未排序。
    pub fn toggled(self, clicked: ColumnKey) -> SortSpec {
        let direction = match self {
            SortSpec::By {
                key,
                direction: SortDirection::Ascending,
            } if key == clicked => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortSpec::By {
            key: clicked,
            direction,
        }
    }
}

/// 返回排序后的行引用，输入切片保持不变
///
/// 同一次排序中 `now` 固定，计算列在这一轮中每行只求值一次。
/// 使用稳定排序，相等的值保持原来的相对顺序。
pub fn sort_rows<'a>(rows: &'a [Row], spec: SortSpec, now: DateTime<Local>) -> Vec<&'a Row> {
    let SortSpec::By { key, direction } = spec else {
        return rows.iter().collect();
    };

    let mut keyed: Vec<_> = rows
        .iter()
        .map(|row| (resolve_cell(row, key, now), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, row)| row).collect()
}
