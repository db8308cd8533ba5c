//! 交互式表格的状态机
//!
//! 表格只拥有三份状态：列顺序、排序设置、拖拽状态。
//! 行数据由调用方持有，排序时以切片借入。

pub mod drag;
pub mod order;
pub mod sort;

use chrono::{DateTime, Local};

use crate::models::{ColumnKey, Row};
pub use drag::DragState;
pub use order::ColumnOrder;
pub use sort::{SortDirection, SortSpec, sort_rows};

#[derive(Debug, Clone, Default)]
pub struct InteractiveTable {
    order: ColumnOrder,
    sort: SortSpec,
    drag: DragState,
}

impl InteractiveTable {
    pub fn new(order: ColumnOrder) -> Self {
        Self {
            order,
            sort: SortSpec::default(),
            drag: DragState::default(),
        }
    }

    pub fn order(&self) -> &ColumnOrder {
        &self.order
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    // ============ 拖拽相关 ============

    /// 开始拖拽某列
    pub fn drag_start(&mut self, key: ColumnKey) {
        tracing::trace!(column = %key, "drag start");
        self.drag = DragState::Dragging {
            dragged: key,
            drop_target: None,
        };
    }

    /// 指针经过某列表头，更新放置目标；未在拖拽时忽略
    pub fn drag_over(&mut self, key: ColumnKey) {
        if let DragState::Dragging { drop_target, .. } = &mut self.drag {
            *drop_target = Some(key);
        }
    }

    /// 在目标列上放下，返回列顺序是否改变
    ///
    /// 无论是否移动，拖拽状态都会被清空。
    pub fn drop_on(&mut self, target: Option<ColumnKey>) -> bool {
        let dragged = self.drag.dragged_key();
        self.drag = DragState::Idle;

        let (Some(dragged), Some(target)) = (dragged, target) else {
            return false;
        };
        let moved = self.order.move_before(dragged, target);
        if moved {
            tracing::debug!(column = %dragged, before = %target, order = ?self.order.keys(), "column moved");
        }
        moved
    }

    /// 拖拽手势结束（包括未成功放下的情况）
    pub fn drag_end(&mut self) {
        if let Some(dragged) = self.drag.dragged_key() {
            tracing::debug!(column = %dragged, "drag ended without drop");
        }
        self.drag = DragState::Idle;
    }

    // ============ 排序相关 ============

    /// 点击表头切换排序
    pub fn header_click(&mut self, key: ColumnKey) -> SortSpec {
        self.sort = self.sort.toggled(key);
        tracing::debug!(sort = ?self.sort, "sort changed");
        self.sort
    }

    /// 按当前排序设置返回行的显示顺序
    pub fn sorted_rows<'a>(&self, rows: &'a [Row], now: DateTime<Local>) -> Vec<&'a Row> {
        sort_rows(rows, self.sort, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::{fixed_now, make_row};
    use ColumnKey::*;

    #[test]
    fn test_drag_email_onto_id() {
        let mut table = InteractiveTable::default();
        table.drag_start(Email);
        table.drag_over(FirstName);
        table.drag_over(Id);
        assert_eq!(table.drag_state().drop_target_key(), Some(Id));

        assert!(table.drop_on(Some(Id)));
        table.drag_end();

        assert_eq!(
            table.order().keys(),
            &[Email, Id, FirstName, LastName, FullName, City, RegisteredDate, Dsr]
        );
        assert_eq!(table.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drop_onto_self_leaves_order() {
        let mut table = InteractiveTable::default();
        table.drag_start(City);
        table.drag_over(City);
        assert!(!table.drop_on(Some(City)));
        assert_eq!(table.order(), &ColumnOrder::default());
        assert_eq!(table.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_end_without_drop_resets_state() {
        let mut table = InteractiveTable::default();
        table.drag_start(Dsr);
        table.drag_over(Id);
        assert!(table.drag_state().is_dragging());

        table.drag_end();
        assert_eq!(table.order(), &ColumnOrder::default());
        assert_eq!(table.drag_state().dragged_key(), None);
        assert_eq!(table.drag_state().drop_target_key(), None);
    }

    #[test]
    fn test_drop_without_target_is_noop() {
        let mut table = InteractiveTable::default();
        table.drag_start(Email);
        assert!(!table.drop_on(None));
        assert_eq!(table.order(), &ColumnOrder::default());
        assert_eq!(table.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drop_while_idle_is_noop() {
        let mut table = InteractiveTable::default();
        assert!(!table.drop_on(Some(Id)));
        assert_eq!(table.order(), &ColumnOrder::default());
    }

    #[test]
    fn test_drag_over_while_idle_is_ignored() {
        let mut table = InteractiveTable::default();
        table.drag_over(Id);
        assert_eq!(table.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_reorder_does_not_touch_sort() {
        let mut table = InteractiveTable::default();
        table.header_click(City);
        table.drag_start(City);
        table.drop_on(Some(Id));
        assert_eq!(table.sort_spec().key(), Some(City));
    }

    #[test]
    fn test_header_click_sorts_rows() {
        let rows = vec![
            make_row(1, "Carol", "Young", "Denver", 40),
            make_row(2, "Alice", "Baker", "Austin", 400),
            make_row(3, "Bob", "Young", "Chicago", 5),
        ];
        let mut table = InteractiveTable::default();
        let ids = |table: &InteractiveTable| -> Vec<u32> {
            table
                .sorted_rows(&rows, fixed_now())
                .iter()
                .map(|row| row.id)
                .collect()
        };

        assert_eq!(ids(&table), vec![1, 2, 3]);
        table.header_click(City);
        assert_eq!(ids(&table), vec![2, 3, 1]);
        table.header_click(City);
        assert_eq!(ids(&table), vec![1, 3, 2]);
        table.header_click(City);
        assert_eq!(ids(&table), vec![2, 3, 1]);
    }
}
