//! 布局计算
//!
//! 渲染和鼠标命中测试共用同一套列几何，保证指针下的表头与画出来的一致。

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

use crate::models::ColumnKey;
use crate::table::ColumnOrder;

pub const COLUMN_SPACING: u16 = 1;

/// 居中弹窗区域，按百分比
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// 去掉边框后的表格区域
pub fn table_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub fn column_widths(order: &ColumnOrder) -> Vec<Constraint> {
    order
        .keys()
        .iter()
        .map(|key| Constraint::Length(key.definition().cells()))
        .collect()
}

/// 每个表头单元格在屏幕上的位置
pub fn header_cells(area: Rect, order: &ColumnOrder) -> Vec<(ColumnKey, Rect)> {
    let inner = table_inner(area);
    let header = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let rects = Layout::horizontal(column_widths(order))
        .spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .split(header);

    order
        .keys()
        .iter()
        .copied()
        .zip(rects.iter().copied())
        .collect()
}

/// 指针下的表头列
pub fn header_at(area: Rect, order: &ColumnOrder, x: u16, y: u16) -> Option<ColumnKey> {
    header_cells(area, order)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position { x, y }))
        .map(|(key, _)| key)
}

/// 指针下的数据行（相对于排序后的行序列）
pub fn body_row_at(area: Rect, offset: usize, x: u16, y: u16) -> Option<usize> {
    let inner = table_inner(area);
    let body = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    body.contains(Position { x, y })
        .then(|| offset + usize::from(y - body.y))
}
