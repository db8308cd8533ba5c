//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::models::{ColumnKey, Row};
use crate::table::{ColumnOrder, InteractiveTable};

/// 应用状态
pub struct App {
    pub rows: Vec<Row>,
    pub table: InteractiveTable,
    pub selected_index: usize,
    pub header_cursor: usize,
    pub mode: AppMode,
    pub message: Option<String>,
    pub press: Option<HeaderPress>,
    pub table_area: Rect, // 上一帧表格区域，用于鼠标命中测试
    pub table_state: TableState,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Help,
}

/// 鼠标在表头按下后的记录，用于区分点击与拖拽
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPress {
    pub key: ColumnKey,
    pub moved: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(rows: Vec<Row>, order: ColumnOrder) -> Self {
        Self {
            rows,
            table: InteractiveTable::new(order),
            selected_index: 0,
            header_cursor: 0,
            mode: AppMode::Normal,
            message: None,
            press: None,
            table_area: Rect::default(),
            table_state: TableState::default(),
        }
    }

    /// 按当前排序得到的行顺序
    pub fn visible_rows(&self, now: DateTime<Local>) -> Vec<&Row> {
        self.table.sorted_rows(&self.rows, now)
    }

    /// 表头光标所在的列
    pub fn cursor_column(&self) -> Option<ColumnKey> {
        self.table.order().get(self.header_cursor)
    }

    /// 表格可见的数据行数
    pub fn page_size(&self) -> usize {
        // 边框两行加表头一行
        usize::from(self.table_area.height.saturating_sub(3)).max(1)
    }
}
