//! Action 枚举定义 (Intent)
//!
//! 键盘与鼠标交互转化为明确的语义化 Action

use crate::models::ColumnKey;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,
    SelectRow(usize),

    // 表头光标
    CursorLeft,
    CursorRight,
    SortCursorColumn,
    MoveColumnLeft,
    MoveColumnRight,

    // 鼠标拖拽表头
    HeaderPress(ColumnKey),
    HeaderDrag(Option<ColumnKey>), // 指针下的表头，不在表头上为 None
    HeaderRelease(Option<ColumnKey>),

    ToggleHelp,
    Cancel, // Esc
}
