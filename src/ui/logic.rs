//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种交互处理方法

use super::actions::Action;
use super::state::{App, AppMode, HeaderPress};
use crate::models::ColumnKey;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(1),
            Action::MoveSelectionDown => self.move_down(1),
            Action::PageUp => self.move_up(self.page_size()),
            Action::PageDown => self.move_down(self.page_size()),
            Action::SelectFirst => self.selected_index = 0,
            Action::SelectLast => self.selected_index = self.rows.len().saturating_sub(1),
            Action::SelectRow(index) => {
                self.abandon_drag();
                if index < self.rows.len() {
                    self.selected_index = index;
                }
            }

            Action::CursorLeft => self.header_cursor = self.header_cursor.saturating_sub(1),
            Action::CursorRight => {
                if self.header_cursor + 1 < self.table.order().len() {
                    self.header_cursor += 1;
                }
            }
            Action::SortCursorColumn => {
                if let Some(key) = self.cursor_column() {
                    self.sort_by(key);
                }
            }
            Action::MoveColumnLeft => self.move_cursor_column(-1),
            Action::MoveColumnRight => self.move_cursor_column(1),

            Action::HeaderPress(key) => self.press_header(key),
            Action::HeaderDrag(over) => self.drag_header(over),
            Action::HeaderRelease(target) => self.release_header(target),

            Action::ToggleHelp => {
                self.abandon_drag();
                self.mode = match self.mode {
                    AppMode::Normal => AppMode::Help,
                    AppMode::Help => AppMode::Normal,
                };
            }
            Action::Cancel => self.cancel(),
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self, step: usize) {
        self.selected_index = self.selected_index.saturating_sub(step);
    }

    /// 向下移动选择
    pub fn move_down(&mut self, step: usize) {
        let last = self.rows.len().saturating_sub(1);
        self.selected_index = (self.selected_index + step).min(last);
    }

    // ============ 排序相关 ============

    /// 点击表头排序
    pub fn sort_by(&mut self, key: ColumnKey) {
        let spec = self.table.header_click(key);
        if let Some(direction) = spec.direction() {
            self.message = Some(format!(
                "按 {} {}",
                key.definition().label,
                direction.label()
            ));
        }
    }

    // ============ 列拖拽相关 ============

    /// 在表头按下鼠标，开始拖拽
    pub fn press_header(&mut self, key: ColumnKey) {
        self.table.drag_start(key);
        self.press = Some(HeaderPress { key, moved: false });
        if let Some(index) = self.table.order().position(key) {
            self.header_cursor = index;
        }
    }

    /// 拖拽中移动指针
    pub fn drag_header(&mut self, over: Option<ColumnKey>) {
        if let Some(press) = &mut self.press {
            press.moved = true;
        }
        if let Some(key) = over {
            self.table.drag_over(key);
        }
    }

    /// 松开鼠标：未移动且仍在原表头上视为点击，否则尝试放置
    pub fn release_header(&mut self, target: Option<ColumnKey>) {
        let Some(press) = self.press.take() else {
            return;
        };

        match target {
            Some(key) if key == press.key && !press.moved => {
                self.table.drag_end();
                self.sort_by(key);
            }
            Some(key) => {
                let moved = self.table.drop_on(Some(key));
                self.table.drag_end();
                if moved {
                    self.follow_column(press.key);
                    self.message = Some(format!(
                        "已将 {} 移到 {} 之前",
                        press.key.definition().label,
                        key.definition().label
                    ));
                }
            }
            None => {
                self.table.drag_end();
                self.message = Some("已取消拖拽".to_string());
            }
        }
    }

    /// 用键盘把光标所在列与相邻列交换位置
    pub fn move_cursor_column(&mut self, delta: isize) {
        let Some(key) = self.cursor_column() else {
            return;
        };
        let Some(neighbor) = self
            .header_cursor
            .checked_add_signed(delta)
            .and_then(|index| self.table.order().get(index))
        else {
            return;
        };

        self.table.drag_start(key);
        self.table.drag_over(neighbor);
        self.table.drop_on(Some(neighbor));
        self.table.drag_end();
        self.follow_column(key);
        self.message = Some(format!("已移动 {}", key.definition().label));
    }

    /// 让表头光标跟随某列
    fn follow_column(&mut self, key: ColumnKey) {
        if let Some(index) = self.table.order().position(key) {
            self.header_cursor = index;
        }
    }

    /// 结束未收到松开事件的拖拽（例如在终端外松开鼠标），返回是否确有拖拽
    fn abandon_drag(&mut self) -> bool {
        let was_dragging = self.table.drag_state().is_dragging() || self.press.is_some();
        self.press = None;
        self.table.drag_end();
        was_dragging
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        if self.abandon_drag() {
            self.message = Some("已取消拖拽".to_string());
        } else {
            self.message = None;
        }
    }
}
