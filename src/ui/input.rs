//! 事件映射 (Input -> Action)
//!
//! 将键盘与鼠标事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{App, AppMode};
use super::view::layouts::{body_row_at, header_at};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::SelectFirst),
            KeyCode::Char('G') | KeyCode::End => Some(Action::SelectLast),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Char('s') | KeyCode::Enter => Some(Action::SortCursorColumn),
            KeyCode::Char('<') => Some(Action::MoveColumnLeft),
            KeyCode::Char('>') => Some(Action::MoveColumnRight),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
        AppMode::Help => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

/// 根据指针位置把鼠标事件转换为 Action
pub fn get_mouse_action(app: &App, event: MouseEvent) -> Option<Action> {
    if app.mode != AppMode::Normal {
        return None;
    }

    let order = app.table.order();
    let header = header_at(app.table_area, order, event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => match header {
            Some(key) => Some(Action::HeaderPress(key)),
            None => body_row_at(
                app.table_area,
                app.table_state.offset(),
                event.column,
                event.row,
            )
            .map(Action::SelectRow)
            // 上一次拖拽的松开事件丢失时，新的按下就是它的终点
            .or_else(|| app.press.map(|_| Action::HeaderRelease(None))),
        },
        MouseEventKind::Drag(MouseButton::Left) if app.press.is_some() => {
            Some(Action::HeaderDrag(header))
        }
        MouseEventKind::Up(MouseButton::Left) if app.press.is_some() => {
            Some(Action::HeaderRelease(header))
        }
        MouseEventKind::ScrollDown => Some(Action::MoveSelectionDown),
        MouseEventKind::ScrollUp => Some(Action::MoveSelectionUp),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) -> io::Result<bool> {
    if let Some(action) = get_mouse_action(app, event) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnKey;
    use crate::models::tests::make_row;
    use crate::table::{ColumnOrder, DragState};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(Vec::new(), ColumnOrder::default());
        app.table_area = Rect::new(0, 0, 200, 20);
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn left_down(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn left_up(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    #[test]
    fn test_press_on_header() {
        let app = app();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 5, 1);
        assert_eq!(
            get_mouse_action(&app, event),
            Some(Action::HeaderPress(ColumnKey::Id))
        );
    }

    #[test]
    fn test_press_on_body_selects_row() {
        let app = app();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 5, 4);
        assert_eq!(get_mouse_action(&app, event), Some(Action::SelectRow(2)));
    }

    #[test]
    fn test_drag_ignored_without_press() {
        let app = app();
        let event = mouse(MouseEventKind::Drag(MouseButton::Left), 5, 1);
        assert_eq!(get_mouse_action(&app, event), None);
    }

    #[test]
    fn test_release_outside_header_has_no_target() {
        let mut app = app();
        app.dispatch(Action::HeaderPress(ColumnKey::Email));
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 5, 10);
        assert_eq!(
            get_mouse_action(&app, event),
            Some(Action::HeaderRelease(None))
        );
    }

    #[test]
    fn test_press_outside_table_ends_pending_drag() {
        let mut app = app();
        handle_mouse_event(&mut app, left_down(5, 1)).unwrap();
        assert!(app.table.drag_state().is_dragging());

        handle_mouse_event(&mut app, left_down(5, 30)).unwrap();
        assert_eq!(app.table.drag_state(), DragState::Idle);
        assert_eq!(app.press, None);
    }

    #[test]
    fn test_press_outside_table_without_drag_is_ignored() {
        let app = app();
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 5, 30);
        assert_eq!(get_mouse_action(&app, event), None);
    }

    #[test]
    fn test_help_key_during_drag_leaves_no_stuck_header() {
        let mut app = app();
        handle_mouse_event(&mut app, left_down(5, 1)).unwrap();
        handle_key_event(&mut app, KeyCode::Char('?')).unwrap();
        // 帮助模式下松开鼠标不会被处理
        handle_mouse_event(&mut app, left_up(5, 10)).unwrap();
        handle_key_event(&mut app, KeyCode::Esc).unwrap();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.table.drag_state(), DragState::Idle);
        assert_eq!(app.table.order(), &ColumnOrder::default());
    }

    #[test]
    fn test_body_press_after_lost_release_leaves_no_stuck_header() {
        let mut app = app();
        app.rows = vec![
            make_row(1, "Carol", "Young", "Denver", 40),
            make_row(2, "Alice", "Baker", "Austin", 400),
            make_row(3, "Bob", "Young", "Chicago", 5),
        ];
        handle_mouse_event(&mut app, left_down(5, 1)).unwrap();
        handle_mouse_event(&mut app, left_down(5, 4)).unwrap();

        assert_eq!(app.table.drag_state(), DragState::Idle);
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_help_mode_swallows_mouse() {
        let mut app = app();
        app.mode = AppMode::Help;
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 5, 1);
        assert_eq!(get_mouse_action(&app, event), None);
    }

    #[test]
    fn test_help_mode_keys() {
        assert_eq!(
            get_action(&AppMode::Help, KeyCode::Esc),
            Some(Action::ToggleHelp)
        );
        assert_eq!(get_action(&AppMode::Help, KeyCode::Char('s')), None);
        assert_eq!(
            get_action(&AppMode::Normal, KeyCode::Char('>')),
            Some(Action::MoveColumnRight)
        );
    }
}
