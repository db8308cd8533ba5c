//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState, Wrap},
};

use super::state::{App, AppMode};
use crate::models::{ColumnKey, Row, format_cell, resolve_cell};
use components::{header_line, header_style, render_dialog_framework};
use layouts::{COLUMN_SPACING, centered_rect, column_widths};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let now = Local::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(8),    // 表格
            Constraint::Length(5), // 详情
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    app.table_area = chunks[1];
    let mut table_state = std::mem::take(&mut app.table_state);
    table_state.select(Some(app.selected_index));

    // 每帧只排序一次，表格与详情共用
    let visible = app.visible_rows(now);
    render_title(frame, app, chunks[0]);
    render_table(frame, app, &visible, &mut table_state, chunks[1], now);
    render_details(frame, app, &visible, chunks[2], now);
    render_help(frame, app, chunks[3]);
    app.table_state = table_state;

    if app.mode == AppMode::Help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(format!("User Data Table  ({} 条记录)", app.rows.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(
    frame: &mut Frame,
    app: &App,
    visible: &[&Row],
    table_state: &mut TableState,
    area: Rect,
    now: DateTime<Local>,
) {
    let order = app.table.order();
    let sort = app.table.sort_spec();
    let drag = app.table.drag_state();

    let header = TableRow::new(order.keys().iter().enumerate().map(|(i, key)| {
        Cell::from(header_line(key.definition(), sort, i == app.header_cursor))
            .style(header_style(*key, drag))
    }));

    let rows: Vec<TableRow> = visible
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = order
                .keys()
                .iter()
                .map(|key| Cell::from(format_cell(&resolve_cell(row, *key, now), *key)));
            let background = if i % 2 == 0 {
                Color::Reset
            } else {
                Color::Indexed(236)
            };
            TableRow::new(cells).style(Style::default().bg(background))
        })
        .collect();

    let title = match sort.key().zip(sort.direction()) {
        Some((key, direction)) => {
            format!("用户 · 按 {} {}", key.definition().label, direction.label())
        }
        None => "用户".to_string(),
    };

    let table = Table::new(rows, column_widths(order))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_stateful_widget(table, area, table_state);
}

fn render_details(
    frame: &mut Frame,
    app: &App,
    visible: &[&Row],
    area: Rect,
    now: DateTime<Local>,
) {
    let content = if let Some(row) = visible.get(app.selected_index) {
        let cell = |key: ColumnKey| format_cell(&resolve_cell(row, key, now), key);
        format!(
            "#{}  {}  <{}>\n城市: {}  注册于: {}  已注册: {}",
            cell(ColumnKey::Id),
            cell(ColumnKey::FullName),
            cell(ColumnKey::Email),
            cell(ColumnKey::City),
            cell(ColumnKey::RegisteredDate),
            cell(ColumnKey::Dsr),
        )
    } else {
        "没有数据".to_string()
    };

    let details = Paragraph::new(content)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match (&app.mode, app.table.drag_state().dragged_key()) {
        (AppMode::Help, _) => "[Esc/?] 关闭帮助",
        (AppMode::Normal, Some(_)) => "松开鼠标放置列  [Esc] 取消拖拽",
        (AppMode::Normal, None) => {
            "[h/l] 选择列  [s] 排序  [</>] 移动列  [j/k] 导航  [?] 帮助  [q] 退出"
        }
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "帮助");

    let text = "\
鼠标
  点击表头            按该列排序（升序 ↔ 降序）
  拖拽表头到另一列    把列移动到目标列之前
  滚轮 / 点击行       浏览数据

键盘
  h/l  ←/→            选择表头列
  s  Enter            按所选列排序
  <  >                将所选列左移 / 右移
  j/k  ↑/↓            上下移动
  PgUp/PgDn  g/G      翻页 / 首行 / 末行
  Esc                 取消拖拽或关闭弹窗
  q                   退出";

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        inner,
    );
}
