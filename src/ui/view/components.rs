//! 通用 UI 组件
//!
//! 弹窗框架、表头单元格等

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
};

use crate::models::{ColumnDefinition, ColumnKey};
use crate::table::{DragState, SortSpec};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 表头单元格：拖拽手柄、列名、排序箭头
pub fn header_line(column: ColumnDefinition, sort: SortSpec, is_cursor: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled("⋮⋮ ", Style::default().fg(Color::DarkGray)),
        Span::raw(column.label),
    ];
    if let SortSpec::By { key, direction } = sort {
        if key == column.key {
            spans.push(Span::styled(
                format!(" {}", direction.arrow()),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    let line = Line::from(spans);
    if is_cursor {
        line.style(Style::default().add_modifier(Modifier::UNDERLINED))
    } else {
        line
    }
}

/// 表头单元格样式：放置目标高亮，被拖拽的列变暗
pub fn header_style(key: ColumnKey, drag: DragState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    if drag.drop_target_key() == Some(key) {
        base.bg(Color::Blue).fg(Color::White)
    } else if drag.dragged_key() == Some(key) {
        base.bg(Color::DarkGray)
    } else {
        base.bg(Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortDirection;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_arrow_only_on_sorted_column() {
        let sort = SortSpec::By {
            key: ColumnKey::City,
            direction: SortDirection::Descending,
        };
        assert_eq!(
            text(&header_line(ColumnKey::City.definition(), sort, false)),
            "⋮⋮ City ▼"
        );
        assert_eq!(
            text(&header_line(ColumnKey::Email.definition(), sort, false)),
            "⋮⋮ Email"
        );
        assert_eq!(
            text(&header_line(ColumnKey::Id.definition(), SortSpec::Unsorted, false)),
            "⋮⋮ ID"
        );
    }

    #[test]
    fn test_drop_target_highlight_wins_over_dragged() {
        let drag = DragState::Dragging {
            dragged: ColumnKey::Id,
            drop_target: Some(ColumnKey::Id),
        };
        assert_eq!(header_style(ColumnKey::Id, drag).bg, Some(Color::Blue));
        assert_eq!(
            header_style(ColumnKey::Email, drag).bg,
            Some(Color::Black)
        );
        assert_eq!(
            header_style(ColumnKey::Email, DragState::Idle).bg,
            Some(Color::Black)
        );
    }
}
