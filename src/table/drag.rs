use crate::models::ColumnKey;

/// 表头拖拽的瞬时状态
///
/// 只有 `Dragging` 才携带被拖拽列和放置目标，回到 `Idle` 即同时清空两者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: ColumnKey,
        drop_target: Option<ColumnKey>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragged_key(&self) -> Option<ColumnKey> {
        match self {
            DragState::Dragging { dragged, .. } => Some(*dragged),
            DragState::Idle => None,
        }
    }

    pub fn drop_target_key(&self) -> Option<ColumnKey> {
        match self {
            DragState::Dragging { drop_target, .. } => *drop_target,
            DragState::Idle => None,
        }
    }
}
