use platform_host::FileId;
use serde::{Deserialize, Serialize};

use crate::context_menu::ContextMenuState;
use crate::directory::FileDirectory;
use crate::notifications::NotificationState;

/// Spacing between cascaded windows of one kind.
pub const DEFAULT_CASCADE_STEP: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKind {
    Editor,
    Output,
    Settings,
    Learning,
}

impl WindowKind {
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Editor => "Untitled",
            Self::Output => "Output",
            Self::Settings => "Settings",
            Self::Learning => "Learning Guide",
        }
    }

    /// Kinds limited to one window at a time regardless of payload.
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Settings | Self::Learning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Kind-specific window payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    /// Script editor bound to one stored file; `content` is the live buffer.
    Editor { file_id: FileId, content: String },
    /// Read-only program output.
    Output { text: String },
    Settings,
    Learning,
}

impl WindowContent {
    pub fn kind(&self) -> WindowKind {
        match self {
            Self::Editor { .. } => WindowKind::Editor,
            Self::Output { .. } => WindowKind::Output,
            Self::Settings => WindowKind::Settings,
            Self::Learning => WindowKind::Learning,
        }
    }

    pub fn file_id(&self) -> Option<&FileId> {
        match self {
            Self::Editor { file_id, .. } => Some(file_id),
            Self::Output { .. } | Self::Settings | Self::Learning => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub position: WindowPosition,
    pub content: WindowContent,
}

impl WindowRecord {
    pub fn kind(&self) -> WindowKind {
        self.content.kind()
    }

    pub fn is_bound_to(&self, file_id: &FileId) -> bool {
        self.content.file_id() == Some(file_id)
    }
}

/// Cascade origins for newly opened windows, keyed by kind.
///
/// A new window lands at `origin + step * open_window_count` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPlacement {
    pub step: i32,
    pub editor: WindowPosition,
    pub output: WindowPosition,
    pub settings: WindowPosition,
    pub learning: WindowPosition,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        Self {
            step: DEFAULT_CASCADE_STEP,
            editor: WindowPosition::new(50, 50),
            output: WindowPosition::new(80, 60),
            settings: WindowPosition::new(150, 100),
            learning: WindowPosition::new(100, 80),
        }
    }
}

impl WindowPlacement {
    pub fn cascade(&self, kind: WindowKind, open_windows: usize) -> WindowPosition {
        let origin = match kind {
            WindowKind::Editor => self.editor,
            WindowKind::Output => self.output,
            WindowKind::Settings => self.settings,
            WindowKind::Learning => self.learning,
        };
        let shift = self.step.saturating_mul(open_windows as i32);
        origin.offset(shift, shift)
    }
}

/// Text-entry dialogs raised from the context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogState {
    NewFile { name: String },
    Rename { file_id: FileId, name: String },
}

impl DialogState {
    pub fn input(&self) -> &str {
        match self {
            Self::NewFile { name } | Self::Rename { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Stacking order; the last window is drawn on top.
    pub windows: Vec<WindowRecord>,
    pub active_window: Option<WindowId>,
    pub placement: WindowPlacement,
    pub directory: FileDirectory,
    pub notification: NotificationState,
    pub dialog: Option<DialogState>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_placement(WindowPlacement::default())
    }
}

impl DesktopState {
    pub fn with_placement(placement: WindowPlacement) -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            active_window: None,
            placement,
            directory: FileDirectory::default(),
            notification: NotificationState::default(),
            dialog: None,
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn top_window_id(&self) -> Option<WindowId> {
        self.windows.last().map(|w| w.id)
    }

    pub fn editor_for(&self, file_id: &FileId) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.is_bound_to(file_id))
            .map(|w| w.id)
    }

    pub fn count_of(&self, kind: WindowKind) -> usize {
        self.windows.iter().filter(|w| w.kind() == kind).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub content: WindowContent,
    pub title: Option<String>,
    pub position: Option<WindowPosition>,
}

impl OpenWindowRequest {
    pub fn new(content: WindowContent) -> Self {
        Self {
            content,
            title: None,
            position: None,
        }
    }

    pub fn settings() -> Self {
        Self::new(WindowContent::Settings)
    }

    pub fn learning() -> Self {
        Self::new(WindowContent::Learning)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(WindowContent::Output { text: text.into() })
    }

    pub fn editor(file_id: FileId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new(WindowContent::Editor {
                file_id,
                content: content.into(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

/// Title-bar drag machine. Only one window can be dragged at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.window_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub drag: DragState,
    pub context_menu: Option<ContextMenuState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_shifts_by_step_per_open_window() {
        let placement = WindowPlacement::default();
        assert_eq!(
            placement.cascade(WindowKind::Editor, 0),
            WindowPosition::new(50, 50)
        );
        assert_eq!(
            placement.cascade(WindowKind::Settings, 2),
            WindowPosition::new(190, 140)
        );
    }

    #[test]
    fn only_editor_content_is_bound_to_a_file() {
        let editor = WindowContent::Editor {
            file_id: FileId::from("7"),
            content: String::new(),
        };
        assert_eq!(editor.file_id(), Some(&FileId::from("7")));
        assert_eq!(WindowContent::Learning.file_id(), None);
        assert!(WindowKind::Learning.is_singleton());
        assert!(!WindowKind::Editor.is_singleton());
    }
}
