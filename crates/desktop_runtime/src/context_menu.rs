//! Right-click menu state for desktop icons and the desktop background.

use platform_host::FileId;

use crate::model::PointerPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMenuTarget {
    File(FileId),
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Rename,
    Delete,
    Refresh,
    NewFile,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Delete => "Delete",
            Self::Refresh => "Refresh",
            Self::NewFile => "New file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    pub position: PointerPosition,
    pub target: ContextMenuTarget,
}

impl ContextMenuState {
    /// Items offered for this menu's target, in display order.
    pub fn items(&self) -> &'static [MenuItem] {
        match self.target {
            ContextMenuTarget::File(_) => &[MenuItem::Rename, MenuItem::Delete],
            ContextMenuTarget::Background => &[MenuItem::Refresh, MenuItem::NewFile],
        }
    }

    pub fn offers(&self, item: MenuItem) -> bool {
        self.items().contains(&item)
    }
}
