//! Headless window manager and session file directory for the script desktop.
//!
//! State changes go through [`reduce_desktop`]; [`DesktopRuntime`] wraps it with host services,
//! change listeners and the remote file operations a UI layer binds to.

pub mod config;
pub mod context_menu;
pub mod directory;
pub mod effect_executor;
pub mod file_queue;
pub mod file_service;
pub mod model;
pub mod notifications;
pub mod reducer;
pub mod runtime;
pub mod window_manager;

pub use config::{ConfigError, ShellConfig, DEFAULT_FILE_CONTENT};
pub use context_menu::{ContextMenuState, ContextMenuTarget, MenuItem};
pub use directory::{FileDirectory, FileRecord};
pub use file_queue::{FileOperationQueue, FileTurn};
pub use file_service::{DirectoryError, FileDirectoryService, FileOperation};
pub use model::*;
pub use notifications::NotificationState;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime::{DesktopRuntime, SubscriptionId};
