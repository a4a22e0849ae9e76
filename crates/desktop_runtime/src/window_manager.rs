//! Window-list transitions shared by the desktop reducer.
//!
//! The window list order is the stacking order. Singleton rules (one Settings, one Learning, one
//! Editor per file) are enforced here in [`open_window`] and nowhere else.

use platform_host::FileId;

use crate::model::{
    DesktopState, OpenWindowRequest, WindowContent, WindowId, WindowPosition, WindowRecord,
};
use crate::reducer::ReducerError;

/// Returns the window that already satisfies `content`'s singleton rule, if any.
pub fn existing_singleton(state: &DesktopState, content: &WindowContent) -> Option<WindowId> {
    match content {
        WindowContent::Editor { file_id, .. } => state.editor_for(file_id),
        WindowContent::Settings | WindowContent::Learning => state
            .windows
            .iter()
            .find(|w| w.kind() == content.kind())
            .map(|w| w.id),
        WindowContent::Output { .. } => None,
    }
}

/// Opens a window, or refocuses the existing one when a singleton rule applies.
///
/// New windows are placed by cascading from the current window count, appended on top and made
/// active.
pub fn open_window(state: &mut DesktopState, req: OpenWindowRequest) -> WindowId {
    if let Some(existing) = existing_singleton(state, &req.content) {
        raise(state, existing);
        return existing;
    }

    let window_id = next_window_id(state);
    let kind = req.content.kind();
    let position = req
        .position
        .unwrap_or_else(|| state.placement.cascade(kind, state.windows.len()));
    state.windows.push(WindowRecord {
        id: window_id,
        title: req.title.unwrap_or_else(|| kind.default_title().to_string()),
        position,
        content: req.content,
    });
    state.active_window = Some(window_id);
    window_id
}

/// Raises `window_id` to the top of the stack and marks it active.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    if state.window(window_id).is_none() {
        return Err(ReducerError::WindowNotFound);
    }
    raise(state, window_id);
    Ok(())
}

/// Removes a window. The active marker is cleared only when it pointed at this window; no other
/// window is promoted.
pub fn close_window(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<WindowRecord, ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    let removed = state.windows.remove(index);
    if state.active_window == Some(window_id) {
        state.active_window = None;
    }
    Ok(removed)
}

/// Places a window at `origin + (dx, dy)`; other windows are untouched.
pub fn move_window(
    state: &mut DesktopState,
    window_id: WindowId,
    origin: WindowPosition,
    dx: i32,
    dy: i32,
) -> Result<(), ReducerError> {
    let window = state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    window.position = origin.offset(dx, dy);
    Ok(())
}

/// Closes every window bound to `file_id` and returns the closed ids.
pub fn close_windows_for_file(state: &mut DesktopState, file_id: &FileId) -> Vec<WindowId> {
    let closed: Vec<WindowId> = state
        .windows
        .iter()
        .filter(|w| w.is_bound_to(file_id))
        .map(|w| w.id)
        .collect();
    state.windows.retain(|w| !w.is_bound_to(file_id));
    if state
        .active_window
        .is_some_and(|active| closed.contains(&active))
    {
        state.active_window = None;
    }
    closed
}

/// Retitles every window bound to `file_id`; returns how many changed.
pub fn rename_windows_for_file(state: &mut DesktopState, file_id: &FileId, title: &str) -> usize {
    let mut renamed = 0;
    for window in state.windows.iter_mut().filter(|w| w.is_bound_to(file_id)) {
        window.title = title.to_string();
        renamed += 1;
    }
    renamed
}

fn raise(state: &mut DesktopState, window_id: WindowId) {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return;
    };
    if index + 1 != state.windows.len() {
        let window = state.windows.remove(index);
        state.windows.push(window);
    }
    state.active_window = Some(window_id);
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}
