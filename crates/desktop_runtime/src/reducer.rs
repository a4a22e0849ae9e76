//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{FileDocument, FileId, FileSummary};
use thiserror::Error;

use crate::context_menu::{ContextMenuState, ContextMenuTarget, MenuItem};
use crate::directory::FileRecord;
use crate::model::{
    DesktopState, DialogState, DragSession, DragState, InteractionState, OpenWindowRequest,
    PointerPosition, WindowContent, WindowId,
};
use crate::notifications::{
    MSG_DESKTOP_REFRESHED, MSG_EMPTY_FILE_NAME, MSG_FILE_DELETED, MSG_FILE_RENAMED, MSG_FILE_SAVED,
};
use crate::window_manager::{
    close_window, close_windows_for_file, focus_window, move_window, open_window,
    rename_windows_for_file,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or refocus the one that already satisfies the request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Pointer went down on a window's title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer moved anywhere on the desktop surface.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer went up anywhere on the desktop surface.
    EndMove,
    /// Secondary click on a file icon or on the background.
    OpenContextMenu {
        /// Screen position of the click.
        position: PointerPosition,
        /// What was clicked.
        target: ContextMenuTarget,
    },
    /// Any primary click outside the menu.
    DismissContextMenu,
    /// A menu item was chosen.
    SelectMenuItem {
        /// Chosen item.
        item: MenuItem,
    },
    /// Show the empty "new file" dialog.
    OpenNewFileDialog,
    /// Show the rename dialog pre-filled with the file's current name.
    OpenRenameDialog {
        /// File to rename.
        file_id: FileId,
    },
    /// Replace the dialog's text input.
    SetDialogInput {
        /// New input text.
        text: String,
    },
    /// Close the dialog without side effects.
    CancelDialog,
    /// Confirm the dialog.
    SubmitDialog,
    /// Replace an editor window's buffer.
    SetEditorContent {
        /// Editor window.
        window_id: WindowId,
        /// New buffer text.
        content: String,
    },
    /// Replace the status message and show the panel.
    ShowNotification {
        /// Message text.
        message: String,
    },
    /// Hide the status panel, keeping its message.
    HideNotification,
    /// Flip the status panel's visibility.
    ToggleNotification,
    /// A directory listing arrived.
    DirectoryLoaded {
        /// Files owned by the session.
        files: Vec<FileSummary>,
        /// Whether to confirm the refresh in the status panel.
        announce: bool,
        /// Directory revision when the listing was requested.
        revision: u64,
    },
    /// The store assigned an id to a new file.
    FileCreated {
        /// The new entry.
        record: FileRecord,
    },
    /// File content was fetched for a newly opened editor.
    EditorLoaded {
        /// Fetched document.
        document: FileDocument,
    },
    /// The store acknowledged a save.
    FileSaved {
        /// Saved file.
        file_id: FileId,
        /// Name sent with the save; the store now holds it.
        name: String,
        /// Content that is now authoritative.
        content: String,
    },
    /// The store acknowledged a rename.
    FileRenamed {
        /// Renamed file.
        file_id: FileId,
        /// New name.
        name: String,
    },
    /// The store acknowledged a delete.
    FileDeleted {
        /// Deleted file.
        file_id: FileId,
    },
    /// The store reported a file as absent; drop every local reference to it.
    FileEvicted {
        /// Missing file.
        file_id: FileId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Re-list the session's files.
    RefreshDirectory,
    /// Create a file with the default content.
    CreateFile {
        /// Requested name.
        name: String,
    },
    /// Rename a stored file.
    RenameFile {
        /// File to rename.
        file_id: FileId,
        /// New name.
        name: String,
    },
    /// Delete a stored file.
    DeleteFile {
        /// File to delete.
        file_id: FileId,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The target window exists but is not an editor.
    #[error("window is not an editor")]
    NotAnEditor,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the only place desktop state changes. Remote completions arrive as actions
/// too, so a rename's directory update and window retitle land in one transition.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a window that is missing or of the wrong
/// kind.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            open_window(state, req);
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id)?;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let position_start = state
                .window(window_id)
                .ok_or(ReducerError::WindowNotFound)?
                .position;
            focus_window(state, window_id)?;
            interaction.drag = DragState::Dragging(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let DragState::Dragging(session) = &interaction.drag {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                move_window(state, session.window_id, session.position_start, dx, dy)?;
            }
        }
        DesktopAction::EndMove => {
            interaction.drag = DragState::Idle;
        }
        DesktopAction::OpenContextMenu { position, target } => {
            interaction.context_menu = Some(ContextMenuState { position, target });
        }
        DesktopAction::DismissContextMenu => {
            interaction.context_menu = None;
        }
        DesktopAction::SelectMenuItem { item } => {
            if let Some(menu) = interaction.context_menu.take() {
                if menu.offers(item) {
                    apply_menu_item(state, menu.target, item, &mut effects);
                }
            }
        }
        DesktopAction::OpenNewFileDialog => {
            state.dialog = Some(DialogState::NewFile {
                name: String::new(),
            });
        }
        DesktopAction::OpenRenameDialog { file_id } => open_rename_dialog(state, file_id),
        DesktopAction::SetDialogInput { text } => match state.dialog.as_mut() {
            Some(DialogState::NewFile { name }) | Some(DialogState::Rename { name, .. }) => {
                *name = text;
            }
            None => {}
        },
        DesktopAction::CancelDialog => {
            state.dialog = None;
        }
        DesktopAction::SubmitDialog => {
            if let Some(dialog) = state.dialog.take() {
                let name = dialog.input().trim().to_string();
                if name.is_empty() {
                    state.notification.show(MSG_EMPTY_FILE_NAME);
                    state.dialog = Some(dialog);
                } else {
                    effects.push(match dialog {
                        DialogState::NewFile { .. } => RuntimeEffect::CreateFile { name },
                        DialogState::Rename { file_id, .. } => {
                            RuntimeEffect::RenameFile { file_id, name }
                        }
                    });
                }
            }
        }
        DesktopAction::SetEditorContent { window_id, content } => {
            let window = state
                .windows
                .iter_mut()
                .find(|w| w.id == window_id)
                .ok_or(ReducerError::WindowNotFound)?;
            match &mut window.content {
                WindowContent::Editor { content: buffer, .. } => *buffer = content,
                _ => return Err(ReducerError::NotAnEditor),
            }
        }
        DesktopAction::ShowNotification { message } => state.notification.show(message),
        DesktopAction::HideNotification => state.notification.hide(),
        DesktopAction::ToggleNotification => state.notification.toggle(),
        DesktopAction::DirectoryLoaded {
            files,
            announce,
            revision,
        } => {
            // A create, rename or delete acknowledged after the request may be missing from it.
            if revision == state.directory.revision() {
                state.directory.replace_all(files);
                if announce {
                    state.notification.show(MSG_DESKTOP_REFRESHED);
                }
            }
        }
        DesktopAction::FileCreated { record } => state.directory.insert(record),
        DesktopAction::EditorLoaded { document } => {
            state.directory.record_document(&document);
            open_window(
                state,
                OpenWindowRequest::editor(document.id, document.name, document.content),
            );
        }
        DesktopAction::FileSaved {
            file_id,
            name,
            content,
        } => {
            if state.directory.record_content(&file_id, &content)
                && state.directory.get(&file_id).is_some_and(|entry| entry.name != name)
            {
                state.directory.rename(&file_id, &name);
            }
            rename_windows_for_file(state, &file_id, &name);
            state.notification.show(MSG_FILE_SAVED);
        }
        DesktopAction::FileRenamed { file_id, name } => {
            state.directory.rename(&file_id, &name);
            rename_windows_for_file(state, &file_id, &name);
            state.notification.show(MSG_FILE_RENAMED);
        }
        DesktopAction::FileDeleted { file_id } => {
            forget_file(state, &file_id);
            state.notification.show(MSG_FILE_DELETED);
        }
        DesktopAction::FileEvicted { file_id } => forget_file(state, &file_id),
    }

    drop_dangling_interaction(state, interaction);
    Ok(effects)
}

fn apply_menu_item(
    state: &mut DesktopState,
    target: ContextMenuTarget,
    item: MenuItem,
    effects: &mut Vec<RuntimeEffect>,
) {
    match (target, item) {
        (ContextMenuTarget::File(file_id), MenuItem::Rename) => open_rename_dialog(state, file_id),
        (ContextMenuTarget::File(file_id), MenuItem::Delete) => {
            effects.push(RuntimeEffect::DeleteFile { file_id });
        }
        (ContextMenuTarget::Background, MenuItem::Refresh) => {
            effects.push(RuntimeEffect::RefreshDirectory);
        }
        (ContextMenuTarget::Background, MenuItem::NewFile) => {
            state.dialog = Some(DialogState::NewFile {
                name: String::new(),
            });
        }
        _ => {}
    }
}

fn open_rename_dialog(state: &mut DesktopState, file_id: FileId) {
    if let Some(record) = state.directory.get(&file_id) {
        state.dialog = Some(DialogState::Rename {
            name: record.name.clone(),
            file_id,
        });
    }
}

fn forget_file(state: &mut DesktopState, file_id: &FileId) {
    state.directory.remove(file_id);
    close_windows_for_file(state, file_id);
    if matches!(&state.dialog, Some(DialogState::Rename { file_id: target, .. }) if target == file_id)
    {
        state.dialog = None;
    }
}

/// Resets interaction state whose target no longer exists (a closed dragged window, a menu for a
/// removed file).
fn drop_dangling_interaction(state: &DesktopState, interaction: &mut InteractionState) {
    if let Some(window_id) = interaction.drag.window_id() {
        if state.window(window_id).is_none() {
            interaction.drag = DragState::Idle;
        }
    }
    if let Some(ContextMenuState {
        target: ContextMenuTarget::File(file_id),
        ..
    }) = &interaction.context_menu
    {
        if !state.directory.contains(file_id) {
            interaction.context_menu = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowKind, WindowPosition};

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState) -> WindowId {
        dispatch(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::output("")),
        );
        state.windows.last().expect("window").id
    }

    fn seeded(names: &[(&str, &str)]) -> DesktopState {
        let mut state = DesktopState::default();
        state.directory.replace_all(
            names
                .iter()
                .map(|(id, name)| FileSummary {
                    id: FileId::from(*id),
                    name: name.to_string(),
                })
                .collect(),
        );
        state
    }

    fn open_editor(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        id: &str,
    ) -> WindowId {
        dispatch(
            state,
            interaction,
            DesktopAction::EditorLoaded {
                document: FileDocument {
                    id: FileId::from(id),
                    name: format!("{id}.mlm"),
                    content: "print".to_string(),
                },
            },
        );
        state.editor_for(&FileId::from(id)).expect("editor")
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_moves_only_the_dragged_window_relative_to_its_start() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let other = open(&mut state, &mut interaction);
        let win = open(&mut state, &mut interaction);
        let other_before = state.window(other).unwrap().position;
        let start = state.window(win).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(10, 10),
            },
        );
        assert!(interaction.drag.is_dragging());
        for (x, y) in [(12, 15), (30, 2), (35, 50)] {
            dispatch(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove {
                    pointer: pointer(x, y),
                },
            );
        }

        assert_eq!(state.window(win).unwrap().position, start.offset(25, 40));
        assert_eq!(state.window(other).unwrap().position, other_before);

        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.drag, DragState::Idle);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(500, 500),
            },
        );
        assert_eq!(state.window(win).unwrap().position, start.offset(25, 40));
    }

    #[test]
    fn begin_move_raises_the_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction);
        let _second = open(&mut state, &mut interaction);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: first,
                pointer: pointer(0, 0),
            },
        );

        assert_eq!(state.top_window_id(), Some(first));
        assert_eq!(state.active_window, Some(first));
        assert_eq!(
            interaction.drag,
            DragState::Dragging(DragSession {
                window_id: first,
                pointer_start: pointer(0, 0),
                position_start: WindowPosition::new(80, 60),
            })
        );
    }

    #[test]
    fn closing_the_dragged_window_returns_drag_to_idle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(0, 0),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );

        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn begin_move_on_missing_window_is_an_error() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId(99),
                pointer: pointer(0, 0),
            },
        )
        .expect_err("missing window");
        assert_eq!(err, ReducerError::WindowNotFound);
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn file_menu_delete_dismisses_then_emits_one_effect() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: pointer(5, 6),
                target: ContextMenuTarget::File(FileId::from("1")),
            },
        );
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::Delete,
            },
        );

        assert_eq!(interaction.context_menu, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::DeleteFile {
                file_id: FileId::from("1")
            }]
        );
    }

    #[test]
    fn file_menu_rename_prefills_dialog_with_current_name() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: pointer(0, 0),
                target: ContextMenuTarget::File(FileId::from("1")),
            },
        );
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::Rename,
            },
        );

        assert!(effects.is_empty());
        assert_eq!(
            state.dialog,
            Some(DialogState::Rename {
                file_id: FileId::from("1"),
                name: "a.mlm".to_string(),
            })
        );
    }

    #[test]
    fn background_menu_offers_refresh_and_new_file_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let background = DesktopAction::OpenContextMenu {
            position: pointer(0, 0),
            target: ContextMenuTarget::Background,
        };

        dispatch(&mut state, &mut interaction, background.clone());
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::Refresh,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::RefreshDirectory]);

        dispatch(&mut state, &mut interaction, background.clone());
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::Delete,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction.context_menu, None);

        dispatch(&mut state, &mut interaction, background);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::NewFile,
            },
        );
        assert_eq!(
            state.dialog,
            Some(DialogState::NewFile {
                name: String::new()
            })
        );
    }

    #[test]
    fn dismissing_the_menu_has_no_side_effects() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: pointer(0, 0),
                target: ContextMenuTarget::File(FileId::from("1")),
            },
        );
        let effects = dispatch(&mut state, &mut interaction, DesktopAction::DismissContextMenu);

        assert!(effects.is_empty());
        assert_eq!(interaction.context_menu, None);
        assert_eq!(state, before);
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SelectMenuItem {
                item: MenuItem::Delete,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn submitting_an_empty_name_keeps_dialog_and_emits_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, DesktopAction::OpenNewFileDialog);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetDialogInput {
                text: "   ".to_string(),
            },
        );
        let effects = dispatch(&mut state, &mut interaction, DesktopAction::SubmitDialog);

        assert!(effects.is_empty());
        assert!(state.dialog.is_some());
        assert_eq!(state.notification.message, MSG_EMPTY_FILE_NAME);
        assert!(state.notification.visible);
    }

    #[test]
    fn submitting_dialogs_emits_create_and_rename() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, DesktopAction::OpenNewFileDialog);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetDialogInput {
                text: "test.mlm".to_string(),
            },
        );
        let effects = dispatch(&mut state, &mut interaction, DesktopAction::SubmitDialog);
        assert_eq!(
            effects,
            vec![RuntimeEffect::CreateFile {
                name: "test.mlm".to_string()
            }]
        );
        assert_eq!(state.dialog, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenRenameDialog {
                file_id: FileId::from("1"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetDialogInput {
                text: "b.mlm".to_string(),
            },
        );
        let effects = dispatch(&mut state, &mut interaction, DesktopAction::SubmitDialog);
        assert_eq!(
            effects,
            vec![RuntimeEffect::RenameFile {
                file_id: FileId::from("1"),
                name: "b.mlm".to_string(),
            }]
        );
    }

    #[test]
    fn rename_ack_updates_directory_and_titles_in_one_transition() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        let editor = open_editor(&mut state, &mut interaction, "1");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileRenamed {
                file_id: FileId::from("1"),
                name: "b.mlm".to_string(),
            },
        );

        assert_eq!(state.directory.get(&FileId::from("1")).unwrap().name, "b.mlm");
        assert_eq!(state.window(editor).unwrap().title, "b.mlm");
        assert_eq!(state.notification.message, MSG_FILE_RENAMED);
    }

    #[test]
    fn delete_ack_removes_entry_and_every_bound_window() {
        let mut state = seeded(&[("1", "a.mlm"), ("2", "b.mlm")]);
        let mut interaction = InteractionState::default();
        let doomed = open_editor(&mut state, &mut interaction, "1");
        let kept = open_editor(&mut state, &mut interaction, "2");
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: doomed,
                pointer: pointer(0, 0),
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileDeleted {
                file_id: FileId::from("1"),
            },
        );

        assert!(!state.directory.contains(&FileId::from("1")));
        assert_eq!(state.window(doomed), None);
        assert!(state.window(kept).is_some());
        assert_eq!(interaction.drag, DragState::Idle);
        assert!(state
            .windows
            .iter()
            .all(|w| w.content.file_id() != Some(&FileId::from("1"))));
    }

    #[test]
    fn eviction_closes_rename_dialog_and_file_menu_for_missing_file() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenRenameDialog {
                file_id: FileId::from("1"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: pointer(0, 0),
                target: ContextMenuTarget::File(FileId::from("1")),
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileEvicted {
                file_id: FileId::from("1"),
            },
        );

        assert_eq!(state.dialog, None);
        assert_eq!(interaction.context_menu, None);
        assert_eq!(state.notification.message, "");
    }

    #[test]
    fn editor_buffer_edits_only_apply_to_editors() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        let editor = open_editor(&mut state, &mut interaction, "1");
        let output = open(&mut state, &mut interaction);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetEditorContent {
                window_id: editor,
                content: "changed".to_string(),
            },
        );
        assert_eq!(
            state.window(editor).unwrap().content,
            WindowContent::Editor {
                file_id: FileId::from("1"),
                content: "changed".to_string(),
            }
        );

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetEditorContent {
                window_id: output,
                content: String::new(),
            },
        )
        .expect_err("output is not an editor");
        assert_eq!(err, ReducerError::NotAnEditor);
    }

    #[test]
    fn refresh_announces_only_when_asked() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let files = vec![FileSummary {
            id: FileId::from("1"),
            name: "a.mlm".to_string(),
        }];

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DirectoryLoaded {
                files: files.clone(),
                announce: false,
                revision: 0,
            },
        );
        assert!(!state.notification.visible);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DirectoryLoaded {
                files,
                announce: true,
                revision: 0,
            },
        );
        assert_eq!(state.notification.message, MSG_DESKTOP_REFRESHED);
        assert_eq!(state.directory.len(), 1);
        assert_eq!(state.count_of(WindowKind::Editor), 0);
    }

    #[test]
    fn listing_requested_before_a_delete_ack_is_ignored() {
        let mut state = seeded(&[("1", "a.mlm"), ("2", "b.mlm")]);
        let mut interaction = InteractionState::default();
        let requested_at = state.directory.revision();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileDeleted {
                file_id: FileId::from("1"),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DirectoryLoaded {
                files: vec![
                    FileSummary {
                        id: FileId::from("1"),
                        name: "a.mlm".to_string(),
                    },
                    FileSummary {
                        id: FileId::from("2"),
                        name: "b.mlm".to_string(),
                    },
                ],
                announce: true,
                revision: requested_at,
            },
        );

        assert!(!state.directory.contains(&FileId::from("1")));
        assert_eq!(state.notification.message, MSG_FILE_DELETED);
    }

    #[test]
    fn listing_requested_before_a_rename_ack_keeps_the_new_name() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        let editor = open_editor(&mut state, &mut interaction, "1");
        let requested_at = state.directory.revision();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileRenamed {
                file_id: FileId::from("1"),
                name: "b.mlm".to_string(),
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::DirectoryLoaded {
                files: vec![FileSummary {
                    id: FileId::from("1"),
                    name: "a.mlm".to_string(),
                }],
                announce: false,
                revision: requested_at,
            },
        );

        assert_eq!(state.directory.get(&FileId::from("1")).unwrap().name, "b.mlm");
        assert_eq!(state.window(editor).unwrap().title, "b.mlm");
    }

    #[test]
    fn save_ack_applies_the_sent_name_to_cache_and_titles() {
        let mut state = seeded(&[("1", "a.mlm")]);
        let mut interaction = InteractionState::default();
        let editor = open_editor(&mut state, &mut interaction, "1");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FileSaved {
                file_id: FileId::from("1"),
                name: "c.mlm".to_string(),
                content: "new".to_string(),
            },
        );

        let entry = state.directory.get(&FileId::from("1")).unwrap();
        assert_eq!(entry.name, "c.mlm");
        assert_eq!(entry.content.as_deref(), Some("new"));
        assert_eq!(state.window(editor).unwrap().title, "c.mlm");
        assert_eq!(state.notification.message, MSG_FILE_SAVED);
    }
}
