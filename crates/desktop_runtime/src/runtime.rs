//! Long-lived desktop store and its remote operations.
//!
//! [`DesktopRuntime`] owns the reducer container, the queue of reducer-emitted effects, change
//! listeners and the injected host services. Remote operations are exposed as `'static` futures
//! so a UI layer can hand them to `spawn_local`. Operations that address one file take their
//! place in that file's queue when they are called, not when they are first polled.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::logging;
use platform_host::{
    shell_session, ExecutionService, FileId, HostServices, HostStrategy, SessionContext,
};

use crate::config::ShellConfig;
use crate::file_service::{DirectoryError, FileDirectoryService, FileOperation};
use crate::model::{DesktopState, InteractionState, WindowContent, WindowId};
use crate::notifications::{MSG_EXECUTION_UNREACHABLE, MSG_RUNNING};
use crate::reducer::{reduce_desktop, DesktopAction, RuntimeEffect};

type Listener = Rc<dyn Fn(&DesktopState, &InteractionState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`DesktopRuntime::subscribe`].
pub struct SubscriptionId(u64);

struct RuntimeInner {
    state: RefCell<DesktopState>,
    interaction: RefCell<InteractionState>,
    effects: RefCell<Vec<RuntimeEffect>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
    files: FileDirectoryService,
    execution: Rc<dyn ExecutionService>,
    host_strategy: HostStrategy,
}

#[derive(Clone)]
/// Shared handle to one desktop shell's state and services.
pub struct DesktopRuntime {
    inner: Rc<RuntimeInner>,
}

impl DesktopRuntime {
    /// Builds a runtime for the current shell session.
    pub fn new(host: HostServices, config: &ShellConfig) -> Self {
        Self::with_session(host, config, shell_session())
    }

    /// Builds a runtime bound to an explicit session.
    pub fn with_session(host: HostServices, config: &ShellConfig, session: SessionContext) -> Self {
        logging::log!(
            "desktop runtime starting with {} host services",
            host.host_strategy.as_str()
        );
        Self {
            inner: Rc::new(RuntimeInner {
                state: RefCell::new(DesktopState::with_placement(config.placement)),
                interaction: RefCell::new(InteractionState::default()),
                effects: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                files: FileDirectoryService::new(
                    host.files,
                    session,
                    config.default_file_content.clone(),
                ),
                execution: host.execution,
                host_strategy: host.host_strategy,
            }),
        }
    }

    pub fn host_strategy(&self) -> HostStrategy {
        self.inner.host_strategy
    }

    pub fn files(&self) -> &FileDirectoryService {
        &self.inner.files
    }

    /// Returns a snapshot of the desktop state.
    pub fn state(&self) -> DesktopState {
        self.inner.state.borrow().clone()
    }

    /// Returns a snapshot of the pointer/menu interaction state.
    pub fn interaction(&self) -> InteractionState {
        self.inner.interaction.borrow().clone()
    }

    pub fn with_state<R>(&self, read: impl FnOnce(&DesktopState) -> R) -> R {
        read(&self.inner.state.borrow())
    }

    /// Applies an action. The reducer works on a copy; state is committed only when it succeeds.
    pub fn dispatch(&self, action: DesktopAction) {
        let mut desktop = self.state();
        let mut ui = self.interaction();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                let changed = desktop != *self.inner.state.borrow()
                    || ui != *self.inner.interaction.borrow();
                if changed {
                    *self.inner.state.borrow_mut() = desktop;
                    *self.inner.interaction.borrow_mut() = ui;
                }
                self.inner.effects.borrow_mut().extend(new_effects);
                if changed {
                    self.notify();
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    }

    /// Removes and returns every queued effect in emission order.
    pub fn take_effects(&self) -> Vec<RuntimeEffect> {
        std::mem::take(&mut *self.inner.effects.borrow_mut())
    }

    /// Registers a listener called after every state change.
    pub fn subscribe(
        &self,
        listener: impl Fn(&DesktopState, &InteractionState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener; returns `false` when it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        if listeners.is_empty() {
            return;
        }
        let desktop = self.state();
        let ui = self.interaction();
        for listener in listeners {
            listener(&desktop, &ui);
        }
    }

    /// Loads the session's files into the directory cache.
    pub fn boot(&self) -> impl Future<Output = ()> + 'static {
        self.refresh_directory(false)
    }

    /// Re-lists the session's files, replacing the cache.
    ///
    /// A listing that was in flight while a create, rename or delete was acknowledged may predate
    /// it, so it is discarded and requested again.
    pub fn refresh_directory(&self, announce: bool) -> impl Future<Output = ()> + 'static {
        let mut revision = self.with_state(|state| state.directory.revision());
        let runtime = self.clone();
        async move {
            loop {
                let files = match runtime.inner.files.list().await {
                    Ok(files) => files,
                    Err(err) => {
                        runtime.report_failure(FileOperation::List, None, err);
                        return;
                    }
                };
                let current = runtime.with_state(|state| state.directory.revision());
                if current != revision {
                    logging::log!(
                        "directory listing superseded at revision {current}; listing again"
                    );
                    revision = current;
                    continue;
                }
                runtime.dispatch(DesktopAction::DirectoryLoaded {
                    files,
                    announce,
                    revision,
                });
                return;
            }
        }
    }

    /// Opens an editor for `file_id`, or focuses the one already open.
    ///
    /// Content is fetched only when no editor for the file exists once this operation's turn
    /// comes up, so concurrent opens of one file fetch once.
    pub fn open_file(&self, file_id: FileId) -> impl Future<Output = ()> + 'static {
        let turn = self.inner.files.turn(&file_id);
        let runtime = self.clone();
        async move {
            let _turn = turn.await;
            if let Some(window_id) = runtime.with_state(|state| state.editor_for(&file_id)) {
                runtime.dispatch(DesktopAction::FocusWindow { window_id });
                return;
            }
            match runtime.inner.files.fetch(&file_id).await {
                Ok(document) => runtime.dispatch(DesktopAction::EditorLoaded { document }),
                Err(err) => runtime.report_failure(FileOperation::Open, Some(&file_id), err),
            }
        }
    }

    /// Creates a file with the default content, then opens it.
    pub fn create_file(&self, name: String) -> impl Future<Output = ()> + 'static {
        let runtime = self.clone();
        async move {
            match runtime.inner.files.create(&name).await {
                Ok(record) => {
                    let file_id = record.id.clone();
                    runtime.dispatch(DesktopAction::FileCreated { record });
                    runtime.open_file(file_id).await;
                }
                Err(err) => runtime.report_failure(FileOperation::Create, None, err),
            }
        }
    }

    /// Stores `name` and `content` for `file_id`.
    pub fn save_file(
        &self,
        file_id: FileId,
        name: String,
        content: String,
    ) -> impl Future<Output = ()> + 'static {
        self.queue_save(file_id, Some(name), content)
    }

    /// Saves an editor window's buffer as it is now.
    ///
    /// The name is resolved when the save's turn comes up, so a rename queued ahead of it is not
    /// undone.
    pub fn save_editor(&self, window_id: WindowId) -> LocalBoxFuture<'static, ()> {
        match self.editor_snapshot(window_id) {
            Some((file_id, content)) => self.queue_save(file_id, None, content).boxed_local(),
            None => {
                logging::warn!("save ignored: window {} is not an editor", window_id.0);
                async {}.boxed_local()
            }
        }
    }

    pub fn rename_file(&self, file_id: FileId, name: String) -> impl Future<Output = ()> + 'static {
        let turn = self.inner.files.turn(&file_id);
        let runtime = self.clone();
        async move {
            let _turn = turn.await;
            match runtime.inner.files.rename(&file_id, &name).await {
                Ok(name) => runtime.dispatch(DesktopAction::FileRenamed { file_id, name }),
                Err(err) => runtime.report_failure(FileOperation::Rename, Some(&file_id), err),
            }
        }
    }

    pub fn delete_file(&self, file_id: FileId) -> impl Future<Output = ()> + 'static {
        let turn = self.inner.files.turn(&file_id);
        let runtime = self.clone();
        async move {
            let _turn = turn.await;
            match runtime.inner.files.delete(&file_id).await {
                Ok(()) => runtime.dispatch(DesktopAction::FileDeleted { file_id }),
                Err(err) => runtime.report_failure(FileOperation::Delete, Some(&file_id), err),
            }
        }
    }

    /// Sends source text to the execution service and shows the result in the status panel.
    pub fn run_source(&self, source_text: String) -> impl Future<Output = ()> + 'static {
        self.dispatch(DesktopAction::ShowNotification {
            message: MSG_RUNNING.to_string(),
        });
        let runtime = self.clone();
        async move {
            let message = match runtime.inner.execution.run(&source_text).await {
                Ok(output) => output,
                Err(err) => {
                    logging::warn!("script run failed: {err}");
                    MSG_EXECUTION_UNREACHABLE.to_string()
                }
            };
            runtime.dispatch(DesktopAction::ShowNotification { message });
        }
    }

    /// Runs an editor window's current buffer.
    pub fn run_editor(&self, window_id: WindowId) -> LocalBoxFuture<'static, ()> {
        match self.editor_snapshot(window_id) {
            Some((_, content)) => self.run_source(content).boxed_local(),
            None => {
                logging::warn!("run ignored: window {} is not an editor", window_id.0);
                async {}.boxed_local()
            }
        }
    }

    /// Executes one reducer-emitted effect.
    pub fn execute(&self, effect: RuntimeEffect) -> LocalBoxFuture<'static, ()> {
        match effect {
            RuntimeEffect::RefreshDirectory => self.refresh_directory(true).boxed_local(),
            RuntimeEffect::CreateFile { name } => self.create_file(name).boxed_local(),
            RuntimeEffect::RenameFile { file_id, name } => {
                self.rename_file(file_id, name).boxed_local()
            }
            RuntimeEffect::DeleteFile { file_id } => self.delete_file(file_id).boxed_local(),
        }
    }

    fn queue_save(
        &self,
        file_id: FileId,
        name: Option<String>,
        content: String,
    ) -> impl Future<Output = ()> + 'static {
        let turn = self.inner.files.turn(&file_id);
        let runtime = self.clone();
        async move {
            let _turn = turn.await;
            let Some(name) = name.or_else(|| runtime.current_name(&file_id)) else {
                let err = DirectoryError::Referential(file_id.clone());
                runtime.report_failure(FileOperation::Save, Some(&file_id), err);
                return;
            };
            match runtime.inner.files.save(&file_id, &name, &content).await {
                Ok(()) => runtime.dispatch(DesktopAction::FileSaved {
                    file_id,
                    name,
                    content,
                }),
                Err(err) => runtime.report_failure(FileOperation::Save, Some(&file_id), err),
            }
        }
    }

    /// Name the store holds for `file_id` as far as this shell knows.
    fn current_name(&self, file_id: &FileId) -> Option<String> {
        self.with_state(|state| {
            state
                .directory
                .get(file_id)
                .map(|entry| entry.name.clone())
                .or_else(|| {
                    state
                        .editor_for(file_id)
                        .and_then(|window_id| state.window(window_id))
                        .map(|window| window.title.clone())
                })
        })
    }

    fn editor_snapshot(&self, window_id: WindowId) -> Option<(FileId, String)> {
        self.with_state(|state| {
            let window = state.window(window_id)?;
            match &window.content {
                WindowContent::Editor { file_id, content } => {
                    Some((file_id.clone(), content.clone()))
                }
                _ => None,
            }
        })
    }

    fn report_failure(&self, operation: FileOperation, target: Option<&FileId>, err: DirectoryError) {
        match target {
            Some(file_id) => {
                logging::warn!("file {} failed for {file_id}: {err}", operation.as_str())
            }
            None => logging::warn!("file {} failed: {err}", operation.as_str()),
        }
        if let Some(file_id) = err.missing_file() {
            self.dispatch(DesktopAction::FileEvicted {
                file_id: file_id.clone(),
            });
        }
        let message = match &err {
            DirectoryError::Validation(reason) => format!("Error: {reason}"),
            DirectoryError::Network(_) | DirectoryError::Referential(_) => {
                format!("Error: {err}\n{}", operation.failure_hint())
            }
        };
        self.dispatch(DesktopAction::ShowNotification { message });
    }
}
