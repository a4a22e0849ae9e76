//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use futures::future::join_all;

use crate::runtime::DesktopRuntime;

/// Drains the runtime's effect queue until it stays empty.
///
/// Effects of one batch run concurrently, but they are started in emission order, so operations
/// on the same file still take their turns in that order.
pub async fn drain(runtime: DesktopRuntime) {
    loop {
        let queued = runtime.take_effects();
        if queued.is_empty() {
            return;
        }
        let running: Vec<_> = queued
            .into_iter()
            .map(|effect| runtime.execute(effect))
            .collect();
        join_all(running).await;
    }
}
