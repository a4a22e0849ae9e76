//! Per-file FIFO serialization of remote file operations.
//!
//! Every open, save, rename and delete takes a [`FileTurn`] for its file id before issuing its
//! request and holds it until the result has been applied to desktop state. Turns on one id are
//! granted in the order [`FileOperationQueue::acquire`] was called; different ids never wait on
//! each other.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use platform_host::FileId;

struct Lane {
    holder: u64,
    waiting: VecDeque<(u64, oneshot::Sender<()>)>,
}

#[derive(Default)]
struct Lanes {
    next_ticket: u64,
    lanes: HashMap<FileId, Lane>,
}

#[derive(Clone, Default)]
/// Shared handle to the per-file queues of one runtime.
pub struct FileOperationQueue {
    inner: Rc<RefCell<Lanes>>,
}

impl FileOperationQueue {
    /// Enqueues a turn for `file_id`.
    ///
    /// The ticket is registered when this is called, not when the returned future is first
    /// polled, so the call order fixes the execution order. Dropping the future before it resolves
    /// leaves the queue without blocking later turns.
    pub fn acquire(&self, file_id: &FileId) -> impl Future<Output = FileTurn> + 'static {
        let mut guard = self.inner.borrow_mut();
        let lanes = &mut *guard;
        let ticket = lanes.next_ticket;
        lanes.next_ticket = lanes.next_ticket.wrapping_add(1);
        let granted = match lanes.lanes.get_mut(file_id) {
            Some(lane) => {
                let (tx, rx) = oneshot::channel();
                lane.waiting.push_back((ticket, tx));
                Some(rx)
            }
            None => {
                lanes.lanes.insert(
                    file_id.clone(),
                    Lane {
                        holder: ticket,
                        waiting: VecDeque::new(),
                    },
                );
                None
            }
        };
        drop(guard);

        let turn = FileTurn {
            queue: self.clone(),
            file_id: file_id.clone(),
            ticket,
        };
        async move {
            if let Some(rx) = granted {
                // The sender only goes away together with the lane, which cannot happen while
                // this ticket is still queued.
                let _ = rx.await;
            }
            turn
        }
    }

    /// Number of turns (running plus waiting) queued for `file_id`.
    pub fn pending(&self, file_id: &FileId) -> usize {
        self.inner
            .borrow()
            .lanes
            .get(file_id)
            .map_or(0, |lane| lane.waiting.len() + 1)
    }

    /// Returns `true` while any turn for `file_id` is running or waiting.
    pub fn is_busy(&self, file_id: &FileId) -> bool {
        self.pending(file_id) > 0
    }

    fn release(&self, file_id: &FileId, ticket: u64) {
        let mut guard = self.inner.borrow_mut();
        let lanes = &mut *guard;
        let Some(lane) = lanes.lanes.get_mut(file_id) else {
            return;
        };
        if lane.holder != ticket {
            lane.waiting.retain(|(waiting, _)| *waiting != ticket);
            return;
        }
        let vacant = loop {
            match lane.waiting.pop_front() {
                Some((next, tx)) => {
                    lane.holder = next;
                    if tx.send(()).is_ok() {
                        break false;
                    }
                }
                None => break true,
            }
        };
        if vacant {
            lanes.lanes.remove(file_id);
        }
    }
}

/// Exclusive right to operate on one file id. Dropping it hands the file to the next waiter.
pub struct FileTurn {
    queue: FileOperationQueue,
    file_id: FileId,
    ticket: u64,
}

impl FileTurn {
    /// File this turn was granted for.
    pub fn file_id(&self) -> &FileId {
        &self.file_id
    }
}

impl Drop for FileTurn {
    fn drop(&mut self) {
        self.queue.release(&self.file_id, self.ticket);
    }
}
