//! Cross-thread redraw-request marshaling.
//!
//! Widgets themselves never inspect thread identity. When state changes on a
//! non-rendering thread, the widget (or the host's slot connected to the
//! widget's signal) calls [`RedrawHandle::request`], and the rendering thread
//! drains the queue at the top of its frame loop with
//! [`RedrawQueue::take_pending`].
//!
//! Requests are coalesced: any number of requests between two drains results
//! in a single pending redraw.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Sending side of a redraw queue.
///
/// Cheap to clone and safe to use from any thread.
#[derive(Clone)]
pub struct RedrawHandle {
    sender: Sender<()>,
    pending: Arc<AtomicBool>,
}

impl RedrawHandle {
    /// Request a redraw.
    ///
    /// Multiple requests before the next drain are coalesced into one.
    pub fn request(&self) {
        // Only enqueue the first request of a batch; the flag is cleared on
        // drain.
        if !self.pending.swap(true, Ordering::AcqRel) {
            tracing::trace!(target: crate::logging::targets::REDRAW, "redraw requested");
            let _ = self.sender.send(());
        }
    }
}

impl std::fmt::Debug for RedrawHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawHandle")
            .field("pending", &self.pending.load(Ordering::Acquire))
            .finish()
    }
}

/// Receiving side of a redraw queue, owned by the rendering thread.
pub struct RedrawQueue {
    receiver: Receiver<()>,
    handle: RedrawHandle,
}

impl RedrawQueue {
    /// Create a queue and its first handle.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            receiver,
            handle: RedrawHandle {
                sender,
                pending: Arc::new(AtomicBool::new(false)),
            },
        }
    }

    /// Get a handle that can request redraws from any thread.
    pub fn handle(&self) -> RedrawHandle {
        self.handle.clone()
    }

    /// Drain the queue, returning `true` if at least one redraw was
    /// requested since the last drain.
    ///
    /// Never blocks.
    pub fn take_pending(&self) -> bool {
        let mut any = false;
        while self.receiver.try_recv().is_ok() {
            any = true;
        }
        self.handle.pending.store(false, Ordering::Release);
        any
    }
}

impl Default for RedrawQueue {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(RedrawHandle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_coalesced() {
        let queue = RedrawQueue::new();
        let handle = queue.handle();

        handle.request();
        handle.request();
        handle.request();

        assert!(queue.take_pending());
        assert!(!queue.take_pending());
    }

    #[test]
    fn request_from_another_thread() {
        let queue = RedrawQueue::new();
        let handle = queue.handle();

        let worker = std::thread::spawn(move || {
            handle.request();
        });
        worker.join().unwrap();

        assert!(queue.take_pending());
    }

    #[test]
    fn pending_resets_after_drain() {
        let queue = RedrawQueue::new();
        let handle = queue.handle();

        handle.request();
        assert!(queue.take_pending());

        handle.request();
        assert!(queue.take_pending());
    }
}
