//! Per-frame scheduling.
//!
//! A host (the browser's `requestAnimationFrame`, or [`ManualFrames`] in
//! tests) calls back once per display refresh. An [`AnimationTask`] keeps an
//! [`Animator`] running on such a host until either the animator finishes or
//! the task handle is dropped.
//!
//! ## Ownership
//!
//! ```text
//! AnimationTask ──owns──► TaskSlot { pending frame, cancelled }
//!       │                     ▲
//!       │ drop: cancel        │ shared (Rc) with the queued callback
//!       ▼                     │
//!   FrameHost ◄──request──── callback ──► Animator::frame
//! ```
//!
//! Everything is single-threaded (`Rc<RefCell<_>>`); nothing here is `Send`.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use starfolio_shared::StarfolioResult;

/// Token identifying a queued frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Timestamps handed to a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Monotonic host timestamp in milliseconds (the rAF argument).
    pub timestamp_ms: f64,
    /// Wall-clock time in milliseconds since the Unix epoch.
    pub wall_clock_ms: f64,
}

impl FrameTime {
    /// Creates frame timestamps.
    #[must_use]
    pub const fn new(timestamp_ms: f64, wall_clock_ms: f64) -> Self {
        Self {
            timestamp_ms,
            wall_clock_ms,
        }
    }
}

/// Whether an animator wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Schedule the next frame.
    Continue,
    /// Stop; the animator reached its terminal state.
    Finish,
}

/// Something that advances once per display refresh.
pub trait Animator {
    /// Runs one frame.
    fn frame(&mut self, time: FrameTime) -> FrameControl;
}

/// One-shot frame callback.
pub type FrameCallback = Box<dyn FnOnce(FrameTime)>;

/// A display that calls back once per refresh.
pub trait FrameHost: Clone + 'static {
    /// Queues `callback` for the next refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the request.
    fn request_frame(&self, callback: FrameCallback) -> StarfolioResult<FrameId>;

    /// Drops a queued callback without running it. Unknown ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}

/// Bookkeeping shared between a task and its queued callback.
#[derive(Debug, Default)]
struct TaskSlot {
    /// Frame currently queued on the host.
    pending: Option<FrameId>,
    /// Set when the task handle is dropped.
    cancelled: bool,
    /// Set when the animator returned [`FrameControl::Finish`].
    finished: bool,
    /// Frames run so far.
    frames: u64,
}

/// An animator running on a host, owned by this handle.
///
/// Dropping the handle cancels the queued frame and releases every attached
/// resource (event listeners and the like). After that the animator is never
/// called again.
pub struct AnimationTask<H: FrameHost> {
    host: H,
    slot: Rc<RefCell<TaskSlot>>,
    /// Resources released together with the loop, in attach order.
    attachments: Vec<Box<dyn Any>>,
}

impl<H: FrameHost> AnimationTask<H> {
    /// Starts `animator` on `host`; the first frame runs on the next refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the first frame request.
    pub fn start<A: Animator + 'static>(host: H, animator: Rc<RefCell<A>>) -> StarfolioResult<Self> {
        let slot = Rc::new(RefCell::new(TaskSlot::default()));
        schedule(&host, &slot, animator)?;
        Ok(Self {
            host,
            slot,
            attachments: Vec::new(),
        })
    }

    /// Ties `resource` to the lifetime of this task.
    pub fn attach(&mut self, resource: impl Any) {
        self.attachments.push(Box::new(resource));
    }

    /// Returns true once the animator has reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.slot.borrow().finished
    }

    /// Returns true while a frame is queued on the host.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.slot.borrow().pending.is_some()
    }

    /// Number of frames the animator has run.
    #[must_use]
    pub fn frames_run(&self) -> u64 {
        self.slot.borrow().frames
    }
}

impl<H: FrameHost> Drop for AnimationTask<H> {
    fn drop(&mut self) {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            slot.cancelled = true;
            slot.pending.take()
        };
        if let Some(id) = pending {
            self.host.cancel_frame(id);
        }
        tracing::debug!(
            frames = self.slot.borrow().frames,
            attachments = self.attachments.len(),
            "animation task released"
        );
    }
}

fn schedule<H: FrameHost, A: Animator + 'static>(
    host: &H,
    slot: &Rc<RefCell<TaskSlot>>,
    animator: Rc<RefCell<A>>,
) -> StarfolioResult<()> {
    let next_host = host.clone();
    let next_slot = Rc::clone(slot);
    let id = host.request_frame(Box::new(move |time| {
        run_frame(&next_host, &next_slot, animator, time);
    }))?;
    slot.borrow_mut().pending = Some(id);
    Ok(())
}

fn run_frame<H: FrameHost, A: Animator + 'static>(
    host: &H,
    slot: &Rc<RefCell<TaskSlot>>,
    animator: Rc<RefCell<A>>,
    time: FrameTime,
) {
    {
        let mut state = slot.borrow_mut();
        state.pending = None;
        if state.cancelled || state.finished {
            return;
        }
    }

    let control = animator.borrow_mut().frame(time);
    slot.borrow_mut().frames += 1;

    match control {
        FrameControl::Continue => {
            if let Err(err) = schedule(host, slot, animator) {
                tracing::debug!(%err, "frame request refused, loop stopped");
                slot.borrow_mut().finished = true;
            }
        }
        FrameControl::Finish => {
            slot.borrow_mut().finished = true;
            tracing::debug!(frames = slot.borrow().frames, "animation finished");
        }
    }
}

/// Queue of pending callbacks.
#[derive(Default)]
struct ManualQueue {
    next_id: u64,
    pending: Vec<(FrameId, FrameCallback)>,
}

/// A host driven by hand: frames run only when [`ManualFrames::fire`] is
/// called. Used for headless rendering, tests and benchmarks.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualFrames {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next refresh.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Simulates one refresh: runs every callback queued before this call
    /// and returns how many ran. Callbacks queued while firing wait for the
    /// next refresh.
    pub fn fire(&self, time: FrameTime) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback(time);
        }
        count
    }
}

impl FrameHost for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) -> StarfolioResult<FrameId> {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let id = FrameId(queue.next_id);
        queue.pending.push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&self, id: FrameId) {
        self.queue.borrow_mut().pending.retain(|(queued, _)| *queued != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts frames and finishes after `limit`.
    struct Counter {
        frames: u32,
        limit: u32,
    }

    impl Animator for Counter {
        fn frame(&mut self, _time: FrameTime) -> FrameControl {
            self.frames += 1;
            if self.frames >= self.limit {
                FrameControl::Finish
            } else {
                FrameControl::Continue
            }
        }
    }

    struct DropFlag(Rc<RefCell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    #[test]
    fn test_task_runs_until_finish() {
        let host = ManualFrames::new();
        let counter = Rc::new(RefCell::new(Counter { frames: 0, limit: 3 }));
        let task = AnimationTask::start(host.clone(), Rc::clone(&counter)).unwrap();

        for i in 0..10 {
            host.fire(FrameTime::new(f64::from(i) * 16.0, 0.0));
        }

        assert_eq!(counter.borrow().frames, 3);
        assert!(task.is_finished());
        assert!(!task.is_scheduled());
        assert_eq!(host.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let host = ManualFrames::new();
        let counter = Rc::new(RefCell::new(Counter { frames: 0, limit: u32::MAX }));
        let task = AnimationTask::start(host.clone(), Rc::clone(&counter)).unwrap();

        host.fire(FrameTime::default());
        assert_eq!(host.pending(), 1);

        drop(task);
        assert_eq!(host.pending(), 0);
        assert_eq!(host.fire(FrameTime::default()), 0);
        assert_eq!(counter.borrow().frames, 1);
    }

    #[test]
    fn test_drop_releases_attachments() {
        let host = ManualFrames::new();
        let counter = Rc::new(RefCell::new(Counter { frames: 0, limit: 1 }));
        let released = Rc::new(RefCell::new(false));

        let mut task = AnimationTask::start(host, counter).unwrap();
        task.attach(DropFlag(Rc::clone(&released)));
        assert!(!*released.borrow());

        drop(task);
        assert!(*released.borrow());
    }
}
