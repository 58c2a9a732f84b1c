//! Pass deferral policies and explicit reactive dependencies.
//!
//! A dirty instance never re-renders on the spot; it hands one flush job to
//! its [`Defer`] policy and ignores further wake-ups until that job runs.
//! The policy therefore decides what "one logical turn" means: [`Inline`]
//! runs the flush immediately (every mutation is its own turn),
//! [`ManualQueue`] holds jobs until pumped (all mutations between pumps
//! coalesce into one pass), and backends bring their own policy; the web
//! backend defers onto the host's microtask queue.

use core::cell::RefCell;
use core::fmt;
use std::collections::VecDeque;
use std::rc::Rc;

use nami::{Signal, watcher::BoxWatcherGuard};

/// Policy for running a deferred render flush.
pub trait Defer {
    /// Schedules `job` to run at the policy's next opportunity.
    fn defer(&self, job: Box<dyn FnOnce()>);
}

/// Runs every job immediately on the caller's stack.
///
/// Simple and allocation-free, but it makes every tracked mutation its own
/// render pass, and mutating tracked state from inside a hook or render
/// path will re-enter the instance. Use a queueing policy for those cases.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inline;

impl Defer for Inline {
    fn defer(&self, job: Box<dyn FnOnce()>) {
        job();
    }
}

/// Holds jobs until explicitly pumped.
///
/// Clones share one queue. Tests use this to model turn boundaries: mutate
/// as often as you like, then [`run_until_idle`](Self::run_until_idle) once.
#[derive(Default, Clone)]
pub struct ManualQueue {
    jobs: Rc<RefCell<VecDeque<Box<dyn FnOnce()>>>>,
}

impl ManualQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs currently waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.jobs.borrow().len()
    }

    /// Runs jobs until the queue is empty, including jobs enqueued while
    /// draining. Returns how many ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let job = self.jobs.borrow_mut().pop_front();
            match job {
                Some(job) => {
                    job();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl Defer for ManualQueue {
    fn defer(&self, job: Box<dyn FnOnce()>) {
        self.jobs.borrow_mut().push_back(job);
    }
}

impl fmt::Debug for ManualQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// A reactive dependency registered explicitly with the scheduler.
///
/// The runtime always subscribes to an instance's props store; any other
/// state a render path reads has to be declared: factories call
/// [`Scope::track`](crate::Scope::track), class bodies return these from
/// [`Component::tracked`](crate::Component::tracked). Subscription happens
/// once, before the first pass, and ends when the instance is disposed and
/// drops the guard.
pub struct Dependency {
    subscribe: Box<dyn Fn(Rc<dyn Fn()>) -> BoxWatcherGuard>,
}

impl Dependency {
    /// Declares `signal` as a render dependency.
    pub fn on<S>(signal: &S) -> Self
    where
        S: Signal + Clone + 'static,
        S::Output: 'static,
        S::Guard: 'static,
    {
        let signal = signal.clone();
        Self {
            subscribe: Box::new(move |invalidate| {
                Box::new(signal.watch(move |_context| (invalidate)()))
            }),
        }
    }

    pub(crate) fn subscribe(&self, invalidate: Rc<dyn Fn()>) -> BoxWatcherGuard {
        (self.subscribe)(invalidate)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dependency")
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::rc::Rc;

    use nami::binding;

    use super::{Defer, Dependency, Inline, ManualQueue};

    #[test]
    fn inline_runs_immediately() {
        let hit = Rc::new(Cell::new(false));
        let probe = Rc::clone(&hit);
        Inline.defer(Box::new(move || probe.set(true)));
        assert!(hit.get());
    }

    #[test]
    fn manual_queue_holds_jobs_until_pumped() {
        let queue = ManualQueue::new();
        let hits = Rc::new(Cell::new(0usize));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            queue.defer(Box::new(move || hits.set(hits.get() + 1)));
        }
        assert_eq!(hits.get(), 0);
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_until_idle(), 3);
        assert_eq!(hits.get(), 3);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn dependency_subscription_ends_when_guard_drops() {
        let count = binding(0);
        let dependency = Dependency::on(&count);
        let hits = Rc::new(Cell::new(0usize));
        let guard = dependency.subscribe({
            let hits = Rc::clone(&hits);
            Rc::new(move || hits.set(hits.get() + 1))
        });

        count.set(1);
        assert_eq!(hits.get(), 1);

        drop(guard);
        count.set(2);
        assert_eq!(hits.get(), 1);
    }
}
