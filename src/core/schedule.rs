use std::cell::{Cell, RefCell};

/// One-shot deferred work. The browser implementation wraps `setTimeout`;
/// `VirtualTimer` drives the same callbacks from a manual clock.
pub trait Timer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

struct Scheduled {
    due_ms: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Deterministic task queue with a manual clock.
///
/// Tasks run in due-time order, ties broken by scheduling order. A task may
/// schedule further tasks; those run within the same `advance` call if they
/// come due before its end.
#[derive(Default)]
pub struct VirtualTimer {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Scheduled>>,
}

impl VirtualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        while let Some(next) = self.pop_due(target) {
            self.now_ms.set(next.due_ms);
            (next.task)();
        }
        self.now_ms.set(target);
    }

    fn pop_due(&self, target: u64) -> Option<Scheduled> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= target)
            .min_by_key(|(_, s)| (s.due_ms, s.seq))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(idx))
    }
}

impl Timer for VirtualTimer {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Scheduled {
            due_ms: self.now_ms.get() + delay_ms as u64,
            seq,
            task,
        });
    }
}
