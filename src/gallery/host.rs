//! The environment a [`GalleryController`](super::GalleryController) runs in:
//! a document it mutates and a scheduler that fires its deferred steps.

use std::time::Duration;

/// Delay between un-hiding an overlay and starting its fade/scale-in.
pub const OPEN_TICK: Duration = Duration::from_millis(10);

/// Length of the close transition; the overlay is fully hidden after it.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Handle returned by [`Document::listen`], required to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    TouchEnd,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    /// Process-wide subscription (keyboard).
    Window,
}

/// What the controller should do when a subscription fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Close,
    /// Closes only when the event target is the overlay root itself.
    Backdrop,
    Previous,
    Next,
    Indicator(usize),
    Keyboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub target: Target,
    pub kind: EventKind,
    pub handler: Handler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// An input event as delivered to [`GalleryController::handle`](super::GalleryController::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Innermost element the pointer event hit; `None` for key events.
    pub target: Option<NodeId>,
    pub key: Option<Key>,
}

impl Event {
    pub fn pointer(kind: EventKind, target: NodeId) -> Self {
        Event {
            kind,
            target: Some(target),
            key: None,
        }
    }

    pub fn key(key: Key) -> Self {
        Event {
            kind: EventKind::KeyDown,
            target: None,
            key: Some(key),
        }
    }
}

/// Element lookup, class/style mutation and event subscription.
///
/// Lookups return `Option`; a missing element is never an error here.
/// Mutating a stale `NodeId` is a silent no-op.
pub trait Document {
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Every descendant of `root` carrying `class`, in document order.
    fn query_all(&self, root: NodeId, class: &str) -> Vec<NodeId>;

    /// First descendant of `root` carrying `class`.
    fn query(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.query_all(root, class).into_iter().next()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Set an inline style property; an empty value removes it.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Inline style on the page body; an empty value removes it.
    fn set_body_style(&mut self, property: &str, value: &str);

    fn listen(&mut self, subscription: Subscription) -> ListenerId;

    /// Returns false when the id was not (or no longer) registered.
    fn unlisten(&mut self, id: ListenerId) -> bool;
}

/// A step the controller wants run later.
///
/// `epoch` identifies the open/close cycle that scheduled it; the controller
/// discards tasks from earlier cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    Reveal { epoch: u64 },
    FinishClose { epoch: u64 },
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: Deferred);
}

/// Virtual-clock scheduler. Nothing fires until [`advance`](Self::advance)
/// moves the clock past a task's due time.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, Deferred)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every task now due, earliest first.
    /// Tasks due at the same instant keep scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<Deferred> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, u64, Deferred)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, task)| task).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Deferred) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_map_to_bindings() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Other("a".to_string()));
    }

    #[test]
    fn manual_scheduler_fires_in_due_order() {
        let mut s = ManualScheduler::new();
        s.schedule(CLOSE_DELAY, Deferred::FinishClose { epoch: 1 });
        s.schedule(OPEN_TICK, Deferred::Reveal { epoch: 1 });

        assert!(s.advance(Duration::from_millis(5)).is_empty());
        assert_eq!(s.advance(Duration::from_millis(5)), vec![Deferred::Reveal { epoch: 1 }]);
        assert_eq!(s.pending(), 1);
        assert_eq!(
            s.advance(Duration::from_secs(1)),
            vec![Deferred::FinishClose { epoch: 1 }]
        );
        assert_eq!(s.pending(), 0);
        assert_eq!(s.now(), Duration::from_millis(1010));
    }
}
