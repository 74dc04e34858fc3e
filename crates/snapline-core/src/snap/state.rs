//! Active snap slot and change notification.

use super::guides::{DistanceGuideline, DistanceMarker, Guideline};
use kurbo::Point;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

// Use web-time on WASM, std::time otherwise
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// Outcome of the latest movement tick that produced at least one guide.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSnap {
    pub guidelines: Vec<Guideline>,
    pub distance_guidelines: Vec<DistanceGuideline>,
    pub distance_markers: Vec<DistanceMarker>,
    /// Position proposed by the host for this tick.
    pub snap_point: Point,
    /// Corrected position returned to the host.
    pub target_point: Point,
    pub timestamp: Instant,
}

impl ActiveSnap {
    /// Check whether consumers should treat this snap as stale.
    pub fn is_expired(&self, now: Instant, snap_duration: Duration) -> bool {
        now.saturating_duration_since(self.timestamp) > snap_duration
    }

    pub fn has_guides(&self) -> bool {
        !self.guidelines.is_empty() || !self.distance_guidelines.is_empty()
    }
}

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(Option<&ActiveSnap>)>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: HashMap<ListenerId, Listener>,
}

impl ListenerRegistry {
    fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Registered listeners in registration order.
    fn snapshot(&self) -> Vec<Listener> {
        let mut entries: Vec<_> = self.listeners.iter().collect();
        entries.sort_by_key(|(id, _)| **id);
        entries.into_iter().map(|(_, l)| Rc::clone(l)).collect()
    }
}

/// Cloneable handle to the listener list.
///
/// The list is snapshotted before every notification pass, so listeners may
/// subscribe or unsubscribe through this handle from inside a callback. A
/// listener removed mid-pass still receives the current notification.
#[derive(Clone, Default)]
pub struct SnapNotifier {
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl SnapNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives `Some` with the new snap, or `None`
    /// when the engine goes idle.
    pub fn subscribe(&self, listener: impl Fn(Option<&ActiveSnap>) + 'static) -> Subscription {
        let id = self.registry.borrow_mut().insert(Rc::new(listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.registry.borrow_mut().listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub(crate) fn notify(&self, snap: Option<&ActiveSnap>) {
        let listeners = self.registry.borrow().snapshot();
        for listener in listeners {
            listener(snap);
        }
    }
}

impl std::fmt::Debug for SnapNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Returned by `subscribe`; call [`Subscription::unsubscribe`] to stop
/// receiving notifications. Dropping it keeps the listener registered.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<ListenerRegistry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns false if already removed or the engine is gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = registry.borrow_mut().listeners.remove(&self.id);
        removed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::guides::{GuideColor, Orientation};
    use std::cell::Cell;

    fn snap_at(timestamp: Instant) -> ActiveSnap {
        ActiveSnap {
            guidelines: Vec::new(),
            distance_guidelines: Vec::new(),
            distance_markers: Vec::new(),
            snap_point: Point::ZERO,
            target_point: Point::ZERO,
            timestamp,
        }
    }

    #[test]
    fn test_expiry() {
        let start = Instant::now();
        let snap = snap_at(start);
        let duration = Duration::from_millis(100);
        assert!(!snap.is_expired(start, duration));
        assert!(!snap.is_expired(start + Duration::from_millis(100), duration));
        assert!(snap.is_expired(start + Duration::from_millis(101), duration));
    }

    #[test]
    fn test_has_guides() {
        let mut snap = snap_at(Instant::now());
        assert!(!snap.has_guides());
        snap.guidelines
            .push(Guideline::new(Orientation::Vertical, 10.0, GuideColor::new(0, 0, 0, 255), true));
        assert!(snap.has_guides());
    }

    #[test]
    fn test_notify_in_registration_order() {
        let notifier = SnapNotifier::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for n in 0..4 {
            let log = Rc::clone(&log);
            notifier.subscribe(move |_| log.borrow_mut().push(n));
        }
        notifier.notify(None);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = SnapNotifier::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = notifier.subscribe(move |_| counter.set(counter.get() + 1));

        notifier.notify(None);
        let id = subscription.id();
        assert!(subscription.unsubscribe());
        assert!(!notifier.unsubscribe(id));
        notifier.notify(None);
        assert_eq!(calls.get(), 1);
        assert_eq!(notifier.listener_count(), 0);
    }

    #[test]
    fn test_subscribe_from_inside_callback() {
        let notifier = SnapNotifier::new();
        let late_calls = Rc::new(Cell::new(0));

        let handle = notifier.clone();
        let late = Rc::clone(&late_calls);
        notifier.subscribe(move |_| {
            let late = Rc::clone(&late);
            handle.subscribe(move |_| late.set(late.get() + 1));
        });

        // New listener is not part of the running pass.
        notifier.notify(None);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(notifier.listener_count(), 2);

        notifier.notify(None);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_unsubscribe_self_inside_callback() {
        let notifier = SnapNotifier::new();
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<ListenerId>>> = Rc::new(RefCell::new(None));

        let handle = notifier.clone();
        let own_id = Rc::clone(&slot);
        let counter = Rc::clone(&calls);
        let subscription = notifier.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let Some(id) = *own_id.borrow() {
                handle.unsubscribe(id);
            }
        });
        *slot.borrow_mut() = Some(subscription.id());

        notifier.notify(None);
        notifier.notify(None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_outlives_notifier() {
        let notifier = SnapNotifier::new();
        let subscription = notifier.subscribe(|_| {});
        drop(notifier);
        assert!(!subscription.unsubscribe());
    }
}
