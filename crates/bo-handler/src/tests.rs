//! Unit tests for bo-handler.

use bo_core::{BehaviorType, CoreError, HandlerKey, OrderingConfig, Priority, PriorityRange};

use crate::{Dispatcher, Handler, HandlerList, NoopDispatcher};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Subscribe(HandlerKey, Priority),
    Unsubscribe(HandlerKey),
}

/// Dispatcher that records every subscription change.
#[derive(Default)]
struct Recording {
    events: Vec<Event>,
}

impl Dispatcher for Recording {
    fn subscribe(&mut self, key: HandlerKey, _behavior: &BehaviorType, priority: Priority) {
        self.events.push(Event::Subscribe(key, priority));
    }

    fn unsubscribe(&mut self, key: HandlerKey) {
        self.events.push(Event::Unsubscribe(key));
    }
}

fn recording_list() -> HandlerList<Recording> {
    HandlerList::new("Article#1", Recording::default())
}

// ── Handler ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod handler_tests {
    use super::*;

    #[test]
    fn defaults_to_priority_zero_and_enabled() {
        let h = Handler::new("app::Timestamp");
        assert_eq!(h.priority(), 0);
        assert!(h.is_enabled());
        assert_eq!(h.behavior().short_name(), "Timestamp");
    }

    #[test]
    fn builders() {
        let h = Handler::new("app::Tree").with_priority(7).disabled();
        assert_eq!(h.priority(), 7);
        assert!(!h.is_enabled());
    }
}

// ── HandlerList membership ────────────────────────────────────────────────────

#[cfg(test)]
mod membership_tests {
    use super::*;

    #[test]
    fn push_allocates_unique_keys_and_subscribes_enabled() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").with_priority(3));
        let b = list.push(Handler::new("B").disabled());
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.dispatcher().events, vec![Event::Subscribe(a, 3)]);
    }

    #[test]
    fn keys_are_not_reused_after_remove() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A"));
        list.remove(a);
        let b = list.push(Handler::new("B"));
        assert_ne!(a, b);
        assert!(!list.contains(a));
    }

    #[test]
    fn remove_unsubscribes_and_keeps_order() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A"));
        let b = list.push(Handler::new("B"));
        let c = list.push(Handler::new("C"));
        let removed = list.remove(b).unwrap();
        assert_eq!(removed.behavior(), &BehaviorType::new("B"));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(list.dispatcher().events.last(), Some(&Event::Unsubscribe(b)));
        assert!(list.remove(b).is_none());
    }

    #[test]
    fn behaviors_and_contains_behavior() {
        let mut list = recording_list();
        list.push(Handler::new("x::A"));
        list.push(Handler::new("x::B"));
        assert!(list.contains_behavior(&BehaviorType::new("x::B")));
        assert!(!list.contains_behavior(&BehaviorType::new("x::C")));
        let names: Vec<&str> = list.behaviors().map(BehaviorType::short_name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn owner_and_range_come_from_construction() {
        let range = PriorityRange::new(0, 9).unwrap();
        let list = HandlerList::new("Post#4", NoopDispatcher::new(range));
        assert_eq!(list.owner(), "Post#4");
        assert_eq!(list.range(), range);
        assert!(list.is_empty());
    }

    #[test]
    fn noop_dispatcher_from_config() {
        let cfg = OrderingConfig { priority_min: -5, priority_max: 5 };
        let list = HandlerList::new("Post#5", NoopDispatcher::from_config(&cfg).unwrap());
        assert_eq!(list.range(), PriorityRange::new(-5, 5).unwrap());

        let inverted = OrderingConfig { priority_min: 5, priority_max: -5 };
        assert!(matches!(
            NoopDispatcher::from_config(&inverted),
            Err(CoreError::Config(_))
        ));
    }
}

// ── Sorting ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sort_tests {
    use super::*;

    #[test]
    fn sort_reorders_iteration_but_not_keys_or_priorities() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").with_priority(1));
        let b = list.push(Handler::new("B").with_priority(5));
        let c = list.push(Handler::new("C").with_priority(3));
        list.sort_by(|x, y| y.priority().cmp(&x.priority()));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![b, c, a]);
        assert_eq!(list.get(a).unwrap().priority(), 1);
        assert_eq!(list.get(b).unwrap().priority(), 5);
    }

    #[test]
    fn sort_is_stable_for_equal_priorities() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").with_priority(2));
        let b = list.push(Handler::new("B").with_priority(2));
        let c = list.push(Handler::new("C").with_priority(9));
        list.sort_by(|x, y| y.priority().cmp(&x.priority()));
        assert_eq!(list.keys().collect::<Vec<_>>(), vec![c, a, b]);
    }
}

// ── Subscription state ────────────────────────────────────────────────────────

#[cfg(test)]
mod subscription_tests {
    use super::*;

    #[test]
    fn enable_disable_are_idempotent() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").disabled());
        assert!(list.enable(a));
        assert!(list.enable(a));
        assert!(list.disable(a));
        assert!(list.disable(a));
        assert_eq!(
            list.dispatcher().events,
            vec![Event::Subscribe(a, 0), Event::Unsubscribe(a)]
        );
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut list = recording_list();
        assert!(!list.enable(HandlerKey(42)));
        assert!(!list.disable(HandlerKey(42)));
        assert!(!list.set_priority(HandlerKey(42), 1));
        assert!(list.with_detached(HandlerKey(42), |_| ()).is_none());
        assert!(list.dispatcher().events.is_empty());
    }

    #[test]
    fn with_detached_wraps_write_in_unsubscribe_subscribe() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").with_priority(1));
        list.dispatcher_mut().events.clear();

        let seen = list.with_detached(a, |h| {
            let enabled_inside = h.is_enabled();
            h.set_priority(8);
            enabled_inside
        });

        assert_eq!(seen, Some(false));
        assert_eq!(list.get(a).unwrap().priority(), 8);
        assert!(list.get(a).unwrap().is_enabled());
        assert_eq!(
            list.dispatcher().events,
            vec![Event::Unsubscribe(a), Event::Subscribe(a, 8)]
        );
    }

    #[test]
    fn with_detached_leaves_disabled_handler_disabled() {
        let mut list = recording_list();
        let a = list.push(Handler::new("A").disabled());
        assert!(list.set_priority(a, -4));
        let h = list.get(a).unwrap();
        assert_eq!(h.priority(), -4);
        assert!(!h.is_enabled());
        assert!(list.dispatcher().events.is_empty());
    }
}
