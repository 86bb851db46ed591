// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed listener registry.

use std::fmt;

/// Handle returned by [`Emitter::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Listeners for one event type, called in registration order.
pub struct Emitter<E> {
    next_id: u64,
    listeners: Vec<(Subscription, Listener<E>)>,
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self { next_id: 0, listeners: Vec::new() }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").field("listeners", &self.listeners.len()).finish()
    }
}

impl<E> Emitter<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&E) + Send + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the handle was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Something that publishes events of one type.
pub trait EventEmitting {
    type Event;

    fn emitter(&mut self) -> &mut Emitter<Self::Event>;

    fn subscribe(&mut self, listener: impl FnMut(&Self::Event) + Send + 'static) -> Subscription {
        self.emitter().subscribe(listener)
    }

    fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.emitter().unsubscribe(subscription)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let (tx, rx) = mpsc::channel();
        let mut emitter = Emitter::<u32>::new();
        let first = tx.clone();
        emitter.subscribe(move |n| first.send(("first", *n)).unwrap());
        emitter.subscribe(move |n| tx.send(("second", *n)).unwrap());

        emitter.emit(&7);

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let (tx, rx) = mpsc::channel();
        let mut emitter = Emitter::<u32>::new();
        let handle = emitter.subscribe(move |n| tx.send(*n).unwrap());

        emitter.emit(&1);
        assert!(emitter.unsubscribe(handle));
        assert!(!emitter.unsubscribe(handle));
        emitter.emit(&2);

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(emitter.listener_count(), 0);
    }
}
