//! Subscriber lists backing the window and navigation stores.

/// Handle returned by the stores' `subscribe` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

type Listener<T> = Box<dyn Fn(&T)>;

/// Listeners notified synchronously, in registration order, after each store mutation.
pub(crate) struct Observers<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            listeners: Vec::new(),
        }
    }
}

impl<T> Observers<T> {
    pub(crate) fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(entry, _)| *entry != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&self, value: &T) {
        for (_, listener) in &self.listeners {
            listener(value);
        }
    }
}
