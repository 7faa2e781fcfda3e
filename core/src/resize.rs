//! Viewport change tracking.
//!
//! The window host feeds every viewport it sees into a [`ViewportObserver`];
//! only real size changes bump the redraw generation and reach subscribers.

use tracing::trace;

use crate::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub viewport: Viewport,
    pub previous: Option<Viewport>,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ViewportChange)>;

#[derive(Default)]
pub struct ViewportObserver {
    current: Option<Viewport>,
    generation: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Viewport> {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ViewportChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Records `viewport`. The first observation always counts as a change.
    pub fn observe(&mut self, viewport: Viewport) -> Option<ViewportChange> {
        if self.current == Some(viewport) {
            return None;
        }

        let previous = self.current.replace(viewport);
        self.generation += 1;
        let change = ViewportChange {
            viewport,
            previous,
            generation: self.generation,
        };
        trace!(
            width = viewport.width,
            height = viewport.height,
            generation = self.generation,
            "viewport changed"
        );

        for (_, callback) in self.subscribers.iter_mut() {
            callback(&change);
        }
        Some(change)
    }
}

impl std::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("current", &self.current)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
