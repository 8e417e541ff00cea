//! Pub/Sub event bus for decoupled component communication.
//!
//! Architecture:
//! - Components subscribe to event types with callbacks (immediate invocation)
//! - emit() invokes callbacks immediately AND queues for deferred processing
//! - poll() returns queued events for batch processing in the frame loop
//!
//! Callback order: FIFO (first-subscribed, first-called) within same event type.
//! Cross-type order undefined - don't rely on ordering between different event types.
//!
//! Widgets hold a cloned [`EventEmitter`] handle; the app owns the bus and
//! drains it once per frame.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use log::warn;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 256;

/// Marker trait for events. Events must be Send + Sync + 'static.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

// Blanket impl for all qualifying types
impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Type-erased callback
type Callback = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

/// Shared bus internals - one instance behind every bus/emitter handle.
struct Inner {
    subscribers: RwLock<HashMap<TypeId, Vec<Callback>>>,
    queue: Mutex<Vec<BoxedEvent>>,
}

impl Inner {
    fn dispatch<E: Event + Clone>(&self, event: E) {
        let type_id = TypeId::of::<E>();

        // Invoke immediate callbacks
        if let Some(cbs) = self
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&type_id)
        {
            for cb in cbs {
                cb(&event);
            }
        }

        // Queue for deferred processing with eviction
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict_count = queue.len() / 2;
            warn!(
                "EventBus queue full ({} events), evicting oldest {}",
                queue.len(),
                evict_count
            );
            queue.drain(0..evict_count);
        }
        queue.push(Box::new(event));
    }
}

/// Pub/Sub event bus with deferred processing support.
///
/// Two modes of operation:
/// 1. Immediate: subscribe() + emit() triggers callbacks instantly
/// 2. Deferred: emit() also queues events for poll() in the frame loop
///
/// Both modes work together - callbacks fire immediately, and events
/// are also available for batch processing via poll().
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                subscribers: RwLock::new(HashMap::new()),
                queue: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Subscribe to events of type E.
    ///
    /// Callback is invoked immediately when emit() is called.
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();
        let wrapped: Callback = Arc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                callback(event);
            }
        });
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(type_id)
            .or_default()
            .push(wrapped);
    }

    /// Emit event: invoke callbacks immediately AND queue for deferred processing.
    pub fn emit<E: Event + Clone>(&self, event: E) {
        self.inner.dispatch(event);
    }

    /// Poll all queued events for batch processing.
    ///
    /// Returns all events emitted since last poll.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.inner.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Get an emitter handle for passing to UI components.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Clear all subscribers and queue
    pub fn clear(&self) {
        self.inner
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.inner.queue.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Check queue length
    pub fn queue_len(&self) -> usize {
        self.inner.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Lightweight emitter handle for UI components.
///
/// Can be cloned and passed to widgets for emitting events.
#[derive(Clone)]
pub struct EventEmitter {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field(
                "subscriber_types",
                &self.inner.subscribers.read().map(|s| s.len()).unwrap_or(0),
            )
            .field(
                "queue_len",
                &self.inner.queue.lock().map(|q| q.len()).unwrap_or(0),
            )
            .finish()
    }
}

impl EventEmitter {
    /// Emit event: invoke callbacks and queue for deferred processing
    pub fn emit<E: Event + Clone>(&self, event: E) {
        self.inner.dispatch(event);
    }
}

/// Helper: downcast BoxedEvent to concrete type
///
/// IMPORTANT: Must explicitly deref to `dyn Event` before calling `as_any()`.
/// Without explicit deref, the blanket impl `Event for Box<dyn Event>` intercepts
/// the call and returns `&dyn Any` containing `Box<dyn Event>` instead of the
/// original type, causing downcast to always fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[derive(Clone, Debug)]
    struct DotClicked(i32);

    #[derive(Clone, Debug)]
    struct HintFaded;

    #[test]
    fn test_subscribe_emit_immediate() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicI32::new(0));
        let c = Arc::clone(&counter);

        bus.subscribe::<DotClicked, _>(move |e| {
            c.fetch_add(e.0, Ordering::SeqCst);
        });

        bus.emit(DotClicked(10));
        assert_eq!(counter.load(Ordering::SeqCst), 10);

        bus.emit(DotClicked(5));
        assert_eq!(counter.load(Ordering::SeqCst), 15);
    }

    #[test]
    fn test_emit_queues_for_poll() {
        let bus = EventBus::new();

        bus.emit(DotClicked(1));
        bus.emit(DotClicked(2));
        bus.emit(HintFaded);

        let events = bus.poll();
        assert_eq!(events.len(), 3);

        // Queue is empty after poll
        assert_eq!(bus.poll().len(), 0);
    }

    #[test]
    fn test_emitter_handle() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicI32::new(0));
        let c = Arc::clone(&counter);

        bus.subscribe::<DotClicked, _>(move |e| {
            c.fetch_add(e.0, Ordering::SeqCst);
        });

        let emitter = bus.emitter();
        emitter.emit(DotClicked(42));

        // Immediate callback was invoked
        assert_eq!(counter.load(Ordering::SeqCst), 42);

        // Event was also queued
        assert_eq!(bus.poll().len(), 1);
    }

    #[test]
    fn test_downcast() {
        let bus = EventBus::new();
        bus.emit(DotClicked(42));

        for ev in bus.poll() {
            if let Some(e) = downcast_event::<DotClicked>(&ev) {
                assert_eq!(e.0, 42);
            } else {
                panic!("expected DotClicked");
            }
        }
    }
}
