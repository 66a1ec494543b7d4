//! Change-notification events and the pub/sub mechanics that carry them.
//!
//! The inventory service publishes one event per successful mutation; the
//! presentation layer subscribes and re-renders when something arrives.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
