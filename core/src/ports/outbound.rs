//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the application* towards the outside world.
//!
//! ## Rules
//! 1. All items here must be `traits` (and the errors they return).
//! 2. No concrete implementations allowed.
//! 3. These traits are implemented in `adapters/outbound`.

pub mod message_sink;
