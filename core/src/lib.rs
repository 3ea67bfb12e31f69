//! # Greeter Core
//!
//! `greeter-core` holds the greeting and accumulator logic, laid out with **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! * **[`domain`]**: Pure logic and models. No IO.
//!     * *Center of the Hexagon*.
//! * **[`application`]**: Services that run a use case and report its result through a port.
//!     * *Application Layer*.
//! * **[`ports`]**: Traits the application needs from the outside world.
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of the ports (writers, in-memory buffers).
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
