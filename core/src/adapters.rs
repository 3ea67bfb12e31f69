//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`].
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic.

pub mod outbound;
