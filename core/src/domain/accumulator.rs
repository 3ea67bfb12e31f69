//! # Accumulator
//!
//! A holder for the result of the most recent addition.
//!
//! Despite the name, [`Accumulator::add`] **overwrites** the stored value with
//! `x + y`; it does not keep a running sum. `add(5, 3)` followed by `add(1, 1)`
//! leaves `2`, not `10`.
//!
//! `add` takes `&mut self`, so one owner mutates the value at a time. Sharing an
//! accumulator across threads needs an external lock such as a `Mutex`.

use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator<T = f64> {
    result: T,
}

impl<T> Accumulator<T>
where
    T: Add<Output = T> + Copy + Default,
{
    /// Creates an accumulator holding zero.
    pub fn new() -> Self {
        Self {
            result: T::default(),
        }
    }

    /// Stores `x + y`, replacing any earlier value, and returns it.
    ///
    /// Overflow follows the `+` operator of `T`.
    pub fn add(&mut self, x: T, y: T) -> T {
        self.result = x + y;
        self.result
    }

    pub fn result(&self) -> T {
        self.result
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
