//! Cross-crate scenarios for `greeter-core`. Everything lives behind `cfg(test)`.

mod scenarios;
