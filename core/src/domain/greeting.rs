use std::fmt::Display;

/// Builds the greeting for `name`.
///
/// Anything printable is accepted; the name is inserted as-is, so an empty
/// name yields `"Hello, !"`.
pub fn compose(name: impl Display) -> String {
    format!("Hello, {name}!")
}
