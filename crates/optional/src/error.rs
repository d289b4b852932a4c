use thiserror::Error;

/// Failures reported by `Optional::of` and `Optional::get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// `Optional::of` was handed an absent value.
    #[error("value passed to Optional::of must not be absent")]
    IllegalArgument,
    /// `Optional::get` was called on an empty instance.
    #[error("no value present")]
    NoValuePresent,
}
