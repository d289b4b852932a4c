use crate::error::OptionalError;
use crate::nullable::Nullable;

#[derive(Debug, Clone, Copy)]
enum Slot<T> {
    Present(T),
    Empty,
}

/// An immutable container holding either exactly one value or nothing.
///
/// Instances are only built through [`Optional::of`],
/// [`Optional::of_nullable`] and [`Optional::empty`] (or the `From<Option<T>>`
/// conversion, which follows the `of_nullable` rule). Every operation consumes
/// the receiver and hands back a new instance or the same one unchanged, so an
/// `Optional` is never modified in place.
#[derive(Debug, Clone, Copy)]
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// Wraps a value that the caller guarantees is not absent.
    ///
    /// Returns `OptionalError::IllegalArgument` if `value` is absent (a `None`
    /// or a null pointer).
    pub fn of<N>(value: N) -> Result<Self, OptionalError>
    where
        N: Nullable<Value = T>,
    {
        match value.into_present() {
            Some(val) => Ok(Self::present(val)),
            None => {
                log::debug!("rejected absent value in Optional::of");
                Err(OptionalError::IllegalArgument)
            }
        }
    }

    /// Wraps a value that may be absent. Absent values give an empty instance.
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match value.into_present() {
            Some(val) => Self::present(val),
            None => Self::empty(),
        }
    }

    /// The empty instance.
    pub const fn empty() -> Self {
        Optional { slot: Slot::Empty }
    }

    fn present(val: T) -> Self {
        Optional {
            slot: Slot::Present(val),
        }
    }

    /// Returns true if a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Returns true if no value is held.
    pub fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    /// Returns the held value, or `OptionalError::NoValuePresent` when empty.
    ///
    /// Prefer [`or_else`](Self::or_else), [`or_else_get`](Self::or_else_get)
    /// or [`or_else_throw`](Self::or_else_throw) where emptiness is expected.
    pub fn get(self) -> Result<T, OptionalError> {
        match self.slot {
            Slot::Present(val) => Ok(val),
            Slot::Empty => {
                log::debug!("Optional::get called on an empty instance");
                Err(OptionalError::NoValuePresent)
            }
        }
    }

    /// Returns the held value or `other`.
    ///
    /// `other` is an ordinary argument, so it is evaluated before the call
    /// whether or not a value is held. Use [`or_else_get`](Self::or_else_get)
    /// to compute the fallback only when needed.
    pub fn or_else(self, other: T) -> T {
        match self.slot {
            Slot::Present(val) => val,
            Slot::Empty => other,
        }
    }

    /// Returns the held value, or calls `supplier` and returns its result.
    /// `supplier` is not called when a value is held.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.slot {
            Slot::Present(val) => val,
            Slot::Empty => supplier(),
        }
    }

    /// Returns the held value, or `Err` with whatever `error_supplier`
    /// produces. The error is passed through untouched.
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.slot {
            Slot::Present(val) => Ok(val),
            Slot::Empty => Err(error_supplier()),
        }
    }

    /// Returns the held value, panicking with `msg` when empty.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.slot {
            Slot::Present(val) => val,
            Slot::Empty => panic!("{}", msg),
        }
    }

    /// Calls `action` with the held value, if any, and returns `self` so that
    /// [`if_empty`](Self::if_empty) can follow in the same expression.
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Slot::Present(val) = &self.slot {
            action(val);
        }
        self
    }

    /// Calls `action` when empty and returns `self`.
    pub fn if_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    /// Applies `mapper` to the held value.
    ///
    /// The result goes through the same rule as [`of_nullable`](Self::of_nullable):
    /// an absent result gives an empty instance. On an empty instance `mapper`
    /// is never called, so a chain of `map`s stops at the first empty result.
    ///
    /// A mapper producing a type without a [`Nullable`] impl (a generic `U`,
    /// say) can return `Some(u)` instead.
    pub fn map<N, F>(self, mapper: F) -> Optional<N::Value>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self.slot {
            Slot::Present(val) => Optional::of_nullable(mapper(val)),
            Slot::Empty => Optional::empty(),
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self.slot {
            Slot::Present(val) => predicate(val),
            Slot::Empty => true,
        };
        if keep { self } else { Self::empty() }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match &self.slot {
            Slot::Present(val) => Optional::present(val),
            Slot::Empty => Optional::empty(),
        }
    }

    /// Converts into a plain `Option<T>`.
    pub fn into_option(self) -> Option<T> {
        match self.slot {
            Slot::Present(val) => Some(val),
            Slot::Empty => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
