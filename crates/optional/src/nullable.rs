use alloc::borrow::{Cow, ToOwned};
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::{Range, RangeInclusive};
use core::ptr::NonNull;
use core::time::Duration;

/// A value that may represent absence.
///
/// This is the gate every `Optional` passes through on the way in: `of`,
/// `of_nullable` and `map` all hand their input to `into_present` and build a
/// present or empty instance from the answer. Types with a natural "nothing"
/// (`Option`, raw pointers) report it as `None`; ordinary values are always
/// present and hand themselves back.
///
/// Primitives, strings, tuples up to twelve elements, references, smart
/// pointers and the `alloc` collections are all implemented. A concrete type
/// of your own opts in with [`impl_present!`](crate::impl_present). Generic
/// code cannot name a `Nullable` bound for an arbitrary `T`, so wrap the value
/// in `Some` instead:
///
/// ```
/// use optional::Optional;
///
/// fn wrap<T>(value: T) -> Optional<T> {
///     Optional::from(Some(value))
/// }
///
/// struct Unlisted;
/// let held = wrap(Unlisted);
/// assert!(held.is_present());
///
/// // The same applies to a mapper returning a type without an impl.
/// let unlisted = Optional::of(1).unwrap().map(|_| Some(Unlisted));
/// assert!(unlisted.is_present());
/// ```
pub trait Nullable {
    /// The payload stored in a present `Optional`.
    type Value;

    /// Returns the payload, or `None` if `self` is absent.
    fn into_present(self) -> Option<Self::Value>;
}

/// Implements [`Nullable`] for types whose values are never absent.
///
/// ```
/// struct Meters(u32);
/// optional::impl_present!(Meters);
///
/// let len = optional::Optional::of(Meters(3)).unwrap();
/// assert!(len.is_present());
/// ```
#[macro_export]
macro_rules! impl_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                type Value = $ty;

                #[inline]
                fn into_present(self) -> ::core::option::Option<$ty> {
                    ::core::option::Option::Some(self)
                }
            }
        )+
    };
}

impl_present!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, (), String,
    Duration, Ordering,
);

macro_rules! impl_present_generic {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Nullable for $ty {
                type Value = $ty;

                #[inline]
                fn into_present(self) -> Option<$ty> {
                    Some(self)
                }
            }
        )+
    };
}

impl_present_generic!(
    ['a, B: ToOwned + ?Sized] Cow<'a, B>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
    [T] BinaryHeap<T>,
    [T] LinkedList<T>,
    [T] VecDeque<T>,
    [T: ?Sized] PhantomData<T>,
    [T] Range<T>,
    [T] RangeInclusive<T>,
);

macro_rules! impl_present_tuple {
    ($(($($name:ident),+))+) => {
        $(
            impl<$($name),+> Nullable for ($($name,)+) {
                type Value = ($($name,)+);

                #[inline]
                fn into_present(self) -> Option<Self::Value> {
                    Some(self)
                }
            }
        )+
    };
}

impl_present_tuple! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

// Raw pointers: null is absent

impl<T: ?Sized> Nullable for *const T {
    type Value = *const T;

    #[inline]
    fn into_present(self) -> Option<*const T> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = *mut T;

    #[inline]
    fn into_present(self) -> Option<*mut T> {
        if self.is_null() { None } else { Some(self) }
    }
}

// Owning and borrowing wrappers are always present

impl<'a, T: ?Sized> Nullable for &'a T {
    type Value = &'a T;

    #[inline]
    fn into_present(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Nullable for &'a mut T {
    type Value = &'a mut T;

    #[inline]
    fn into_present(self) -> Option<&'a mut T> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    type Value = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Box<T> {
    type Value = Box<T>;

    #[inline]
    fn into_present(self) -> Option<Box<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Rc<T> {
    type Value = Rc<T>;

    #[inline]
    fn into_present(self) -> Option<Rc<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Nullable for Arc<T> {
    type Value = Arc<T>;

    #[inline]
    fn into_present(self) -> Option<Arc<T>> {
        Some(self)
    }
}

impl<T> Nullable for Vec<T> {
    type Value = Vec<T>;

    #[inline]
    fn into_present(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    type Value = [T; N];

    #[inline]
    fn into_present(self) -> Option<[T; N]> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Nullable;
    use alloc::borrow::Cow;
    use alloc::collections::{BTreeMap, VecDeque};
    use core::time::Duration;
    use alloc::string::String;
    use alloc::vec;
    use core::ptr;

    #[test]
    fn option_reports_none_as_absent() {
        assert_eq!(Some(7u8).into_present(), Some(7));
        assert_eq!(None::<u8>.into_present(), None);
    }

    #[test]
    fn null_pointers_are_absent() {
        assert!(ptr::null::<u32>().into_present().is_none());
        assert!(ptr::null_mut::<u32>().into_present().is_none());

        let mut slot = 9u32;
        let p: *mut u32 = &mut slot;
        assert_eq!(p.into_present(), Some(p));
        assert_eq!((p as *const u32).into_present(), Some(p as *const u32));
    }

    #[test]
    fn plain_values_are_always_present() {
        assert_eq!(0i32.into_present(), Some(0));
        assert_eq!(false.into_present(), Some(false));
        assert_eq!(String::new().into_present(), Some(String::new()));
        assert_eq!(vec![1, 2].into_present(), Some(vec![1, 2]));
        assert_eq!([0u8; 3].into_present(), Some([0u8; 3]));
        assert!(f64::NAN.into_present().is_some());
    }

    #[test]
    fn tuples_and_collections_are_present() {
        assert_eq!((1u8, 'x').into_present(), Some((1u8, 'x')));
        assert_eq!((None::<u8>,).into_present(), Some((None,)));
        assert_eq!(
            (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12).into_present(),
            Some((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12))
        );

        let cow: Cow<'_, str> = Cow::Borrowed("abc");
        assert_eq!(cow.into_present(), Some(Cow::Borrowed("abc")));
        assert!(BTreeMap::<u8, u8>::new().into_present().is_some());
        assert!(VecDeque::<u8>::new().into_present().is_some());
        assert_eq!(Duration::ZERO.into_present(), Some(Duration::ZERO));
        assert_eq!((0..3).into_present(), Some(0..3));
    }

    #[test]
    fn nested_option_keeps_inner_none_as_payload() {
        let nested: Option<Option<u8>> = Some(None);
        assert_eq!(nested.into_present(), Some(None));
    }
}
