use std::any::TypeId;

use crate::list::{Cons, Nil, TypeList};

/// Type-identity lookup over a list of `'static` types.
///
/// Unlike [`IndexOf`](crate::IndexOf), the lookup happens at run-time and is not troubled by
/// duplicates: the list is scanned from the front and the first matching position wins.
pub trait TypeIds: TypeList {
    fn type_id_at(idx: usize) -> Option<TypeId>;
    fn position_of_id(type_id: TypeId) -> Option<usize>;

    fn position_of<X>() -> Option<usize>
    where
        X: ?Sized + 'static,
    {
        Self::position_of_id(TypeId::of::<X>())
    }
}

impl TypeIds for Nil {
    fn type_id_at(_idx: usize) -> Option<TypeId> {
        None
    }
    fn position_of_id(_type_id: TypeId) -> Option<usize> {
        None
    }
}

impl<H, T> TypeIds for Cons<H, T>
where
    H: 'static,
    T: TypeIds,
{
    fn type_id_at(idx: usize) -> Option<TypeId> {
        match idx {
            0 => Some(TypeId::of::<H>()),
            _ => T::type_id_at(idx - 1),
        }
    }

    fn position_of_id(type_id: TypeId) -> Option<usize> {
        if type_id == TypeId::of::<H>() {
            Some(0)
        } else {
            T::position_of_id(type_id).map(|pos| pos + 1)
        }
    }
}

/// The position of the first occurrence of `X` in the list `L`, `None` if `X` is not listed.
///
/// Unlike [`index_of`](crate::index_of), works for a type listed more than once.
pub fn first_index_of<L, X>() -> Option<usize>
where
    L: TypeIds,
    X: ?Sized + 'static,
{
    L::position_of::<X>()
}
