use std::marker::PhantomData;

use crate::Nothing;

/// The empty list.
#[derive(Debug, Clone, Copy)]
pub enum Nil {}

/// A list consisting of the head `H` followed by the list `T`.
pub struct Cons<H, T>(Nothing, PhantomData<fn() -> (H, T)>);

pub trait TypeList {
    const LEN: usize;

    /// The name of the type at the given position, `None` if the list is shorter than that.
    fn type_name_at(idx: usize) -> Option<&'static str>;

    fn type_names() -> Vec<&'static str> {
        (0..Self::LEN).filter_map(Self::type_name_at).collect()
    }
}

/// A list having at least one element.
///
/// [`Nil`] does not implement this trait, so that `Front<Nil>` is rejected by the compiler.
pub trait NonEmpty: TypeList {
    type Front;
    type PopFront: TypeList;
}

pub type Front<L> = <L as NonEmpty>::Front;
pub type PopFront<L> = <L as NonEmpty>::PopFront;

impl TypeList for Nil {
    const LEN: usize = 0;

    fn type_name_at(_idx: usize) -> Option<&'static str> {
        None
    }
}

impl<H, T> TypeList for Cons<H, T>
where
    T: TypeList,
{
    const LEN: usize = 1 + T::LEN;

    fn type_name_at(idx: usize) -> Option<&'static str> {
        match idx {
            0 => Some(std::any::type_name::<H>()),
            _ => T::type_name_at(idx - 1),
        }
    }
}

impl<H, T> NonEmpty for Cons<H, T>
where
    T: TypeList,
{
    type Front = H;
    type PopFront = T;
}
