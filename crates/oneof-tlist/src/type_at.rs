use crate::index::{Here, There};
use crate::list::{Cons, TypeList};
use crate::position::PosIndex;

pub trait TypeAt<I>: TypeList {
    type Output;
}

/// The type at the position `N` of the list `L`.
pub type Nth<L, const N: usize> = <L as TypeAt<PosIndex<N>>>::Output;

impl<H, T> TypeAt<Here> for Cons<H, T>
where
    T: TypeList,
{
    type Output = H;
}

impl<H, T, I> TypeAt<There<I>> for Cons<H, T>
where
    T: TypeAt<I>,
{
    type Output = <T as TypeAt<I>>::Output;
}
