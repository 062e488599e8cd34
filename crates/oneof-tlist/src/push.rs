use crate::list::{Cons, Nil, TypeList};

pub trait PushFront<X>: TypeList {
    type Output: TypeList;
}

pub trait PushBack<X>: TypeList {
    type Output: TypeList;
}

impl<L, X> PushFront<X> for L
where
    L: TypeList,
{
    type Output = Cons<X, L>;
}

impl<X> PushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<H, T, X> PushBack<X> for Cons<H, T>
where
    T: PushBack<X>,
{
    type Output = Cons<H, <T as PushBack<X>>::Output>;
}
