use crate::index::{Here, There};
use crate::list::{Cons, TypeList};

/// The list contains `X` at the position named by the witness `I`.
///
/// The witness is normally left to the compiler to infer (`_`). A type that is not in the list
/// has no witness, so asking for its index does not compile.
///
/// If `X` occurs in the list more than once, there is more than one witness and the inference is
/// ambiguous: the caller has to name the slot explicitly (`Here` for the first occurrence,
/// `There<Here>` for the second, and so on).
pub trait IndexOf<X, I>: TypeList {
    const INDEX: usize;
}

impl<X, T> IndexOf<X, Here> for Cons<X, T>
where
    T: TypeList,
{
    const INDEX: usize = 0;
}

impl<X, H, T, I> IndexOf<X, There<I>> for Cons<H, T>
where
    T: IndexOf<X, I>,
{
    const INDEX: usize = 1 + T::INDEX;
}

pub const fn index_of<L, X, I>() -> usize
where
    L: IndexOf<X, I>,
{
    L::INDEX
}
