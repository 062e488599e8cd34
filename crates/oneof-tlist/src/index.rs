use std::marker::PhantomData;

/// Index-witness: the head of the list.
#[derive(Debug, Clone, Copy)]
pub struct Here;

/// Index-witness: somewhere in the tail of the list, at `I`.
#[derive(Debug, Clone, Copy)]
pub struct There<I>(PhantomData<I>);

pub trait Witness {
    const INDEX: usize;
}

impl Witness for Here {
    const INDEX: usize = 0;
}
impl<I> Witness for There<I>
where
    I: Witness,
{
    const INDEX: usize = 1 + I::INDEX;
}
